//! Verifier configuration resolver.
//!
//! Maps the form draft onto the canonical verifier the API stores:
//!
//! 1. Custom providers get their fixed HMAC header, hash and encoding written
//!    into the draft (`apply_provider_defaults`). This runs on every submit, so
//!    stale manual edits to those fields are overwritten.
//! 2. The draft is checked (`is_valid` / `validate`).
//! 3. `resolve` collapses custom providers to `hmac`, keeps the provider name
//!    as a label, and carries over only the payload group of the canonical type.

use log::debug;

use crate::model::source::{
    CanonicalVerifierType, Provider, ResolvedVerifier, SourceDraft, SourceSubmission,
    VerifierConfig, VerifierType,
};

use super::ValidationError;

/// True iff `verifier_type` is exactly one of `github`, `twitter`, `shopify`.
pub fn classify_provider(verifier_type: &str) -> bool {
    verifier_type.parse::<Provider>().is_ok()
}

/// Writes the selected provider's preset into the hmac payload. The secret is
/// left alone. Does nothing for non-provider verifier types.
pub fn apply_provider_defaults(draft: &mut SourceDraft) {
    let Some(provider) = draft.verifier.verifier_type.and_then(VerifierType::provider) else {
        return;
    };

    let preset = provider.preset();
    let hmac = &mut draft.verifier.hmac;
    hmac.encoding = Some(preset.encoding);
    hmac.header = preset.header.to_string();
    hmac.hash = Some(preset.hash);
    debug!("applied {provider} signature preset ({})", preset.header);
}

/// Resolves the draft's verifier. Callers gate on [`is_valid`] first; an
/// unselected verifier type resolves to `noop`.
pub fn resolve(draft: &mut SourceDraft) -> ResolvedVerifier {
    let provider = draft.verifier.verifier_type.and_then(VerifierType::provider);
    if provider.is_some() {
        apply_provider_defaults(draft);
    }

    let verifier = &draft.verifier;
    let config = match verifier.verifier_type.map(VerifierType::canonical) {
        Some(CanonicalVerifierType::Hmac) => VerifierConfig::Hmac(verifier.hmac.clone()),
        Some(CanonicalVerifierType::BasicAuth) => {
            VerifierConfig::BasicAuth(verifier.basic_auth.clone())
        }
        Some(CanonicalVerifierType::ApiKey) => VerifierConfig::ApiKey(verifier.api_key.clone()),
        Some(CanonicalVerifierType::Noop) | None => VerifierConfig::Noop,
    };

    ResolvedVerifier { provider, config }
}

/// Checks the draft and reports the first rule it breaks.
pub fn validate(draft: &SourceDraft) -> Result<(), ValidationError> {
    if draft.name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if draft.source_class.is_none() {
        return Err(ValidationError::MissingSourceClass);
    }
    let Some(verifier_type) = draft.verifier.verifier_type else {
        return Err(ValidationError::MissingVerifierType);
    };

    let verifier = &draft.verifier;
    let canonical = verifier_type.canonical();
    let complete = match canonical {
        CanonicalVerifierType::Noop => true,
        CanonicalVerifierType::ApiKey => verifier.api_key.is_complete(),
        CanonicalVerifierType::BasicAuth => verifier.basic_auth.is_complete(),
        CanonicalVerifierType::Hmac => verifier.hmac.is_complete(),
    };

    if complete {
        Ok(())
    } else {
        Err(ValidationError::IncompleteVerifier(canonical))
    }
}

pub fn is_valid(draft: &SourceDraft) -> bool {
    validate(draft).is_ok()
}

impl SourceDraft {
    /// Builds the create/update request body: applies provider defaults,
    /// validates, then resolves. Only the active payload ends up in the body.
    pub fn prepare_submission(&mut self) -> Result<SourceSubmission, ValidationError> {
        apply_provider_defaults(self);
        validate(self)?;

        let source_class = self.source_class.ok_or(ValidationError::MissingSourceClass)?;
        let resolved = resolve(self);

        Ok(SourceSubmission {
            name: self.name.clone(),
            source_class,
            is_disabled: self.is_disabled,
            provider: resolved.provider,
            verifier: resolved.config,
        })
    }

    pub fn is_valid(&self) -> bool {
        is_valid(self)
    }
}

impl SourceSubmission {
    /// Server-side check of an incoming body, mirroring the form rules.
    /// Provider sources must be hmac sources carrying the provider's preset.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        if let Some(provider) = self.provider {
            let VerifierConfig::Hmac(hmac) = &self.verifier else {
                return Err(ValidationError::ProviderMismatch(provider));
            };
            let preset = provider.preset();
            if hmac.encoding != Some(preset.encoding)
                || hmac.header != preset.header
                || hmac.hash != Some(preset.hash)
            {
                return Err(ValidationError::ProviderMismatch(provider));
            }
        }

        if self.verifier.is_complete() {
            Ok(())
        } else {
            Err(ValidationError::IncompleteVerifier(
                self.verifier.canonical_type(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::source::{
        ApiKeyConfig, BasicAuthConfig, Encoding, HashAlgorithm, HmacConfig, SourceClass,
    };

    fn draft(verifier_type: VerifierType) -> SourceDraft {
        let mut draft = SourceDraft {
            name: "n".into(),
            source_class: Some(SourceClass::Http),
            ..SourceDraft::default()
        };
        draft.verifier.verifier_type = Some(verifier_type);
        draft
    }

    fn hmac(secret: &str) -> HmacConfig {
        HmacConfig {
            secret: secret.into(),
            ..HmacConfig::default()
        }
    }

    #[test]
    fn classify_provider_matches_the_closed_set_exactly() {
        for provider in ["github", "twitter", "shopify"] {
            assert!(classify_provider(provider), "{provider}");
        }
        for other in ["hmac", "noop", "api_key", "basic_auth", "GitHub", "github_enterprise", ""] {
            assert!(!classify_provider(other), "{other}");
        }
    }

    #[test]
    fn provider_presets_overwrite_stale_fields() {
        let cases = [
            (VerifierType::Github, Encoding::Hex, "X-Hub-Signature-256"),
            (VerifierType::Shopify, Encoding::Base64, "X-Shopify-Hmac-SHA256"),
            (VerifierType::Twitter, Encoding::Base64, "X-Twitter-Webhooks-Signature"),
        ];

        for (verifier_type, encoding, header) in cases {
            let stale_encoding = match encoding {
                Encoding::Hex => Encoding::Base64,
                Encoding::Base64 => Encoding::Hex,
            };
            let mut draft = draft(verifier_type);
            draft.verifier.hmac = HmacConfig {
                secret: "s".into(),
                header: "X-Stale".into(),
                hash: Some(HashAlgorithm::Md5),
                encoding: Some(stale_encoding),
            };

            let resolved = resolve(&mut draft);
            assert_eq!(resolved.canonical_type(), CanonicalVerifierType::Hmac);
            assert_eq!(resolved.provider_label(), verifier_type.as_str());
            assert_eq!(
                resolved.config,
                VerifierConfig::Hmac(HmacConfig {
                    secret: "s".into(),
                    header: header.into(),
                    hash: Some(HashAlgorithm::Sha256),
                    encoding: Some(encoding),
                })
            );
        }
    }

    #[test]
    fn applying_defaults_twice_is_a_no_op() {
        let mut once = draft(VerifierType::Shopify);
        once.verifier.hmac = hmac("secret");
        apply_provider_defaults(&mut once);

        let mut twice = once.clone();
        apply_provider_defaults(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn defaults_leave_non_provider_drafts_alone() {
        let mut draft = draft(VerifierType::Hmac);
        draft.verifier.hmac = hmac("s");
        let before = draft.clone();
        apply_provider_defaults(&mut draft);
        assert_eq!(draft, before);
    }

    #[test]
    fn empty_name_is_invalid_whatever_the_verifier() {
        let mut draft = draft(VerifierType::Noop);
        draft.name.clear();
        assert!(!is_valid(&draft));
        assert_eq!(validate(&draft), Err(ValidationError::MissingName));
    }

    #[test]
    fn missing_source_class_or_verifier_type_is_invalid() {
        let mut no_class = draft(VerifierType::Noop);
        no_class.source_class = None;
        assert_eq!(validate(&no_class), Err(ValidationError::MissingSourceClass));

        let mut no_type = draft(VerifierType::Noop);
        no_type.verifier.verifier_type = None;
        assert_eq!(validate(&no_type), Err(ValidationError::MissingVerifierType));
    }

    #[test]
    fn noop_is_valid_unconditionally() {
        assert!(is_valid(&draft(VerifierType::Noop)));
    }

    #[test]
    fn api_key_draft_resolves_to_its_payload() {
        let mut draft = draft(VerifierType::ApiKey);
        draft.verifier.api_key = ApiKeyConfig {
            header_name: "X-Key".into(),
            header_value: "v".into(),
        };
        draft.verifier.hmac = hmac("ignored");

        assert!(is_valid(&draft));
        let resolved = resolve(&mut draft);
        assert_eq!(resolved.canonical_type(), CanonicalVerifierType::ApiKey);
        assert_eq!(resolved.provider_label(), "");
        assert_eq!(
            resolved.config,
            VerifierConfig::ApiKey(ApiKeyConfig {
                header_name: "X-Key".into(),
                header_value: "v".into(),
            })
        );
    }

    #[test]
    fn github_draft_is_valid_once_defaults_are_injected() {
        let mut draft = draft(VerifierType::Github);
        draft.verifier.hmac = hmac("s");
        assert!(!is_valid(&draft));

        apply_provider_defaults(&mut draft);
        assert!(is_valid(&draft));

        let resolved = resolve(&mut draft);
        assert_eq!(resolved.provider, Some(Provider::Github));
        assert_eq!(
            resolved.config,
            VerifierConfig::Hmac(HmacConfig {
                secret: "s".into(),
                header: "X-Hub-Signature-256".into(),
                hash: Some(HashAlgorithm::Sha256),
                encoding: Some(Encoding::Hex),
            })
        );
    }

    #[test]
    fn basic_auth_needs_both_credentials() {
        let mut draft = draft(VerifierType::BasicAuth);
        draft.verifier.basic_auth = BasicAuthConfig {
            username: String::new(),
            password: "p".into(),
        };
        assert!(!is_valid(&draft));
        assert_eq!(
            validate(&draft),
            Err(ValidationError::IncompleteVerifier(CanonicalVerifierType::BasicAuth))
        );

        draft.verifier.basic_auth.username = "u".into();
        assert!(is_valid(&draft));
    }

    #[test]
    fn provider_without_secret_stays_invalid() {
        let mut draft = draft(VerifierType::Twitter);
        apply_provider_defaults(&mut draft);
        assert!(!is_valid(&draft));
    }

    #[test]
    fn prepared_submission_carries_only_the_active_payload() {
        let mut draft = draft(VerifierType::Github);
        draft.verifier.hmac = hmac("s");
        draft.verifier.api_key = ApiKeyConfig {
            header_name: "X-Leftover".into(),
            header_value: "1".into(),
        };

        let submission = draft.prepare_submission().unwrap();
        let body = serde_json::to_value(&submission).unwrap();

        assert_eq!(body["provider"], "github");
        assert_eq!(body["verifier"]["type"], "hmac");
        assert_eq!(body["verifier"]["hmac"]["header"], "X-Hub-Signature-256");
        assert!(body["verifier"].get("api_key").is_none());
        assert!(body["verifier"].get("basic_auth").is_none());
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn prepared_submission_reports_why_a_draft_is_rejected() {
        let mut draft = draft(VerifierType::Hmac);
        draft.verifier.hmac = hmac("s");
        assert_eq!(
            draft.prepare_submission(),
            Err(ValidationError::IncompleteVerifier(CanonicalVerifierType::Hmac))
        );
    }

    #[test]
    fn submissions_with_a_tampered_provider_preset_are_rejected() {
        let mut draft = draft(VerifierType::Shopify);
        draft.verifier.hmac = hmac("s");
        let mut submission = draft.prepare_submission().unwrap();

        if let VerifierConfig::Hmac(hmac) = &mut submission.verifier {
            hmac.header = "X-Other".into();
        }
        assert_eq!(
            submission.validate(),
            Err(ValidationError::ProviderMismatch(Provider::Shopify))
        );

        submission.verifier = VerifierConfig::Noop;
        assert_eq!(
            submission.validate(),
            Err(ValidationError::ProviderMismatch(Provider::Shopify))
        );
    }
}
