//! Load and submit flows of the source form, independent of the transport.

use log::info;

use crate::api::{ApiError, SourceApi};
use crate::model::source::{SourceDraft, SourceRecord};

use super::ValidationError;
use super::resolver::apply_provider_defaults;

/// Whether the form creates a new source or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(String),
}

impl FormMode {
    /// Update mode when the current route carries a source id, create mode otherwise.
    pub fn from_route_id(route_id: Option<&str>) -> Self {
        match route_id.map(str::trim) {
            Some(id) if !id.is_empty() => FormMode::Update(id.to_string()),
            _ => FormMode::Create,
        }
    }

    pub fn source_id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Update(id) => Some(id.as_str()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::Create => "create",
            FormMode::Update(_) => "update",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The draft is not submittable; the form should mark every field touched.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The request failed; the draft is kept so the user can retry.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Fetches a stored source and hydrates the update form with it.
///
/// Provider sources get their preset re-applied, so a record stored with
/// blank signature settings opens as a submittable form.
pub async fn load_draft<A: SourceApi>(api: &A, source_id: &str) -> Result<SourceDraft, ApiError> {
    let record = api.fetch_source(source_id).await?;
    let mut draft = SourceDraft::from_record(&record);
    apply_provider_defaults(&mut draft);
    Ok(draft)
}

/// Prepares the draft and sends it as a create or update request.
///
/// Invalid drafts never reach the API. On failure the draft keeps its contents
/// (including any provider defaults written during preparation).
pub async fn submit<A: SourceApi>(
    api: &A,
    mode: &FormMode,
    draft: &mut SourceDraft,
) -> Result<SourceRecord, SubmitError> {
    let submission = draft.prepare_submission()?;

    let record = match mode {
        FormMode::Create => api.create_source(&submission).await?,
        FormMode::Update(source_id) => api.update_source(source_id, &submission).await?,
    };

    info!("{} source {} ({})", mode.as_str(), record.uid, record.name);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::source::{
        ApiKeyConfig, Encoding, HashAlgorithm, HmacConfig, Provider, SourceClass,
        SourceSubmission, VerifierConfig, VerifierType,
    };
    use crate::source::is_valid;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeSourceApi {
        stored: RefCell<Vec<SourceRecord>>,
        calls: RefCell<Vec<String>>,
        fail_with: Option<ApiError>,
    }

    impl FakeSourceApi {
        fn failing(error: ApiError) -> Self {
            Self {
                fail_with: Some(error),
                ..Self::default()
            }
        }

        fn record(uid: &str, submission: &SourceSubmission) -> SourceRecord {
            SourceRecord {
                uid: uid.to_string(),
                name: submission.name.clone(),
                source_class: submission.source_class,
                is_disabled: submission.is_disabled,
                provider: submission.provider,
                verifier: submission.verifier.clone(),
                mask_id: format!("mask-{uid}"),
            }
        }
    }

    impl SourceApi for FakeSourceApi {
        async fn fetch_source(&self, source_id: &str) -> Result<SourceRecord, ApiError> {
            self.calls.borrow_mut().push(format!("fetch {source_id}"));
            self.stored
                .borrow()
                .iter()
                .find(|record| record.uid == source_id)
                .cloned()
                .ok_or(ApiError::NotFound)
        }

        async fn create_source(
            &self,
            submission: &SourceSubmission,
        ) -> Result<SourceRecord, ApiError> {
            self.calls.borrow_mut().push("create".to_string());
            if let Some(error) = &self.fail_with {
                return Err(error.clone());
            }
            let record = Self::record("src-new", submission);
            self.stored.borrow_mut().push(record.clone());
            Ok(record)
        }

        async fn update_source(
            &self,
            source_id: &str,
            submission: &SourceSubmission,
        ) -> Result<SourceRecord, ApiError> {
            self.calls.borrow_mut().push(format!("update {source_id}"));
            if let Some(error) = &self.fail_with {
                return Err(error.clone());
            }
            Ok(Self::record(source_id, submission))
        }
    }

    fn api_key_draft() -> SourceDraft {
        let mut draft = SourceDraft {
            name: "orders".into(),
            source_class: Some(SourceClass::Http),
            ..SourceDraft::default()
        };
        draft.verifier.verifier_type = Some(VerifierType::ApiKey);
        draft.verifier.api_key = ApiKeyConfig {
            header_name: "X-Key".into(),
            header_value: "v".into(),
        };
        draft
    }

    #[test]
    fn route_id_selects_the_form_mode() {
        assert_eq!(FormMode::from_route_id(None), FormMode::Create);
        assert_eq!(FormMode::from_route_id(Some("  ")), FormMode::Create);
        assert_eq!(
            FormMode::from_route_id(Some("src-1")),
            FormMode::Update("src-1".into())
        );
        assert_eq!(FormMode::Update("src-1".into()).source_id(), Some("src-1"));
    }

    #[tokio::test]
    async fn create_mode_posts_the_resolved_submission() {
        let api = FakeSourceApi::default();
        let mut draft = api_key_draft();

        let record = submit(&api, &FormMode::Create, &mut draft).await.unwrap();
        assert_eq!(record.uid, "src-new");
        assert_eq!(
            record.verifier,
            VerifierConfig::ApiKey(ApiKeyConfig {
                header_name: "X-Key".into(),
                header_value: "v".into(),
            })
        );
        assert_eq!(*api.calls.borrow(), ["create"]);
    }

    #[tokio::test]
    async fn update_mode_targets_the_route_source() {
        let api = FakeSourceApi::default();
        let mut draft = api_key_draft();

        let record = submit(&api, &FormMode::Update("src-9".into()), &mut draft)
            .await
            .unwrap();
        assert_eq!(record.uid, "src-9");
        assert_eq!(*api.calls.borrow(), ["update src-9"]);
    }

    #[tokio::test]
    async fn invalid_drafts_never_reach_the_api() {
        let api = FakeSourceApi::default();
        let mut draft = api_key_draft();
        draft.verifier.api_key.header_value.clear();

        let err = submit(&api, &FormMode::Create, &mut draft).await.unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)));
        assert!(api.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn failed_requests_keep_the_draft() {
        let api = FakeSourceApi::failing(ApiError::Network("offline".into()));
        let mut draft = api_key_draft();
        let before = draft.clone();

        let err = submit(&api, &FormMode::Create, &mut draft).await.unwrap_err();
        assert_eq!(err, SubmitError::Api(ApiError::Network("offline".into())));
        assert_eq!(draft, before);
    }

    #[tokio::test]
    async fn load_draft_round_trips_a_provider_source() {
        let api = FakeSourceApi::default();
        let mut draft = api_key_draft();
        draft.verifier.verifier_type = Some(VerifierType::Github);
        draft.verifier.hmac.secret = "s".into();
        let created = submit(&api, &FormMode::Create, &mut draft).await.unwrap();

        let loaded = load_draft(&api, &created.uid).await.unwrap();
        assert_eq!(loaded.verifier.verifier_type, Some(VerifierType::Github));
        assert_eq!(loaded.verifier.hmac, draft.verifier.hmac);

        assert_eq!(load_draft(&api, "missing").await, Err(ApiError::NotFound));
    }

    #[tokio::test]
    async fn load_draft_fills_blank_provider_settings() {
        let api = FakeSourceApi::default();
        api.stored.borrow_mut().push(SourceRecord {
            uid: "src-gh".into(),
            name: "github".into(),
            source_class: SourceClass::Http,
            is_disabled: false,
            provider: Some(Provider::Github),
            verifier: VerifierConfig::Hmac(HmacConfig {
                secret: "s3cret".into(),
                ..HmacConfig::default()
            }),
            mask_id: "m".into(),
        });

        let draft = load_draft(&api, "src-gh").await.unwrap();
        assert!(is_valid(&draft));
        assert_eq!(draft.verifier.hmac.secret, "s3cret");
        assert_eq!(draft.verifier.hmac.header, "X-Hub-Signature-256");
        assert_eq!(draft.verifier.hmac.hash, Some(HashAlgorithm::Sha256));
        assert_eq!(draft.verifier.hmac.encoding, Some(Encoding::Hex));
    }
}
