//! Source records, the in-progress form draft, and the verifier sum type.
//!
//! A source is a webhook ingestion endpoint. Incoming requests are checked by
//! its verifier: nothing (`noop`), an HMAC signature, basic auth or an API key
//! header. The custom providers (`github`, `twitter`, `shopify`) are HMAC
//! verifiers whose header, hash and encoding are fixed by the provider.
//!
//! The form keeps every payload group alive at once (`VerifierDraft`); what
//! goes over the wire is the `VerifierConfig` enum, which can only carry the
//! payload of its own variant.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::wire_enum;

wire_enum! {
    /// Where a source receives its events from.
    pub enum SourceClass as "source type" {
        Http => "http",
        PubSub => "pub_sub",
        DbChangeStream => "db_change_stream",
    }
}

impl SourceClass {
    pub fn label(self) -> &'static str {
        match self {
            SourceClass::Http => "Ingestion HTTP",
            SourceClass::PubSub => "Pub/Sub (Coming Soon)",
            SourceClass::DbChangeStream => "DB Change Stream (Coming Soon)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SourceClass::Http => "Trigger webhook event from a thirdparty webhook event",
            SourceClass::PubSub => "Trigger webhook event from your Pub/Sub messaging system",
            SourceClass::DbChangeStream => "Trigger webhook event from your DB change stream",
        }
    }
}

wire_enum! {
    /// The verifier a user picks in the form, custom providers included.
    pub enum VerifierType as "verifier type" {
        Noop => "noop",
        Hmac => "hmac",
        BasicAuth => "basic_auth",
        ApiKey => "api_key",
        Github => "github",
        Twitter => "twitter",
        Shopify => "shopify",
    }
}

impl VerifierType {
    pub fn label(self) -> &'static str {
        match self {
            VerifierType::Noop => "None",
            VerifierType::Hmac => "HMAC",
            VerifierType::BasicAuth => "Basic Auth",
            VerifierType::ApiKey => "API Key",
            VerifierType::Github => "Github",
            VerifierType::Twitter => "Twitter",
            VerifierType::Shopify => "Shopify",
        }
    }

    /// The custom provider this type stands for, if any.
    pub fn provider(self) -> Option<Provider> {
        match self {
            VerifierType::Github => Some(Provider::Github),
            VerifierType::Twitter => Some(Provider::Twitter),
            VerifierType::Shopify => Some(Provider::Shopify),
            _ => None,
        }
    }

    /// The verifier type that is actually stored. Custom providers collapse to `hmac`.
    pub fn canonical(self) -> CanonicalVerifierType {
        match self {
            VerifierType::Noop => CanonicalVerifierType::Noop,
            VerifierType::BasicAuth => CanonicalVerifierType::BasicAuth,
            VerifierType::ApiKey => CanonicalVerifierType::ApiKey,
            VerifierType::Hmac
            | VerifierType::Github
            | VerifierType::Twitter
            | VerifierType::Shopify => CanonicalVerifierType::Hmac,
        }
    }
}

wire_enum! {
    /// Verifier types that exist on a stored source.
    pub enum CanonicalVerifierType as "verifier type" {
        Noop => "noop",
        Hmac => "hmac",
        BasicAuth => "basic_auth",
        ApiKey => "api_key",
    }
}

impl From<CanonicalVerifierType> for VerifierType {
    fn from(value: CanonicalVerifierType) -> Self {
        match value {
            CanonicalVerifierType::Noop => VerifierType::Noop,
            CanonicalVerifierType::Hmac => VerifierType::Hmac,
            CanonicalVerifierType::BasicAuth => VerifierType::BasicAuth,
            CanonicalVerifierType::ApiKey => VerifierType::ApiKey,
        }
    }
}

wire_enum! {
    /// Third-party webhook senders with a fixed HMAC signature scheme.
    pub enum Provider as "provider" {
        Github => "github",
        Twitter => "twitter",
        Shopify => "shopify",
    }
}

/// The HMAC fields a provider dictates. The secret always comes from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderPreset {
    pub encoding: Encoding,
    pub header: &'static str,
    pub hash: HashAlgorithm,
}

impl Provider {
    pub fn preset(self) -> ProviderPreset {
        match self {
            Provider::Github => ProviderPreset {
                encoding: Encoding::Hex,
                header: "X-Hub-Signature-256",
                hash: HashAlgorithm::Sha256,
            },
            Provider::Shopify => ProviderPreset {
                encoding: Encoding::Base64,
                header: "X-Shopify-Hmac-SHA256",
                hash: HashAlgorithm::Sha256,
            },
            Provider::Twitter => ProviderPreset {
                encoding: Encoding::Base64,
                header: "X-Twitter-Webhooks-Signature",
                hash: HashAlgorithm::Sha256,
            },
        }
    }
}

impl From<Provider> for VerifierType {
    fn from(value: Provider) -> Self {
        match value {
            Provider::Github => VerifierType::Github,
            Provider::Twitter => VerifierType::Twitter,
            Provider::Shopify => VerifierType::Shopify,
        }
    }
}

wire_enum! {
    pub enum HashAlgorithm as "hash algorithm" {
        Sha256 => "SHA256",
        Sha512 => "SHA512",
        Md5 => "MD5",
        Sha1 => "SHA1",
        Sha224 => "SHA224",
        Sha384 => "SHA384",
        Sha3_224 => "SHA3_224",
        Sha3_256 => "SHA3_256",
        Sha3_384 => "SHA3_384",
        Sha3_512 => "SHA3_512",
        Sha512_256 => "SHA512_256",
        Sha512_224 => "SHA512_224",
    }
}

wire_enum! {
    /// How the signature digest is written into the header.
    pub enum Encoding as "encoding" {
        Base64 => "base64",
        Hex => "hex",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyConfig {
    #[serde(default)]
    pub header_name: String,
    #[serde(default)]
    pub header_value: String,
}

impl ApiKeyConfig {
    pub fn is_complete(&self) -> bool {
        !self.header_name.is_empty() && !self.header_value.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuthConfig {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl BasicAuthConfig {
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// HMAC signature settings. An unset select (`""` on the wire) is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmacConfig {
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub header: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub hash: Option<HashAlgorithm>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub encoding: Option<Encoding>,
}

impl HmacConfig {
    pub fn is_complete(&self) -> bool {
        !self.secret.is_empty()
            && !self.header.is_empty()
            && self.hash.is_some()
            && self.encoding.is_some()
    }
}

/// Form state of the verifier section. Every payload group is always present;
/// `verifier_type` decides which one means anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifierDraft {
    pub verifier_type: Option<VerifierType>,
    pub api_key: ApiKeyConfig,
    pub basic_auth: BasicAuthConfig,
    pub hmac: HmacConfig,
}

/// Form state of a source being created or edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDraft {
    pub name: String,
    pub is_disabled: bool,
    pub source_class: Option<SourceClass>,
    pub verifier: VerifierDraft,
}

impl Default for SourceDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            is_disabled: true,
            source_class: None,
            verifier: VerifierDraft::default(),
        }
    }
}

impl SourceDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrates a draft from a stored source for the update form.
    ///
    /// The stored verifier fills its own payload group. A source created for a
    /// custom provider is stored as `hmac`, so the provider is put back as the
    /// selected verifier type.
    pub fn from_record(record: &SourceRecord) -> Self {
        let mut verifier = VerifierDraft {
            verifier_type: Some(match record.provider {
                Some(provider) => provider.into(),
                None => record.verifier.canonical_type().into(),
            }),
            ..VerifierDraft::default()
        };

        match &record.verifier {
            VerifierConfig::Noop => {}
            VerifierConfig::Hmac(hmac) => verifier.hmac = hmac.clone(),
            VerifierConfig::BasicAuth(basic_auth) => verifier.basic_auth = basic_auth.clone(),
            VerifierConfig::ApiKey(api_key) => verifier.api_key = api_key.clone(),
        }

        Self {
            name: record.name.clone(),
            is_disabled: record.is_disabled,
            source_class: Some(record.source_class),
            verifier,
        }
    }
}

/// A verifier as stored and transmitted: only the active payload exists.
///
/// Serialized as `{"type": "<canonical type>", "<canonical type>": {..}}`;
/// `noop` has no payload object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "VerifierWire", try_from = "VerifierWire")]
pub enum VerifierConfig {
    Noop,
    Hmac(HmacConfig),
    BasicAuth(BasicAuthConfig),
    ApiKey(ApiKeyConfig),
}

impl VerifierConfig {
    pub fn canonical_type(&self) -> CanonicalVerifierType {
        match self {
            VerifierConfig::Noop => CanonicalVerifierType::Noop,
            VerifierConfig::Hmac(_) => CanonicalVerifierType::Hmac,
            VerifierConfig::BasicAuth(_) => CanonicalVerifierType::BasicAuth,
            VerifierConfig::ApiKey(_) => CanonicalVerifierType::ApiKey,
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            VerifierConfig::Noop => true,
            VerifierConfig::Hmac(hmac) => hmac.is_complete(),
            VerifierConfig::BasicAuth(basic_auth) => basic_auth.is_complete(),
            VerifierConfig::ApiKey(api_key) => api_key.is_complete(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct VerifierWire {
    #[serde(rename = "type")]
    verifier_type: CanonicalVerifierType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hmac: Option<HmacConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    basic_auth: Option<BasicAuthConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<ApiKeyConfig>,
}

impl From<VerifierConfig> for VerifierWire {
    fn from(value: VerifierConfig) -> Self {
        let mut wire = VerifierWire {
            verifier_type: value.canonical_type(),
            hmac: None,
            basic_auth: None,
            api_key: None,
        };
        match value {
            VerifierConfig::Noop => {}
            VerifierConfig::Hmac(hmac) => wire.hmac = Some(hmac),
            VerifierConfig::BasicAuth(basic_auth) => wire.basic_auth = Some(basic_auth),
            VerifierConfig::ApiKey(api_key) => wire.api_key = Some(api_key),
        }
        wire
    }
}

/// The verifier type named a payload group that the message does not contain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("verifier of type `{0}` has no `{0}` configuration")]
pub struct MissingPayload(pub CanonicalVerifierType);

impl TryFrom<VerifierWire> for VerifierConfig {
    type Error = MissingPayload;

    fn try_from(wire: VerifierWire) -> Result<Self, Self::Error> {
        let missing = MissingPayload(wire.verifier_type);
        match wire.verifier_type {
            CanonicalVerifierType::Noop => Ok(VerifierConfig::Noop),
            CanonicalVerifierType::Hmac => wire.hmac.map(VerifierConfig::Hmac).ok_or(missing),
            CanonicalVerifierType::BasicAuth => {
                wire.basic_auth.map(VerifierConfig::BasicAuth).ok_or(missing)
            }
            CanonicalVerifierType::ApiKey => wire.api_key.map(VerifierConfig::ApiKey).ok_or(missing),
        }
    }
}

/// Output of the resolver: the canonical verifier plus the provider it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVerifier {
    pub provider: Option<Provider>,
    pub config: VerifierConfig,
}

impl ResolvedVerifier {
    pub fn canonical_type(&self) -> CanonicalVerifierType {
        self.config.canonical_type()
    }

    /// The provider name, or an empty string for non-provider verifiers.
    pub fn provider_label(&self) -> &'static str {
        self.provider.map(Provider::as_str).unwrap_or("")
    }
}

/// Request body of the create and update source calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSubmission {
    pub name: String,
    #[serde(rename = "type")]
    pub source_class: SourceClass,
    pub is_disabled: bool,
    #[serde(default, with = "provider_field")]
    pub provider: Option<Provider>,
    pub verifier: VerifierConfig,
}

/// A persisted source as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub uid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub source_class: SourceClass,
    pub is_disabled: bool,
    #[serde(default, with = "provider_field")]
    pub provider: Option<Provider>,
    pub verifier: VerifierConfig,
    /// Public path segment the source receives webhooks on.
    #[serde(default)]
    pub mask_id: String,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(D::Error::custom),
    }
}

/// `provider` travels as a plain string that is empty for non-provider sources.
mod provider_field {
    use serde::{Deserializer, Serializer};

    use super::Provider;

    pub fn serialize<S: Serializer>(
        provider: &Option<Provider>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(provider.map(Provider::as_str).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Provider>, D::Error> {
        super::empty_as_none(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hash_algorithms_use_upper_case_wire_names() {
        assert_eq!(HashAlgorithm::Sha512_224.as_str(), "SHA512_224");
        assert_eq!(
            serde_json::to_value(HashAlgorithm::Sha3_256).unwrap(),
            json!("SHA3_256")
        );
        assert_eq!("MD5".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Md5);
        assert!("sha256".parse::<HashAlgorithm>().is_err());
        assert_eq!(HashAlgorithm::ALL.len(), 12);
    }

    #[test]
    fn verifier_config_serializes_only_the_active_payload() {
        let config = VerifierConfig::ApiKey(ApiKeyConfig {
            header_name: "X-Key".into(),
            header_value: "v".into(),
        });

        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "type": "api_key",
                "api_key": { "header_name": "X-Key", "header_value": "v" }
            })
        );
        assert_eq!(
            serde_json::to_value(VerifierConfig::Noop).unwrap(),
            json!({ "type": "noop" })
        );
    }

    #[test]
    fn verifier_config_rejects_a_missing_payload() {
        let err = serde_json::from_value::<VerifierConfig>(json!({ "type": "basic_auth" }))
            .unwrap_err();
        assert!(err.to_string().contains("basic_auth"));
    }

    #[test]
    fn verifier_config_ignores_inactive_payload_groups() {
        let config: VerifierConfig = serde_json::from_value(json!({
            "type": "hmac",
            "hmac": { "secret": "s", "header": "X-Sig", "hash": "SHA512", "encoding": "hex" },
            "api_key": { "header_name": "", "header_value": "" },
            "basic_auth": null
        }))
        .unwrap();

        assert_eq!(
            config,
            VerifierConfig::Hmac(HmacConfig {
                secret: "s".into(),
                header: "X-Sig".into(),
                hash: Some(HashAlgorithm::Sha512),
                encoding: Some(Encoding::Hex),
            })
        );
    }

    #[test]
    fn blank_hmac_selects_deserialize_as_unset() {
        let hmac: HmacConfig = serde_json::from_value(json!({
            "secret": "s", "header": "", "hash": "", "encoding": null
        }))
        .unwrap();

        assert_eq!(hmac.hash, None);
        assert_eq!(hmac.encoding, None);
        assert!(!hmac.is_complete());
    }

    #[test]
    fn record_with_custom_provider_hydrates_the_provider_selection() {
        let record: SourceRecord = serde_json::from_value(json!({
            "uid": "src-1",
            "name": "gh",
            "type": "http",
            "is_disabled": false,
            "provider": "github",
            "mask_id": "abc",
            "verifier": {
                "type": "hmac",
                "hmac": {
                    "secret": "s",
                    "header": "X-Hub-Signature-256",
                    "hash": "SHA256",
                    "encoding": "hex"
                }
            }
        }))
        .unwrap();

        let draft = SourceDraft::from_record(&record);
        assert_eq!(draft.verifier.verifier_type, Some(VerifierType::Github));
        assert_eq!(draft.verifier.hmac.secret, "s");
        assert_eq!(draft.source_class, Some(SourceClass::Http));
        assert!(!draft.is_disabled);
    }

    #[test]
    fn record_without_provider_keeps_the_canonical_type() {
        let record: SourceRecord = serde_json::from_value(json!({
            "uid": "src-2",
            "name": "basic",
            "type": "http",
            "is_disabled": true,
            "provider": "",
            "verifier": {
                "type": "basic_auth",
                "basic_auth": { "username": "u", "password": "p" }
            }
        }))
        .unwrap();

        assert_eq!(record.provider, None);
        let draft = SourceDraft::from_record(&record);
        assert_eq!(draft.verifier.verifier_type, Some(VerifierType::BasicAuth));
        assert_eq!(draft.verifier.basic_auth.username, "u");
        assert_eq!(draft.verifier.hmac, HmacConfig::default());
    }

    #[test]
    fn submission_writes_an_empty_provider_for_plain_verifiers() {
        let submission = SourceSubmission {
            name: "n".into(),
            source_class: SourceClass::Http,
            is_disabled: true,
            provider: None,
            verifier: VerifierConfig::Noop,
        };

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["provider"], json!(""));
        assert_eq!(value["type"], json!("http"));
    }

    #[test]
    fn new_drafts_start_disabled_and_unselected() {
        let draft = SourceDraft::new();
        assert!(draft.is_disabled);
        assert_eq!(draft.source_class, None);
        assert_eq!(draft.verifier.verifier_type, None);
    }
}
