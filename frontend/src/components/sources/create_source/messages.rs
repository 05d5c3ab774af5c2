use common::api::ApiError;
use common::model::source::{SourceDraft, SourceRecord};
use common::source::SubmitError;

/// Inputs of the form that carry a text or select value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    SourceClass,
    VerifierType,
    ApiKeyHeaderName,
    ApiKeyHeaderValue,
    BasicAuthUsername,
    BasicAuthPassword,
    HmacSecret,
    HmacHeader,
    HmacHash,
    HmacEncoding,
}

pub enum Msg {
    /// Raw input or select value; selecting a provider applies its preset.
    Update(Field, String),
    /// The enable toggle. The draft stores the inverse, `is_disabled`.
    SetEnabled(bool),
    /// Validates the draft and sends it as a create or update request.
    Save,
    /// Result of the update-mode fetch started on first render.
    Loaded(Result<SourceDraft, ApiError>),
    Saved(Result<SourceRecord, SubmitError>),
}
