//! Runtime state of the source form.
//!
//! The form edits a `SourceDraft` in place: every payload group stays in the
//! draft while the user switches verifier types, and only the group of the
//! selected type is submitted.

use common::model::source::SourceDraft;
use common::source::apply_provider_defaults;

use super::messages::Field;

/// State container of the source form. Fields are `pub` for `update` and `view`.
pub struct CreateSourceComponent {
    /// The form contents. Starts disabled with nothing selected; in update
    /// mode it is replaced by the hydrated stored source.
    pub draft: SourceDraft,

    /// Set by a rejected save so every empty required field shows its error.
    pub touched: bool,

    /// A create or update request is in flight.
    pub is_loading: bool,

    /// The stored source is being fetched (update mode).
    pub is_fetching: bool,

    /// Guards the first-render fetch.
    pub loaded: bool,
}

impl CreateSourceComponent {
    pub fn new() -> Self {
        Self {
            draft: SourceDraft::new(),
            touched: false,
            is_loading: false,
            is_fetching: false,
            loaded: false,
        }
    }

    pub fn shows_error(&self, value_missing: bool) -> bool {
        self.touched && value_missing
    }

    /// Writes an input value into the draft. Select values that do not parse
    /// (the empty placeholder option) clear the selection.
    pub fn apply(&mut self, field: Field, value: String) {
        let draft = &mut self.draft;
        match field {
            Field::Name => draft.name = value,
            Field::SourceClass => draft.source_class = value.parse().ok(),
            Field::VerifierType => {
                draft.verifier.verifier_type = value.parse().ok();
                apply_provider_defaults(draft);
            }
            Field::ApiKeyHeaderName => draft.verifier.api_key.header_name = value,
            Field::ApiKeyHeaderValue => draft.verifier.api_key.header_value = value,
            Field::BasicAuthUsername => draft.verifier.basic_auth.username = value,
            Field::BasicAuthPassword => draft.verifier.basic_auth.password = value,
            Field::HmacSecret => draft.verifier.hmac.secret = value,
            Field::HmacHeader => draft.verifier.hmac.header = value,
            Field::HmacHash => draft.verifier.hmac.hash = value.parse().ok(),
            Field::HmacEncoding => draft.verifier.hmac.encoding = value.parse().ok(),
        }
    }
}
