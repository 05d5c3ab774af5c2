//! Turning a source form into a submit-ready request.

pub mod resolver;
pub mod service;

pub use resolver::{apply_provider_defaults, classify_provider, is_valid, resolve, validate};
pub use service::{FormMode, SubmitError, load_draft, submit};

use crate::model::source::{CanonicalVerifierType, Provider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("source name is required")]
    MissingName,
    #[error("source type is required")]
    MissingSourceClass,
    #[error("verifier type is required")]
    MissingVerifierType,
    #[error("the {0} verifier configuration is incomplete")]
    IncompleteVerifier(CanonicalVerifierType),
    #[error("{0} sources must use the {0} hmac signature settings")]
    ProviderMismatch(Provider),
}
