//! Types and logic shared by the dashboard frontend and its backend host.
//!
//! - `model`: wire models for sources, users and projects.
//! - `source`: the verifier configuration resolver and the submit flow built on it.
//! - `api`: the contract the API clients implement.
//! - `session`: the explicitly passed authentication/project context.
//! - `route`: the dashboard paths the frontend renders.

pub mod api;
pub mod model;
pub mod route;
pub mod session;
pub mod source;
