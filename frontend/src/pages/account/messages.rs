use common::api::ApiError;
use common::model::account::{AccountTab, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordField {
    Current,
    New,
    Confirmation,
}

pub enum Msg {
    /// Switches tabs and rewrites `?activePage=` in the URL.
    SelectTab(AccountTab),
    /// Loads the profile into the form; sent on mount and after a save.
    FetchProfile,
    ProfileFetched(Result<UserProfile, ApiError>),
    EditProfile(ProfileField, String),
    /// Marks the form touched when invalid, otherwise sends it.
    SaveProfile,
    ProfileSaved(Result<UserProfile, ApiError>),
    EditPassword(PasswordField, String),
    TogglePasswordVisibility(PasswordField),
    /// Marks the form touched when incomplete or mismatched, otherwise sends it.
    ChangePassword,
    /// Carries the server's confirmation message.
    PasswordChanged(Result<String, ApiError>),
    Logout,
    /// The session is torn down whatever the outcome.
    LoggedOut(Result<(), ApiError>),
}
