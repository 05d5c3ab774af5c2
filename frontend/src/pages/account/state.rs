use std::collections::HashSet;

use common::model::account::{AccountTab, PasswordChangeForm, ProfileForm};

use super::messages::{PasswordField, ProfileField};

/// State of the account settings page. Each request has its own flag so
/// the tabs stay usable while another request is in flight.
pub struct AccountPage {
    /// Tab shown; initialised from `?activePage=`.
    pub active_tab: AccountTab,

    /// Basic info form, filled from the fetched profile.
    pub profile_form: ProfileForm,

    /// Cleared after a successful change.
    pub password_form: PasswordChangeForm,

    /// Set by a rejected save; enables the profile field errors.
    pub profile_touched: bool,

    /// Same as `profile_touched`, for the password form.
    pub password_touched: bool,

    pub is_fetching_profile: bool,
    pub is_saving_profile: bool,
    pub is_updating_password: bool,
    pub is_logging_out: bool,

    /// Password inputs currently rendered as plain text.
    pub shown_passwords: HashSet<PasswordField>,
}

impl AccountPage {
    pub fn new(active_tab: AccountTab) -> Self {
        Self {
            active_tab,
            profile_form: ProfileForm::default(),
            password_form: PasswordChangeForm::default(),
            profile_touched: false,
            password_touched: false,
            is_fetching_profile: false,
            is_saving_profile: false,
            is_updating_password: false,
            is_logging_out: false,
            shown_passwords: HashSet::new(),
        }
    }

    pub fn edit_profile(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::FirstName => self.profile_form.first_name = value,
            ProfileField::LastName => self.profile_form.last_name = value,
            ProfileField::Email => self.profile_form.email = value,
        }
    }

    pub fn edit_password(&mut self, field: PasswordField, value: String) {
        match field {
            PasswordField::Current => self.password_form.current_password = value,
            PasswordField::New => self.password_form.password = value,
            PasswordField::Confirmation => self.password_form.password_confirmation = value,
        }
    }

    pub fn password_value(&self, field: PasswordField) -> &str {
        match field {
            PasswordField::Current => &self.password_form.current_password,
            PasswordField::New => &self.password_form.password,
            PasswordField::Confirmation => &self.password_form.password_confirmation,
        }
    }
}
