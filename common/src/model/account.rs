//! User profile and the two account-settings forms.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::wire_enum;

/// Local part and dotted domain labels, as accepted by browser email inputs.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// Basic info form of the profile tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
        }
    }

    pub fn email_is_valid(&self) -> bool {
        is_email(&self.email)
    }

    pub fn is_valid(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty() && self.email_is_valid()
    }
}

pub fn is_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    value.len() <= MAX_EMAIL_LEN && local.len() <= MAX_LOCAL_PART_LEN && EMAIL_RE.is_match(value)
}

/// Password form of the security tab. No `Debug`: it only ever holds secrets.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

impl PasswordChangeForm {
    pub fn is_complete(&self) -> bool {
        !self.current_password.is_empty()
            && !self.password.is_empty()
            && !self.password_confirmation.is_empty()
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.password_confirmation
    }

    pub fn is_valid(&self) -> bool {
        self.is_complete() && self.passwords_match()
    }
}

wire_enum! {
    /// The tabs of the account settings page.
    pub enum AccountTab as "account tab" {
        Profile => "profile",
        Security => "security",
    }
}

impl Default for AccountTab {
    fn default() -> Self {
        AccountTab::Profile
    }
}

impl AccountTab {
    pub const QUERY_KEY: &'static str = "activePage";

    pub fn label(self) -> &'static str {
        match self {
            AccountTab::Profile => "Profile",
            AccountTab::Security => "Security",
        }
    }

    /// Reads the tab from a `?activePage=` query string, falling back to the profile tab.
    pub fn from_query(search: &str) -> Self {
        search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == Self::QUERY_KEY)
            .and_then(|(_, value)| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn to_query(self) -> String {
        format!("?{}={}", Self::QUERY_KEY, self.as_str())
    }
}
