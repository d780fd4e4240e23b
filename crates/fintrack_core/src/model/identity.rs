//! Logged-in identity record.

use serde::{Deserialize, Serialize};

/// Minimal logged-in user record, persisted as `{ "email": ... }`.
///
/// The email format is not validated; only emptiness is checked at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Identity;

    #[test]
    fn serializes_as_single_email_field() {
        let json = serde_json::to_string(&Identity::new("a@b.c")).unwrap();
        assert_eq!(json, r#"{"email":"a@b.c"}"#);
    }
}
