use serde::{Deserialize, Serialize};
use std::fmt;

/// Email value object for a user's contact address
///
/// # Invariants
/// - Must contain '@' character
/// - Must be at least 3 characters long
/// - Leading and trailing whitespace is stripped
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Example
    /// ```
    /// use team_invitations::domain::user::value_objects::Email;
    ///
    /// let email = Email::new("rookie@example.com").expect("valid email");
    /// assert_eq!(email.as_str(), "rookie@example.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into();
        let trimmed = email.trim();
        if Self::is_valid(trimmed) {
            Ok(Email(trimmed.to_string()))
        } else {
            Err(format!("Invalid email: {}", email))
        }
    }

    fn is_valid(email: &str) -> bool {
        email.contains('@') && email.len() >= 3
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
