use std::fmt;

use thiserror::Error;

/// Contact-form fields, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Element id of the field in the shipped markup.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Name => "nombre",
            Self::Email => "correo",
            Self::Message => "mensaje",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// One or more fields were empty after trimming.
    #[error("empty required fields: {}", .0.iter().map(Field::id).collect::<Vec<_>>().join(", "))]
    Incomplete(Vec<Field>),
}

/// A contact-form submission as read from the page. Values are held only
/// long enough to validate and give feedback; nothing is stored or sent
/// anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// A field counts as empty when trimming whitespace leaves nothing.
    /// Padded values like `"  Ana  "` are accepted as-is; no normalization
    /// is applied to what the user typed.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(Field::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(Field::Email);
        }
        if self.message.trim().is_empty() {
            missing.push(Field::Message);
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::Incomplete(missing))
        }
    }
}
