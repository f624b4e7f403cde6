//! Contact form validation and `mailto:` construction.
//!
//! Nothing is sent anywhere: a valid form turns into a `mailto:` URI that the
//! page navigates to, handing the message to the visitor's mail client.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// local@domain.tld with no whitespace and a single `@`.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Input fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub fn id(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Subject)
    }
}

/// Why a submission was refused. The display text is shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingField(FormField),

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Current values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    /// Check required fields first, then the email shape.
    ///
    /// Only truly empty values count as missing.
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [FormField::Name, FormField::Email, FormField::Message] {
            if self.get(field).is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Message body handed to the mail client.
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// `mailto:` URI with percent-encoded subject and body.
    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body())
        )
    }

    /// Validate and build the `mailto:` URI in one step.
    pub fn submit(&self, recipient: &str) -> Result<String, ContactError> {
        self.validate()?;
        Ok(self.mailto(recipient))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
