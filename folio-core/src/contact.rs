use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::i18n::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub success: bool,
    pub message: Message,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Static contact form: validated locally, never sent anywhere.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    errors: HashMap<Field, Message>,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn error(&self, field: Field) -> Option<Message> {
        self.errors.get(&field).copied()
    }

    pub fn validate_field(&mut self, field: Field) -> bool {
        self.errors.remove(&field);
        let value = self.value(field).trim();
        let error = if value.is_empty() {
            Some(Message::ValidationRequired)
        } else if field == Field::Email && !is_valid_email(value) {
            Some(Message::ValidationInvalidEmail)
        } else {
            None
        };
        match error {
            Some(message) => {
                self.errors.insert(field, message);
                false
            }
            None => true,
        }
    }

    /// Validates every field; all of them are checked even after a failure so
    /// each one carries its own error.
    pub fn validate_form(&mut self) -> bool {
        self.errors.clear();
        Field::ALL
            .iter()
            .fold(true, |ok, field| self.validate_field(*field) && ok)
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|f| !self.value(*f).trim().is_empty())
            && is_valid_email(self.email.trim())
            && self.errors.is_empty()
    }

    pub fn submit(&mut self) -> SubmitResult {
        if !self.validate_form() {
            debug!(errors = self.errors.len(), "contact form rejected");
            return SubmitResult {
                success: false,
                message: Message::ContactError,
            };
        }
        info!(name = %self.name.trim(), "contact form submitted");
        self.reset();
        SubmitResult {
            success: true,
            message: Message::ContactSuccess,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
