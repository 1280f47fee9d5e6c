//! Client-side contact form: validation and `mailto:` composition. There is no
//! backend; a valid draft is handed to the visitor's mail client.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    MissingName,
    InvalidEmail,
    MissingMessage,
}

impl FieldError {
    pub fn message_key(self) -> &'static str {
        match self {
            Self::MissingName => "contact-error-name",
            Self::InvalidEmail => "contact-error-email",
            Self::MissingMessage => "contact-error-message",
        }
    }
}

impl ContactDraft {
    /// Collects every field problem at once so the form can show them together.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::MissingMessage);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `subject` arrives already localized; the body is the message plus a
    /// signature line with the sender's details.
    pub fn mailto(&self, recipient: &str, subject: &str) -> String {
        let body = format!(
            "{}\n\n-- {} <{}>",
            self.message.trim(),
            self.name.trim(),
            self.email.trim()
        );
        format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(subject.trim()),
            urlencoding::encode(&body)
        )
    }
}

fn looks_like_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !raw.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, rest)| !host.is_empty() && !rest.is_empty() && !rest.ends_with('.'))
            .unwrap_or(false)
}
