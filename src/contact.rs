use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{config::RelayMode, upload::FileMeta};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

pub const NAME_MIN: usize = 2;
pub const MESSAGE_MIN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Message];

    pub fn id(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Translation key and English text of the field label.
    pub fn label(&self) -> (&'static str, &'static str) {
        match self {
            Self::FirstName => ("contact.form.firstName", "First Name"),
            Self::LastName => ("contact.form.lastName", "Last Name"),
            Self::Email => ("contact.form.email", "Email"),
            Self::Message => ("contact.form.message", "Message"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("First name must be at least 2 characters")]
    FirstNameTooShort,
    #[error("Last name must be at least 2 characters")]
    LastNameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            Self::FirstNameTooShort => Field::FirstName,
            Self::LastNameTooShort => Field::LastName,
            Self::InvalidEmail => Field::Email,
            Self::MessageTooShort => Field::Message,
        }
    }

    pub fn key(&self) -> &'static str {
        match self.field() {
            Field::FirstName => "contact.validation.firstName",
            Field::LastName => "contact.validation.lastName",
            Field::Email => "contact.validation.email",
            Field::Message => "contact.validation.message",
        }
    }
}

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::FirstName if char_len(value) < NAME_MIN => Err(FieldError::FirstNameTooShort),
        Field::LastName if char_len(value) < NAME_MIN => Err(FieldError::LastNameTooShort),
        Field::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        Field::Message if char_len(value) < MESSAGE_MIN => Err(FieldError::MessageTooShort),
        _ => Ok(()),
    }
}

/// What a relay receives once every field checks out.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub attachments: Vec<FileMeta>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub attachments: Vec<FileMeta>,
    touched: Vec<Field>,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Stores the new value and validates it; the field counts as touched from now on.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<(), FieldError> {
        let value = value.into();
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value;
        if !self.touched.contains(&field) {
            self.touched.push(field);
        }
        validate_field(field, self.value(field))
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Errors for the fields the user has already edited.
    pub fn visible_errors(&self) -> Vec<FieldError> {
        Field::ALL
            .iter()
            .filter(|f| self.is_touched(**f))
            .filter_map(|f| validate_field(*f, self.value(*f)).err())
            .collect()
    }

    /// Checks every field at once and marks them all touched.
    pub fn validate(&mut self) -> Result<ContactMessage, Vec<FieldError>> {
        self.touched = Field::ALL.to_vec();
        let errors = self.visible_errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactMessage {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            attachments: self.attachments.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    Busy,
    #[error("{0} field(s) need attention")]
    Invalid(usize),
    #[error("contact relay is unavailable")]
    Unavailable,
}

impl SubmitError {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Unavailable => "contact.form.unavailable",
            Self::Busy | Self::Invalid(_) => "contact.form.errorMessage",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(SubmitError),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Idle, success and error may all start a new submission.
    pub fn begin(&mut self) -> Result<(), SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::Busy);
        }
        *self = Self::Submitting;
        Ok(())
    }

    pub fn finish(&mut self, result: Result<(), SubmitError>) {
        *self = match result {
            Ok(()) => Self::Success,
            Err(e) => Self::Error(e),
        };
    }

    /// Only a settled outcome falls back to idle.
    pub fn reset(&mut self) {
        if matches!(self, Self::Success | Self::Error(_)) {
            *self = Self::Idle;
        }
    }
}

/// Form status tagged with the submission it belongs to, so a late reset timer
/// from an earlier attempt can't clear a newer outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    status: FormStatus,
    generation: u64,
}

impl Submission {
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    /// Starts a submission and returns its generation.
    pub fn begin(&mut self) -> Result<u64, SubmitError> {
        self.status.begin()?;
        self.generation += 1;
        Ok(self.generation)
    }

    pub fn finish(&mut self, generation: u64, result: Result<(), SubmitError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.status.finish(result);
        true
    }

    /// Timer-driven reset; ignored unless `generation` is still the latest.
    pub fn expire(&mut self, generation: u64) -> bool {
        let settled = matches!(self.status, FormStatus::Success | FormStatus::Error(_));
        if generation != self.generation || !settled {
            return false;
        }
        self.status.reset();
        true
    }

    /// User-driven reset of the banner.
    pub fn dismiss(&mut self) {
        self.status.reset();
    }
}

/// Where a validated message goes.
pub trait ContactRelay {
    fn name(&self) -> &'static str;
    fn deliver(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// Accepts everything without leaving the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedRelay;

impl ContactRelay for SimulatedRelay {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn deliver(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        log::info!(
            "contact message from {} <{}> ({} chars, {} attachment(s))",
            message.first_name,
            message.email,
            message.message.chars().count(),
            message.attachments.len()
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRelay;

impl ContactRelay for DisabledRelay {
    fn name(&self) -> &'static str {
        "disabled"
    }

    fn deliver(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
        log::warn!("contact relay disabled, dropping message");
        Err(SubmitError::Unavailable)
    }
}

pub fn relay_for(mode: RelayMode) -> Box<dyn ContactRelay + Send + Sync> {
    match mode {
        RelayMode::Simulated => Box::new(SimulatedRelay),
        RelayMode::Disabled => Box::new(DisabledRelay),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::FirstName, "Ada").unwrap();
        form.set(Field::LastName, "Lovelace").unwrap();
        form.set(Field::Email, "ada@example.com").unwrap();
        form.set(Field::Message, "Let's build an engine together.").unwrap();
        form
    }

    #[test]
    fn test_first_name_length() {
        assert_eq!(validate_field(Field::FirstName, "Al"), Ok(()));
        let err = validate_field(Field::FirstName, "A").unwrap_err();
        assert_eq!(err, FieldError::FirstNameTooShort);
        assert_eq!(err.to_string(), "First name must be at least 2 characters");
        assert_eq!(err.key(), "contact.validation.firstName");
    }

    #[test]
    fn test_lengths_count_trimmed_characters() {
        assert!(validate_field(Field::LastName, "  B  ").is_err());
        assert!(validate_field(Field::LastName, "Éa").is_ok());
        assert!(validate_field(Field::Message, "   short   ").is_err());
        assert!(validate_field(Field::Message, "ten chars!").is_ok());
        assert!(validate_field(Field::Message, "ééééééééé").is_err());
    }

    #[test]
    fn test_email_format() {
        for ok in ["a@b.co", "first.last+tag@sub.example.org", " o'neil@mail.com "] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in ["", "plain", "a@b", "a@@b.com", "a b@c.com", "a@-b.com", "a.@b.com"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn test_errors_only_for_touched_fields() {
        let mut form = ContactForm::default();
        assert!(form.visible_errors().is_empty());

        assert_eq!(form.set(Field::Email, "nope"), Err(FieldError::InvalidEmail));
        assert_eq!(form.visible_errors(), vec![FieldError::InvalidEmail]);
        assert!(!form.is_touched(Field::Message));

        assert!(form.set(Field::Email, "ok@example.com").is_ok());
        assert!(form.visible_errors().is_empty());
    }

    #[test]
    fn test_submit_validates_everything() {
        let mut form = ContactForm::default();
        form.set(Field::FirstName, "Al").unwrap();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::LastNameTooShort,
                FieldError::InvalidEmail,
                FieldError::MessageTooShort
            ]
        );
        assert!(Field::ALL.iter().all(|f| form.is_touched(*f)));
    }

    #[test]
    fn test_valid_form_produces_trimmed_message() {
        let mut form = filled();
        form.set(Field::FirstName, "  Ada ").unwrap();
        form.attachments.push(FileMeta::new("cv.pdf", 10, "application/pdf"));
        let message = form.validate().unwrap();
        assert_eq!(message.first_name, "Ada");
        assert_eq!(message.attachments.len(), 1);

        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_status_machine() {
        let mut status = FormStatus::default();
        status.reset();
        assert_eq!(status, FormStatus::Idle);

        status.begin().unwrap();
        assert!(status.is_submitting());
        assert_eq!(status.begin(), Err(SubmitError::Busy));
        // a pending submission is not cut short
        status.reset();
        assert!(status.is_submitting());

        status.finish(Ok(()));
        assert_eq!(status, FormStatus::Success);
        status.reset();
        assert_eq!(status, FormStatus::Idle);

        status.begin().unwrap();
        status.finish(Err(SubmitError::Unavailable));
        assert_eq!(status, FormStatus::Error(SubmitError::Unavailable));
        status.begin().unwrap();
        assert!(status.is_submitting());
    }

    #[test]
    fn test_stale_reset_leaves_newer_outcome() {
        let mut submission = Submission::default();

        let first = submission.begin().unwrap();
        assert!(submission.finish(first, Err(SubmitError::Unavailable)));

        // retried while the first banner is still up
        let second = submission.begin().unwrap();
        assert_ne!(first, second);
        assert!(submission.finish(second, Err(SubmitError::Unavailable)));

        assert!(!submission.expire(first));
        assert_eq!(submission.status(), &FormStatus::Error(SubmitError::Unavailable));

        assert!(submission.expire(second));
        assert_eq!(submission.status(), &FormStatus::Idle);
    }

    #[test]
    fn test_submission_ignores_stale_finish_and_pending_reset() {
        let mut submission = Submission::default();
        let first = submission.begin().unwrap();
        assert_eq!(submission.begin(), Err(SubmitError::Busy));
        assert!(!submission.expire(first));
        assert!(submission.is_submitting());

        assert!(submission.finish(first, Ok(())));
        submission.dismiss();
        let second = submission.begin().unwrap();
        assert!(!submission.finish(first, Ok(())));
        assert!(submission.is_submitting());
        assert!(submission.finish(second, Ok(())));
        assert_eq!(submission.status(), &FormStatus::Success);
    }

    #[test]
    fn test_relays() {
        let message = filled().validate().unwrap();

        let simulated = relay_for(RelayMode::Simulated);
        assert_eq!(simulated.name(), "simulated");
        assert_eq!(simulated.deliver(&message), Ok(()));

        let disabled = relay_for(RelayMode::Disabled);
        let err = disabled.deliver(&message).unwrap_err();
        assert_eq!(err, SubmitError::Unavailable);
        assert_eq!(err.key(), "contact.form.unavailable");
    }
}
