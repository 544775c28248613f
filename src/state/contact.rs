use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mailer::MailError;

pub const SENT_MESSAGE: &str = "Message sent! Thank you for reaching out, I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Phone)
    }

    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn missing(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|f| self.get(f).is_empty())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("a message is already being sent")]
    InFlight,
    #[error("missing required fields: {}", join(.0))]
    Missing(Vec<ContactField>),
}

fn join(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Contact form fields plus the idle → submitting → success/error machine.
///
/// The coordinator only decides whether a transition is allowed; sending is
/// done by the caller with the snapshot returned from `begin_submit`, and the
/// outcome is fed back through `resolve`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: ContactForm,
    status: SubmissionStatus,
    message: Option<String>,
    /// Required fields still empty since the last refused submit.
    flagged: Vec<ContactField>,
}

impl FormState {
    pub fn fields(&self) -> &ContactForm {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Fields named by the last refused submit that are still empty. Empty
    /// until a submit has been refused.
    pub fn flagged(&self) -> &[ContactField] {
        &self.flagged
    }

    /// Inline hint listing the flagged fields.
    pub fn validation_message(&self) -> Option<String> {
        (!self.flagged.is_empty())
            .then(|| ValidationError::Missing(self.flagged.clone()).to_string())
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// A field edit. Any settled outcome is dismissed; edits during a send are
    /// dropped so the in-flight snapshot and the form stay in agreement.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        *self.fields.get_mut(field) = value.into();
        if !self.flagged.is_empty() {
            self.flagged = self.fields.missing();
        }
        self.acknowledge();
    }

    pub fn begin_submit(&mut self) -> Result<ContactForm, ValidationError> {
        if self.is_submitting() {
            return Err(ValidationError::InFlight);
        }
        let missing = self.fields.missing();
        if !missing.is_empty() {
            log::debug!("refusing contact submission, missing {}", join(&missing));
            self.flagged = missing.clone();
            return Err(ValidationError::Missing(missing));
        }
        self.status = SubmissionStatus::Submitting;
        self.message = None;
        Ok(self.fields.clone())
    }

    /// Applies the send outcome. Ignored unless a send is in flight.
    pub fn resolve(&mut self, outcome: Result<(), MailError>) {
        if !self.is_submitting() {
            log::debug!("ignoring contact resolution outside of a send");
            return;
        }
        match outcome {
            Ok(()) => {
                self.fields = ContactForm::default();
                self.status = SubmissionStatus::Success;
                self.message = Some(SENT_MESSAGE.to_string());
            }
            Err(e) => {
                self.status = SubmissionStatus::Error;
                self.message = Some(format!("Failed to send message: {e}"));
            }
        }
    }

    /// Settles a success or error back to idle.
    pub fn acknowledge(&mut self) {
        if matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        ) {
            self.status = SubmissionStatus::Idle;
            self.message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut s = FormState::default();
        s.edit(ContactField::Name, "Ada Lovelace");
        s.edit(ContactField::Email, "ada@example.com");
        s.edit(ContactField::Subject, "Project Inquiry");
        s.edit(ContactField::Message, "Let's build an engine.");
        s
    }

    #[test]
    fn test_empty_field_refused() {
        let mut s = filled();
        s.edit(ContactField::Subject, "   ");
        let before = s.fields().clone();
        assert_eq!(
            s.begin_submit(),
            Err(ValidationError::Missing(vec![ContactField::Subject]))
        );
        assert_eq!(s.status(), SubmissionStatus::Idle);
        assert_eq!(s.fields(), &before);
    }

    #[test]
    fn test_flagged_fields_follow_edits() {
        let mut s = FormState::default();
        assert!(s.flagged().is_empty());
        s.begin_submit().unwrap_err();
        assert_eq!(s.flagged().len(), 4);

        s.edit(ContactField::Name, "Ada");
        s.edit(ContactField::Email, "ada@example.com");
        assert_eq!(s.flagged(), &[ContactField::Subject, ContactField::Message]);
        assert_eq!(
            s.validation_message().as_deref(),
            Some("missing required fields: subject, message")
        );

        // clearing a filled field flags it again
        s.edit(ContactField::Name, " ");
        assert_eq!(
            s.flagged(),
            &[ContactField::Name, ContactField::Subject, ContactField::Message]
        );

        s.edit(ContactField::Name, "Ada");
        s.edit(ContactField::Subject, "Hi");
        s.edit(ContactField::Message, "Hello");
        assert!(s.flagged().is_empty());
        assert_eq!(s.validation_message(), None);
        assert!(s.begin_submit().is_ok());
    }

    #[test]
    fn test_edits_before_a_refusal_flag_nothing() {
        let mut s = FormState::default();
        s.edit(ContactField::Name, "Ada");
        assert!(s.flagged().is_empty());
    }

    #[test]
    fn test_blank_form_lists_all_required() {
        let mut s = FormState::default();
        let err = s.begin_submit().unwrap_err();
        assert_eq!(
            err,
            ValidationError::Missing(vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::Subject,
                ContactField::Message,
            ])
        );
        assert_eq!(
            err.to_string(),
            "missing required fields: name, email, subject, message"
        );
    }

    #[test]
    fn test_phone_is_optional() {
        let mut s = filled();
        assert!(s.begin_submit().is_ok());
    }

    #[test]
    fn test_success_clears_fields() {
        let mut s = filled();
        let snapshot = s.begin_submit().unwrap();
        assert_eq!(snapshot.name, "Ada Lovelace");
        assert_eq!(s.status(), SubmissionStatus::Submitting);

        s.resolve(Ok(()));
        assert_eq!(s.status(), SubmissionStatus::Success);
        assert!(s.fields().is_empty());
        assert_eq!(s.message(), Some(SENT_MESSAGE));

        // next edit returns to idle
        s.edit(ContactField::Name, "A");
        assert_eq!(s.status(), SubmissionStatus::Idle);
        assert_eq!(s.message(), None);
    }

    #[test]
    fn test_failure_preserves_fields() {
        let mut s = filled();
        let snapshot = s.begin_submit().unwrap();
        s.resolve(Err(MailError::Status(500)));
        assert_eq!(s.status(), SubmissionStatus::Error);
        assert_eq!(s.fields(), &snapshot);
        assert!(s.message().unwrap().starts_with("Failed to send message"));

        // retry straight from the error state
        assert!(s.begin_submit().is_ok());
        assert_eq!(s.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn test_no_double_submit() {
        let mut s = filled();
        s.begin_submit().unwrap();
        assert_eq!(s.begin_submit(), Err(ValidationError::InFlight));
        s.edit(ContactField::Name, "changed mid-flight");
        assert_eq!(s.fields().name, "Ada Lovelace");
    }

    #[test]
    fn test_resolve_outside_send_is_ignored() {
        let mut s = filled();
        s.resolve(Ok(()));
        assert_eq!(s.status(), SubmissionStatus::Idle);
        assert_eq!(s.fields().name, "Ada Lovelace");
    }

    #[test]
    fn test_success_does_not_expire_on_its_own() {
        let mut s = filled();
        s.begin_submit().unwrap();
        s.resolve(Ok(()));
        s.resolve(Err(MailError::Status(500)));
        assert_eq!(s.status(), SubmissionStatus::Success);
        s.acknowledge();
        assert_eq!(s.status(), SubmissionStatus::Idle);
    }
}
