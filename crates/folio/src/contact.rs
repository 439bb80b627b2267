//! State of the public contact form.
//!
//! [`ContactState::apply`] is the whole state machine; the frontend wraps it in a Yew
//! reducer so the delayed "hide confirmation" action never works on a stale copy.

use crate::api::{ApiError, ApiResult};
use crate::data::NewContactMessage;

pub const SEND_FAILED: &str = "Error sending message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq)]
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

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// All fields but the phone are filled in.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn to_message(&self) -> NewContactMessage {
        let phone = self.phone.trim();
        NewContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

pub enum ContactAction {
    Edit(ContactField, String),
    Submitting,
    Finished(ApiResult<()>),
    /// Fired by the confirmation timer armed for the given confirmation.
    DismissSuccess(u32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
    /// Number of successful sends so far.
    confirmations: u32,
}

impl ContactState {
    /// Confirmation a send started now would show if it succeeds. Only one send is
    /// outstanding at a time, so this is fixed when the request starts.
    pub fn next_confirmation(&self) -> u32 {
        self.confirmations.wrapping_add(1)
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit(field, value) => self.form.set(field, value),
            ContactAction::Submitting => self.status = SubmitStatus::Sending,
            ContactAction::Finished(Ok(())) => {
                self.form = ContactForm::default();
                self.status = SubmitStatus::Sent;
                self.confirmations = self.next_confirmation();
            }
            ContactAction::Finished(Err(error)) => {
                self.status = SubmitStatus::Failed(failure_message(&error));
            }
            ContactAction::DismissSuccess(confirmation) => {
                if self.status == SubmitStatus::Sent && confirmation == self.confirmations {
                    self.status = SubmitStatus::Idle;
                }
            }
        }
    }
}

pub fn failure_message(error: &ApiError) -> String {
    error
        .server_message()
        .unwrap_or(SEND_FAILED)
        .to_string()
}
