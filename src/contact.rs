use std::{fmt, future::Future, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Values entered into the contact form. This is also the payload handed to
/// a [`ContactTransport`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// Element id of the input bound to this field.
    pub const fn id(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Your Email",
            FormField::Message => "Your Message",
        }
    }

    /// HTML input type; `None` for the multi-line message box.
    pub const fn input_type(self) -> Option<&'static str> {
        match self {
            FormField::Name => Some("text"),
            FormField::Email => Some("email"),
            FormField::Message => None,
        }
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown form field: {0:?}")]
    UnknownField(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("message rejected: {0}")]
    Rejected(String),
    #[error("delivery interrupted")]
    Interrupted,
}

/// Delivers a contact message to wherever messages go.
pub trait ContactTransport {
    fn send(&self, message: &ContactForm) -> impl Future<Output = Result<(), TransportError>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitEvent {
    Submit,
    Delivered,
    Failed,
}

impl fmt::Display for SubmitEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitEvent::Submit => write!(f, "submit"),
            SubmitEvent::Delivered => write!(f, "delivered"),
            SubmitEvent::Failed => write!(f, "failed"),
        }
    }
}

/// Text and style of the message shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBanner {
    pub class: &'static str,
    pub text: &'static str,
}

impl SubmissionStatus {
    /// Next status after `event`, or `None` if the event is not allowed here.
    pub fn on(self, event: SubmitEvent) -> Option<SubmissionStatus> {
        use SubmissionStatus::*;
        use SubmitEvent::*;

        match (self, event) {
            (Idle | Success | Error, Submit) => Some(Submitting),
            (Submitting, Submit) => None,
            (Submitting, Delivered) => Some(Success),
            (Submitting, Failed) => Some(Error),
            (Idle | Success | Error, Delivered | Failed) => None,
        }
    }

    pub fn banner(self) -> Option<StatusBanner> {
        match self {
            SubmissionStatus::Success => Some(StatusBanner {
                class: "submission-message success",
                text: "Message sent successfully! 🎉",
            }),
            SubmissionStatus::Error => Some(StatusBanner {
                class: "submission-message error",
                text: "Failed to send message. Please try again. 😢",
            }),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }

    pub fn button_text(self) -> &'static str {
        if self == SubmissionStatus::Submitting {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

/// Owns the contact form fields and the lifecycle of one submission at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormController {
    form: ContactForm,
    status: SubmissionStatus,
}

impl ContactFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Sets the field whose element id is `field_id`.
    ///
    /// Edits are accepted while a submission is in flight.
    pub fn handle_input_change(
        &mut self,
        field_id: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field = field_id.parse::<FormField>()?;
        self.form.set(field, value.into());
        Ok(())
    }

    fn apply(&mut self, event: SubmitEvent) -> bool {
        match self.status.on(event) {
            Some(next) => {
                self.status = next;
                true
            }
            None => {
                log::warn!("ignoring {event} while {:?}", self.status);
                false
            }
        }
    }

    /// Starts a submission and returns the message to deliver.
    ///
    /// Returns `None` when a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if !self.apply(SubmitEvent::Submit) {
            return None;
        }
        Some(self.form.clone())
    }

    /// Finishes the in-flight submission with the transport's outcome.
    ///
    /// On success the fields are cleared; on failure they are kept so the
    /// visitor can retry.
    pub fn complete_submit(&mut self, outcome: Result<(), TransportError>) {
        match outcome {
            Ok(()) => {
                if self.apply(SubmitEvent::Delivered) {
                    log::info!("contact message delivered");
                    self.form.clear();
                }
            }
            Err(err) => {
                if self.apply(SubmitEvent::Failed) {
                    log::error!("contact message submission failed: {err}");
                }
            }
        }
    }

    /// Runs a whole submission against `transport`.
    pub async fn submit<T>(&mut self, transport: &T) -> SubmissionStatus
    where
        T: ContactTransport + ?Sized,
    {
        if let Some(message) = self.begin_submit() {
            let outcome = transport.send(&message).await;
            self.complete_submit(outcome);
        }
        self.status
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    /// Answers every send with a fixed outcome and records the payloads.
    struct ScriptedTransport {
        outcome: Result<(), TransportError>,
        sent: RefCell<Vec<ContactForm>>,
    }

    impl ScriptedTransport {
        fn new(outcome: Result<(), TransportError>) -> Self {
            Self {
                outcome,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl ContactTransport for ScriptedTransport {
        fn send(&self, message: &ContactForm) -> impl Future<Output = Result<(), TransportError>> {
            self.sent.borrow_mut().push(message.clone());
            let outcome = self.outcome.clone();
            async move { outcome }
        }
    }

    fn filled() -> ContactFormController {
        let mut controller = ContactFormController::new();
        controller.handle_input_change("name", "Alice").unwrap();
        controller.handle_input_change("email", "a@x.com").unwrap();
        controller.handle_input_change("message", "hi").unwrap();
        controller
    }

    #[test]
    fn test_input_change_touches_one_field() {
        let mut controller = filled();
        controller.handle_input_change("email", "x@y.com").unwrap();

        let form = controller.form();
        assert_eq!(form.name, "Alice");
        assert_eq!(form.email, "x@y.com");
        assert_eq!(form.message, "hi");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut controller = filled();
        let before = controller.clone();

        let err = controller.handle_input_change("phone", "555").unwrap_err();
        assert_eq!(err, FormError::UnknownField("phone".to_string()));
        assert_eq!(controller, before);
    }

    #[test]
    fn test_successful_submission_clears_fields() {
        let mut controller = filled();
        assert_eq!(controller.status(), SubmissionStatus::Idle);

        let message = controller.begin_submit().expect("idle form should submit");
        assert_eq!(controller.status(), SubmissionStatus::Submitting);
        assert_eq!(
            message,
            ContactForm {
                name: "Alice".to_string(),
                email: "a@x.com".to_string(),
                message: "hi".to_string(),
            }
        );

        controller.complete_submit(Ok(()));
        assert_eq!(controller.status(), SubmissionStatus::Success);
        assert_eq!(*controller.form(), ContactForm::default());
    }

    #[test]
    fn test_duplicate_submit_is_ignored() {
        let mut controller = filled();
        assert!(controller.begin_submit().is_some());

        assert!(controller.begin_submit().is_none());
        assert_eq!(controller.status(), SubmissionStatus::Submitting);
        assert_eq!(controller.form().name, "Alice");
    }

    #[test]
    fn test_failed_submission_keeps_fields() {
        let mut controller = filled();
        controller.begin_submit();
        controller.handle_input_change("message", "hi again").unwrap();

        controller.complete_submit(Err(TransportError::Interrupted));
        assert_eq!(controller.status(), SubmissionStatus::Error);
        assert_eq!(controller.form().name, "Alice");
        assert_eq!(controller.form().message, "hi again");
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut controller = filled();
        controller.complete_submit(Ok(()));
        assert_eq!(controller.status(), SubmissionStatus::Idle);
        assert_eq!(controller.form().name, "Alice");
    }

    #[test]
    fn test_transition_table() {
        use SubmissionStatus::*;
        use SubmitEvent::*;

        for from in [Idle, Success, Error] {
            assert_eq!(from.on(Submit), Some(Submitting));
            assert_eq!(from.on(Delivered), None);
            assert_eq!(from.on(Failed), None);
        }
        assert_eq!(Submitting.on(Submit), None);
        assert_eq!(Submitting.on(Delivered), Some(Success));
        assert_eq!(Submitting.on(Failed), Some(Error));
    }

    #[test]
    fn test_submit_with_transport() {
        let transport = ScriptedTransport::new(Ok(()));
        let mut controller = filled();

        let status = block_on(controller.submit(&transport));
        assert_eq!(status, SubmissionStatus::Success);
        assert_eq!(transport.sent.borrow().len(), 1);
        assert_eq!(transport.sent.borrow()[0].email, "a@x.com");
        assert_eq!(*controller.form(), ContactForm::default());
    }

    #[test]
    fn test_retry_after_failure() {
        let failing = ScriptedTransport::new(Err(TransportError::Rejected("busy".to_string())));
        let mut controller = filled();

        assert_eq!(block_on(controller.submit(&failing)), SubmissionStatus::Error);
        assert_eq!(controller.form().name, "Alice");

        let working = ScriptedTransport::new(Ok(()));
        assert_eq!(block_on(controller.submit(&working)), SubmissionStatus::Success);
        assert_eq!(working.sent.borrow()[0].name, "Alice");
    }

    #[test]
    fn test_banner_and_button() {
        assert!(SubmissionStatus::Idle.banner().is_none());
        assert!(SubmissionStatus::Submitting.banner().is_none());
        assert!(SubmissionStatus::Success
            .banner()
            .is_some_and(|b| b.class.ends_with("success")));
        assert!(SubmissionStatus::Error
            .banner()
            .is_some_and(|b| b.class.ends_with("error")));

        assert_eq!(SubmissionStatus::Submitting.button_text(), "Sending...");
        assert_eq!(SubmissionStatus::Error.button_text(), "Send Message");
    }

    #[test]
    fn test_field_ids_round_trip() {
        for field in FormField::ALL {
            assert_eq!(field.id().parse::<FormField>(), Ok(field));
        }
    }
}
