//! Contact form submission and field validation.
//!
//! Submission is simulated: the form enters a sending state, waits, and
//! reports success. The state machine here keeps the button disabled for
//! the duration and produces the message to flash.

/// Label shown on the submit button while sending.
pub const SENDING_LABEL: &str = "SENDING...";

/// Default submit button label.
pub const SUBMIT_LABEL: &str = "SEND MESSAGE";

const SUCCESS_TEXT: &str = "Thank you! Your message has been sent successfully.";
const ERROR_TEXT: &str = "Oops! Something went wrong. Please try again.";

/// Gap between the fixed header and the flash message, in pixels.
const MESSAGE_GAP_PX: f64 = 20.0;

/// Outcome category of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Flash message shown after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: &'static str,
}

impl FormMessage {
    pub fn success() -> Self {
        Self {
            kind: MessageKind::Success,
            text: SUCCESS_TEXT,
        }
    }

    pub fn error() -> Self {
        Self {
            kind: MessageKind::Error,
            text: ERROR_TEXT,
        }
    }

    /// CSS classes, e.g. `form-message form-message-success`.
    pub fn class_name(&self) -> &'static str {
        match self.kind {
            MessageKind::Success => "form-message form-message-success",
            MessageKind::Error => "form-message form-message-error",
        }
    }

    /// Vertical position below a header of the given height.
    pub fn top_offset(header_height: f64) -> f64 {
        header_height + MESSAGE_GAP_PX
    }
}

/// Submission state of the contact form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    sending: bool,
}

impl ContactForm {
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Submit button label for the current state.
    pub fn button_label(&self) -> &'static str {
        if self.sending {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Start a submission. Returns `false` if one is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.sending {
            return false;
        }
        self.sending = true;
        true
    }

    /// Finish the in-flight submission and produce the message to show.
    pub fn finish<E>(&mut self, result: Result<(), E>) -> FormMessage {
        self.sending = false;
        match result {
            Ok(()) => FormMessage::success(),
            Err(_) => FormMessage::error(),
        }
    }
}

/// Whether a field should be flagged on blur.
pub fn is_missing(value: &str, required: bool) -> bool {
    required && value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_cycle() {
        let mut form = ContactForm::default();
        assert_eq!(form.button_label(), SUBMIT_LABEL);

        assert!(form.begin_submit());
        assert!(form.is_sending());
        assert_eq!(form.button_label(), SENDING_LABEL);
        assert!(!form.begin_submit());

        let message = form.finish(Ok::<(), ()>(()));
        assert_eq!(message, FormMessage::success());
        assert!(!form.is_sending());
        assert_eq!(form.button_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_failed_submission() {
        let mut form = ContactForm::default();
        form.begin_submit();
        let message = form.finish(Err("timeout"));
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.class_name(), "form-message form-message-error");
        assert!(!form.is_sending());
    }

    #[test]
    fn test_required_field_validation() {
        assert!(is_missing("   ", true));
        assert!(is_missing("", true));
        assert!(!is_missing("", false));
        assert!(!is_missing(" pilot@example.com ", true));
    }

    #[test]
    fn test_message_offset() {
        assert_eq!(FormMessage::top_offset(80.0), 100.0);
        assert_eq!(FormMessage::top_offset(0.0), 20.0);
    }
}
