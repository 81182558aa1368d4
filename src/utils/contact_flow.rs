use std::time::Duration;

use crate::api::email_relay::EmailRelay;
use crate::error::RelayError;
use crate::models::contact_models::{ContactFormData, FormField, SubmissionState, TemplateParams};

pub const SUCCESS_MESSAGE: &str = "Thank you for contacting us! We will get back to you as soon as possible.";
pub const FAILURE_MESSAGE: &str = "Something went wrong while sending your message. Please try again or contact us directly.";

/// Contact form fields plus the submission lifecycle of a single form instance.
#[derive(Debug, Clone)]
pub struct ContactFlow {
    data: ContactFormData,
    state: SubmissionState,
    to_email: String,
    relay_timeout: Option<Duration>,
}

impl ContactFlow {
    pub fn new(to_email: impl Into<String>) -> Self {
        Self::with_data(ContactFormData::default(), to_email)
    }

    pub fn with_data(data: ContactFormData, to_email: impl Into<String>) -> Self {
        Self {
            data,
            state: SubmissionState::Idle,
            to_email: to_email.into(),
            relay_timeout: None,
        }
    }

    pub fn relay_timeout(mut self, timeout: Duration) -> Self {
        self.relay_timeout = Some(timeout);
        self
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *field.value_mut(&mut self.data) = value.into();
    }

    /// Only non-emptiness is checked; email and phone formats are accepted as typed.
    pub fn is_valid(&self) -> bool {
        FormField::REQUIRED.iter().all(|field| field.is_filled(&self.data))
    }

    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::REQUIRED
            .iter()
            .copied()
            .filter(|field| !field.is_filled(&self.data))
            .collect()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.is_submitting()
    }

    /// Moves into `Submitting` and returns the relay payload, or `None` when submitting is not allowed.
    pub fn begin_submit(&mut self) -> Option<TemplateParams> {
        if !self.can_submit() {
            tracing::warn!(state = ?self.state, "Ignoring contact submit, form is invalid or already sending");
            return None;
        }
        self.state = SubmissionState::Submitting;
        Some(TemplateParams::from_form(&self.data, &self.to_email))
    }

    /// Applies the relay outcome. Fields are cleared on success and kept on failure for a retry.
    pub fn finish_submit(&mut self, result: &Result<(), RelayError>) {
        if !self.is_submitting() {
            return;
        }
        match result {
            Ok(()) => {
                tracing::info!("Contact message delivered");
                self.state = SubmissionState::Succeeded;
                self.data = ContactFormData::default();
            }
            Err(e) => {
                tracing::error!("Failed to deliver contact message: {}", e);
                self.state = SubmissionState::Failed;
            }
        }
    }

    /// Runs one full submission: exactly one relay call when the form may be submitted, none otherwise.
    pub async fn submit(&mut self, relay: &dyn EmailRelay) -> SubmissionState {
        let Some(params) = self.begin_submit() else {
            return self.state;
        };

        let result = match self.relay_timeout {
            Some(timeout) => match tokio::time::timeout(timeout, relay.send(&params)).await {
                Ok(result) => result,
                Err(_) => Err(RelayError::Timeout(timeout)),
            },
            None => relay.send(&params).await,
        };

        self.finish_submit(&result);
        self.state
    }

    pub fn status_message(&self) -> Option<&'static str> {
        match self.state {
            SubmissionState::Succeeded => Some(SUCCESS_MESSAGE),
            SubmissionState::Failed => Some(FAILURE_MESSAGE),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::email_relay::MockEmailRelay;
    use async_trait::async_trait;

    const TO: &str = "training@example.com";

    fn filled_flow() -> ContactFlow {
        let mut flow = ContactFlow::new(TO);
        flow.set_field(FormField::FirstName, "Rami");
        flow.set_field(FormField::LastName, "Khoury");
        flow.set_field(FormField::Email, "rami@example.com");
        flow.set_field(FormField::AreaCode, "+961");
        flow.set_field(FormField::Phone, "1 234 567");
        flow.set_field(FormField::Company, "Acme");
        flow.set_field(FormField::Country, "Lebanon");
        flow.set_field(FormField::Message, "Please send a quotation");
        flow
    }

    fn rejected() -> RelayError {
        RelayError::Rejected {
            status: 400,
            body: "bad template".to_string(),
        }
    }

    #[test]
    fn missing_email_disables_submit() {
        let mut flow = filled_flow();
        flow.set_field(FormField::Email, "");
        assert!(!flow.is_valid());
        assert!(!flow.can_submit());
        assert_eq!(flow.missing_fields(), vec![FormField::Email]);

        flow.set_field(FormField::Email, "not-an-email");
        assert!(flow.is_valid());
        assert!(flow.can_submit());
    }

    #[test]
    fn whitespace_only_fields_are_empty() {
        let mut flow = filled_flow();
        flow.set_field(FormField::Message, "   \n");
        assert!(!flow.is_valid());
    }

    #[test]
    fn invalid_submit_is_a_no_op() {
        let mut flow = ContactFlow::new(TO);
        assert_eq!(flow.begin_submit(), None);
        assert_eq!(flow.state(), SubmissionState::Idle);
    }

    #[test]
    fn begin_submit_enters_submitting_and_blocks_second_submit() {
        let mut flow = filled_flow();
        let params = flow.begin_submit().unwrap();
        assert_eq!(params.from_name, "Rami Khoury");
        assert_eq!(flow.state(), SubmissionState::Submitting);
        assert!(!flow.can_submit());
        assert_eq!(flow.begin_submit(), None);
    }

    #[tokio::test]
    async fn success_clears_fields_and_drops_course_interest() {
        let mut relay = MockEmailRelay::new();
        relay.expect_send().times(1).returning(|_| Ok(()));

        let mut data = filled_flow().data().clone();
        data.course_interest = Some("SASE - SD-WAN Architect".to_string());
        let mut flow = ContactFlow::with_data(data, TO);

        assert_eq!(flow.submit(&relay).await, SubmissionState::Succeeded);
        assert_eq!(flow.data(), &ContactFormData::default());
        assert_eq!(flow.status_message(), Some(SUCCESS_MESSAGE));
    }

    #[tokio::test]
    async fn failure_keeps_fields_for_retry() {
        let mut relay = MockEmailRelay::new();
        relay.expect_send().times(1).returning(|_| Err(rejected()));

        let mut flow = filled_flow();
        let before = flow.data().clone();
        assert_eq!(flow.submit(&relay).await, SubmissionState::Failed);
        assert_eq!(flow.data(), &before);
        assert_eq!(flow.status_message(), Some(FAILURE_MESSAGE));
        assert!(flow.can_submit());
    }

    #[tokio::test]
    async fn failed_state_is_not_sticky() {
        let mut relay = MockEmailRelay::new();
        let mut seq = mockall::Sequence::new();
        relay.expect_send().times(1).in_sequence(&mut seq).returning(|_| Err(rejected()));
        relay.expect_send().times(1).in_sequence(&mut seq).returning(|_| Ok(()));

        let mut flow = filled_flow();
        assert_eq!(flow.submit(&relay).await, SubmissionState::Failed);
        assert!(flow.begin_submit().is_some());
        assert_eq!(flow.status_message(), None);
        flow.finish_submit(&Ok(()));
        assert_eq!(flow.state(), SubmissionState::Succeeded);

        // a fresh fill after success can be sent again
        let mut flow = filled_flow();
        assert_eq!(flow.submit(&relay).await, SubmissionState::Succeeded);
    }

    #[tokio::test]
    async fn invalid_form_never_calls_relay() {
        let mut relay = MockEmailRelay::new();
        relay.expect_send().times(0);

        let mut flow = filled_flow();
        flow.set_field(FormField::Company, "");
        assert_eq!(flow.submit(&relay).await, SubmissionState::Idle);
    }

    #[tokio::test]
    async fn payload_carries_placeholder_and_destination() {
        let mut relay = MockEmailRelay::new();
        relay
            .expect_send()
            .withf(|params| {
                params.course_interest == "Not specified"
                    && params.to_email == TO
                    && params.phone == "+961 1 234 567"
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut flow = filled_flow();
        assert_eq!(flow.submit(&relay).await, SubmissionState::Succeeded);
    }

    struct HangingRelay;

    #[async_trait]
    impl EmailRelay for HangingRelay {
        async fn send(&self, _params: &TemplateParams) -> Result<(), RelayError> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_relay_times_out_into_failed() {
        let mut flow = filled_flow().relay_timeout(Duration::from_secs(15));
        assert_eq!(flow.submit(&HangingRelay).await, SubmissionState::Failed);
        assert_eq!(flow.data().first_name, "Rami");
    }

    #[test]
    fn finish_outside_submitting_is_ignored() {
        let mut flow = filled_flow();
        flow.finish_submit(&Ok(()));
        assert_eq!(flow.state(), SubmissionState::Idle);
        assert_eq!(flow.data().company, "Acme");
    }
}
