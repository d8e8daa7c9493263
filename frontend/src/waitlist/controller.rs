use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::{info, warn};
use yew::Reducible;

use super::form::{self, Field, FormErrors, SignupForm};
use super::sink::{SignupRequest, SinkError};

pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    /// Terminal for the lifetime of the form.
    Success,
}

/// Field state, validation errors and submission progress of the waitlist form.
///
/// `Idle -> Submitting -> Success`, or back to `Idle` when the sink fails.
/// Edits and resubmissions are refused unless `Idle`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupController {
    form: SignupForm,
    errors: FormErrors,
    status: SubmitStatus,
    submit_error: Option<String>,
    in_flight: Option<SignupRequest>,
}

impl SignupController {
    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// The record currently awaiting the sink, if any.
    pub fn in_flight(&self) -> Option<&SignupRequest> {
        self.in_flight.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.status != SubmitStatus::Idle
    }

    /// Any accepted edit also clears the generic submission error.
    pub fn update_field(&mut self, field: Field, value: String) -> bool {
        if self.is_locked() {
            return false;
        }
        self.form.set(field, value);
        self.errors.clear(field);
        self.submit_error = None;
        true
    }

    pub fn validate(&self) -> FormErrors {
        form::validate(&self.form)
    }

    /// Validates and, when the form is clean, moves to `Submitting` and hands
    /// back the record to send.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Option<SignupRequest> {
        if self.is_locked() {
            return None;
        }
        self.errors = self.validate();
        if !self.errors.is_empty() {
            return None;
        }
        let age = u8::try_from(self.form.parsed_age()?).ok()?;
        let request = SignupRequest {
            first_name: self.form.first_name.trim().to_string(),
            last_name: self.form.last_name.trim().to_string(),
            age,
            email: self.form.email.trim().to_string(),
            submitted_at: now,
        };
        self.status = SubmitStatus::Submitting;
        self.submit_error = None;
        self.in_flight = Some(request.clone());
        Some(request)
    }

    /// Applies the sink's answer to the record in flight. Ignored unless
    /// `Submitting`.
    pub fn finish_submit(&mut self, outcome: Result<(), SinkError>) -> bool {
        if self.status != SubmitStatus::Submitting {
            return false;
        }
        self.in_flight = None;
        match outcome {
            Ok(()) => {
                info!("Waitlist signup stored");
                self.status = SubmitStatus::Success;
                self.form = SignupForm::default();
            }
            Err(e) => {
                warn!("Waitlist signup failed: {}", e);
                self.status = SubmitStatus::Idle;
                self.submit_error = Some(SUBMIT_FAILED_MESSAGE.to_string());
            }
        }
        true
    }
}

pub enum SignupAction {
    Edit(Field, String),
    Submit(DateTime<Utc>),
    Settled(Result<(), SinkError>),
}

impl Reducible for SignupController {
    type Action = SignupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            SignupAction::Edit(field, value) => next.update_field(field, value),
            SignupAction::Submit(now) => next.begin_submit(now).is_some() || next.errors != self.errors,
            SignupAction::Settled(outcome) => next.finish_submit(outcome),
        };
        if changed {
            next.into()
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waitlist::sink::SignupSink;
    use chrono::TimeZone;
    use futures::executor::block_on;
    use futures::future::{FutureExt, LocalBoxFuture};
    use std::cell::RefCell;

    struct FakeSink {
        fail: bool,
        calls: RefCell<Vec<SignupRequest>>,
    }

    impl FakeSink {
        fn new(fail: bool) -> Self {
            Self { fail, calls: RefCell::new(Vec::new()) }
        }
    }

    impl SignupSink for FakeSink {
        fn insert(&self, record: SignupRequest) -> LocalBoxFuture<'static, Result<(), SinkError>> {
            self.calls.borrow_mut().push(record);
            let fail = self.fail;
            async move {
                if fail {
                    Err(SinkError::Rejected { status: 503, message: "unavailable".to_string() })
                } else {
                    Ok(())
                }
            }
            .boxed_local()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn filled() -> Rc<SignupController> {
        let mut controller = SignupController::default();
        controller.update_field(Field::FirstName, "John".to_string());
        controller.update_field(Field::LastName, "Doe".to_string());
        controller.update_field(Field::Age, "25".to_string());
        controller.update_field(Field::Email, "john@example.com".to_string());
        Rc::new(controller)
    }

    /// Does what `EmailCaptureForm` does: dispatch `Submit`, hand whatever is
    /// in flight to the sink and dispatch `Settled` with its answer.
    fn submit_through(state: Rc<SignupController>, sink: &FakeSink) -> Rc<SignupController> {
        let state = state.reduce(SignupAction::Submit(now()));
        match state.in_flight().cloned() {
            Some(request) => {
                assert_eq!(state.status(), SubmitStatus::Submitting);
                let outcome = block_on(sink.insert(request));
                state.reduce(SignupAction::Settled(outcome))
            }
            None => state,
        }
    }

    #[test]
    fn happy_path_sends_once_and_resets() {
        let sink = FakeSink::new(false);

        let state = submit_through(filled(), &sink);

        let calls = sink.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].age, 25);
        assert_eq!(calls[0].first_name, "John");
        assert_eq!(calls[0].submitted_at, now());
        assert_eq!(state.status(), SubmitStatus::Success);
        assert_eq!(state.form(), &SignupForm::default());
        assert!(state.in_flight().is_none());
    }

    #[test]
    fn success_is_terminal() {
        let sink = FakeSink::new(false);
        let state = submit_through(filled(), &sink);

        let edited = state.clone().reduce(SignupAction::Edit(Field::Email, "x@y.z".to_string()));
        assert!(Rc::ptr_eq(&state, &edited));
        let resubmitted = submit_through(edited, &sink);
        assert!(Rc::ptr_eq(&state, &resubmitted));
        assert_eq!(sink.calls.borrow().len(), 1);
    }

    #[test]
    fn sink_failure_keeps_values_and_allows_retry() {
        let failing = FakeSink::new(true);

        let state = submit_through(filled(), &failing);
        assert_eq!(failing.calls.borrow().len(), 1);
        assert_eq!(state.status(), SubmitStatus::Idle);
        assert_eq!(state.form().first_name, "John");
        assert_eq!(state.form().email, "john@example.com");
        assert_eq!(state.submit_error(), Some(SUBMIT_FAILED_MESSAGE));
        assert!(state.errors().is_empty());
        assert!(state.in_flight().is_none());

        let working = FakeSink::new(false);
        let state = submit_through(state, &working);
        assert_eq!(working.calls.borrow().len(), 1);
        assert_eq!(state.status(), SubmitStatus::Success);
    }

    #[test]
    fn empty_form_never_reaches_sink() {
        let sink = FakeSink::new(false);

        let state = submit_through(Rc::new(SignupController::default()), &sink);

        assert!(sink.calls.borrow().is_empty());
        assert_eq!(state.errors().len(), 4);
        assert_eq!(state.status(), SubmitStatus::Idle);
        assert_eq!(state.submit_error(), None);
    }

    #[test]
    fn edits_are_refused_while_submitting() {
        let mut controller = (*filled()).clone();
        let request = controller.begin_submit(now());
        assert!(request.is_some());
        assert_eq!(controller.status(), SubmitStatus::Submitting);

        assert!(!controller.update_field(Field::FirstName, "Jane".to_string()));
        assert!(controller.begin_submit(now()).is_none());
        assert_eq!(controller.form().first_name, "John");
        assert_eq!(controller.in_flight(), request.as_ref());
    }

    #[test]
    fn editing_a_field_clears_its_error_and_the_submit_error() {
        let mut controller = SignupController::default();
        controller.begin_submit(now());
        assert_eq!(controller.errors().len(), 4);

        controller.update_field(Field::Age, "30".to_string());
        assert!(controller.errors().get(Field::Age).is_none());
        assert_eq!(controller.errors().len(), 3);

        let failed = submit_through(filled(), &FakeSink::new(true));
        assert!(failed.submit_error().is_some());
        let edited = failed.reduce(SignupAction::Edit(Field::LastName, "Dough".to_string()));
        assert_eq!(edited.submit_error(), None);
    }

    #[test]
    fn submitted_values_are_trimmed() {
        let mut controller = SignupController::default();
        controller.update_field(Field::FirstName, "  John ".to_string());
        controller.update_field(Field::LastName, "Doe".to_string());
        controller.update_field(Field::Age, " 42".to_string());
        controller.update_field(Field::Email, "john@example.com".to_string());

        let request = controller.begin_submit(now()).unwrap();
        assert_eq!(request.first_name, "John");
        assert_eq!(request.age, 42);
    }

    #[test]
    fn reducer_ignores_refused_edits() {
        let state = filled();
        let submitting = state.reduce(SignupAction::Submit(now()));
        let after_edit = submitting.clone().reduce(SignupAction::Edit(Field::Age, "99".to_string()));
        assert!(Rc::ptr_eq(&submitting, &after_edit));

        let settled = after_edit.reduce(SignupAction::Settled(Err(SinkError::Transport("offline".to_string()))));
        assert_eq!(settled.status(), SubmitStatus::Idle);
        assert_eq!(settled.form().age, "25");
    }

    #[test]
    fn repeated_submit_while_locked_keeps_the_same_state() {
        let submitting = filled().reduce(SignupAction::Submit(now()));
        let again = submitting.clone().reduce(SignupAction::Submit(now()));
        assert!(Rc::ptr_eq(&submitting, &again));

        let invalid = Rc::new(SignupController::default()).reduce(SignupAction::Submit(now()));
        let invalid_again = invalid.clone().reduce(SignupAction::Submit(now()));
        assert!(Rc::ptr_eq(&invalid, &invalid_again));
    }

    #[test]
    fn stray_settlement_is_ignored() {
        let idle = filled();
        let settled = idle.clone().reduce(SignupAction::Settled(Ok(())));
        assert!(Rc::ptr_eq(&idle, &settled));
    }
}
