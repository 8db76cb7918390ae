//! Auth flow controller
//!
//! One controller exists per auth form instance (the teacher and student
//! portals each get their own). The FSM state doubles as the busy flag:
//! while an operation is outstanding the submit control is disabled, so a
//! second submit is a no-op and at most one gateway call is ever in
//! flight per form.

use std::sync::Arc;

use auth_state::{AuthEvent, AuthState, StateMachine};
use brainbuddy_core::{AuthMode, Navigator, Route, UserProfile, UserRole};
use session_store::{KeyValueStore, SessionRepository};
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::gateway::OtpGateway;

/// Field values entered into the auth form. Values survive the Back
/// transition from the OTP step untouched.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub name: String,
    pub mobile: String,
    pub bio: String,
    pub otp: String,
}

impl AuthForm {
    /// Snapshot the entered fields as a profile record; an empty bio is
    /// omitted rather than stored as an empty string.
    fn to_profile(&self) -> UserProfile {
        let profile = UserProfile::new(self.name.clone(), self.mobile.clone());
        if self.bio.trim().is_empty() {
            profile
        } else {
            profile.with_bio(self.bio.clone())
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The simulated dispatch completed; the form is now at the OTP step.
    OtpSent,
    /// An operation is already in flight; the call was a no-op.
    Busy,
    /// The form is not in a submittable state; the call was a no-op.
    Ignored,
    /// The flow was cancelled while the dispatch was outstanding; no
    /// state was mutated by the stale completion.
    Cancelled,
    /// Required fields are empty; no transition fired.
    MissingFields(Vec<&'static str>),
}

/// Result of a verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The session was written and navigation to the dashboard pushed.
    Authenticated(Route),
    /// Not at the OTP step (or already verifying); no-op.
    Ignored,
    /// Cancelled mid-flight; no session was written.
    Cancelled,
}

/// Drives the auth FSM for one form against the OTP gateway, the session
/// repository and the navigator.
pub struct AuthFlowController<G: OtpGateway, S: KeyValueStore> {
    role: UserRole,
    machine: StateMachine,
    form: AuthForm,
    sessions: SessionRepository<S>,
    gateway: G,
    navigator: Arc<dyn Navigator>,
    cancel: CancellationToken,
}

impl<G: OtpGateway, S: KeyValueStore> AuthFlowController<G, S> {
    pub fn new(
        role: UserRole,
        sessions: SessionRepository<S>,
        gateway: G,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            role,
            machine: StateMachine::new(),
            form: AuthForm::default(),
            sessions,
            gateway,
            navigator,
            cancel: CancellationToken::new(),
        }
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn state(&self) -> AuthState {
        self.machine.state()
    }

    pub fn form(&self) -> &AuthForm {
        &self.form
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_mobile(&mut self, mobile: impl Into<String>) {
        self.form.mobile = mobile.into();
    }

    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.form.bio = bio.into();
    }

    /// Token invalidating the in-flight operation, if any. Hosts cancel it
    /// when the user navigates away so a late completion cannot mutate
    /// state.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Submit the login or registration form.
    pub async fn submit(&mut self, mode: AuthMode) -> Result<SubmitOutcome> {
        let state = self.machine.state();
        if state.is_busy() {
            tracing::debug!(?state, "submit ignored: operation in flight");
            return Ok(SubmitOutcome::Busy);
        }
        if state != AuthState::Form {
            return Ok(SubmitOutcome::Ignored);
        }

        let missing = self.form.to_profile().missing_fields(mode);
        if !missing.is_empty() {
            tracing::debug!(?missing, "submit rejected: required fields empty");
            return Ok(SubmitOutcome::MissingFields(missing));
        }

        self.machine.handle_event(AuthEvent::SubmitRequested { mode });

        let dispatched = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => None,
            res = self.gateway.request_code(&self.form.mobile) => Some(res),
        };
        let Some(dispatched) = dispatched else {
            // Stale completion: the user left while the dispatch was
            // outstanding. Roll back without entering the OTP step.
            self.machine.reset();
            return Ok(SubmitOutcome::Cancelled);
        };
        if let Err(err) = dispatched {
            self.machine.reset();
            return Err(err.into());
        }

        self.machine.handle_event(AuthEvent::CodeDispatched);
        tracing::info!(role = %self.role, ?mode, "OTP dispatched");
        Ok(SubmitOutcome::OtpSent)
    }

    /// Verify an entered OTP code. Mirrors the prototype: the code is not
    /// compared against anything; any input succeeds after the delay.
    pub async fn verify(&mut self, code: &str) -> Result<VerifyOutcome> {
        if self.machine.state() != AuthState::OtpPending {
            tracing::debug!(state = ?self.machine.state(), "verify ignored");
            return Ok(VerifyOutcome::Ignored);
        }

        self.form.otp = code.to_string();
        self.machine.handle_event(AuthEvent::CodeEntered);

        let verified = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => None,
            res = self.gateway.verify_code(&self.form.mobile, code) => Some(res),
        };
        let Some(verified) = verified else {
            self.machine.reset();
            return Ok(VerifyOutcome::Cancelled);
        };
        if let Err(err) = verified {
            self.machine.reset();
            return Err(err.into());
        }

        let profile = self.form.to_profile();
        self.sessions.store(self.role, &profile).await?;
        self.machine.handle_event(AuthEvent::CodeAccepted);

        let route = Route::dashboard_for(self.role);
        self.navigator.navigate(route);
        tracing::info!(role = %self.role, route = route.path(), "authenticated");
        Ok(VerifyOutcome::Authenticated(route))
    }

    /// Return from the OTP step to the editable form. Entered field
    /// values are preserved. Returns false when not at the OTP step.
    pub fn back(&mut self) -> bool {
        if self.machine.state() != AuthState::OtpPending {
            return false;
        }

        // Invalidate any outstanding completion before re-opening the form.
        self.cancel.cancel();
        self.cancel = CancellationToken::new();

        self.machine.handle_event(AuthEvent::BackRequested);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::SimulatedGateway;
    use auth_state::StateMachine;
    use brainbuddy_core::RecordingNavigator;
    use session_store::{KeyValueStore, MemoryStore, USER_DATA_KEY, USER_TYPE_KEY};
    use std::time::Duration;

    fn controller(
        role: UserRole,
        store: MemoryStore,
        navigator: Arc<RecordingNavigator>,
    ) -> AuthFlowController<SimulatedGateway, MemoryStore> {
        AuthFlowController::new(
            role,
            SessionRepository::new(store),
            SimulatedGateway::new(Duration::from_millis(1)),
            navigator,
        )
    }

    #[tokio::test]
    async fn test_submit_login_reaches_otp_step_exactly_once() {
        let nav = Arc::new(RecordingNavigator::new());
        let mut ctl = controller(UserRole::Teacher, MemoryStore::new(), nav.clone());
        ctl.set_name("Dr. Mehta");
        ctl.set_mobile("9876543210");

        let outcome = ctl.submit(AuthMode::Login).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::OtpSent);
        assert_eq!(ctl.state(), AuthState::OtpPending);

        // Exactly one OtpPending entry in the history.
        let entries = ctl
            .machine
            .history()
            .iter()
            .filter(|t| t.to == AuthState::OtpPending && t.changed)
            .count();
        assert_eq!(entries, 1);
        assert!(nav.routes().is_empty());
    }

    #[tokio::test]
    async fn test_submit_while_busy_is_noop() {
        let nav = Arc::new(RecordingNavigator::new());
        let mut ctl = controller(UserRole::Student, MemoryStore::new(), nav);
        ctl.set_name("Rahul");
        ctl.set_mobile("123");
        ctl.machine = StateMachine::with_state(AuthState::Submitting);

        let outcome = ctl.submit(AuthMode::Login).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Busy);
        assert_eq!(ctl.state(), AuthState::Submitting);
        assert!(ctl.machine.history().is_empty());
    }

    #[tokio::test]
    async fn test_register_requires_bio() {
        let nav = Arc::new(RecordingNavigator::new());
        let mut ctl = controller(UserRole::Teacher, MemoryStore::new(), nav);
        ctl.set_name("Dr. Mehta");
        ctl.set_mobile("9876543210");

        let outcome = ctl.submit(AuthMode::Register).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::MissingFields(vec!["bio"]));
        assert_eq!(ctl.state(), AuthState::Form);
        assert!(ctl.machine.history().is_empty());

        // Login with the same fields is fine.
        let outcome = ctl.submit(AuthMode::Login).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::OtpSent);
    }

    #[tokio::test]
    async fn test_back_preserves_entered_fields() {
        let nav = Arc::new(RecordingNavigator::new());
        let mut ctl = controller(UserRole::Teacher, MemoryStore::new(), nav);
        ctl.set_name("Dr. Mehta");
        ctl.set_mobile("9876543210");
        ctl.set_bio("Physics tutor");

        ctl.submit(AuthMode::Register).await.unwrap();
        assert_eq!(ctl.state(), AuthState::OtpPending);

        assert!(ctl.back());
        assert_eq!(ctl.state(), AuthState::Form);
        assert_eq!(ctl.form().name, "Dr. Mehta");
        assert_eq!(ctl.form().mobile, "9876543210");
        assert_eq!(ctl.form().bio, "Physics tutor");

        // Back is only meaningful from the OTP step.
        assert!(!ctl.back());
    }

    #[tokio::test]
    async fn test_verify_writes_session_and_navigates() {
        let store = MemoryStore::new();
        let nav = Arc::new(RecordingNavigator::new());
        let mut ctl = controller(UserRole::Teacher, store.clone(), nav.clone());
        ctl.set_name("Dr. Mehta");
        ctl.set_mobile("9876543210");
        ctl.set_bio("Physics tutor");

        ctl.submit(AuthMode::Register).await.unwrap();
        let outcome = ctl.verify("123456").await.unwrap();

        assert_eq!(
            outcome,
            VerifyOutcome::Authenticated(Route::TeacherDashboard)
        );
        assert_eq!(ctl.state(), AuthState::Authenticated);
        assert_eq!(nav.last(), Some(Route::TeacherDashboard));

        assert_eq!(
            store.get(USER_TYPE_KEY).await.unwrap(),
            Some("teacher".to_string())
        );
        assert_eq!(
            store.get(USER_DATA_KEY).await.unwrap(),
            Some(
                r#"{"name":"Dr. Mehta","mobile":"9876543210","bio":"Physics tutor"}"#.to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_verify_accepts_empty_code() {
        let store = MemoryStore::new();
        let nav = Arc::new(RecordingNavigator::new());
        let mut ctl = controller(UserRole::Student, store.clone(), nav.clone());
        ctl.set_name("Rahul");
        ctl.set_mobile("123");

        ctl.submit(AuthMode::Login).await.unwrap();
        let outcome = ctl.verify("").await.unwrap();

        assert_eq!(
            outcome,
            VerifyOutcome::Authenticated(Route::StudentDashboard)
        );
        assert_eq!(
            store.get(USER_TYPE_KEY).await.unwrap(),
            Some("student".to_string())
        );
    }

    #[tokio::test]
    async fn test_verify_before_otp_step_is_ignored() {
        let nav = Arc::new(RecordingNavigator::new());
        let mut ctl = controller(UserRole::Student, MemoryStore::new(), nav.clone());

        let outcome = ctl.verify("123456").await.unwrap();
        assert_eq!(outcome, VerifyOutcome::Ignored);
        assert_eq!(ctl.state(), AuthState::Form);
        assert!(nav.routes().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_submit_mutates_nothing() {
        let store = MemoryStore::new();
        let nav = Arc::new(RecordingNavigator::new());
        let mut ctl = controller(UserRole::Teacher, store.clone(), nav.clone());
        ctl.set_name("Dr. Mehta");
        ctl.set_mobile("9876543210");

        // The host cancelled (navigated away) while the dispatch would
        // have been outstanding.
        ctl.cancellation_token().cancel();

        let outcome = ctl.submit(AuthMode::Login).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Cancelled);
        assert_eq!(ctl.state(), AuthState::Form);
        assert!(nav.routes().is_empty());
        assert_eq!(store.get(USER_TYPE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_cancelled_verify_writes_no_session() {
        let store = MemoryStore::new();
        let nav = Arc::new(RecordingNavigator::new());
        let mut ctl = controller(UserRole::Teacher, store.clone(), nav.clone());
        ctl.set_name("Dr. Mehta");
        ctl.set_mobile("9876543210");

        ctl.submit(AuthMode::Login).await.unwrap();
        ctl.cancellation_token().cancel();

        let outcome = ctl.verify("123456").await.unwrap();
        assert_eq!(outcome, VerifyOutcome::Cancelled);
        assert!(nav.routes().is_empty());
        assert_eq!(store.get(USER_TYPE_KEY).await.unwrap(), None);
    }
}
