// src/app.rs
use std::sync::Arc;
use tracing::{debug, info};

use crate::auth::{SessionState, SessionStore};
use crate::config::AppConfig;
use crate::db::KeyValueStorage;
use crate::domain::Catalog;
use crate::errors::ServerError;
use crate::notices::NoticeQueue;
use crate::submissions::{SubmissionKind, SubmissionOutcome, SubmissionTracker};

/// Everything a request handler may touch. Built once in `main` and shared
/// by reference with every worker.
pub struct AppContext {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub session: Arc<SessionStore>,
    pub notices: NoticeQueue,
    pub submissions: Arc<SubmissionTracker>,
}

impl AppContext {
    /// Wire the session store to its observers and restore any persisted
    /// session.
    pub fn new(
        config: AppConfig,
        catalog: Catalog,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Result<Self, ServerError> {
        config.validate()?;

        let session = Arc::new(SessionStore::new(storage, config.login_delay()));
        let submissions = Arc::new(SubmissionTracker::new());

        session.subscribe(Box::new(|state: &SessionState| {
            debug!(?state, "session state changed");
        }));

        // Leaving the signed-in state abandons anything still submitting.
        let tracker = submissions.clone();
        session.subscribe(Box::new(move |state: &SessionState| {
            if matches!(state, SessionState::Unauthenticated) {
                let cancelled = tracker.cancel_all();
                if cancelled > 0 {
                    info!(cancelled, "cancelled pending submissions after sign-out");
                }
            }
        }));

        session.rehydrate();

        Ok(Self {
            config,
            catalog,
            session,
            notices: NoticeQueue::new(),
            submissions,
        })
    }

    /// Run a form submission on behalf of the signed-in user. The task is
    /// registered before the session is looked at again, so a sign-out
    /// landing at any point after the caller's own check still cancels it.
    pub fn run_submission(&self, kind: SubmissionKind) -> Result<SubmissionOutcome, ServerError> {
        self.submissions
            .run_while(kind, self.config.submit_delay(), || !self.session.is_signed_out())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::SESSION_STORAGE_KEY;
    use crate::auth::AuthProvider;
    use crate::db::MemoryStorage;
    use std::time::{Duration, Instant};

    fn ctx_with(storage: Arc<MemoryStorage>) -> AppContext {
        let mut config = AppConfig::default();
        config.auth.login_delay_ms = 0;
        config.forms.submit_delay_ms = 0;
        AppContext::new(config, Catalog::seeded().unwrap(), storage).unwrap()
    }

    #[test]
    fn starts_signed_out_without_stored_user() {
        let ctx = ctx_with(Arc::new(MemoryStorage::new()));
        assert_eq!(ctx.session.state(), SessionState::Unauthenticated);
    }

    #[test]
    fn restores_stored_user() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set_item(
                SESSION_STORAGE_KEY,
                r#"{"id":"user123","name":"John Doe","email":"john.doe@example.com"}"#,
            )
            .unwrap();
        let ctx = ctx_with(storage);
        assert_eq!(ctx.session.current_user().unwrap().name, "John Doe");
    }

    #[test]
    fn sign_out_between_gate_and_submission_cancels_it() {
        let mut config = AppConfig::default();
        config.auth.login_delay_ms = 0;
        config.forms.submit_delay_ms = 50;
        let storage = Arc::new(MemoryStorage::new());
        let ctx = AppContext::new(config, Catalog::seeded().unwrap(), storage).unwrap();
        ctx.session.login(AuthProvider::Google).unwrap();

        // the handler's gate passed, then the visitor signs out
        assert!(ctx.session.is_authenticated());
        ctx.session.logout().unwrap();

        let outcome = ctx.run_submission(SubmissionKind::Sale).unwrap();
        assert_eq!(outcome, SubmissionOutcome::Cancelled);
        assert_eq!(ctx.submissions.pending(), 0);
    }

    #[test]
    fn signed_in_submission_completes() {
        let ctx = ctx_with(Arc::new(MemoryStorage::new()));
        ctx.session.login(AuthProvider::Google).unwrap();
        assert_eq!(
            ctx.run_submission(SubmissionKind::Donation).unwrap(),
            SubmissionOutcome::Completed
        );
    }

    #[test]
    fn logout_cancels_pending_submission() {
        let ctx = Arc::new(ctx_with(Arc::new(MemoryStorage::new())));
        ctx.session.login(AuthProvider::Google).unwrap();

        let waiter = {
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                ctx.submissions
                    .run_while(SubmissionKind::Sale, Duration::from_secs(30), || true)
            })
        };
        let deadline = Instant::now() + Duration::from_secs(5);
        while ctx.submissions.pending() == 0 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }

        ctx.session.logout().unwrap();
        let outcome = waiter.join().unwrap().unwrap();
        assert_eq!(outcome, SubmissionOutcome::Cancelled);
        assert_eq!(ctx.submissions.pending(), 0);
    }
}
