//! Checkout trigger: optimistic toast, session request, hand-off to the payments SDK.
//!
//! Failures never reach the caller. They are written to the diagnostic log and
//! the toast stays up.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub const CHECKOUT_SESSIONS_PATH: &str = "/api/checkout_sessions";

/// Body returned by the checkout-session endpoint. Only `id` is read.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CheckoutSession {
    #[serde(default)]
    pub id: Option<String>,
}

impl CheckoutSession {
    pub fn session_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CheckoutError {
    #[error("checkout session request failed: {0}")]
    Request(String),
    #[error("checkout session endpoint answered {status}")]
    Status { status: u16 },
    #[error("checkout session response was not valid JSON: {0}")]
    Decode(String),
    #[error("checkout session response had no id")]
    MissingSessionId,
    #[error("payments client unavailable: {0}")]
    PaymentsUnavailable(String),
    /// Error reported by the payments SDK; displays as the provider's message alone.
    #[error("{message}")]
    Redirect { message: String },
}

#[async_trait(?Send)]
pub trait CheckoutSessionSource {
    async fn create_session(&self) -> Result<CheckoutSession, CheckoutError>;
}

#[async_trait(?Send)]
pub trait PaymentRedirect {
    async fn redirect_to_checkout(&self, session_id: &str) -> Result<(), CheckoutError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    Redirected { session_id: String },
    Abandoned(CheckoutError),
}

pub struct CheckoutInitiator<S, P> {
    sessions: S,
    payments: P,
}

impl<S, P> CheckoutInitiator<S, P>
where
    S: CheckoutSessionSource,
    P: PaymentRedirect,
{
    pub fn new(sessions: S, payments: P) -> Self {
        Self { sessions, payments }
    }

    /// Runs the checkout flow. `show_pending` is called before any request is made.
    pub async fn start(&self, show_pending: impl FnOnce()) -> CheckoutOutcome {
        show_pending();
        match self.run().await {
            Ok(session_id) => {
                log::info!("Handed checkout session {} to the payments client", session_id);
                CheckoutOutcome::Redirected { session_id }
            }
            Err(err) => {
                log::warn!("{}", err);
                CheckoutOutcome::Abandoned(err)
            }
        }
    }

    async fn run(&self) -> Result<String, CheckoutError> {
        let session = self.sessions.create_session().await?;
        let session_id = session
            .session_id()
            .ok_or(CheckoutError::MissingSessionId)?
            .to_string();
        self.payments.redirect_to_checkout(&session_id).await?;
        Ok(session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use once_cell::sync::Lazy;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::sync::Mutex;

    static CAPTURED: Lazy<Mutex<Vec<(log::Level, String)>>> = Lazy::new(|| Mutex::new(Vec::new()));

    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            CAPTURED
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;

    fn capture_logs() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    }

    fn warned(message: &str) -> bool {
        CAPTURED
            .lock()
            .unwrap()
            .iter()
            .any(|(level, text)| *level == log::Level::Warn && text == message)
    }

    /// Endpoint fake that records whether the toast was already up when it was hit.
    struct FakeEndpoint {
        reply: Result<CheckoutSession, CheckoutError>,
        toast: Rc<Cell<bool>>,
        toast_seen_on_request: Cell<Option<bool>>,
        calls: Cell<u32>,
    }

    impl FakeEndpoint {
        fn new(reply: Result<CheckoutSession, CheckoutError>, toast: Rc<Cell<bool>>) -> Self {
            Self {
                reply,
                toast,
                toast_seen_on_request: Cell::new(None),
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl CheckoutSessionSource for FakeEndpoint {
        async fn create_session(&self) -> Result<CheckoutSession, CheckoutError> {
            self.calls.set(self.calls.get() + 1);
            self.toast_seen_on_request.set(Some(self.toast.get()));
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct FakeStripe {
        error: Option<String>,
        redirected_to: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl PaymentRedirect for FakeStripe {
        async fn redirect_to_checkout(&self, session_id: &str) -> Result<(), CheckoutError> {
            self.redirected_to.borrow_mut().push(session_id.to_string());
            match &self.error {
                Some(message) => Err(CheckoutError::Redirect {
                    message: message.clone(),
                }),
                None => Ok(()),
            }
        }
    }

    fn session(id: &str) -> CheckoutSession {
        CheckoutSession {
            id: Some(id.to_string()),
        }
    }

    #[test]
    fn choose_pro_redirects_with_the_returned_session() {
        let toast = Rc::new(Cell::new(false));
        let endpoint = FakeEndpoint::new(Ok(session("cs_123")), toast.clone());
        let initiator = CheckoutInitiator::new(endpoint, FakeStripe::default());

        let outcome = block_on(initiator.start(|| toast.set(true)));

        assert_eq!(
            outcome,
            CheckoutOutcome::Redirected {
                session_id: "cs_123".to_string()
            }
        );
        assert!(toast.get());
        assert_eq!(initiator.sessions.calls.get(), 1);
        assert_eq!(*initiator.payments.redirected_to.borrow(), vec!["cs_123".to_string()]);
    }

    #[test]
    fn toast_is_visible_before_the_request_resolves() {
        let toast = Rc::new(Cell::new(false));
        let endpoint = FakeEndpoint::new(Ok(session("cs_1")), toast.clone());
        let initiator = CheckoutInitiator::new(endpoint, FakeStripe::default());

        block_on(initiator.start(|| toast.set(true)));

        assert_eq!(initiator.sessions.toast_seen_on_request.get(), Some(true));
    }

    #[test]
    fn declined_redirect_is_logged_and_swallowed() {
        capture_logs();
        let toast = Rc::new(Cell::new(false));
        let endpoint = FakeEndpoint::new(Ok(session("cs_123")), toast.clone());
        let stripe = FakeStripe {
            error: Some("card declined".to_string()),
            ..Default::default()
        };
        let initiator = CheckoutInitiator::new(endpoint, stripe);

        let outcome = block_on(initiator.start(|| toast.set(true)));

        assert_eq!(
            outcome,
            CheckoutOutcome::Abandoned(CheckoutError::Redirect {
                message: "card declined".to_string()
            })
        );
        assert!(warned("card declined"));
        assert!(toast.get());
    }

    #[test]
    fn network_failure_keeps_the_toast_and_skips_redirect() {
        capture_logs();
        let toast = Rc::new(Cell::new(false));
        let endpoint = FakeEndpoint::new(
            Err(CheckoutError::Request("connection refused".to_string())),
            toast.clone(),
        );
        let initiator = CheckoutInitiator::new(endpoint, FakeStripe::default());

        let outcome = block_on(initiator.start(|| toast.set(true)));

        assert!(matches!(outcome, CheckoutOutcome::Abandoned(CheckoutError::Request(_))));
        assert!(toast.get());
        assert!(initiator.payments.redirected_to.borrow().is_empty());
        assert!(warned("checkout session request failed: connection refused"));
    }

    #[test]
    fn missing_or_empty_id_never_reaches_the_payments_client() {
        for reply in [CheckoutSession { id: None }, session("")] {
            let toast = Rc::new(Cell::new(false));
            let endpoint = FakeEndpoint::new(Ok(reply), toast.clone());
            let initiator = CheckoutInitiator::new(endpoint, FakeStripe::default());

            let outcome = block_on(initiator.start(|| toast.set(true)));

            assert_eq!(outcome, CheckoutOutcome::Abandoned(CheckoutError::MissingSessionId));
            assert!(initiator.payments.redirected_to.borrow().is_empty());
        }
    }

    #[test]
    fn session_body_parses_with_extra_fields() {
        let parsed: CheckoutSession =
            serde_json::from_str(r#"{"id":"cs_test_a1","object":"checkout.session"}"#).unwrap();
        assert_eq!(parsed.session_id(), Some("cs_test_a1"));
        let parsed: CheckoutSession = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.session_id(), None);
    }
}
