//! Choice submission.
//!
//! A choice is a single fire-and-forget write. On success the whole view is
//! reloaded so the ranking shown is always what the server computed; on
//! failure the user is alerted and nothing else changes. There is no retry
//! and no optimistic local update.

use std::future::Future;

use crate::constants::SUBMIT_FAILURE_MESSAGE;
use crate::error::ClientError;
use crate::model::{ChoiceEvent, ComparisonItem};

/// Sends a choice to the backend.
pub trait ChoiceTransport {
    /// Issue one write request for `event`.
    ///
    /// Succeeds once the response body parsed as JSON; its content is not inspected.
    fn post_choice(&self, event: &ChoiceEvent) -> impl Future<Output = Result<(), ClientError>>;
}

/// Page-level side effects of a submission.
pub trait PageHost {
    /// Reload the current view, discarding all in-memory state.
    fn reload(&self);

    /// Show a blocking message to the user.
    fn alert(&self, message: &str);
}

/// Submits user decisions and refreshes the view.
pub struct ChoiceSubmitter<T, H> {
    transport: T,
    host: H,
    failure_message: String,
}

impl<T: ChoiceTransport, H: PageHost> ChoiceSubmitter<T, H> {
    pub fn new(transport: T, host: H) -> Self {
        Self {
            transport,
            host,
            failure_message: SUBMIT_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Use a different alert text for failed submissions.
    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }

    /// Record that `winner` beat `loser`.
    ///
    /// The caller must never pass the same item twice; this is not checked here.
    /// Side effects (reload or alert) have already happened when this returns;
    /// the result only reports which one.
    pub async fn submit_choice(
        &self,
        winner: ComparisonItem,
        loser: ComparisonItem,
    ) -> Result<(), ClientError> {
        self.submit(ChoiceEvent::new(winner, loser)).await
    }

    /// Record a tie between two items.
    pub async fn submit_draw(
        &self,
        first: ComparisonItem,
        second: ComparisonItem,
    ) -> Result<(), ClientError> {
        self.submit(ChoiceEvent::draw(first, second)).await
    }

    async fn submit(&self, event: ChoiceEvent) -> Result<(), ClientError> {
        log::info!(
            "Submitting {}: {} vs {}",
            if event.is_draw() { "draw" } else { "choice" },
            event.winner(),
            event.loser()
        );

        match self.transport.post_choice(&event).await {
            Ok(()) => {
                log::debug!("Choice recorded, reloading view");
                self.host.reload();
                Ok(())
            }
            Err(e) => {
                log::error!("Error submitting choice: {}", e);
                self.host.alert(&self.failure_message);
                Err(e)
            }
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Records posted bodies and answers with a fixed outcome.
    struct FakeTransport {
        succeed: bool,
        bodies: RefCell<Vec<serde_json::Value>>,
    }

    impl FakeTransport {
        fn new(succeed: bool) -> Self {
            Self {
                succeed,
                bodies: RefCell::new(Vec::new()),
            }
        }
    }

    impl ChoiceTransport for FakeTransport {
        async fn post_choice(&self, event: &ChoiceEvent) -> Result<(), ClientError> {
            let body = serde_json::from_str(&event.to_json()?)?;
            self.bodies.borrow_mut().push(body);
            if self.succeed {
                Ok(())
            } else {
                Err(ClientError::network("Failed to fetch"))
            }
        }
    }

    #[derive(Default)]
    struct FakeHost {
        reloads: Cell<usize>,
        alerts: RefCell<Vec<String>>,
    }

    impl PageHost for FakeHost {
        fn reload(&self) {
            self.reloads.set(self.reloads.get() + 1);
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn submitter(succeed: bool) -> ChoiceSubmitter<FakeTransport, FakeHost> {
        ChoiceSubmitter::new(FakeTransport::new(succeed), FakeHost::default())
    }

    #[test]
    fn test_single_post_with_verbatim_ids() {
        let submitter = submitter(true);
        pollster::block_on(submitter.submit_choice("17".into(), "File:Owl.jpg".into())).unwrap();

        let bodies = submitter.transport().bodies.borrow();
        assert_eq!(bodies.len(), 1);
        assert_eq!(
            bodies[0],
            serde_json::json!({ "winner": "17", "loser": "File:Owl.jpg" })
        );
    }

    #[test]
    fn test_success_reloads_once_without_alert() {
        let submitter = submitter(true);
        let result = pollster::block_on(submitter.submit_choice("1".into(), "2".into()));

        assert!(result.is_ok());
        assert_eq!(submitter.host().reloads.get(), 1);
        assert!(submitter.host().alerts.borrow().is_empty());
    }

    #[test]
    fn test_failure_alerts_once_without_reload() {
        let submitter = submitter(false);
        let result = pollster::block_on(submitter.submit_choice("1".into(), "2".into()));

        assert!(matches!(result, Err(ClientError::Network(_))));
        assert_eq!(submitter.host().reloads.get(), 0);
        assert_eq!(
            *submitter.host().alerts.borrow(),
            vec!["Error submitting choice.".to_string()]
        );
    }

    #[test]
    fn test_no_retry_after_failure() {
        let submitter = submitter(false);
        let _ = pollster::block_on(submitter.submit_choice("1".into(), "2".into()));
        assert_eq!(submitter.transport().bodies.borrow().len(), 1);
    }

    #[test]
    fn test_draw_sends_flag() {
        let submitter = submitter(true);
        pollster::block_on(submitter.submit_draw("3".into(), "4".into())).unwrap();

        let bodies = submitter.transport().bodies.borrow();
        assert_eq!(bodies[0]["draw"], true);
        assert_eq!(submitter.host().reloads.get(), 1);
    }

    #[test]
    fn test_custom_failure_message() {
        let submitter = submitter(false).with_failure_message("Vote not saved");
        let _ = pollster::block_on(submitter.submit_choice("1".into(), "2".into()));
        assert_eq!(*submitter.host().alerts.borrow(), vec!["Vote not saved"]);
    }
}
