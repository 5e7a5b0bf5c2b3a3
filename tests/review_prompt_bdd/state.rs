//! Scenario state and runtime/server initialisation for the review prompt
//! BDD tests.

use std::cell::RefCell;
use std::rc::Rc;

use prreview::{Document, IntakeError};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Scenario state for review prompt tests.
#[derive(ScenarioState, Default)]
pub(crate) struct ReviewState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) document: Slot<Document>,
    pub(crate) error: Slot<IntakeError>,
}

/// Ensures the runtime and server are initialised in `ReviewState`.
pub(crate) fn ensure_runtime_and_server(
    review_state: &ReviewState,
) -> Result<SharedRuntime, IntakeError> {
    if review_state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new().map_err(|error| IntakeError::Io {
            message: format!("failed to create Tokio runtime: {error}"),
        })?;
        review_state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = review_state.runtime.get().ok_or_else(|| IntakeError::Api {
        message: "runtime not initialised".to_owned(),
    })?;

    if review_state.server.with_ref(|_| ()).is_none() {
        review_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}
