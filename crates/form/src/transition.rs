//! The "processing" pause between form step 1 and step 2.
//!
//! Submitting step 1 immediately shows step 2 with a preloader, waits a fixed
//! delay, then hides the preloader and carries the step-1 email over to the
//! step-2 form. Only one pause may run at a time; a submission arriving while
//! one is in flight is rejected.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use perch_core::{DomainError, DomainResult};

use crate::config::FormConfig;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    Location,
    Quote,
}

/// What the page should show at a given point of the transition.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepView {
    pub step: FormStep,
    pub preloader_visible: bool,
    /// Price slots stay blank until the next quote recompute.
    pub pricing_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionCompleted {
    pub view: StepView,
    /// Email copied into the step-2 form.
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StepTransition {
    delay: Duration,
    in_flight: Arc<AtomicBool>,
}

impl StepTransition {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(config.processing_delay())
    }

    pub fn is_processing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Start the pause. Must be called from within a tokio runtime.
    pub fn submit(&self, email: Option<String>) -> DomainResult<PendingTransition> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|_| DomainError::interrupted("step transition needs a tokio runtime"))?;

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::info!("step transition already in progress; rejecting submission");
            return Err(DomainError::conflict("step transition already in progress"));
        }

        let guard = InFlightGuard(self.in_flight.clone());
        let delay = self.delay;
        tracing::info!(delay_ms = delay.as_millis() as u64, "step transition started");

        let handle = runtime.spawn(async move {
            let _guard = guard;
            tokio::time::sleep(delay).await;
            tracing::info!("step transition completed");
            TransitionCompleted {
                view: StepView {
                    step: FormStep::Quote,
                    preloader_visible: false,
                    pricing_hidden: true,
                },
                email,
            }
        });

        Ok(PendingTransition { handle })
    }
}

/// Handle to a running pause.
#[derive(Debug)]
pub struct PendingTransition {
    handle: JoinHandle<TransitionCompleted>,
}

impl PendingTransition {
    /// The view to show right away: step 2 behind the preloader.
    pub fn started(&self) -> StepView {
        StepView {
            step: FormStep::Quote,
            preloader_visible: true,
            pricing_hidden: true,
        }
    }

    pub fn abort(&self) {
        self.handle.abort();
    }

    pub async fn wait(self) -> DomainResult<TransitionCompleted> {
        self.handle
            .await
            .map_err(|e| DomainError::interrupted(format!("step transition: {e}")))
    }
}

/// Clears the in-flight flag when the pause finishes or is dropped.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
