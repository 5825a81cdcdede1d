//! Checkout submission state machine.
//!
//! `Idle → CollectingFormInput → Submitting → {Confirmed | Failed}`.
//! Collecting may repeat any number of times; Submitting admits exactly one
//! outstanding submission, which is how a duplicate concurrent submit is
//! rejected. No idempotency key travels with the order, so a client retry
//! after a timeout can still create a duplicate downstream.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CheckoutPhase {
    Idle,
    CollectingFormInput,
    Submitting,
    Confirmed,
    Failed,
}

#[derive(Clone)]
pub struct CheckoutTracker {
    phase: Arc<Mutex<CheckoutPhase>>,
}

impl Default for CheckoutTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutTracker {
    pub fn new() -> Self {
        Self {
            phase: Arc::new(Mutex::new(CheckoutPhase::Idle)),
        }
    }

    pub fn phase(&self) -> CheckoutPhase {
        *self.phase.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The checkout form is open and collecting input. Allowed from any
    /// phase except mid-submission.
    pub fn begin_collecting(&self) -> AppResult<()> {
        let mut phase = self.lock();
        if *phase == CheckoutPhase::Submitting {
            return Err(AppError::SubmissionInFlight);
        }
        *phase = CheckoutPhase::CollectingFormInput;
        Ok(())
    }

    /// Claim the single submission slot. The returned guard must be resolved
    /// with [`SubmitGuard::confirm`] or [`SubmitGuard::fail`]; dropping it
    /// unresolved records a failure.
    pub fn begin_submit(&self) -> AppResult<SubmitGuard> {
        let mut phase = self.lock();
        if *phase == CheckoutPhase::Submitting {
            return Err(AppError::SubmissionInFlight);
        }
        *phase = CheckoutPhase::Submitting;
        Ok(SubmitGuard {
            tracker: self.clone(),
            resolved: false,
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CheckoutPhase> {
        self.phase.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn set(&self, next: CheckoutPhase) {
        *self.lock() = next;
    }
}

pub struct SubmitGuard {
    tracker: CheckoutTracker,
    resolved: bool,
}

impl SubmitGuard {
    pub fn confirm(mut self) {
        self.resolved = true;
        self.tracker.set(CheckoutPhase::Confirmed);
    }

    pub fn fail(mut self) {
        self.resolved = true;
        self.tracker.set(CheckoutPhase::Failed);
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        if !self.resolved {
            self.tracker.set(CheckoutPhase::Failed);
        }
    }
}
