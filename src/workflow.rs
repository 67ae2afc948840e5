//! Request lifecycle shared by both screens.
//!
//! ```text
//! Idle -> Requesting -> { Success, Failure } -> Idle
//! ```
//!
//! The terminal phases exist only while an outcome is being applied; a
//! container that has finished processing always rests in [`Phase::Idle`].

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Where a screen is in its single request round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Requesting,
    Success,
    Failure,
}

impl Phase {
    /// True only inside the in-flight window.
    pub fn is_loading(self) -> bool {
        self == Phase::Requesting
    }

    /// Move to the terminal phase matching `ok`. Called on the way back to
    /// `Idle`; a transition from anything but `Requesting` is logged.
    pub fn complete(self, ok: bool) -> Phase {
        if self != Phase::Requesting {
            tracing::debug!(phase = ?self, "request completed outside of Requesting");
        }
        if ok { Phase::Success } else { Phase::Failure }
    }

    /// Terminal outcome processed.
    pub fn settle(self) -> Phase {
        Phase::Idle
    }
}

/// Tied to the lifetime of a screen. Once cancelled, completions routed
/// through [`guarded`] are dropped instead of touching state.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl PartialEq for CancellationToken {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Await `request` and hand back its output unless `cancel` fired while it
/// was in flight. The request itself is never aborted.
pub async fn guarded<F, T>(cancel: &CancellationToken, request: F) -> Option<T>
where
    F: Future<Output = T>,
{
    let output = request.await;
    if cancel.is_cancelled() {
        tracing::debug!("dropping completion for a cancelled screen");
        None
    } else {
        Some(output)
    }
}
