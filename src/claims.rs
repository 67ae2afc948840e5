//! Claim list state and the fetch-on-mount round-trip.

use crate::api::ClaimsApi;
use crate::error::ClientError;
use crate::model::ClaimRecord;
use crate::notice::Notice;
use crate::workflow::{CancellationToken, Phase, guarded};

/// What the claim list does when the fetch fails. The list stays as it was
/// either way; the policies differ only in whether the user is told.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the error and show the (empty) list.
    #[default]
    Silent,
    /// Log the error and raise [`Notice::ClaimsUnavailable`].
    Notify,
}

impl FailurePolicy {
    /// `Notify` when the user asked to hear about failures.
    pub fn from_notify(notify_on_error: bool) -> Self {
        if notify_on_error { Self::Notify } else { Self::Silent }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimsState {
    claims: Vec<ClaimRecord>,
    phase: Phase,
}

impl ClaimsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claims(&self) -> &[ClaimRecord] {
        &self.claims
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn begin(&mut self) {
        self.phase = Phase::Requesting;
    }

    /// Apply the fetch outcome. A successful fetch replaces the list
    /// wholesale; a failed one leaves it untouched.
    pub fn settle(
        &mut self,
        result: Result<Vec<ClaimRecord>, ClientError>,
        policy: FailurePolicy,
    ) -> Option<Notice> {
        let notice = match result {
            Ok(claims) => {
                self.phase = self.phase.complete(true);
                tracing::info!(count = claims.len(), "claims loaded");
                self.claims = claims;
                None
            }
            Err(err) => {
                self.phase = self.phase.complete(false);
                tracing::error!(error = %err, "error fetching claims");
                match policy {
                    FailurePolicy::Silent => None,
                    FailurePolicy::Notify => Some(Notice::ClaimsUnavailable),
                }
            }
        };
        self.phase = self.phase.settle();
        notice
    }

    /// Fetch the list from `api`. A completion after `cancel` fired is
    /// dropped and the state goes back to idle with the list unchanged.
    pub async fn load<A>(
        &mut self,
        api: &A,
        cancel: &CancellationToken,
        policy: FailurePolicy,
    ) -> Result<(), Notice>
    where
        A: ClaimsApi + ?Sized,
    {
        self.begin();
        match guarded(cancel, api.fetch_claims()).await {
            Some(result) => match self.settle(result, policy) {
                Some(notice) => Err(notice),
                None => Ok(()),
            },
            None => {
                self.phase = Phase::Idle;
                Ok(())
            }
        }
    }
}
