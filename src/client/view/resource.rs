//! View-scoped data with an explicit load lifecycle.
//!
//! Every fetch a view issues takes a [`RequestTicket`]. Only the ticket of the most recent
//! fetch may settle the resource, so a slow response from an earlier request can never
//! overwrite the result of a later one. Once the owning view is gone the resource is
//! detached and late results are dropped.

use dioxus_logger::tracing;

use crate::client::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    /// A newer request was issued after this one
    Superseded,
    /// The view went away before the response arrived
    Detached,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewResource<T> {
    phase: LoadPhase,
    data: Option<T>,
    issued: u64,
    attached: bool,
}

impl<T> ViewResource<T> {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Idle,
            data: None,
            issued: 0,
            attached: true,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Last successfully loaded data, kept across later failures
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// True until the first fetch has settled
    pub fn is_pending(&self) -> bool {
        self.data.is_none() && matches!(self.phase, LoadPhase::Idle | LoadPhase::Loading)
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        self.phase = LoadPhase::Loading;
        RequestTicket(self.issued)
    }

    pub fn settle(&mut self, ticket: RequestTicket, result: Result<T, Error>) -> Settlement {
        if !self.attached {
            tracing::debug!("Dropping response for a view that is no longer mounted");
            return Settlement::Detached;
        }
        if ticket.0 != self.issued {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.issued,
                "Dropping superseded response"
            );
            return Settlement::Superseded;
        }

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.phase = LoadPhase::Ready;
            }
            Err(e) => {
                tracing::error!("{}", e);
                self.phase = LoadPhase::Failed;
            }
        }

        Settlement::Applied
    }

    /// Applies a local change to loaded data without a re-fetch. Returns false when there is
    /// nothing loaded to change.
    pub fn update_local(&mut self, f: impl FnOnce(&mut T)) -> bool {
        match self.data.as_mut() {
            Some(data) => {
                f(data);
                true
            }
            None => false,
        }
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }
}

impl<T> Default for ViewResource<T> {
    fn default() -> Self {
        Self::new()
    }
}
