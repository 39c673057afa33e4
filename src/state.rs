use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::summary::{SummaryError, SummaryResult, SummaryService};

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// What the screen is showing. Each state carries exactly the data valid for it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success(SummaryResult),
    Error(String),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }
}

/// Identifies one fetch attempt. Only the most recently issued ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

pub struct ViewController {
    service: Arc<dyn SummaryService>,
    status: RequestStatus,
    latest: u64,
}

impl ViewController {
    pub fn new(service: Arc<dyn SummaryService>) -> Self {
        Self {
            service,
            status: RequestStatus::Idle,
            latest: 0,
        }
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    /// The refresh control is disabled while a fetch is in flight.
    pub fn can_refresh(&self) -> bool {
        !self.status.is_loading()
    }

    /// Enter Loading and hand out the ticket the outcome must be reported under.
    pub fn begin_fetch(&mut self) -> Ticket {
        self.latest += 1;
        self.status = RequestStatus::Loading;
        debug!(ticket = self.latest, "Fetch started");
        Ticket(self.latest)
    }

    /// Record a fetch outcome. Returns false (and changes nothing) when a newer
    /// fetch has been started since `ticket` was issued.
    pub fn complete_fetch(
        &mut self,
        ticket: Ticket,
        outcome: Result<SummaryResult, SummaryError>,
    ) -> bool {
        if ticket.0 != self.latest {
            warn!(
                ticket = ticket.0,
                latest = self.latest,
                "Ignoring outcome of superseded fetch"
            );
            return false;
        }

        self.status = match outcome {
            Ok(result) => {
                info!(sources = result.sources.len(), "Summary ready");
                RequestStatus::Success(result)
            }
            Err(e) => {
                let message = e.to_string();
                RequestStatus::Error(if message.is_empty() {
                    UNEXPECTED_ERROR.to_string()
                } else {
                    message
                })
            }
        };
        true
    }

    /// Run one fetch to completion. Used for the initial load. `on_change` sees
    /// the Loading state before the request goes out and the final state after.
    pub async fn fetch(&mut self, mut on_change: impl FnMut(&RequestStatus)) {
        let ticket = self.begin_fetch();
        on_change(&self.status);
        let outcome = self.service.fetch_summary().await;
        if self.complete_fetch(ticket, outcome) {
            on_change(&self.status);
        }
    }

    /// Manual refresh/retry. Does nothing and returns false while a fetch is in flight.
    pub async fn refresh(&mut self, on_change: impl FnMut(&RequestStatus)) -> bool {
        if !self.can_refresh() {
            debug!("Refresh ignored while loading");
            return false;
        }
        self.fetch(on_change).await;
        true
    }
}
