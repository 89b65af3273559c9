//! Corporate info modal state machine
//!
//! `Closed → Loading → Loaded | Failed → Closed`. Every open action is issued
//! a fresh [`ModalTicket`]; a lookup result only lands if it carries the
//! ticket of the current open action, so a slow response for a previous
//! company cannot overwrite the modal after it was reopened.
//!
//! In the served page the ticket lives in the content element id
//! ([`ModalTicket::content_id`]) and `hx-sync` drops superseded requests;
//! each content request resolves its own ticket only.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::CorporateInfo;

/// Identity of one open action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalTicket(pub u64);

impl ModalTicket {
    /// DOM id of the content element owned by this ticket
    pub fn content_id(&self) -> String {
        format!("corporate-info-content-{}", self.0)
    }
}

/// Monotonic ticket source shared by all requests
#[derive(Debug, Default)]
pub struct TicketCounter(AtomicU64);

impl TicketCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> ModalTicket {
        ModalTicket(self.0.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Loading {
        ticket: ModalTicket,
        company: String,
    },
    Loaded {
        ticket: ModalTicket,
        company: String,
        info: CorporateInfo,
    },
    Failed {
        ticket: ModalTicket,
        company: String,
        message: String,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn ticket(&self) -> Option<ModalTicket> {
        match self {
            ModalState::Closed => None,
            ModalState::Loading { ticket, .. }
            | ModalState::Loaded { ticket, .. }
            | ModalState::Failed { ticket, .. } => Some(*ticket),
        }
    }

    pub fn company(&self) -> Option<&str> {
        match self {
            ModalState::Closed => None,
            ModalState::Loading { company, .. }
            | ModalState::Loaded { company, .. }
            | ModalState::Failed { company, .. } => Some(company),
        }
    }

    /// Trigger click; valid from any state, discarding prior content
    pub fn open(self, ticket: ModalTicket, company: impl Into<String>) -> Self {
        ModalState::Loading {
            ticket,
            company: company.into(),
        }
    }

    /// Apply a lookup result
    ///
    /// Ignored unless the modal is loading under the same ticket.
    pub fn resolve(self, ticket: ModalTicket, result: Result<CorporateInfo, String>) -> Self {
        match self {
            ModalState::Loading { ticket: current, company } if current == ticket => match result {
                Ok(info) => ModalState::Loaded { ticket, company, info },
                Err(message) => ModalState::Failed { ticket, company, message },
            },
            other => other,
        }
    }

    /// Close button or backdrop click
    pub fn close(self) -> Self {
        ModalState::Closed
    }
}
