//! Single-slot guard for the one request a widget may have outstanding.

/// Proof that the holder owns the in-flight slot.
///
/// Tickets are handed back to [`InFlight::release`] once the request
/// resolves. A ticket from an older acquisition never releases a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Raw sequence number, mostly useful in log lines.
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// At most one request in flight per owner.
///
/// A second acquisition while the slot is taken is rejected rather than
/// queued; there is no cancellation.
#[derive(Debug, Default, Clone)]
pub struct InFlight {
    current: Option<Ticket>,
    issued: u64,
}

impl InFlight {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot, or return `None` if a request is already outstanding.
    pub fn try_acquire(&mut self) -> Option<Ticket> {
        if self.current.is_some() {
            return None;
        }
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.current = Some(ticket);
        Some(ticket)
    }

    /// Free the slot if `ticket` is the one currently holding it.
    ///
    /// Returns `false` for tickets that do not match the outstanding request.
    pub fn release(&mut self, ticket: Ticket) -> bool {
        if self.current == Some(ticket) {
            self.current = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    /// The ticket currently holding the slot.
    #[must_use]
    pub fn current(&self) -> Option<Ticket> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_rejected_while_busy() {
        let mut guard = InFlight::new();
        let first = guard.try_acquire().expect("slot should be free");
        assert!(guard.is_busy());
        assert!(guard.try_acquire().is_none());
        assert!(guard.release(first));
        assert!(!guard.is_busy());
        assert!(guard.try_acquire().is_some());
    }

    #[test]
    fn stale_ticket_does_not_release_newer_request() {
        let mut guard = InFlight::new();
        let first = guard.try_acquire().unwrap();
        assert!(guard.release(first));
        let second = guard.try_acquire().unwrap();
        assert_ne!(first, second);
        assert!(!guard.release(first));
        assert_eq!(guard.current(), Some(second));
    }
}
