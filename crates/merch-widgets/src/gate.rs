//! Generation tagging for in-flight fetches.
//!
//! A fetch begun for one (product, country) context must not clobber state
//! after a newer context superseded it. Each begin issues a ticket from a
//! monotonic generation counter; completions present their ticket and are
//! discarded unless it is still current.

/// Monotonic generation gate.
#[derive(Debug, Default)]
pub struct RequestGate {
    generation: u64,
}

/// Ticket identifying one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding all earlier tickets.
    pub fn issue(&mut self) -> RequestTicket {
        self.generation += 1;
        RequestTicket {
            generation: self.generation,
        }
    }

    /// Whether a ticket is still the newest.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_ticket_wins() {
        let mut gate = RequestGate::new();
        let first = gate.issue();
        let second = gate.issue();

        // Completion order does not matter; only the newest is admitted.
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_single_ticket_is_current() {
        let mut gate = RequestGate::new();
        let ticket = gate.issue();
        assert!(gate.is_current(ticket));
    }
}
