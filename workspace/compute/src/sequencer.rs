use std::fmt;

/// Sequence number of one issued prediction request.
///
/// Tickets are totally ordered by issue time. A response is only applied
/// when it carries the most recently issued ticket, so the last request
/// issued wins regardless of which response arrives last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out strictly increasing request tickets, starting at 1.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    last: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket.
    pub fn issue(&mut self) -> RequestTicket {
        self.last += 1;
        RequestTicket(self.last)
    }
}
