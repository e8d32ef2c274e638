//! The `<N>` priority marker at the head of a message.

use tracing::trace;

use crate::{Error, Facility, Severity};

/// Largest value a priority marker may carry (facility 63, severity 7).
pub const MAX_PRIORITY: u16 = 511;

/// A decoded priority, split into its facility and severity codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Priority {
    pub facility: u8,
    pub severity: u8,
}

impl Priority {
    /// Split a raw priority value. Values above [`MAX_PRIORITY`] are rejected.
    pub fn from_value(value: u16) -> Result<Self, Error> {
        if value > MAX_PRIORITY {
            return Err(Error::PriorityOutOfRange(value as u32));
        }

        let facility = value >> 3;
        let severity = value - (facility << 3);

        Ok(Priority {
            facility: facility as u8,
            severity: severity as u8,
        })
    }

    pub fn value(&self) -> u16 {
        ((self.facility as u16) << 3) | self.severity as u16
    }

    pub fn facility(&self) -> Result<Facility, Error> {
        Facility::try_from(self.facility)
    }

    pub fn severity(&self) -> Result<Severity, Error> {
        Severity::try_from(self.severity)
    }
}

fn parse_priority(input: &str) -> Result<(Priority, &str), Error> {
    if !input.starts_with('<') {
        return Err(Error::MissingPriorityOpen);
    }

    // the body between the brackets is at most 3 characters long
    let close = match input.find('>') {
        Some(pos) if pos <= 4 => pos,
        _ => return Err(Error::UnterminatedPriority),
    };

    let body = &input[1..close];
    if body.is_empty() || !body.bytes().all(|ch| ch.is_ascii_digit()) {
        return Err(Error::InvalidPriority(body.to_owned()));
    }

    let value = body
        .bytes()
        .fold(0u16, |acc, ch| acc * 10 + (ch - b'0') as u16);
    let priority = Priority::from_value(value)?;

    Ok((priority, &input[close + 1..]))
}

/// Strip a leading priority marker.
///
/// On any failure the marker is left in place and no priority is returned.
pub fn strip_priority(input: &str) -> (Option<Priority>, &str) {
    match parse_priority(input) {
        Ok((priority, rest)) => (Some(priority), rest),
        Err(err) => {
            trace!(message = "Priority not stripped.", %err);
            (None, input)
        }
    }
}
