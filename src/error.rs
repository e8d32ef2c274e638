use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("message does not start with '<'")]
    MissingPriorityOpen,
    #[error("no '>' within the first 4 characters")]
    UnterminatedPriority,
    #[error("invalid priority value {0:?}")]
    InvalidPriority(String),
    #[error("priority {0} out of range")]
    PriorityOutOfRange(u32),
    #[error("bad severity in message")]
    BadSeverity,
    #[error("bad facility in message")]
    BadFacility,
    #[error("input does not have the shape of a BSD timestamp")]
    TimestampShape,
    #[error("invalid month {0:?}")]
    InvalidMonth(String),
    #[error("invalid timestamp")]
    InvalidTimestamp,
    #[error("local time is ambiguous or does not exist")]
    AmbiguousLocalTime,
    #[error("unknown charset {0:?}")]
    UnknownCharset(String),
}
