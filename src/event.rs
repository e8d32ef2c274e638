//! In-memory representation of a single decoded syslog datagram.

use std::fmt;
use std::net::IpAddr;

use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use encoding_rs::Encoding;

use crate::raw::RawPayload;
use crate::{Decoder, Facility, Severity};

/// A BSD syslog event.
///
/// Built once per datagram by a [`Decoder`]; the decoded fields may be
/// overridden afterwards, the raw payload and sender may not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyslogEvent {
    pub(crate) raw: RawPayload,
    pub(crate) charset: &'static Encoding,
    pub(crate) facility: Option<u8>,
    pub(crate) severity: Option<u8>,
    pub(crate) timestamp: Option<DateTime<FixedOffset>>,
    pub(crate) host: String,
    pub(crate) host_stripped: bool,
    pub(crate) message: String,
    pub(crate) sender: IpAddr,
}

impl SyslogEvent {
    /// Decode text with the default [`Decoder`].
    pub fn from_text(text: impl Into<String>, sender: IpAddr) -> Self {
        Decoder::default().decode_text(text, sender)
    }

    /// Decode the first `len` bytes of `buf` with the default [`Decoder`].
    pub fn from_bytes(buf: impl Into<Bytes>, len: usize, sender: IpAddr) -> Self {
        Decoder::default().decode_bytes(buf, len, sender)
    }

    pub fn raw_payload(&self) -> &RawPayload {
        &self.raw
    }

    /// The original payload as bytes, `raw_len()` long.
    pub fn raw(&self) -> Bytes {
        self.raw.bytes(self.charset)
    }

    pub fn raw_len(&self) -> usize {
        self.raw.len(self.charset)
    }

    pub fn charset(&self) -> &'static Encoding {
        self.charset
    }

    pub fn set_charset(&mut self, charset: &'static Encoding) {
        self.charset = charset;
    }

    pub fn facility(&self) -> Option<u8> {
        self.facility
    }

    pub fn set_facility(&mut self, facility: Option<u8>) {
        self.facility = facility;
    }

    /// Named facility, when the code has a name.
    pub fn facility_name(&self) -> Option<Facility> {
        self.facility.and_then(|code| Facility::try_from(code).ok())
    }

    pub fn severity(&self) -> Option<u8> {
        self.severity
    }

    pub fn set_severity(&mut self, severity: Option<u8>) {
        self.severity = severity;
    }

    pub fn severity_name(&self) -> Option<Severity> {
        self.severity.and_then(|code| Severity::try_from(code).ok())
    }

    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: Option<DateTime<FixedOffset>>) {
        self.timestamp = timestamp;
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = host.into();
    }

    /// Whether the host was found in the message rather than taken from the
    /// sender address.
    pub fn is_host_stripped(&self) -> bool {
        self.host_stripped
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn sender(&self) -> IpAddr {
        self.sender
    }
}

impl fmt::Display for SyslogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(timestamp) = self.timestamp {
            write!(f, "{} ", timestamp.format("%b %e %H:%M:%S"))?;
        }

        write!(f, "{}", self.host)?;

        match (self.facility_name(), self.severity_name()) {
            (Some(facility), Some(severity)) => {
                write!(f, " {}.{}", facility.as_str(), severity.as_str())?
            }
            _ => {
                if let (Some(facility), Some(severity)) = (self.facility, self.severity) {
                    write!(f, " {facility}.{severity}")?
                }
            }
        }

        write!(f, ": {}", self.message)
    }
}
