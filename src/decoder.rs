use std::net::IpAddr;

use bytes::Bytes;
use chrono::{DateTime, Local};
use tracing::trace;

use crate::hostname::strip_hostname;
use crate::priority::strip_priority;
use crate::raw::RawPayload;
use crate::timestamp::strip_timestamp;
use crate::{Config, SyslogEvent};

/// Turns raw datagrams into [`SyslogEvent`]s.
///
/// Decoding never fails: fields that cannot be found are left unset, and the
/// host falls back to the sender address.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decoder {
    config: Config,
}

impl Decoder {
    pub fn new(config: Config) -> Self {
        Decoder { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn decode_text(&self, text: impl Into<String>, sender: IpAddr) -> SyslogEvent {
        self.decode_text_at(text, sender, Local::now())
    }

    /// Like [`Decoder::decode_text`], with `now` supplying the year and the
    /// fallback timestamp.
    pub fn decode_text_at(
        &self,
        text: impl Into<String>,
        sender: IpAddr,
        now: DateTime<Local>,
    ) -> SyslogEvent {
        self.decode(RawPayload::Text(text.into()), sender, now)
    }

    /// Decode the first `len` bytes of `buf`; anything past them is ignored.
    pub fn decode_bytes(&self, buf: impl Into<Bytes>, len: usize, sender: IpAddr) -> SyslogEvent {
        self.decode_bytes_at(buf, len, sender, Local::now())
    }

    pub fn decode_bytes_at(
        &self,
        buf: impl Into<Bytes>,
        len: usize,
        sender: IpAddr,
        now: DateTime<Local>,
    ) -> SyslogEvent {
        self.decode(RawPayload::from_bytes(buf, len), sender, now)
    }

    fn decode(&self, raw: RawPayload, sender: IpAddr, now: DateTime<Local>) -> SyslogEvent {
        let charset = self.config.charset;

        // order matters, every stage works on what the previous one left
        let (priority, timestamp, host, message) = {
            let text = raw.text(charset);
            let (priority, rest) = strip_priority(&text);
            let (timestamp, rest) = strip_timestamp(rest, &now);
            let (host, rest) = strip_hostname(rest);

            (priority, timestamp, host.map(str::to_owned), rest.to_owned())
        };

        let host_stripped = host.is_some();
        let host = host.unwrap_or_else(|| sender.to_string());

        trace!(
            message = "Decoded syslog event.",
            priority = ?priority.map(|p| p.value()),
            ?timestamp,
            %host,
            host_stripped,
            %sender,
        );

        SyslogEvent {
            raw,
            charset,
            facility: priority.map(|p| p.facility),
            severity: priority.map(|p| p.severity),
            timestamp,
            host,
            host_stripped,
            message,
            sender,
        }
    }
}
