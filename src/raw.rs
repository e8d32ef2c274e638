use std::borrow::Cow;

use bytes::Bytes;
use encoding_rs::Encoding;
use tracing::warn;

/// The payload an event was built from, exactly as the transport handed it over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawPayload {
    /// Text that was already decoded by the transport.
    Text(String),
    /// A receive buffer of which only the first `len` bytes are valid.
    Bytes { buf: Bytes, len: usize },
}

impl RawPayload {
    /// Wrap a receive buffer, clamping `len` to the buffer size.
    pub fn from_bytes(buf: impl Into<Bytes>, len: usize) -> Self {
        let buf = buf.into();
        let len = if len > buf.len() {
            warn!(
                message = "Valid length exceeds the receive buffer, truncating.",
                len,
                buffer_len = buf.len(),
            );
            buf.len()
        } else {
            len
        };

        RawPayload::Bytes { buf, len }
    }

    /// Text form of the payload.
    ///
    /// Malformed sequences in byte payloads are replaced with U+FFFD.
    pub fn text(&self, charset: &'static Encoding) -> Cow<'_, str> {
        match self {
            RawPayload::Text(text) => Cow::Borrowed(text),
            RawPayload::Bytes { buf, len } => {
                let (text, had_errors) = charset.decode_without_bom_handling(&buf[..*len]);
                if had_errors {
                    warn!(
                        message = "Replaced malformed sequences with replacement character while decoding.",
                        from_encoding = %charset.name(),
                    );
                }
                text
            }
        }
    }

    /// Byte form of the payload. Its length is always [`RawPayload::len`].
    pub fn bytes(&self, charset: &'static Encoding) -> Bytes {
        match self {
            RawPayload::Text(text) => encode(text, charset).into_owned().into(),
            RawPayload::Bytes { buf, len } if buf.len() == *len => buf.clone(),
            RawPayload::Bytes { buf, len } => buf.slice(..*len),
        }
    }

    /// Number of raw bytes; text payloads count their encoded length.
    pub fn len(&self, charset: &'static Encoding) -> usize {
        match self {
            RawPayload::Text(text) => encode(text, charset).len(),
            RawPayload::Bytes { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RawPayload::Text(text) => text.is_empty(),
            RawPayload::Bytes { len, .. } => *len == 0,
        }
    }
}

fn encode<'a>(text: &'a str, charset: &'static Encoding) -> Cow<'a, [u8]> {
    let (bytes, _, _unmappable) = charset.encode(text);
    bytes
}
