use encoding_rs::{Encoding, UTF_8};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Decoder settings.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Character set used to turn byte payloads into text and back, given as
    /// a label from the [Encoding Standard](https://encoding.spec.whatwg.org/).
    pub charset: &'static Encoding,
}

impl Default for Config {
    fn default() -> Self {
        Config { charset: UTF_8 }
    }
}

impl Config {
    pub fn with_charset_label(label: &str) -> Result<Self, Error> {
        let charset = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| Error::UnknownCharset(label.to_owned()))?;

        Ok(Config { charset })
    }
}
