use crate::Error;

/// Syslog Severities from RFC 5424.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(non_camel_case_types)]
pub enum Severity {
    EMERG = 0,
    ALERT = 1,
    CRIT = 2,
    ERR = 3,
    WARNING = 4,
    NOTICE = 5,
    INFO = 6,
    DEBUG = 7,
}

/// Convert the low three bits of a priority value into a `Severity`.
impl TryFrom<u8> for Severity {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let severity = match value {
            0 => Severity::EMERG,
            1 => Severity::ALERT,
            2 => Severity::CRIT,
            3 => Severity::ERR,
            4 => Severity::WARNING,
            5 => Severity::NOTICE,
            6 => Severity::INFO,
            7 => Severity::DEBUG,
            _ => return Err(Error::BadSeverity),
        };

        Ok(severity)
    }
}

impl Severity {
    /// Convert a syslog severity into a unique string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::EMERG => "emerg",
            Severity::ALERT => "alert",
            Severity::CRIT => "crit",
            Severity::ERR => "err",
            Severity::WARNING => "warning",
            Severity::NOTICE => "notice",
            Severity::INFO => "info",
            Severity::DEBUG => "debug",
        }
    }
}
