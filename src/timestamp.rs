//! BSD timestamps, e.g. `Oct 11 22:14:15`.
//!
//! The wire format carries no year and no offset; the year is taken from the
//! reference time and the result is interpreted in the local time zone.

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
};
use tracing::trace;

use crate::Error;

const MONTHS: [&[u8; 3]; 12] = [
    b"jan", b"feb", b"mar", b"apr", b"may", b"jun", b"jul", b"aug", b"sep", b"oct", b"nov", b"dec",
];

fn parse_month(buf: &[u8]) -> Result<u32, Error> {
    let name = buf.get(..3).ok_or(Error::InvalidTimestamp)?;
    MONTHS
        .iter()
        .position(|month| name.eq_ignore_ascii_case(&month[..]))
        .map(|pos| pos as u32 + 1)
        .ok_or_else(|| Error::InvalidMonth(String::from_utf8_lossy(name).into_owned()))
}

#[inline]
fn expect_char(buf: &[u8], offset: &mut usize, ch: u8) -> Result<(), Error> {
    if buf.get(*offset) != Some(&ch) {
        return Err(Error::InvalidTimestamp);
    }

    *offset += 1;
    Ok(())
}

// Numeric fields may be preceded by whitespace and take every digit that
// follows, so `Oct  1` and `Oct 1  22:14:15` both parse.
fn take_number(buf: &[u8], offset: &mut usize) -> Result<i64, Error> {
    while buf.get(*offset).is_some_and(|ch| ch.is_ascii_whitespace()) {
        *offset += 1;
    }

    let start = *offset;
    let mut value = 0i64;
    while let Some(ch) = buf.get(*offset).filter(|ch| ch.is_ascii_digit()) {
        value = value
            .checked_mul(10)
            .and_then(|value| value.checked_add((ch - b'0') as i64))
            .ok_or(Error::InvalidTimestamp)?;
        *offset += 1;
    }

    if *offset == start {
        return Err(Error::InvalidTimestamp);
    }

    Ok(value)
}

/// Parse `Mmm dd HH:mm:ss` in the given year.
///
/// Out of range fields roll over into the next larger unit: `Feb 29` in a
/// non-leap year is March 1st, `Oct 32` is November 1st and hour 24 is
/// midnight of the following day.
pub fn parse_bsd_timestamp(buf: &[u8], year: i32) -> Result<NaiveDateTime, Error> {
    let month = parse_month(buf)?;

    let mut offset = 3;
    expect_char(buf, &mut offset, b' ')?;
    let day = take_number(buf, &mut offset)?;
    expect_char(buf, &mut offset, b' ')?;
    let hour = take_number(buf, &mut offset)?;
    expect_char(buf, &mut offset, b':')?;
    let minute = take_number(buf, &mut offset)?;
    expect_char(buf, &mut offset, b':')?;
    let second = take_number(buf, &mut offset)?;

    if offset != buf.len() {
        return Err(Error::InvalidTimestamp);
    }

    let seconds = (day - 1)
        .checked_mul(24)
        .and_then(|hours| hours.checked_add(hour))
        .and_then(|hours| hours.checked_mul(60))
        .and_then(|minutes| minutes.checked_add(minute))
        .and_then(|minutes| minutes.checked_mul(60))
        .and_then(|seconds| seconds.checked_add(second))
        .ok_or(Error::InvalidTimestamp)?;

    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.and_time(NaiveTime::MIN))
        .zip(TimeDelta::try_seconds(seconds))
        .and_then(|(start, delta)| start.checked_add_signed(delta))
        .ok_or(Error::InvalidTimestamp)
}

/// Locate a timestamp token by shape only: at least 16 characters with spaces
/// at character positions 3 and 6.
///
/// Returns the byte offset where the 15 character token ends and the byte
/// offset where the remainder starts, one character later.
fn token_bounds(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.char_indices();

    let (_, third) = chars.nth(3)?;
    let (_, sixth) = chars.nth(2)?;
    if third != ' ' || sixth != ' ' {
        return None;
    }

    // the 16th character must exist, it is consumed as the separator
    let (token_end, _) = chars.nth(8)?;
    let rest_start = chars.next().map_or(input.len(), |(pos, _)| pos);

    Some((token_end, rest_start))
}

fn localize(naive: NaiveDateTime) -> Result<DateTime<FixedOffset>, Error> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|datetime| datetime.fixed_offset())
        .ok_or(Error::AmbiguousLocalTime)
}

/// Strip a leading BSD timestamp.
///
/// * If the input does not have the shape of a timestamp nothing happens.
/// * If it has the shape and parses, the timestamp and its trailing separator
///   are removed.
/// * If it has the shape but does not parse, `now` is returned as the
///   timestamp and the input is left untouched.
pub fn strip_timestamp<'a>(
    input: &'a str,
    now: &DateTime<Local>,
) -> (Option<DateTime<FixedOffset>>, &'a str) {
    let Some((token_end, rest_start)) = token_bounds(input) else {
        trace!(message = "Timestamp not stripped.", err = %Error::TimestampShape);
        return (None, input);
    };

    let parsed = parse_bsd_timestamp(input[..token_end].as_bytes(), now.year()).and_then(localize);

    match parsed {
        Ok(timestamp) => (Some(timestamp), &input[rest_start..]),
        Err(err) => {
            trace!(message = "Unparsable timestamp, falling back to the current time.", %err);
            (Some(now.fixed_offset()), input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).earliest().unwrap()
    }

    #[test]
    fn parse() {
        let ts = parse_bsd_timestamp(b"Oct 11 22:14:15", 2003).unwrap();
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2003, 10, 11)
                .unwrap()
                .and_hms_opt(22, 14, 15)
                .unwrap()
        );

        // space padded day, lower case month
        let ts = parse_bsd_timestamp(b"feb  3 01:02:03", 2024).unwrap();
        assert_eq!((ts.month(), ts.day()), (2, 3));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (1, 2, 3));

        assert!(parse_bsd_timestamp(b"Feb 29 00:00:00", 2024).is_ok());
    }

    fn datetime(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn out_of_range_fields_roll_over() {
        for (input, year, want) in [
            ("Feb 29 10:00:00", 2023, datetime(2023, 3, 1, 10, 0, 0)),
            ("Oct 32 22:14:15", 2024, datetime(2024, 11, 1, 22, 14, 15)),
            ("Oct 00 22:14:15", 2024, datetime(2024, 9, 30, 22, 14, 15)),
            ("Oct 11 24:14:15", 2024, datetime(2024, 10, 12, 0, 14, 15)),
            ("Oct 11 25:14:15", 2024, datetime(2024, 10, 12, 1, 14, 15)),
            ("Dec 31 23:59:60", 2024, datetime(2025, 1, 1, 0, 0, 0)),
            ("Oct 11 22:99:15", 2024, datetime(2024, 10, 11, 23, 39, 15)),
        ] {
            assert_eq!(
                parse_bsd_timestamp(input.as_bytes(), year),
                Ok(want),
                "input: {input}"
            );
        }
    }

    #[test]
    fn numeric_fields_skip_leading_whitespace() {
        assert_eq!(
            parse_bsd_timestamp(b"Oct 1  22:14:15", 2024),
            Ok(datetime(2024, 10, 1, 22, 14, 15))
        );
        assert_eq!(
            parse_bsd_timestamp(b"Oct  1 22: 4: 5", 2024),
            Ok(datetime(2024, 10, 1, 22, 4, 5))
        );
        assert_eq!(
            parse_bsd_timestamp(b"Oct 1 222:14:15", 2024),
            Ok(datetime(2024, 10, 10, 6, 14, 15))
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse_bsd_timestamp(b"Foo 11 22:14:15", 2024),
            Err(Error::InvalidMonth("Foo".into()))
        );
        for input in [
            "Oct 1x 22:14:15",
            "Oct 11 22-14-15",
            "Oct 11 22:14",
            "Oct 11 22:14:1x",
            "Oct -1 22:14:15",
            "Oct11 22:14:15 ",
        ] {
            assert_eq!(
                parse_bsd_timestamp(input.as_bytes(), 2024),
                Err(Error::InvalidTimestamp),
                "input: {input}"
            );
        }
    }

    #[test]
    fn bounds() {
        assert_eq!(token_bounds("Oct 11 22:14:15 host"), Some((15, 16)));
        assert_eq!(token_bounds("Oct 11 22:14:15x"), Some((15, 16)));
        assert_eq!(token_bounds("Oct 11 22:14:15"), None);
        assert_eq!(token_bounds("October 11 22:14:15 host"), None);
        assert_eq!(token_bounds(""), None);
        assert_eq!(token_bounds("abc"), None);
        // the separator may be multi-byte
        assert_eq!(token_bounds("Oct 11 22:14:15éhost"), Some((15, 17)));
        // positions count characters, a 4 byte emoji is a single one
        assert_eq!(token_bounds("\u{1f600}ct 11 22:14:15 host"), Some((18, 19)));
        assert_eq!(token_bounds("Oct\u{1f600}11 22:14:15 host"), None);
    }

    #[test]
    fn strips_timestamp() {
        let now = now();
        let (ts, rest) = strip_timestamp("Oct 11 22:14:15 mymachine su: failure", &now);
        let ts = ts.unwrap().naive_local();
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2024, 10, 11)
                .unwrap()
                .and_hms_opt(22, 14, 15)
                .unwrap()
        );
        assert_eq!(rest, "mymachine su: failure");

        // exactly 16 characters leaves nothing behind
        let (ts, rest) = strip_timestamp("Oct 11 22:14:15 ", &now);
        assert!(ts.is_some());
        assert_eq!(rest, "");
    }

    #[test]
    fn shape_mismatch_is_noop() {
        let now = now();
        for input in ["", "short", "Oct 11 22:14:15", "2024-10-11T22:14:15Z host msg"] {
            let (ts, rest) = strip_timestamp(input, &now);
            assert_eq!(ts, None, "input: {input}");
            assert_eq!(rest, input);
        }
    }

    #[test]
    fn unparsable_falls_back_without_consuming() {
        let now = now();
        let input = "abc de fghijklmno rest";
        let (ts, rest) = strip_timestamp(input, &now);
        assert_eq!(ts, Some(now.fixed_offset()));
        assert_eq!(rest, input);
    }
}
