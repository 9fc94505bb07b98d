use alloc::string::String;
use core::fmt::{self, Write};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::info::ValueKind;
use crate::value::{Decoded, Format, Loss, Scalar};

// -----------------------------------------------------------------------------
// Time

/// A UTC timestamp with microsecond precision.
///
/// The text form is ISO-8601, `YYYY-MM-DDTHH:MM:SS.ffffffZ`. Reading accepts
/// a missing `Z` and any number of fractional digits; digits beyond the sixth
/// are cut off and reported as a precision loss.
///
/// # Examples
///
/// ```
/// use sa_archive::value::{Format, Scalar, Time};
///
/// let t = Time::parse("2000-02-12T12:09:48.17871Z").unwrap();
///
/// let mut text = String::new();
/// t.encode(&Format::default(), &mut text);
/// assert_eq!(text, "2000-02-12T12:09:48.178710Z");
///
/// assert_eq!(Time::parse("2000-02-12T12:09:48.17871"), Some(t));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(DateTime<Utc>);

impl Time {
    pub const EPOCH: Self = Self(DateTime::<Utc>::UNIX_EPOCH);

    /// Wrap a [`DateTime`], cutting it to microseconds.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        let micros = datetime.timestamp_subsec_micros();
        match datetime.with_nanosecond(micros * 1_000) {
            Some(cut) => Self(cut),
            None => Self(datetime),
        }
    }

    /// Build a timestamp from calendar fields, `None` if they do not form a valid time.
    pub fn from_ymd_hms_micro(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        micro: u32,
    ) -> Option<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_micro_opt(hour, minute, second, micro)?;
        Some(Self(naive.and_utc()))
    }

    /// Parse the text form, ignoring precision loss.
    #[inline]
    pub fn parse(text: &str) -> Option<Self> {
        Self::decode(text).map(|decoded| decoded.value)
    }

    #[inline]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Microseconds within the second.
    #[inline]
    pub fn subsec_micros(&self) -> u32 {
        // Leap seconds are folded into the last microsecond.
        self.0.timestamp_subsec_micros().min(999_999)
    }
}

impl Default for Time {
    #[inline]
    fn default() -> Self {
        Self::EPOCH
    }
}

impl From<DateTime<Utc>> for Time {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(datetime)
    }
}

impl fmt::Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        self.encode(&Format::default(), &mut text);
        f.write_str(&text)
    }
}

impl Scalar for Time {
    const KIND: ValueKind = ValueKind::Timestamp;

    fn decode(text: &str) -> Option<Decoded<Self>> {
        let text = text.trim();
        let body = text.strip_suffix('Z').unwrap_or(text);
        let (main, fraction) = body.split_once('.').unwrap_or((body, ""));

        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let naive = NaiveDateTime::parse_from_str(main, "%Y-%m-%dT%H:%M:%S").ok()?;

        let kept = &fraction[..fraction.len().min(6)];
        let mut micros = 0_u32;
        for digit in kept.bytes() {
            micros = micros * 10 + u32::from(digit - b'0');
        }
        micros *= 10_u32.pow(6 - kept.len() as u32);

        let value = Self(naive.with_nanosecond(micros * 1_000)?.and_utc());
        if fraction.len() > 6 && fraction.bytes().skip(6).any(|b| b != b'0') {
            Some(Decoded::lossy(value, Loss::Precision))
        } else {
            Some(Decoded::exact(value))
        }
    }

    fn encode(&self, format: &Format, out: &mut String) {
        let t = &self.0;
        let _ = write!(
            out,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            t.year(),
            t.month(),
            t.day(),
            t.hour(),
            t.minute(),
            t.second(),
        );
        let digits = format.time_precision();
        if digits > 0 {
            let scaled = self.subsec_micros() / 10_u32.pow(6 - u32::from(digits));
            let _ = write!(out, ".{:0width$}", scaled, width = usize::from(digits));
        }
        out.push('Z');
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(time: Time, digits: u8) -> String {
        let mut out = String::new();
        time.encode(&Format::new(digits), &mut out);
        out
    }

    #[test]
    fn lenient_read() {
        let expected = Time::from_ymd_hms_micro(2021, 4, 30, 9, 49, 23, 406_014).unwrap();
        assert_eq!(Time::parse("2021-04-30T09:49:23.406014Z"), Some(expected));
        assert_eq!(Time::parse("2021-04-30T09:49:23.406014"), Some(expected));

        let whole = Time::from_ymd_hms_micro(2021, 4, 30, 9, 49, 23, 0).unwrap();
        assert_eq!(Time::parse("2021-04-30T09:49:23Z"), Some(whole));
        assert_eq!(Time::parse("2021-04-30T09:49:23"), Some(whole));

        let tenth = Time::from_ymd_hms_micro(2021, 4, 30, 9, 49, 23, 100_000).unwrap();
        assert_eq!(Time::parse("2021-04-30T09:49:23.1Z"), Some(tenth));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Time::parse("2021-04-30").is_none());
        assert!(Time::parse("2021-13-30T09:49:23Z").is_none());
        assert!(Time::parse("2021-04-30T09:49:23.4a").is_none());
        assert!(Time::parse("yesterday").is_none());
    }

    #[test]
    fn extra_digits_lose_precision() {
        let decoded = Time::decode("2021-04-30T09:49:23.406014789Z").unwrap();
        assert_eq!(decoded.loss, Some(Loss::Precision));
        assert_eq!(decoded.value.subsec_micros(), 406_014);

        let decoded = Time::decode("2021-04-30T09:49:23.406014000Z").unwrap();
        assert!(decoded.loss.is_none());
    }

    #[test]
    fn fixed_precision_write() {
        let t = Time::from_ymd_hms_micro(2000, 2, 12, 12, 9, 48, 178_710).unwrap();
        assert_eq!(encode(t, 6), "2000-02-12T12:09:48.178710Z");
        assert_eq!(encode(t, 3), "2000-02-12T12:09:48.178Z");
        assert_eq!(encode(t, 0), "2000-02-12T12:09:48Z");
        assert_eq!(encode(Time::EPOCH, 6), "1970-01-01T00:00:00.000000Z");
    }

    #[test]
    fn datetime_is_cut_to_micros() {
        let naive = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_nano_opt(0, 0, 0, 123_456_789)
            .unwrap();
        let t = Time::from(naive.and_utc());
        assert_eq!(t.as_datetime().timestamp_subsec_nanos(), 123_456_000);
    }
}
