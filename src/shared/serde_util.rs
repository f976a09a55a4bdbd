//! Timestamp parsing for loosely typed wire values.
//!
//! Price history pairs carry their timestamp either as epoch milliseconds or as
//! a date string. The accepted forms follow what a browser `Date` accepts in
//! practice: RFC 3339, RFC 2822, a bare `YYYY-MM-DD` (UTC midnight) and a
//! zone-less date-time (interpreted in the supplied local zone).

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

/// Largest absolute time value a browser `Date` can represent.
const MAX_TIME_MS: f64 = 8.64e15;

const LOCAL_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Converts a numeric time value to whole epoch milliseconds.
///
/// Fractions are truncated toward zero. Non-finite or out-of-range values
/// yield `None`.
pub fn millis_from_number(value: f64) -> Option<i64> {
    if !value.is_finite() || value.abs() > MAX_TIME_MS {
        return None;
    }
    Some(value.trunc() as i64)
}

/// Parses a date string into epoch milliseconds.
pub fn millis_from_str<Tz: TimeZone>(s: &str, local: &Tz) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc().timestamp_millis());
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return resolve_local(naive, |n| local.from_local_datetime(n))
                .map(|dt| dt.timestamp_millis());
        }
    }

    DateTime::parse_from_rfc2822(s)
        .ok()
        .map(|dt| dt.timestamp_millis())
}

/// Resolves a wall-clock time the way a browser `Date` does: ambiguous times
/// take the earlier instant, and times skipped by a forward transition move
/// one hour later.
fn resolve_local<T>(
    naive: NaiveDateTime,
    resolve: impl Fn(&NaiveDateTime) -> LocalResult<T>,
) -> Option<T> {
    match resolve(&naive) {
        LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => Some(t),
        LocalResult::None => {
            let shifted = naive.checked_add_signed(Duration::hours(1))?;
            resolve(&shifted).earliest()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike, Utc};

    #[test]
    fn test_millis_from_number() {
        assert_eq!(millis_from_number(1_717_200_000_000.0), Some(1_717_200_000_000));
        assert_eq!(millis_from_number(1.9), Some(1));
        assert_eq!(millis_from_number(-1.9), Some(-1));
        assert_eq!(millis_from_number(f64::NAN), None);
        assert_eq!(millis_from_number(f64::INFINITY), None);
        assert_eq!(millis_from_number(9e15), None);
    }

    #[test]
    fn test_rfc3339() {
        assert_eq!(
            millis_from_str("2024-06-01T00:00:00Z", &Utc),
            Some(1_717_200_000_000)
        );
        assert_eq!(
            millis_from_str("2024-06-01T02:00:00+02:00", &Utc),
            Some(1_717_200_000_000)
        );
        assert_eq!(
            millis_from_str("2024-06-01T00:00:00.250Z", &Utc),
            Some(1_717_200_000_250)
        );
    }

    #[test]
    fn test_date_only_is_utc_midnight() {
        let plus_five = FixedOffset::east_opt(5 * 3600).unwrap();
        assert_eq!(
            millis_from_str("2024-06-01", &plus_five),
            Some(1_717_200_000_000)
        );
    }

    #[test]
    fn test_zoneless_datetime_uses_local_zone() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            millis_from_str("2024-06-01T02:00:00", &plus_two),
            Some(1_717_200_000_000)
        );
        assert_eq!(
            millis_from_str("2024-06-01 02:00", &plus_two),
            Some(1_717_200_000_000)
        );
    }

    // Wall clock jumps from 02:00 to 03:00.
    fn spring_forward(n: &NaiveDateTime) -> LocalResult<u32> {
        match n.hour() {
            2 => LocalResult::None,
            h => LocalResult::Single(h * 100 + n.minute()),
        }
    }

    // Wall clock repeats 01:00-02:00; the tag marks which pass.
    fn fall_back(n: &NaiveDateTime) -> LocalResult<(u32, u8)> {
        let hm = n.hour() * 100 + n.minute();
        match n.hour() {
            1 => LocalResult::Ambiguous((hm, 0), (hm, 1)),
            _ => LocalResult::Single((hm, 0)),
        }
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_local_gap_moves_forward() {
        assert_eq!(resolve_local(at(2, 30), spring_forward), Some(330));
        assert_eq!(resolve_local(at(1, 59), spring_forward), Some(159));
        assert_eq!(resolve_local(at(3, 0), spring_forward), Some(300));
    }

    #[test]
    fn test_local_overlap_takes_earlier() {
        assert_eq!(resolve_local(at(1, 30), fall_back), Some((130, 0)));
        assert_eq!(resolve_local(at(4, 0), fall_back), Some((400, 0)));
    }

    #[test]
    fn test_rfc2822() {
        assert_eq!(
            millis_from_str("Sat, 01 Jun 2024 00:00:00 GMT", &Utc),
            Some(1_717_200_000_000)
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(millis_from_str("", &Utc), None);
        assert_eq!(millis_from_str("yesterday", &Utc), None);
        assert_eq!(millis_from_str("2024-13-45", &Utc), None);
    }
}
