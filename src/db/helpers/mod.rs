use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};

/// Unix seconds at 2001-01-01T00:00:00Z, the Messages epoch.
pub const APPLE_EPOCH_UNIX_SECS: i64 = 978_307_200;

/// Stored `date` values at or above this are nanoseconds; below it, seconds.
pub const NANOSECOND_DATE_THRESHOLD: i64 = 100_000_000_000;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Convert a `message.date` column value to UTC.
pub fn apple_date_to_utc(raw: i64) -> Result<DateTime<Utc>> {
    let (secs, nanos) = if raw.abs() >= NANOSECOND_DATE_THRESHOLD {
        (raw.div_euclid(NANOS_PER_SEC), raw.rem_euclid(NANOS_PER_SEC))
    } else {
        (raw, 0)
    };

    let unix_secs = secs
        .checked_add(APPLE_EPOCH_UNIX_SECS)
        .ok_or_else(|| anyhow!("message date {raw} overflows"))?;
    DateTime::from_timestamp(unix_secs, nanos as u32)
        .ok_or_else(|| anyhow!("message date {raw} is out of range"))
}

/// Nanoseconds since the Messages epoch, the unit modern stores use.
pub fn utc_to_apple_nanos(instant: DateTime<Utc>) -> i64 {
    let secs = instant.timestamp() - APPLE_EPOCH_UNIX_SECS;
    secs.saturating_mul(NANOS_PER_SEC)
        .saturating_add(i64::from(instant.timestamp_subsec_nanos()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn epoch_is_2001() {
        let expected = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(apple_date_to_utc(0).unwrap(), expected);
    }

    #[test]
    fn nanosecond_dates_keep_subseconds() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
            + chrono::Duration::milliseconds(250);
        let raw = utc_to_apple_nanos(instant);

        assert!(raw >= NANOSECOND_DATE_THRESHOLD);
        assert_eq!(apple_date_to_utc(raw).unwrap(), instant);
    }

    #[test]
    fn legacy_second_dates_are_accepted() {
        let instant = Utc.with_ymd_and_hms(2015, 3, 2, 8, 30, 0).unwrap();
        let raw = instant.timestamp() - APPLE_EPOCH_UNIX_SECS;

        assert!(raw < NANOSECOND_DATE_THRESHOLD);
        assert_eq!(apple_date_to_utc(raw).unwrap(), instant);
    }
}
