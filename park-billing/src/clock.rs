use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use crate::errors::BillingError;

/// UTC offset of the lot-local clock at the observed deployment (UTC+7).
pub const LOT_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// Fixed offset for the deployment's lot-local wall clock.
pub fn lot_offset() -> FixedOffset {
    FixedOffset::east_opt(LOT_UTC_OFFSET_SECS).expect("constant offset is in range")
}

/// Parse the backend's `entry_time` field into an instant.
///
/// The backend emits ISO-8601 with an explicit offset
/// (`2026-02-16T09:15:00+07:00`). Timestamps without an offset are taken as
/// UTC. Anything else is a data-integrity error the caller surfaces before
/// fee computation.
pub fn parse_entry_time(raw: &str) -> Result<DateTime<Utc>, BillingError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")?;
    Ok(naive.and_utc())
}

/// Long wall-clock rendering, e.g. "February 16, 2026, 09:15:00 AM".
pub fn format_time_full(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant
        .with_timezone(&offset)
        .format("%B %-d, %Y, %I:%M:%S %p")
        .to_string()
}

/// Short wall-clock rendering, e.g. "09:15 AM".
pub fn format_time_short(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant.with_timezone(&offset).format("%I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_with_offset() {
        let instant = parse_entry_time("2026-02-16T09:15:00+07:00").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 2, 16, 2, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_utc_marker() {
        let instant = parse_entry_time("2026-02-16T02:15:00Z").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 2, 16, 2, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_assumes_utc() {
        let instant = parse_entry_time("2026-02-16T02:15:00").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 2, 16, 2, 15, 0).unwrap());

        let with_millis = parse_entry_time("2026-02-16T02:15:00.250").unwrap();
        assert!(with_millis > instant);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_entry_time("not-a-timestamp").is_err());
        assert!(parse_entry_time("").is_err());
    }

    #[test]
    fn test_local_rendering() {
        // 02:15 UTC is 09:15 at the lot
        let instant = Utc.with_ymd_and_hms(2026, 2, 16, 2, 15, 0).unwrap();
        assert_eq!(
            format_time_full(instant, lot_offset()),
            "February 16, 2026, 09:15:00 AM"
        );
        assert_eq!(format_time_short(instant, lot_offset()), "09:15 AM");
    }

    #[test]
    fn test_pm_rendering() {
        let instant = Utc.with_ymd_and_hms(2026, 2, 16, 10, 5, 9).unwrap();
        assert_eq!(format_time_short(instant, lot_offset()), "05:05 PM");
    }
}
