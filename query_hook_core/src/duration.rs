/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */
use std::time::Duration;

use crate::error::{QueryHookError, Result};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Round `duration` to the nearest multiple of `precision`.
///
/// Halfway values round up. A zero precision leaves the value untouched and
/// results past `Duration::MAX` saturate.
pub fn round_duration(duration: Duration, precision: Duration) -> Duration {
    let m = precision.as_nanos();
    if m == 0 {
        return duration;
    }
    let n = duration.as_nanos();
    let r = n % m;
    let rounded = if r + r < m { n - r } else { n.saturating_add(m - r) };
    from_nanos(rounded)
}

fn from_nanos(nanos: u128) -> Duration {
    let secs = nanos / NANOS_PER_SEC;
    if secs > u64::MAX as u128 {
        return Duration::MAX;
    }
    Duration::new(secs as u64, (nanos % NANOS_PER_SEC) as u32)
}

/// String form used for durations in messages and fields: `0s`, `850µs`,
/// `1.5ms`, `2s`, `1m30s`, `1h0m5.25s`.
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < NANOS_PER_SEC {
        let (unit_nanos, unit) = match nanos {
            n if n < 1_000 => (1, "ns"),
            n if n < 1_000_000 => (1_000, "µs"),
            _ => (1_000_000, "ms"),
        };
        return format!("{}{}", decimal(nanos, unit_nanos), unit);
    }

    let secs = nanos / NANOS_PER_SEC;
    let (hours, minutes) = (secs / 3600, secs % 3600 / 60);
    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    out.push_str(&decimal(nanos % (60 * NANOS_PER_SEC), NANOS_PER_SEC));
    out.push('s');
    out
}

/// `value / unit` with the fraction written out and trailing zeros dropped.
fn decimal(value: u128, unit: u128) -> String {
    let (whole, frac) = (value / unit, value % unit);
    if frac == 0 {
        return whole.to_string();
    }
    let width = unit.to_string().len() - 1;
    let digits = format!("{:0width$}", frac, width = width);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

/// Parse a precision such as `1ms`, `10us`, `100ns`, `1s`, `1m` or `1h`.
pub fn parse_precision(value: &str) -> Result<Duration> {
    let trimmed = value.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| QueryHookError::invalid_precision(value))?;
    let (amount, unit) = trimmed.split_at(split);
    let amount: u64 = amount
        .parse()
        .map_err(|_| QueryHookError::invalid_precision(value))?;
    let duration = match unit.trim() {
        "ns" => Duration::from_nanos(amount),
        "us" | "µs" => Duration::from_micros(amount),
        "ms" => Duration::from_millis(amount),
        "s" => Duration::from_secs(amount),
        "m" => Duration::from_secs(amount.saturating_mul(60)),
        "h" => Duration::from_secs(amount.saturating_mul(3600)),
        _ => return Err(QueryHookError::invalid_precision(value)),
    };
    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_millisecond() {
        let ms = Duration::from_millis(1);
        assert_eq!(round_duration(Duration::from_micros(1_499), ms), Duration::from_millis(1));
        assert_eq!(round_duration(Duration::from_micros(1_500), ms), Duration::from_millis(2));
        assert_eq!(round_duration(Duration::from_micros(400), ms), Duration::ZERO);
        assert_eq!(round_duration(Duration::from_millis(7), ms), Duration::from_millis(7));
    }

    #[test]
    fn test_round_zero_precision_is_identity() {
        let d = Duration::from_nanos(123_456_789);
        assert_eq!(round_duration(d, Duration::ZERO), d);
    }

    #[test]
    fn test_round_saturates() {
        let max = Duration::MAX - Duration::from_nanos(1);
        assert_eq!(round_duration(max, Duration::from_nanos(4)), Duration::MAX);
    }

    #[test]
    fn test_round_down_near_max() {
        assert_eq!(
            round_duration(Duration::MAX, Duration::from_secs(7)),
            Duration::from_secs(18_446_744_073_709_551_614)
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
        assert_eq!(format_duration(Duration::from_nanos(100)), "100ns");
        assert_eq!(format_duration(Duration::from_micros(10)), "10µs");
        assert_eq!(format_duration(Duration::from_millis(3)), "3ms");
        assert_eq!(format_duration(Duration::from_micros(1_500)), "1.5ms");
        assert_eq!(format_duration(Duration::from_nanos(1_234_567)), "1.234567ms");
        assert_eq!(format_duration(Duration::from_secs(2)), "2s");
        assert_eq!(format_duration(Duration::from_millis(1_500)), "1.5s");
    }

    #[test]
    fn test_format_duration_minutes_and_hours() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(format_duration(Duration::from_millis(3_605_250)), "1h0m5.25s");
        assert_eq!(format_duration(Duration::from_secs(60)), "1m0s");
    }

    #[test]
    fn test_parse_precision() {
        assert_eq!(parse_precision("1ms").unwrap(), Duration::from_millis(1));
        assert_eq!(parse_precision("10us").unwrap(), Duration::from_micros(10));
        assert_eq!(parse_precision("100 ns").unwrap(), Duration::from_nanos(100));
        assert_eq!(parse_precision("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_precision("0s").unwrap(), Duration::ZERO);
        assert!(parse_precision("ms").is_err());
        assert!(parse_precision("5").is_err());
        assert!(parse_precision("5 fortnights").is_err());
    }
}
