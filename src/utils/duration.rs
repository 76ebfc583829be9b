//! Countdown formatting.

use std::time::Duration;

/// Format a remaining duration compactly: `1h2m3s`, `1m0s`, `59s`, `1.5s`, `0s`.
///
/// Larger units are only shown when non-zero at the top; once a larger unit is
/// shown, every smaller unit follows it (so one minute reads `1m0s`).
pub fn format_countdown(duration: Duration) -> String {
    let total_millis = duration.as_millis();
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis / 60_000) % 60;
    let millis_in_minute = total_millis % 60_000;
    let seconds = millis_in_minute / 1000;
    let fraction = millis_in_minute % 1000;

    let seconds = if fraction == 0 {
        format!("{}s", seconds)
    } else {
        let decimals = format!("{:03}", fraction);
        format!("{}.{}s", seconds, decimals.trim_end_matches('0'))
    };

    if hours > 0 {
        format!("{}h{}m{}", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}", minutes, seconds)
    } else {
        seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(Duration::ZERO), "0s");
        assert_eq!(format_countdown(Duration::from_secs(59)), "59s");
        assert_eq!(format_countdown(Duration::from_secs(60)), "1m0s");
        assert_eq!(format_countdown(Duration::from_secs(90)), "1m30s");
        assert_eq!(format_countdown(Duration::from_secs(3661)), "1h1m1s");
        assert_eq!(format_countdown(Duration::from_secs(3600)), "1h0m0s");
    }

    #[test]
    fn test_format_fractional_seconds() {
        assert_eq!(format_countdown(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_countdown(Duration::from_millis(61_250)), "1m1.25s");
        assert_eq!(format_countdown(Duration::from_millis(5)), "0.005s");
    }
}
