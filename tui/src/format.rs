/// Seconds as zero-padded `MM:SS`. Negative values clamp to `00:00`;
/// minutes keep growing past an hour rather than wrapping.
pub(crate) fn format_clock(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::format_clock;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(180), "03:00");
        assert_eq!(format_clock(599), "09:59");
    }

    #[test]
    fn clamps_negative_to_zero() {
        assert_eq!(format_clock(-3), "00:00");
    }

    #[test]
    fn minutes_do_not_wrap_past_an_hour() {
        assert_eq!(format_clock(3605), "60:05");
    }
}
