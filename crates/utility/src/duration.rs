/// Format a duration in seconds as a short human-readable string, e.g.
/// `"45 seconds"`, `"5 minutes"`, `"2 hours"` or `"1h 30m"`.
pub fn format_duration(seconds: u32) -> String {
    if seconds < 60 {
        format!("{} seconds", seconds)
    } else if seconds < 3600 {
        let minutes = seconds / 60;
        format!("{} minute{}", minutes, if minutes != 1 { "s" } else { "" })
    } else {
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        if minutes == 0 {
            format!("{} hour{}", hours, if hours != 1 { "s" } else { "" })
        } else {
            format!("{}h {}m", hours, minutes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::format_duration;

    #[test]
    fn formats_seconds() {
        assert_eq!(format_duration(0), "0 seconds");
        assert_eq!(format_duration(45), "45 seconds");
    }

    #[test]
    fn formats_minutes() {
        assert_eq!(format_duration(60), "1 minute");
        assert_eq!(format_duration(300), "5 minutes");
        assert_eq!(format_duration(3599), "59 minutes");
    }

    #[test]
    fn formats_hours() {
        assert_eq!(format_duration(3600), "1 hour");
        assert_eq!(format_duration(7200), "2 hours");
        assert_eq!(format_duration(5400), "1h 30m");
    }
}
