//! Terminal wait timer

use std::io::Write;
use std::time::Duration;

/// `HH:MM:SS` rendering of a second count
pub fn format_hms(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Sleep for `secs` seconds, redrawing a `[*] Waiting HH:MM:SS` line each
/// second when `visible`
pub async fn countdown(secs: u64, visible: bool) {
    if secs == 0 {
        return;
    }

    if !visible {
        tokio::time::sleep(Duration::from_secs(secs)).await;
        return;
    }

    let mut stdout = std::io::stdout();
    for remaining in (1..=secs).rev() {
        let _ = write!(stdout, "[*] Waiting {}     \r", format_hms(remaining));
        let _ = stdout.flush();
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    let _ = write!(stdout, "{:width$}\r", "", width = 32);
    let _ = stdout.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(3_661), "01:01:01");
        assert_eq!(format_hms(100 * 3600), "100:00:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_hidden_countdown_sleeps_full_duration() {
        let start = tokio::time::Instant::now();
        countdown(90, false).await;
        assert_eq!(start.elapsed(), Duration::from_secs(90));
    }
}
