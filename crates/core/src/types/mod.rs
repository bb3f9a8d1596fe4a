//! Shared type definitions and newtypes

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Raw point amount as reported by the server (thousandths of a display point)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Points(pub f64);

impl Points {
    pub fn new(amount: f64) -> Self {
        Points(amount)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Value shown to the user (server amounts are scaled by 1000)
    pub fn display_value(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl std::ops::Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points(self.0 + rhs.0)
    }
}

/// Milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EpochMillis(pub i64);

impl EpochMillis {
    pub fn now() -> Self {
        EpochMillis(chrono::Utc::now().timestamp_millis())
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Whole seconds from `now` until this instant, rounded to nearest
    pub fn secs_after(&self, now: EpochMillis) -> i64 {
        (self.0 as f64 / 1000.0 - now.0 as f64 / 1000.0).round() as i64
    }

    /// Local wall-clock rendering, `yyyy-mm-dd HH:MM:SS`
    pub fn to_local_string(&self) -> String {
        match Local.timestamp_millis_opt(self.0).single() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => self.0.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_display_scaling() {
        assert_eq!(Points(12_500.0).display_value(), 12.5);
        assert_eq!((Points(1000.0) + Points(250.0)).as_f64(), 1250.0);
    }

    #[test]
    fn test_secs_after_rounds() {
        let now = EpochMillis(1_700_000_000_000);
        assert_eq!(EpochMillis(1_700_000_100_000).secs_after(now), 100);
        assert_eq!(EpochMillis(1_700_000_000_600).secs_after(now), 1);
        assert_eq!(EpochMillis(1_700_000_000_400).secs_after(now), 0);
    }
}
