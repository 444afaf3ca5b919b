use chrono::{DateTime, Datelike, Duration, Months, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Discrete periods offered by the range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeRange {
    FiveDays,
    OneMonth,
    YearToDate,
    #[default]
    OneYear,
    ThreeYears,
    FiveYears,
}

impl TimeRange {
    pub const ALL: [Self; 6] = [
        Self::FiveDays,
        Self::OneMonth,
        Self::YearToDate,
        Self::OneYear,
        Self::ThreeYears,
        Self::FiveYears,
    ];

    /// Short selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FiveDays => "5D",
            Self::OneMonth => "1M",
            Self::YearToDate => "YTD",
            Self::OneYear => "1Y",
            Self::ThreeYears => "3Y",
            Self::FiveYears => "5Y",
        }
    }

    /// Start instant and sample count for a range ending at `now`.
    #[must_use]
    pub fn policy(self, now: DateTime<Utc>) -> RangePolicy {
        let start = match self {
            Self::FiveDays => now - Duration::days(5),
            Self::OneMonth => months_before(now, 1),
            Self::YearToDate => Utc
                .with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
                .single()
                .unwrap_or(now - Duration::days(1)),
            Self::OneYear => months_before(now, 12),
            Self::ThreeYears => months_before(now, 36),
            Self::FiveYears => months_before(now, 60),
        };
        let point_count = match self {
            Self::FiveDays => 40,
            Self::OneMonth => 30,
            // Daily samples, at least a start and an end point.
            Self::YearToDate => usize::try_from((now - start).num_days().max(0))
                .unwrap_or(0)
                .saturating_add(1)
                .max(2),
            Self::OneYear => 52,
            Self::ThreeYears => 36,
            Self::FiveYears => 60,
        };
        RangePolicy {
            start,
            end: now,
            point_count,
        }
    }
}

fn months_before(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months))
        .unwrap_or(now - Duration::days(i64::from(months) * 30))
}

/// Concrete sampling window for one range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangePolicy {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub point_count: usize,
}

impl RangePolicy {
    /// `point_count` instants evenly spaced from `start` to `end` inclusive.
    #[must_use]
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        match self.point_count {
            0 => Vec::new(),
            1 => vec![self.end],
            count => {
                let span_ms = (self.end - self.start).num_milliseconds();
                let intervals = (count - 1) as i64;
                (0..count)
                    .map(|i| {
                        let offset = span_ms * i as i64 / intervals;
                        self.start + Duration::milliseconds(offset)
                    })
                    .collect()
            }
        }
    }
}
