//! Resolution of logical range labels into concrete query windows.

use core::fmt;
use std::str::FromStr;

use chrono::{DateTime, Months, TimeDelta, TimeZone, Utc};

use crate::{Granularity, GraficoError, QueryWindow};

/// The closed set of range labels a chart surface can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeLabel {
    /// Last 5 minutes, intraday cadence.
    Min5,
    /// Last hour, intraday cadence.
    Hour1,
    /// Last 12 hours, intraday cadence.
    Hours12,
    /// Last day, intraday cadence.
    Day1,
    /// Last 7 days, daily cadence.
    Week1,
    /// Last calendar month, daily cadence.
    Month1,
}

impl RangeLabel {
    /// All recognized labels, in selector order.
    pub const ALL: [Self; 6] = [
        Self::Min5,
        Self::Hour1,
        Self::Hours12,
        Self::Day1,
        Self::Week1,
        Self::Month1,
    ];

    /// The data cadence this label queries.
    #[must_use]
    pub const fn granularity(self) -> Granularity {
        match self {
            Self::Min5 | Self::Hour1 | Self::Hours12 | Self::Day1 => Granularity::Intraday,
            Self::Week1 | Self::Month1 => Granularity::Daily,
        }
    }

    /// The canonical wire form of the label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min5 => "5min",
            Self::Hour1 => "1hour",
            Self::Hours12 => "12hours",
            Self::Day1 => "1day",
            Self::Week1 => "1week",
            Self::Month1 => "1month",
        }
    }
}

impl fmt::Display for RangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeLabel {
    type Err = GraficoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5min" => Ok(Self::Min5),
            "1hour" => Ok(Self::Hour1),
            "12hours" => Ok(Self::Hours12),
            "1day" => Ok(Self::Day1),
            "1week" => Ok(Self::Week1),
            "1month" => Ok(Self::Month1),
            other => Err(GraficoError::invalid_range(other)),
        }
    }
}

/// Resolve a raw range label against an explicit clock.
///
/// Pure function of its inputs: `now` is a parameter, never read from
/// ambient state, so callers control time and tests need no clock mocking.
///
/// # Errors
/// Returns `InvalidRange` for labels outside [`RangeLabel::ALL`]; never
/// silently defaults.
pub fn resolve<Tz: TimeZone>(label: &str, now: &DateTime<Tz>) -> Result<QueryWindow, GraficoError> {
    window_for(label.parse()?, now)
}

/// Build the query window for an already-parsed label.
///
/// Intraday windows format `since` from the caller's local wall clock
/// (`now` minus the lookback, `YYYY-MM-DDTHH:MM:SS`, no timezone suffix);
/// that string matches how intraday stores are keyed and is deliberately
/// NOT a UTC instant. Daily windows take the UTC calendar date of the
/// shifted instant. The asymmetry mirrors the backing stores and must not
/// be "fixed" unilaterally.
///
/// # Errors
/// Returns `Data` when stepping back one calendar month underflows the
/// supported date range (unreachable for any real clock).
pub fn window_for<Tz: TimeZone>(
    label: RangeLabel,
    now: &DateTime<Tz>,
) -> Result<QueryWindow, GraficoError> {
    let since = match label {
        RangeLabel::Min5 => now.clone() - TimeDelta::minutes(5),
        RangeLabel::Hour1 => now.clone() - TimeDelta::hours(1),
        RangeLabel::Hours12 => now.clone() - TimeDelta::hours(12),
        RangeLabel::Day1 => now.clone() - TimeDelta::days(1),
        RangeLabel::Week1 => now.clone() - TimeDelta::days(7),
        RangeLabel::Month1 => now
            .clone()
            .checked_sub_months(Months::new(1))
            .ok_or_else(|| {
                GraficoError::Data(format!(
                    "cannot step back one month from {}",
                    now.naive_local()
                ))
            })?,
    };

    let granularity = label.granularity();
    let since = match granularity {
        Granularity::Intraday => since.naive_local().format("%Y-%m-%dT%H:%M:%S").to_string(),
        Granularity::Daily => since
            .with_timezone(&Utc)
            .date_naive()
            .format("%Y-%m-%d")
            .to_string(),
    };

    Ok(QueryWindow { since, granularity })
}
