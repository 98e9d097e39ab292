//! Date/time display utilities.
//!
//! Two layers are involved in turning a task date into text:
//!
//! - A [`DateFormatter`] renders the civil date/time of a [`Zoned`] value in
//!   a given [`DateStyle`]. [`PatternDateFormatter`] is the default, driven
//!   by `strftime`-style patterns.
//! - [`TimeFormatter`] wraps a date formatter and appends the abbreviated
//!   name of the task's time zone, when the task has one.

use jiff::{fmt::strtime, tz::TimeZone, Zoned};
use log::trace;

use crate::error::{DateResultExt, Result};

/// Default pattern for [`DateStyle::Details`], e.g. `Wed, May 1, 2024, 10:00 AM`.
pub const DETAILS_PATTERN: &str = "%a, %b %-d, %Y, %-I:%M %p";

/// Default pattern for [`DateStyle::Short`], e.g. `May 1, 2024`.
pub const SHORT_PATTERN: &str = "%b %-d, %Y";

/// How much of a date/time value to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Date and clock time, as shown in a details view
    Details,

    /// Date only
    Short,
}

/// Formats date/time values for display.
pub trait DateFormatter {
    fn format(&self, time: &Zoned, style: DateStyle) -> Result<String>;
}

/// [`DateFormatter`] backed by one `strftime` pattern per style.
#[derive(Debug, Clone)]
pub struct PatternDateFormatter {
    details: String,
    short: String,
}

impl PatternDateFormatter {
    /// Create a formatter with the default patterns.
    pub fn new() -> Self {
        Self {
            details: DETAILS_PATTERN.to_string(),
            short: SHORT_PATTERN.to_string(),
        }
    }

    /// Sets the pattern used for [`DateStyle::Details`].
    pub fn with_details_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.details = pattern.into();
        self
    }

    /// Sets the pattern used for [`DateStyle::Short`].
    pub fn with_short_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.short = pattern.into();
        self
    }

    fn pattern(&self, style: DateStyle) -> &str {
        match style {
            DateStyle::Details => &self.details,
            DateStyle::Short => &self.short,
        }
    }
}

impl Default for PatternDateFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DateFormatter for PatternDateFormatter {
    fn format(&self, time: &Zoned, style: DateStyle) -> Result<String> {
        let pattern = self.pattern(style);
        strtime::format(pattern, time)
            .date_context(&format!("cannot format {time} with pattern '{pattern}'"))
    }
}

/// Formats task dates in the details style, suffixed with the task's time
/// zone abbreviation.
///
/// # Format
///
/// `<details date/time>[ <zone abbreviation>]`, e.g.
/// `Wed, May 1, 2024, 10:00 AM UTC`. With a time zone, the clock time is
/// that of the zone the suffix names. Without one, the suffix is omitted
/// entirely; no default zone is implied.
pub struct TimeFormatter<'a> {
    dates: &'a dyn DateFormatter,
}

impl<'a> TimeFormatter<'a> {
    pub fn new(dates: &'a dyn DateFormatter) -> Self {
        Self { dates }
    }

    /// Formats `time`, appending the abbreviation of `zone` if given.
    ///
    /// With a zone, the instant of `time` is shown as clock time in `zone`,
    /// and the abbreviation reflects whether that instant falls in daylight
    /// saving time there. Without one, `time` is shown as is.
    pub fn format(&self, time: &Zoned, zone: Option<&TimeZone>) -> Result<String> {
        let Some(zone) = zone else {
            return self.dates.format(time, DateStyle::Details);
        };
        let local = time.with_time_zone(zone.clone());
        let date_time = self.dates.format(&local, DateStyle::Details)?;
        Ok(format!("{date_time} {}", zone_abbreviation(zone, &local)))
    }
}

/// Short name of `zone` at the instant of `time`.
///
/// Falls back to the numeric offset for zones without abbreviations.
fn zone_abbreviation(zone: &TimeZone, time: &Zoned) -> String {
    let info = zone.to_offset_info(time.timestamp());
    trace!(
        "{} is {}in daylight saving time",
        time.timestamp(),
        if info.dst().is_dst() { "" } else { "not " }
    );
    let abbreviation = info.abbreviation();
    if abbreviation.is_empty() {
        info.offset().to_string()
    } else {
        abbreviation.to_string()
    }
}
