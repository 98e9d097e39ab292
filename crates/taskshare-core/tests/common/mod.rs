use jiff::{civil::date, tz::TimeZone, Zoned};

/// Installs a test logger so `RUST_LOG=trace` shows rendered output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 2024-05-01 at the given hour in UTC.
pub fn may_first_utc(hour: i8) -> Zoned {
    date(2024, 5, 1)
        .at(hour, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .expect("valid UTC date")
}
