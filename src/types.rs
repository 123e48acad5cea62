//! Time and date value types.

/// Hours in either 12-hour (AM/PM) or 24-hour format.
///
/// The variant is authoritative for interpreting the contained value:
/// the driver encodes the hours register according to it on writes and
/// derives it from the register's mode bit on reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hours {
    /// AM, range `[1-12]`.
    AM(u8),
    /// PM, range `[1-12]`.
    PM(u8),
    /// 24-hour format, range `[0-23]`.
    H24(u8),
}

/// Wall-clock time.
///
/// Field ranges are preconditions, not validated by the driver: writing
/// out-of-range values produces undefined register content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    /// Seconds, range `[0-59]`.
    pub seconds: u8,
    /// Minutes, range `[0-59]`.
    pub minutes: u8,
    /// Hours, in the format chosen by the caller.
    pub hours: Hours,
}

/// Calendar date.
///
/// The year is the two-digit year stored by the device; the century is up
/// to the application. Field ranges are preconditions, not validated by
/// the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    /// Day of the month, range `[1-31]`.
    pub day: u8,
    /// Day of the week, range `[1-7]`, `1` = Sunday.
    ///
    /// This is a caller-assigned ordinal. The device increments it at
    /// midnight but neither the device nor the driver cross-checks it
    /// against the calendar date; it is stored and returned verbatim.
    pub weekday: u8,
    /// Month, range `[1-12]`.
    pub month: u8,
    /// Two-digit year, range `[0-99]`.
    pub year: u8,
}

/// Weekday ordinals in the 1 = Sunday scheme used by the device.
pub struct Weekday;
impl Weekday {
    /// Sunday
    pub const SUNDAY: u8 = 1;
    /// Monday
    pub const MONDAY: u8 = 2;
    /// Tuesday
    pub const TUESDAY: u8 = 3;
    /// Wednesday
    pub const WEDNESDAY: u8 = 4;
    /// Thursday
    pub const THURSDAY: u8 = 5;
    /// Friday
    pub const FRIDAY: u8 = 6;
    /// Saturday
    pub const SATURDAY: u8 = 7;
}
