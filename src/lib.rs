//! This is a platform agnostic Rust driver for the DS1307 real-time clock,
//! based on the [`embedded-hal`] traits.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal
//!
//! This driver allows you to:
//! - Enable the oscillator and check that it is running. See: [`init()`](Ds1307::init).
//! - Set and get the time in 12-hour or 24-hour format. See: [`set_time()`](Ds1307::set_time).
//! - Set and get the calendar date. See: [`set_date()`](Ds1307::set_date).
//!
//! ## The device
//!
//! The DS1307 serial real-time clock (RTC) is a low-power, full
//! binary-coded decimal (BCD) clock/calendar. The clock/calendar provides
//! seconds, minutes, hours, day, date, month, and year information.
//! The DS1307 has a built-in power-sense circuit that detects power
//! failures and automatically switches to the backup supply, so the
//! register file survives loss of host power.
//!
//! Datasheet: [DS1307](https://datasheets.maximintegrated.com/en/ds/DS1307.pdf)
//!
//! ## Interface
//!
//! The device is always found at the 7-bit I2C address `0x68`. Every
//! register access is a two-phase transaction: a write transfer that sets
//! the chip's internal register pointer (and, for writes, carries the data
//! byte in the same transfer), and for reads a separate receive transfer.
//! The DS1307 does not need a repeated start between the two phases, so
//! the driver only requires the blocking [`Write`] and [`Read`] traits
//! from the bus.
//!
//! Composite operations ([`set_time()`](Ds1307::set_time),
//! [`set_date()`](Ds1307::set_date) and their getters) are sequences of
//! independent single-register transactions and are not atomic: if the bus
//! fails partway through, the registers already written keep their new
//! values. The driver performs no retries and propagates every bus error
//! unchanged.
//!
//! Value ranges are documented preconditions. The driver does not validate
//! them; out-of-range input produces undefined register content, not an
//! error.
//!
//! ## Usage example
//!
//! ```no_run
//! use ds1307::{Date, Ds1307, Hours, Time, Weekday};
//! use linux_embedded_hal::I2cdev;
//!
//! let dev = I2cdev::new("/dev/i2c-1").unwrap();
//! let mut rtc = Ds1307::new(dev);
//! let running = rtc.init().unwrap();
//! assert!(running);
//! rtc.set_date(&Date {
//!     day: 27,
//!     weekday: Weekday::TUESDAY,
//!     month: 12,
//!     year: 22,
//! })
//! .unwrap();
//! rtc.set_time(&Time {
//!     seconds: 1,
//!     minutes: 25,
//!     hours: Hours::PM(10),
//! })
//! .unwrap();
//!
//! let date = rtc.get_date().unwrap();
//! let time = rtc.get_time().unwrap();
//! println!("{:02}-{:02}-{:02}", date.day, date.month, date.year);
//! // Get the I2C device back
//! let _dev = rtc.destroy();
//! ```

#![deny(unsafe_code, missing_docs)]
#![no_std]

use embedded_hal::blocking::i2c::{Read, Write};

mod bcd;
mod types;
pub use crate::types::{Date, Hours, Time, Weekday};

/// I2C device address (7-bit), fixed by the chip.
const DEVICE_ADDRESS: u8 = 0b110_1000;

pub(crate) struct Register;
impl Register {
    pub(crate) const SECONDS: u8 = 0x00;
    pub(crate) const MINUTES: u8 = 0x01;
    pub(crate) const HOURS: u8 = 0x02;
    pub(crate) const DOW: u8 = 0x03;
    pub(crate) const DOM: u8 = 0x04;
    pub(crate) const MONTH: u8 = 0x05;
    pub(crate) const YEAR: u8 = 0x06;
}

pub(crate) struct BitFlags;
impl BitFlags {
    /// Clock halt, bit 7 of the seconds register. 0 = oscillator running.
    pub(crate) const CH: u8 = 0b1000_0000;
    /// 12-/24-hour mode select, bit 6 of the hours register. 1 = 12-hour.
    pub(crate) const H24_H12: u8 = 0b0100_0000;
    /// AM/PM while in 12-hour mode, bit 5 of the hours register. 1 = PM.
    pub(crate) const AM_PM: u8 = 0b0010_0000;
}

/// DS1307 driver.
///
/// Owns the bus handle for the duration of its life; call
/// [`destroy()`](Ds1307::destroy) to get it back. The driver holds no
/// other state, the durable state is the chip's own register file.
#[derive(Debug)]
pub struct Ds1307<I2C> {
    i2c: I2C,
}

impl<I2C, E> Ds1307<I2C>
where
    I2C: Write<Error = E> + Read<Error = E>,
{
    /// Create a new instance of the driver.
    ///
    /// Bus bring-up (pin configuration, peripheral enable, clock speed)
    /// is the caller's responsibility; the DS1307 requires standard-mode
    /// speed (100 kHz maximum).
    pub fn new(i2c: I2C) -> Self {
        Ds1307 { i2c }
    }

    /// Destroy the driver instance, return the I2C bus instance.
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Enable the oscillator and confirm that it is running.
    ///
    /// Writes `0x00` to the seconds register, which sets seconds to zero
    /// and clears the clock-halt flag in a single write. This is an
    /// unconditional enable: a clock that was already running gets its
    /// seconds reset as a side effect.
    ///
    /// The register is then read back and the result is `true` when the
    /// clock-halt flag reads cleared, i.e. the oscillator is confirmed
    /// running. `false` leaves the decision whether that is fatal to the
    /// caller.
    pub fn init(&mut self) -> Result<bool, E> {
        self.write_register(Register::SECONDS, 0x00)?;
        let seconds = self.read_register(Register::SECONDS)?;
        Ok(seconds & BitFlags::CH == 0)
    }

    /// Check whether the oscillator is running, without touching the count.
    pub fn running(&mut self) -> Result<bool, E> {
        let seconds = self.read_register(Register::SECONDS)?;
        Ok(seconds & BitFlags::CH == 0)
    }

    /// Set the time.
    ///
    /// Writes the seconds, minutes and hours registers, in that order.
    /// The seconds write also clears the clock-halt flag, so setting the
    /// time always leaves the oscillator enabled.
    ///
    /// The three writes are independent transactions; a bus failure
    /// partway through leaves the registers already written updated.
    pub fn set_time(&mut self, time: &Time) -> Result<(), E> {
        self.write_register(Register::SECONDS, bcd::encode_seconds(time.seconds))?;
        self.write_register(Register::MINUTES, bcd::decimal_to_packed_bcd(time.minutes))?;
        self.write_register(Register::HOURS, bcd::encode_hours(time.hours))
    }

    /// Read the time.
    ///
    /// The hours format is derived from the mode bit of the hours register
    /// and reported through the [`Hours`] variant. The clock-halt flag is
    /// not part of the seconds value and is masked off.
    pub fn get_time(&mut self) -> Result<Time, E> {
        let seconds = bcd::decode_seconds(self.read_register(Register::SECONDS)?);
        let minutes = bcd::packed_bcd_to_decimal(self.read_register(Register::MINUTES)?);
        let hours = bcd::decode_hours(self.read_register(Register::HOURS)?);
        Ok(Time {
            seconds,
            minutes,
            hours,
        })
    }

    /// Set the date.
    ///
    /// Writes the day-of-month, weekday, month and year registers, in that
    /// order, as independent transactions (same non-atomicity caveat as
    /// [`set_time()`](Ds1307::set_time)). The weekday ordinal is stored as
    /// given, it is not derived from the calendar date.
    pub fn set_date(&mut self, date: &Date) -> Result<(), E> {
        self.write_register(Register::DOM, bcd::decimal_to_packed_bcd(date.day))?;
        self.write_register(Register::DOW, bcd::decimal_to_packed_bcd(date.weekday))?;
        self.write_register(Register::MONTH, bcd::decimal_to_packed_bcd(date.month))?;
        self.write_register(Register::YEAR, bcd::decimal_to_packed_bcd(date.year))
    }

    /// Read the date.
    ///
    /// The weekday is returned as the stored ordinal, without validation
    /// against the rest of the date.
    pub fn get_date(&mut self) -> Result<Date, E> {
        let day = bcd::packed_bcd_to_decimal(self.read_register(Register::DOM)?);
        let weekday = bcd::packed_bcd_to_decimal(self.read_register(Register::DOW)?);
        let month = bcd::packed_bcd_to_decimal(self.read_register(Register::MONTH)?);
        let year = bcd::packed_bcd_to_decimal(self.read_register(Register::YEAR)?);
        Ok(Date {
            day,
            weekday,
            month,
            year,
        })
    }

    /// Write a single register: {register address, value} in one transfer.
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), E> {
        let payload: [u8; 2] = [register, value];
        self.i2c.write(DEVICE_ADDRESS, &payload)
    }

    /// Read a single register: set the chip's address pointer with a
    /// one-byte write, then receive one byte in a separate transfer.
    fn read_register(&mut self, register: u8) -> Result<u8, E> {
        self.i2c.write(DEVICE_ADDRESS, &[register])?;
        let mut data = [0];
        self.i2c.read(DEVICE_ADDRESS, &mut data)?;
        Ok(data[0])
    }
}
