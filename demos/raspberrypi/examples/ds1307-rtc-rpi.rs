//! Stores the date and time on a DS1307 real-time clock (RTC).
//! Then reads them back every second and prints them.
//!
//! ```
//! RPi   <-> DS1307
//! GND   <-> GND
//! 5V    <-> VCC
//! Pin 5 <-> SCL
//! Pin 3 <-> SDA
//! ```
//!
//! Run with:
//! `cargo run --example ds1307-rtc-rpi`
//!

use ds1307::{Date, Ds1307, Hours, Time, Weekday};
use embedded_hal::blocking::delay::DelayMs;
use linux_embedded_hal::{Delay, I2cdev};

fn main() {
    let dev = I2cdev::new("/dev/i2c-1").unwrap();
    let mut delay = Delay {};
    let mut rtc = Ds1307::new(dev);

    if !rtc.init().unwrap() {
        println!("DS1307 oscillator is not running");
        return;
    }
    rtc.set_date(&Date {
        day: 27,
        weekday: Weekday::TUESDAY,
        month: 12,
        year: 22,
    })
    .unwrap();
    rtc.set_time(&Time {
        seconds: 1,
        minutes: 25,
        hours: Hours::PM(10),
    })
    .unwrap();

    loop {
        let date = rtc.get_date().unwrap();
        let time = rtc.get_time().unwrap();
        let (hours, am_pm) = match time.hours {
            Hours::AM(h) => (h, " AM"),
            Hours::PM(h) => (h, " PM"),
            Hours::H24(h) => (h, ""),
        };
        println!(
            "{:02}:{:02}:{:02}{}  {:02}-{:02}-{:02} <{}>",
            hours,
            time.minutes,
            time.seconds,
            am_pm,
            date.day,
            date.month,
            date.year,
            day_name(date.weekday)
        );
        delay.delay_ms(1000_u16);
    }
}

fn day_name(weekday: u8) -> &'static str {
    match weekday {
        1 => "Sunday",
        2 => "Monday",
        3 => "Tuesday",
        4 => "Wednesday",
        5 => "Thursday",
        6 => "Friday",
        7 => "Saturday",
        _ => "Unknown",
    }
}
