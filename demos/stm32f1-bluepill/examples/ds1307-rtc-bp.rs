//! Stores the date and time on a DS1307 real-time clock (RTC).
//! Then reads them back repeatedly and prints them over RTT while
//! blinking LED 0.
//!
//! This example runs on the STM32F1 "BluePill" board using I2C1.
//!
//! ```
//! BP  <-> DS1307
//! GND <-> GND
//! +5V <-> +5V
//! PB8 <-> SCL
//! PB9 <-> SDA
//! ```
//!
//! Run with:
//! `cargo embed --example ds1307-rtc-bp --release`,

#![deny(unsafe_code)]
#![no_std]
#![no_main]

use core::fmt::Write;
use cortex_m_rt::entry;
use ds1307::{Date, Ds1307, Hours, Time, Weekday};
use heapless::String;
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f1xx_hal::{
    delay::Delay,
    i2c::{BlockingI2c, DutyCycle, Mode},
    pac,
    prelude::*,
};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("DS1307 example");
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = pac::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let mut afio = dp.AFIO.constrain();
    let mut gpiob = dp.GPIOB.split();

    let scl = gpiob.pb8.into_alternate_open_drain(&mut gpiob.crh);
    let sda = gpiob.pb9.into_alternate_open_drain(&mut gpiob.crh);

    let i2c = BlockingI2c::i2c1(
        dp.I2C1,
        (scl, sda),
        &mut afio.mapr,
        Mode::Fast {
            frequency: 100_000.hz(),
            duty_cycle: DutyCycle::Ratio2to1,
        },
        clocks,
        1000,
        10,
        1000,
        1000,
    );

    let mut gpioc = dp.GPIOC.split();
    let mut led = gpioc.pc13.into_push_pull_output(&mut gpioc.crh);
    let mut delay = Delay::new(cp.SYST, clocks);

    let mut rtc = Ds1307::new(i2c);
    if !rtc.init().unwrap() {
        rprintln!("DS1307 oscillator is not running");
        loop {
            cortex_m::asm::wfi();
        }
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
        let mut line: String<64> = String::new();
        write!(
            line,
            "{:02}:{:02}:{:02}{}  {:02}-{:02}-{:02} <{}>",
            hours,
            time.minutes,
            time.seconds,
            am_pm,
            date.day,
            date.month,
            date.year,
            day_name(date.weekday)
        )
        .unwrap();
        rprintln!("{}", line);

        led.set_high();
        delay.delay_ms(500_u16);
        led.set_low();
        delay.delay_ms(500_u16);
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
