//! Packed-BCD codec for the DS1307 register file.
//!
//! The seven clock registers all hold packed BCD and are treated
//! uniformly. The weekday register is numerically binary on the device,
//! but its `[1-7]` range is BCD-invariant so it goes through the same
//! conversions.

use crate::types::Hours;
use crate::BitFlags;

/// Converts a decimal value in `[0-99]` to packed BCD.
///
/// Values of 100 or more overflow the high nibble and produce undefined
/// register content; callers keep inputs in range.
pub(crate) fn decimal_to_packed_bcd(dec: u8) -> u8 {
    if dec < 10 {
        dec
    } else {
        ((dec / 10) << 4) | (dec % 10)
    }
}

/// Converts a packed-BCD byte to its decimal value.
///
/// Inverse of [`decimal_to_packed_bcd`] for valid BCD input (both
/// nibbles in `[0-9]`).
pub(crate) fn packed_bcd_to_decimal(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}

/// Packs hours into the hours-register layout.
///
/// Bit 6 selects 12-hour mode, bit 5 is the PM flag while in 12-hour
/// mode. The hours value must already be expressed in the scale of its
/// variant (`[1-12]` or `[0-23]`).
pub(crate) fn encode_hours(hours: Hours) -> u8 {
    match hours {
        Hours::H24(h) => decimal_to_packed_bcd(h) & !BitFlags::H24_H12,
        Hours::AM(h) => (decimal_to_packed_bcd(h) | BitFlags::H24_H12) & !BitFlags::AM_PM,
        Hours::PM(h) => decimal_to_packed_bcd(h) | BitFlags::H24_H12 | BitFlags::AM_PM,
    }
}

/// Unpacks the hours register into hours plus format.
pub(crate) fn decode_hours(data: u8) -> Hours {
    if data & BitFlags::H24_H12 == 0 {
        Hours::H24(packed_bcd_to_decimal(data))
    } else {
        let h = packed_bcd_to_decimal(data & !(BitFlags::H24_H12 | BitFlags::AM_PM));
        if data & BitFlags::AM_PM == 0 {
            Hours::AM(h)
        } else {
            Hours::PM(h)
        }
    }
}

/// Packs seconds into the seconds-register layout.
///
/// Bit 7 is the clock-halt flag and is always cleared, so every seconds
/// write re-enables the oscillator.
pub(crate) fn encode_seconds(seconds: u8) -> u8 {
    decimal_to_packed_bcd(seconds) & !BitFlags::CH
}

/// Unpacks the seconds register, discarding the clock-halt flag.
pub(crate) fn decode_seconds(data: u8) -> u8 {
    packed_bcd_to_decimal(data & !BitFlags::CH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bcd_round_trip() {
        for v in 0..100 {
            assert_eq!(packed_bcd_to_decimal(decimal_to_packed_bcd(v)), v);
        }
    }

    #[test]
    fn bcd_known_values() {
        assert_eq!(decimal_to_packed_bcd(0), 0x00);
        assert_eq!(decimal_to_packed_bcd(9), 0x09);
        assert_eq!(decimal_to_packed_bcd(10), 0x10);
        assert_eq!(decimal_to_packed_bcd(59), 0x59);
        assert_eq!(decimal_to_packed_bcd(99), 0x99);
    }

    #[test]
    fn hours_pm() {
        let data = encode_hours(Hours::PM(10));
        assert_eq!(data, 0b0111_0000);
        assert_eq!(decode_hours(data), Hours::PM(10));
    }

    #[test]
    fn hours_am() {
        let data = encode_hours(Hours::AM(11));
        assert_eq!(data, 0b0101_0001);
        assert_eq!(decode_hours(data), Hours::AM(11));
    }

    #[test]
    fn hours_24h() {
        let data = encode_hours(Hours::H24(23));
        assert_eq!(data & BitFlags::H24_H12, 0);
        assert_eq!(data, 0x23);
        assert_eq!(decode_hours(data), Hours::H24(23));
    }

    #[test]
    fn seconds_round_trip_clears_halt_flag() {
        for s in 0..60 {
            let data = encode_seconds(s);
            assert_eq!(data & BitFlags::CH, 0);
            assert_eq!(decode_seconds(data), s);
        }
    }

    #[test]
    fn seconds_decode_ignores_halt_flag() {
        assert_eq!(decode_seconds(0x81), 1);
        assert_eq!(decode_seconds(0x01), 1);
    }
}
