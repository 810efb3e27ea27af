//! Conversion between symbolic GPIO names and flat GPIO numbers.
//!
//! A flat number encodes `bank * bank_size + group_index * group_size + pin`,
//! where group `A` has index 0, `B` index 1 and so on.

use crate::consts::{
    DEFAULT_BANK_SIZE, DEFAULT_GROUP_SIZE, GROUP_BASE, NAME_PREFIX, NAME_SEPARATOR,
    REGISTER_STRIDE_BYTES,
};
use crate::error::{invalid_name, overflow, Error, Result};
use log::{debug, trace, warn};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

/// Bank and group sizes a [`GpioCodec`] converts with.
/// Use `CodecConfig::new` or `CodecConfig::default()` to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodecConfig {
    bank_size: u32,
    group_size: u32,
}

impl CodecConfig {
    /// Creates a configuration, returning an error if either size is zero.
    pub fn new(bank_size: u32, group_size: u32) -> Result<Self> {
        if bank_size == 0 || group_size == 0 {
            return Err(Error::InvalidConfig {
                bank_size,
                group_size,
            });
        }
        Ok(CodecConfig {
            bank_size,
            group_size,
        })
    }

    /// Flat GPIO indices per bank.
    #[inline]
    pub fn bank_size(&self) -> u32 {
        self.bank_size
    }

    /// Pins per letter group.
    #[inline]
    pub fn group_size(&self) -> u32 {
        self.group_size
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            bank_size: DEFAULT_BANK_SIZE,
            group_size: DEFAULT_GROUP_SIZE,
        }
    }
}

/// A validated, non-negative flat GPIO number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GpioNumber(u64);

impl GpioNumber {
    /// Creates a GpioNumber, returning an error if the number is negative.
    pub fn new(number: i64) -> Result<Self> {
        u64::try_from(number)
            .map(GpioNumber)
            .map_err(|_| Error::NegativeNumber { number })
    }

    /// Returns the underlying flat index.
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for GpioNumber {
    type Error = Error;

    fn try_from(number: i64) -> Result<Self> {
        GpioNumber::new(number)
    }
}

impl From<u64> for GpioNumber {
    fn from(number: u64) -> Self {
        GpioNumber(number)
    }
}

impl fmt::Display for GpioNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A symbolic GPIO name such as `GPIO1_C1`, split into its parts.
///
/// Parsing (`"GPIO1_C1".parse::<GpioName>()`) accepts lowercase group letters
/// and stores them uppercased. Pins are not checked against the group size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GpioName {
    bank: u64,
    group: char,
    pin: u64,
}

impl GpioName {
    /// Creates a name from its parts. The group letter is uppercased.
    pub fn new(bank: u64, group: char, pin: u64) -> Self {
        GpioName {
            bank,
            group: group.to_ascii_uppercase(),
            pin,
        }
    }

    /// Returns the bank (controller) index.
    #[inline]
    pub fn bank(&self) -> u64 {
        self.bank
    }

    /// Returns the group letter, uppercased when parsed or built with `new`.
    #[inline]
    pub fn group(&self) -> char {
        self.group
    }

    /// Returns the pin index within the group (not checked against the group size).
    #[inline]
    pub fn pin(&self) -> u64 {
        self.pin
    }

    /// Returns the zero-based group index (`A` = 0), or `None` if the group
    /// character sorts before `A`.
    pub fn group_index(&self) -> Option<u64> {
        u64::from(self.group).checked_sub(u64::from(GROUP_BASE))
    }
}

fn is_decimal(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Maps a failed integer parse to `NumberOverflow` when the literal was
/// well-formed but too large, or to `malformed` otherwise.
fn parse_int_error(e: &ParseIntError, malformed: impl FnOnce() -> Error) -> Error {
    match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => overflow("GPIO number"),
        _ => malformed(),
    }
}

impl FromStr for GpioName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let err = || invalid_name(s);

        let (bank_part, pin_part) = s.split_once(NAME_SEPARATOR).ok_or_else(err)?;
        if pin_part.contains(NAME_SEPARATOR) {
            return Err(err());
        }

        let bank_digits = bank_part
            .strip_prefix(NAME_PREFIX)
            .filter(|digits| is_decimal(digits))
            .ok_or_else(err)?;

        let mut rest = pin_part.chars();
        let group = rest
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(err)?;
        let pin_digits = rest.as_str();
        if !is_decimal(pin_digits) {
            return Err(err());
        }

        // Grammar is satisfied; a parse failure now can only be an oversized literal.
        let bank = bank_digits
            .parse::<u64>()
            .map_err(|e| parse_int_error(&e, err))?;
        let pin = pin_digits
            .parse::<u64>()
            .map_err(|e| parse_int_error(&e, err))?;

        trace!("Parsed '{}' as bank={}, group={}, pin={}", s, bank, group, pin);
        Ok(GpioName::new(bank, group, pin))
    }
}

impl fmt::Display for GpioName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            NAME_PREFIX, self.bank, NAME_SEPARATOR, self.group, self.pin
        )
    }
}

/// Formats `GPIO<bank>_<group><pin>` with the group letter uppercased.
pub fn format_name(bank: u64, group: char, pin: u64) -> String {
    GpioName::new(bank, group, pin).to_string()
}

/// Parses a base-10 GPIO number argument. Surrounding whitespace and a leading
/// sign are accepted; negative values are rejected later by the codec.
/// Literals outside the `i64` range yield `Error::NumberOverflow`.
pub fn parse_gpio_number(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|e| {
            parse_int_error(&e, || Error::InvalidNumber {
                input: input.to_string(),
            })
        })
}

/// Derived information about one flat GPIO number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioInfo {
    /// Flat GPIO number.
    pub number: u64,
    /// Bank (controller) index.
    pub bank: u64,
    /// Pin index within the bank.
    pub pin: u64,
    /// Byte offset of the pin's register.
    pub register_offset: u64,
}

impl GpioInfo {
    /// Register offset as `0x` followed by at least 8 uppercase hex digits.
    pub fn register_offset_hex(&self) -> String {
        format!("0x{:08X}", self.register_offset)
    }

    /// The five human-readable lines describing this GPIO, in fixed order.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("GPIO Number: {}", self.number),
            format!("GPIO Bank: {}", self.bank),
            format!("Pin Number: {}", self.pin),
            format!("Register Offset (hex): {}", self.register_offset_hex()),
            format!("Register Offset (dec): {}", self.register_offset),
        ]
    }
}

impl fmt::Display for GpioInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// Converts between GPIO names, flat numbers and register offsets for one
/// fixed [`CodecConfig`].
///
/// The codec holds no mutable state and can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GpioCodec {
    config: CodecConfig,
}

impl GpioCodec {
    /// Creates a codec for the given bank/group layout.
    pub fn new(config: CodecConfig) -> Self {
        GpioCodec { config }
    }

    /// Returns the layout this codec converts with.
    #[inline]
    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// Converts a name like `GPIO1_C1` into its flat number (49 with the default layout).
    ///
    /// Returns `Error::InvalidName` if `name` does not match `GPIO<bank>_<group><pin>`.
    pub fn name_to_number(&self, name: &str) -> Result<u64> {
        let parsed: GpioName = name.parse()?;
        let number = self.name_to_gpio_number(&parsed)?;
        debug!("{} -> {}", name, number);
        Ok(number)
    }

    /// Computes the flat number of an already parsed name.
    pub fn name_to_gpio_number(&self, name: &GpioName) -> Result<u64> {
        let group_index = name
            .group_index()
            .ok_or_else(|| invalid_name(&name.to_string()))?;
        let bank_size = u64::from(self.config.bank_size);
        let group_size = u64::from(self.config.group_size);

        if name.pin >= group_size {
            warn!(
                "{}: pin {} is outside group size {}, result is not canonical",
                name, name.pin, group_size
            );
        }

        let bank_offset = name
            .bank
            .checked_mul(bank_size)
            .ok_or_else(|| overflow("GPIO number"))?;
        let group_offset = group_index
            .checked_mul(group_size)
            .ok_or_else(|| overflow("GPIO number"))?;
        trace!(
            "{}: bank_offset={}, group_offset={}, pin={}",
            name,
            bank_offset,
            group_offset,
            name.pin
        );
        bank_offset
            .checked_add(group_offset)
            .and_then(|n| n.checked_add(name.pin))
            .ok_or_else(|| overflow("GPIO number"))
    }

    /// Converts a flat number into its structured name.
    ///
    /// Returns `Error::NegativeNumber` for numbers below zero.
    pub fn number_to_gpio_name(&self, number: i64) -> Result<GpioName> {
        let number = GpioNumber::new(number)?.value();
        let bank_size = u64::from(self.config.bank_size);
        let group_size = u64::from(self.config.group_size);

        let bank = number / bank_size;
        let pin_in_bank = number % bank_size;
        let group_index = pin_in_bank / group_size;
        let pin_in_group = pin_in_bank % group_size;
        trace!(
            "{}: bank={}, pin_in_bank={}, group_index={}, pin_in_group={}",
            number,
            bank,
            pin_in_bank,
            group_index,
            pin_in_group
        );

        let group = u32::try_from(group_index)
            .ok()
            .and_then(|index| u32::from(GROUP_BASE).checked_add(index))
            .and_then(char::from_u32)
            .ok_or(Error::GroupOutOfRange { group_index })?;
        if !group.is_ascii_uppercase() {
            warn!(
                "GPIO {}: group index {} is past 'Z', rendered as {:?}",
                number, group_index, group
            );
        }

        // Built directly: the rendered group must not be case-folded.
        Ok(GpioName {
            bank,
            group,
            pin: pin_in_group,
        })
    }

    /// Converts a flat number like 49 into its name (`GPIO1_C1` with the default layout).
    ///
    /// Returns `Error::NegativeNumber` for numbers below zero.
    pub fn number_to_name(&self, number: i64) -> Result<String> {
        let name = self.number_to_gpio_name(number)?.to_string();
        debug!("{} -> {}", number, name);
        Ok(name)
    }

    /// Computes bank, pin-in-bank and register offset for a flat number.
    ///
    /// Returns `Error::NegativeNumber` for numbers below zero.
    pub fn calculate_info(&self, number: i64) -> Result<GpioInfo> {
        let number = GpioNumber::new(number)?.value();
        let bank_size = u64::from(self.config.bank_size);
        let register_offset = number
            .checked_mul(REGISTER_STRIDE_BYTES)
            .ok_or_else(|| overflow("register offset"))?;

        Ok(GpioInfo {
            number,
            bank: number / bank_size,
            pin: number % bank_size,
            register_offset,
        })
    }

    /// The five display lines for a flat number (see [`GpioInfo::lines`]).
    pub fn format_info(&self, number: i64) -> Result<Vec<String>> {
        Ok(self.calculate_info(number)?.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_config_validation() {
        assert!(CodecConfig::new(32, 8).is_ok());
        assert!(matches!(
            CodecConfig::new(0, 8),
            Err(Error::InvalidConfig {
                bank_size: 0,
                group_size: 8
            })
        ));
        assert!(CodecConfig::new(32, 0).is_err());

        let config = CodecConfig::default();
        assert_eq!(config.bank_size(), 32);
        assert_eq!(config.group_size(), 8);
    }

    #[test]
    fn test_gpio_number_new() {
        assert_eq!(GpioNumber::new(0).unwrap().value(), 0);
        assert_eq!(GpioNumber::new(49).unwrap().to_string(), "49");
        assert_eq!(GpioNumber::try_from(49i64).unwrap(), GpioNumber::from(49u64));
        assert!(matches!(
            GpioNumber::new(-5),
            Err(Error::NegativeNumber { number: -5 })
        ));
    }

    #[test]
    fn test_parse_name_parts() {
        let name: GpioName = "GPIO1_c1".parse().unwrap();
        assert_eq!(name.bank(), 1);
        assert_eq!(name.group(), 'C');
        assert_eq!(name.pin(), 1);
        assert_eq!(name.group_index(), Some(2));
        assert_eq!(name.to_string(), "GPIO1_C1");
    }

    #[test]
    fn test_parse_name_rejects_malformed() {
        let bad = [
            "GPIOA_3",
            "GPIO1C1",
            "GPIO1_31",
            "GPIO_A3",
            "GPIO1_",
            "GPIO1_A",
            "GPIO1_A3_B2",
            "GPIO1__A3",
            "GPIO-1_A3",
            "GPIO1_A-3",
            "GPIO1_A 3",
            "gpio1_A3",
            "1_A3",
            "",
            "GPIO99999999999999999999_31",
            "GPIO0_A99999999999999999999x",
        ];
        for input in bad {
            let err = input.parse::<GpioName>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "{input:?} should fail to parse");
            assert!(err.to_string().contains(input));
        }
    }

    #[test]
    fn test_name_to_number() {
        let codec = GpioCodec::default();
        assert_eq!(codec.name_to_number("GPIO0_A0").unwrap(), 0);
        assert_eq!(codec.name_to_number("GPIO0_A3").unwrap(), 3);
        assert_eq!(codec.name_to_number("GPIO1_C1").unwrap(), 49);
        assert_eq!(codec.name_to_number("GPIO4_d7").unwrap(), 159);
    }

    #[test]
    fn test_name_to_number_accepts_non_canonical_pin() {
        let codec = GpioCodec::default();
        // Pin 9 spills into group B: 8 + 9
        assert_eq!(codec.name_to_number("GPIO0_B9").unwrap(), 17);
    }

    #[test]
    fn test_oversized_literals_in_names_overflow() {
        let codec = GpioCodec::default();
        // u64::MAX parses; one more does not fit.
        assert_eq!(
            codec.name_to_number("GPIO0_A18446744073709551615").unwrap(),
            u64::MAX
        );
        for input in [
            "GPIO18446744073709551616_A0",
            "GPIO0_A18446744073709551616",
            "GPIO0_A99999999999999999999",
        ] {
            let err = codec.name_to_number(input).unwrap_err();
            assert!(
                matches!(err, Error::NumberOverflow { .. }),
                "{input:?} gave {err:?}"
            );
            assert_eq!(err.kind(), ErrorKind::Range);
        }
    }

    #[test]
    fn test_name_to_number_overflow() {
        let codec = GpioCodec::default();
        let err = codec
            .name_to_number("GPIO18446744073709551615_A0")
            .unwrap_err();
        assert!(matches!(err, Error::NumberOverflow { .. }));
    }

    #[test]
    fn test_number_to_name() {
        let codec = GpioCodec::default();
        assert_eq!(codec.number_to_name(0).unwrap(), "GPIO0_A0");
        assert_eq!(codec.number_to_name(3).unwrap(), "GPIO0_A3");
        assert_eq!(codec.number_to_name(49).unwrap(), "GPIO1_C1");
        assert_eq!(codec.number_to_name(159).unwrap(), "GPIO4_D7");
        assert!(matches!(
            codec.number_to_name(-1),
            Err(Error::NegativeNumber { number: -1 })
        ));
    }

    #[test]
    fn test_number_to_name_past_z() {
        // 27 groups of 1 pin per bank: index 26 renders as the code point after 'Z'.
        let codec = GpioCodec::new(CodecConfig::new(27, 1).unwrap());
        assert_eq!(codec.number_to_name(25).unwrap(), "GPIO0_Z0");
        assert_eq!(codec.number_to_name(26).unwrap(), "GPIO0_[0");

        // Index 32 lands on 'a' and must stay lowercase.
        let codec = GpioCodec::new(CodecConfig::new(64, 1).unwrap());
        assert_eq!(codec.number_to_name(32).unwrap(), "GPIO0_a0");
    }

    #[test]
    fn test_number_to_name_unrepresentable_group() {
        let codec = GpioCodec::new(CodecConfig::new(u32::MAX, 1).unwrap());
        assert!(matches!(
            codec.number_to_name(0x11_0000),
            Err(Error::GroupOutOfRange { .. })
        ));
    }

    #[test]
    fn test_calculate_info() {
        let codec = GpioCodec::default();
        let info = codec.calculate_info(49).unwrap();
        assert_eq!(
            info,
            GpioInfo {
                number: 49,
                bank: 1,
                pin: 17,
                register_offset: 196
            }
        );
        assert_eq!(info.register_offset_hex(), "0x000000C4");
        assert!(codec.calculate_info(-1).is_err());
    }

    #[test]
    fn test_calculate_info_offset_overflow() {
        let codec = GpioCodec::default();
        assert!(matches!(
            codec.calculate_info(i64::MAX),
            Err(Error::NumberOverflow { .. })
        ));
    }

    #[test]
    fn test_format_info_lines() {
        let codec = GpioCodec::default();
        assert_eq!(
            codec.format_info(3).unwrap(),
            vec![
                "GPIO Number: 3",
                "GPIO Bank: 0",
                "Pin Number: 3",
                "Register Offset (hex): 0x0000000C",
                "Register Offset (dec): 12",
            ]
        );
    }

    #[test]
    fn test_custom_layout() {
        let codec = GpioCodec::new(CodecConfig::new(16, 4).unwrap());
        assert_eq!(codec.name_to_number("GPIO2_B3").unwrap(), 2 * 16 + 4 + 3);
        assert_eq!(codec.number_to_name(39).unwrap(), "GPIO2_B3");
        let info = codec.calculate_info(39).unwrap();
        assert_eq!((info.bank, info.pin), (2, 7));
    }

    #[test]
    fn test_parse_gpio_number() {
        assert_eq!(parse_gpio_number("49").unwrap(), 49);
        assert_eq!(parse_gpio_number(" 7 ").unwrap(), 7);
        assert_eq!(parse_gpio_number("-1").unwrap(), -1);
        let err = parse_gpio_number("4x9").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(err.to_string().contains("4x9"));
    }

    #[test]
    fn test_parse_gpio_number_i64_boundary() {
        assert_eq!(parse_gpio_number("9223372036854775807").unwrap(), i64::MAX);
        assert_eq!(parse_gpio_number("-9223372036854775808").unwrap(), i64::MIN);
        for input in [
            "9223372036854775808",
            "-9223372036854775809",
            "99999999999999999999",
        ] {
            let err = parse_gpio_number(input).unwrap_err();
            assert!(
                matches!(err, Error::NumberOverflow { .. }),
                "{input:?} gave {err:?}"
            );
        }
    }
}
