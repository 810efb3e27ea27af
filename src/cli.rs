//! Command-line front end: argument dispatch and printing.
//!
//! Output is written to any [`Write`] so the binary and tests share one code path.

use crate::codec::{parse_gpio_number, GpioCodec, GpioInfo};
use crate::consts::NAME_PREFIX;
use crate::error::{overflow, Result};
use log::debug;
use std::io::Write;

/// Exit status for a successful conversion.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for usage errors and rejected input.
pub const EXIT_FAILURE: i32 = 1;

/// Outcome of converting one command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// A symbolic name was converted to its flat number.
    FromName {
        name: String,
        number: u64,
        info: GpioInfo,
    },
    /// A flat number was converted to its symbolic name.
    FromNumber {
        number: i64,
        name: String,
        info: GpioInfo,
    },
}

impl Conversion {
    /// Headline followed by the five-line info block.
    pub fn lines(&self) -> Vec<String> {
        let (headline, info) = match self {
            Conversion::FromName { name, number, info } => (
                format!("{} corresponds to GPIO number: {}", name, number),
                info,
            ),
            Conversion::FromNumber { number, name, info } => (
                format!("GPIO number {} corresponds to GPIO name: {}", number, name),
                info,
            ),
        };
        let mut lines = vec![headline];
        lines.extend(info.lines());
        lines
    }
}

/// Usage text: invocation line plus two examples.
pub fn usage(program: &str) -> Vec<String> {
    vec![
        format!("Usage: {} <GPIO_NAME or GPIO_NUMBER>", program),
        format!("Example 1: {} GPIO1_C1", program),
        format!("Example 2: {} 49", program),
    ]
}

/// Converts `arg`, treating it as a name when it starts with `GPIO` and as a
/// base-10 number otherwise.
pub fn convert(codec: &GpioCodec, arg: &str) -> Result<Conversion> {
    if arg.starts_with(NAME_PREFIX) {
        debug!("Treating '{}' as a GPIO name", arg);
        let number = codec.name_to_number(arg)?;
        // Flat numbers above i64::MAX have no register offset either.
        let info = codec
            .calculate_info(i64::try_from(number).map_err(|_| overflow("GPIO number"))?)?;
        Ok(Conversion::FromName {
            name: arg.to_string(),
            number,
            info,
        })
    } else {
        debug!("Treating '{}' as a GPIO number", arg);
        let number = parse_gpio_number(arg)?;
        let name = codec.number_to_name(number)?;
        let info = codec.calculate_info(number)?;
        Ok(Conversion::FromNumber { number, name, info })
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Runs the tool on `args` (program name first) and returns the exit status.
///
/// Errors writing to `out` are returned as `Err`; conversion errors are
/// printed as `Error: <message>` and reported through the exit status.
pub fn run<W: Write>(codec: &GpioCodec, args: &[String], out: &mut W) -> Result<i32> {
    let program = args.first().map(String::as_str).unwrap_or("rockchip-gpio");

    let [_, arg] = args else {
        write_lines(out, &usage(program))?;
        return Ok(EXIT_FAILURE);
    };

    match convert(codec, arg) {
        Ok(conversion) => {
            write_lines(out, &conversion.lines())?;
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            debug!("Conversion of '{}' failed: {:?}", arg, e);
            writeln!(out, "Error: {}", e)?;
            Ok(EXIT_FAILURE)
        }
    }
}
