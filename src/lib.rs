//! # rockchip-gpio
//!
//! Converts Rockchip GPIO identifiers between their symbolic form
//! (`GPIO<bank>_<group><pin>`, e.g. `GPIO1_C1`) and the flat GPIO number used
//! by the kernel and register-level addressing, and derives the register byte
//! offset of a pin.
//!
//! ## Features
//!
//! *   Name to number (`GpioCodec::name_to_number`) and back (`GpioCodec::number_to_name`).
//! *   Structured names (`GpioName`, parsed with `str::parse`) and validated numbers (`GpioNumber`).
//! *   Derived info (`GpioCodec::calculate_info`): bank, pin within bank, register offset.
//! *   Configurable bank and group sizes (`CodecConfig`, default 32 and 8).
//! *   A small command-line tool (`rockchip-gpio GPIO1_C1`, `rockchip-gpio 49`).
//!
//! ## Numbering
//!
//! With the default layout each bank holds 32 GPIOs split into four groups
//! A-D of 8 pins, so `GPIO1_C1` is `1 * 32 + 2 * 8 + 1 = 49`. Every GPIO
//! register slot is 4 bytes wide, giving a register offset of `49 * 4 = 0xC4`.
//!
//! Pins are not checked against the group size: `GPIO0_B9` is accepted and
//! yields 17, the same number as `GPIO0_C1`. Such names are logged at `warn`.
//!
//! ## Basic Usage
//!
//! ```
//! use rockchip_gpio::{GpioCodec, Result};
//!
//! fn main() -> Result<()> {
//!     let codec = GpioCodec::default();
//!
//!     let number = codec.name_to_number("GPIO1_C1")?;
//!     assert_eq!(number, 49);
//!     assert_eq!(codec.number_to_name(49)?, "GPIO1_C1");
//!
//!     let info = codec.calculate_info(49)?;
//!     assert_eq!(info.bank, 1);
//!     assert_eq!(info.pin, 17);
//!     assert_eq!(info.register_offset_hex(), "0x000000C4");
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! The library logs through the `log` facade. The `rockchip-gpio` binary
//! installs `env_logger`, so `RUST_LOG=debug rockchip-gpio 49` shows the
//! conversion steps on stderr.

// Make internal modules private, re-export public types
mod consts;
mod error;
pub mod cli;
pub mod codec;

pub use codec::{
    format_name, parse_gpio_number, CodecConfig, GpioCodec, GpioInfo, GpioName, GpioNumber,
};
pub use error::{Error, ErrorKind, Result};
// Re-export only essential public constants
pub use consts::{DEFAULT_BANK_SIZE, DEFAULT_GROUP_SIZE, REGISTER_STRIDE_BYTES};
