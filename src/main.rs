//! `rockchip-gpio <GPIO_NAME or GPIO_NUMBER>`
//!
//! Prints the flat number (or name) for the argument followed by the derived
//! bank, pin and register offset. Set `RUST_LOG=debug` to trace conversions.

use rockchip_gpio::{cli, GpioCodec};
use std::io::{self, Write};
use std::process;

fn main() {
    env_logger::init();

    // Non-UTF-8 bytes become U+FFFD and are then rejected as ordinary bad input.
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let status = {
        let mut out = io::stdout().lock();
        cli::run(&GpioCodec::default(), &args, &mut out).and_then(|status| {
            out.flush()?;
            Ok(status)
        })
    };

    match status {
        Ok(status) => process::exit(status),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(cli::EXIT_FAILURE);
        }
    }
}
