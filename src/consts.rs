//! Domain constants for Rockchip GPIO numbering.

/// Number of flat GPIO indices per bank (one GPIO controller instance).
pub const DEFAULT_BANK_SIZE: u32 = 32;
/// Number of pins per letter group (A, B, C, D) inside a bank.
pub const DEFAULT_GROUP_SIZE: u32 = 8;

/// Width of one GPIO register slot in bytes. Fixed by the SoC, not derived from the bank layout.
pub const REGISTER_STRIDE_BYTES: u64 = 4;

// --- Symbolic name grammar: GPIO<bank>_<group><pin> ---
pub const NAME_PREFIX: &str = "GPIO";
pub const NAME_SEPARATOR: char = '_';
/// Letter of group index 0.
pub const GROUP_BASE: char = 'A';
