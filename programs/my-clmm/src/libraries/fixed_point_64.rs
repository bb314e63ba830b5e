//! Q64.64 fixed point helpers shared by the price math.

/// 2^64
pub const Q64: u128 = (u64::MAX as u128) + 1;
pub const RESOLUTION: u8 = 64;
