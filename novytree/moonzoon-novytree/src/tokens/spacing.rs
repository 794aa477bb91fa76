// Spacing tokens

pub const SPACING_2: u32 = 2;
pub const SPACING_4: u32 = 4;
pub const SPACING_8: u32 = 8;
pub const SPACING_12: u32 = 12;

/// 16px; also the per-level tree indent
pub const SPACING_16: u32 = 16;
pub const SPACING_24: u32 = 24;
