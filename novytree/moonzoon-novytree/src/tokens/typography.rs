// Typography tokens

pub const FONT_SIZE_14: u32 = 14;
pub const FONT_SIZE_16: u32 = 16;
pub const FONT_SIZE_20: u32 = 20;

pub const FONT_WEIGHT_4: u32 = 400; // Normal
pub const FONT_WEIGHT_5: u32 = 500; // Medium
pub const FONT_WEIGHT_6: u32 = 600; // Semibold
