// Design token system for NovyTree
// Trimmed to the tokens the tree view and its host apps draw from

pub mod color;
pub mod spacing;
pub mod theme;
pub mod typography;

pub use color::*;
pub use spacing::*;
pub use theme::*;
pub use typography::*;
