// Component library for the NovyTree widget

pub mod tree_view;

// Re-export components for easy access
pub use tree_view::*;
