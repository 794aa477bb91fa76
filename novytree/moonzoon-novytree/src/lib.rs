//! # MoonZoon NovyTree Component Library
//!
//! A collapsible, selectable tree view for MoonZoon applications. Raw,
//! loosely-specified tree data goes in; a fully-defaulted canonical tree
//! with sequential ids comes out and is rendered recursively with
//! expand/select interaction and snapshot-carrying callbacks.
//!
//! ## Quick Start
//!
//! ```rust
//! use moonzoon_novytree::*;
//! use zoon::*;
//!
//! fn demo_tree() -> impl Element {
//!     tree_view()
//!         .data(serde_json::json!([
//!             { "text": "Root", "state": { "expanded": true }, "nodes": [
//!                 { "text": "Leaf", "showSelect": true }
//!             ]}
//!         ]))
//!         .on_expand(|summary, _snapshot| {
//!             zoon::println!("expanded: {}", summary.text);
//!         })
//!         .on_select(|summary, _snapshot| {
//!             zoon::println!("selected: {}", summary.text);
//!         })
//!         .build()
//! }
//! ```
//!
//! ## Behavior
//!
//! - **Normalization**: missing or malformed fields are silently defaulted,
//!   never rejected; ids are assigned child-first from a counter starting
//!   at 1.
//! - **Interaction**: clicking a row toggles its expansion, the square icon
//!   toggles its selection; both mutate the node state in place and invoke
//!   the matching callback with the node's summary and an independent deep
//!   clone of the whole tree.
//! - **Theming**: a small token layer (theme, colors, spacing, typography)
//!   in the NovyUI style, with the light/dark choice persisted through
//!   `local_storage`.

pub mod components;
pub mod tokens;

// Re-export all components for easy access
pub use components::*;

// Re-export all tokens for easy access
pub use tokens::*;

// Re-export zoon for convenience
pub use zoon;
