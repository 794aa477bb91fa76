//! Collapsible, selectable tree view.
//!
//! Raw input is a loose `serde_json::Value` tree; [`organize_tree_data`]
//! turns it into fully-defaulted [`TreeNode`]s with sequential ids, and the
//! widget renders those recursively. Clicking a row toggles its expansion,
//! the square icon toggles its selection; each toggle mutates the node
//! state in place and hands the configured callback the node's summary
//! plus an independent snapshot of the whole tree.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use zoon::*;

use crate::tokens::*;

pub mod data;
mod item;

pub use data::{
    clone_tree_data, find_node, find_node_mut, organize_tree_data, toggle_expanded,
    toggle_selected, NodeState, NodeSummary, TreeDefaults, TreeNode,
};

use item::render_tree_item;

/// Callback invoked with the toggled node's summary and a snapshot of the
/// whole tree taken after the toggle.
pub type TreeCallback = Rc<dyn Fn(NodeSummary, Vec<TreeNode>)>;

pub(crate) type SharedTree = Rc<RefCell<Vec<TreeNode>>>;

// TreeView builder; the canonical tree lives behind an Rc<RefCell<..>> so
// every row handler can mutate node state in place.
pub struct TreeViewBuilder {
    data: Value,
    defaults: TreeDefaults,
    on_expand: Option<TreeCallback>,
    on_select: Option<TreeCallback>,
    aria_label: Option<String>,
}

impl TreeViewBuilder {
    pub fn new() -> Self {
        Self {
            data: Value::Array(Vec::new()),
            defaults: TreeDefaults::default(),
            on_expand: None,
            on_select: None,
            aria_label: None,
        }
    }

    /// Raw tree data; anything other than an array renders an empty tree.
    pub fn data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    pub fn default_color(mut self, color: impl Into<String>) -> Self {
        self.defaults.color = color.into();
        self
    }

    pub fn default_background_color(mut self, background_color: impl Into<String>) -> Self {
        self.defaults.background_color = background_color.into();
        self
    }

    pub fn default_show_border(mut self, show_border: bool) -> Self {
        self.defaults.show_border = show_border;
        self
    }

    pub fn default_show_select(mut self, show_select: bool) -> Self {
        self.defaults.show_select = show_select;
        self
    }

    pub fn on_expand<F>(mut self, callback: F) -> Self
    where
        F: Fn(NodeSummary, Vec<TreeNode>) + 'static,
    {
        self.on_expand = Some(Rc::new(callback));
        self
    }

    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: Fn(NodeSummary, Vec<TreeNode>) + 'static,
    {
        self.on_select = Some(Rc::new(callback));
        self
    }

    pub fn aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = Some(aria_label.into());
        self
    }

    pub fn build(self) -> impl Element {
        let tree: SharedTree = Rc::new(RefCell::new(organize_tree_data(
            &self.data,
            &self.defaults,
        )));
        let roots = tree.borrow().clone();
        let on_expand = self.on_expand;
        let on_select = self.on_select;
        let aria_label = self.aria_label.unwrap_or_else(|| "Tree".to_owned());

        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_2))
            .items(
                roots
                    .into_iter()
                    .map(move |node| {
                        render_tree_item(
                            node,
                            0,
                            tree.clone(),
                            on_expand.clone(),
                            on_select.clone(),
                        )
                        .unify()
                    })
                    .collect::<Vec<_>>(),
            )
            .update_raw_el(move |raw_el| {
                raw_el
                    .attr("role", "tree")
                    .attr("aria-label", &aria_label)
                    .attr("tabindex", "0")
            })
    }
}

// Convenience functions
pub fn tree_view() -> TreeViewBuilder {
    TreeViewBuilder::new()
}
