use zoon::*;

use super::data::{clone_tree_data, find_node, toggle_expanded, toggle_selected, TreeNode};
use super::{SharedTree, TreeCallback};
use crate::tokens::*;

// Renders one node row plus, when expanded, its children one level deeper.
// Children re-read their state from the canonical tree on every remount,
// so the transient Mutables and the data nodes never drift apart.
pub(super) fn render_tree_item(
    node: TreeNode,
    level: u32,
    tree: SharedTree,
    on_expand: Option<TreeCallback>,
    on_select: Option<TreeCallback>,
) -> impl Element {
    let TreeNode {
        id: node_id,
        text,
        color,
        background_color,
        show_border,
        show_select,
        state,
        custom_data: _,
        nodes: children,
    } = node;
    let has_children = !children.is_empty();

    let expanded = Mutable::new(state.expanded);
    let selected = Mutable::new(state.selected);

    let indent_width = level * SPACING_16;

    let expand_indicator = if has_children {
        El::new()
            .s(Width::exact(16))
            .s(Font::new().size(FONT_SIZE_14).color(color.clone()))
            .child_signal(
                expanded
                    .signal()
                    .map(|is_expanded| Text::new(if is_expanded { "−" } else { "+" })),
            )
            .unify()
    } else {
        // Same footprint as the indicator so leaf labels stay aligned.
        El::new().s(Width::exact(16)).s(Height::exact(16)).unify()
    };

    let select_control = if show_select {
        Button::new()
            .s(Width::exact(20))
            .s(Height::exact(20))
            .s(Padding::all(0))
            .s(Background::new().color("transparent"))
            .s(Borders::new())
            .s(Font::new().size(FONT_SIZE_14).color(color.clone()))
            .s(Cursor::new(CursorIcon::Pointer))
            .label_signal(
                selected
                    .signal()
                    .map(|is_selected| Text::new(if is_selected { "⬛" } else { "⬜" })),
            )
            .on_press_event({
                let selected = selected.clone();
                let tree = tree.clone();
                let on_select = on_select.clone();
                move |event| {
                    // Selecting must not also toggle the row's expansion.
                    event.pass_to_parent(false);
                    selected.update(|current| !current);
                    let summary = {
                        let mut nodes = tree.borrow_mut();
                        toggle_selected(&mut nodes, node_id)
                    };
                    if let (Some(summary), Some(on_select)) = (summary, on_select.as_ref()) {
                        on_select(summary, clone_tree_data(&tree.borrow()));
                    }
                }
            })
            .unify()
    } else {
        El::new().s(Width::exact(0)).s(Height::exact(20)).unify()
    };

    let item_row = El::new()
        .s(Width::fill())
        .s(Background::new().color(background_color))
        .s(Borders::all_signal(neutral_4().map(move |color| {
            Border::new()
                .width(if show_border { 1 } else { 0 })
                .color(color)
        })))
        .s(Cursor::new(CursorIcon::Pointer))
        .child(
            Row::new()
                .s(Height::exact(28))
                .s(Width::fill())
                .s(Gap::new().x(SPACING_4))
                .s(Align::new().center_y())
                .s(Padding::new().x(SPACING_8).y(SPACING_2))
                .item(El::new().s(Width::exact(indent_width)).s(Height::exact(1)))
                .item(expand_indicator)
                .item(select_control)
                .item(
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_14)
                            .weight(FontWeight::Number(FONT_WEIGHT_4))
                            .color(color)
                            .no_wrap())
                        .child(Text::new(&text)),
                ),
        )
        .on_click({
            let expanded = expanded.clone();
            let tree = tree.clone();
            let on_expand = on_expand.clone();
            move || {
                expanded.update(|current| !current);
                let summary = {
                    let mut nodes = tree.borrow_mut();
                    toggle_expanded(&mut nodes, node_id)
                };
                if let (Some(summary), Some(on_expand)) = (summary, on_expand.as_ref()) {
                    on_expand(summary, clone_tree_data(&tree.borrow()));
                }
            }
        })
        .update_raw_el(move |raw_el| {
            let mut raw_el = raw_el
                .attr("role", "treeitem")
                .attr("aria-level", &(level + 1).to_string());
            if has_children {
                raw_el = raw_el.attr(
                    "aria-expanded",
                    if state.expanded { "true" } else { "false" },
                );
            }
            raw_el
        });

    let mut column = Column::new().s(Width::growable()).item(item_row);

    if has_children {
        column = column.item_signal(expanded.signal().map(move |is_expanded| {
            if is_expanded {
                // Re-read the live subtree so remounted children pick up
                // state mutated while they were unmounted.
                let children = {
                    let nodes = tree.borrow();
                    find_node(&nodes, node_id)
                        .map(|node| node.nodes.clone())
                        .unwrap_or_default()
                };
                Some(
                    Column::new()
                        .s(Width::growable())
                        .items(
                            children
                                .into_iter()
                                .map({
                                    let tree = tree.clone();
                                    let on_expand = on_expand.clone();
                                    let on_select = on_select.clone();
                                    move |child| {
                                        render_tree_item(
                                            child,
                                            level + 1,
                                            tree.clone(),
                                            on_expand.clone(),
                                            on_select.clone(),
                                        )
                                        .unify()
                                    }
                                })
                                .collect::<Vec<_>>(),
                        )
                        .update_raw_el(|raw_el| raw_el.attr("role", "group"))
                        .into_element(),
                )
            } else {
                None
            }
        }));
    }

    column
}
