use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// One canonical tree node, produced by [`organize_tree_data`].
///
/// Every field is fully populated; loose raw input never survives past
/// normalization. `state` is the only part mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: u32,
    pub text: String,
    pub color: String,
    pub background_color: String,
    pub show_border: bool,
    pub show_select: bool,
    pub state: NodeState,
    pub custom_data: IndexMap<String, Value>,
    pub nodes: Vec<TreeNode>,
}

/// Per-node toggle state, mutated in place by user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NodeState {
    pub expanded: bool,
    pub selected: bool,
}

/// The part of a node handed to callbacks alongside the tree snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSummary {
    pub text: String,
    pub custom_data: IndexMap<String, Value>,
}

/// Caller-supplied fallbacks applied to raw nodes during normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeDefaults {
    pub color: String,
    pub background_color: String,
    pub show_border: bool,
    pub show_select: bool,
}

impl Default for TreeDefaults {
    fn default() -> Self {
        Self {
            color: "#212529".to_owned(),
            background_color: "#ffffff".to_owned(),
            show_border: true,
            show_select: false,
        }
    }
}

impl TreeNode {
    pub fn has_children(&self) -> bool {
        !self.nodes.is_empty()
    }

    pub fn summary(&self) -> NodeSummary {
        NodeSummary {
            text: self.text.clone(),
            custom_data: self.custom_data.clone(),
        }
    }
}

fn parse_str(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        _ => default.to_owned(),
    }
}

fn parse_bool(value: Option<&Value>, default: bool) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        _ => default,
    }
}

fn parse_state(value: Option<&Value>) -> NodeState {
    match value {
        Some(Value::Object(state)) => NodeState {
            expanded: parse_bool(state.get("expanded"), false),
            selected: parse_bool(state.get("selected"), false),
        },
        _ => NodeState::default(),
    }
}

fn parse_custom_data(value: Option<&Value>) -> IndexMap<String, Value> {
    match value {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        _ => IndexMap::new(),
    }
}

fn parse_nodes(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Array(nodes)) => nodes,
        _ => &[],
    }
}

/// Normalizes a loose raw tree into fully-defaulted canonical nodes.
///
/// Missing or malformed fields fall back to `defaults` (or to the empty
/// string / empty map / empty child list) instead of being rejected;
/// normalization is total and never fails. Ids are assigned from a counter
/// threaded through the recursion, children before their parent, starting
/// at 1. A raw value that is not an array yields an empty tree.
pub fn organize_tree_data(data: &Value, defaults: &TreeDefaults) -> Vec<TreeNode> {
    let Value::Array(nodes) = data else {
        return Vec::new();
    };
    let mut next_id = 0;
    organize_nodes(nodes, defaults, &mut next_id)
}

fn organize_nodes(data: &[Value], defaults: &TreeDefaults, next_id: &mut u32) -> Vec<TreeNode> {
    data.iter()
        .map(|raw| {
            let nodes = organize_nodes(parse_nodes(raw.get("nodes")), defaults, next_id);
            *next_id += 1;
            TreeNode {
                id: *next_id,
                text: parse_str(raw.get("text"), ""),
                color: parse_str(raw.get("color"), &defaults.color),
                background_color: parse_str(
                    raw.get("backgroundColor"),
                    &defaults.background_color,
                ),
                show_border: parse_bool(raw.get("showBorder"), defaults.show_border),
                show_select: parse_bool(raw.get("showSelect"), defaults.show_select),
                state: parse_state(raw.get("state")),
                custom_data: parse_custom_data(raw.get("customData")),
                nodes,
            }
        })
        .collect()
}

/// Deep-copies a canonical tree for read-only callback payloads.
///
/// Every field is rebuilt, including nested state, custom data and child
/// vectors, so the result shares no storage with the source.
pub fn clone_tree_data(data: &[TreeNode]) -> Vec<TreeNode> {
    data.iter()
        .map(|node| TreeNode {
            id: node.id,
            text: node.text.clone(),
            color: node.color.clone(),
            background_color: node.background_color.clone(),
            show_border: node.show_border,
            show_select: node.show_select,
            state: NodeState {
                expanded: node.state.expanded,
                selected: node.state.selected,
            },
            custom_data: node.custom_data.clone(),
            nodes: clone_tree_data(&node.nodes),
        })
        .collect()
}

/// Finds the node carrying `id` anywhere in the tree.
pub fn find_node(nodes: &[TreeNode], id: u32) -> Option<&TreeNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.nodes, id) {
            return Some(found);
        }
    }
    None
}

/// Mutable twin of [`find_node`].
pub fn find_node_mut(nodes: &mut [TreeNode], id: u32) -> Option<&mut TreeNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.nodes, id) {
            return Some(found);
        }
    }
    None
}

/// Flips `state.expanded` on the node carrying `id` and returns its
/// summary, or `None` when no node matches.
pub fn toggle_expanded(nodes: &mut [TreeNode], id: u32) -> Option<NodeSummary> {
    let node = find_node_mut(nodes, id)?;
    node.state.expanded = !node.state.expanded;
    Some(node.summary())
}

/// Flips `state.selected` on the node carrying `id` and returns its
/// summary, or `None` when no node matches.
pub fn toggle_selected(nodes: &mut [TreeNode], id: u32) -> Option<NodeSummary> {
    let node = find_node_mut(nodes, id)?;
    node.state.selected = !node.state.selected;
    Some(node.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults() -> TreeDefaults {
        TreeDefaults::default()
    }

    fn collect_ids(nodes: &[TreeNode], ids: &mut Vec<u32>) {
        for node in nodes {
            collect_ids(&node.nodes, ids);
            ids.push(node.id);
        }
    }

    #[test]
    fn child_numbered_before_parent() {
        let tree = organize_tree_data(
            &json!([{"text": "A", "nodes": [{"text": "B"}]}]),
            &defaults(),
        );

        assert_eq!(tree.len(), 1);
        let a = &tree[0];
        let b = &a.nodes[0];
        assert_eq!(a.text, "A");
        assert_eq!(a.id, 2);
        assert_eq!(b.text, "B");
        assert_eq!(b.id, 1);
        assert_eq!(a.state, NodeState::default());
        assert_eq!(b.state, NodeState::default());
        assert!(a.custom_data.is_empty());
        assert!(b.custom_data.is_empty());
    }

    #[test]
    fn every_field_defaulted_on_empty_object() {
        let tree = organize_tree_data(&json!([{}]), &defaults());

        let node = &tree[0];
        assert_eq!(node.id, 1);
        assert_eq!(node.text, "");
        assert_eq!(node.color, "#212529");
        assert_eq!(node.background_color, "#ffffff");
        assert!(node.show_border);
        assert!(!node.show_select);
        assert!(!node.state.expanded);
        assert!(!node.state.selected);
        assert!(node.custom_data.is_empty());
        assert!(node.nodes.is_empty());
    }

    #[test]
    fn malformed_fields_fall_back() {
        let tree = organize_tree_data(
            &json!([{
                "text": 42,
                "color": null,
                "backgroundColor": ["red"],
                "showBorder": "yes",
                "showSelect": 1,
                "state": "open",
                "customData": [1, 2],
                "nodes": "children",
            }]),
            &defaults(),
        );

        let node = &tree[0];
        assert_eq!(node.text, "");
        assert_eq!(node.color, "#212529");
        assert_eq!(node.background_color, "#ffffff");
        assert!(node.show_border);
        assert!(!node.show_select);
        assert_eq!(node.state, NodeState::default());
        assert!(node.custom_data.is_empty());
        assert!(node.nodes.is_empty());
    }

    #[test]
    fn partial_state_object() {
        let tree = organize_tree_data(
            &json!([{"state": {"expanded": true, "selected": "yes"}}]),
            &defaults(),
        );

        assert!(tree[0].state.expanded);
        assert!(!tree[0].state.selected);
    }

    #[test]
    fn caller_defaults_applied() {
        let custom = TreeDefaults {
            color: "#abcdef".to_owned(),
            background_color: "#001122".to_owned(),
            show_border: false,
            show_select: true,
        };
        let tree = organize_tree_data(&json!([{"text": "A"}]), &custom);

        let node = &tree[0];
        assert_eq!(node.color, "#abcdef");
        assert_eq!(node.background_color, "#001122");
        assert!(!node.show_border);
        assert!(node.show_select);
    }

    #[test]
    fn explicit_fields_survive() {
        let tree = organize_tree_data(
            &json!([{
                "text": "A",
                "color": "#ff0000",
                "backgroundColor": "#00ff00",
                "showBorder": false,
                "showSelect": true,
                "state": {"expanded": true, "selected": true},
                "customData": {"path": "/a"},
            }]),
            &defaults(),
        );

        let node = &tree[0];
        assert_eq!(node.text, "A");
        assert_eq!(node.color, "#ff0000");
        assert_eq!(node.background_color, "#00ff00");
        assert!(!node.show_border);
        assert!(node.show_select);
        assert!(node.state.expanded);
        assert!(node.state.selected);
        assert_eq!(node.custom_data["path"], json!("/a"));
    }

    #[test]
    fn ids_strictly_increasing_across_tree() {
        let tree = organize_tree_data(
            &json!([
                {"text": "A", "nodes": [
                    {"text": "B", "nodes": [{"text": "C"}]},
                    {"text": "D"},
                ]},
                {"text": "E"},
            ]),
            &defaults(),
        );

        let mut ids = Vec::new();
        collect_ids(&tree, &mut ids);
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        // C is numbered first, then B, D, A, E.
        assert_eq!(tree[0].nodes[0].nodes[0].id, 1);
        assert_eq!(tree[0].nodes[0].id, 2);
        assert_eq!(tree[0].nodes[1].id, 3);
        assert_eq!(tree[0].id, 4);
        assert_eq!(tree[1].id, 5);
    }

    #[test]
    fn non_array_input_is_empty() {
        for raw in [
            json!({"text": "A"}),
            json!("tree"),
            json!(3),
            json!(true),
            json!(null),
        ] {
            assert!(organize_tree_data(&raw, &defaults()).is_empty());
        }
    }

    #[test]
    fn non_object_entries_become_default_nodes() {
        let tree = organize_tree_data(&json!(["A", 7]), &defaults());

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].text, "");
        assert_eq!(tree[1].id, 2);
    }

    #[test]
    fn custom_data_preserves_key_order() {
        let tree = organize_tree_data(
            &json!([{"customData": {"z": 1, "a": 2, "m": 3}}]),
            &defaults(),
        );

        let keys: Vec<&str> = tree[0].custom_data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn clone_is_structurally_equal_and_independent() {
        let source = organize_tree_data(
            &json!([{"text": "A", "customData": {"k": "v"}, "nodes": [{"text": "B"}]}]),
            &defaults(),
        );
        let mut clone = clone_tree_data(&source);
        assert_eq!(clone, source);

        clone[0].text = "mutated".to_owned();
        clone[0].state.expanded = true;
        clone[0].custom_data.insert("extra".to_owned(), json!(1));
        clone[0].nodes.clear();

        assert_eq!(source[0].text, "A");
        assert!(!source[0].state.expanded);
        assert_eq!(source[0].custom_data.len(), 1);
        assert_eq!(source[0].nodes.len(), 1);
    }

    #[test]
    fn clone_of_empty_is_empty() {
        assert!(clone_tree_data(&[]).is_empty());
    }

    #[test]
    fn toggle_expanded_flips_and_summarizes() {
        let mut tree = organize_tree_data(
            &json!([{"text": "A", "customData": {"k": "v"}, "nodes": [{"text": "B"}]}]),
            &defaults(),
        );

        let summary = toggle_expanded(&mut tree, 2).unwrap();
        assert_eq!(summary.text, "A");
        assert_eq!(summary.custom_data["k"], json!("v"));
        assert!(tree[0].state.expanded);
        assert!(!tree[0].state.selected);

        toggle_expanded(&mut tree, 2);
        assert!(!tree[0].state.expanded);
    }

    #[test]
    fn toggle_selected_only_touches_selected() {
        let mut tree = organize_tree_data(
            &json!([{"text": "A", "nodes": [{"text": "B"}]}]),
            &defaults(),
        );

        let summary = toggle_selected(&mut tree, 1).unwrap();
        assert_eq!(summary.text, "B");
        assert!(tree[0].nodes[0].state.selected);
        assert!(!tree[0].nodes[0].state.expanded);
        assert!(!tree[0].state.selected);
    }

    #[test]
    fn find_node_by_id() {
        let mut tree = organize_tree_data(
            &json!([{"text": "A", "nodes": [{"text": "B"}]}]),
            &defaults(),
        );

        assert_eq!(find_node(&tree, 1).unwrap().text, "B");
        assert!(find_node(&tree, 9).is_none());

        find_node_mut(&mut tree, 1).unwrap().state.selected = true;
        assert!(find_node(&tree, 1).unwrap().state.selected);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut tree = organize_tree_data(&json!([{"text": "A"}]), &defaults());
        let before = clone_tree_data(&tree);

        assert!(toggle_expanded(&mut tree, 99).is_none());
        assert!(toggle_selected(&mut tree, 0).is_none());
        assert_eq!(tree, before);
    }

    #[test]
    fn snapshot_reflects_state_at_toggle_time() {
        let mut tree = organize_tree_data(
            &json!([{"text": "A", "nodes": [{"text": "B"}]}]),
            &defaults(),
        );

        toggle_expanded(&mut tree, 2);
        let snapshot = clone_tree_data(&tree);
        assert!(snapshot[0].state.expanded);

        toggle_expanded(&mut tree, 2);
        assert!(snapshot[0].state.expanded);
        assert!(!tree[0].state.expanded);
    }

    #[test]
    fn nodes_serialize_with_camel_case_keys() {
        let tree = organize_tree_data(&json!([{"text": "A"}]), &defaults());
        let serialized = serde_json::to_value(&tree[0]).unwrap();

        assert_eq!(serialized["backgroundColor"], json!("#ffffff"));
        assert_eq!(serialized["showBorder"], json!(true));
        assert_eq!(serialized["showSelect"], json!(false));
        assert_eq!(serialized["customData"], json!({}));
        assert_eq!(serialized["state"], json!({"expanded": false, "selected": false}));
    }
}
