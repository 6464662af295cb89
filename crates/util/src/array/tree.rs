//! Flat list <-> nested tree transforms over JSON records.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

/// Field names used by the tree helpers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
    pub id_key: String,
    pub parent_key: String,
    pub children_key: String,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            id_key: "id".to_string(),
            parent_key: "parentId".to_string(),
            children_key: "children".to_string(),
        }
    }
}

/// Key used to match ids: `1` and `"1"` refer to the same node.
fn id_of(node: &Map<String, Value>, key: &str) -> Option<String> {
    match node.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Nest flat records under their parents.
///
/// Records whose parent is missing, `null`, themselves, or not present in the
/// list become roots. Every returned node carries a `children` array (empty
/// for leaves). Non-object entries are ignored and nodes caught in a parent
/// cycle are dropped.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::array::{list_to_tree, TreeOptions};
///
/// let list = vec![
///     json!({"id": 1, "parentId": null, "name": "root"}),
///     json!({"id": 2, "parentId": 1, "name": "child"}),
/// ];
/// let tree = list_to_tree(&list, &TreeOptions::default());
/// assert_eq!(tree, vec![json!({
///     "id": 1, "parentId": null, "name": "root",
///     "children": [{"id": 2, "parentId": 1, "name": "child", "children": []}]
/// })]);
/// ```
pub fn list_to_tree(list: &[Value], options: &TreeOptions) -> Vec<Value> {
    let nodes: Vec<&Map<String, Value>> = list.iter().filter_map(Value::as_object).collect();
    let ids: HashSet<String> = nodes.iter().filter_map(|n| id_of(n, &options.id_key)).collect();

    let mut roots = Vec::new();
    let mut children: HashMap<String, Vec<usize>> = HashMap::new();
    for (idx, node) in nodes.iter().enumerate() {
        let id = id_of(node, &options.id_key);
        match id_of(node, &options.parent_key) {
            Some(parent) if ids.contains(&parent) && Some(&parent) != id.as_ref() => {
                children.entry(parent).or_default().push(idx);
            }
            _ => roots.push(idx),
        }
    }

    let mut visited = HashSet::new();
    roots
        .into_iter()
        .filter_map(|idx| build_node(idx, &nodes, &children, options, &mut visited))
        .collect()
}

fn build_node(
    idx: usize,
    nodes: &[&Map<String, Value>],
    children: &HashMap<String, Vec<usize>>,
    options: &TreeOptions,
    visited: &mut HashSet<usize>,
) -> Option<Value> {
    if !visited.insert(idx) {
        return None;
    }
    let mut node = nodes[idx].clone();
    let kids = id_of(&node, &options.id_key)
        .and_then(|id| children.get(&id))
        .map(|indices| {
            indices
                .iter()
                .filter_map(|&child| build_node(child, nodes, children, options, visited))
                .collect()
        })
        .unwrap_or_default();
    node.insert(options.children_key.clone(), Value::Array(kids));
    Some(Value::Object(node))
}

/// Flatten a tree depth-first (pre-order), removing the children field.
pub fn tree_to_list(tree: &[Value], options: &TreeOptions) -> Vec<Value> {
    let mut out = Vec::new();
    walk(tree, options, &mut |node| {
        let mut flat = node.clone();
        if let Value::Object(map) = &mut flat {
            map.shift_remove(&options.children_key);
        }
        out.push(flat);
        false
    });
    out
}

/// First node (pre-order) matching `pred`.
pub fn find_in_tree<'a, F>(tree: &'a [Value], pred: F, options: &TreeOptions) -> Option<&'a Value>
where
    F: Fn(&Value) -> bool,
{
    find_node(tree, &pred, options)
}

fn find_node<'a, F>(tree: &'a [Value], pred: &F, options: &TreeOptions) -> Option<&'a Value>
where
    F: Fn(&Value) -> bool,
{
    for node in tree {
        if pred(node) {
            return Some(node);
        }
        if let Some(Value::Array(kids)) = node.get(&options.children_key) {
            if let Some(found) = find_node(kids, pred, options) {
                return Some(found);
            }
        }
    }
    None
}

/// Keep nodes that match `pred` or have a matching descendant.
pub fn filter_tree<F>(tree: &[Value], pred: F, options: &TreeOptions) -> Vec<Value>
where
    F: Fn(&Value) -> bool,
{
    filter_nodes(tree, &pred, options)
}

fn filter_nodes<F>(tree: &[Value], pred: &F, options: &TreeOptions) -> Vec<Value>
where
    F: Fn(&Value) -> bool,
{
    let mut out = Vec::new();
    for node in tree {
        let kids = match node.get(&options.children_key) {
            Some(Value::Array(kids)) => filter_nodes(kids, pred, options),
            _ => Vec::new(),
        };
        if pred(node) || !kids.is_empty() {
            let mut kept = node.clone();
            if let Value::Object(map) = &mut kept {
                if map.contains_key(&options.children_key) {
                    map.insert(options.children_key.clone(), Value::Array(kids));
                }
            }
            out.push(kept);
        }
    }
    out
}

/// Ids from the root down to the first node matching `pred`.
///
/// ```
/// use serde_json::json;
/// use utilkit::array::{tree_path, TreeOptions};
///
/// let tree = vec![json!({"id": "a", "children": [{"id": "b", "children": [{"id": "c"}]}]})];
/// let path = tree_path(&tree, |n| n["id"] == "c", &TreeOptions::default());
/// assert_eq!(path, Some(vec![json!("a"), json!("b"), json!("c")]));
/// ```
pub fn tree_path<F>(tree: &[Value], pred: F, options: &TreeOptions) -> Option<Vec<Value>>
where
    F: Fn(&Value) -> bool,
{
    let mut path = Vec::new();
    if search_path(tree, &pred, options, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn search_path<F>(tree: &[Value], pred: &F, options: &TreeOptions, path: &mut Vec<Value>) -> bool
where
    F: Fn(&Value) -> bool,
{
    for node in tree {
        path.push(node.get(&options.id_key).cloned().unwrap_or(Value::Null));
        if pred(node) {
            return true;
        }
        if let Some(Value::Array(kids)) = node.get(&options.children_key) {
            if search_path(kids, pred, options, path) {
                return true;
            }
        }
        path.pop();
    }
    false
}

/// Pre-order traversal; the visitor returns `true` to stop early.
fn walk<F>(tree: &[Value], options: &TreeOptions, visit: &mut F) -> bool
where
    F: FnMut(&Value) -> bool,
{
    for node in tree {
        if visit(node) {
            return true;
        }
        if let Some(Value::Array(kids)) = node.get(&options.children_key) {
            if walk(kids, options, visit) {
                return true;
            }
        }
    }
    false
}
