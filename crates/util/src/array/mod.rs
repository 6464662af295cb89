//! Array utilities.
//!
//! Generic slice helpers (chunking, de-duplication, grouping, set operations)
//! plus JSON-specific flattening and flat-list/tree transforms.

mod basic;
mod json;
mod tree;

pub use basic::{chunk, count_by, difference, group_by, intersection, partition, range, sample, shuffle, sort_by, union, unique, unique_by};
pub use json::{compact, flatten, flatten_deep, unique_values};
pub use tree::{filter_tree, find_in_tree, list_to_tree, tree_path, tree_to_list, TreeOptions};
