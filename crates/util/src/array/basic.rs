use indexmap::IndexMap;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::hash::Hash;

/// Split `items` into chunks of `size`.
///
/// The last chunk holds the remainder. A `size` of zero or less yields one
/// chunk containing the whole input.
///
/// # Examples
///
/// ```
/// use utilkit::array::chunk;
///
/// let items: Vec<i32> = (1..=10).collect();
/// assert_eq!(chunk(&items, 3), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]);
/// assert_eq!(chunk(&[1, 2], 0), vec![vec![1, 2]]);
/// ```
pub fn chunk<T: Clone>(items: &[T], size: i64) -> Vec<Vec<T>> {
    if size <= 0 {
        return vec![items.to_vec()];
    }
    let size = usize::try_from(size).unwrap_or(usize::MAX);
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Remove duplicates, keeping the first occurrence of each value.
///
/// ```
/// use utilkit::array::unique;
///
/// assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().filter(|item| seen.insert(*item)).cloned().collect()
}

/// Remove items whose key was already seen, keeping the first occurrence.
pub fn unique_by<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().filter(|item| seen.insert(key(item))).cloned().collect()
}

/// Group items by key. Groups appear in first-seen key order.
///
/// ```
/// use utilkit::array::group_by;
///
/// let groups = group_by(&["apple", "avocado", "banana"], |s| s.chars().next());
/// assert_eq!(groups[&Some('a')], vec!["apple", "avocado"]);
/// assert_eq!(groups.len(), 2);
/// ```
pub fn group_by<T, K, F>(items: &[T], key: F) -> IndexMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}

/// Count items per key, in first-seen key order.
pub fn count_by<T, K, F>(items: &[T], key: F) -> IndexMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut counts: IndexMap<K, usize> = IndexMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

/// Split into `(matching, rest)`, preserving order.
pub fn partition<T, F>(items: &[T], pred: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    items.iter().cloned().partition(|item| pred(item))
}

/// Stable sort by key, ascending or descending.
pub fn sort_by<T, K, F>(items: &[T], key: F, descending: bool) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut out = items.to_vec();
    if descending {
        out.sort_by(|a, b| key(b).cmp(&key(a)));
    } else {
        out.sort_by_key(|item| key(item));
    }
    out
}

/// Half-open integer range with a step.
///
/// A zero step, or a step pointing away from `end`, yields an empty list.
///
/// ```
/// use utilkit::array::range;
///
/// assert_eq!(range(0, 10, 3), vec![0, 3, 6, 9]);
/// assert_eq!(range(5, 0, -2), vec![5, 3, 1]);
/// assert!(range(0, 5, -1).is_empty());
/// ```
pub fn range(start: i64, end: i64, step: i64) -> Vec<i64> {
    let mut out = Vec::new();
    if step == 0 {
        return out;
    }
    let mut current = start;
    while (step > 0 && current < end) || (step < 0 && current > end) {
        out.push(current);
        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    out
}

/// Items of `a` that are not in `b`, in `a`'s order.
pub fn difference<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let exclude: HashSet<&T> = b.iter().collect();
    a.iter().filter(|item| !exclude.contains(item)).cloned().collect()
}

/// Distinct items present in both slices, in `a`'s order.
pub fn intersection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let include: HashSet<&T> = b.iter().collect();
    let mut seen = HashSet::new();
    a.iter()
        .filter(|item| include.contains(item) && seen.insert(*item))
        .cloned()
        .collect()
}

/// Distinct items of `a` followed by the new items of `b`.
pub fn union<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    a.iter().chain(b).filter(|item| seen.insert(*item)).cloned().collect()
}

/// Shuffled copy of `items`.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(&mut rand::thread_rng());
    out
}

/// A random element, `None` when empty.
pub fn sample<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}
