//! Small generic helpers over slices and [`List`]s.
//!
//! Each helper makes a single pass over its input, front to back (back to
//! front for the `*_last` variants), calling the closure once per element
//! visited. Element and closure types are checked at compile time, so there
//! is no "wrong argument kind" failure at run time.
//!
//! ## Example Usage
//!
//! ```
//! use leafkit::slice;
//!
//! let words = ["apple", "kiwi", "banana", "fig"];
//!
//! assert_eq!(slice::map(&words, |w| w.len()), vec![5, 4, 6, 3]);
//! assert_eq!(slice::filter(&words, |w| w.len() > 3), vec!["apple", "kiwi", "banana"]);
//! assert_eq!(slice::find_last(&words, |w| w.len() == 4), Some(&"kiwi"));
//! assert_eq!(slice::index(&words, |w| w.starts_with('b')), Some(2));
//! assert_eq!(slice::join(&[1, 2, 3], ", "), "[1, 2, 3]");
//! ```

use std::fmt::Display;

use crate::ds::List;

/// Builds a [`List`] from the given values, in order.
///
/// ```
/// use leafkit::as_list;
///
/// let list = as_list![1, 2, 3];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.front(), Some(&1));
/// ```
#[macro_export]
macro_rules! as_list {
    () => {
        $crate::ds::List::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut list = $crate::ds::List::new();
        $(list.push_back($value);)+
        list
    }};
}

/// Copies the elements of `items` into a new [`List`].
pub fn to_list<T: Clone>(items: &[T]) -> List<T> {
    items.iter().cloned().collect()
}

/// Copies the elements of `list` into a `Vec`; an absent list gives an empty
/// `Vec`.
pub fn to_vec<T: Clone>(list: Option<&List<T>>) -> Vec<T> {
    list.map(|list| list.iter().cloned().collect())
        .unwrap_or_default()
}

/// Calls `f` on every element, in order.
pub fn for_each<T>(items: &[T], f: impl FnMut(&T)) {
    items.iter().for_each(f);
}

/// Maps every element through `f`, keeping order and count.
pub fn map<T, U>(items: &[T], f: impl FnMut(&T) -> U) -> Vec<U> {
    items.iter().map(f).collect()
}

/// Maps elements through `f`, keeping the `Some` results in order.
pub fn filter_map<T, U>(items: &[T], f: impl FnMut(&T) -> Option<U>) -> Vec<U> {
    items.iter().filter_map(f).collect()
}

/// Returns clones of the elements satisfying `pred`, in order.
pub fn filter<T: Clone>(items: &[T], mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
    items.iter().filter(|item| pred(item)).cloned().collect()
}

/// Returns `true` if at least one element satisfies `pred`.
pub fn exists<T>(items: &[T], pred: impl FnMut(&T) -> bool) -> bool {
    items.iter().any(pred)
}

/// Index of the first element satisfying `pred`.
pub fn index<T>(items: &[T], pred: impl FnMut(&T) -> bool) -> Option<usize> {
    items.iter().position(pred)
}

/// Index of the last element satisfying `pred`.
pub fn index_last<T>(items: &[T], pred: impl FnMut(&T) -> bool) -> Option<usize> {
    items.iter().rposition(pred)
}

/// First element satisfying `pred`.
pub fn find<T>(items: &[T], mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
    items.iter().find(|item| pred(item))
}

/// Last element satisfying `pred`.
pub fn find_last<T>(items: &[T], mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
    items.iter().rev().find(|item| pred(item))
}

/// Renders `items` as `[a<sep>b<sep>c]` using each element's `Display`.
pub fn join<T: Display>(items: &[T], sep: &str) -> String {
    let body = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep);
    format!("[{body}]")
}
