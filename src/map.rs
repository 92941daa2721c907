//! The ordered-map capability shared by both balanced trees.

use crate::avl_tree::AvlMap;
use crate::error::{Error, Result};
use crate::red_black_tree::RedBlackMap;
use std::fmt;
use std::str::FromStr;

/// Trait for ordered maps that support the point operations of a priority-ordered scheduling
/// loop.
///
/// Keys may repeat. Inserting a key that is already present keeps both entries, and the newer
/// entry is ordered after every existing entry with an equal key.
pub trait OrderedMap<K, V>
where
    K: Ord,
{
    /// Inserts a key-value pair into the map.
    fn put(&mut self, key: K, value: V);

    /// Removes one entry whose key equals `key` and returns it. Returns `None` and leaves the map
    /// untouched if no such entry exists.
    fn delete(&mut self, key: &K) -> Option<(K, V)>;

    /// Removes the entry with the minimum key and returns its value.
    ///
    /// Returns `Error::EmptyCollection` if the map is empty.
    fn remove_min(&mut self) -> Result<V>;

    /// Returns `true` if the map is empty.
    fn is_empty(&self) -> bool;

    /// Returns the number of entries in the map.
    fn len(&self) -> usize;

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    fn min(&self) -> Option<&K>;
}

/// An enum selecting which balancing strategy backs an `OrderedMap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TreeKind {
    Avl,
    RedBlack,
}

impl Default for TreeKind {
    fn default() -> Self {
        TreeKind::Avl
    }
}

impl FromStr for TreeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AVL" => Ok(TreeKind::Avl),
            "RB" | "RED-BLACK" | "REDBLACK" => Ok(TreeKind::RedBlack),
            _ => Err(Error::UnknownTreeKind(s.to_string())),
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TreeKind::Avl => write!(f, "AVL"),
            TreeKind::RedBlack => write!(f, "RB"),
        }
    }
}

/// Constructs a new, empty ordered map backed by the tree named by `kind`.
///
/// # Examples
///
/// ```
/// use vruntime_trees::{new_map, OrderedMap, TreeKind};
///
/// let mut map = new_map(TreeKind::RedBlack);
/// map.put(3, "c");
/// map.put(1, "a");
///
/// assert_eq!(map.remove_min(), Ok("a"));
/// assert_eq!(map.len(), 1);
/// ```
pub fn new_map<K, V>(kind: TreeKind) -> Box<dyn OrderedMap<K, V>>
where
    K: Ord + 'static,
    V: 'static,
{
    match kind {
        TreeKind::Avl => Box::new(AvlMap::new()),
        TreeKind::RedBlack => Box::new(RedBlackMap::new()),
    }
}
