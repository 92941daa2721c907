use crate::error::{Error, Result};
use crate::map::OrderedMap;
use crate::red_black_tree::tree::Tree;

/// An ordered map implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree in which every node is colored red or
/// black. No red node has a red child and every path from a node down to an absent child passes
/// through the same number of black nodes, which bounds the longest path to twice the shortest.
/// Keys may repeat: a key equal to existing keys is placed after all of them, so entries sharing
/// a key are removed in the order they were inserted.
///
/// # Examples
///
/// ```
/// use vruntime_trees::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.put(0, 1);
/// map.put(3, 4);
/// map.put(3, 5);
///
/// assert_eq!(map.get(&0), Some(&1));
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 3);
///
/// assert_eq!(map.min(), Some(&0));
///
/// assert_eq!(map.delete(&0), Some((0, 1)));
/// assert_eq!(map.delete(&1), None);
///
/// assert_eq!(map.remove_min(), Ok(4));
/// assert_eq!(map.remove_min(), Ok(5));
/// assert!(map.is_empty());
/// ```
pub struct RedBlackMap<K, V> {
    tree: Tree<K, V>,
}

impl<K, V> RedBlackMap<K, V> {
    /// Constructs a new, empty `RedBlackMap<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vruntime_trees::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        RedBlackMap { tree: Tree::new() }
    }

    /// Inserts a key-value pair into the map. An existing entry with an equal key is kept, and
    /// the new entry is ordered after it.
    pub fn put(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        self.tree.insert(key, value);
    }

    /// Removes one key-value pair whose key equals `key` and returns it. Returns `None` if the
    /// key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use vruntime_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.put(1, 1);
    /// assert_eq!(map.delete(&1), Some((1, 1)));
    /// assert_eq!(map.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<(K, V)>
    where
        K: Ord,
    {
        self.tree.remove(key).map(|entry| entry.into_pair())
    }

    /// Removes the entry with the minimum key and returns its value. Returns
    /// `Error::EmptyCollection` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use vruntime_trees::Error;
    /// use vruntime_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.put(2, 'b');
    /// map.put(1, 'a');
    /// assert_eq!(map.remove_min(), Ok('a'));
    /// assert_eq!(map.remove_min(), Ok('b'));
    /// assert_eq!(map.remove_min(), Err(Error::EmptyCollection));
    /// ```
    pub fn remove_min(&mut self) -> Result<V> {
        self.tree
            .remove_min()
            .map(|entry| entry.value)
            .ok_or(Error::EmptyCollection)
    }

    /// Checks if a key exists in the map.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value of an entry whose key equals `key`. Returns
    /// `None` if the key does not exist in the map.
    pub fn get(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.tree.get(key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value of an entry whose key equals `key`. Returns
    /// `None` if the key does not exist in the map.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        self.tree.get_mut(key).map(|entry| &mut entry.value)
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the height of the tree. This walks every node.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Clears the map, removing all entries.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<&K> {
        self.tree.min().map(|entry| &entry.key)
    }
}

impl<K, V> OrderedMap<K, V> for RedBlackMap<K, V>
where
    K: Ord,
{
    fn put(&mut self, key: K, value: V) {
        RedBlackMap::put(self, key, value)
    }

    fn delete(&mut self, key: &K) -> Option<(K, V)> {
        RedBlackMap::delete(self, key)
    }

    fn remove_min(&mut self) -> Result<V> {
        RedBlackMap::remove_min(self)
    }

    fn is_empty(&self) -> bool {
        RedBlackMap::is_empty(self)
    }

    fn len(&self) -> usize {
        RedBlackMap::len(self)
    }

    fn min(&self) -> Option<&K> {
        RedBlackMap::min(self)
    }
}

impl<K, V> Default for RedBlackMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
