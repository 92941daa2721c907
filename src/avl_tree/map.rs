use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::map::OrderedMap;

/// An ordered map implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Keys may repeat: a key equal
/// to existing keys is placed after all of them, so entries sharing a key are removed in the
/// order they were inserted.
///
/// # Examples
///
/// ```
/// use vruntime_trees::avl_tree::AvlMap;
///
/// let mut map = AvlMap::new();
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
pub struct AvlMap<K, V> {
    tree: tree::Tree<K, V>,
    len: usize,
}

impl<K, V> AvlMap<K, V> {
    /// Constructs a new, empty `AvlMap<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vruntime_trees::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// ```
    pub fn new() -> Self {
        AvlMap {
            tree: None,
            len: 0,
        }
    }

    /// Inserts a key-value pair into the map. An existing entry with an equal key is kept, and
    /// the new entry is ordered after it.
    ///
    /// # Examples
    ///
    /// ```
    /// use vruntime_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.put(1, 1);
    /// map.put(1, 2);
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn put(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        tree::insert(&mut self.tree, Node::new(key, value));
        self.len += 1;
    }

    /// Removes one key-value pair whose key equals `key` and returns it. Returns `None` if the
    /// key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use vruntime_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.put(1, 1);
    /// assert_eq!(map.delete(&1), Some((1, 1)));
    /// assert_eq!(map.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<(K, V)>
    where
        K: Ord,
    {
        tree::remove(&mut self.tree, key).map(|entry| {
            self.len -= 1;
            entry.into_pair()
        })
    }

    /// Removes the entry with the minimum key and returns its value. Returns
    /// `Error::EmptyCollection` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use vruntime_trees::Error;
    /// use vruntime_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.put(2, 'b');
    /// map.put(1, 'a');
    /// assert_eq!(map.remove_min(), Ok('a'));
    /// assert_eq!(map.remove_min(), Ok('b'));
    /// assert_eq!(map.remove_min(), Err(Error::EmptyCollection));
    /// ```
    pub fn remove_min(&mut self) -> Result<V> {
        if self.tree.is_none() {
            return Err(Error::EmptyCollection);
        }
        let node = tree::remove_min(&mut self.tree);
        self.len -= 1;
        let Entry { value, .. } = node.entry;
        Ok(value)
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
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value of an entry whose key equals `key`. Returns
    /// `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use vruntime_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.put(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Returns the height of the tree. An empty tree has height zero and a single entry has
    /// height one.
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Clears the map, removing all entries.
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<&K> {
        tree::min(&self.tree).map(|entry| &entry.key)
    }
}

impl<K, V> OrderedMap<K, V> for AvlMap<K, V>
where
    K: Ord,
{
    fn put(&mut self, key: K, value: V) {
        AvlMap::put(self, key, value)
    }

    fn delete(&mut self, key: &K) -> Option<(K, V)> {
        AvlMap::delete(self, key)
    }

    fn remove_min(&mut self) -> Result<V> {
        AvlMap::remove_min(self)
    }

    fn is_empty(&self) -> bool {
        AvlMap::is_empty(self)
    }

    fn len(&self) -> usize {
        AvlMap::len(self)
    }

    fn min(&self) -> Option<&K> {
        AvlMap::min(self)
    }
}

impl<K, V> Default for AvlMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
