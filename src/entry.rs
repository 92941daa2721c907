/// A key-value pair stored in a node of either tree.
///
/// Entries are compared by the trees through their keys only, so the value carries no ordering
/// or identity requirements.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
