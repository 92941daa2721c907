//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! Nodes live in an arena and refer to their parent by id, which lets both fixups walk upwards
//! from the point of mutation.

mod map;
mod node;
mod tree;

pub use self::map::RedBlackMap;
