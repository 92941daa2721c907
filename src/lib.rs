//! Ordered maps balanced as AVL or red black trees behind a single interface, and a process
//! scheduler that always runs the process with the least virtual runtime.

mod entry;
pub mod arena;
pub mod avl_tree;
pub mod error;
pub mod map;
pub mod red_black_tree;
pub mod scheduler;

pub use crate::error::{Error, Result};
pub use crate::map::{new_map, OrderedMap, TreeKind};
