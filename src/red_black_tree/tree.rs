use crate::arena::{Arena, NodeId};
use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node, Side};
use log::trace;
use std::cmp::{self, Ordering};
use std::mem;

/// The nodes of a red black tree together with the id of its root.
///
/// Every child and parent link is an id into `arena`. A missing child is `None` and reads as
/// black, so there is no shared sentinel node that could be written through.
pub struct Tree<K, V> {
    arena: Arena<Node<K, V>>,
    root: Option<NodeId>,
}

impl<K, V> Tree<K, V> {
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    fn color(&self, id: Option<NodeId>) -> Color {
        match id {
            None => Color::Black,
            Some(id) => self.arena[id].color,
        }
    }

    fn is_red(&self, id: Option<NodeId>) -> bool {
        self.color(id) == Color::Red
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.arena[id].color = color;
    }

    fn swap_colors(&mut self, a: NodeId, b: NodeId) {
        let color = self.arena[a].color;
        self.arena[a].color = self.arena[b].color;
        self.arena[b].color = color;
    }

    // precondition: `id` is not the root
    fn side_of(&self, id: NodeId) -> Side {
        let parent = self.arena[id].parent.expect("Expected node to have a parent.");
        if self.arena[parent].left == Some(id) {
            Side::Left
        } else {
            Side::Right
        }
    }

    // Points the link that named `old` at `new`. The parent field of `new` is left to the caller.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.arena[parent];
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            },
        }
    }

    // Moves `id` down towards `side`. Its child on the other side takes its place and is returned.
    fn rotate(&mut self, id: NodeId, side: Side) -> NodeId {
        let child = self.arena[id]
            .child(side.opposite())
            .expect("Expected rotated child node to be `Some`.");
        let inner = self.arena[child].child(side);
        let parent = self.arena[id].parent;

        self.arena[id].set_child(side.opposite(), inner);
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(id);
        }

        self.replace_child(parent, id, Some(child));
        self.arena[child].parent = parent;

        self.arena[child].set_child(side, Some(id));
        self.arena[id].parent = Some(child);
        child
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        id
    }

    fn find(&self, key: &K) -> Option<NodeId>
    where
        K: Ord,
    {
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self.arena[id];
            curr = match key.cmp(&node.entry.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self.arena[id];
            side = if key < node.entry.key {
                Side::Left
            } else {
                Side::Right
            };
            parent = Some(id);
            curr = node.child(side);
        }

        let id = self.arena.allocate(Node::new(key, value, parent));
        match parent {
            None => self.root = Some(id),
            Some(parent) => self.arena[parent].set_child(side, Some(id)),
        }
        self.fix_insert(id);
    }

    fn fix_insert(&mut self, mut id: NodeId) {
        loop {
            let parent = match self.arena[id].parent {
                None => {
                    self.set_color(id, Color::Black);
                    return;
                },
                Some(parent) => parent,
            };
            if self.arena[parent].color == Color::Black {
                return;
            }

            let grandparent = self.arena[parent]
                .parent
                .expect("Expected a red node to have a parent.");
            let parent_side = self.side_of(parent);
            let uncle = self.arena[grandparent].child(parent_side.opposite());

            match uncle {
                Some(uncle) if self.arena[uncle].color == Color::Red => {
                    self.recolor_red_uncle(parent, uncle, grandparent);
                    id = grandparent;
                },
                _ => {
                    if self.side_of(id) == parent_side {
                        self.rotate_outer_grandchild(parent, grandparent, parent_side);
                    } else {
                        self.rotate_inner_grandchild(id, parent, grandparent, parent_side);
                    }
                    return;
                },
            }
        }
    }

    fn recolor_red_uncle(&mut self, parent: NodeId, uncle: NodeId, grandparent: NodeId) {
        trace!("insert: red uncle, pushing red up to the grandparent");
        self.set_color(parent, Color::Black);
        self.set_color(uncle, Color::Black);
        self.set_color(grandparent, Color::Red);
    }

    // left-left and right-right cases
    fn rotate_outer_grandchild(&mut self, parent: NodeId, grandparent: NodeId, side: Side) {
        trace!("insert: black uncle, outer grandchild");
        self.rotate(grandparent, side.opposite());
        self.swap_colors(parent, grandparent);
    }

    // left-right and right-left cases
    fn rotate_inner_grandchild(
        &mut self,
        id: NodeId,
        parent: NodeId,
        grandparent: NodeId,
        side: Side,
    ) {
        trace!("insert: black uncle, inner grandchild");
        self.rotate(parent, side);
        self.rotate(grandparent, side.opposite());
        self.set_color(id, Color::Black);
        self.set_color(parent, Color::Red);
        self.set_color(grandparent, Color::Red);
    }

    pub fn remove(&mut self, key: &K) -> Option<Entry<K, V>>
    where
        K: Ord,
    {
        self.find(key).map(|id| self.remove_node(id))
    }

    pub fn remove_min(&mut self) -> Option<Entry<K, V>> {
        self.root.map(|root| {
            let id = self.leftmost(root);
            self.remove_node(id)
        })
    }

    // A node with two children trades entries with its in-order successor, which is unlinked in
    // its place.
    fn remove_node(&mut self, id: NodeId) -> Entry<K, V> {
        let target = match (self.arena[id].left, self.arena[id].right) {
            (Some(_), Some(right)) => self.leftmost(right),
            _ => id,
        };
        let removed = self.unlink(target);
        if target == id {
            removed.entry
        } else {
            mem::replace(&mut self.arena[id].entry, removed.entry)
        }
    }

    // precondition: `id` has at most one child
    fn unlink(&mut self, id: NodeId) -> Node<K, V> {
        let parent = self.arena[id].parent;
        let child = self.arena[id].left.or(self.arena[id].right);

        self.replace_child(parent, id, child);
        if let Some(child) = child {
            self.arena[child].parent = parent;
        }
        let node = self.arena.free(id);

        if node.color == Color::Red {
            return node;
        }
        match child {
            Some(child) if self.arena[child].color == Color::Red => {
                self.set_color(child, Color::Black);
            },
            _ => self.fix_remove(child, parent),
        }
        node
    }

    // `id` is one black node short on every path through it. `parent` is tracked separately
    // because `id` may be an absent child.
    fn fix_remove(&mut self, mut id: Option<NodeId>, mut parent: Option<NodeId>) {
        loop {
            let curr_parent = match parent {
                None => {
                    if let Some(id) = id {
                        self.set_color(id, Color::Black);
                    }
                    return;
                },
                Some(parent) => parent,
            };
            let side = if self.arena[curr_parent].left == id {
                Side::Left
            } else {
                Side::Right
            };
            let sibling = self.arena[curr_parent]
                .child(side.opposite())
                .expect("Expected a node short of black height to have a sibling.");

            if self.arena[sibling].color == Color::Red {
                self.rotate_red_sibling(curr_parent, sibling, side);
                continue;
            }

            let near = self.arena[sibling].child(side);
            let far = self.arena[sibling].child(side.opposite());
            if self.is_red(near) || self.is_red(far) {
                self.rotate_red_nephew(curr_parent, sibling, side);
                return;
            }

            trace!("remove: black sibling with black children");
            self.set_color(sibling, Color::Red);
            if self.arena[curr_parent].color == Color::Red {
                self.set_color(curr_parent, Color::Black);
                return;
            }
            if self.arena[curr_parent].parent.is_none() {
                return;
            }
            id = Some(curr_parent);
            parent = self.arena[curr_parent].parent;
        }
    }

    // Turns a red sibling into a black one without changing any black height.
    fn rotate_red_sibling(&mut self, parent: NodeId, sibling: NodeId, side: Side) {
        trace!("remove: red sibling");
        self.rotate(parent, side);
        self.set_color(sibling, Color::Black);
        self.set_color(parent, Color::Red);
    }

    // `sibling` is black with at least one red child. The outer nephew is used when both are red.
    fn rotate_red_nephew(&mut self, parent: NodeId, sibling: NodeId, side: Side) {
        let parent_color = self.arena[parent].color;
        let far = self.arena[sibling].child(side.opposite());
        let top = if self.is_red(far) {
            trace!("remove: black sibling, outer red nephew");
            self.rotate(parent, side)
        } else {
            trace!("remove: black sibling, inner red nephew");
            self.rotate(sibling, side.opposite());
            self.rotate(parent, side)
        };

        self.set_color(top, parent_color);
        for child in [self.arena[top].left, self.arena[top].right].iter() {
            if let Some(child) = *child {
                self.set_color(child, Color::Black);
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&Entry<K, V>>
    where
        K: Ord,
    {
        self.find(key).map(|id| &self.arena[id].entry)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut Entry<K, V>>
    where
        K: Ord,
    {
        match self.find(key) {
            Some(id) => Some(&mut self.arena[id].entry),
            None => None,
        }
    }

    pub fn min(&self) -> Option<&Entry<K, V>> {
        self.root.map(|root| &self.arena[self.leftmost(root)].entry)
    }

    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    fn subtree_height(&self, id: Option<NodeId>) -> usize {
        match id {
            None => 0,
            Some(id) => {
                let node = &self.arena[id];
                cmp::max(self.subtree_height(node.left), self.subtree_height(node.right)) + 1
            },
        }
    }
}

#[cfg(test)]
impl<K, V> Tree<K, V>
where
    K: Ord,
{
    pub fn root_entry(&self) -> Option<(&K, Color)> {
        self.root
            .map(|root| (&self.arena[root].entry.key, self.arena[root].color))
    }

    // Returns the key and color of every node in order.
    pub fn nodes(&self) -> Vec<(&K, Color)> {
        let mut nodes = Vec::new();
        self.collect(self.root, &mut nodes);
        nodes
    }

    fn collect<'a>(&'a self, id: Option<NodeId>, nodes: &mut Vec<(&'a K, Color)>) {
        if let Some(id) = id {
            let node = &self.arena[id];
            self.collect(node.left, nodes);
            nodes.push((&node.entry.key, node.color));
            self.collect(node.right, nodes);
        }
    }

    // Checks ordering, parent links, and coloring. Returns the black height of the tree.
    pub fn check(&self) -> usize {
        assert_eq!(self.color(self.root), Color::Black, "root is red");
        if let Some(root) = self.root {
            assert_eq!(self.arena[root].parent, None, "root has a parent");
        }
        let (count, black_height) = self.check_subtree(self.root, None, None);
        assert_eq!(count, self.arena.len(), "unreachable nodes in the arena");
        black_height
    }

    fn check_subtree(&self, id: Option<NodeId>, lo: Option<&K>, hi: Option<&K>) -> (usize, usize) {
        let id = match id {
            None => return (0, 0),
            Some(id) => id,
        };
        let node = &self.arena[id];
        let key = &node.entry.key;
        assert!(lo.map_or(true, |lo| lo <= key), "left subtree bound violated");
        assert!(hi.map_or(true, |hi| key <= hi), "right subtree bound violated");

        for child in [node.left, node.right].iter() {
            if let Some(child) = *child {
                assert_eq!(self.arena[child].parent, Some(id), "stale parent link");
                if node.color == Color::Red {
                    assert_eq!(self.arena[child].color, Color::Black, "red node with red child");
                }
            }
        }

        let (left_count, left_black) = self.check_subtree(node.left, lo, Some(key));
        let (right_count, right_black) = self.check_subtree(node.right, Some(key), hi);
        assert_eq!(left_black, right_black, "unequal black height");
        let own = if node.color == Color::Black { 1 } else { 0 };
        (left_count + right_count + 1, left_black + own)
    }
}
