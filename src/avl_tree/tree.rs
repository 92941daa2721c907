use crate::avl_tree::node::Node;
use crate::entry::Entry;
use std::cmp::Ordering;
use std::mem;

pub type Tree<K, V> = Option<Box<Node<K, V>>>;

pub fn height<K, V>(tree: &Tree<K, V>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut child = node
        .right
        .take()
        .expect("Expected right child node to be `Some`.");
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut child = node
        .left
        .take()
        .expect("Expected left child node to be `Some`.");
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// left-left and left-right cases
fn fix_left_heavy<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if let Some(child) = node.left.take() {
        if child.balance_factor() >= 0 {
            node.left = Some(child);
        } else {
            node.left = Some(rotate_left(child));
        }
    }
    rotate_right(node)
}

// right-right and right-left cases
fn fix_right_heavy<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if let Some(child) = node.right.take() {
        if child.balance_factor() <= 0 {
            node.right = Some(child);
        } else {
            node.right = Some(rotate_right(child));
        }
    }
    rotate_left(node)
}

fn balance<K, V>(tree: &mut Tree<K, V>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance_factor() > 1 {
        node = fix_left_heavy(node);
    } else if node.balance_factor() < -1 {
        node = fix_right_heavy(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
pub fn remove_min<K, V>(tree: &mut Tree<K, V>) -> Box<Node<K, V>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            let ret = remove_min(&mut node.left);
            balance(tree);
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

pub fn insert<K, V>(tree: &mut Tree<K, V>, new_node: Node<K, V>)
where
    K: Ord,
{
    match tree {
        Some(ref mut node) => {
            if new_node.entry.key < node.entry.key {
                insert(&mut node.left, new_node);
            } else {
                insert(&mut node.right, new_node);
            }
        },
        None => {
            *tree = Some(Box::new(new_node));
            return;
        },
    }

    balance(tree);
}

pub fn remove<K, V>(tree: &mut Tree<K, V>, key: &K) -> Option<Entry<K, V>>
where
    K: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.entry.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => {
                    *tree = right;
                    Some(node.entry)
                },
                (left, None) => {
                    *tree = left;
                    Some(node.entry)
                },
                (left, mut right) => {
                    let successor = remove_min(&mut right);
                    node.left = left;
                    node.right = right;
                    let entry = mem::replace(&mut node.entry, successor.entry);
                    *tree = Some(node);
                    Some(entry)
                },
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree);
    }
    ret
}

pub fn get<'a, K, V>(tree: &'a Tree<K, V>, key: &K) -> Option<&'a Entry<K, V>>
where
    K: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.entry.key) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn get_mut<'a, K, V>(tree: &'a mut Tree<K, V>, key: &K) -> Option<&'a mut Entry<K, V>>
where
    K: Ord,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(&node.entry.key) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn min<K, V>(tree: &Tree<K, V>) -> Option<&Entry<K, V>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

// Checks ordering, cached heights, and balance factors. Returns the height of the tree.
#[cfg(test)]
pub fn check<K, V>(tree: &Tree<K, V>) -> usize
where
    K: Ord,
{
    fn check_bounds<K, V>(tree: &Tree<K, V>, lo: Option<&K>, hi: Option<&K>) -> usize
    where
        K: Ord,
    {
        match tree {
            None => 0,
            Some(ref node) => {
                let key = &node.entry.key;
                assert!(lo.map_or(true, |lo| lo <= key), "left subtree bound violated");
                assert!(hi.map_or(true, |hi| key <= hi), "right subtree bound violated");
                let left_height = check_bounds(&node.left, lo, Some(key));
                let right_height = check_bounds(&node.right, Some(key), hi);
                assert_eq!(node.height, left_height.max(right_height) + 1);
                assert!((left_height as isize - right_height as isize).abs() <= 1);
                node.height
            },
        }
    }

    check_bounds(tree, None, None)
}

#[cfg(test)]
pub fn keys<K, V>(tree: &Tree<K, V>) -> Vec<&K> {
    fn traverse<'a, K, V>(tree: &'a Tree<K, V>, keys: &mut Vec<&'a K>) {
        if let Some(ref node) = tree {
            traverse(&node.left, keys);
            keys.push(&node.entry.key);
            traverse(&node.right, keys);
        }
    }

    let mut keys = Vec::new();
    traverse(tree, &mut keys);
    keys
}

#[cfg(test)]
mod tests {
    use super::{check, insert, keys, min, remove, remove_min, rotate_left, rotate_right, Tree};
    use crate::avl_tree::node::Node;

    fn leaf(key: u32) -> Tree<u32, ()> {
        Some(Box::new(Node::new(key, ())))
    }

    fn join(key: u32, left: Tree<u32, ()>, right: Tree<u32, ()>) -> Tree<u32, ()> {
        let mut node = Node::new(key, ());
        node.left = left;
        node.right = right;
        node.update();
        Some(Box::new(node))
    }

    fn root_key(tree: &Tree<u32, ()>) -> u32 {
        tree.as_ref().unwrap().entry.key
    }

    #[test]
    fn test_rotate_left_updates_heights() {
        let node = join(1, None, join(2, None, leaf(3))).unwrap();
        let rotated = Some(rotate_left(node));
        assert_eq!(root_key(&rotated), 2);
        assert_eq!(check(&rotated), 2);
        assert_eq!(keys(&rotated), vec![&1, &2, &3]);
    }

    #[test]
    fn test_rotate_right_reparents_inner_subtree() {
        let node = join(4, join(2, leaf(1), leaf(3)), leaf(5)).unwrap();
        let rotated = rotate_right(node);
        assert_eq!(rotated.entry.key, 2);
        let right = rotated.right.as_ref().unwrap();
        assert_eq!(right.entry.key, 4);
        assert_eq!(right.left.as_ref().unwrap().entry.key, 3);
        assert_eq!(right.height, 2);
        assert_eq!(rotated.height, 3);
    }

    #[test]
    fn test_insert_left_left() {
        let mut tree = None;
        for key in &[3, 2, 1] {
            insert(&mut tree, Node::new(*key, ()));
        }
        assert_eq!(root_key(&tree), 2);
        assert_eq!(check(&tree), 2);
    }

    #[test]
    fn test_insert_left_right() {
        let mut tree = None;
        for key in &[3, 1, 2] {
            insert(&mut tree, Node::new(*key, ()));
        }
        assert_eq!(root_key(&tree), 2);
        assert_eq!(check(&tree), 2);
    }

    #[test]
    fn test_insert_right_right() {
        let mut tree = None;
        for key in &[1, 2, 3] {
            insert(&mut tree, Node::new(*key, ()));
        }
        assert_eq!(root_key(&tree), 2);
        assert_eq!(check(&tree), 2);
    }

    #[test]
    fn test_insert_right_left() {
        let mut tree = None;
        for key in &[1, 3, 2] {
            insert(&mut tree, Node::new(*key, ()));
        }
        assert_eq!(root_key(&tree), 2);
        assert_eq!(check(&tree), 2);
    }

    #[test]
    fn test_insert_duplicates_route_right() {
        let mut tree = None;
        insert(&mut tree, Node::new(1, 'a'));
        insert(&mut tree, Node::new(1, 'b'));
        insert(&mut tree, Node::new(1, 'c'));
        check(&tree);
        assert_eq!(min(&tree).map(|entry| entry.value), Some('a'));
        assert_eq!(remove_min(&mut tree).entry.value, 'a');
        assert_eq!(remove_min(&mut tree).entry.value, 'b');
        assert_eq!(remove_min(&mut tree).entry.value, 'c');
        assert!(tree.is_none());
    }

    #[test]
    fn test_remove_min_rebalances_ancestors() {
        let mut tree = join(2, leaf(1), join(4, leaf(3), leaf(5)));
        assert_eq!(remove_min(&mut tree).entry.key, 1);
        check(&tree);
        assert_eq!(remove_min(&mut tree).entry.key, 2);
        check(&tree);
        assert_eq!(keys(&tree), vec![&3, &4, &5]);
    }

    #[test]
    fn test_remove_absent_leaves_tree_untouched() {
        let mut tree = join(2, leaf(1), leaf(3));
        assert!(remove(&mut tree, &4).is_none());
        assert_eq!(keys(&tree), vec![&1, &2, &3]);
        assert_eq!(check(&tree), 2);
    }

    #[test]
    fn test_remove_two_children_uses_right_successor() {
        let mut tree = None;
        for (key, value) in &[(2, 'b'), (1, 'a'), (3, 'c')] {
            insert(&mut tree, Node::new(*key, *value));
        }
        let entry = remove(&mut tree, &2).unwrap();
        assert_eq!((entry.key, entry.value), (2, 'b'));
        let root = tree.as_ref().unwrap();
        assert_eq!((root.entry.key, root.entry.value), (3, 'c'));
        assert!(root.right.is_none());
        check(&tree);
    }
}
