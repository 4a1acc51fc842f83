use crate::entry::Entry;
use crate::node::{Color, Node};
use std::borrow::Borrow;
use std::cmp;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn is_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

pub fn height<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => cmp::max(height(&node.left), height(&node.right)) + 1,
    }
}

/// Inserts a node into the tree, returning the replaced entry if the key was already
/// present. The caller is responsible for blackening the root afterwards.
pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let ret = match tree {
        Some(ref mut node) => {
            match new_node.entry.key.cmp(&node.entry.key) {
                Ordering::Less => insert(&mut node.left, new_node),
                Ordering::Greater => insert(&mut node.right, new_node),
                Ordering::Equal => {
                    let Node { ref mut entry, .. } = &mut **node;
                    Some(mem::replace(entry, new_node.entry))
                },
            }
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    let node = tree.as_mut().expect("Expected non-empty tree.");

    // The fixups must run in this order: a right-leaning red link has to be rotated away
    // before the left side is inspected, and a 4-node may only be split last.
    if is_red(&node.right) && !is_red(&node.left) {
        node.rotate_left();
    }

    let should_rotate = {
        if let Some(ref child) = node.left {
            child.color == Color::Red && is_red(&child.left)
        } else {
            false
        }
    };
    if should_rotate {
        node.rotate_right();
    }

    if is_red(&node.left) && is_red(&node.right) {
        node.flip_colors();
    }

    ret
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn ceil<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn floor<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        Some(&curr.entry)
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        Some(&curr.entry)
    })
}

/// Writes the fully parenthesized in-order form of the tree: the subtree rooted at a node
/// renders as `{<left><key><right>}` and an absent subtree contributes nothing, so the keys
/// {1, 2, 3} render as `{{1}2{3}}`.
pub fn fmt_in_order<T, U>(tree: &Tree<T, U>, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: fmt::Display,
{
    if let Some(ref node) = tree {
        write!(f, "{{")?;
        fmt_in_order(&node.left, f)?;
        write!(f, "{}", node.entry.key)?;
        fmt_in_order(&node.right, f)?;
        write!(f, "}}")?;
    }
    Ok(())
}
