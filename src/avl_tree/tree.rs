use crate::avl_tree::node::Node;
use crate::avl_tree::{Error, Result};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(node) => node.height,
    }
}

pub fn balance_factor<T>(tree: &Tree<T>) -> isize {
    match tree {
        None => 0,
        Some(node) => node.balance(),
    }
}

pub fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

pub fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// precondition: both subtrees of the root are valid avl trees whose heights differ by at most two
fn rebalance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();
    let balance = node.balance();

    if balance > 1 {
        if balance_factor(&node.left) < 0 {
            trace!("rebalancing left-right case at height {}", node.height);
            node.left = node.left.take().map(rotate_left);
        } else {
            trace!("rebalancing left-left case at height {}", node.height);
        }
        node = rotate_right(node);
    } else if balance < -1 {
        if balance_factor(&node.right) > 0 {
            trace!("rebalancing right-left case at height {}", node.height);
            node.right = node.right.take().map(rotate_right);
        } else {
            trace!("rebalancing right-right case at height {}", node.height);
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(node) = tree.as_mut() {
        if node.left.is_some() {
            let ret = remove_min(&mut node.left);
            rebalance(tree);
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>) -> Tree<T> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let inserted = match tree.as_mut() {
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Greater => insert(&mut node.right, key),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    if inserted {
        rebalance(tree);
    }
    inserted
}

pub fn remove<T, V>(tree: &mut Tree<T>, key: &V) -> Option<T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(node.key.borrow()) {
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
            Ordering::Equal => {
                let Node { key, left, right, .. } = *node;
                *tree = match (left, right) {
                    (None, right) => right,
                    (left, None) => left,
                    (left, right) => combine_subtrees(left, right),
                };
                Some(key)
            },
        },
        None => return None,
    };

    if ret.is_some() {
        rebalance(tree);
    }
    ret
}

pub fn contains<T, V>(tree: &Tree<T>, key: &V) -> bool
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match tree {
        None => false,
        Some(node) => match key.cmp(node.key.borrow()) {
            Ordering::Less => contains(&node.left, key),
            Ordering::Greater => contains(&node.right, key),
            Ordering::Equal => true,
        },
    }
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

pub fn traverse<'a, T>(tree: &'a Tree<T>, keys: &mut Vec<&'a T>) {
    if let Some(node) = tree {
        traverse(&node.left, keys);
        keys.push(&node.key);
        traverse(&node.right, keys);
    }
}

/// Verifies every invariant of the tree and returns its height and number of nodes.
pub fn check<T>(tree: &Tree<T>) -> Result<(usize, usize)>
where
    T: Ord,
{
    check_bounded(tree, None, None)
}

fn check_bounded<'a, T>(
    tree: &'a Tree<T>,
    lower: Option<&'a T>,
    upper: Option<&'a T>,
) -> Result<(usize, usize)>
where
    T: Ord,
{
    let node = match tree {
        None => return Ok((0, 0)),
        Some(node) => node,
    };

    let below_lower = lower.map_or(false, |lower| node.key <= *lower);
    let above_upper = upper.map_or(false, |upper| node.key >= *upper);
    if below_lower || above_upper {
        return Err(Error::OrderViolation);
    }

    let (left_height, left_len) = check_bounded(&node.left, lower, Some(&node.key))?;
    let (right_height, right_len) = check_bounded(&node.right, Some(&node.key), upper)?;

    let expected = cmp::max(left_height, right_height) + 1;
    if node.height != expected {
        return Err(Error::HeightMismatch {
            expected,
            actual: node.height,
        });
    }

    let balance = (left_height as isize) - (right_height as isize);
    if balance.abs() > 1 {
        return Err(Error::Unbalanced(balance));
    }

    Ok((expected, left_len + right_len + 1))
}
