//! Ordered collections backed by a self-balancing binary search tree.

#[macro_use]
extern crate log;

pub mod avl_tree;
