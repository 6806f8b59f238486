//! This crate exposes a self-balancing Binary Search Tree (specifically, an
//! AVL tree) mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert
//! and find stored values. BSTs are typically defined recursively using the
//! notion of a `Node`. A `Node` stores a value and sometimes has child
//! `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! These invariants make searching take `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`) and make sorted
//! iteration natural: visit the left subtree, then the subtree root, then
//! the right subtree.
//!
//! ## AVL Tree
//!
//! A plain BST degenerates into a linked list when values arrive in sorted
//! order. An AVL tree prevents this by requiring, at every `Node`, that the
//! heights of the two child subtrees differ by at most one. Each `Node`
//! tracks that difference as its *balance factor* (right height minus left
//! height); whenever an insertion pushes a factor to ±2, a local rotation,
//! single or double depending on which way the taller child leans, restores
//! the invariant. This caps the height at roughly `1.44 * lg N`, so lookups
//! and insertions stay `O(lg N)`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
