//! A balance-factor AVL tree. Every node stores the height difference of its
//! child subtrees (right minus left) instead of an absolute height, and the
//! recursive insert reports to each caller whether its subtree grew so that
//! only the factors along the insertion path are touched.
//!
//! # Examples
//!
//! ```
//! use avl::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! // Inserting a new value returns `true`...
//! assert!(tree.insert(1));
//!
//! // ...and inserting it again returns `false` and changes nothing.
//! assert!(!tree.insert(1));
//!
//! assert_eq!(tree.find(&1), Some(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

type Link<T> = Option<Box<Node<T>>>;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) holding a
/// set of ordered values. Duplicate values are rejected rather than
/// overwritten.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Post-order, bottom-up teardown. Children are detached before each
        // node is freed, so no `Box` drop ever recurses into a subtree.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    /// Renders the in-order traversal one value per line, indented two spaces
    /// per level of depth.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, value) in self.in_order() {
            writeln!(f, "{:indent$}{}", "", value, indent = depth * 2)?;
        }
        Ok(())
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts the given value into the tree, rebalancing as needed so that
    /// the heights of any node's child subtrees differ by at most one.
    /// Returns `true` if the value was inserted and `false` if it was already
    /// present, in which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        match insert_into(&mut self.root, value) {
            InsertResult::HeightIncreased | InsertResult::HeightUnchanged => true,
            InsertResult::DuplicateKey => false,
        }
    }

    /// Potentially finds the given value in this tree. If no node holds an
    /// equal value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Returns whether the tree holds a value equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Returns the smallest value in the tree, or `None` if the tree is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.insert(10);
    /// tree.insert(20);
    /// assert_eq!(tree.min(), Some(&10));
    /// ```
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value in the tree, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.max(), None);
    ///
    /// tree.insert(10);
    /// tree.insert(20);
    /// assert_eq!(tree.max(), Some(&20));
    /// ```
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Returns the next value larger than the given one, when the given value
    /// is present and has a right subtree (the successor is then the smallest
    /// value of that subtree). In the remaining cases (value present but
    /// without a right subtree, or value absent) the input is returned
    /// unchanged. An ancestor walk for the missing cases would need parent
    /// links or an explicit descent stack; callers that need a total
    /// successor should compare the result against the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(10);
    /// tree.insert(20);
    ///
    /// assert_eq!(tree.next_higher(&10), &20);
    ///
    /// // 20 has no right subtree, and 15 isn't in the tree.
    /// assert_eq!(tree.next_higher(&20), &20);
    /// assert_eq!(tree.next_higher(&15), &15);
    /// ```
    pub fn next_higher<'a>(&'a self, value: &'a T) -> &'a T
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => {
                    let mut next = match node.right.as_deref() {
                        Some(right) => right,
                        None => return value,
                    };
                    while let Some(left) = next.left.as_deref() {
                        next = left;
                    }
                    return &next.value;
                }
            };
        }
        value
    }

    /// Returns the in-order traversal of the tree as `(depth, value)` pairs,
    /// with the root at depth 0. The values come out in ascending order; the
    /// depths are what a console display needs for indentation.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(10);
    /// tree.insert(20);
    /// tree.insert(30);
    ///
    /// // 20 was rotated up to the root.
    /// assert_eq!(tree.in_order(), vec![(1, &10), (0, &20), (1, &30)]);
    /// ```
    pub fn in_order(&self) -> Vec<(usize, &T)> {
        fn walk<'a, T>(link: &'a Link<T>, depth: usize, out: &mut Vec<(usize, &'a T)>) {
            if let Some(node) = link {
                walk(&node.left, depth + 1, out);
                out.push((depth, &node.value));
                walk(&node.right, depth + 1, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.root, 0, &mut out);
        out
    }
}

/// What a recursive insertion call did to the subtree it was handed.
enum InsertResult {
    /// The value was inserted and the subtree got taller. The caller must
    /// fold this into its own balance factor.
    HeightIncreased,
    /// The value was inserted but the subtree kept its height, either because
    /// the shorter side caught up or because a rotation absorbed the growth.
    HeightUnchanged,
    /// The value was already present. Nothing was touched anywhere on the
    /// path, balance factors included.
    DuplicateKey,
}

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    /// Height of the right subtree minus height of the left subtree. Stays
    /// within `-1..=1` between operations; hits ±2 transiently during an
    /// insertion, which is what triggers a rebalance.
    balance: i8,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            balance: 0,
            left: None,
            right: None,
        }
    }
}

/// Inserts `value` under `link` and reports what happened to the height of
/// that subtree. A new leaf always grows its (previously empty) slot; on the
/// way back up each node folds the child's report into its balance factor and
/// rebalances if the factor reaches ±2. A rotation restores the subtree's
/// pre-insertion height, so `HeightUnchanged` is reported past it.
fn insert_into<T: Ord>(link: &mut Link<T>, value: T) -> InsertResult {
    let node = match link {
        Some(node) => node,
        None => {
            *link = Some(Box::new(Node::new(value)));
            return InsertResult::HeightIncreased;
        }
    };

    match value.cmp(&node.value) {
        Ordering::Less => match insert_into(&mut node.left, value) {
            InsertResult::HeightIncreased => {
                node.balance -= 1;
                match node.balance {
                    -2 => {
                        balance_left_heavy(node);
                        InsertResult::HeightUnchanged
                    }
                    -1 => InsertResult::HeightIncreased,
                    // The left side only caught up with the right.
                    _ => InsertResult::HeightUnchanged,
                }
            }
            outcome => outcome,
        },
        Ordering::Greater => match insert_into(&mut node.right, value) {
            InsertResult::HeightIncreased => {
                node.balance += 1;
                match node.balance {
                    2 => {
                        balance_right_heavy(node);
                        InsertResult::HeightUnchanged
                    }
                    1 => InsertResult::HeightIncreased,
                    _ => InsertResult::HeightUnchanged,
                }
            }
            outcome => outcome,
        },
        Ordering::Equal => InsertResult::DuplicateKey,
    }
}

/// Rotates the subtree at `root` to the left: the right child becomes the new
/// subtree root and the old root becomes its left child, keeping the in-order
/// sequence intact. The caller's slot is rewritten in place; values and
/// balance factors are untouched.
///
/// ```text
///   root               pivot
///   /  \               /   \
///  x   pivot   ->   root    z
///      /  \         /  \
///     y    z       x    y
/// ```
///
/// # Panics
///
/// When called on a node without a right child. The balance-factor gating in
/// the rebalance routines guarantees one is present.
fn rotate_left<T>(root: &mut Box<Node<T>>) {
    let mut pivot = root
        .right
        .take()
        .expect("rotate_left requires a right child");
    root.right = pivot.left.take();
    mem::swap(root, &mut pivot);
    // `root` is now the pivot and `pivot` the old root.
    root.left = Some(pivot);
}

/// Mirror of [`rotate_left`]: the left child becomes the new subtree root and
/// the old root becomes its right child.
///
/// # Panics
///
/// When called on a node without a left child.
fn rotate_right<T>(root: &mut Box<Node<T>>) {
    let mut pivot = root.left.take().expect("rotate_right requires a left child");
    root.left = pivot.right.take();
    mem::swap(root, &mut pivot);
    root.right = Some(pivot);
}

/// Restores the AVL invariant at a node whose balance factor just hit -2.
/// The pivot is the left child; its own lean decides between a single right
/// rotation and a left-right double rotation. The new balance factors are
/// assigned up front (rotations never touch them) from the case analysis on
/// the pivot's (and, for double rotations, the secondary pivot's) factor.
fn balance_left_heavy<T>(root: &mut Box<Node<T>>) {
    debug_assert_eq!(root.balance, -2);

    let pivot = root
        .left
        .as_mut()
        .expect("a left-heavy node has a left child");

    if pivot.balance > 0 {
        // The pivot leans the other way: rotate it left first so the whole
        // subtree leans left, then rotate the root right. The secondary pivot
        // ends up as subtree root with both sides level.
        let secondary = pivot
            .right
            .as_mut()
            .expect("a right-heavy pivot has a right child");
        let (root_balance, pivot_balance) = match secondary.balance {
            -1 => (1, 0),
            0 => (0, 0),
            _ => (0, -1),
        };
        secondary.balance = 0;
        pivot.balance = pivot_balance;
        rotate_left(pivot);
        root.balance = root_balance;
        rotate_right(root);
    } else {
        // A level pivot can't occur right after an insertion, but the factors
        // below stay exact if it ever does.
        let (root_balance, pivot_balance) = if pivot.balance < 0 { (0, 0) } else { (-1, 1) };
        pivot.balance = pivot_balance;
        root.balance = root_balance;
        rotate_right(root);
    }
}

/// Mirror of [`balance_left_heavy`] for a node whose balance factor just hit
/// +2: the pivot is the right child, the double case is a right-left
/// rotation, and the factor table is sign-negated.
fn balance_right_heavy<T>(root: &mut Box<Node<T>>) {
    debug_assert_eq!(root.balance, 2);

    let pivot = root
        .right
        .as_mut()
        .expect("a right-heavy node has a right child");

    if pivot.balance < 0 {
        let secondary = pivot
            .left
            .as_mut()
            .expect("a left-heavy pivot has a left child");
        let (root_balance, pivot_balance) = match secondary.balance {
            -1 => (0, 1),
            0 => (0, 0),
            _ => (-1, 0),
        };
        secondary.balance = 0;
        pivot.balance = pivot_balance;
        rotate_right(pivot);
        root.balance = root_balance;
        rotate_left(root);
    } else {
        let (root_balance, pivot_balance) = if pivot.balance > 0 { (0, 0) } else { (1, -1) };
        pivot.balance = pivot_balance;
        root.balance = root_balance;
        rotate_left(root);
    }
}
