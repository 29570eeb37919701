//! Leftist Heap implementation
//!
//! A leftist heap is a heap-ordered binary tree in which every node's left
//! child has a rank (null-path-length) at least as large as its right child's.
//! This keeps the right spine of any subtree at most `log₂(n + 1)` nodes long,
//! and since the merge primitive only ever walks right spines, two heaps of
//! sizes n and m merge in O(log n + log m).
//!
//! Every mutating operation is derived from that single primitive:
//! - `push` merges the heap with a one-node heap
//! - `pop` detaches the root and merges its two subtrees
//! - `merge` / [`LeftistHeap::merge_heaps`] merge two roots directly
//!
//! Nodes are exclusively owned by their parent through `Box`, so subtrees move
//! between heaps without copying and without shared or back references.
//!
//! # Time Complexity
//!
//! | Operation | Complexity          |
//! |-----------|---------------------|
//! | `push`    | O(log n)            |
//! | `pop`     | O(log n)            |
//! | `peek`    | O(1)                |
//! | `merge`   | O(log n + log m)    |
//!
//! # Example
//!
//! ```rust
//! use incident_heaps::leftist::LeftistHeap;
//! use incident_heaps::Heap;
//!
//! let mut a = LeftistHeap::new();
//! a.push(50, "a");
//! a.push(75, "b");
//!
//! let mut b = LeftistHeap::new();
//! b.push(90, "c");
//! b.push(60, "d");
//!
//! let merged = LeftistHeap::merge_heaps(a, b);
//! let order: Vec<i32> = merged.into_sorted_vec().into_iter().map(|(p, _)| p).collect();
//! assert_eq!(order, vec![90, 75, 60, 50]);
//! ```

use crate::rank::{checked_increment, Rank, LEAF_RANK, NULL_RANK};
use crate::traits::{Heap, MergeableHeap};
use log::trace;
use std::fmt;

/// Optional owned subtree
type Link<T, P> = Option<Box<Node<T, P>>>;

struct Node<T, P> {
    item: T,
    priority: P,
    rank: Rank,
    left: Link<T, P>,
    right: Link<T, P>,
}

impl<T, P> Node<T, P> {
    fn singleton(priority: P, item: T) -> Box<Self> {
        Box::new(Node {
            item,
            priority,
            rank: LEAF_RANK,
            left: None,
            right: None,
        })
    }
}

/// Rank of a possibly missing subtree
#[inline]
fn rank_of<T, P>(link: &Link<T, P>) -> Rank {
    link.as_ref().map_or(NULL_RANK, |node| node.rank)
}

/// Merges two leftist subtrees, consuming both and returning the new root.
///
/// On equal priorities `a` keeps the root.
fn merge_nodes<T, P: Ord>(a: Link<T, P>, b: Link<T, P>) -> Link<T, P> {
    let (a, b) = match (a, b) {
        (None, b) => return b,
        (a, None) => return a,
        (Some(a), Some(b)) => (a, b),
    };

    let (mut root, other) = if b.priority > a.priority {
        (b, a)
    } else {
        (a, b)
    };

    let right = root.right.take();
    root.right = merge_nodes(right, Some(other));

    if rank_of(&root.left) < rank_of(&root.right) {
        std::mem::swap(&mut root.left, &mut root.right);
    }
    root.rank = checked_increment(rank_of(&root.right));

    Some(root)
}

/// Leftist max-heap
///
/// Stores (priority, item) pairs and always returns the element with the
/// greatest priority first. Elements with equal priorities come out in an
/// unspecified but deterministic order.
pub struct LeftistHeap<T, P: Ord> {
    root: Link<T, P>,
    len: usize,
}

impl<T, P: Ord> Drop for LeftistHeap<T, P> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, P: Ord> Heap<T, P> for LeftistHeap<T, P> {
    fn new() -> Self {
        Self { root: None, len: 0 }
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, priority: P, item: T) {
        let root = self.root.take();
        self.root = merge_nodes(root, Some(Node::singleton(priority, item)));
        self.len += 1;
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.root.as_ref().map(|node| (&node.priority, &node.item))
    }

    fn pop(&mut self) -> Option<(P, T)> {
        let node = *self.root.take()?;
        let Node {
            item,
            priority,
            left,
            right,
            ..
        } = node;

        self.root = merge_nodes(left, right);
        self.len -= 1;
        Some((priority, item))
    }
}

impl<T, P: Ord> MergeableHeap<T, P> for LeftistHeap<T, P> {
    fn merge(&mut self, mut other: Self) {
        let root = self.root.take();
        self.root = merge_nodes(root, other.root.take());
        self.len += std::mem::take(&mut other.len);
    }
}

impl<T, P: Ord> LeftistHeap<T, P> {
    /// Builds a new heap holding the union of `h1` and `h2`, consuming both.
    ///
    /// On equal root priorities the root of `h1` is kept.
    pub fn merge_heaps(mut h1: Self, mut h2: Self) -> Self {
        trace!("merging leftist heaps of {} and {} elements", h1.len, h2.len);
        let root = merge_nodes(h1.root.take(), h2.root.take());
        let len = std::mem::take(&mut h1.len) + std::mem::take(&mut h2.len);
        Self { root, len }
    }

    /// Moves the contents of both heaps into a new heap, leaving `h1` and
    /// `h2` empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use incident_heaps::leftist::LeftistHeap;
    /// use incident_heaps::Heap;
    ///
    /// let mut a = LeftistHeap::new();
    /// let mut b = LeftistHeap::new();
    /// a.push(1, ());
    /// b.push(2, ());
    ///
    /// let merged = LeftistHeap::merge_taken(&mut a, &mut b);
    /// assert!(a.is_empty() && b.is_empty());
    /// assert_eq!(merged.len(), 2);
    /// ```
    pub fn merge_taken(h1: &mut Self, h2: &mut Self) -> Self {
        Self::merge_heaps(std::mem::take(h1), std::mem::take(h2))
    }

    /// Rank of the root, or [`NULL_RANK`] when empty
    pub fn rank(&self) -> Rank {
        rank_of(&self.root)
    }

    /// Removes every element
    ///
    /// Nodes are released iteratively: the left spine of a leftist heap can
    /// be as long as the heap itself.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T, P>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Consumes the heap, returning its elements from highest to lowest priority
    pub fn into_sorted_vec(mut self) -> Vec<(P, T)> {
        let mut out = Vec::with_capacity(self.len);
        while let Some(entry) = self.pop() {
            out.push(entry);
        }
        out
    }

    /// Checks every structural invariant of the tree:
    ///
    /// - max-heap order between each node and its children
    /// - leftist property: `rank(left) >= rank(right)`
    /// - rank correctness: `rank == 1 + rank(right)`
    /// - the number of reachable nodes equals `len()`
    pub fn verify_invariants(&self) -> bool {
        let mut count = 0usize;
        let mut stack: Vec<&Node<T, P>> = self.root.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            count += 1;

            let left_rank = rank_of(&node.left);
            let right_rank = rank_of(&node.right);
            if left_rank < right_rank || node.rank != right_rank + 1 {
                return false;
            }

            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                if child.priority > node.priority {
                    return false;
                }
                stack.push(child);
            }
        }

        count == self.len
    }
}

impl<T, P: Ord> Default for LeftistHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> fmt::Debug for LeftistHeap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeftistHeap")
            .field("len", &self.len)
            .field("rank", &self.rank())
            .finish()
    }
}
