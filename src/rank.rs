//! Rank (null-path-length) type and utilities for leftist heap nodes.
//!
//! The rank of a node is the length of the shortest path from it to a node
//! with a missing child. A missing child has rank [`NULL_RANK`] (-1), so a
//! leaf has rank 0.
//!
//! # Why i8?
//!
//! The leftist property bounds the right spine of an n-node tree to
//! `log₂(n + 1)` nodes, and the root's rank is that spine length minus one.
//! Even a heap with 2⁶⁴ elements has rank below 64, so `i8` (max 127) holds
//! every rank that can occur while still representing the -1 of a missing
//! child directly.
//!
//! # Runtime Checks
//!
//! The [`checked_increment`] function provides a safe way to increase rank,
//! panicking if the theoretical limit is exceeded (which would indicate a bug,
//! since it's mathematically impossible with valid heap operations).

/// Type alias for node rank.
pub type Rank = i8;

/// Rank of a missing child.
pub const NULL_RANK: Rank = -1;

/// Rank of a node with no children.
pub const LEAF_RANK: Rank = 0;

/// Maximum valid rank value.
pub const MAX_RANK: Rank = i8::MAX;

/// Safely increment a rank value, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`. This should never happen in practice since
/// it would require a heap with more than 2¹²⁷ elements.
///
/// # Example
///
/// ```rust
/// use incident_heaps::rank::{checked_increment, NULL_RANK};
///
/// assert_eq!(checked_increment(NULL_RANK), 0);
/// assert_eq!(checked_increment(5), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: this should be impossible since the right spine of a \
         leftist heap is at most log₂(n + 1) nodes long",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_increment() {
        assert_eq!(checked_increment(NULL_RANK), LEAF_RANK);
        assert_eq!(checked_increment(0), 1);
        assert_eq!(checked_increment(126), 127);
    }

    #[test]
    #[should_panic(expected = "rank overflow")]
    fn test_checked_increment_overflow() {
        checked_increment(MAX_RANK);
    }

    #[test]
    fn test_max_rank_sufficient() {
        // 2^64 elements give a root rank below 64
        assert!(MAX_RANK > 64);
        assert_eq!(std::mem::size_of::<Rank>(), 1);
    }
}
