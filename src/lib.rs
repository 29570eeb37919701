//! Mergeable Priority Queues for Incident Triage
//!
//! This crate provides a leftist max-heap and an incident queue built on it.
//! A single recursive merge primitive drives every structural change, so
//! insert, extract-max, and the union of two queues all run in O(log n).
//!
//! # Features
//!
//! - **Leftist Heap**: O(log n) insert, delete-max, and merge; O(1) peek
//! - **Incident Queue**: priority-ordered incident records with destructive
//!   queue fusion, where the source queues are consumed or left empty
//!
//! # Example
//!
//! ```rust
//! use incident_heaps::IncidentQueue;
//!
//! let mut queue = IncidentQueue::new();
//! queue.insert(50, "Minor collision", "5th Ave");
//! queue.insert(90, "Structure fire", "Pier 3");
//! queue.insert(75, "Gas leak", "Elm St");
//!
//! assert_eq!(queue.peek_max().unwrap().priority(), 90);
//! assert_eq!(queue.extract_max().unwrap().location(), "Pier 3");
//! assert_eq!(queue.len(), 2);
//! ```

pub mod incident;
pub mod leftist;
pub mod queue;
pub mod rank;
pub mod traits;

// Re-export the main types for convenience
pub use incident::Incident;
pub use leftist::LeftistHeap;
pub use queue::IncidentQueue;
pub use traits::{Heap, HeapError, MergeableHeap};
