//! Incident triage queue
//!
//! [`IncidentQueue`] is the API a dispatcher front end drives: it creates
//! queues, files incidents, hands out the most urgent one, and fuses two
//! queues (for example two zones) into a single queue.
//!
//! # Example
//!
//! ```rust
//! use incident_heaps::{HeapError, IncidentQueue};
//!
//! let mut north = IncidentQueue::new();
//! north.insert(50, "Flooded basement", "North");
//! north.insert(75, "Gas leak", "North");
//!
//! let mut south = IncidentQueue::new();
//! south.insert(90, "Building fire", "South");
//!
//! let mut city = IncidentQueue::merge_zones(&mut north, &mut south);
//! assert!(north.is_empty() && south.is_empty());
//!
//! assert_eq!(city.extract_max().map(|i| i.priority()), Ok(90));
//! assert_eq!(city.peek_max().map(|i| i.priority()), Ok(75));
//! # city.extract_max().unwrap();
//! # city.extract_max().unwrap();
//! assert_eq!(city.extract_max(), Err(HeapError::EmptyQueue));
//! ```

use crate::incident::Incident;
use crate::leftist::LeftistHeap;
use crate::traits::{Heap, HeapError};
use log::{debug, trace};

/// Max-priority queue of [`Incident`]s backed by a [`LeftistHeap`]
#[derive(Debug, Default)]
pub struct IncidentQueue {
    // Keyed by a copy of `Incident::priority`; records are immutable so the
    // key never goes stale.
    heap: LeftistHeap<Incident, i32>,
}

impl IncidentQueue {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            heap: LeftistHeap::new(),
        }
    }

    /// Returns true if no incident is queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued incidents
    ///
    /// ```rust
    /// use incident_heaps::IncidentQueue;
    ///
    /// let mut queue = IncidentQueue::new();
    /// assert!(queue.is_empty());
    /// queue.insert(5, "Smoke alarm", "Dock 2");
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Files a new incident
    pub fn insert(
        &mut self,
        priority: i32,
        description: impl Into<String>,
        location: impl Into<String>,
    ) {
        let incident = Incident::new(priority, description, location);
        debug!("queueing incident: {}", incident);
        self.heap.push(priority, incident);
    }

    /// Removes and returns the most urgent incident
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyQueue`] and leaves the queue untouched when
    /// there is nothing to extract.
    pub fn extract_max(&mut self) -> Result<Incident, HeapError> {
        match self.heap.pop() {
            Some((_, incident)) => {
                debug!("dispatching incident: {}", incident);
                Ok(incident)
            }
            None => {
                trace!("extract_max on empty queue");
                Err(HeapError::EmptyQueue)
            }
        }
    }

    /// Returns the most urgent incident without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyQueue`] when the queue is empty.
    pub fn peek_max(&self) -> Result<&Incident, HeapError> {
        self.heap.peek().map(|(_, incident)| incident).ok_or_else(|| {
            trace!("peek_max on empty queue");
            HeapError::EmptyQueue
        })
    }

    /// Unifies two queues into a new one, consuming both
    pub fn merge_queues(q1: IncidentQueue, q2: IncidentQueue) -> IncidentQueue {
        debug!("merging queues of {} and {} incidents", q1.len(), q2.len());
        IncidentQueue {
            heap: LeftistHeap::merge_heaps(q1.heap, q2.heap),
        }
    }

    /// Unifies two queues into a new one, leaving both sources empty
    pub fn merge_zones(q1: &mut IncidentQueue, q2: &mut IncidentQueue) -> IncidentQueue {
        Self::merge_queues(std::mem::take(q1), std::mem::take(q2))
    }

    /// Removes every incident, most urgent first
    pub fn drain_by_priority(&mut self) -> Vec<Incident> {
        std::mem::take(&mut self.heap)
            .into_sorted_vec()
            .into_iter()
            .map(|(_, incident)| incident)
            .collect()
    }
}
