//! Incident records stored in the triage queues

use std::fmt;

/// A reported incident
///
/// Higher `priority` means more urgent. Priorities conventionally fall in
/// 1..=100, but any `i32` is accepted, including negative and repeated values.
/// The record cannot be modified after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incident {
    priority: i32,
    description: String,
    location: String,
}

impl Incident {
    /// Creates a new incident
    pub fn new(
        priority: i32,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            priority,
            description: description.into(),
            location: location.into(),
        }
    }

    /// Urgency, higher first
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// What happened
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Where it happened
    pub fn location(&self) -> &str {
        &self.location
    }
}

impl fmt::Display for Incident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Priority: {} | Description: {} | Location: {}",
            self.priority, self.description, self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let incident = Incident::new(42, "Fire", "Main St");
        assert_eq!(incident.priority(), 42);
        assert_eq!(incident.description(), "Fire");
        assert_eq!(incident.location(), "Main St");
    }

    #[test]
    fn test_display() {
        let incident = Incident::new(90, "Cardiac arrest", "Station 4");
        assert_eq!(
            incident.to_string(),
            "Priority: 90 | Description: Cardiac arrest | Location: Station 4"
        );
    }
}
