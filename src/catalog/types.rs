// src/catalog/types.rs
// Display records for the example catalog.

use serde::{Deserialize, Serialize};

/// How much AgentSea experience a snippet assumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Display label, as shown on the card badge.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One displayable example entry. Supplied by the hosting surface and never
/// mutated by the view. `code` is an opaque text blob; the renderer clips it
/// for display but the value itself is never altered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleRecord {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub code: String,
    pub use_cases: Vec<String>,
    pub category: String,
    pub difficulty: Difficulty,
}

/// Distinct category labels in first-appearance order.
pub fn categories(records: &[ExampleRecord]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for record in records {
        if !seen.iter().any(|c| c.eq_ignore_ascii_case(&record.category)) {
            seen.push(&record.category);
        }
    }
    seen
}
