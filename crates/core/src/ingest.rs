use serde::{Deserialize, Serialize};

/// Outcome of loading a recipe file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    /// Records found in the input.
    pub processed: usize,
    pub inserted: usize,
    /// Records whose title already existed.
    pub skipped: usize,
    /// Records that failed to decode, validate or insert.
    pub failed: usize,
}

/// Result of storing a single recipe record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "recipe_id")]
pub enum InsertOutcome {
    Inserted(i64),
    /// A recipe with the same title (ignoring case) is already stored.
    AlreadyExists(i64),
}

impl IngestReport {
    pub fn record(&mut self, outcome: InsertOutcome) {
        match outcome {
            InsertOutcome::Inserted(_) => self.inserted += 1,
            InsertOutcome::AlreadyExists(_) => self.skipped += 1,
        }
    }
}
