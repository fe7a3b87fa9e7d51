use super::level::Level;
use serde::{Deserialize, Serialize};

/// A grammar topic from the bundled catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarTopic {
    /// Unique identifier (e.g., "a2-perfekt")
    pub id: String,
    /// Proficiency level of the topic
    pub level: Level,
    /// Short title
    pub title: String,
    /// Explanation text
    pub explanation: String,
    /// Example sentences, in display order
    #[serde(default)]
    pub examples: Vec<String>,
}
