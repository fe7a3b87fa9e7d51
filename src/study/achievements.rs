use super::tracker::ProgressTracker;
use crate::catalog::Level;

/// Milestones shown on the progress overview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Achievement {
    /// Learn 10 words
    FirstSteps,
    /// Complete 5 grammar topics
    Grammarian,
    /// Study 7 days in a row
    Streak,
    /// Study at level B1 or above
    Advanced,
}

impl Achievement {
    pub const ALL: [Achievement; 4] = [
        Achievement::FirstSteps,
        Achievement::Grammarian,
        Achievement::Streak,
        Achievement::Advanced,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstSteps => "First steps",
            Achievement::Grammarian => "Grammarian",
            Achievement::Streak => "Streak",
            Achievement::Advanced => "Advanced",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::FirstSteps => "Learn 10 words",
            Achievement::Grammarian => "Complete 5 grammar topics",
            Achievement::Streak => "Study 7 days in a row",
            Achievement::Advanced => "Reach level B1",
        }
    }

    pub fn is_unlocked(&self, progress: &ProgressTracker, level: Level) -> bool {
        match self {
            Achievement::FirstSteps => progress.learned_word_ids.len() >= 10,
            Achievement::Grammarian => progress.completed_topic_ids.len() >= 5,
            Achievement::Streak => progress.streak_days >= 7,
            Achievement::Advanced => level >= Level::B1,
        }
    }
}
