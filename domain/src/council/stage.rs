//! Council workflow stages

use serde::{Deserialize, Serialize};

/// Stage of a council run
///
/// A run walks the stages strictly in order: stage N+1 never starts
/// before stage N's fan-out has fully completed, because reviews must
/// see every available answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Stage 1 - every member answers the question
    Answers,
    /// Stage 2 - every member ranks the anonymized answers of its peers
    Reviews,
    /// Stage 3 - the chairman synthesizes answers and reviews
    Synthesis,
}

impl Stage {
    pub fn display_name(&self) -> &str {
        match self {
            Stage::Answers => "Collecting Answers",
            Stage::Reviews => "Collecting Reviews",
            Stage::Synthesis => "Synthesis",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::Answers.to_string(), "Collecting Answers");
        assert_eq!(Stage::Reviews.to_string(), "Collecting Reviews");
        assert_eq!(Stage::Synthesis.to_string(), "Synthesis");
    }
}
