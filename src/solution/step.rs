use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::Disk;

/// Peg label as reported by the solver. Shown verbatim in step text, so
/// both `0`/`1`/`2` and `"A"`/`"B"`/`"C"` style solvers are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PegLabel {
    Index(u64),
    Name(String),
}

impl fmt::Display for PegLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PegLabel::Index(i) => write!(f, "{i}"),
            PegLabel::Name(name) => f.write_str(name),
        }
    }
}

/// One solver instruction: move `disk` from peg `from` to peg `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionStep {
    pub disk: Disk,
    pub from: PegLabel,
    pub to: PegLabel,
}

impl SolutionStep {
    /// Step between numbered pegs.
    pub fn new(disk: Disk, from: u64, to: u64) -> Self {
        SolutionStep {
            disk,
            from: PegLabel::Index(from),
            to: PegLabel::Index(to),
        }
    }

    /// Step between pegs the solver names, e.g. `"A"` and `"C"`.
    pub fn named(disk: Disk, from: &str, to: &str) -> Self {
        SolutionStep {
            disk,
            from: PegLabel::Name(from.to_string()),
            to: PegLabel::Name(to.to_string()),
        }
    }
}

impl fmt::Display for SolutionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move disk {} from rod {} to rod {}",
            self.disk, self.from, self.to
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_text() {
        let step = SolutionStep::new(2, 0, 2);
        assert_eq!(step.to_string(), "Move disk 2 from rod 0 to rod 2");

        let step = SolutionStep::named(1, "A", "C");
        assert_eq!(step.to_string(), "Move disk 1 from rod A to rod C");
    }

    #[test]
    fn test_decode_numeric_and_named_pegs() {
        let json = r#"[
            {"disk": 1, "from": 0, "to": 2},
            {"disk": 2, "from": "A", "to": "B"}
        ]"#;
        let steps: Vec<SolutionStep> = serde_json::from_str(json).unwrap();
        assert_eq!(
            steps,
            vec![SolutionStep::new(1, 0, 2), SolutionStep::named(2, "A", "B")]
        );
    }

    #[test]
    fn test_decode_rejects_missing_disk() {
        let json = r#"{"from": 0, "to": 2}"#;
        assert!(serde_json::from_str::<SolutionStep>(json).is_err());
    }
}
