use tracing::debug;

use super::step::SolutionStep;

/// Result of stepping the player forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Already on the last step (or nothing loaded).
    Unchanged,
    Stepped,
    /// Stepped onto the final instruction.
    Finished,
}

/// Step-through playback of a solver's move list.
///
/// Playback is informational: it never touches the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionPlayer {
    steps: Vec<SolutionStep>,
    formatted: Vec<String>,
    cursor: usize,
    current: String,
    visible: bool,
}

impl SolutionPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sequence and rewind to its first step.
    pub fn load(&mut self, steps: Vec<SolutionStep>) {
        self.formatted = steps.iter().map(ToString::to_string).collect();
        self.steps = steps;
        self.cursor = 0;
        self.current = self.formatted.first().cloned().unwrap_or_default();
        self.visible = true;
        debug!(steps = self.steps.len(), "solution loaded");
    }

    pub fn advance(&mut self) -> Advance {
        if !self.has_next() {
            return Advance::Unchanged;
        }
        self.cursor += 1;
        self.current = self.formatted[self.cursor].clone();
        if self.cursor == self.formatted.len() - 1 {
            Advance::Finished
        } else {
            Advance::Stepped
        }
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.formatted.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[SolutionStep] {
        &self.steps
    }

    /// Text of the step under the cursor.
    pub fn current_step(&self) -> &str {
        &self.current
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_steps() -> Vec<SolutionStep> {
        vec![
            SolutionStep::new(1, 0, 2),
            SolutionStep::new(2, 0, 1),
            SolutionStep::new(1, 2, 1),
        ]
    }

    #[test]
    fn test_fresh_player_is_hidden() {
        let player = SolutionPlayer::new();
        assert!(!player.is_visible());
        assert!(!player.has_next());
        assert_eq!(player.current_step(), "");
    }

    #[test]
    fn test_empty_load_is_inert() {
        let mut player = SolutionPlayer::new();
        player.load(Vec::new());
        assert!(player.is_visible());
        assert!(!player.has_next());
        assert_eq!(player.advance(), Advance::Unchanged);
        assert_eq!(player.cursor(), 0);
        assert_eq!(player.current_step(), "");
    }

    #[test]
    fn test_load_shows_first_step() {
        let mut player = SolutionPlayer::new();
        player.load(three_steps());
        assert!(player.is_visible());
        assert_eq!(player.cursor(), 0);
        assert_eq!(player.current_step(), "Move disk 1 from rod 0 to rod 2");
        assert!(player.has_next());
    }

    #[test]
    fn test_advance_to_end() {
        let mut player = SolutionPlayer::new();
        player.load(three_steps());

        assert_eq!(player.advance(), Advance::Stepped);
        assert_eq!(player.cursor(), 1);
        assert_eq!(player.current_step(), "Move disk 2 from rod 0 to rod 1");

        assert_eq!(player.advance(), Advance::Finished);
        assert_eq!(player.cursor(), 2);
        assert_eq!(player.current_step(), "Move disk 1 from rod 2 to rod 1");
        assert!(!player.has_next());

        assert_eq!(player.advance(), Advance::Unchanged);
        assert_eq!(player.advance(), Advance::Unchanged);
        assert_eq!(player.cursor(), 2);
    }

    #[test]
    fn test_single_step_never_finishes_by_advancing() {
        let mut player = SolutionPlayer::new();
        player.load(vec![SolutionStep::new(1, 0, 2)]);
        assert!(!player.has_next());
        assert_eq!(player.advance(), Advance::Unchanged);
    }

    #[test]
    fn test_reload_rewinds() {
        let mut player = SolutionPlayer::new();
        player.load(three_steps());
        player.advance();
        player.advance();

        player.load(vec![SolutionStep::named(1, "A", "B")]);
        assert_eq!(player.cursor(), 0);
        assert_eq!(player.len(), 1);
        assert_eq!(player.current_step(), "Move disk 1 from rod A to rod B");
    }
}
