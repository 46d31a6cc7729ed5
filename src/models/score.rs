/// Running statistics for one quiz session.
///
/// Starts at zero and is only changed through [`crate::quiz::evaluate`] and
/// [`crate::quiz::skip`], which keep `correct <= total` and
/// `streak <= best_streak`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    correct: u32,
    total: u32,
    streak: u32,
    best_streak: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Graded answers plus skipped questions.
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub(crate) fn record_answer(&mut self, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        self.best_streak = self.best_streak.max(self.streak);
    }

    pub(crate) fn record_skip(&mut self) {
        self.total += 1;
        self.streak = 0;
    }

    /// Score out of ten with one decimal, e.g. `"7.5"`.
    ///
    /// Halves round up. An empty session scores `"0.0"`.
    pub fn display_score(&self) -> String {
        if self.total == 0 {
            return "0.0".to_string();
        }

        let total = u64::from(self.total);
        let tenths = (100 * u64::from(self.correct) + total / 2) / total;
        format!("{}.{}", tenths / 10, tenths % 10)
    }
}
