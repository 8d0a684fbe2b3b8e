use crate::stats::progress_ratio;

/// Text progress bar shown under the text box while stats are tracked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    ratio: f64,
    width: usize,
}

impl ProgressBar {
    pub fn new(typed_len: usize, passage_len: usize, width: usize) -> Self {
        Self {
            ratio: progress_ratio(typed_len, passage_len),
            width,
        }
    }

    pub fn filled(&self) -> usize {
        ((self.ratio * self.width as f64).round_ties_even() as usize).min(self.width)
    }

    pub fn percent(&self) -> u32 {
        (self.ratio * 100.0).round_ties_even() as u32
    }

    pub fn bar(&self) -> String {
        let filled = self.filled();
        format!(
            "[{}{}]",
            "=".repeat(filled),
            " ".repeat(self.width - filled)
        )
    }

    pub fn label(&self) -> String {
        format!("{}%", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_progress() {
        let bar = ProgressBar::new(0, 10, 8);
        assert_eq!(bar.filled(), 0);
        assert_eq!(bar.bar(), "[        ]");
        assert_eq!(bar.label(), "0%");
    }

    #[test]
    fn test_partial_progress() {
        let bar = ProgressBar::new(1, 4, 40);
        assert_eq!(bar.filled(), 10);
        assert_eq!(bar.percent(), 25);
        assert_eq!(bar.bar().len(), 42);
    }

    #[test]
    fn test_halves_round_to_even() {
        // 1/8 of 4 cells is 0.5, 3/8 is 1.5
        assert_eq!(ProgressBar::new(1, 8, 4).filled(), 0);
        assert_eq!(ProgressBar::new(3, 8, 4).filled(), 2);
    }

    #[test]
    fn test_overflow_is_clamped() {
        let bar = ProgressBar::new(30, 10, 6);
        assert_eq!(bar.filled(), 6);
        assert_eq!(bar.label(), "100%");
        assert_eq!(bar.bar(), "[======]");
    }
}
