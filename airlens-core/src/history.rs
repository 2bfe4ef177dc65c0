//! Rolling score history for trend display
//!
//! Dashboards polling [`crate::analyze`] want "is the air getting worse"
//! next to the current number. This keeps a bounded window of recent
//! composite scores with an exponential moving average and a simple
//! linear-regression trend over the last few entries.
//!
//! Fixed capacity (`heapless` under `no_std`), oldest entry evicted
//! first, so memory use is constant regardless of how long the dashboard
//! stays open.

#[cfg(not(feature = "std"))]
use heapless::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// How many recent scores the trend regression looks at.
const TREND_WINDOW: usize = 10;

/// Bounded history of composite scores.
pub struct ScoreHistory<const N: usize = 32> {
    /// Recent scores, oldest first
    #[cfg(not(feature = "std"))]
    scores: Vec<u16, N>,
    #[cfg(feature = "std")]
    scores: Vec<u16>,
    /// Exponential moving average, seeded by the first score
    ema: Option<f32>,
    /// EMA smoothing factor (0.0 - 1.0)
    alpha: f32,
}

impl<const N: usize> ScoreHistory<N> {
    /// Create an empty history with the given EMA smoothing factor.
    pub fn new(alpha: f32) -> Self {
        Self {
            scores: Vec::new(),
            ema: None,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Record a score, evicting the oldest entry when full.
    pub fn push(&mut self, score: u16) {
        self.ema = Some(match self.ema {
            Some(ema) => self.alpha * score as f32 + (1.0 - self.alpha) * ema,
            None => score as f32,
        });

        if self.scores.len() == N {
            self.scores.remove(0);
        }

        #[cfg(not(feature = "std"))]
        let _ = self.scores.push(score);
        #[cfg(feature = "std")]
        self.scores.push(score);
    }

    /// Number of recorded scores.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Most recent score.
    pub fn latest(&self) -> Option<u16> {
        self.scores.last().copied()
    }

    /// Exponential moving average of recorded scores.
    pub fn ema(&self) -> Option<f32> {
        self.ema
    }

    /// Trend slope over the recent window (score units per sample).
    ///
    /// Positive means worsening air. Returns 0 with fewer than two
    /// samples.
    pub fn trend(&self) -> f32 {
        if self.scores.len() < 2 {
            return 0.0;
        }

        // Least-squares slope over the last TREND_WINDOW scores
        let n = self.scores.len().min(TREND_WINDOW);
        let start = self.scores.len() - n;

        let mut sum_x = 0.0f32;
        let mut sum_y = 0.0f32;
        let mut sum_xy = 0.0f32;
        let mut sum_xx = 0.0f32;

        for (i, &score) in self.scores[start..].iter().enumerate() {
            let x = i as f32;
            let y = score as f32;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        let n_f = n as f32;
        (n_f * sum_xy - sum_x * sum_y) / (n_f * sum_xx - sum_x * sum_x)
    }

    /// Whether the trend is meaningfully upward.
    pub fn is_worsening(&self) -> bool {
        self.trend() > 0.5
    }
}

impl<const N: usize> Default for ScoreHistory<N> {
    fn default() -> Self {
        Self::new(0.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history() {
        let history: ScoreHistory<8> = ScoreHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
        assert_eq!(history.ema(), None);
        assert_eq!(history.trend(), 0.0);
    }

    #[test]
    fn ema_seeds_from_first_score() {
        let mut history: ScoreHistory<8> = ScoreHistory::new(0.5);
        history.push(100);
        assert_eq!(history.ema(), Some(100.0));
        history.push(200);
        assert_eq!(history.ema(), Some(150.0));
    }

    #[test]
    fn rising_scores_trend_upward() {
        let mut history: ScoreHistory<16> = ScoreHistory::default();
        for score in [40, 55, 70, 85, 100] {
            history.push(score);
        }
        assert!(history.trend() > 0.0);
        assert!(history.is_worsening());
    }

    #[test]
    fn flat_scores_do_not_worsen() {
        let mut history: ScoreHistory<16> = ScoreHistory::default();
        for _ in 0..5 {
            history.push(60);
        }
        assert_eq!(history.trend(), 0.0);
        assert!(!history.is_worsening());
    }

    #[test]
    fn window_evicts_oldest() {
        let mut history: ScoreHistory<4> = ScoreHistory::default();
        for score in [10, 20, 30, 40, 50] {
            history.push(score);
        }
        assert_eq!(history.len(), 4);
        assert_eq!(history.latest(), Some(50));
    }
}
