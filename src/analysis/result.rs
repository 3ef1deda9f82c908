//! Analysis results as returned by the remote service

use serde::Deserialize;
use std::fmt;

/// The classes the service scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreLabel {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl ScoreLabel {
    /// Fixed iteration order, also used to break ties
    pub const ALL: [ScoreLabel; 4] = [
        ScoreLabel::Positive,
        ScoreLabel::Negative,
        ScoreLabel::Neutral,
        ScoreLabel::Mixed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreLabel::Positive => "Positive",
            ScoreLabel::Negative => "Negative",
            ScoreLabel::Neutral => "Neutral",
            ScoreLabel::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-class confidence in `[0, 1]`; absent classes were not reported
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct SentimentScore {
    #[serde(rename = "Positive", default)]
    pub positive: Option<f64>,
    #[serde(rename = "Negative", default)]
    pub negative: Option<f64>,
    #[serde(rename = "Neutral", default)]
    pub neutral: Option<f64>,
    #[serde(rename = "Mixed", default)]
    pub mixed: Option<f64>,
}

impl SentimentScore {
    pub fn get(&self, label: ScoreLabel) -> Option<f64> {
        match label {
            ScoreLabel::Positive => self.positive,
            ScoreLabel::Negative => self.negative,
            ScoreLabel::Neutral => self.neutral,
            ScoreLabel::Mixed => self.mixed,
        }
    }

    /// Reported classes in [`ScoreLabel::ALL`] order
    pub fn entries(&self) -> impl Iterator<Item = (ScoreLabel, f64)> + '_ {
        ScoreLabel::ALL
            .into_iter()
            .filter_map(move |label| self.get(label).map(|v| (label, v)))
    }

    /// Highest-confidence class.
    ///
    /// Ties go to the earliest class in [`ScoreLabel::ALL`]. When nothing
    /// scores above zero the answer is `Neutral` at `0.0`.
    pub fn top(&self) -> (ScoreLabel, f64) {
        let mut best = (ScoreLabel::Neutral, 0.0);
        for (label, value) in self.entries() {
            if value > best.1 {
                best = (label, value);
            }
        }
        best
    }
}

/// One successful analysis
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub score: SentimentScore,
}
