//! What the result card shows, independent of how it is drawn

use crate::analysis::{AnalysisResult, ScoreLabel};

/// Percentage with one decimal, e.g. `0.82` → `"82.0%"`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub label: ScoreLabel,
    pub value: f64,
    pub percent: String,
}

/// Presentation model for one [`AnalysisResult`].
///
/// The badge shows the service's `sentiment` label while the confidence
/// comes from the top score entry. The two can disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub badge: String,
    pub top_label: ScoreLabel,
    pub confidence: String,
    pub rows: Vec<ScoreRow>,
}

impl ResultView {
    pub fn new(result: &AnalysisResult) -> Self {
        let (top_label, top_value) = result.score.top();
        let badge = if result.sentiment.is_empty() {
            "Unknown".to_string()
        } else {
            result.sentiment.clone()
        };
        let rows = result
            .score
            .entries()
            .map(|(label, value)| ScoreRow {
                label,
                value,
                percent: format_percent(value),
            })
            .collect();

        ResultView {
            badge,
            top_label,
            confidence: format_percent(top_value),
            rows,
        }
    }

    /// Plain-text rendering for non-interactive output
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{}  (Confidence: {})", self.badge, self.confidence)];
        for row in &self.rows {
            lines.push(format!(
                "{:<9}{:>7}  {}",
                format!("{}:", row.label),
                row.percent,
                bar(row.value, 20)
            ));
        }
        lines
    }
}

fn bar(value: f64, width: usize) -> String {
    let filled = ((value.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
