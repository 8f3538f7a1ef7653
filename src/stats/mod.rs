
use std::collections::HashMap;
use std::fmt::Write as _;

use crate::store::AttemptRecord;

/// Width of a full (100%) bar in the rendered chart
const BAR_WIDTH: usize = 40;

/// Correct/total tally for one term
#[derive(Debug, Clone, PartialEq)]
pub struct TermStats {
    pub term: String,
    pub correct: u32,
    pub total: u32,
}

impl TermStats {
    /// Share of correct attempts, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.total) * 100.0
    }
}

/// Tally attempts per distinct term, in first-seen order
pub fn aggregate(history: &[AttemptRecord]) -> Vec<TermStats> {
    let mut stats: Vec<TermStats> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for attempt in history {
        let i = *index.entry(attempt.term.clone()).or_insert_with(|| {
            stats.push(TermStats {
                term: attempt.term.clone(),
                correct: 0,
                total: 0,
            });
            stats.len() - 1
        });

        stats[i].total += 1;
        if attempt.correct {
            stats[i].correct += 1;
        }
    }

    stats
}

/// Overall success rate across every recorded attempt
pub fn overall_rate(stats: &[TermStats]) -> f64 {
    let correct: u32 = stats.iter().map(|s| s.correct).sum();
    let total: u32 = stats.iter().map(|s| s.total).sum();
    if total == 0 {
        return 0.0;
    }
    f64::from(correct) / f64::from(total) * 100.0
}

/// Render per-term success rates as a bar chart, ascending by rate, with
/// the overall rate as a footer
pub fn render_chart(stats: &[TermStats]) -> String {
    let mut sorted: Vec<&TermStats> = stats.iter().collect();
    sorted.sort_by(|a, b| {
        a.success_rate()
            .partial_cmp(&b.success_rate())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let name_width = sorted.iter().map(|s| s.term.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for s in &sorted {
        let rate = s.success_rate();
        let filled = (rate / 100.0 * BAR_WIDTH as f64).round() as usize;
        let _ = writeln!(
            out,
            "{:<width$}  {}{} {:>6.2}% ({}/{})",
            s.term,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            rate,
            s.correct,
            s.total,
            width = name_width,
        );
    }
    if !sorted.is_empty() {
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "Overall success rate: {:.2}%", overall_rate(stats));

    out
}
