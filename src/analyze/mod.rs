pub mod breakdown;
pub mod engines;
pub mod recommend;

use crate::types::report::AuditReport;
use crate::types::signals::SignalBundle;
use chrono::{DateTime, Utc};

pub fn analyze(url: &str, signals: SignalBundle) -> AuditReport {
    analyze_at(url, signals, Utc::now())
}

/// Scores and recommendations for one signal bundle. Pure apart from the
/// supplied timestamp.
pub fn analyze_at(url: &str, signals: SignalBundle, analyzed_at: DateTime<Utc>) -> AuditReport {
    let score_breakdown = breakdown::score_breakdown(&signals);
    let engine_scores = engines::engine_scores(&score_breakdown);
    let recommendations = recommend::recommendations(&signals);

    let report = AuditReport {
        url: url.to_string(),
        analyzed_at,
        aeo_score: score_breakdown.total,
        signals,
        score_breakdown,
        engine_scores,
        recommendations,
    };
    tracing::info!(
        url,
        score = report.aeo_score,
        recommendations = report.recommendations.len(),
        "page scored"
    );
    report
}
