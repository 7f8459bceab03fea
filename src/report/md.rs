use crate::types::report::AuditReport;

pub fn to_markdown(report: &AuditReport) -> String {
    let mut output = String::new();
    output.push_str("# AEO Report\n\n");
    output.push_str(&format!("URL: {}\n\n", report.url));
    output.push_str(&format!("AEO score: {}/100\n\n", report.aeo_score));

    output.push_str("## Score Breakdown\n\n");
    for (component, score) in report.score_breakdown.iter() {
        output.push_str(&format!(
            "- {}: {}/{}\n",
            component.as_str(),
            score.score,
            score.max
        ));
    }
    output.push('\n');

    output.push_str("## Engine Scores\n\n");
    for entry in report.engine_scores.iter() {
        output.push_str(&format!(
            "- {}: {:.1} ({})\n",
            entry.engine.name(),
            entry.score,
            entry.focus
        ));
    }
    output.push('\n');

    output.push_str("## Quick Checks\n\n");
    for (label, passed) in report.quick_checks().entries() {
        output.push_str(&format!(
            "- [{}] {}\n",
            if passed { "x" } else { " " },
            label
        ));
    }
    output.push('\n');

    output.push_str("## Recommendations\n\n");
    if report.recommendations.is_empty() {
        output.push_str("- none\n");
    } else {
        for recommendation in &report.recommendations {
            output.push_str(&format!(
                "- [{}] {}: {} (effort {:?})\n  {}\n",
                recommendation.priority.label(),
                recommendation.category,
                recommendation.action,
                recommendation.effort,
                recommendation.impact
            ));
        }
    }

    output
}
