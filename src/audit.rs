//! The audit pipeline shared by every entry point:
//! validate → fetch → parse → extract → score → recommend.

use crate::analyze;
use crate::error::Result;
use crate::page::fetch::{parse_target, PageFetcher};
use crate::page::html::HtmlDocument;
use crate::scan;
use crate::types::report::AuditReport;

pub fn audit_url(fetcher: &dyn PageFetcher, raw_url: &str) -> Result<AuditReport> {
    let url = parse_target(raw_url)?;
    let html = fetcher.fetch(&url)?;
    Ok(audit_html(url.as_str(), &html))
}

pub fn audit_html(url: &str, html: &str) -> AuditReport {
    let doc = HtmlDocument::parse(html);
    let signals = scan::discover(&doc);
    analyze::analyze(url, signals)
}


#[cfg(test)]
mod tests {
    use super::testing::{FailingFetcher, StaticFetcher, SAMPLE_PAGE};
    use super::*;
    use crate::error::AuditError;
    use std::sync::atomic::Ordering;

    #[test]
    fn audit_url_runs_the_whole_pipeline() {
        let fetcher = StaticFetcher::new(SAMPLE_PAGE);
        let report = audit_url(&fetcher, "https://example.com/coffee").expect("audit succeeds");

        assert_eq!(report.url, "https://example.com/coffee");
        assert!(report.signals.schema.faq_present);
        assert_eq!(report.signals.schema.faq_count, 3);
        assert_eq!(report.signals.questions.question_headings, 3);
        assert_eq!(report.signals.snippet.first_para_words, 45);
        assert!(report.signals.eeat.has_author_meta);
        assert!(report.signals.eeat.has_date);
        assert!(report.signals.eeat.has_author_bio);
        assert_eq!(report.score_breakdown.schema.score, 10.0);
        assert_eq!(report.score_breakdown.questions.score, 12.0);
        assert_eq!(report.score_breakdown.eeat.score, 7.5);
        assert!(report
            .recommendations
            .iter()
            .any(|recommendation| recommendation.id == "schema.howto"));
    }

    #[test]
    fn missing_url_never_reaches_the_fetcher() {
        let fetcher = StaticFetcher::new(SAMPLE_PAGE);
        let err = audit_url(&fetcher, "").expect_err("blank url should fail");
        assert!(matches!(err, AuditError::MissingUrl));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn fetch_failures_propagate() {
        let err = audit_url(&FailingFetcher { status: 503 }, "https://example.com")
            .expect_err("fetch should fail");
        assert!(matches!(err, AuditError::HttpStatus { status: 503, .. }));
        assert!(!err.is_client_error());
    }
}
