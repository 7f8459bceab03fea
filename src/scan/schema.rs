use crate::page::Document;
use crate::types::signals::SchemaSignals;
use serde_json::Value;

const LD_JSON: &str = "application/ld+json";

/// Reads every JSON-LD block on the page. A block that fails to parse is
/// skipped; the remaining blocks are still scanned.
///
/// When several blocks describe the same type, the last one sets the count.
pub fn detect_schema(doc: &dyn Document) -> SchemaSignals {
    let mut signals = SchemaSignals::default();

    for script in doc.find_all(&["script"]) {
        let is_ld_json = script
            .attr("type")
            .map(|kind| kind.trim().eq_ignore_ascii_case(LD_JSON))
            .unwrap_or(false);
        if !is_ld_json {
            continue;
        }

        let data: Value = match serde_json::from_str(script.text.trim()) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed JSON-LD block");
                continue;
            }
        };

        for item in schema_items(&data) {
            apply_item(&mut signals, item);
        }
    }

    signals
}

/// Top-level objects of a block, plus the members of any `@graph`.
fn schema_items(data: &Value) -> Vec<&Value> {
    let mut items: Vec<&Value> = match data {
        Value::Array(entries) => entries.iter().filter(|entry| entry.is_object()).collect(),
        Value::Object(_) => vec![data],
        _ => Vec::new(),
    };
    let graph_members: Vec<&Value> = items
        .iter()
        .copied()
        .filter_map(|item| item.get("@graph"))
        .filter_map(Value::as_array)
        .flatten()
        .filter(|member| member.is_object())
        .collect();
    items.extend(graph_members);
    items
}

fn type_label(item: &Value) -> String {
    match item.get("@type") {
        Some(Value::String(kind)) => kind.to_lowercase(),
        Some(Value::Array(kinds)) => kinds
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" "),
        _ => String::new(),
    }
}

fn entry_count(value: Option<&Value>) -> usize {
    match value {
        Some(Value::Array(entries)) => entries.len(),
        Some(Value::Object(_)) => 1,
        _ => 0,
    }
}

fn apply_item(signals: &mut SchemaSignals, item: &Value) {
    let label = type_label(item);
    if label.contains("faqpage") {
        signals.faq_present = true;
        signals.faq_count = entry_count(item.get("mainEntity"));
    } else if label.contains("howto") {
        signals.howto_present = true;
        signals.howto_count = entry_count(item.get("step"));
    } else if label.contains("article") {
        signals.article_present = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::fake::FakeDocument;

    fn ld(doc: FakeDocument, body: &str) -> FakeDocument {
        doc.element("script", &[("type", "application/ld+json")], body)
    }

    #[test]
    fn faq_page_counts_main_entities() {
        let doc = ld(
            FakeDocument::new(),
            r#"{"@type":"FAQPage","mainEntity":[{},{},{}]}"#,
        );
        let signals = detect_schema(&doc);
        assert!(signals.faq_present);
        assert_eq!(signals.faq_count, 3);
        assert!(!signals.howto_present);
    }

    #[test]
    fn malformed_block_does_not_stop_the_scan() {
        let doc = ld(FakeDocument::new(), r#"{"@type": "FAQPage", "#);
        let doc = ld(doc, r#"{"@type":"FAQPage","mainEntity":[{}]}"#);
        let signals = detect_schema(&doc);
        assert!(signals.faq_present);
        assert_eq!(signals.faq_count, 1);
    }

    #[test]
    fn list_blocks_are_scanned_item_by_item() {
        let doc = ld(
            FakeDocument::new(),
            r#"[{"@type":"HowTo","step":[{},{}]},{"@type":"NewsArticle"}]"#,
        );
        let signals = detect_schema(&doc);
        assert!(signals.howto_present);
        assert_eq!(signals.howto_count, 2);
        assert!(signals.article_present);
    }

    #[test]
    fn type_match_is_case_insensitive() {
        let doc = ld(FakeDocument::new(), r#"{"@type":"faqPAGE","mainEntity":[]}"#);
        let signals = detect_schema(&doc);
        assert!(signals.faq_present);
        assert_eq!(signals.faq_count, 0);
    }

    #[test]
    fn last_matching_block_sets_the_count() {
        let doc = ld(
            FakeDocument::new(),
            r#"{"@type":"FAQPage","mainEntity":[{},{},{},{}]}"#,
        );
        let doc = ld(doc, r#"{"@type":"FAQPage","mainEntity":[{}]}"#);
        assert_eq!(detect_schema(&doc).faq_count, 1);
    }

    #[test]
    fn graph_members_and_type_arrays_are_recognised() {
        let doc = ld(
            FakeDocument::new(),
            r#"{"@context":"https://schema.org","@graph":[{"@type":["Article","BlogPosting"]},{"@type":"FAQPage","mainEntity":{"@type":"Question"}}]}"#,
        );
        let signals = detect_schema(&doc);
        assert!(signals.article_present);
        assert!(signals.faq_present);
        assert_eq!(signals.faq_count, 1);
    }

    #[test]
    fn other_script_types_are_ignored() {
        let doc = FakeDocument::new().element(
            "script",
            &[("type", "text/javascript")],
            r#"{"@type":"FAQPage"}"#,
        );
        assert_eq!(detect_schema(&doc), SchemaSignals::default());
    }
}
