use crate::page::Document;
use crate::types::signals::TrustSignals;
use once_cell::sync::Lazy;
use regex::Regex;

static AUTHOR_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)author").expect("author pattern is valid"));
static PUBLISHED_PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)published").expect("published pattern is valid"));
static BIO_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)author|bio").expect("bio pattern is valid"));
static SOURCES_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)reference|source|citation").expect("sources pattern is valid")
});

const CONTAINERS: [&str; 2] = ["div", "section"];

/// Experience, expertise, authority and trust markers.
pub fn detect_trust(doc: &dyn Document) -> TrustSignals {
    let hrefs: Vec<String> = doc
        .find_all(&["a"])
        .iter()
        .filter_map(|anchor| anchor.attr("href"))
        .map(str::to_lowercase)
        .collect();

    TrustSignals {
        has_author_meta: !doc.find_by_attr("meta", "name", &AUTHOR_NAME).is_empty(),
        has_date: !doc
            .find_by_attr("meta", "property", &PUBLISHED_PROPERTY)
            .is_empty(),
        has_author_bio: doc.find_by_class(&CONTAINERS, &BIO_CLASS).is_some(),
        has_about_link: hrefs.iter().any(|href| href.contains("about")),
        has_contact_link: hrefs.iter().any(|href| href.contains("contact")),
        has_sources: doc.find_by_class(&CONTAINERS, &SOURCES_CLASS).is_some(),
    }
}
