//! Metadata harvesting via ordered fallback chains.
//!
//! Each field is resolved by an ordered list of pure extractor
//! functions (`fn(&Document) -> Option<String>`), applied in sequence
//! with early return on the first non-empty, length-valid candidate:
//! structured data first (JSON-LD), then meta tags, then semantic tags,
//! then class-name heuristics, then free text. A missing field is a
//! degradation, never an error.

use dom_query::{Document, Selection};
use serde_json::Value;

use crate::extractor::dates;
use crate::options::ExtractionOptions;
use crate::patterns::AUTHOR_BY_PREFIX;
use crate::result::ContentType;
use crate::text::{collapse_whitespace, truncate_chars};

/// A single strategy in a field's fallback chain.
type FieldExtractor = fn(&Document) -> Option<String>;

/// Apply a fallback chain, returning the first usable candidate.
fn apply_chain(doc: &Document, chain: &[FieldExtractor]) -> Option<String> {
    chain.iter().find_map(|extractor| {
        extractor(doc)
            .map(|value| collapse_whitespace(&value))
            .filter(|value| !value.is_empty())
    })
}

/// Read the `content` attribute of the first matching meta tag.
fn meta_content(doc: &Document, selector: &str) -> Option<String> {
    let selection = doc.select(selector);
    let node = selection.nodes().first()?;
    let content = Selection::from(*node).attr("content")?.to_string();
    let content = content.trim().to_string();
    (!content.is_empty()).then_some(content)
}

/// Text content of the first node matching a selector.
fn first_text(doc: &Document, selector: &str) -> Option<String> {
    let selection = doc.select(selector);
    let node = selection.nodes().first()?;
    let text = Selection::from(*node).text().trim().to_string();
    (!text.is_empty()).then_some(text)
}

// ============================================================
// JSON-LD
// ============================================================

/// Collect every JSON-LD object embedded in the document, flattening
/// `@graph` containers and top-level arrays.
fn json_ld_objects(doc: &Document) -> Vec<Value> {
    let mut objects = Vec::new();

    for node in doc.select("script[type='application/ld+json']").nodes() {
        let raw = Selection::from(*node).text().to_string();
        let Ok(value) = serde_json::from_str::<Value>(&raw) else {
            continue;
        };
        flatten_json_ld(value, &mut objects);
    }

    objects
}

fn flatten_json_ld(value: Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_json_ld(item, out);
            }
        }
        Value::Object(ref map) => {
            if let Some(graph) = map.get("@graph").cloned() {
                flatten_json_ld(graph, out);
            }
            out.push(value);
        }
        _ => {}
    }
}

fn json_ld_string(doc: &Document, key: &str) -> Option<String> {
    for object in json_ld_objects(doc) {
        if let Some(text) = object.get(key).and_then(Value::as_str) {
            let text = text.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

fn json_ld_headline(doc: &Document) -> Option<String> {
    json_ld_string(doc, "headline").or_else(|| json_ld_string(doc, "name"))
}

fn json_ld_author(doc: &Document) -> Option<String> {
    for object in json_ld_objects(doc) {
        let Some(author) = object.get("author") else {
            continue;
        };
        let name = match author {
            Value::String(name) => Some(name.clone()),
            Value::Object(map) => map.get("name").and_then(Value::as_str).map(str::to_string),
            Value::Array(items) => items.first().and_then(|item| match item {
                Value::String(name) => Some(name.clone()),
                Value::Object(map) => {
                    map.get("name").and_then(Value::as_str).map(str::to_string)
                }
                _ => None,
            }),
            _ => None,
        };
        if let Some(name) = name {
            let name = name.trim().to_string();
            if !name.is_empty() {
                return Some(name);
            }
        }
    }
    None
}

fn json_ld_date(doc: &Document) -> Option<String> {
    json_ld_string(doc, "datePublished").or_else(|| json_ld_string(doc, "dateCreated"))
}

fn json_ld_types(doc: &Document) -> Vec<String> {
    let mut types = Vec::new();
    for object in json_ld_objects(doc) {
        match object.get("@type") {
            Some(Value::String(t)) => types.push(t.clone()),
            Some(Value::Array(items)) => {
                types.extend(items.iter().filter_map(Value::as_str).map(str::to_string));
            }
            _ => {}
        }
    }
    types
}

// ============================================================
// TITLE
// ============================================================

const TITLE_CHAIN: &[FieldExtractor] = &[
    json_ld_headline,
    |doc| meta_content(doc, "meta[property='og:title']"),
    |doc| meta_content(doc, "meta[name='twitter:title']"),
    |doc| first_text(doc, "title"),
    |doc| first_text(doc, "h1"),
    |doc| first_text(doc, "[class*='headline']"),
    |doc| first_text(doc, "[class*='title']"),
];

/// Extract the page title, truncated to the configured length.
#[must_use]
pub fn extract_title(doc: &Document, options: &ExtractionOptions) -> String {
    apply_chain(doc, TITLE_CHAIN)
        .map(|title| truncate_chars(&title, options.max_title_chars))
        .unwrap_or_default()
}

// ============================================================
// DESCRIPTION
// ============================================================

const DESCRIPTION_CHAIN: &[FieldExtractor] = &[
    |doc| meta_content(doc, "meta[name='description']"),
    |doc| meta_content(doc, "meta[property='og:description']"),
    |doc| meta_content(doc, "meta[name='twitter:description']"),
    first_substantial_paragraph,
];

/// Free-text fallback: the first paragraph long enough to describe the page.
fn first_substantial_paragraph(doc: &Document) -> Option<String> {
    for node in doc.select("p").nodes() {
        let text = Selection::from(*node).text().trim().to_string();
        if text.chars().count() > 60 {
            return Some(text);
        }
    }
    None
}

/// Extract the page description, truncated to the configured length.
#[must_use]
pub fn extract_description(doc: &Document, options: &ExtractionOptions) -> String {
    apply_chain(doc, DESCRIPTION_CHAIN)
        .map(|description| truncate_chars(&description, options.max_description_chars))
        .unwrap_or_default()
}

// ============================================================
// AUTHOR
// ============================================================

const AUTHOR_CHAIN: &[FieldExtractor] = &[
    json_ld_author,
    |doc| meta_content(doc, "meta[name='author']"),
    |doc| meta_content(doc, "meta[property='article:author']"),
    |doc| first_text(doc, "[rel='author']"),
    |doc| first_text(doc, "[itemprop='author']"),
    |doc| first_text(doc, ".author"),
    |doc| first_text(doc, ".byline"),
    |doc| first_text(doc, "[class*='author']"),
];

/// Extract the author byline.
///
/// Strips a leading "by " prefix (case-insensitive) and rejects
/// candidates at or above the configured length, which are almost
/// always captured bio paragraphs rather than names.
#[must_use]
pub fn extract_author(doc: &Document, options: &ExtractionOptions) -> String {
    let Some(author) = apply_chain(doc, AUTHOR_CHAIN) else {
        return String::new();
    };

    let author = AUTHOR_BY_PREFIX.replace(&author, "").trim().to_string();
    if author.is_empty() || author.chars().count() >= options.max_author_chars {
        return String::new();
    }
    author
}

// ============================================================
// DATE
// ============================================================

const DATE_CHAIN: &[FieldExtractor] = &[
    |doc| meta_content(doc, "meta[property='article:published_time']"),
    |doc| meta_content(doc, "meta[itemprop='datePublished']"),
    |doc| meta_content(doc, "meta[name='date']"),
    json_ld_date,
    time_datetime_attr,
    |doc| first_text(doc, "time"),
    |doc| first_text(doc, "[class*='date']"),
    |doc| first_text(doc, "[class*='publish']"),
];

fn time_datetime_attr(doc: &Document) -> Option<String> {
    let selection = doc.select("time[datetime]");
    let node = selection.nodes().first()?;
    let datetime = Selection::from(*node).attr("datetime")?.to_string();
    let datetime = datetime.trim().to_string();
    (!datetime.is_empty()).then_some(datetime)
}

/// Extract and parse the publication date.
///
/// Candidates come from the fallback chain; each is run through the
/// date parser until one yields a plausible date. Never errors.
#[must_use]
pub fn extract_publish_date(doc: &Document) -> Option<chrono::DateTime<chrono::Utc>> {
    DATE_CHAIN
        .iter()
        .filter_map(|extractor| extractor(doc))
        .find_map(|candidate| dates::parse_date(&candidate))
}

// ============================================================
// LANGUAGE / KEYWORDS / CANONICAL URL
// ============================================================

/// Extract the document language as a two-letter ISO code, default "en".
#[must_use]
pub fn extract_language(doc: &Document) -> String {
    let html_lang = doc
        .select("html")
        .nodes()
        .first()
        .and_then(|node| Selection::from(*node).attr("lang").map(|l| l.to_string()));

    let locale = html_lang
        .or_else(|| meta_content(doc, "meta[property='og:locale']"))
        .unwrap_or_default();

    let code: String = locale
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .take(2)
        .collect::<String>()
        .to_ascii_lowercase();

    if code.len() == 2 {
        code
    } else {
        "en".to_string()
    }
}

/// Extract keywords from the keywords meta tag and article tags,
/// preserving document order and dropping duplicates.
#[must_use]
pub fn extract_keywords(doc: &Document) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    if let Some(raw) = meta_content(doc, "meta[name='keywords']") {
        for keyword in raw.split(',') {
            push_unique(&mut keywords, keyword);
        }
    }

    for node in doc.select("meta[property='article:tag']").nodes() {
        if let Some(tag) = Selection::from(*node).attr("content") {
            push_unique(&mut keywords, &tag);
        }
    }

    keywords
}

fn push_unique(keywords: &mut Vec<String>, candidate: &str) {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return;
    }
    if !keywords.iter().any(|k| k.eq_ignore_ascii_case(candidate)) {
        keywords.push(candidate.to_string());
    }
}

/// Extract the canonical URL when the page declares one.
#[must_use]
pub fn extract_canonical_url(doc: &Document) -> Option<String> {
    let canonical = doc
        .select("link[rel='canonical']")
        .nodes()
        .first()
        .and_then(|node| Selection::from(*node).attr("href").map(|h| h.to_string()))
        .map(|href| href.trim().to_string())
        .filter(|href| href.starts_with("http://") || href.starts_with("https://"));

    canonical.or_else(|| {
        meta_content(doc, "meta[property='og:url']")
            .filter(|href| href.starts_with("http://") || href.starts_with("https://"))
    })
}

// ============================================================
// CONTENT CLASSIFICATION
// ============================================================

/// Classify the page as article, product, recipe, or generic webpage.
///
/// JSON-LD `@type` wins over `og:type`; a URL-path hint is the last
/// resort before the generic default.
#[must_use]
pub fn classify_content(doc: &Document, source_url: &str) -> ContentType {
    for schema_type in json_ld_types(doc) {
        let schema_type = schema_type.to_ascii_lowercase();
        if schema_type.contains("recipe") {
            return ContentType::Recipe;
        }
        if schema_type.contains("product") {
            return ContentType::Product;
        }
        if schema_type.contains("article") || schema_type.contains("blogposting") {
            return ContentType::Article;
        }
    }

    if let Some(og_type) = meta_content(doc, "meta[property='og:type']") {
        let og_type = og_type.to_ascii_lowercase();
        if og_type.contains("article") {
            return ContentType::Article;
        }
        if og_type.contains("product") {
            return ContentType::Product;
        }
    }

    let path = source_url.to_ascii_lowercase();
    if path.contains("/recipe") {
        return ContentType::Recipe;
    }
    if path.contains("/product") {
        return ContentType::Product;
    }
    if doc.select("article").nodes().first().is_some() {
        return ContentType::Article;
    }

    ContentType::Webpage
}
