use searchcloud::domain::SearchDocument;
use uuid::Uuid;

use super::sections::split_into_sections;
use super::slug::slugify;

/// A page whose compressed content has already been inflated.
#[derive(Clone, Debug)]
pub struct DecodedPage {
    pub pathname: String,
    pub title: String,
    pub content: String,
}

/// Build one search document per section of a page.
///
/// Ids are fresh UUIDs; uniqueness is the only contract. Page-level
/// metadata is copied onto every section document and the path anchors
/// directly to the section via its slug. Two same-titled sections on one
/// page share a path - their ids still differ, matching the duplicate
/// anchors the site itself produces for such pages.
pub fn build_documents(page: &DecodedPage) -> Vec<SearchDocument> {
    let site_section = page
        .pathname
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string();

    split_into_sections(&page.content)
        .into_iter()
        .map(|section| SearchDocument {
            id: Uuid::new_v4().to_string(),
            path: format!("{}#{}", page.pathname, slugify(&section.title)),
            site_section: site_section.clone(),
            page_title: page.title.clone(),
            page_section_title: section.title,
            page_section_content: section.body_lines.join("\n"),
        })
        .collect()
}
