/// A heading-delimited slice of a page.
///
/// Exists only between splitting and document building; the body is kept
/// as lines so the builder can join them without re-scanning.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub title: String,
    pub body_lines: Vec<String>,
}

/// Split raw page text into its heading-delimited sections.
///
/// A heading is one to six `#` markers followed by whitespace. Lines
/// before the first heading belong to no section and are dropped. Two
/// adjacent headings produce a section with an empty body, which is valid.
pub fn split_into_sections(raw: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for line in raw.lines() {
        if let Some(title) = heading_title(line) {
            sections.push(Section {
                title: title.to_string(),
                body_lines: Vec::new(),
            });
        } else if let Some(section) = sections.last_mut() {
            section.body_lines.push(line.to_string());
        }
    }

    sections
}

/// Returns the title when `line` is an ATX-style heading.
fn heading_title(line: &str) -> Option<&str> {
    let marker_len = line.bytes().take_while(|b| *b == b'#').count();
    if !(1..=6).contains(&marker_len) {
        return None;
    }

    let rest = &line[marker_len..];
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }

    Some(rest.trim_start())
}
