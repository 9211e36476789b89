/// Turn a section title into a URL-safe fragment identifier.
///
/// Lowercases, keeps letters, digits, `-` and `_`, turns whitespace into
/// hyphens and drops everything else - the same slugs the site generates
/// for heading anchors, so document paths land on real anchors.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for c in title.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            slug.push(c);
        } else if c.is_whitespace() {
            slug.push('-');
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Getting Started"), "getting-started");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(slugify("What's new?"), "whats-new");
        assert_eq!(slugify("fs.readFile(path)"), "fsreadfilepath");
    }

    #[test]
    fn keeps_existing_hyphens_and_underscores() {
        assert_eq!(slugify("pre-built binaries"), "pre-built-binaries");
        assert_eq!(slugify("NODE_ENV explained"), "node_env-explained");
    }

    #[test]
    fn is_deterministic_for_unicode_titles() {
        assert_eq!(slugify("Héllo Wörld"), slugify("Héllo Wörld"));
        assert_eq!(slugify("Héllo Wörld"), "héllo-wörld");
    }
}
