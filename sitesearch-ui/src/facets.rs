use searchcloud::domain::SearchResponse;

/// Name of the synthetic first facet covering the whole corpus.
pub const ALL_FACET: &str = "all";

/// Ordered facet-name → count mapping rendered as filter pills.
///
/// The first entry is always the synthetic "all" facet carrying the total
/// unfiltered count; the remaining entries preserve the order the search
/// service returned them in. Facet selection is positional (index 0 means
/// "no filter"), so this order is a contract, not cosmetics. If the
/// service ever returned a real section literally named "all", position 0
/// would still mean unfiltered - selection is by index, never by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacetMap {
    entries: Vec<(String, u64)>,
}

impl FacetMap {
    /// Build the facet map for one search response.
    pub fn from_response(response: &SearchResponse) -> Self {
        let mut entries = vec![(ALL_FACET.to_string(), response.count)];

        if let Some(values) = response
            .facets
            .as_ref()
            .and_then(|facets| facets.site_section.as_ref())
        {
            entries.extend(
                values
                    .values
                    .iter()
                    .map(|(name, count)| (name.clone(), *count)),
            );
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Facet name at the given position, if in range.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(name, _)| name.as_str())
    }

    /// (name, count) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }
}
