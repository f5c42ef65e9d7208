#![forbid(unsafe_code)]

//! Free-text search over the accordion gallery.
//!
//! A query is normalized (trimmed, lowercased) and matched as a substring
//! against each item's search keywords and caption. Search keeps its own
//! "search-hidden" marks, separate from any manual expand/collapse:
//!
//! - Empty query: every search-hidden mark is cleared. Expansion is left
//!   exactly as the user had it.
//! - Non-empty query: an item stays visible iff it matches. A group with at
//!   least one match is visible *and* forced open; a group with none is
//!   search-hidden. Groups without matches keep their expansion flag.

use std::collections::HashSet;

use crate::accordion::Accordion;
use crate::item::{ContentItem, GroupId, ItemId};

/// Normalized search text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalize raw input: trim, then lowercase.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Whether the query clears the search.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match against keywords or caption.
    ///
    /// The empty query matches everything.
    #[must_use]
    pub fn matches(&self, item: &ContentItem) -> bool {
        self.is_empty()
            || item.search_text.to_lowercase().contains(&self.0)
            || item.display_text.to_lowercase().contains(&self.0)
    }
}

/// Search-hidden state after one evaluation.
///
/// Lists every item and group with its mark so the caller can write the
/// full class state, plus the groups the query forced open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    pub items: Vec<(ItemId, bool)>,
    pub groups: Vec<(GroupId, bool)>,
    /// Groups that were collapsed and are now expanded by the match.
    pub opened: Vec<GroupId>,
    pub matched_items: usize,
}

/// Search-hidden marks for the accordion gallery.
#[derive(Debug, Clone, Default)]
pub struct GallerySearch {
    query: SearchQuery,
    hidden_items: HashSet<ItemId>,
    hidden_groups: HashSet<GroupId>,
}

impl GallerySearch {
    /// Create a search with nothing hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied query.
    #[must_use]
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Whether an item is currently search-hidden.
    #[must_use]
    pub fn is_item_hidden(&self, id: &ItemId) -> bool {
        self.hidden_items.contains(id)
    }

    /// Whether a group is currently search-hidden.
    #[must_use]
    pub fn is_group_hidden(&self, id: &GroupId) -> bool {
        self.hidden_groups.contains(id)
    }

    /// Evaluate `query` against every group, forcing matching groups open.
    pub fn apply(&mut self, accordion: &mut Accordion, query: SearchQuery) -> SearchReport {
        let mut report = SearchReport::default();
        self.hidden_items.clear();
        self.hidden_groups.clear();

        if query.is_empty() {
            for group in accordion.groups() {
                report.groups.push((group.id.clone(), false));
                report
                    .items
                    .extend(group.items.iter().map(|item| (item.id.clone(), false)));
                report.matched_items += group.items.len();
            }
            self.query = query;
            return report;
        }

        let mut to_open = Vec::new();
        for group in accordion.groups() {
            let mut any_match = false;
            for item in &group.items {
                let hit = query.matches(item);
                any_match |= hit;
                if hit {
                    report.matched_items += 1;
                } else {
                    self.hidden_items.insert(item.id.clone());
                }
                report.items.push((item.id.clone(), !hit));
            }
            if any_match {
                to_open.push(group.id.clone());
            } else {
                self.hidden_groups.insert(group.id.clone());
            }
            report.groups.push((group.id.clone(), !any_match));
        }

        for id in to_open {
            if accordion.expand(&id) {
                report.opened.push(id);
            }
        }
        dashview_core::debug!(
            query = query.as_str(),
            matched = report.matched_items,
            opened = report.opened.len(),
            "gallery search applied"
        );
        self.query = query;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accordion::AccordionGroup;

    fn gallery() -> Accordion {
        Accordion::new(vec![
            AccordionGroup::new(
                "inspections",
                vec![
                    ContentItem::new("i1")
                        .with_search_text("market inspection")
                        .with_display_text("Fish market visit"),
                    ContentItem::new("i2")
                        .with_search_text("clinic audit")
                        .with_display_text("Vet clinic"),
                ],
            ),
            AccordionGroup::new(
                "awareness",
                vec![ContentItem::new("a1")
                    .with_search_text("school campaign")
                    .with_display_text("School talk")],
            ),
            AccordionGroup::new(
                "shelters",
                vec![ContentItem::new("s1")
                    .with_search_text("stray shelter")
                    .with_display_text("Shelter tour")],
            ),
        ])
    }

    #[test]
    fn query_is_trimmed_and_lowercased() {
        assert_eq!(SearchQuery::parse("  ClInIc ").as_str(), "clinic");
        assert!(SearchQuery::parse("   ").is_empty());
    }

    #[test]
    fn matching_group_is_shown_and_forced_open() {
        let mut acc = gallery();
        let mut search = GallerySearch::new();
        let report = search.apply(&mut acc, SearchQuery::parse("SCHOOL"));

        assert_eq!(report.opened, vec![GroupId::new("awareness")]);
        assert!(acc.is_expanded(&"awareness".into()));
        assert!(search.is_group_hidden(&"inspections".into()));
        assert!(search.is_group_hidden(&"shelters".into()));
        assert!(!search.is_group_hidden(&"awareness".into()));
        assert!(search.is_item_hidden(&"i1".into()));
        assert!(!search.is_item_hidden(&"a1".into()));
        assert_eq!(report.matched_items, 1);
    }

    #[test]
    fn caption_text_also_matches() {
        let mut acc = gallery();
        let mut search = GallerySearch::new();
        search.apply(&mut acc, SearchQuery::parse("vet"));
        assert!(!search.is_item_hidden(&"i2".into()));
        assert!(search.is_item_hidden(&"i1".into()));
        assert!(!search.is_group_hidden(&"inspections".into()));
    }

    #[test]
    fn empty_query_clears_marks_and_keeps_expansion() {
        let mut acc = gallery();
        let mut search = GallerySearch::new();
        search.apply(&mut acc, SearchQuery::parse("shelter"));
        assert!(acc.is_expanded(&"shelters".into()));
        // User collapses the first group manually.
        acc.toggle(&"inspections".into());

        let report = search.apply(&mut acc, SearchQuery::parse(""));
        assert!(report.items.iter().all(|(_, hidden)| !hidden));
        assert!(report.groups.iter().all(|(_, hidden)| !hidden));
        assert!(report.opened.is_empty());
        assert!(!acc.is_expanded(&"inspections".into()));
        assert!(acc.is_expanded(&"shelters".into()));
    }

    #[test]
    fn no_match_hides_everything_without_collapsing() {
        let mut acc = gallery();
        let mut search = GallerySearch::new();
        let report = search.apply(&mut acc, SearchQuery::parse("zzz"));
        assert!(report.groups.iter().all(|(_, hidden)| *hidden));
        assert_eq!(report.matched_items, 0);
        assert!(acc.is_expanded(&"inspections".into()));
    }
}
