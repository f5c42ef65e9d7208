#![forbid(unsafe_code)]

//! Expand/collapse state for grouped gallery content.
//!
//! Groups toggle independently; any number may be open at once. The first
//! group in document order starts expanded.

use crate::item::{ContentItem, GroupId};

/// One collapsible group of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionGroup {
    pub id: GroupId,
    pub items: Vec<ContentItem>,
    expanded: bool,
}

impl AccordionGroup {
    /// Create a collapsed group.
    pub fn new(id: impl Into<GroupId>, items: Vec<ContentItem>) -> Self {
        Self {
            id: id.into(),
            items,
            expanded: false,
        }
    }

    /// Whether the group is expanded.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// Expansion state of every group, in document order.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    groups: Vec<AccordionGroup>,
}

impl Accordion {
    /// Build the accordion, expanding the first group.
    #[must_use]
    pub fn new(mut groups: Vec<AccordionGroup>) -> Self {
        for group in &mut groups {
            group.expanded = false;
        }
        if let Some(first) = groups.first_mut() {
            first.expanded = true;
        }
        Self { groups }
    }

    /// Groups in document order.
    #[must_use]
    pub fn groups(&self) -> &[AccordionGroup] {
        &self.groups
    }

    /// Look up a group.
    #[must_use]
    pub fn group(&self, id: &GroupId) -> Option<&AccordionGroup> {
        self.groups.iter().find(|g| &g.id == id)
    }

    /// Whether `id` is expanded; unknown groups are collapsed.
    #[must_use]
    pub fn is_expanded(&self, id: &GroupId) -> bool {
        self.group(id).is_some_and(AccordionGroup::is_expanded)
    }

    /// Ids of the expanded groups in document order.
    pub fn expanded_ids(&self) -> impl Iterator<Item = &GroupId> {
        self.groups.iter().filter(|g| g.expanded).map(|g| &g.id)
    }

    /// Header click: flip one group. Returns the new state, or `None` for
    /// an unknown group.
    pub fn toggle(&mut self, id: &GroupId) -> Option<bool> {
        let group = self.groups.iter_mut().find(|g| &g.id == id)?;
        group.expanded = !group.expanded;
        Some(group.expanded)
    }

    /// Force a group open. Returns `true` if it was collapsed.
    pub fn expand(&mut self, id: &GroupId) -> bool {
        match self.groups.iter_mut().find(|g| &g.id == id) {
            Some(group) if !group.expanded => {
                group.expanded = true;
                true
            }
            _ => false,
        }
    }
}
