#![forbid(unsafe_code)]

//! Content items shared by the grid filter and the accordion search.

use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier taken from markup.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifier of a gallery item.
    ItemId
);

string_id!(
    /// Identifier of an accordion group.
    GroupId
);

/// One piece of gallery content.
///
/// Immutable after page load. Whether it is visible is derived by the
/// filter and search components; the item itself stores no visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: ItemId,
    /// Category tag used by the tab filter.
    pub category: String,
    /// Extra keywords used by free-text search.
    pub search_text: String,
    /// Visible caption text, also searched.
    pub display_text: String,
}

impl ContentItem {
    /// Create an item with empty category and text.
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            category: String::new(),
            search_text: String::new(),
            display_text: String::new(),
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    #[must_use]
    pub fn with_display_text(mut self, text: impl Into<String>) -> Self {
        self.display_text = text.into();
        self
    }
}
