#![forbid(unsafe_code)]

//! `dashview-web` is the host-facing runtime for the dashboard page.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment (JS) forwards DOM events
//!   as [`HostEvent`]s and calls the global entry points on
//!   [`DashboardPage`].
//! - **Deterministic time**: the host advances the clock and signals animation
//!   frames explicitly; nothing here reads a wall clock.
//! - **Patch output**: all DOM writes come back as [`DomPatch`]es and
//!   [`HostCommand`]s in [`PageOutputs`], for the glue to apply in order.
//!
//! This crate does not bind to `wasm-bindgen`; it is the state layer that a
//! thin JS shim wraps.

pub mod config;
pub mod event;
pub mod layout;
pub mod node;
pub mod page;

pub use config::PageConfig;
pub use event::{EventResponse, HostEvent};
pub use layout::{CounterSpec, Elements, PageLayout, ProgressSpec};
pub use node::Node;
pub use page::DashboardPage;

use dashview_widgets::description::ScrollBlock;

const PATCH_HASH_ALGO: &str = "fnv1a64";
const FNV64_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV64_PRIME: u64 = 0x100000001b3;

/// Page runtime error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// A required element is absent from the layout.
    MissingElement(&'static str),
    /// Configuration could not be parsed.
    Config(String),
    /// `init` was called twice.
    AlreadyInitialized,
}

impl core::fmt::Display for PageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingElement(name) => write!(f, "missing required element: {name}"),
            Self::Config(msg) => write!(f, "invalid page config: {msg}"),
            Self::AlreadyInitialized => f.write_str("page already initialized"),
        }
    }
}

impl std::error::Error for PageError {}

/// One DOM write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomPatch {
    AddClass { node: Node, class: &'static str },
    RemoveClass { node: Node, class: &'static str },
    SetStyle { node: Node, property: &'static str, value: String },
    SetAttribute { node: Node, name: &'static str, value: String },
    SetText { node: Node, text: String },
    /// Assign `src`; an empty string clears it.
    SetSource { node: Node, src: String },
}

impl DomPatch {
    /// Add or remove `class` depending on `on`.
    #[must_use]
    pub fn class(node: Node, class: &'static str, on: bool) -> Self {
        if on {
            Self::AddClass { node, class }
        } else {
            Self::RemoveClass { node, class }
        }
    }

    #[must_use]
    pub fn style(node: Node, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle {
            node,
            property,
            value: value.into(),
        }
    }

    /// The element this patch writes to.
    #[must_use]
    pub fn node(&self) -> &Node {
        match self {
            Self::AddClass { node, .. }
            | Self::RemoveClass { node, .. }
            | Self::SetStyle { node, .. }
            | Self::SetAttribute { node, .. }
            | Self::SetText { node, .. }
            | Self::SetSource { node, .. } => node,
        }
    }

    fn hash_into(&self, hash: u64) -> u64 {
        let selector = self.node().to_string();
        let (tag, a, b): (u8, &str, &str) = match self {
            Self::AddClass { class, .. } => (0, class, ""),
            Self::RemoveClass { class, .. } => (1, class, ""),
            Self::SetStyle {
                property, value, ..
            } => (2, property, value),
            Self::SetAttribute { name, value, .. } => (3, name, value),
            Self::SetText { text, .. } => (4, text, ""),
            Self::SetSource { src, .. } => (5, src, ""),
        };
        let mut hash = fnv1a64_extend(hash, &[tag]);
        for field in [selector.as_str(), a, b] {
            hash = fnv1a64_extend(hash, &(field.len() as u64).to_le_bytes());
            hash = fnv1a64_extend(hash, field.as_bytes());
        }
        hash
    }
}

/// A side effect outside the patch stream.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    /// `window.scrollTo({ top, behavior })`.
    ScrollTo { top: f64, smooth: bool },
    /// `element.scrollIntoView({ behavior: 'smooth', block })`.
    ScrollIntoView { node: Node, block: ScrollBlock },
    OpenInNewTab { href: String },
    /// Synthesize an anchor with `download` and click it.
    Download { href: String, file_name: String },
    /// Construct a chart on `canvas_id` from a library config object.
    CreateChart {
        canvas_id: String,
        config: serde_json::Value,
        value_suffix: Option<String>,
    },
}

/// Captured outputs for host consumption.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PageOutputs {
    /// DOM writes in application order.
    pub patches: Vec<DomPatch>,
    /// Navigation, scrolling and chart construction requests.
    pub commands: Vec<HostCommand>,
    /// Console lines the page would print.
    pub logs: Vec<String>,
}

impl PageOutputs {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty() && self.commands.is_empty() && self.logs.is_empty()
    }

    /// Deterministic hash of the patch batch, in application order.
    #[must_use]
    pub fn patch_hash(&self) -> String {
        let mut hash = FNV64_OFFSET_BASIS;
        hash = fnv1a64_extend(hash, &(self.patches.len() as u64).to_le_bytes());
        for patch in &self.patches {
            hash = patch.hash_into(hash);
        }
        format!("{PATCH_HASH_ALGO}:{hash:016x}")
    }
}

#[must_use]
fn fnv1a64_extend(mut hash: u64, bytes: &[u8]) -> u64 {
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV64_PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_hash_is_order_sensitive() {
        let a = DomPatch::class(Node::Navbar, "active", true);
        let b = DomPatch::style(Node::Hero, "transform", "translate3d(0, 10px, 0)");
        let first = PageOutputs {
            patches: vec![a.clone(), b.clone()],
            ..PageOutputs::default()
        };
        let second = PageOutputs {
            patches: vec![b, a],
            ..PageOutputs::default()
        };
        assert!(first.patch_hash().starts_with("fnv1a64:"));
        assert_ne!(first.patch_hash(), second.patch_hash());
        assert_eq!(first.patch_hash(), first.clone().patch_hash());
    }

    #[test]
    fn empty_outputs_hash_is_stable() {
        assert_eq!(
            PageOutputs::default().patch_hash(),
            PageOutputs::default().patch_hash()
        );
        assert!(PageOutputs::default().is_empty());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            PageError::MissingElement("navbar").to_string(),
            "missing required element: navbar"
        );
    }
}
