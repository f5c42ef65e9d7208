#![forbid(unsafe_code)]

//! Input the host forwards from the document.

use crate::node::Node;

/// A DOM event, already resolved to the element it concerns.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// `window` load finished.
    Loaded,
    /// Window scroll with the new vertical offset.
    Scroll { offset: f64 },
    /// Click whose target resolved to `node`. Scrim clicks report the
    /// overlay root itself; clicks on descendants are not forwarded.
    Click(Node),
    /// Keydown with its `key` value.
    Key(String),
    /// The search box's current value.
    SearchInput(String),
    /// An observed element's visible fraction changed.
    Intersection { node: Node, fraction: f64 },
    /// `beforeprint`.
    BeforePrint,
}

impl HostEvent {
    pub fn click(node: Node) -> Self {
        Self::Click(node)
    }

    pub fn escape() -> Self {
        Self::Key("Escape".to_owned())
    }
}

/// What the host must do synchronously with the event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Call `preventDefault()` on the DOM event.
    pub prevent_default: bool,
}
