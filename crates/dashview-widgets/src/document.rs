#![forbid(unsafe_code)]

//! Document routing: which viewer shows a file, and how it is addressed.
//!
//! Images render in an `<img>`, PDFs in the browser's own viewer, and
//! office formats through a remote embed service that needs an absolute,
//! percent-encoded URL of the file.

use std::fmt;
use std::str::FromStr;

/// Remote viewer used for office formats.
pub const DEFAULT_OFFICE_VIEWER: &str = "https://view.officeapps.live.com/op/embed.aspx";

/// Office formats the remote viewer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfficeFormat {
    Pptx,
    Docx,
}

/// Type of a file opened in the document modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Image,
    Pdf,
    Office(OfficeFormat),
}

/// The sub-viewer that displays a [`DocumentKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewer {
    Image,
    Pdf,
    Office,
}

impl Viewer {
    pub const ALL: [Self; 3] = [Self::Image, Self::Pdf, Self::Office];
}

impl DocumentKind {
    #[must_use]
    pub const fn viewer(self) -> Viewer {
        match self {
            Self::Image => Viewer::Image,
            Self::Pdf => Viewer::Pdf,
            Self::Office(_) => Viewer::Office,
        }
    }
}

/// Errors from document routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The modal was asked to show a type it has no viewer for.
    UnknownType(String),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType(kind) => write!(f, "no viewer for document type {kind:?}"),
        }
    }
}

impl std::error::Error for DocumentError {}

impl FromStr for DocumentKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "pdf" => Ok(Self::Pdf),
            "pptx" => Ok(Self::Office(OfficeFormat::Pptx)),
            "docx" => Ok(Self::Office(OfficeFormat::Docx)),
            other => Err(DocumentError::UnknownType(other.to_owned())),
        }
    }
}

/// Where the page itself is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// Scheme, host, and port, e.g. `https://example.org`.
    pub origin: String,
    /// Path of the page, e.g. `/dashboard/index.html`.
    pub pathname: String,
}

impl PageLocation {
    pub fn new(origin: impl Into<String>, pathname: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            pathname: pathname.into(),
        }
    }

    /// Absolute URL of the page's directory, always ending in `/` when the
    /// path has one.
    #[must_use]
    pub fn directory_url(&self) -> String {
        let dir = match self.pathname.rfind('/') {
            Some(slash) => &self.pathname[..=slash],
            None => self.pathname.as_str(),
        };
        format!("{}{}", self.origin, dir)
    }

    /// Absolute URL of a file given relative to the page.
    #[must_use]
    pub fn resolve(&self, relative: &str) -> String {
        format!("{}{relative}", self.directory_url())
    }
}

impl Default for PageLocation {
    fn default() -> Self {
        Self::new("http://localhost", "/index.html")
    }
}

/// Embed-service URL that renders `src` (relative to the page).
#[must_use]
pub fn office_viewer_url(viewer_base: &str, location: &PageLocation, src: &str) -> String {
    format!(
        "{viewer_base}?src={}",
        urlencoding::encode(&location.resolve(src))
    )
}

/// What the "open document" entry point does with a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentAction {
    /// Let the browser render it in a new tab.
    OpenInNewTab { href: String },
    /// Force a download under the same name.
    Download { href: String, file_name: String },
}

/// Route a file for the download/new-tab entry point.
///
/// PDFs open in a new tab, slide decks download; anything else is ignored.
#[must_use]
pub fn route_document(filename: &str) -> Option<DocumentAction> {
    if filename.ends_with(".pdf") {
        Some(DocumentAction::OpenInNewTab {
            href: filename.to_owned(),
        })
    } else if filename.ends_with(".pptx") {
        Some(DocumentAction::Download {
            href: filename.to_owned(),
            file_name: filename.to_owned(),
        })
    } else {
        None
    }
}
