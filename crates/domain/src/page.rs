//! Page snapshot and the fixed content of the landing page.

use serde::{Deserialize, Serialize};

use crate::host::HostName;
use crate::time::Timestamp;

/// Page heading.
pub const HEADING: &str = "Welcome to Next.js + Platformatic!";

/// Logo shown above the heading.
pub const LOGO: Image = Image {
    src: "/next.svg",
    alt: "Next.js logo",
    width: 180,
    height: 38,
};

/// Outbound documentation links rendered in the footer, in display order.
pub const DOC_LINKS: [DocLink; 2] = [
    DocLink {
        href: "https://docs.platformatic.dev/docs/next/guides",
        label: "Guides",
        icon: Image {
            src: "/file.svg",
            alt: "File icon",
            width: 16,
            height: 16,
        },
    },
    DocLink {
        href: "https://docs.platformatic.dev/",
        label: "Go to Platformatic Docs \u{2192}",
        icon: Image {
            src: "/globe.svg",
            alt: "Globe icon",
            width: 16,
            height: 16,
        },
    },
];

/// A static image referenced by a fixed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

/// A link to external documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: Image,
}

/// Everything that differs between two renders of the page.
///
/// Two renders of the same snapshot produce byte-identical documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub host: HostName,
    pub rendered_at: Timestamp,
}

impl PageSnapshot {
    #[must_use]
    pub fn new(host: HostName, rendered_at: Timestamp) -> Self {
        Self { host, rendered_at }
    }
}
