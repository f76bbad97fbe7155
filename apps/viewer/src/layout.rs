//! Viewport width breakpoints.

use serde::Serialize;

/// Presentation density derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    Compact,
    Regular,
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width < 640.0 {
            Self::Compact
        } else if width < 1024.0 {
            Self::Regular
        } else {
            Self::Wide
        }
    }

    /// Entry grid columns for this width.
    pub fn columns(self) -> u8 {
        match self {
            Self::Compact => 1,
            Self::Regular => 2,
            Self::Wide => 3,
        }
    }
}
