//! Breakpoint classification from viewport width.
//!
//! A [`Breakpoint`] is derived, never stored authoritatively: consumers
//! re-classify the live viewport width whenever the viewport observer fires.
//! Desktop is the fallback whenever no width is available (headless
//! rendering, server-side passes).

use std::fmt;

// ---------------------------------------------------------------------------
// Breakpoint
// ---------------------------------------------------------------------------

/// The three responsive breakpoints, ordered by viewport width range.
///
/// - `Desktop` — width ≥ 1200
/// - `Tablet` — 768 ..= 1199
/// - `Mobile` — width ≤ 767
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Breakpoint {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

/// Widths at or below this are mobile.
pub const MOBILE_MAX_WIDTH: u32 = 767;

/// Widths at or below this (and above [`MOBILE_MAX_WIDTH`]) are tablet.
pub const TABLET_MAX_WIDTH: u32 = 1199;

impl Breakpoint {
    /// Classify a viewport width. `None` (no viewport available) is desktop.
    pub fn classify(width: Option<u32>) -> Self {
        match width {
            Some(w) if w <= MOBILE_MAX_WIDTH => Self::Mobile,
            Some(w) if w <= TABLET_MAX_WIDTH => Self::Tablet,
            _ => Self::Desktop,
        }
    }

    /// The settings-override key for this breakpoint.
    ///
    /// Desktop has no override slot — its values are the top level of the
    /// settings object — so it returns `None`.
    pub fn override_key(&self) -> Option<&'static str> {
        match self {
            Self::Desktop => None,
            Self::Tablet => Some("tablet"),
            Self::Mobile => Some("mobile"),
        }
    }

    /// Whether this is the desktop breakpoint.
    pub fn is_desktop(&self) -> bool {
        matches!(self, Self::Desktop)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
            Self::Mobile => "mobile",
        };
        f.write_str(name)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
