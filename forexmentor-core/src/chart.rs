//! Chart crosshair display settings.
//!
//! A read-only configuration artifact: one canonical default and the list
//! of line styles that presentation code offers for selection.

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Line rendering style, stored as its chart-library ordinal.
///
/// The legal domain is `0..=4`. Ordinal `1` is reserved and never offered
/// in [`LINE_STYLE_OPTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LineStyle(u8);

impl LineStyle {
    /// Continuous line.
    pub const SOLID: Self = Self(0);
    /// Short dashes.
    pub const DASHED: Self = Self(2);
    /// Dots.
    pub const DOTTED: Self = Self(3);
    /// Long dashes.
    pub const LARGE_DASHED: Self = Self(4);

    /// Highest legal ordinal.
    pub const MAX: u8 = 4;

    /// Creates a `LineStyle` from an ordinal in `0..=4`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidLineStyle`] if `value` exceeds [`Self::MAX`].
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::InvalidLineStyle { value });
        }
        Ok(Self(value))
    }

    /// Returns the ordinal.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the display label, or `None` for the reserved ordinal.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        LINE_STYLE_OPTIONS.iter().find(|opt| opt.value == self).map(|opt| opt.label)
    }

    /// Returns `true` if this style appears in [`LINE_STYLE_OPTIONS`].
    #[must_use]
    pub fn is_selectable(self) -> bool {
        self.label().is_some()
    }
}

impl TryFrom<u8> for LineStyle {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LineStyle> for u8 {
    fn from(style: LineStyle) -> Self {
        style.0
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "reserved({})", self.0),
        }
    }
}

/// A selectable line style paired with its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineStyleOption {
    pub value: LineStyle,
    pub label: &'static str,
}

/// Line styles offered for selection, in display order.
pub const LINE_STYLE_OPTIONS: [LineStyleOption; 4] = [
    LineStyleOption { value: LineStyle::SOLID, label: "Solid" },
    LineStyleOption { value: LineStyle::DASHED, label: "Dashed" },
    LineStyleOption { value: LineStyle::DOTTED, label: "Dotted" },
    LineStyleOption { value: LineStyle::LARGE_DASHED, label: "Large Dashed" },
];

/// How the crosshair tracks the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum CrosshairMode {
    /// Follows the cursor freely.
    Normal,
    /// Snaps to the nearest data point.
    Magnet,
}

/// Crosshair rendering options for both chart axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CrosshairSettings {
    pub mode: CrosshairMode,
    pub vertical_line_visible: bool,
    pub vertical_line_style: LineStyle,
    /// Colour override; `None` keeps the chart theme colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_line_color: Option<Cow<'static, str>>,
    pub horizontal_line_visible: bool,
    pub horizontal_line_style: LineStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_line_color: Option<Cow<'static, str>>,
}

/// The canonical crosshair configuration.
pub const DEFAULT_CROSSHAIR_SETTINGS: CrosshairSettings = CrosshairSettings {
    mode: CrosshairMode::Magnet,
    vertical_line_visible: true,
    vertical_line_style: LineStyle::DASHED,
    vertical_line_color: None,
    horizontal_line_visible: true,
    horizontal_line_style: LineStyle::DASHED,
    horizontal_line_color: None,
};

impl CrosshairSettings {
    /// Checks that both line styles are selectable options.
    ///
    /// # Errors
    /// Returns [`CoreError::StyleNotSelectable`] naming the first offending axis.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (axis, style) in [
            ("vertical", self.vertical_line_style),
            ("horizontal", self.horizontal_line_style),
        ] {
            if !style.is_selectable() {
                return Err(CoreError::StyleNotSelectable { axis, value: style.value() });
            }
        }
        Ok(())
    }
}

impl Default for CrosshairSettings {
    fn default() -> Self {
        DEFAULT_CROSSHAIR_SETTINGS
    }
}
