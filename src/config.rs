//! Conversion and HTML output configuration.

use compact_str::CompactString;

// =============================================================================
// ConvertConfig
// =============================================================================

/// Class applied to the inline container for underlined text.
pub const DEFAULT_UNDERLINE_CLASS: &str = "underline";
/// Class applied to the inline container for struck-through text.
pub const DEFAULT_STRIKETHROUGH_CLASS: &str = "line-through";
/// `target` value for links that open in a new tab.
pub const DEFAULT_NEW_TAB_TARGET: &str = "_blank";
/// `target` value for links that open in the same tab.
pub const DEFAULT_SAME_TAB_TARGET: &str = "_self";

/// Configuration for node conversion.
///
/// Only covers values the converter writes into attributes. Which wrapper
/// is applied, and in which order, is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Styling class for underline wrappers
    pub underline_class: CompactString,
    /// Styling class for strikethrough wrappers
    pub strikethrough_class: CompactString,
    /// Link target indicator when `newTab` is set
    pub new_tab_target: CompactString,
    /// Link target indicator when `newTab` is not set
    pub same_tab_target: CompactString,
}

impl ConvertConfig {
    /// Create a config with the default class names and targets.
    pub fn new() -> Self {
        Self {
            underline_class: CompactString::from(DEFAULT_UNDERLINE_CLASS),
            strikethrough_class: CompactString::from(DEFAULT_STRIKETHROUGH_CLASS),
            new_tab_target: CompactString::from(DEFAULT_NEW_TAB_TARGET),
            same_tab_target: CompactString::from(DEFAULT_SAME_TAB_TARGET),
        }
    }

    /// Set custom styling classes for underline and strikethrough.
    pub fn with_classes(
        mut self,
        underline: impl Into<CompactString>,
        strikethrough: impl Into<CompactString>,
    ) -> Self {
        self.underline_class = underline.into();
        self.strikethrough_class = strikethrough.into();
        self
    }

    /// Set custom link target indicators.
    pub fn with_targets(
        mut self,
        new_tab: impl Into<CompactString>,
        same_tab: impl Into<CompactString>,
    ) -> Self {
        self.new_tab_target = new_tab.into();
        self.same_tab_target = same_tab.into();
        self
    }

    /// Target indicator for a custom link.
    pub fn target_for(&self, new_tab: bool) -> &str {
        if new_tab {
            self.new_tab_target.as_str()
        } else {
            self.same_tab_target.as_str()
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// HtmlConfig
// =============================================================================

/// Configuration for HTML serialization of view trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlConfig {
    /// Wrap each text leaf in a `<span>`
    pub wrap_text_leaves: bool,
    /// Write void elements as `<hr />` instead of `<hr>`
    pub void_self_closing: bool,
}

impl HtmlConfig {
    /// Markup matching the view layer's own output (wrapped leaves, `<hr />`).
    pub const DEFAULT: Self = Self {
        wrap_text_leaves: true,
        void_self_closing: true,
    };

    /// Minimal markup: bare text leaves, `<hr>`.
    pub const COMPACT: Self = Self {
        wrap_text_leaves: false,
        void_self_closing: false,
    };
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
