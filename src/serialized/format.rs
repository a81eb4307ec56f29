//! Text format bitmask.
//!
//! Bit values match the editor's serialized `format` field. Bits are
//! independent; the order in which wrappers are applied is decided by the
//! converter, not by this type.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Independent formatting flags carried by a text node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextFormat(u32);

impl TextFormat {
    pub const EMPTY: Self = Self(0);
    pub const BOLD: Self = Self(1);
    pub const ITALIC: Self = Self(1 << 1);
    pub const STRIKETHROUGH: Self = Self(1 << 2);
    pub const UNDERLINE: Self = Self(1 << 3);
    pub const CODE: Self = Self(1 << 4);
    pub const SUBSCRIPT: Self = Self(1 << 5);
    pub const SUPERSCRIPT: Self = Self(1 << 6);

    /// Named flags, used for `Debug` output.
    const NAMED: [(Self, &'static str); 7] = [
        (Self::BOLD, "BOLD"),
        (Self::ITALIC, "ITALIC"),
        (Self::STRIKETHROUGH, "STRIKETHROUGH"),
        (Self::UNDERLINE, "UNDERLINE"),
        (Self::CODE, "CODE"),
        (Self::SUBSCRIPT, "SUBSCRIPT"),
        (Self::SUPERSCRIPT, "SUPERSCRIPT"),
    ];

    /// Wrap raw bits. Unknown bits are kept and ignored by the converter.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bit value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Decode the serialized `format` field.
    ///
    /// Anything other than a non-negative integer that fits in 32 bits is
    /// treated as "no formatting".
    pub fn from_json(value: Option<&serde_json::Value>) -> Self {
        value
            .and_then(serde_json::Value::as_u64)
            .and_then(|bits| u32::try_from(bits).ok())
            .map(Self::from_bits)
            .unwrap_or_default()
    }
}

impl BitOr for TextFormat {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TextFormat {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "TextFormat({})", names.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flags_are_independent() {
        let format = TextFormat::BOLD | TextFormat::CODE;
        assert!(format.contains(TextFormat::BOLD));
        assert!(format.contains(TextFormat::CODE));
        assert!(!format.contains(TextFormat::ITALIC));
        assert_eq!(format.bits(), 17);
    }

    #[test]
    fn test_from_json_defensive() {
        assert_eq!(TextFormat::from_json(Some(&json!(3))), TextFormat::BOLD | TextFormat::ITALIC);
        assert_eq!(TextFormat::from_json(Some(&json!("bold"))), TextFormat::EMPTY);
        assert_eq!(TextFormat::from_json(Some(&json!(-1))), TextFormat::EMPTY);
        assert_eq!(TextFormat::from_json(None), TextFormat::EMPTY);
    }

    #[test]
    fn test_debug_lists_flags() {
        let format = TextFormat::ITALIC | TextFormat::UNDERLINE;
        assert_eq!(format!("{format:?}"), "TextFormat(ITALIC | UNDERLINE)");
    }
}
