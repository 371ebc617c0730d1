/// Languages the site ships content for. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    #[default]
    Fa,
}

/// Base text direction of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Lang {
    /// The language adopted when no valid preference is stored.
    pub const DEFAULT: Self = Self::Fa;

    /// Two-letter code used for persistence and the `<html lang>` attribute.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fa => "fa",
        }
    }

    /// Parse a stored preference. Only exact known codes are accepted; anything
    /// else is reported as `None` so callers fall back to [`Lang::DEFAULT`].
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "fa" => Some(Self::Fa),
            _ => None,
        }
    }

    /// The other language. Toggling twice returns to the starting point.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Fa,
            Self::Fa => Self::En,
        }
    }

    /// Direction is derived, never stored independently.
    #[must_use]
    pub const fn dir(self) -> Direction {
        match self {
            Self::En => Direction::Ltr,
            Self::Fa => Direction::Rtl,
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        self.dir().is_rtl()
    }

    /// Native display name, used where the language itself is named in the UI.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fa => "فارسی",
        }
    }
}

impl Direction {
    /// Value for the `<html dir>` attribute.
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}
