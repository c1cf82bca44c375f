//! Locale type: a language code that has been validated against the
//! registry.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::i18n::SiteStrings;

/// A validated locale.
///
/// Only [`LocaleRegistry`](crate::i18n::LocaleRegistry) hands these out, so
/// holding one means the code is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "en", "sk")
    code: &'static str,
}

impl Locale {
    pub(crate) fn new(code: &'static str) -> Self {
        Self { code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Translated UI strings for this locale.
    pub fn strings(&self) -> &'static SiteStrings {
        SiteStrings::for_code(self.code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
