//! Locale registry: single source of truth for the locales the site is
//! rendered in.
//!
//! The registry is built once at startup and shared read-only through the
//! application state. The order of the locales is significant: sitemap
//! entries and language switchers follow it.

use crate::error::SiteError;
use crate::i18n::Locale;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "en", "sk")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Slovak")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Slovensky")
    pub native_name: &'static str,
}

/// Ordered set of supported locales with one designated default.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    default_index: usize,
}

impl LocaleRegistry {
    /// Build a registry from an ordered list of locales.
    ///
    /// # Errors
    /// * `UnknownDefaultLocale` if `default_code` is not one of `locales`
    /// * `InvalidLocale` if the same code is listed twice
    pub fn new(locales: Vec<LocaleConfig>, default_code: &str) -> Result<Self, SiteError> {
        for (i, locale) in locales.iter().enumerate() {
            if locales[..i].iter().any(|other| other.code == locale.code) {
                return Err(SiteError::InvalidLocale(locale.code.to_string()));
            }
        }

        let default_index = locales
            .iter()
            .position(|locale| locale.code == default_code)
            .ok_or_else(|| SiteError::UnknownDefaultLocale(default_code.to_string()))?;

        Ok(Self {
            locales,
            default_index,
        })
    }

    /// Registry of the site's locales with the given default.
    pub fn with_default(default_code: &str) -> Result<Self, SiteError> {
        Self::new(default_locales(), default_code)
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Validate a code and turn it into a [`Locale`].
    ///
    /// # Errors
    /// `InvalidLocale` if the code is not supported.
    pub fn resolve(&self, code: &str) -> Result<Locale, SiteError> {
        self.get_by_code(code)
            .map(|config| Locale::new(config.code))
            .ok_or_else(|| SiteError::InvalidLocale(code.to_string()))
    }

    /// The locale used when a request carries none.
    pub fn default_locale(&self) -> Locale {
        Locale::new(self.locales[self.default_index].code)
    }

    /// All supported locales, in registration order.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.locales.iter().map(|config| Locale::new(config.code))
    }

    /// Locales paired with their configuration, in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (Locale, &LocaleConfig)> + '_ {
        self.locales
            .iter()
            .map(|config| (Locale::new(config.code), config))
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Locales the site ships translations for.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
        },
        LocaleConfig {
            code: "sk",
            name: "Slovak",
            native_name: "Slovensky",
        },
    ]
}
