/// All translated user-facing strings for a locale
///
/// Strings are stored raw; the renderer escapes them when building markup.
#[derive(Debug, Clone)]
pub struct SiteStrings {
    // ==================== Layout ====================
    /// Site title used in `<title>` and headers
    pub site_title: &'static str,

    /// Label for the language switcher
    pub language_switch: &'static str,

    /// Footer line naming the organizer
    pub footer_organizer: &'static str,

    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_speaking: &'static str,
    pub nav_sponsoring: &'static str,
    pub nav_tickets: &'static str,
    pub nav_coc: &'static str,
    pub nav_spy: &'static str,
    pub nav_meetup: &'static str,

    // ==================== Page Headings ====================
    pub heading_index: &'static str,
    pub heading_speakers: &'static str,
    pub heading_speaking: &'static str,
    pub heading_sponsoring: &'static str,
    pub heading_tickets: &'static str,
    pub heading_code_of_conduct: &'static str,
    pub heading_spy: &'static str,
    pub heading_thank_you: &'static str,
    pub heading_meetup: &'static str,

    /// Heading for a single Bratislava meetup page
    /// Placeholders: {number}
    pub heading_ba_meetup: &'static str,
}

impl SiteStrings {
    /// Strings for a locale code, falling back to English for codes without
    /// a catalog.
    pub fn for_code(code: &str) -> &'static SiteStrings {
        match code {
            "sk" => &SLOVAK_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: SiteStrings = SiteStrings {
    // Layout
    site_title: "PyCon SK",
    language_switch: "Language",
    footer_organizer: "Organized by SPy o.z.",

    // Navigation
    nav_home: "Home",
    nav_speaking: "Speaking",
    nav_sponsoring: "Sponsoring",
    nav_tickets: "Tickets",
    nav_coc: "Code of Conduct",
    nav_spy: "SPy o.z.",
    nav_meetup: "Meetups",

    // Headings
    heading_index: "PyCon SK 2016, 11 - 13 March, Bratislava",
    heading_speakers: "Speakers",
    heading_speaking: "Call for Proposals",
    heading_sponsoring: "Become a Sponsor",
    heading_tickets: "Tickets",
    heading_code_of_conduct: "Code of Conduct",
    heading_spy: "Slovak Python Association",
    heading_thank_you: "Thank you!",
    heading_meetup: "Python Meetups",
    heading_ba_meetup: "Bratislava Python Meetup #{number}",
};

// ==================== Slovak Strings ====================

pub const SLOVAK_STRINGS: SiteStrings = SiteStrings {
    // Layout
    site_title: "PyCon SK",
    language_switch: "Jazyk",
    footer_organizer: "Organizuje SPy o.z.",

    // Navigation
    nav_home: "Domov",
    nav_speaking: "Prednášky",
    nav_sponsoring: "Sponzoring",
    nav_tickets: "Lístky",
    nav_coc: "Pravidlá správania",
    nav_spy: "SPy o.z.",
    nav_meetup: "Stretnutia",

    // Headings
    heading_index: "PyCon SK 2016, 11. - 13. marec, Bratislava",
    heading_speakers: "Rečníci",
    heading_speaking: "Výzva na prednášky",
    heading_sponsoring: "Staňte sa sponzorom",
    heading_tickets: "Lístky",
    heading_code_of_conduct: "Pravidlá správania",
    heading_spy: "Slovenská Python asociácia",
    heading_thank_you: "Ďakujeme!",
    heading_meetup: "Python stretnutia",
    heading_ba_meetup: "Bratislavský Python Meetup #{number}",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_code_slovak() {
        assert_eq!(SiteStrings::for_code("sk").nav_home, "Domov");
    }

    #[test]
    fn test_for_code_unknown_falls_back_to_english() {
        assert_eq!(SiteStrings::for_code("fr").nav_home, "Home");
    }

    #[test]
    fn test_site_title_same_in_both_locales() {
        assert_eq!(ENGLISH_STRINGS.site_title, SLOVAK_STRINGS.site_title);
    }

    #[test]
    fn test_ba_meetup_heading_has_placeholder() {
        assert!(ENGLISH_STRINGS.heading_ba_meetup.contains("{number}"));
        assert!(SLOVAK_STRINGS.heading_ba_meetup.contains("{number}"));
    }

    #[test]
    fn test_no_empty_strings() {
        for strings in [&ENGLISH_STRINGS, &SLOVAK_STRINGS] {
            assert!(!strings.nav_home.is_empty());
            assert!(!strings.nav_meetup.is_empty());
            assert!(!strings.heading_index.is_empty());
            assert!(!strings.heading_thank_you.is_empty());
            assert!(!strings.language_switch.is_empty());
        }
    }
}
