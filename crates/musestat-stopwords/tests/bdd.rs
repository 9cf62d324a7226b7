//! BDD-style scenarios for stopword resolution.

use musestat_settings::StopwordSettings;
use musestat_stopwords::{NoCorpus, canonicalize, resolve, supported_languages};

mod canonical_codes {
    use super::*;

    #[test]
    fn scenario_regional_variants_share_an_inventory() {
        // Given regional spellings of Portuguese
        // When canonicalized
        // Then they share the same code
        for code in ["pt", "pt-BR", "pt_PT", "pt-AO", "Português"] {
            assert_eq!(canonicalize(code), "pt", "{code}");
        }
    }

    #[test]
    fn scenario_detector_unknown_means_english() {
        assert_eq!(canonicalize("unknown"), "en");
    }

    #[test]
    fn scenario_all_builtin_languages_resolve_to_themselves() {
        for code in supported_languages() {
            assert_eq!(canonicalize(code), code);
        }
    }
}

mod resolution {
    use super::*;

    #[test]
    fn scenario_default_english_set_has_articles_and_digits() {
        // Given default stopword settings
        let settings = StopwordSettings::default();
        // When English is resolved
        let set = resolve("en-US", &settings, &NoCorpus);
        // Then articles and digits are stopwords
        assert_eq!(set.language, "en");
        assert!(set.contains("the"));
        assert!(set.contains("a"));
        assert!(set.contains("0"));
        // And content words are not
        assert!(!set.contains("dragon"));
    }

    #[test]
    fn scenario_korean_aggressive_mode() {
        // Given aggressive mode
        let settings = StopwordSettings {
            aggressive: true,
            ..Default::default()
        };
        // When Korean is resolved
        let set = resolve("ko-KR", &settings, &NoCorpus);
        // Then the Korean base and aggressive words are present
        assert!(set.contains("그리고"));
        assert!(set.contains("정말"));
    }

    #[test]
    fn scenario_exclusion_wins_over_extra() {
        let settings = StopwordSettings {
            extra: vec!["whale".into()],
            exclude: vec!["Whale".into()],
            ..Default::default()
        };
        let set = resolve("en", &settings, &NoCorpus);
        assert!(!set.contains("whale"));
    }
}
