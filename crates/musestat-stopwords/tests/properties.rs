use musestat_settings::StopwordSettings;
use musestat_stopwords::{NoCorpus, canonicalize, lookup_language, resolve, supported_languages};
use proptest::prelude::*;

proptest! {
    #[test]
    fn canonicalize_always_yields_supported_code(code in "\\PC{0,12}") {
        let canon = canonicalize(&code);
        prop_assert!(supported_languages().any(|c| c == canon));
    }

    #[test]
    fn canonicalize_is_idempotent(code in "[a-zA-Z_-]{0,10}") {
        let once = canonicalize(&code);
        prop_assert_eq!(canonicalize(once), once);
    }

    #[test]
    fn resolution_is_deterministic(code in "[a-z]{2}(-[a-z]{2})?") {
        let settings = StopwordSettings::default();
        prop_assert_eq!(resolve(&code, &settings, &NoCorpus), resolve(&code, &settings, &NoCorpus));
    }

    #[test]
    fn known_codes_keep_their_canonical_language(code in "[a-z]{2}") {
        if let Some(canon) = lookup_language(&code) {
            let set = resolve(&code, &StopwordSettings::default(), &NoCorpus);
            prop_assert_eq!(set.language, canon);
        }
    }

    #[test]
    fn excluded_words_are_never_present(words in prop::collection::vec("[a-z]{1,6}", 0..8)) {
        let settings = StopwordSettings {
            extra: words.clone(),
            exclude: words.clone(),
            ..Default::default()
        };
        let set = resolve("en", &settings, &NoCorpus);
        for w in &words {
            prop_assert!(!set.contains(w));
        }
    }
}
