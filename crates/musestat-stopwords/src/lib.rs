//! # musestat-stopwords
//!
//! **Tier 1 (Language Data)**
//!
//! Resolves a language code to a stopword set used to filter word
//! frequency rankings.
//!
//! ## What belongs here
//! * Static per-language inventories and alias tables
//! * Language-code canonicalization
//! * The optional third-party corpus seam ([`StopwordCorpus`])
//!
//! ## What does NOT belong here
//! * Language detection
//! * Tokenization

#![forbid(unsafe_code)]

mod inventory;

use std::collections::BTreeSet;

use musestat_settings::StopwordSettings;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use inventory::INVENTORIES;

/// Code used when nothing else resolves.
pub const FALLBACK_LANGUAGE: &str = "en";

static ALIASES: &[(&str, &str)] = &[
    ("en-us", "en"),
    ("en-gb", "en"),
    ("eng", "en"),
    ("english", "en"),
    ("pt-br", "pt"),
    ("pt-pt", "pt"),
    ("português", "pt"),
    ("zh-cn", "zh"),
    ("zh-hans", "zh"),
    ("zh-tw", "zh"),
    ("zh-hant", "zh"),
    ("chinese", "zh"),
    ("nb", "no"),
    ("nn", "no"),
    ("ms-my", "ms"),
    ("id-id", "id"),
    ("kor", "ko"),
    ("ko-kr", "ko"),
    ("jpn", "ja"),
    ("ja-jp", "ja"),
    ("de-de", "de"),
    ("fr-fr", "fr"),
    ("es-es", "es"),
    ("it-it", "it"),
    ("nl-nl", "nl"),
    ("ru-ru", "ru"),
    ("pl-pl", "pl"),
    ("cs-cz", "cs"),
    ("tr-tr", "tr"),
    ("el-gr", "el"),
    ("ar-ar", "ar"),
    ("fa-ir", "fa"),
    ("he-il", "he"),
    ("hi-in", "hi"),
    ("ur-pk", "ur"),
    ("bn-bd", "bn"),
    ("vi-vn", "vi"),
    ("th-th", "th"),
    ("ro-ro", "ro"),
    ("hu-hu", "hu"),
    ("sk-sk", "sk"),
    ("sl-si", "sl"),
    ("fi-fi", "fi"),
    ("sv-se", "sv"),
    ("da-dk", "da"),
    ("no-no", "no"),
];

const AGGRESSIVE_GERMANIC: &[&str] = &["eben", "halt", "wohl", "sehr", "immer", "oft", "wirklich"];

/// Extra adverbs and particles added in aggressive mode.
static AGGRESSIVE: &[(&str, &[&str])] = &[
    ("en", &["also", "still", "ever", "never", "often", "usually", "really"]),
    ("de", AGGRESSIVE_GERMANIC),
    ("nl", AGGRESSIVE_GERMANIC),
    ("fr", &["toute", "tous", "toutes", "souvent", "toujours", "vraiment"]),
    ("es", &["siempre", "nunca", "realmente", "todavía"]),
    ("it", &["sempre", "mai", "davvero", "ancora"]),
    ("pt", &["sempre", "nunca", "realmente", "ainda"]),
    ("ru", &["всегда", "никогда", "вообще", "реально"]),
    ("tr", &["genellikle", "aslında", "gerçekten"]),
    ("ko", &["정말", "진짜", "항상", "보통", "자주"]),
    ("ja", &["いつも", "たいてい", "ほんとうに", "まったく"]),
    ("zh", &["总是", "从不", "真的", "非常", "常常"]),
];

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Best-effort lookup into an external stopword corpus for languages
/// without a built-in inventory.
pub trait StopwordCorpus {
    /// Stopwords for `code`, or `None` when the corpus has no list or fails.
    fn lookup(&self, code: &str) -> Option<Vec<String>>;
}

/// A corpus with no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCorpus;

impl StopwordCorpus for NoCorpus {
    fn lookup(&self, _code: &str) -> Option<Vec<String>> {
        None
    }
}

/// A resolved stopword set and the language it was resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    pub language: String,
    pub words: BTreeSet<String>,
}

impl StopwordSet {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// NFKC-normalize and lowercase a word the way the inventories are stored.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.trim().nfkc().collect::<String>().to_lowercase()
}

fn normalize_code(lang: &str) -> String {
    lang.trim()
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .replace('_', "-")
}

fn inventory(code: &str) -> Option<(&'static str, &'static [&'static str])> {
    INVENTORIES.iter().find(|(c, _)| *c == code).copied()
}

fn alias(code: &str) -> Option<&'static str> {
    ALIASES.iter().find(|(a, _)| *a == code).map(|(_, c)| *c)
}

fn aggressive_words(code: &str) -> &'static [&'static str] {
    AGGRESSIVE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

fn direct_or_alias(code: &str) -> Option<&'static str> {
    inventory(code).map(|(c, _)| c).or_else(|| alias(code))
}

/// Canonical code with a built-in inventory, or `None` when unknown.
///
/// Tries the full code, its alias, then the primary subtag (`pt-AO` -> `pt`).
/// An empty code means English.
#[must_use]
pub fn lookup_language(lang: &str) -> Option<&'static str> {
    let code = normalize_code(lang);
    if code.is_empty() {
        return Some(FALLBACK_LANGUAGE);
    }
    direct_or_alias(&code).or_else(|| {
        let primary = code.split('-').next().unwrap_or_default();
        direct_or_alias(primary)
    })
}

/// Canonical language code for `lang`, falling back to `"en"`.
#[must_use]
pub fn canonicalize(lang: &str) -> &'static str {
    lookup_language(lang).unwrap_or(FALLBACK_LANGUAGE)
}

/// Codes with a built-in inventory, in table order.
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    INVENTORIES.iter().map(|(code, _)| *code)
}

fn base_words(code: &str) -> BTreeSet<String> {
    inventory(code)
        .map(|(_, words)| words.iter().map(|w| (*w).to_string()).collect())
        .unwrap_or_default()
}

/// Build the stopword set for `lang`.
///
/// Unknown codes consult `corpus` by primary subtag; if it has nothing the
/// English inventory is used when `fallback_to_english` is set, otherwise
/// the base set is empty. Aggressive words, digits, extras and exclusions
/// are then applied in that order.
#[must_use]
pub fn resolve(lang: &str, settings: &StopwordSettings, corpus: &dyn StopwordCorpus) -> StopwordSet {
    let (language, mut words) = match lookup_language(lang) {
        Some(code) => (code.to_string(), base_words(code)),
        None => {
            let code = normalize_code(lang);
            let primary = code.split('-').next().unwrap_or_default().to_string();
            match corpus.lookup(&primary) {
                Some(list) => {
                    debug!(language = %primary, words = list.len(), "stopwords from corpus");
                    let words: BTreeSet<String> = list.iter().map(|w| normalize_word(w)).collect();
                    (primary, words)
                }
                None if settings.fallback_to_english => {
                    debug!(requested = %code, "unknown language, using English stopwords");
                    (FALLBACK_LANGUAGE.to_string(), base_words(FALLBACK_LANGUAGE))
                }
                None => {
                    debug!(requested = %code, "unknown language, no stopwords");
                    (code, BTreeSet::new())
                }
            }
        }
    };

    if settings.aggressive {
        words.extend(aggressive_words(&language).iter().map(|w| (*w).to_string()));
    }
    if settings.include_digits {
        words.extend(DIGITS.iter().map(|d| (*d).to_string()));
    }
    words.extend(
        settings
            .extra
            .iter()
            .map(|w| normalize_word(w))
            .filter(|w| !w.is_empty()),
    );
    for word in &settings.exclude {
        words.remove(&normalize_word(word));
    }

    StopwordSet { language, words }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> StopwordSettings {
        StopwordSettings {
            include_digits: false,
            ..Default::default()
        }
    }

    #[test]
    fn canonicalize_direct_and_aliases() {
        assert_eq!(canonicalize("en"), "en");
        assert_eq!(canonicalize("EN_gb"), "en");
        assert_eq!(canonicalize("English"), "en");
        assert_eq!(canonicalize("pt-BR"), "pt");
        assert_eq!(canonicalize("zh_Hant"), "zh");
        assert_eq!(canonicalize("nb"), "no");
        assert_eq!(canonicalize(" ko-KR "), "ko");
    }

    #[test]
    fn canonicalize_uses_primary_subtag() {
        assert_eq!(canonicalize("fr-CA"), "fr");
        assert_eq!(canonicalize("nb-NO"), "no");
    }

    #[test]
    fn canonicalize_unknown_falls_back_to_english() {
        assert_eq!(canonicalize("xx"), "en");
        assert_eq!(canonicalize("unknown"), "en");
        assert_eq!(canonicalize(""), "en");
        assert_eq!(lookup_language("klingon"), None);
    }

    #[test]
    fn canonicalize_applies_nfkc() {
        // Fullwidth latin letters fold to ASCII.
        assert_eq!(canonicalize("ｄｅ"), "de");
    }

    #[test]
    fn inventories_are_normalized() {
        for (code, words) in INVENTORIES {
            for word in *words {
                assert_eq!(normalize_word(word), *word, "{code}: {word}");
            }
        }
    }

    #[test]
    fn every_alias_points_to_an_inventory() {
        for (alias, code) in ALIASES {
            assert!(inventory(code).is_some(), "{alias} -> {code}");
        }
        for (code, _) in AGGRESSIVE {
            assert!(inventory(code).is_some(), "{code}");
        }
    }

    #[test]
    fn digits_are_optional() {
        let with = resolve("en", &StopwordSettings::default(), &NoCorpus);
        let without = resolve("en", &plain(), &NoCorpus);
        assert!(with.contains("7"));
        assert!(!without.contains("7"));
        assert_eq!(with.len(), without.len() + 10);
    }

    #[test]
    fn aggressive_adds_language_words() {
        let settings = StopwordSettings {
            aggressive: true,
            ..plain()
        };
        assert!(resolve("en", &settings, &NoCorpus).contains("really"));
        assert!(resolve("nl", &settings, &NoCorpus).contains("wirklich"));
        assert!(!resolve("en", &plain(), &NoCorpus).contains("really"));
    }

    #[test]
    fn extra_and_exclude_are_normalized() {
        let settings = StopwordSettings {
            extra: vec!["Said".into(), "ＡＳＫＥＤ".into(), "  ".into()],
            exclude: vec!["THE".into()],
            ..plain()
        };
        let set = resolve("en", &settings, &NoCorpus);
        assert!(set.contains("said"));
        assert!(set.contains("asked"));
        assert!(!set.contains("the"));
        assert!(!set.contains(""));
    }

    #[test]
    fn unknown_language_without_fallback_is_empty() {
        let settings = StopwordSettings {
            fallback_to_english: false,
            ..plain()
        };
        let set = resolve("tlh", &settings, &NoCorpus);
        assert!(set.is_empty());
        assert_eq!(set.language, "tlh");
    }

    #[test]
    fn unknown_language_with_fallback_is_english() {
        let set = resolve("tlh", &plain(), &NoCorpus);
        assert_eq!(set.language, "en");
        assert!(set.contains("the"));
    }

    struct FixedCorpus;

    impl StopwordCorpus for FixedCorpus {
        fn lookup(&self, code: &str) -> Option<Vec<String>> {
            (code == "tlh").then(|| vec!["Qapla".to_string()])
        }
    }

    #[test]
    fn corpus_fills_in_unknown_languages() {
        let set = resolve("tlh-Latn", &plain(), &FixedCorpus);
        assert_eq!(set.language, "tlh");
        assert!(set.contains("qapla"));
        assert!(!set.contains("the"));
    }

    #[test]
    fn corpus_is_not_consulted_for_builtin_languages() {
        let set = resolve("de", &plain(), &FixedCorpus);
        assert!(set.contains("und"));
        assert!(!set.contains("qapla"));
    }
}
