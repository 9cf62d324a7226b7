//! # musestat-milestones
//!
//! **Tier 1 (Enrichment)**
//!
//! Word-count achievements and reading-time estimates layered on top of the
//! raw counts. Both are pure lookups over static tables.
//!
//! ## What belongs here
//! * The milestone table and badge selection
//! * Reading speeds, words-per-page densities and their rendering
//!
//! ## What does NOT belong here
//! * Counting words (see `musestat-text`)
//! * Persisting previous counts (see `musestat-core` snapshots)

#![forbid(unsafe_code)]

use musestat_types::{HoursMinutes, MilestoneBadge, ReadingTime};

/// A single achievement threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub threshold: usize,
    pub title: &'static str,
    pub icon: &'static str,
    pub message: &'static str,
}

/// Achievement milestones in ascending threshold order.
pub static MILESTONES: &[Milestone] = &[
    Milestone {
        threshold: 1_000,
        title: "First Thousand",
        icon: "🌱",
        message: "Every journey begins with a single word.",
    },
    Milestone {
        threshold: 5_000,
        title: "Sprint Champion",
        icon: "🏃",
        message: "You're building momentum!",
    },
    Milestone {
        threshold: 10_000,
        title: "Committed Writer",
        icon: "📝",
        message: "You've crossed into serious territory.",
    },
    Milestone {
        threshold: 25_000,
        title: "Novella Territory",
        icon: "📗",
        message: "You could publish this as a novella!",
    },
    Milestone {
        threshold: 50_000,
        title: "Novelist",
        icon: "📘",
        message: "Congratulations! You've written a novel!",
    },
    Milestone {
        threshold: 75_000,
        title: "Expanded Novel",
        icon: "✨",
        message: "Your story is growing beautifully.",
    },
    Milestone {
        threshold: 120_000,
        title: "Epic Writer",
        icon: "📙",
        message: "You've entered epic novel territory!",
    },
    Milestone {
        threshold: 135_000,
        title: "Master Storyteller",
        icon: "📚",
        message: "An epic masterpiece is forming.",
    },
    Milestone {
        threshold: 150_000,
        title: "Trilogy Material",
        icon: "🏆",
        message: "You could split this into multiple books!",
    },
];

/// Words per minute for fast, average and slow readers.
pub const READING_SPEED_FAST: u64 = 300;
pub const READING_SPEED_AVERAGE: u64 = 250;
pub const READING_SPEED_SLOW: u64 = 200;

/// Words per printed page for dense, average and loose layouts.
pub const WORDS_PER_PAGE_DENSE: u64 = 350;
pub const WORDS_PER_PAGE_AVERAGE: u64 = 300;
pub const WORDS_PER_PAGE_LOOSE: u64 = 250;

impl Milestone {
    fn badge(&self, unlocked: bool, newly_unlocked: bool) -> MilestoneBadge {
        MilestoneBadge {
            threshold: self.threshold,
            title: self.title.to_string(),
            icon: self.icon.to_string(),
            message: self.message.to_string(),
            unlocked,
            newly_unlocked,
        }
    }
}

/// Pick the badge to show for `word_count`.
///
/// A milestone crossed since `prev_word_count` wins and is flagged as newly
/// unlocked; otherwise the highest reached milestone is returned. Below the
/// first threshold the first milestone comes back locked with a progress
/// message.
#[must_use]
pub fn achievement_badge(word_count: usize, prev_word_count: usize) -> MilestoneBadge {
    let crossed = MILESTONES
        .iter()
        .rev()
        .find(|m| prev_word_count < m.threshold && m.threshold <= word_count);
    if let Some(milestone) = crossed {
        return milestone.badge(true, true);
    }

    if let Some(reached) = MILESTONES.iter().rev().find(|m| m.threshold <= word_count) {
        return reached.badge(true, false);
    }

    let first = &MILESTONES[0];
    let remaining = first.threshold - word_count;
    MilestoneBadge {
        message: format!(
            "Keep writing! {} words to '{}'",
            group_thousands(remaining as u64),
            first.title
        ),
        ..first.badge(false, false)
    }
}

/// The next milestone strictly above `word_count`, if any remains.
#[must_use]
pub fn next_milestone(word_count: usize) -> Option<&'static Milestone> {
    MILESTONES.iter().find(|m| m.threshold > word_count)
}

/// Estimate reading time and printed page count for `words`.
#[must_use]
pub fn estimate_reading_time(words: usize) -> ReadingTime {
    let words = words as u64;
    let fast = at_speed(words, READING_SPEED_FAST);
    let average = at_speed(words, READING_SPEED_AVERAGE);
    let slow = at_speed(words, READING_SPEED_SLOW);

    let pages_min = words / WORDS_PER_PAGE_DENSE;
    let pages_max = words / WORDS_PER_PAGE_LOOSE;
    let pages_avg = words / WORDS_PER_PAGE_AVERAGE;

    ReadingTime {
        range_str: format!("{fast} - {slow}"),
        pages_str: format!("{pages_min}-{pages_max} pages (~{pages_avg} avg)"),
        fast,
        average,
        slow,
        pages_min,
        pages_max,
        pages_avg,
    }
}

fn at_speed(words: u64, words_per_minute: u64) -> HoursMinutes {
    let total_minutes = words / words_per_minute;
    HoursMinutes {
        hours: total_minutes / 60,
        minutes: total_minutes % 60,
    }
}

/// Render `n` with `,` between groups of three digits.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_strictly_ascending() {
        for pair in MILESTONES.windows(2) {
            assert!(pair[0].threshold < pair[1].threshold);
        }
    }

    #[test]
    fn zero_words_points_at_first_thousand() {
        let badge = achievement_badge(0, 0);
        assert!(!badge.unlocked);
        assert_eq!(badge.threshold, 1_000);
        assert_eq!(badge.message, "Keep writing! 1,000 words to 'First Thousand'");
    }

    #[test]
    fn exact_threshold_unlocks() {
        let badge = achievement_badge(1_000, 1_000);
        assert!(badge.unlocked);
        assert!(!badge.newly_unlocked);
        assert_eq!(badge.title, "First Thousand");
    }

    #[test]
    fn crossing_from_previous_count_is_newly_unlocked() {
        let badge = achievement_badge(12_000, 4_000);
        assert!(badge.newly_unlocked);
        assert_eq!(badge.title, "Committed Writer");
    }

    #[test]
    fn beyond_last_threshold_keeps_last_badge() {
        let badge = achievement_badge(400_000, 400_000);
        assert_eq!(badge.title, "Trilogy Material");
        assert!(badge.unlocked);
        assert!(next_milestone(400_000).is_none());
    }

    #[test]
    fn group_thousands_inserts_commas() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn novel_length_reading_time() {
        let rt = estimate_reading_time(50_000);
        assert_eq!(rt.fast, HoursMinutes { hours: 2, minutes: 46 });
        assert_eq!(rt.average, HoursMinutes { hours: 3, minutes: 20 });
        assert_eq!(rt.slow, HoursMinutes { hours: 4, minutes: 10 });
        assert_eq!(rt.range_str, "2h 46m - 4h 10m");
        assert_eq!((rt.pages_min, rt.pages_avg, rt.pages_max), (142, 166, 200));
        assert_eq!(rt.pages_str, "142-200 pages (~166 avg)");
    }
}
