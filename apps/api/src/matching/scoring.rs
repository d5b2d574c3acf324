//! Posting scorer — a flat additive keyword/location rubric.
//!
//! `AppState` holds an `Arc<dyn PostingScorer>`; `KeywordScorer` is the
//! default and only backend.

use serde::{Deserialize, Serialize};

use crate::models::posting::JobPosting;

/// Points added for each keyword found in the search text.
pub const KEYWORD_POINTS: u32 = 3;
/// Points added for each preferred location found in the search text.
pub const LOCATION_POINTS: u32 = 2;

// ────────────────────────────────────────────────────────────────────────────
// Scoring tables
// ────────────────────────────────────────────────────────────────────────────

/// A group of signal phrases worth `points` once, however many of them match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalBonus {
    pub terms: Vec<String>,
    pub points: u32,
}

impl SignalBonus {
    fn new(terms: &[&str], points: u32) -> Self {
        Self {
            terms: to_strings(terms),
            points,
        }
    }
}

/// Static rubric tables. Each keyword and location counts independently;
/// each bonus group counts at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringTables {
    pub keywords: Vec<String>,
    pub location_preferences: Vec<String>,
    pub bonuses: Vec<SignalBonus>,
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self {
            keywords: to_strings(&[
                "aerospace",
                "uav",
                "drone",
                "unmanned",
                "air mobility",
                "robotics",
                "embedded",
                "firmware",
                "autonomy",
                "autonomous",
                "flight test",
                "guidance",
                "navigation",
                "control",
                "px4",
                "ros",
                "ros2",
                "rtos",
                "can bus",
                "bvlos",
                "environmental",
                "climate",
                "reforestation",
                "sustainability",
            ]),
            location_preferences: to_strings(&["montreal", "quebec", "canada", "remote", "hybrid"]),
            bonuses: vec![
                // startup signals
                SignalBonus::new(&["startup", "fast-paced"], 2),
                // R&D signals
                SignalBonus::new(&["r&d", "research", "prototype"], 2),
                // mission / climate; overlaps the keyword table on purpose
                SignalBonus::new(&["climate", "sustainab", "reforest"], 3),
            ],
        }
    }
}

impl ScoringTables {
    /// Lower-cases every entry so profile files may use any casing.
    pub fn normalized(mut self) -> Self {
        lowercase_all(&mut self.keywords);
        lowercase_all(&mut self.location_preferences);
        for bonus in &mut self.bonuses {
            lowercase_all(&mut bonus.terms);
        }
        self
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn lowercase_all(items: &mut [String]) {
    for item in items {
        *item = item.to_lowercase();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one posting. Implementations must be pure: the same posting text
/// always yields the same score.
pub trait PostingScorer: Send + Sync {
    fn score(&self, posting: &JobPosting) -> u32;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordScorer
// ────────────────────────────────────────────────────────────────────────────

/// Substring rubric over `title location description`, case-insensitive.
///
/// Algorithm:
/// 1. +3 for every keyword contained in the text (no deduplication)
/// 2. +2 for every preferred location contained in the text
/// 3. +points once per bonus group with at least one contained term
#[derive(Debug, Clone, Default)]
pub struct KeywordScorer {
    tables: ScoringTables,
}

impl KeywordScorer {
    pub fn new(tables: ScoringTables) -> Self {
        Self {
            tables: tables.normalized(),
        }
    }

    pub fn tables(&self) -> &ScoringTables {
        &self.tables
    }
}

impl PostingScorer for KeywordScorer {
    fn score(&self, posting: &JobPosting) -> u32 {
        score_text(&posting.search_text(), &self.tables)
    }
}

fn score_text(text: &str, tables: &ScoringTables) -> u32 {
    let keyword_score = count_contained(text, &tables.keywords) * KEYWORD_POINTS;
    let location_score = count_contained(text, &tables.location_preferences) * LOCATION_POINTS;

    let bonus_score: u32 = tables
        .bonuses
        .iter()
        .filter(|bonus| bonus.terms.iter().any(|t| text.contains(t.as_str())))
        .map(|bonus| bonus.points)
        .sum();

    keyword_score + location_score + bonus_score
}

fn count_contained(text: &str, needles: &[String]) -> u32 {
    needles.iter().filter(|n| text.contains(n.as_str())).count() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(title: &str, location: &str, description: &str) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            location: location.to_string(),
            url: "https://example.com/job".to_string(),
            description: description.to_string(),
            company_slug: "acme".to_string(),
            board: "greenhouse".to_string(),
            score: None,
        }
    }

    fn default_score(p: &JobPosting) -> u32 {
        KeywordScorer::default().score(p)
    }

    #[test]
    fn test_firmware_in_montreal_scores_five() {
        // "QC" does not contain "quebec"
        let p = posting("Firmware Engineer", "Montreal, QC", "");
        assert_eq!(default_score(&p), 5);
    }

    #[test]
    fn test_unrelated_posting_scores_zero() {
        let p = posting("Sales Associate", "Toronto", "");
        assert_eq!(default_score(&p), 0);
    }

    #[test]
    fn test_climate_counts_as_keyword_and_mission_bonus() {
        let p = posting("", "", "climate and sustainability");
        // climate (+3) + sustainability (+3) + mission bonus (+3)
        assert_eq!(default_score(&p), 9);
    }

    #[test]
    fn test_bonus_group_counts_once() {
        let one = posting("Startup engineer", "", "");
        let both = posting("Fast-paced startup engineer", "", "");
        assert_eq!(default_score(&one), 2);
        assert_eq!(default_score(&both), 2);
    }

    #[test]
    fn test_research_bonus() {
        let p = posting("Research Prototype Engineer", "", "R&D lab");
        assert_eq!(default_score(&p), 2);
    }

    #[test]
    fn test_overlapping_keywords_are_additive() {
        // "ros2" also contains "ros"; "autonomous" does not contain "autonomy"
        let p = posting("ROS2 Autonomous Systems", "", "");
        assert_eq!(default_score(&p), 3 + 3 + 3);
    }

    #[test]
    fn test_keyword_substring_inside_other_words() {
        // "across" contains "ros"
        let p = posting("Coordinator across teams", "", "");
        assert_eq!(default_score(&p), 3);
    }

    #[test]
    fn test_field_position_does_not_matter() {
        let in_title = posting("Drone Remote", "", "");
        let in_location = posting("", "Drone Remote", "");
        let in_description = posting("", "", "Drone Remote");
        let expected = default_score(&in_title);
        assert_eq!(expected, 5);
        assert_eq!(default_score(&in_location), expected);
        assert_eq!(default_score(&in_description), expected);
    }

    #[test]
    fn test_case_insensitive() {
        let lower = posting("embedded rtos", "hybrid", "");
        let upper = posting("EMBEDDED RTOS", "HYBRID", "");
        assert_eq!(default_score(&lower), default_score(&upper));
        assert_eq!(default_score(&upper), 8);
    }

    #[test]
    fn test_score_is_idempotent() {
        let scorer = KeywordScorer::default();
        let p = posting("UAV Navigation Engineer", "Remote, Canada", "startup");
        assert_eq!(scorer.score(&p), scorer.score(&p));
    }

    #[test]
    fn test_empty_posting_scores_zero() {
        assert_eq!(default_score(&posting("", "", "")), 0);
    }

    #[test]
    fn test_custom_tables_are_lowercased() {
        let scorer = KeywordScorer::new(ScoringTables {
            keywords: vec!["Rust".to_string()],
            location_preferences: vec!["Berlin".to_string()],
            bonuses: vec![SignalBonus {
                terms: vec!["Open Source".to_string()],
                points: 4,
            }],
        });
        assert_eq!(scorer.tables().keywords, vec!["rust".to_string()]);

        let p = posting("rust developer", "berlin", "open source");
        assert_eq!(scorer.score(&p), 3 + 2 + 4);
    }

    #[test]
    fn test_default_tables_match_rubric() {
        let tables = ScoringTables::default();
        assert_eq!(tables.keywords.len(), 24);
        assert_eq!(tables.location_preferences.len(), 5);
        let points: Vec<u32> = tables.bonuses.iter().map(|b| b.points).collect();
        assert_eq!(points, vec![2, 2, 3]);
    }
}
