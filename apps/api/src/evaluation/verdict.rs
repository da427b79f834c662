//! Result assessment — turns the model's raw answer into a match verdict.
//!
//! The raw response is always preserved for display; everything here only
//! derives the secondary match / no-match signal. Primary path: deserialize
//! the schema-constrained JSON object. Secondary path: a clearly-labeled
//! heuristic scrape of the percentage from free text. Neither path can fail
//! the request — an unreadable response yields `Undetermined`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Minimum match percentage for a positive verdict.
pub const MATCH_THRESHOLD: u32 = 80;

static PERCENTAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""Job Description Match"\s*:\s*"(\d+)\s*%"#).expect("valid percentage pattern")
});

/// The four-field evaluation object the model is asked to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsEvaluation {
    #[serde(rename = "Job Description Match")]
    pub job_description_match: String,
    #[serde(rename = "Missing Keywords", deserialize_with = "string_or_list")]
    pub missing_keywords: String,
    #[serde(rename = "Candidate Summary")]
    pub candidate_summary: String,
    #[serde(rename = "Experience")]
    pub experience: String,
}

/// Models sometimes return the keyword list as a JSON array despite the
/// requested shape; accept either a string or a list of strings.
fn string_or_list<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) => s,
        StringOrList::Many(items) => items.join(", "),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictOutcome {
    /// Percentage at or above the threshold — move forward.
    Match,
    /// Percentage below the threshold.
    NotAMatch,
    /// No percentage could be read from the response.
    Undetermined,
}

/// Where the match percentage was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageSource {
    /// Deserialized from the schema-constrained JSON response.
    Structured,
    /// Scraped from the raw text with the percentage pattern.
    Heuristic,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchVerdict {
    pub outcome: VerdictOutcome,
    /// Taken at face value from the model; values above 100 are not clamped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PercentageSource>,
}

/// Assesses a raw model response.
///
/// Never fails: a response that parses as neither structured JSON nor
/// scrapeable text yields `Undetermined` with no structured evaluation.
pub fn assess_response(raw: &str) -> (Option<AtsEvaluation>, MatchVerdict) {
    let evaluation = serde_json::from_str::<AtsEvaluation>(strip_json_fences(raw)).ok();

    let (percentage, source) = match evaluation
        .as_ref()
        .and_then(|e| parse_percentage(&e.job_description_match))
    {
        Some(p) => (Some(p), Some(PercentageSource::Structured)),
        None => match scrape_percentage(raw) {
            Some(p) => (Some(p), Some(PercentageSource::Heuristic)),
            None => (None, None),
        },
    };

    let outcome = match percentage {
        Some(p) if p >= MATCH_THRESHOLD => VerdictOutcome::Match,
        Some(_) => VerdictOutcome::NotAMatch,
        None => VerdictOutcome::Undetermined,
    };

    (
        evaluation,
        MatchVerdict {
            outcome,
            match_percentage: percentage,
            source,
        },
    )
}

/// Parses the percentage out of a structured match string such as `"87%"`.
fn parse_percentage(value: &str) -> Option<u32> {
    value.trim().trim_end_matches('%').trim().parse::<u32>().ok()
}

/// Best-effort scrape of `"Job Description Match": "NN%"` from free text.
fn scrape_percentage(raw: &str) -> Option<u32> {
    PERCENTAGE_PATTERN
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
