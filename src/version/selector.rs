//! Candidate selection using PEP 440 version ordering and specifiers

use std::str::FromStr;

use pep508_rs::pep440_rs::{Version, VersionSpecifiers};
use tracing::warn;

use crate::version::error::SelectionError;

/// A candidate interpreter version
///
/// Keeps the raw spelling so the chosen candidate is printed exactly as the
/// user wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    version: Version,
    raw: String,
}

impl Candidate {
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Parse a comma-separated candidate list into ascending PEP 440 order
///
/// Entries are trimmed and empty segments are skipped, so trailing commas
/// are harmless. Any entry that is not a valid PEP 440 version is an error.
pub fn parse_candidates(raw: &str) -> Result<Vec<Candidate>, SelectionError> {
    let mut candidates = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let version =
            Version::from_str(entry).map_err(|e| SelectionError::InvalidVersion {
                input: entry.to_string(),
                reason: e.to_string(),
            })?;
        candidates.push(Candidate {
            version,
            raw: entry.to_string(),
        });
    }
    candidates.sort_by(|a, b| a.version.cmp(&b.version));
    Ok(candidates)
}

/// Pick the smallest candidate allowed by the requires-python constraint
///
/// Candidates must be in ascending order, as returned by [`parse_candidates`].
/// An absent or empty constraint selects the smallest candidate. A constraint
/// no candidate satisfies also falls back to the smallest candidate rather
/// than failing the resolution.
pub fn pick_version(
    candidates: &[Candidate],
    requires_python: Option<&str>,
) -> Result<String, SelectionError> {
    let Some(smallest) = candidates.first() else {
        return Err(SelectionError::NoCandidates);
    };

    let Some(spec) = requires_python.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(smallest.raw.clone());
    };

    let specifiers =
        VersionSpecifiers::from_str(spec).map_err(|e| SelectionError::InvalidSpecifiers {
            input: spec.to_string(),
            reason: e.to_string(),
        })?;

    match candidates.iter().find(|c| specifiers.contains(&c.version)) {
        Some(candidate) => Ok(candidate.raw.clone()),
        None => {
            warn!(
                "No candidate satisfies requires_python '{}', falling back to {}",
                spec, smallest.raw
            );
            Ok(smallest.raw.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn candidates(raw: &str) -> Vec<Candidate> {
        parse_candidates(raw).unwrap()
    }

    #[rstest]
    #[case("3.8,3.9,3.10", vec!["3.8", "3.9", "3.10"])]
    #[case("3.10,3.8,3.9", vec!["3.8", "3.9", "3.10"])]
    #[case("3.10,3.9", vec!["3.9", "3.10"])] // numeric, not lexicographic
    #[case("3.8, 3.9 ,3.10", vec!["3.8", "3.9", "3.10"])] // whitespace trimmed
    #[case("3.8,,3.9,", vec!["3.8", "3.9"])] // empty segments skipped
    #[case("", vec![])]
    fn parse_candidates_sorts_ascending(#[case] raw: &str, #[case] expected: Vec<&str>) {
        let cands = candidates(raw);
        let parsed: Vec<&str> = cands.iter().map(Candidate::as_str).collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_candidates_rejects_invalid_version() {
        let result = parse_candidates("3.8,not-a-version");
        assert!(matches!(
            result,
            Err(SelectionError::InvalidVersion { .. })
        ));
    }

    #[rstest]
    #[case("3.8,3.9,3.10", None, "3.8")]
    #[case("3.10,3.9,3.8", None, "3.8")]
    #[case("3.8,3.9,3.10", Some(""), "3.8")] // empty spec counts as absent
    #[case("3.8,3.9,3.10", Some("  "), "3.8")]
    #[case("3.8,3.9,3.10", Some(">=3.9"), "3.9")]
    #[case("3.6,3.7,3.8", Some(">=3.6"), "3.6")]
    #[case("3.8,3.9,3.10", Some(">=3.9,<3.10"), "3.9")]
    #[case("3.8,3.9,3.10", Some(">=3.7,<4"), "3.8")]
    #[case("3.8,3.9,3.10", Some("!=3.8"), "3.9")]
    #[case("3.8,3.9,3.10", Some(">=3.11"), "3.8")] // nothing matches: smallest wins
    #[case("3.8,3.9,3.10", Some("<3.0"), "3.8")]
    fn pick_version_returns_expected(
        #[case] raw: &str,
        #[case] requires_python: Option<&str>,
        #[case] expected: &str,
    ) {
        let candidates = candidates(raw);
        assert_eq!(
            pick_version(&candidates, requires_python).unwrap(),
            expected
        );
    }

    #[test]
    fn pick_version_rejects_empty_candidate_list() {
        let result = pick_version(&[], Some(">=3.9"));
        assert!(matches!(result, Err(SelectionError::NoCandidates)));
    }

    #[test]
    fn pick_version_rejects_invalid_specifiers() {
        let candidates = candidates("3.8,3.9");
        let result = pick_version(&candidates, Some("invalid>>=spec"));
        assert!(matches!(
            result,
            Err(SelectionError::InvalidSpecifiers { .. })
        ));
    }

    #[test]
    fn pick_version_preserves_raw_spelling() {
        let candidates = candidates("3.10.0,3.9");
        assert_eq!(pick_version(&candidates, None).unwrap(), "3.9");
        assert_eq!(
            pick_version(&candidates, Some(">=3.10")).unwrap(),
            "3.10.0"
        );
    }
}
