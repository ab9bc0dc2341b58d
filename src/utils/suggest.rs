//! "Did you mean?" suggestions for mistyped commands
//!
//! Picks the candidate with the smallest Levenshtein distance to the
//! input, as long as it stays within a small edit budget.

use tracing::debug;

/// Largest edit distance still worth suggesting
pub const DEFAULT_MAX_DISTANCE: usize = 3;

/// A suggested candidate and how far it was from the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub value: String,
    pub distance: usize,
}

/// Levenshtein distance between two strings, counted in `char`s.
///
/// Fills the whole `(m+1) x (n+1)` table. Inputs here are command names,
/// so the quadratic table never gets large.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    char_distance(&a, &b)
}

fn char_distance(a: &[char], b: &[char]) -> usize {
    let (m, n) = (a.len(), b.len());

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    table[0] = (0..=n).collect();
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }

    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1]
            } else {
                let deletion = table[i - 1][j];
                let insertion = table[i][j - 1];
                let substitution = table[i - 1][j - 1];
                1 + deletion.min(insertion).min(substitution)
            };
        }
    }

    table[m][n]
}

/// Configurable nearest-match selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionMatcher {
    /// Matches further away than this are dropped
    pub max_distance: usize,
    /// Compare exactly, or fold both sides to lowercase first
    pub case_sensitive: bool,
}

impl Default for SuggestionMatcher {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            case_sensitive: true,
        }
    }
}

impl SuggestionMatcher {
    pub fn new(max_distance: usize, case_sensitive: bool) -> Self {
        Self {
            max_distance,
            case_sensitive,
        }
    }

    /// Distance under this matcher's case policy.
    ///
    /// Case folding maps each char to the first char of its lowercase form,
    /// so distances are always counted in the input's own chars.
    pub fn distance(&self, a: &str, b: &str) -> usize {
        if self.case_sensitive {
            levenshtein(a, b)
        } else {
            char_distance(&fold_case(a), &fold_case(b))
        }
    }

    /// Find the closest candidate within `max_distance`.
    ///
    /// Candidates are scanned in order and the first one with the minimal
    /// distance wins, so callers control tie-breaking through ordering.
    pub fn closest_match<S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &[S],
    ) -> Option<Suggestion> {
        let mut best: Option<(&str, usize)> = None;

        for candidate in candidates {
            let candidate = candidate.as_ref();
            let distance = self.distance(query, candidate);
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((candidate, distance));
            }
        }

        match best {
            Some((value, distance)) if distance <= self.max_distance => {
                debug!("Suggesting '{}' for '{}' (distance {})", value, query, distance);
                Some(Suggestion {
                    value: value.to_string(),
                    distance,
                })
            }
            Some((value, distance)) => {
                debug!(
                    "Nearest candidate '{}' for '{}' is too far (distance {} > {})",
                    value, query, distance, self.max_distance
                );
                None
            }
            None => None,
        }
    }

    /// Render a "Did you mean" hint, if there is anything to suggest
    pub fn did_you_mean<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> Option<String> {
        self.closest_match(query, candidates)
            .map(|s| format!("Did you mean '{}'?", s.value))
    }
}

fn fold_case(s: &str) -> Vec<char> {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Closest candidate using the default threshold, case-sensitive
pub fn closest_match<S: AsRef<str>>(query: &str, candidates: &[S]) -> Option<Suggestion> {
    SuggestionMatcher::default().closest_match(query, candidates)
}

/// "Did you mean" hint using the default matcher
pub fn did_you_mean<S: AsRef<str>>(query: &str, candidates: &[S]) -> Option<String> {
    SuggestionMatcher::default().did_you_mean(query, candidates)
}
