//! Name similarity for "did you mean" suggestions.
//!
//! Scores are on a 0-100 scale:
//! - 100 for names equal after normalization
//! - 10-95 when one name contains the other
//! - up to 85 from Levenshtein similarity otherwise

/// A suggested contact name and its similarity score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Name of the existing contact
    pub name: String,

    /// Similarity score (0-100)
    pub score: u8,
}

/// Suggests existing contact names that are close to a query.
#[derive(Debug, Clone, Default)]
pub struct NameMatcher;

impl NameMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Names from `names` scoring at least `threshold` against `query`.
    ///
    /// Sorted by score (highest first), then by name, and truncated to
    /// `max_results`.
    pub fn suggest<'a, I>(
        &self,
        query: &str,
        names: I,
        max_results: usize,
        threshold: u8,
    ) -> Vec<Suggestion>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query = Self::normalize_name(query);

        let mut results: Vec<Suggestion> = names
            .into_iter()
            .filter_map(|name| {
                let score = Self::score(&query, &Self::normalize_name(name));
                (score > 0 && score >= threshold).then(|| Suggestion {
                    name: name.to_string(),
                    score,
                })
            })
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        results.truncate(max_results);
        results
    }

    /// Similarity of two normalized names.
    fn score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 100;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        if target.contains(query) || query.contains(target) {
            let ratio = query_len.min(target_len) as f64 / query_len.max(target_len) as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row instead of the full matrix
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
