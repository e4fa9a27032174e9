//! Prefix classification over a sorted word list
//!
//! The solver asks this once per visited cell, so it is the hot path of the
//! whole search.

/// Outcome of classifying a candidate string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Not a word, and no word starts with it
    NoMatch,
    /// Not a word, but some word starts with it (keep searching)
    Prefix,
    /// Exactly a word (which may also be a prefix of longer words)
    Match,
}

impl Classification {
    /// Whether the search should keep extending this candidate
    #[inline]
    #[must_use]
    pub const fn is_viable(self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

/// Classify `candidate` against a sorted word list
///
/// Binary search for an exact match; failing that, the word at the insertion
/// point is the smallest entry greater than `candidate`, so it is the only one
/// that needs checking for a shared prefix.
///
/// `sorted_words` MUST be sorted ascending. This is not checked: an unsorted
/// list silently produces wrong answers.
///
/// # Examples
/// ```
/// use boggle_solver::dictionary::{Classification, classify};
///
/// let words = ["ALPHA", "BETA", "GAMMA"];
/// assert_eq!(classify("ALPHA", &words), Classification::Match);
/// assert_eq!(classify("BE", &words), Classification::Prefix);
/// assert_eq!(classify("FOX", &words), Classification::NoMatch);
/// assert_eq!(classify("ZZZZ", &words), Classification::NoMatch);
/// ```
#[must_use]
pub fn classify<W: AsRef<str>>(candidate: &str, sorted_words: &[W]) -> Classification {
    let mut low = 0;
    let mut high = sorted_words.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match sorted_words[mid].as_ref().cmp(candidate) {
            std::cmp::Ordering::Equal => return Classification::Match,
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }

    if sorted_words
        .get(low)
        .is_some_and(|word| word.as_ref().starts_with(candidate))
    {
        Classification::Prefix
    } else {
        Classification::NoMatch
    }
}

/// Borrowed view of a sorted word list that answers classification queries
#[derive(Debug, Clone, Copy)]
pub struct PrefixMatcher<'a, W> {
    words: &'a [W],
}

impl<'a, W: AsRef<str>> PrefixMatcher<'a, W> {
    /// Wrap a word list that is already sorted ascending
    ///
    /// Sortedness is verified in debug builds only.
    #[must_use]
    pub fn new(sorted_words: &'a [W]) -> Self {
        debug_assert!(
            sorted_words
                .windows(2)
                .all(|pair| pair[0].as_ref() <= pair[1].as_ref()),
            "prefix matcher requires a sorted word list"
        );
        Self {
            words: sorted_words,
        }
    }

    #[inline]
    #[must_use]
    pub fn classify(&self, candidate: &str) -> Classification {
        classify(candidate, self.words)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEK: [&str; 5] = ["ALPHA", "BETA", "DELTA", "GAMMA", "OMEGA"];

    #[test]
    fn exact_matches() {
        for word in GREEK {
            assert_eq!(classify(word, &GREEK), Classification::Match);
        }
    }

    #[test]
    fn prefixes() {
        assert_eq!(classify("A", &GREEK), Classification::Prefix);
        assert_eq!(classify("ALP", &GREEK), Classification::Prefix);
        assert_eq!(classify("GAMM", &GREEK), Classification::Prefix);
        assert_eq!(classify("OMEG", &GREEK), Classification::Prefix);
    }

    #[test]
    fn no_matches() {
        assert_eq!(classify("ALPHAS", &GREEK), Classification::NoMatch);
        assert_eq!(classify("AAA", &GREEK), Classification::NoMatch);
        assert_eq!(classify("C", &GREEK), Classification::NoMatch);
        assert_eq!(classify("ZZZZ", &GREEK), Classification::NoMatch);
    }

    #[test]
    fn match_that_is_also_a_prefix() {
        let words = ["AMP", "AMPLE", "SAME", "SAMPLE"];
        assert_eq!(classify("AMP", &words), Classification::Match);
        assert_eq!(classify("AMPL", &words), Classification::Prefix);
        assert_eq!(classify("SAM", &words), Classification::Prefix);
    }

    #[test]
    fn empty_list() {
        let words: [&str; 0] = [];
        assert_eq!(classify("A", &words), Classification::NoMatch);
        assert_eq!(classify("", &words), Classification::NoMatch);
    }

    #[test]
    fn empty_candidate_is_prefix_of_everything() {
        assert_eq!(classify("", &GREEK), Classification::Prefix);
    }

    #[test]
    fn duplicates_tolerated() {
        let words = ["AXE", "AXE", "AXLE", "AXLE", "AXLE"];
        assert_eq!(classify("AXE", &words), Classification::Match);
        assert_eq!(classify("AXL", &words), Classification::Prefix);
        assert_eq!(classify("AXLES", &words), Classification::NoMatch);
    }

    #[test]
    fn viability() {
        assert!(Classification::Match.is_viable());
        assert!(Classification::Prefix.is_viable());
        assert!(!Classification::NoMatch.is_viable());
    }

    #[test]
    fn matcher_delegates() {
        let matcher = PrefixMatcher::new(&GREEK);
        assert_eq!(matcher.len(), 5);
        assert_eq!(matcher.classify("DEL"), Classification::Prefix);
        assert_eq!(matcher.classify("DELTA"), Classification::Match);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "requires a sorted word list")]
    fn matcher_rejects_unsorted_in_debug() {
        let _ = PrefixMatcher::new(&["BETA", "ALPHA"]);
    }
}
