use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

use crate::spaced_repetition_system::Quality;

lazy_static! {
    static ref NON_LETTER_RE: Regex = Regex::new(r"[^a-z]").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

pub struct SpellingGrader;

impl SpellingGrader {
    /// Grades a typed attempt against the expected spelling.
    ///
    /// Exact match is a 5, a case-only difference a 4, and a difference only
    /// in accents or punctuation a 3. Anything else is a failed recall rated
    /// by how close the letters are.
    pub fn grade(expected: &str, attempt: &str) -> Quality {
        let expected = expected.trim();
        let attempt = attempt.trim();

        if expected == attempt {
            return Quality::PERFECT;
        }
        if expected.to_lowercase() == attempt.to_lowercase() {
            return Quality::HESITANT;
        }

        let folded_expected = SpellingGrader::fold(expected);
        let folded_attempt = SpellingGrader::fold(attempt);
        if !folded_expected.is_empty() && folded_expected == folded_attempt {
            return Quality::DIFFICULT;
        }

        let similarity = strsim::normalized_levenshtein(&folded_expected, &folded_attempt);
        if similarity >= 0.8 {
            Quality::NEAR_MISS
        } else if similarity >= 0.5 {
            Quality::FAMILIAR
        } else {
            Quality::BLACKOUT
        }
    }

    /// Collapses inner whitespace and trims. Blank input yields `None`.
    pub fn normalize_word(word: &str) -> Option<String> {
        let collapsed = WHITESPACE_RE.replace_all(word.trim(), " ");
        if collapsed.is_empty() {
            None
        } else {
            Some(collapsed.into_owned())
        }
    }

    fn fold(word: &str) -> String {
        let ascii = unidecode(word).to_lowercase();
        NON_LETTER_RE.replace_all(&ascii, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(expected: &str, attempt: &str) -> u8 {
        SpellingGrader::grade(expected, attempt).value()
    }

    #[test]
    fn exact_and_near_exact_answers_pass() {
        assert_eq!(grade("serendipity", " serendipity "), 5);
        assert_eq!(grade("Monday", "monday"), 4);
        assert_eq!(grade("café", "cafe"), 3);
        assert_eq!(grade("grandmother", "grand-mother"), 3);
    }

    #[test]
    fn grades_map_onto_named_ratings() {
        assert_eq!(SpellingGrader::grade("fig", "fig"), Quality::PERFECT);
        assert_eq!(SpellingGrader::grade("Fig", "fig"), Quality::HESITANT);
        assert_eq!(SpellingGrader::grade("jalapeño", "jalapeno"), Quality::DIFFICULT);
        assert_eq!(SpellingGrader::grade("fig", "dog"), Quality::BLACKOUT);
        assert!(!Quality::NEAR_MISS.is_success());
        assert!(Quality::DIFFICULT.is_success());
    }

    #[test]
    fn misspellings_fail_by_distance() {
        // one letter off out of eleven
        assert_eq!(grade("serendipity", "serendipaty"), 2);
        assert_eq!(grade("ephemeral", "ephamerel"), 1);
        assert_eq!(grade("labyrinthine", "cat"), 0);
        assert_eq!(grade("apple", ""), 0);
    }

    #[test]
    fn normalize_word_collapses_whitespace() {
        assert_eq!(
            SpellingGrader::normalize_word("  ice   cream "),
            Some("ice cream".to_string())
        );
        assert_eq!(SpellingGrader::normalize_word("   "), None);
    }
}
