//! Detects answers that amount to "I don't know".

/// Phrases that signal the candidate could not answer the last question.
const UNCERTAINTY_PHRASES: &[&str] = &[
    "don't know",
    "i am not sure",
    "i am unsure",
    "i have no idea",
    "do not know",
    "sorry, i don't know",
    "can't recall",
    "don't remember",
    "i am sorry",
    "i'm sorry",
    "i am not familiar",
    "not sure",
    "no idea",
];

/// Returns true if the transcript contains any uncertainty phrase,
/// case-insensitively.
///
/// Matching is plain substring containment after lower-casing; no stemming.
/// Empty or whitespace-only transcripts are never uncertain.
pub fn expresses_uncertainty(transcript: &str) -> bool {
    if transcript.trim().is_empty() {
        return false;
    }

    let lowered = transcript.to_lowercase();
    UNCERTAINTY_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_uncertainty_phrases_in_any_casing() {
        assert!(expresses_uncertainty("I don't know"));
        assert!(expresses_uncertainty("I DON'T KNOW the answer"));
        assert!(expresses_uncertainty("honestly, No Idea"));
        assert!(expresses_uncertainty("I'm sorry, I can't recall that one"));
        assert!(expresses_uncertainty("Not Sure about the details"));
    }

    #[test]
    fn matches_phrase_embedded_in_longer_answer() {
        assert!(expresses_uncertainty(
            "Well, the event loop... I am not familiar with the microtask queue part."
        ));
    }

    #[test]
    fn confident_answers_are_not_uncertain() {
        assert!(!expresses_uncertainty(
            "Closures capture their lexical environment."
        ));
        assert!(!expresses_uncertainty("The answer is 42."));
    }

    #[test]
    fn empty_and_whitespace_input_is_not_uncertain() {
        assert!(!expresses_uncertainty(""));
        assert!(!expresses_uncertainty("   \t\n"));
    }
}
