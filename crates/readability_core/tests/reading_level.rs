use readability_core::{
    analyze_complexity, estimate_reading_level, estimate_reading_level_opt, ReadingLevel,
    TextComplexity,
};
use pretty_assertions::assert_eq;

// Twelve words each; only "beautiful" has three or more syllables.
const TWO_COMPLEX: &str = "the cat saw a beautiful dog and a beautiful red hat too.";
const ONE_COMPLEX: &str = "the cat saw a beautiful dog and a big red hat too.";
const NO_COMPLEX: &str = "the cat saw a big dog and a fat red hat too.";

#[test]
fn empty_and_absent_text_is_beginner() {
    assert_eq!(estimate_reading_level(""), ReadingLevel::Beginner);
    assert_eq!(estimate_reading_level("   \n\t "), ReadingLevel::Beginner);
    assert_eq!(estimate_reading_level_opt(None), ReadingLevel::Beginner);
}

#[test]
fn punctuation_only_text_has_no_sentences() {
    assert_eq!(analyze_complexity("...!?!"), TextComplexity::default());
    assert_eq!(estimate_reading_level("...!?!"), ReadingLevel::Beginner);
}

#[test]
fn short_plain_sentences_are_beginner() {
    let text = "The cat sat. The dog ran. I ate food.";
    let complexity = analyze_complexity(text);
    assert_eq!(
        complexity,
        TextComplexity {
            sentences: 3,
            words: 9,
            lexical_words: 9,
            complex_words: 0,
        }
    );
    assert_eq!(estimate_reading_level(text), ReadingLevel::Beginner);
    assert_eq!(estimate_reading_level_opt(Some(text)), ReadingLevel::Beginner);
}

#[test]
fn long_sentence_full_of_complex_words_is_advanced() {
    let text = format!(
        "{}.",
        "International communication requires extraordinary cooperation "
            .repeat(6)
            .trim_end()
    );
    let complexity = analyze_complexity(&text);
    assert_eq!(complexity.sentences, 1);
    assert_eq!(complexity.words, 30);
    assert!(complexity.complex_word_percentage() > 20.0);
    assert_eq!(estimate_reading_level(&text), ReadingLevel::Advanced);
}

#[test]
fn medium_sentences_without_complex_words_are_intermediate() {
    let text = "the cat sat on the mat and the dog ran to the big red box.";
    assert_eq!(analyze_complexity(text).words, 15);
    assert_eq!(estimate_reading_level(text), ReadingLevel::Intermediate);
}

#[test]
fn thresholds_are_inclusive() {
    // 60 words in 5 sentences, 6 of them complex: exactly 12 and exactly 10%.
    let text = [TWO_COMPLEX, TWO_COMPLEX, TWO_COMPLEX, NO_COMPLEX, NO_COMPLEX].join(" ");
    let complexity = analyze_complexity(&text);
    assert_eq!(complexity.sentences, 5);
    assert_eq!(complexity.words, 60);
    assert_eq!(complexity.complex_words, 6);
    assert_eq!(complexity.average_sentence_length(), 12.0);
    assert_eq!(complexity.complex_word_percentage(), 10.0);
    assert_eq!(complexity.level(), ReadingLevel::Beginner);
}

#[test]
fn one_more_complex_word_tips_into_intermediate() {
    let text = [TWO_COMPLEX, TWO_COMPLEX, TWO_COMPLEX, ONE_COMPLEX, NO_COMPLEX].join(" ");
    let complexity = analyze_complexity(&text);
    assert_eq!(complexity.complex_words, 7);
    assert_eq!(complexity.level(), ReadingLevel::Intermediate);
}

#[test]
fn one_more_word_per_sentence_tips_into_intermediate() {
    let text = "the cat saw a big dog and a fat red hat too now.";
    assert_eq!(analyze_complexity(text).words, 13);
    assert_eq!(estimate_reading_level(text), ReadingLevel::Intermediate);
}

#[test]
fn complex_heavy_short_sentences_are_advanced() {
    // Short sentences, but every word is complex.
    let text = "Extraordinary communication. International cooperation.";
    assert_eq!(estimate_reading_level(text), ReadingLevel::Advanced);
}

#[test]
fn text_without_terminal_punctuation_is_one_sentence() {
    let complexity = analyze_complexity("just a few words here");
    assert_eq!(complexity.sentences, 1);
    assert_eq!(complexity.words, 5);
}

#[test]
fn labels_and_serialization() {
    assert_eq!(ReadingLevel::Beginner.to_string(), "Beginner");
    assert_eq!(ReadingLevel::Intermediate.label(), "Intermediate");
    assert_eq!(
        serde_json::to_string(&ReadingLevel::Advanced).unwrap(),
        "\"Advanced\""
    );
}

#[test]
fn repeated_calls_agree() {
    let text = [TWO_COMPLEX, ONE_COMPLEX, NO_COMPLEX].join(" ");
    assert_eq!(estimate_reading_level(&text), estimate_reading_level(&text));
    assert_eq!(analyze_complexity(&text), analyze_complexity(&text));
}
