//! Flesch reading ease: `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`.

/// Sentences this short are treated as fragments (headings, captions) and do
/// not count towards the sentence total.
const MIN_SENTENCE_WORDS: usize = 3;

/// Returns `None` when the text has no words to score.
pub fn flesch_reading_ease(text: &str) -> Option<f64> {
    let words: Vec<String> = text.split_whitespace().filter_map(normalize_word).collect();
    if words.is_empty() {
        return None;
    }

    let sentences = sentence_count(text).max(1);
    let syllables: usize = words.iter().map(|word| syllable_count(word)).sum();

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;
    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    score.is_finite().then_some(score)
}

fn normalize_word(token: &str) -> Option<String> {
    let word: String = token
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    (!word.is_empty()).then_some(word)
}

fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|sentence| {
            sentence
                .split_whitespace()
                .filter(|token| token.chars().any(char::is_alphanumeric))
                .count()
                >= MIN_SENTENCE_WORDS
        })
        .count()
}

fn syllable_count(word: &str) -> usize {
    if word.chars().all(|c| c.is_ascii_digit()) {
        return 1;
    }

    let mut count = 0;
    let mut previous_vowel = false;
    for c in word.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    if count > 1 && word.ends_with('e') && !word.ends_with("le") && !word.ends_with("ee") {
        count -= 1;
    }
    count.max(1)
}
