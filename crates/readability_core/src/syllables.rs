/// Letters that are neither vowels nor `l`; only these may precede a
/// stripped `es`/`e` ending.
fn strips_ending(c: char) -> bool {
    !matches!(c, 'l' | 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Approximate English syllable count.
///
/// A lossy heuristic: words of three letters or fewer count as one, a single
/// trailing `?es`, `ed` or `?e` is dropped (where `?` is a consonant other
/// than `l`, and is dropped with it), a leading `y` is dropped, and each run
/// of vowels counts one syllable per two letters. Any non-empty word has at
/// least one syllable; blank input has none.
pub fn count_syllables(word: &str) -> usize {
    let lowered = word.trim().to_lowercase();
    let mut chars: Vec<char> = lowered.chars().collect();
    if chars.is_empty() {
        return 0;
    }
    if chars.len() <= 3 {
        return 1;
    }

    strip_silent_ending(&mut chars);
    if chars.first() == Some(&'y') {
        chars.remove(0);
    }

    let groups = vowel_groups(&chars);
    groups.max(1)
}

fn strip_silent_ending(chars: &mut Vec<char>) {
    let n = chars.len();
    let strip = match chars.as_slice() {
        [.., c, 'e', 's'] if strips_ending(*c) => 3,
        [.., 'e', 'd'] => 2,
        [.., c, 'e'] if strips_ending(*c) => 2,
        _ => 0,
    };
    chars.truncate(n - strip);
}

fn vowel_groups(chars: &[char]) -> usize {
    let mut groups: usize = 0;
    let mut run: usize = 0;
    for &c in chars {
        if is_vowel(c) {
            run += 1;
        } else {
            groups += run.div_ceil(2);
            run = 0;
        }
    }
    groups + run.div_ceil(2)
}
