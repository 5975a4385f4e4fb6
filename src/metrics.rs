/// Split text into words on any whitespace.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Fraction of typed words matching the sample word at the same position.
///
/// The positional comparison is bounded to the shorter of the two slices;
/// words typed past the end of the sample count against the denominator but
/// can never match. Returns 0.0 for empty input.
pub fn accuracy(sample_words: &[&str], typed_words: &[&str]) -> f64 {
    if typed_words.is_empty() {
        return 0.0;
    }

    let bound = typed_words.len().min(sample_words.len());
    let correct = (0..bound)
        .filter(|&i| typed_words[i] == sample_words[i])
        .count();

    correct as f64 / typed_words.len() as f64
}

/// Typed-word count divided by elapsed minutes, truncated to an integer.
///
/// Uses the raw typed-word count, not correctness-weighted. Returns 0 when
/// no time has elapsed.
pub fn words_per_minute(typed_words: usize, elapsed_secs: u64) -> u64 {
    if elapsed_secs == 0 {
        return 0;
    }

    (typed_words as f64 / (elapsed_secs as f64 / 60.0)).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("the cat sat"), vec!["the", "cat", "sat"]);
        assert_eq!(split_words("  padded   input "), vec!["padded", "input"]);
        assert!(split_words("").is_empty());
        assert!(split_words("   ").is_empty());
    }

    #[test]
    fn test_accuracy_empty_input_is_zero() {
        assert_eq!(accuracy(&["the", "cat", "sat"], &[]), 0.0);
    }

    #[test]
    fn test_accuracy_full_match() {
        let sample = ["the", "cat", "sat"];
        assert_eq!(accuracy(&sample, &["the", "cat", "sat"]), 1.0);
    }

    #[test]
    fn test_accuracy_partial_match() {
        // "the dog sat" against "the cat sat" -> 2/3
        let sample = ["the", "cat", "sat"];
        let typed = ["the", "dog", "sat"];
        let acc = accuracy(&sample, &typed);
        assert!((acc - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_prefix_only() {
        let sample = ["the", "cat", "sat"];
        assert_eq!(accuracy(&sample, &["the"]), 1.0);
        assert_eq!(accuracy(&sample, &["teh"]), 0.0);
    }

    #[test]
    fn test_accuracy_typed_longer_than_sample() {
        // Comparison is bounded to the sample length; the extra words still
        // dilute the ratio.
        let sample = ["the", "cat"];
        let typed = ["the", "cat", "ran", "away"];
        assert_eq!(accuracy(&sample, &typed), 0.5);
    }

    #[test]
    fn test_accuracy_always_within_unit_interval() {
        let sample = ["a", "b", "c"];
        let cases: Vec<Vec<&str>> = vec![
            vec![],
            vec!["a"],
            vec!["x"],
            vec!["a", "b", "c"],
            vec!["x", "y", "z", "w", "v"],
            vec!["a", "b", "c", "d", "e", "f"],
        ];

        for typed in cases {
            let acc = accuracy(&sample, &typed);
            assert!((0.0..=1.0).contains(&acc), "accuracy {} out of range", acc);
        }
    }

    #[test]
    fn test_wpm_zero_elapsed_is_zero() {
        assert_eq!(words_per_minute(50, 0), 0);
    }

    #[test]
    fn test_wpm_zero_words() {
        assert_eq!(words_per_minute(0, 60), 0);
    }

    #[test]
    fn test_wpm_exact_minute() {
        assert_eq!(words_per_minute(40, 60), 40);
    }

    #[test]
    fn test_wpm_half_minute() {
        assert_eq!(words_per_minute(20, 30), 40);
    }

    #[test]
    fn test_wpm_truncates() {
        // 10 words in 45s = 13.33... wpm -> 13
        assert_eq!(words_per_minute(10, 45), 13);
        // 7 words in 90s = 4.66... wpm -> 4
        assert_eq!(words_per_minute(7, 90), 4);
    }
}
