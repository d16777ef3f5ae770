/*!
 * Tests for narration word-count and duration stats
 */

use scriptforge::script_stats::SpeakingStats;

fn narration_of(words: usize) -> String {
    vec!["steady"; words].join(" ")
}

#[test]
fn test_fromSpeech_with150Words_shouldBeOneMinute() {
    let stats = SpeakingStats::from_speech(&narration_of(150));

    assert_eq!(stats.word_count, 150);
    assert_eq!(stats.minutes, 1);
    assert_eq!(stats.seconds, 0);
    assert_eq!(stats.to_string(), "1m 0s");
}

#[test]
fn test_fromSpeech_with225Words_shouldBeNinetySeconds() {
    let stats = SpeakingStats::from_speech(&narration_of(225));

    assert_eq!(stats.to_string(), "1m 30s");
}

#[test]
fn test_fromSpeech_withShortNarration_shouldStayUnderAMinute() {
    let stats = SpeakingStats::from_speech("just a few spoken words here");

    assert_eq!(stats.word_count, 6);
    assert_eq!(stats.minutes, 0);
    assert_eq!(stats.seconds, 2);
}

#[test]
fn test_fromSpeech_withEmptyNarration_shouldBeZero() {
    let stats = SpeakingStats::from_speech("");

    assert_eq!(stats.word_count, 0);
    assert_eq!(stats.to_string(), "0m 0s");
}

#[test]
fn test_fromSpeech_withMixedWhitespace_shouldCountTokens() {
    let stats = SpeakingStats::from_speech("one\ttwo\nthree   four");

    assert_eq!(stats.word_count, 4);
}
