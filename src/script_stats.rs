/*!
 * Derived statistics over the spoken narration stream.
 *
 * Kept separate from segmentation so integrations that only need the two
 * text streams can skip it entirely.
 */

use std::fmt;

/// Fixed speaking rate used for the duration estimate, in words per minute
pub const WORDS_PER_MINUTE: u64 = 150;

/// Word count and estimated speaking duration for a narration string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeakingStats {
    /// Number of whitespace-delimited tokens in the narration
    pub word_count: u64,
    /// Whole minutes of the duration estimate
    pub minutes: u64,
    /// Remainder seconds of the duration estimate, always < 60
    pub seconds: u64,
}

impl SpeakingStats {
    /// Compute stats over a narration string at the fixed 150 wpm rate.
    ///
    /// Minutes are the floor of `words / 150`; seconds are the floor of the
    /// fractional remainder scaled to 60.
    pub fn from_speech(speech: &str) -> Self {
        let word_count = speech.split_whitespace().count() as u64;
        let minutes = word_count / WORDS_PER_MINUTE;
        let seconds = (word_count % WORDS_PER_MINUTE) * 60 / WORDS_PER_MINUTE;

        SpeakingStats {
            word_count,
            minutes,
            seconds,
        }
    }
}

impl fmt::Display for SpeakingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m {}s", self.minutes, self.seconds)
    }
}
