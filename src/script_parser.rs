/*!
 * Script segmentation parser.
 *
 * Takes the raw text of a model-generated video script and splits it into
 * two clean streams: spoken narration (for text-to-speech) and visual/scene
 * directions (for a shot list). Generated scripts arrive with inconsistent
 * tagging conventions, markdown noise, and parenthetical stage directions,
 * so the parser normalizes markers with an anchored tokenizer, segments the
 * text with a sticky current-tag state machine, and cleans the spoken
 * stream before assembly.
 *
 * Parsing never fails: any input string, including an empty one or one with
 * malformed markers, produces a well-defined (possibly empty) result.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for marker occurrences. A marker is recognized only when it is
/// bracket-delimited anywhere in the text (`[AUDIO]`, `[ scene ]:`) or when
/// a bare keyword with a trailing colon starts a line (`NARRATION:`).
/// Bare keyword words inside prose ("read the script") never match, so
/// normalization cannot corrupt ordinary sentences.
static MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)\[[ \t]*(SCENE DESCRIPTION|SCENE|VISUALS|VISUAL|SCRIPT|NARRATION|AUDIO)[ \t]*\][ \t]*:?|^[ \t]*(SCENE DESCRIPTION|SCENE|VISUALS|VISUAL|SCRIPT|NARRATION|AUDIO)[ \t]*:",
    )
    .expect("Invalid marker regex")
});

/// Regex for parenthesized asides, multi-line included
static PARENTHETICAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\(.*?\)").expect("Invalid parenthetical regex")
});

/// Regex for markdown heading lines
static HEADING_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^#+.*$").expect("Invalid heading regex")
});

/// Regex for a leading "Speaker:" style prefix at the start of a line
static SPEAKER_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\w+:\s*").expect("Invalid speaker prefix regex")
});

/// Canonical classification of a contiguous run of script text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Spoken narration, destined for text-to-speech
    Speech,
    /// Visual/scene direction, destined for the shot list
    Visual,
}

impl Tag {
    /// Map a recognized marker keyword to its canonical tag
    fn from_keyword(keyword: &str) -> Self {
        match keyword.to_uppercase().as_str() {
            "SCRIPT" | "NARRATION" | "AUDIO" => Tag::Speech,
            // SCENE DESCRIPTION, SCENE, VISUALS, VISUAL
            _ => Tag::Visual,
        }
    }
}

/// A maximal contiguous span of text attributed to one marker's category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRun {
    /// The category assigned by the preceding marker
    pub tag: Tag,
    /// The raw text of the run, surrounding whitespace trimmed
    pub text: String,
}

/// Result of parsing one raw script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Cleaned spoken narration blocks, in order of appearance
    pub speech_blocks: Vec<String>,
    /// Visual/scene direction blocks, in order of appearance
    pub visual_blocks: Vec<String>,
}

impl ParseResult {
    /// Spoken narration blocks joined with a blank-line separator
    pub fn speech_text(&self) -> String {
        self.speech_blocks.join("\n\n")
    }

    /// Visual direction blocks joined with a blank-line separator
    pub fn visual_text(&self) -> String {
        self.visual_blocks.join("\n\n")
    }

    /// Whether parsing produced no content of either kind
    pub fn is_empty(&self) -> bool {
        self.speech_blocks.is_empty() && self.visual_blocks.is_empty()
    }
}

/// A marker occurrence found by the tokenizer
#[derive(Debug, Clone, Copy)]
struct MarkerToken {
    tag: Tag,
    /// Byte offset of the start of the marker text
    start: usize,
    /// Byte offset just past the end of the marker text
    end: usize,
}

/// Script segmentation parser
pub struct ScriptParser;

impl ScriptParser {
    /// Parse a raw script into narration and shot-list streams.
    ///
    /// When the tokenizer finds no markers at all, falls back to per-line
    /// heuristic classification; that path applies no markup cleanup.
    pub fn parse(raw: &str) -> ParseResult {
        let tokens = Self::scan_markers(raw);

        if tokens.is_empty() {
            debug!("No markers found, using per-line fallback classification");
            return Self::classify_lines(raw);
        }

        let runs = Self::segment(raw, &tokens);
        debug!("Segmented script into {} run(s) from {} marker(s)", runs.len(), tokens.len());

        let mut result = ParseResult::default();
        for run in &runs {
            match run.tag {
                Tag::Speech => {
                    let cleaned = Self::clean_speech(&run.text);
                    if !cleaned.is_empty() {
                        result.speech_blocks.push(cleaned);
                    }
                }
                Tag::Visual => {
                    result.visual_blocks.push(run.text.clone());
                }
            }
        }

        result
    }

    /// Scan the input for marker tokens, in order of appearance
    fn scan_markers(input: &str) -> Vec<MarkerToken> {
        MARKER_REGEX
            .captures_iter(input)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                // Group 1 is the bracketed form, group 2 the line-anchored form
                let keyword = caps.get(1).or_else(|| caps.get(2))?;
                Some(MarkerToken {
                    tag: Tag::from_keyword(keyword.as_str()),
                    start: whole.start(),
                    end: whole.end(),
                })
            })
            .collect()
    }

    /// Split the input on marker tokens into tagged runs.
    ///
    /// Each marker tags all text up to the next marker or end of input.
    /// Text before the first marker carries no tag and is dropped here;
    /// runs that are blank after trimming are dropped as well.
    fn segment(input: &str, tokens: &[MarkerToken]) -> Vec<TaggedRun> {
        let mut runs = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let span_end = tokens.get(i + 1).map_or(input.len(), |next| next.start);
            let text = input[token.end..span_end].trim();
            if !text.is_empty() {
                runs.push(TaggedRun {
                    tag: token.tag,
                    text: text.to_string(),
                });
            }
        }

        runs
    }

    /// Strip non-speech artifacts from a SPEECH run.
    ///
    /// Removes parenthesized asides, markdown heading lines, leading
    /// "Speaker:" prefixes, and bold/emphasis markers, then normalizes the
    /// leftover whitespace (collapsed spaces, no blank lines). The transform
    /// is idempotent: re-running it on cleaned text is a no-op.
    pub fn clean_speech(run: &str) -> String {
        let no_asides = PARENTHETICAL_REGEX.replace_all(run, "");
        let no_headings = HEADING_LINE_REGEX.replace_all(&no_asides, "");
        let no_speakers = SPEAKER_PREFIX_REGEX.replace_all(&no_headings, "");
        let no_markup = no_speakers.replace("**", "").replace('*', "");

        no_markup
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Last-resort heuristic for scripts without any recognized markers.
    ///
    /// Classifies every non-blank line independently: lines that look like
    /// scene directions (leading `(` or `[`, or screenplay-style `EXT.` /
    /// `INT.` headings) are visual, everything else is narration. No markup
    /// cleanup is applied on this path.
    fn classify_lines(input: &str) -> ParseResult {
        let mut result = ParseResult::default();

        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('(')
                || line.starts_with('[')
                || line.contains("EXT.")
                || line.contains("INT.")
            {
                result.visual_blocks.push(line.to_string());
            } else {
                result.speech_blocks.push(line.to_string());
            }
        }

        result
    }
}
