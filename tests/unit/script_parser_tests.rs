/*!
 * Tests for the script segmentation parser
 */

use scriptforge::script_parser::ScriptParser;

/// A realistic model reply with markdown noise, a speaker prefix, and a
/// parenthetical stage direction mixed into the spoken sections
const MESSY_REPLY: &str = "[VISUAL]\nOpening drone shot over the city.\n[AUDIO]\nHOST: Welcome back to the channel! (waves)\n**Today** we're diving deep.\n[VISUAL]\nCut to screen recording.\n[AUDIO]\n# Section 1\nLet's start with the basics.";

#[test]
fn test_parse_withMessyReply_shouldProduceCleanStreams() {
    let result = ScriptParser::parse(MESSY_REPLY);

    assert_eq!(
        result.visual_blocks,
        vec!["Opening drone shot over the city.", "Cut to screen recording."]
    );
    assert_eq!(
        result.speech_blocks,
        vec![
            "Welcome back to the channel!\nToday we're diving deep.",
            "Let's start with the basics."
        ]
    );
}

#[test]
fn test_parse_shouldJoinBlocksWithBlankLines() {
    let result = ScriptParser::parse(MESSY_REPLY);

    assert_eq!(
        result.visual_text(),
        "Opening drone shot over the city.\n\nCut to screen recording."
    );
    assert!(result.speech_text().contains("basics."));
}

#[test]
fn test_parse_withMixedCaseAndColonMarkers_shouldRecognizeAll() {
    let raw = "[audio]: Hello out there. [VISUALS] Slow pan across the desk.";

    let result = ScriptParser::parse(raw);

    assert_eq!(result.speech_blocks, vec!["Hello out there."]);
    assert_eq!(result.visual_blocks, vec!["Slow pan across the desk."]);
}

#[test]
fn test_parse_withEveryCharacterBetweenMarkers_shouldAttributeOnce() {
    let raw = "[VISUAL] alpha [AUDIO] bravo [VISUAL] charlie [AUDIO] delta";

    let result = ScriptParser::parse(raw);

    // Coverage: each inter-marker span lands in exactly one block
    let all: Vec<&str> = result
        .visual_blocks
        .iter()
        .chain(result.speech_blocks.iter())
        .map(|s| s.as_str())
        .collect();
    for word in ["alpha", "bravo", "charlie", "delta"] {
        assert_eq!(all.iter().filter(|b| b.contains(word)).count(), 1);
    }
    assert_eq!(result.visual_blocks, vec!["alpha", "charlie"]);
    assert_eq!(result.speech_blocks, vec!["bravo", "delta"]);
}

#[test]
fn test_parse_withMarkerWordsInProse_shouldLeaveProseIntact() {
    let raw = "[AUDIO]\nThe audio in this script is crisp, and the scene feels alive.";

    let result = ScriptParser::parse(raw);

    assert_eq!(
        result.speech_blocks,
        vec!["The audio in this script is crisp, and the scene feels alive."]
    );
    assert!(result.visual_blocks.is_empty());
}

#[test]
fn test_parse_withNoMarkers_shouldFallBackPerLine() {
    let raw = "(wide shot)\nHello there\nEXT. PARK - DAY\nLet's go";

    let result = ScriptParser::parse(raw);

    assert_eq!(result.visual_blocks, vec!["(wide shot)", "EXT. PARK - DAY"]);
    assert_eq!(result.speech_blocks, vec!["Hello there", "Let's go"]);
}

#[test]
fn test_parse_withInteriorHeading_shouldClassifyAsVisualInFallback() {
    let raw = "INT. KITCHEN - NIGHT\nSo what happens next?";

    let result = ScriptParser::parse(raw);

    assert_eq!(result.visual_blocks, vec!["INT. KITCHEN - NIGHT"]);
    assert_eq!(result.speech_blocks, vec!["So what happens next?"]);
}

#[test]
fn test_parse_withMalformedBracketSyntax_shouldNotPanic() {
    for raw in ["[SCRIPT", "]AUDIO[", "[]", "[[[AUDIO]]]", "[AUDIO]:::"] {
        let _ = ScriptParser::parse(raw);
    }
}

#[test]
fn test_parse_withOnlyWhitespace_shouldYieldEmptyResult() {
    let result = ScriptParser::parse("  \n\t \n ");

    assert!(result.is_empty());
    assert_eq!(result.speech_text(), "");
    assert_eq!(result.visual_text(), "");
}

#[test]
fn test_parse_withLargeUnmarkedInput_shouldClassifyEveryLine() {
    let raw = "A perfectly ordinary narration line.\n".repeat(5000);

    let result = ScriptParser::parse(&raw);

    assert_eq!(result.speech_blocks.len(), 5000);
    assert!(result.visual_blocks.is_empty());
}

#[test]
fn test_cleanSpeech_isIdempotentOnRealisticText() {
    let parsed = ScriptParser::parse(MESSY_REPLY);

    for block in &parsed.speech_blocks {
        assert_eq!(ScriptParser::clean_speech(block), *block);
    }
}
