/*!
 * Tests for prompt construction
 */

use scriptforge::prompts::{PromptTemplate, ScriptPromptBuilder};

#[test]
fn test_systemPrompt_shouldPinBothSectionTags() {
    let rendered = PromptTemplate::script_writer().render();

    assert!(rendered.contains("[VISUAL]"));
    assert!(rendered.contains("[AUDIO]"));
    assert!(rendered.contains("FORMATTING RULES"));
}

#[test]
fn test_promptBuilder_withDefaults_shouldFillBrief() {
    let prompt = ScriptPromptBuilder::new("Sourdough starters").build();

    assert!(prompt.contains("Topic: Sourdough starters"));
    assert!(prompt.contains("Tone: High Energy"));
    assert!(prompt.contains("Write a full YouTube script"));
}

#[test]
fn test_promptBuilder_withCustomBrief_shouldOverrideDefaults() {
    let prompt = ScriptPromptBuilder::new("Home servers")
        .with_tone("Minimalist")
        .with_target_duration("Shorts (<60s)")
        .build();

    assert!(prompt.contains("Tone: Minimalist"));
    assert!(prompt.contains("Target Duration: Shorts (<60s)"));
}
