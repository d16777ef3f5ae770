/*!
 * Prompt templates for script generation.
 *
 * The system prompt pins the model to exactly two section tags so the
 * downstream parser has a predictable structure to segment on; the builder
 * assembles the per-request user prompt from the video brief.
 */

/// System prompt template for tagged script generation.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string
    template: String,
}

impl PromptTemplate {
    /// The default system prompt for YouTube script generation.
    pub const SCRIPT_WRITER: &'static str = r#"You are 'ScriptForge AI', a professional YouTube Script Writer.
Your goal is to write highly engaging scripts in the 2nd person (using 'You', 'Your').

FORMATTING RULES (STRICT):
1. Use ONLY these two tags: [VISUAL] for scenes, and [AUDIO] for spoken words.
2. [VISUAL]: Describe the visuals, camera shots, or on-screen text.
3. [AUDIO]: Write ONLY the spoken words. No actor directions, no "Host:", no markdown headers.
4. Do not output any intro text. Start directly with a [VISUAL] or [AUDIO] tag.
5. Example:
   [VISUAL]
   Wide shot of a clear blue sky.
   [AUDIO]
   Today is going to be amazing."#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the default script writer template.
    pub fn script_writer() -> Self {
        Self::new(Self::SCRIPT_WRITER)
    }

    /// Render the template.
    pub fn render(&self) -> String {
        self.template.clone()
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::script_writer()
    }
}

/// Builder for the per-request user prompt from the video brief.
#[derive(Debug, Clone)]
pub struct ScriptPromptBuilder {
    topic: String,
    tone: String,
    target_duration: String,
}

impl ScriptPromptBuilder {
    /// Create a new prompt builder for the given topic.
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            tone: "High Energy".to_string(),
            target_duration: "Standard (5-10 mins)".to_string(),
        }
    }

    /// Set the video tone.
    pub fn with_tone(mut self, tone: &str) -> Self {
        self.tone = tone.to_string();
        self
    }

    /// Set the target duration description.
    pub fn with_target_duration(mut self, duration: &str) -> Self {
        self.target_duration = duration.to_string();
        self
    }

    /// Build the user prompt string.
    pub fn build(&self) -> String {
        format!(
            "Topic: {}\nTone: {}\nTarget Duration: {}\nAction: Write a full YouTube script.",
            self.topic, self.tone, self.target_duration
        )
    }
}
