use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::prompts::ScriptPromptBuilder;
use crate::providers::groq::{ChatMessage, Groq, GroqRequest};
use crate::providers::Provider;
use crate::script_parser::{ParseResult, ScriptParser};
use crate::script_stats::SpeakingStats;

// @module: Application controller for script generation and splitting

/// Outcome of one generation turn
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The raw model reply, markers and all
    pub full_reply: String,
    /// Cleaned spoken narration, ready for text-to-speech
    pub narration: String,
    /// Visual/scene directions, ready for a shot list
    pub shot_list: String,
    /// Word count and speaking-duration estimate over the narration
    pub stats: SpeakingStats,
}

/// Main application controller for script generation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: In-memory chat history for this invocation
    history: Vec<ChatMessage>,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            history: Vec::new(),
        })
    }

    /// Number of messages currently held in the chat history
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Run one generation turn: prompt the provider, split the reply, and
    /// compute narration stats. Chat history is extended with the user
    /// topic and the raw assistant reply.
    pub async fn generate(&mut self, topic: &str) -> Result<GenerationOutcome> {
        if topic.trim().is_empty() {
            return Err(anyhow!("Topic must not be empty"));
        }

        let api_key = self
            .config
            .provider
            .resolve_api_key()
            .context("Cannot call the generation API without an API key")?;

        let client = Groq::with_timeout(
            api_key,
            self.config.provider.endpoint.clone(),
            Duration::from_secs(self.config.provider.timeout_secs),
        );

        let user_prompt = ScriptPromptBuilder::new(topic)
            .with_tone(&self.config.generation.tone)
            .with_target_duration(&self.config.generation.target_duration)
            .build();

        // Trailing window of history, so long chats stay within budget
        let window = self.config.generation.history_window;
        let tail_start = self.history.len().saturating_sub(window);
        let history_tail = self.history[tail_start..].to_vec();

        let request = GroqRequest::new(self.config.provider.model.clone())
            .temperature(self.config.generation.creativity)
            .add_message("system", self.config.generation.system_prompt.clone())
            .add_messages(history_tail)
            .add_message("user", user_prompt);

        info!("Generating script for topic: {}", topic);
        let response = client
            .complete(request)
            .await
            .context("Script generation request failed")?;

        let full_reply = Groq::extract_text(&response);
        if full_reply.trim().is_empty() {
            warn!("Provider returned an empty completion");
        }

        self.history.push(ChatMessage::new("user", topic));
        self.history
            .push(ChatMessage::new("assistant", full_reply.clone()));

        Ok(Self::split_reply(&full_reply))
    }

    /// Split a raw script into narration and shot list, with stats.
    /// Pure and offline; used by both the generation turn and `split`.
    pub fn split_reply(raw: &str) -> GenerationOutcome {
        let parsed: ParseResult = ScriptParser::parse(raw);
        let narration = parsed.speech_text();
        let shot_list = parsed.visual_text();
        let stats = SpeakingStats::from_speech(&narration);

        debug!(
            "Split script: {} narration block(s), {} shot(s), {} word(s)",
            parsed.speech_blocks.len(),
            parsed.visual_blocks.len(),
            stats.word_count
        );

        GenerationOutcome {
            full_reply: raw.to_string(),
            narration,
            shot_list,
            stats,
        }
    }

    /// Split a raw script file into `<stem>.narration.txt` and
    /// `<stem>.shots.txt` in the requested output directory.
    pub fn split_file(
        input_file: &Path,
        output_dir: &Path,
        force_overwrite: bool,
    ) -> Result<GenerationOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let raw = FileManager::read_to_string(input_file)?;
        let outcome = Self::split_reply(&raw);

        let narration_path = FileManager::generate_output_path(input_file, output_dir, "narration", "txt");
        let shots_path = FileManager::generate_output_path(input_file, output_dir, "shots", "txt");

        for path in [&narration_path, &shots_path] {
            if path.exists() && !force_overwrite {
                warn!(
                    "Skipping, output already exists (use -f to force overwrite): {:?}",
                    path
                );
                return Ok(outcome);
            }
        }

        FileManager::write_to_file(&narration_path, &outcome.narration)?;
        FileManager::write_to_file(&shots_path, &outcome.shot_list)?;
        info!("Wrote {:?} and {:?}", narration_path, shots_path);

        Ok(outcome)
    }

    /// Write the narration stream to a plain-text file on demand.
    /// Nothing is written when the narration is empty.
    pub fn save_narration(narration: &str, path: &Path) -> Result<Option<PathBuf>> {
        if narration.is_empty() {
            warn!("Narration is empty, nothing to save");
            return Ok(None);
        }

        FileManager::write_to_file(path, narration)?;
        info!("Saved narration to {:?}", path);
        Ok(Some(path.to_path_buf()))
    }
}
