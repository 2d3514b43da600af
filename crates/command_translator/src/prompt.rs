//! Few-shot prompt template for natural-language to JSON command translation

use crate::error::{Result, TranslatorError};

/// Name of the single substitution slot in [`COMMAND_PROMPT`]
pub const USER_INPUT_VAR: &str = "user_input";

/// Marker that precedes each request in the prompt
pub const USER_REQUEST_MARKER: &str = "User Request:";

/// Instruction template with four example request/command pairs
pub const COMMAND_PROMPT: &str = r#"
You are a specialized AI assistant. Your purpose is to convert natural language text into a structured JSON command.
You must analyze the user's request and translate it into a JSON object containing a specific 'action' and its corresponding 'parameters'.

Your response MUST be ONLY the JSON object itself, with no additional text, explanations, or markdown formatting.

---
Here are some examples to guide you:

User Request: Turn on the living room lights and set them to blue.
JSON Command: {"action": "set_light_state", "location": "living_room", "parameters": {"state": "on", "color": "blue"}}

User Request: Play the 'Chill Hits' playlist on Spotify.
JSON Command: {"action": "play_music", "service": "spotify", "parameters": {"playlist": "Chill Hits"}}

User Request: What's the weather like in Paris tomorrow?
JSON Command: {"action": "get_weather", "parameters": {"location": "Paris, FR", "date": "tomorrow"}}

User Request: set a timer for 15 minutes
JSON Command: {"action": "set_timer", "parameters": {"duration_minutes": 15}}
---

Now, please convert the following user request into a JSON command.

User Request: {user_input}
JSON Command:"#;

fn slot_for(variable: &str) -> String {
    format!("{{{}}}", variable)
}

/// A template with exactly one substitution slot
///
/// The template is split once at construction, so rendering is a plain
/// concatenation. Braces elsewhere in the template (such as the JSON in the
/// examples) are kept as-is, and braces in the substituted text are never
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    prefix: String,
    suffix: String,
}

impl PromptTemplate {
    /// Create a template whose slot is written as `{variable}`
    ///
    /// Fails if the slot is missing or appears more than once.
    pub fn new(template: &str, variable: &str) -> Result<Self> {
        let slot = slot_for(variable);

        let (prefix, suffix) = template
            .split_once(&slot)
            .ok_or_else(|| TranslatorError::Template(format!("missing slot {}", slot)))?;

        if suffix.contains(&slot) {
            return Err(TranslatorError::Template(format!(
                "slot {} appears more than once",
                slot
            )));
        }

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// The JSON command translation template
    pub fn command() -> Self {
        let slot = slot_for(USER_INPUT_VAR);
        match COMMAND_PROMPT.split_once(&slot) {
            Some((prefix, suffix)) => Self {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            },
            None => unreachable!("COMMAND_PROMPT has no {} slot", slot),
        }
    }

    /// Substitute `user_input` into the slot
    pub fn render(&self, user_input: &str) -> String {
        let mut rendered =
            String::with_capacity(self.prefix.len() + user_input.len() + self.suffix.len());
        rendered.push_str(&self.prefix);
        rendered.push_str(user_input);
        rendered.push_str(&self.suffix);
        rendered
    }

    /// Template text before the slot
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::command()
    }
}
