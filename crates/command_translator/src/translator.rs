//! Translation pipeline: template render, one completion call, raw text out

use tracing::{debug, warn};

use crate::error::Result;
use crate::model::CompletionBackend;
use crate::prompt::PromptTemplate;

/// Returned by [`CommandTranslator::translate`] whenever the completion call fails
pub const FALLBACK_RESPONSE: &str = "{\"error\": \"Failed to generate command.\"}";

/// Turns natural-language requests into model-generated JSON command text
///
/// The reply is passed through untouched; it is not checked for being valid JSON.
pub struct CommandTranslator<B> {
    template: PromptTemplate,
    backend: B,
}

impl<B: CompletionBackend> CommandTranslator<B> {
    /// Create a translator using the default command template
    pub fn new(backend: B) -> Self {
        Self::with_template(PromptTemplate::command(), backend)
    }

    /// Create a translator with a custom template
    pub fn with_template(template: PromptTemplate, backend: B) -> Self {
        Self { template, backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Render the prompt and make exactly one completion call
    pub async fn try_translate(&self, user_input: &str) -> Result<String> {
        let prompt = self.template.render(user_input);
        debug!("Translating request ({} bytes)", user_input.len());
        self.backend.complete(&prompt).await
    }

    /// Translate `user_input`, returning [`FALLBACK_RESPONSE`] on any failure
    ///
    /// Errors are reported on stderr and never propagated.
    pub async fn translate(&self, user_input: &str) -> String {
        match self.try_translate(user_input).await {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "translation failed");
                eprintln!("An error occurred during translation: {}", e);
                FALLBACK_RESPONSE.to_string()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::TranslatorError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Backend that records every prompt and answers from a fixed script
    pub(crate) struct RecordingBackend {
        pub prompts: Mutex<Vec<String>>,
        reply: Option<String>,
    }

    impl RecordingBackend {
        pub(crate) fn replying(reply: &str) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                reply: Some(reply.to_string()),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                reply: None,
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionBackend for RecordingBackend {
        async fn complete(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(TranslatorError::EmptyCompletion),
            }
        }
    }

    #[tokio::test]
    async fn test_translate_returns_reply_verbatim() {
        let reply = "{\"action\": \"set_light_state\", \"location\": \"kitchen\"}";
        let translator = CommandTranslator::new(RecordingBackend::replying(reply));

        let result = translator.translate("turn off the kitchen lights").await;

        assert_eq!(result, reply);
        assert_eq!(translator.backend().calls(), 1);
    }

    #[tokio::test]
    async fn test_translate_passes_invalid_json_through() {
        let reply = "Sure! Here is your command: {action: broken";
        let translator = CommandTranslator::new(RecordingBackend::replying(reply));

        assert_eq!(translator.translate("do something").await, reply);
    }

    #[tokio::test]
    async fn test_translate_sends_rendered_prompt() {
        let translator = CommandTranslator::new(RecordingBackend::replying("{}"));

        translator.translate("set a timer for 5 minutes").await;

        let prompts = translator.backend().prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], PromptTemplate::command().render("set a timer for 5 minutes"));
    }

    #[tokio::test]
    async fn test_translate_failure_returns_fallback() {
        let translator = CommandTranslator::new(RecordingBackend::failing());

        let result = translator.translate("play music").await;

        assert_eq!(result, "{\"error\": \"Failed to generate command.\"}");
        assert_eq!(translator.backend().calls(), 1);
    }

    #[tokio::test]
    async fn test_try_translate_propagates_error() {
        let translator = CommandTranslator::new(RecordingBackend::failing());

        let result = translator.try_translate("play music").await;
        assert!(matches!(result, Err(TranslatorError::EmptyCompletion)));
    }

    #[tokio::test]
    async fn test_empty_input_is_translated() {
        let translator = CommandTranslator::new(RecordingBackend::replying("{}"));

        assert_eq!(translator.translate("").await, "{}");
        assert_eq!(translator.backend().calls(), 1);
    }
}
