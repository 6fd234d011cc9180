use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech recognition could not start: {0}")]
    Start(String),
}

/// Locale-aware speech-to-text. Results come back through
/// [`ChatController::handle_transcript`](super::ChatController::handle_transcript).
pub trait SpeechRecognizer: Send + Sync {
    fn start(&self, language: &str) -> Result<(), SpeechError>;
}

/// Locale-aware text-to-speech. Playback is fire-and-forget.
pub trait SpeechSynthesizer: Send + Sync {
    fn speak(&self, text: &str, language: &str);
}

/// Optional speech services, detected once at startup and read-only afterwards.
#[derive(Clone, Default)]
pub struct Capabilities {
    recognition: Option<Arc<dyn SpeechRecognizer>>,
    synthesis: Option<Arc<dyn SpeechSynthesizer>>,
}

impl Capabilities {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_recognition(mut self, recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        self.recognition = Some(recognizer);
        self
    }

    pub fn with_synthesis(mut self, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        self.synthesis = Some(synthesizer);
        self
    }

    pub fn can_listen(&self) -> bool {
        self.recognition.is_some()
    }

    pub fn can_speak(&self) -> bool {
        self.synthesis.is_some()
    }

    pub(crate) fn recognizer(&self) -> Option<&dyn SpeechRecognizer> {
        self.recognition.as_deref()
    }

    pub(crate) fn synthesizer(&self) -> Option<&dyn SpeechSynthesizer> {
        self.synthesis.as_deref()
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("speech_recognition", &self.can_listen())
            .field("speech_synthesis", &self.can_speak())
            .finish()
    }
}
