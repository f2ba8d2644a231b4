//! OpenAI-backed language collaborators.
//!
//! - [`OpenAiUnderstandingAgent`]: intent classification and condition
//!   extraction over the Chat Completions API in JSON mode
//! - [`WhisperTranscriber`]: speech-to-text over the audio transcription API

mod http;
pub mod prompts;
pub mod understanding_agent;
pub mod whisper_transcriber;

pub use understanding_agent::OpenAiUnderstandingAgent;
pub use whisper_transcriber::WhisperTranscriber;
