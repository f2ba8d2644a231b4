//! WhisperTranscriber - speech-to-text over the OpenAI audio transcription API.

use crate::http::{endpoint, ensure_success, request_failed};
use async_trait::async_trait;
use fridgechef_core::config::OpenAiConfig;
use fridgechef_core::error::{FridgeError, Result};
use fridgechef_core::understanding::Transcriber;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

const SERVICE: &str = "transcription";
const LANGUAGE: &str = "ko";

pub struct WhisperTranscriber {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    file_name: String,
    mime_type: String,
}

impl WhisperTranscriber {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: fridgechef_core::config::DEFAULT_OPENAI_BASE_URL.to_string(),
            file_name: "speech.webm".to_string(),
            mime_type: "audio/webm".to_string(),
        }
    }

    pub fn from_config(config: &OpenAiConfig) -> Result<Self> {
        let api_key = config.api_key.as_deref().ok_or_else(|| {
            FridgeError::config(
                "OpenAI API key not found in config.toml or OPENAI_API_KEY".to_string(),
            )
        })?;
        Ok(Self::new(api_key, config.transcription_model.clone())
            .with_base_url(config.base_url.clone()))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the upload file name and MIME type; the API infers the codec from them.
    pub fn with_audio_format(
        mut self,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        self.file_name = file_name.into();
        self.mime_type = mime_type.into();
        self
    }

    fn form(&self, audio: Vec<u8>) -> Result<Form> {
        let file = Part::bytes(audio)
            .file_name(self.file_name.clone())
            .mime_str(&self.mime_type)
            .map_err(|err| request_failed(SERVICE, err))?;
        Ok(Form::new()
            .text("model", self.model.clone())
            .text("language", LANGUAGE)
            .part("file", file))
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, audio: Vec<u8>) -> Result<String> {
        if audio.is_empty() {
            return Err(FridgeError::NoSpeechDetected);
        }

        let response = self
            .client
            .post(endpoint(&self.base_url, "audio/transcriptions"))
            .bearer_auth(&self.api_key)
            .multipart(self.form(audio)?)
            .send()
            .await
            .map_err(|err| request_failed(SERVICE, err))?;
        let response = ensure_success(SERVICE, response).await?;

        let parsed: TranscriptionResponse = response.json().await.map_err(|err| {
            FridgeError::collaborator(SERVICE, format!("Failed to parse transcription: {err}"))
        })?;
        transcript_text(parsed)
    }
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

fn transcript_text(response: TranscriptionResponse) -> Result<String> {
    let text = response.text.trim();
    if text.is_empty() {
        return Err(FridgeError::NoSpeechDetected);
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_audio_is_no_speech() {
        let transcriber = WhisperTranscriber::new("sk-test", "whisper-1");
        let err = transcriber.transcribe(Vec::new()).await.unwrap_err();
        assert!(matches!(err, FridgeError::NoSpeechDetected));
    }

    #[test]
    fn test_blank_transcript_is_no_speech() {
        let err = transcript_text(TranscriptionResponse {
            text: "  \n".to_string(),
        })
        .unwrap_err();
        assert!(matches!(err, FridgeError::NoSpeechDetected));

        let text = transcript_text(TranscriptionResponse {
            text: " 다음 단계 ".to_string(),
        })
        .unwrap();
        assert_eq!(text, "다음 단계");
    }

    #[test]
    fn test_invalid_mime_type_is_rejected() {
        let transcriber =
            WhisperTranscriber::new("sk-test", "whisper-1").with_audio_format("a.wav", "not a mime");
        assert!(transcriber.form(vec![1, 2, 3]).is_err());
    }
}
