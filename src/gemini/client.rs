use super::error::GenerateError;
use super::models::{
    ErrorWrapper, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use super::prompt;
use crate::config::GeminiConfig;
use crate::i18n::Language;
use crate::palette::{MoodImage, Palette, PaletteDraft};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::sync::Arc;
use std::time::Instant;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug)]
struct Inner {
    http: reqwest::Client,
    base_url: String,
    text_model: String,
    image_model: String,
}

/// Client for the text and image generation backends. Cheap to clone.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    inner: Arc<Inner>,
}

impl GeminiClient {
    /// Reads the key from the environment variable named in config.
    /// A missing or blank key is a configuration error.
    pub fn from_env(cfg: &GeminiConfig) -> Result<Self, GenerateError> {
        let key = std::env::var(&cfg.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| GenerateError::MissingApiKey(cfg.api_key_env.clone()))?;
        Self::new(cfg, &key)
    }

    pub fn new(cfg: &GeminiConfig, api_key: &str) -> Result<Self, GenerateError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(api_key.trim())
            .map_err(|_| GenerateError::MissingApiKey(cfg.api_key_env.clone()))?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url: cfg.base_url.trim_end_matches('/').to_string(),
                text_model: cfg.text_model.clone(),
                image_model: cfg.image_model.clone(),
            }),
        })
    }

    /// Ask the text model for a palette matching `mood`, in `language`.
    pub async fn generate_palette(
        &self,
        mood: &str,
        language: Language,
    ) -> Result<PaletteDraft, GenerateError> {
        if mood.trim().is_empty() {
            return Err(GenerateError::EmptyMood);
        }
        let request = GenerateContentRequest::text(prompt::palette_prompt(mood, language))
            .with_config(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: prompt::palette_schema(),
            });

        let started = Instant::now();
        let response = self.generate(&self.inner.text_model, &request).await?;
        let draft = response
            .palette_draft()
            .inspect_err(|e| tracing::error!("failed to read palette reply: {e}"))?;
        tracing::info!(
            name = %draft.name,
            lang = language.code(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "palette generated"
        );
        Ok(draft)
    }

    /// Paint an image constrained to the palette's colors.
    pub async fn generate_image(
        &self,
        palette: &Palette,
        keywords: Option<&str>,
    ) -> Result<MoodImage, GenerateError> {
        let request = GenerateContentRequest::text(prompt::image_prompt(palette, keywords));
        let started = Instant::now();
        let response = self.generate(&self.inner.image_model, &request).await?;
        let image = response.first_image().ok_or(GenerateError::NoImage)?;
        tracing::info!(
            palette = %palette.id,
            bytes = image.approx_len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "mood image generated"
        );
        Ok(image)
    }

    async fn generate(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerateError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.inner.base_url,
            urlencoding::encode(model)
        );
        tracing::debug!(%model, "sending generateContent");

        let response = self.inner.http.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }
        response
            .json()
            .await
            .map_err(|e| GenerateError::Decode(format!("response envelope: {e}")))
    }
}

fn api_error(status: u16, body: &str) -> GenerateError {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .map(|w| {
            let msg = w.error.message.unwrap_or_else(|| body.to_string());
            match w.error.status.filter(|s| !s.is_empty()) {
                Some(s) => format!("{s}: {msg}"),
                None => msg,
            }
        })
        .unwrap_or_else(|_| body.trim().to_string());
    GenerateError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> GeminiConfig {
        GeminiConfig {
            api_key_env: "MOODPAL_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..GeminiConfig::default()
        }
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let err = GeminiClient::from_env(&cfg()).unwrap_err();
        assert_eq!(
            err,
            GenerateError::MissingApiKey("MOODPAL_TEST_KEY_THAT_IS_NEVER_SET".into())
        );
    }

    #[test]
    fn api_error_prefers_structured_body() {
        let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            api_error(400, body),
            GenerateError::Api {
                status: 400,
                message: "INVALID_ARGUMENT: API key not valid".into()
            }
        );
        assert_eq!(
            api_error(502, " bad gateway "),
            GenerateError::Api {
                status: 502,
                message: "bad gateway".into()
            }
        );
    }

    #[tokio::test]
    async fn empty_mood_never_reaches_the_network() {
        let client = GeminiClient::new(&cfg(), "test-key").unwrap();
        let err = client.generate_palette("   ", Language::En).await.unwrap_err();
        assert_eq!(err, GenerateError::EmptyMood);
    }
}
