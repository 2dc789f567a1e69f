//! Wire types for the `generateContent` endpoint and the palette reply

use super::error::GenerateError;
use crate::palette::{hex, Color, MoodImage, PaletteDraft, PALETTE_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    pub fn text(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: None,
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: Option<String>,
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorWrapper {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub status: Option<String>,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[ResponsePart] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or_default()
    }

    /// Joined text of the first candidate; `None` when there is none.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .first_parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }

    /// Text reply decoded and validated into a palette draft.
    pub fn palette_draft(&self) -> Result<PaletteDraft, GenerateError> {
        let text = self.text().ok_or(GenerateError::EmptyReply)?;
        GeneratePaletteResponse::parse(&text)?.validate()
    }

    /// First inline image of the first candidate.
    pub fn first_image(&self) -> Option<MoodImage> {
        self.first_parts()
            .iter()
            .find_map(|p| p.inline_data.as_ref())
            .map(|d| MoodImage::new(d.mime_type.clone(), d.data.clone()))
    }
}

/// Structured palette reply, exactly as the schema asks for it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePaletteResponse {
    pub name: String,
    pub description: String,
    pub design_advice: String,
    pub colors: Vec<Color>,
}

impl GeneratePaletteResponse {
    pub fn parse(raw: &str) -> Result<Self, GenerateError> {
        serde_json::from_str(raw.trim()).map_err(|e| GenerateError::Decode(e.to_string()))
    }

    /// Enforce what the schema only requests: five well-formed colors and a name.
    pub fn validate(self) -> Result<PaletteDraft, GenerateError> {
        if self.name.trim().is_empty() {
            return Err(GenerateError::Decode("palette name is blank".into()));
        }
        let count = self.colors.len();
        let mut colors = Vec::with_capacity(count);
        for (i, c) in self.colors.into_iter().enumerate() {
            let hex_value = hex::normalize_input(c.hex.trim());
            if !hex::is_valid(&hex_value) {
                return Err(GenerateError::Decode(format!(
                    "color {} has invalid hex {:?}",
                    i + 1,
                    c.hex
                )));
            }
            colors.push(Color::new(hex_value, c.name));
        }
        let colors: [Color; PALETTE_SIZE] = colors.try_into().map_err(|_| {
            GenerateError::Decode(format!("expected {PALETTE_SIZE} colors, got {count}"))
        })?;
        Ok(PaletteDraft {
            name: self.name,
            description: self.description,
            design_advice: self.design_advice,
            colors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = r##"{
        "name": "Calm Morning",
        "description": "Soft light on wet sand",
        "designAdvice": "Use the sand tone for backgrounds",
        "colors": [
            {"hex": "#F4E9D8", "name": "Sand"},
            {"hex": "#BFD7EA", "name": "Sky"},
            {"hex": "8AB6D6", "name": "Shallows"},
            {"hex": "#5A8FB8", "name": "Tide"},
            {"hex": "#2E4A62", "name": "Deep"}
        ]
    }"##;

    #[test]
    fn test_valid_reply() {
        let draft = GeneratePaletteResponse::parse(GOOD).unwrap().validate().unwrap();
        assert_eq!(draft.name, "Calm Morning");
        assert_eq!(draft.design_advice, "Use the sand tone for backgrounds");
        assert_eq!(draft.colors[2].hex, "#8AB6D6");
        assert!(draft.colors.iter().all(|c| hex::is_valid(&c.hex)));
    }

    #[test]
    fn test_wrong_color_count() {
        let raw = r##"{"name":"x","description":"d","designAdvice":"a",
            "colors":[{"hex":"#000000","name":"a"},{"hex":"#111111","name":"b"}]}"##;
        let err = GeneratePaletteResponse::parse(raw).unwrap().validate().unwrap_err();
        assert_eq!(err, GenerateError::Decode("expected 5 colors, got 2".into()));
    }

    #[test]
    fn test_missing_field() {
        let raw = r#"{"name":"x","description":"d","colors":[]}"#;
        assert!(matches!(
            GeneratePaletteResponse::parse(raw),
            Err(GenerateError::Decode(_))
        ));
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            GeneratePaletteResponse::parse("Sure! Here is a palette"),
            Err(GenerateError::Decode(_))
        ));
    }

    #[test]
    fn test_bad_hex() {
        let raw = GOOD.replace("#5A8FB8", "blue");
        let err = GeneratePaletteResponse::parse(&raw).unwrap().validate().unwrap_err();
        assert!(matches!(err, GenerateError::Decode(msg) if msg.contains("color 4")));
    }

    #[test]
    fn test_response_text_and_image() {
        let raw = r#"{"candidates":[{"content":{"parts":[
            {"text":"first "},
            {"inlineData":{"mimeType":"image/png","data":"AAAA"}},
            {"text":"second"},
            {"inlineData":{"mimeType":"image/png","data":"BBBB"}}
        ]}}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.text().as_deref(), Some("first second"));
        assert_eq!(resp.first_image().unwrap().data, "AAAA");
    }

    fn envelope(text: &str) -> GenerateContentResponse {
        serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": text}]}}]
        }))
        .unwrap()
    }

    #[test]
    fn test_palette_draft_from_envelope() {
        let draft = envelope(GOOD).palette_draft().unwrap();
        assert_eq!(draft.name, "Calm Morning");
        assert_eq!(draft.colors[0].name, "Sand");
        assert_eq!(draft.colors[2].hex, "#8AB6D6");
    }

    #[test]
    fn test_palette_draft_failures() {
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.palette_draft().unwrap_err(), GenerateError::EmptyReply);
        assert_eq!(envelope("  ").palette_draft().unwrap_err(), GenerateError::EmptyReply);
        assert!(matches!(
            envelope("not json").palette_draft(),
            Err(GenerateError::Decode(_))
        ));
        let four = GOOD.replace(r##"{"hex": "#2E4A62", "name": "Deep"}"##, "")
            .replace(r##""Tide"},"##, r##""Tide"}"##);
        assert_eq!(
            envelope(&four).palette_draft().unwrap_err(),
            GenerateError::Decode("expected 5 colors, got 4".into())
        );
    }

    #[test]
    fn test_empty_response() {
        let resp: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(resp.text().is_none());
        assert!(resp.first_image().is_none());
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.text().is_none());
    }

    #[test]
    fn test_request_shape() {
        let req = GenerateContentRequest::text("hi".into()).with_config(GenerationConfig {
            response_mime_type: "application/json".into(),
            response_schema: serde_json::json!({"type": "OBJECT"}),
        });
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(v["generationConfig"]["responseMimeType"], "application/json");
        let plain = serde_json::to_value(GenerateContentRequest::text("x".into())).unwrap();
        assert!(plain.get("generationConfig").is_none());
    }
}
