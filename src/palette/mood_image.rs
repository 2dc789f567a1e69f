use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

pub const DEFAULT_MIME: &str = "image/png";

/// Inline image returned by the image backend, still base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodImage {
    pub mime_type: String,
    pub data: String,
}

impl MoodImage {
    pub fn new(mime_type: Option<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MIME.to_string()),
            data: data.into(),
        }
    }

    /// `data:<mime>;base64,<payload>`, the form the image is handed out in.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    pub fn bytes(&self) -> anyhow::Result<Vec<u8>> {
        BASE64_STANDARD
            .decode(self.data.trim())
            .context("decode base64 image payload")
    }

    /// Approximate decoded size, for status lines.
    pub fn approx_len(&self) -> usize {
        self.data.len() / 4 * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mime() {
        assert_eq!(MoodImage::new(None, "AAAA").mime_type, "image/png");
        assert_eq!(MoodImage::new(Some(" ".into()), "AAAA").mime_type, "image/png");
        let jpeg = MoodImage::new(Some("image/jpeg".into()), "AAAA");
        assert_eq!(jpeg.mime_type, "image/jpeg");
    }

    #[test]
    fn test_data_uri() {
        let img = MoodImage::new(None, "AAAA");
        assert_eq!(img.data_uri(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_bytes() {
        let img = MoodImage::new(None, BASE64_STANDARD.encode([1u8, 2, 3]));
        assert_eq!(img.bytes().unwrap(), vec![1, 2, 3]);
        assert!(MoodImage::new(None, "%%%").bytes().is_err());
    }
}
