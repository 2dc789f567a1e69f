use super::Config;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const TEXT_MODEL: &str = "gemini-2.5-flash";
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

pub fn defaults() -> Config {
    Config::default()
}
