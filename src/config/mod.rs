use crate::i18n::Language;
use anyhow::Context;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub ui: UiConfig,
    pub paths: PathsConfig,
    pub input: InputConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Name of the environment variable holding the API key.
    /// The key itself is never written to the config file.
    pub api_key_env: String,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    /// Request timeout; unset leaves it to the transport.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Output and interface language (restored on startup)
    pub language: Language,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
    /// Where exported PNG files are written.
    pub export_dir: PathBuf,
    /// TrueType/OpenType font for board text, tried before system fonts.
    pub font: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of trace, debug, info, warn, error.
    pub level: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: defaults::API_KEY_ENV.to_string(),
            base_url: defaults::BASE_URL.to_string(),
            text_model: defaults::TEXT_MODEL.to_string(),
            image_model: defaults::IMAGE_MODEL.to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let data_dir = project_dirs()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("moodpal"));
        let export_dir = UserDirs::new()
            .and_then(|u| u.picture_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            data_dir,
            export_dir,
            font: None,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    pub fn level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "moodpal", "moodpal")
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = project_dirs().context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    write_private(&path, &raw)
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        let raw = toml::to_string_pretty(&cfg).context("serialize default config")?;
        write_private(&path, &raw)?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

fn write_private(path: &Path, raw: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.gemini.text_model, defaults::TEXT_MODEL);
        assert_eq!(cfg.gemini.api_key_env, defaults::API_KEY_ENV);
        assert_eq!(cfg.ui.language, Language::ZhTw);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[ui]\nlanguage = \"ja\"\n\n[gemini]\ntimeout_secs = 30\n\n[paths]\nfont = \"/fonts/board.ttf\"\n",
        )
        .unwrap();
        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.ui.language, Language::Ja);
        assert_eq!(cfg.gemini.timeout_secs, Some(30));
        assert_eq!(cfg.gemini.image_model, defaults::IMAGE_MODEL);
        assert!(cfg.input.mouse);
        assert_eq!(cfg.paths.font.as_deref(), Some(Path::new("/fonts/board.ttf")));
        assert!(!cfg.paths.export_dir.as_os_str().is_empty());
    }

    #[test]
    fn save_then_load_keeps_language() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = defaults::defaults();
        cfg.ui.language = Language::Ko;
        save(&cfg, Some(&path)).unwrap();
        assert_eq!(load(Some(&path)).unwrap().ui.language, Language::Ko);
    }

    #[test]
    fn unknown_log_level_means_info() {
        let log = LogConfig {
            level: "chatty".into(),
        };
        assert_eq!(log.level(), tracing::Level::INFO);
        let log = LogConfig {
            level: "debug".into(),
        };
        assert_eq!(log.level(), tracing::Level::DEBUG);
    }
}
