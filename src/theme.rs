//! Theme resources and their loading state
//!
//! Rendering is gated on [`LoadState`]: the splash screen stays up while the
//! theme is loading, and a failed load falls back to [`Theme::default`].

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

/// Colors used by the sign-in screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary button and focus color
    pub accent: Color,
    /// Background of text inputs
    pub input_bg: Color,
    /// Placeholder and hint text
    pub muted: Color,
    /// Error markers
    pub error: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0xb3, 0x7a, 0x4f),
            input_bg: Color::Rgb(0xfa, 0xf6, 0xf3),
            muted: Color::Rgb(0xa1, 0xa1, 0xa1),
            error: Color::Red,
            text: Color::Black,
        }
    }
}

/// On-disk theme, every color optional
#[derive(Debug, Default, Deserialize)]
struct ThemeFile {
    accent: Option<String>,
    input_bg: Option<String>,
    muted: Option<String>,
    error: Option<String>,
    text: Option<String>,
}

impl Theme {
    /// Parse a theme from JSON, keeping defaults for missing colors
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ThemeFile = serde_json::from_str(json).context("Invalid theme file")?;
        let base = Theme::default();

        Ok(Self {
            accent: parse_color(file.accent.as_deref(), base.accent)?,
            input_bg: parse_color(file.input_bg.as_deref(), base.input_bg)?,
            muted: parse_color(file.muted.as_deref(), base.muted)?,
            error: parse_color(file.error.as_deref(), base.error)?,
            text: parse_color(file.text.as_deref(), base.text)?,
        })
    }
}

fn parse_color(value: Option<&str>, fallback: Color) -> Result<Color> {
    match value {
        None => Ok(fallback),
        Some(raw) => Color::from_str(raw).map_err(|_| anyhow!("Invalid color: {raw}")),
    }
}

/// Loading state of an asynchronously loaded resource
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    /// Whether loading has finished, successfully or not
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }
}

impl LoadState<Theme> {
    /// Theme to render with; failures fall back to the default theme
    pub fn theme(&self) -> Theme {
        match self {
            LoadState::Ready(theme) => *theme,
            LoadState::Loading | LoadState::Failed(_) => Theme::default(),
        }
    }
}

/// Source of the theme resource
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThemeLoader: Send + Sync {
    async fn load(&self) -> Result<Theme>;
}

/// Loads `theme.json` from the config directory; a missing file is the default theme
pub struct FileThemeLoader {
    path: Option<PathBuf>,
}

impl FileThemeLoader {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ThemeLoader for FileThemeLoader {
    async fn load(&self) -> Result<Theme> {
        let Some(path) = &self.path else {
            return Ok(Theme::default());
        };

        match tokio::fs::read_to_string(path).await {
            Ok(content) => Theme::from_json(&content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Theme::default()),
            Err(err) => Err(err).with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_json_overrides_only_given_colors() {
        let theme = Theme::from_json(r##"{"accent": "#112233"}"##).unwrap();
        assert_eq!(theme.accent, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.input_bg, Theme::default().input_bg);
        assert_eq!(theme.error, Color::Red);
    }

    #[test]
    fn test_from_json_accepts_named_colors() {
        let theme = Theme::from_json(r#"{"error": "magenta"}"#).unwrap();
        assert_eq!(theme.error, Color::Magenta);
    }

    #[test]
    fn test_from_json_rejects_bad_color() {
        assert!(Theme::from_json(r#"{"accent": "not-a-color"}"#).is_err());
    }

    #[test]
    fn test_from_json_rejects_bad_json() {
        assert!(Theme::from_json("{").is_err());
    }

    #[test]
    fn test_load_state_settled() {
        assert!(!LoadState::<Theme>::Loading.is_settled());
        assert!(LoadState::Ready(Theme::default()).is_settled());
        assert!(LoadState::<Theme>::Failed("boom".to_string()).is_settled());
    }

    #[test]
    fn test_failed_load_falls_back_to_default_theme() {
        let state = LoadState::<Theme>::Failed("boom".to_string());
        assert_eq!(state.theme(), Theme::default());
    }

    #[test]
    fn test_ready_load_uses_loaded_theme() {
        let custom = Theme {
            accent: Color::Blue,
            ..Theme::default()
        };
        assert_eq!(LoadState::Ready(custom).theme().accent, Color::Blue);
    }

    #[tokio::test]
    async fn test_file_loader_missing_file_is_default() {
        let loader = FileThemeLoader::new(Some(
            std::env::temp_dir().join("signin-tui-no-such-theme.json"),
        ));
        assert_eq!(loader.load().await.unwrap(), Theme::default());
    }

    #[test]
    fn test_file_loader_without_path_is_default() {
        let loader = FileThemeLoader::new(None);
        let theme = tokio_test::block_on(loader.load()).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[tokio::test]
    async fn test_file_loader_reads_theme() {
        let path = std::env::temp_dir().join(format!("signin-tui-theme-{}.json", std::process::id()));
        tokio::fs::write(&path, r##"{"muted": "#010203"}"##).await.unwrap();

        let theme = FileThemeLoader::new(Some(path.clone())).load().await.unwrap();
        assert_eq!(theme.muted, Color::Rgb(1, 2, 3));

        let _ = tokio::fs::remove_file(&path).await;
    }
}
