//! Dark/light theme preference.
//!
//! The only durable state of the site: one key, `theme`, holding `"dark"` or
//! `"light"`. Storage is abstracted behind [`PreferenceStore`] so the desktop
//! build can keep it in a JSON file and the web build in `localStorage`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{FolioError, FolioResult};

/// Key the theme preference is stored under.
pub const THEME_KEY: &str = "theme";

/// Color scheme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Value written to storage and to the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored value. Anything unrecognised is `None`.
    pub fn from_key(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon on the toggle button: it shows the theme you would switch to.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable string key-value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> FolioResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> FolioResult<()>;
}

/// In-process store, lost on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> FolioResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a small JSON object on disk.
///
/// The file is read on every `get` and rewritten on every `set`; a missing
/// file reads as empty. A file that fails to parse is left alone and both
/// operations report the error.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `preferences.json` inside `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> FolioResult<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> FolioResult<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&values)
            .map_err(|e| FolioError::Store(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// The current theme plus the store it persists to.
///
/// Store failures are logged and swallowed: the page still switches theme,
/// it just won't be remembered.
pub struct ThemeSwitch {
    theme: Theme,
    store: Box<dyn PreferenceStore>,
}

impl fmt::Debug for ThemeSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeSwitch")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl ThemeSwitch {
    /// Read the saved theme, defaulting to dark.
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let theme = match store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::from_key(&value).unwrap_or_else(|| {
                warn!(%value, "unknown saved theme, using default");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Failed to read theme preference: {}", e);
                Theme::default()
            }
        };
        Self { theme, store }
    }

    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        info!(theme = %self.theme, "theme switched");
        if let Err(e) = self.store.set(THEME_KEY, self.theme.as_str()) {
            warn!("Failed to save theme preference: {}", e);
        }
        self.theme
    }
}
