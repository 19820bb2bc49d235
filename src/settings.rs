//! Player-facing settings, persisted to localStorage as JSON.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const SETTINGS_KEY: &str = "ttt_settings";
pub const DEFAULT_PLAYER_ONE: &str = "Kit";
pub const DEFAULT_PLAYER_TWO: &str = "Nekit";
pub const MAX_NAME_CHARS: usize = 24;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player_one: String,
    pub player_two: String,
    /// Draw a line through the winning cells before the result popup.
    pub show_win_line: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_one: DEFAULT_PLAYER_ONE.to_string(),
            player_two: DEFAULT_PLAYER_TWO.to_string(),
            show_win_line: true,
        }
    }
}

/// Trims `raw`, caps it at `MAX_NAME_CHARS` and falls back to `default` when blank.
pub fn sanitize_name(raw: &str, default: &str) -> String {
    let trimmed: String = raw.trim().chars().take(MAX_NAME_CHARS).collect();
    let trimmed = trimmed.trim_end();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

impl Settings {
    pub fn sanitized(self) -> Self {
        Self {
            player_one: sanitize_name(&self.player_one, DEFAULT_PLAYER_ONE),
            player_two: sanitize_name(&self.player_two, DEFAULT_PLAYER_TWO),
            ..self
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str::<Settings>(raw)
            .map(Settings::sanitized)
            .map_err(|e| AppError::Settings {
                reason: e.to_string(),
            })
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self).map_err(|e| AppError::Settings {
            reason: e.to_string(),
        })
    }

    /// Reads saved settings. `Ok(None)` when nothing has been saved yet.
    pub fn load() -> Result<Option<Self>, AppError> {
        let store = local_storage()?;
        match store.get_item(SETTINGS_KEY) {
            Ok(Some(raw)) => Self::from_json(&raw).map(Some),
            Ok(None) => Ok(None),
            Err(_) => Err(AppError::Storage {
                reason: format!("cannot read {SETTINGS_KEY}"),
            }),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        let raw = self.to_json()?;
        local_storage()?
            .set_item(SETTINGS_KEY, &raw)
            .map_err(|_| AppError::Storage {
                reason: format!("cannot write {SETTINGS_KEY}"),
            })
    }
}

fn local_storage() -> Result<web_sys::Storage, AppError> {
    let win = web_sys::window().ok_or(AppError::NoWindow)?;
    match win.local_storage() {
        Ok(Some(store)) => Ok(store),
        _ => Err(AppError::Storage {
            reason: "localStorage is disabled".to_string(),
        }),
    }
}
