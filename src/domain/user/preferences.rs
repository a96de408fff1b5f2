//! Per-user application settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME: &str = "dark";
pub const DEFAULT_MASTER_VOLUME: i32 = 80;
pub const DEFAULT_DIFFICULTY: &str = "Medium";

/// Settings chosen by the trainee. Every field has an independent default.
///
/// Values are stored as given; range checks (volume 0-100, known difficulty
/// tags) belong to whoever writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub theme: String,
    pub voice_commands_enabled: bool,
    pub text_to_speech_enabled: bool,
    pub master_volume: i32,
    pub preferred_difficulty: String,
    pub show_tutorials: bool,
    pub public_statistics: bool,
    pub email_notifications: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            voice_commands_enabled: true,
            text_to_speech_enabled: true,
            master_volume: DEFAULT_MASTER_VOLUME,
            preferred_difficulty: DEFAULT_DIFFICULTY.to_string(),
            show_tutorials: true,
            public_statistics: true,
            email_notifications: true,
        }
    }
}
