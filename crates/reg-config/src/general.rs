//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_render_after_add() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Whether `regctl add` regenerates the document after a successful append.
    #[serde(default = "default_render_after_add")]
    pub render_after_add: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            render_after_add: default_render_after_add(),
        }
    }
}
