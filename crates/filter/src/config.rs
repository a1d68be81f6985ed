// ABOUTME: Configuration records and precedence resolution for the Pod filter.
// ABOUTME: Resolves hostname and player dimensions across layered override sources.

use serde::{Deserialize, Serialize};

/// Pod server hostname used when no layer configures one.
pub const DEFAULT_HOSTNAME: &str = "pod.univ-lille.fr";
/// Default video quality requested from the player.
pub const DEFAULT_SIZE: u32 = 480;
/// Default player width in pixels.
pub const DEFAULT_WIDTH: u32 = 854;
/// Default player height in pixels.
pub const DEFAULT_HEIGHT: u32 = 480;
/// Player width used for interactive videos.
pub const DEFAULT_INTERACTIVE_WIDTH: u32 = 625;
/// Player height used for interactive videos.
pub const DEFAULT_INTERACTIVE_HEIGHT: u32 = 530;

/// Fully resolved configuration for one filter invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveConfig {
    pub hostname: String,
    pub size: u32,
    pub width: u32,
    pub height: u32,
    pub interactive_width: u32,
    pub interactive_height: u32,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            size: DEFAULT_SIZE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            interactive_width: DEFAULT_INTERACTIVE_WIDTH,
            interactive_height: DEFAULT_INTERACTIVE_HEIGHT,
        }
    }
}

/// Per-invocation override, e.g. from an activity's local filter settings.
/// A present field wins over every other layer, including explicit zeros.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOverride {
    pub url: Option<String>,
    pub size: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub interactive_width: Option<u32>,
    pub interactive_height: Option<u32>,
}

/// Override stored against a context. The storage schema carries four keys;
/// a missing key inherits from the next layer down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    pub url: Option<String>,
    pub size: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Process-wide defaults set by the administrator. Empty or zero values are
/// treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub url: Option<String>,
    pub size: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl GlobalSettings {
    fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    fn dimension(value: Option<u32>) -> Option<u32> {
        value.filter(|&v| v != 0)
    }
}

/// Resolves the effective configuration for one invocation.
///
/// Each field falls through independently: local override, then context
/// override, then global settings, then `builtin`. The interactive
/// dimensions exist only in the local and builtin layers. Resolution never
/// fails.
pub fn resolve(
    builtin: &EffectiveConfig,
    global: &GlobalSettings,
    context: Option<&ContextConfig>,
    local: Option<&ConfigOverride>,
) -> EffectiveConfig {
    let hostname = local
        .and_then(|l| l.url.clone())
        .or_else(|| context.and_then(|c| c.url.clone()))
        .or_else(|| global.url().map(str::to_string))
        .unwrap_or_else(|| builtin.hostname.clone());

    let size = local
        .and_then(|l| l.size)
        .or_else(|| context.and_then(|c| c.size))
        .or_else(|| GlobalSettings::dimension(global.size))
        .unwrap_or(builtin.size);

    let width = local
        .and_then(|l| l.width)
        .or_else(|| context.and_then(|c| c.width))
        .or_else(|| GlobalSettings::dimension(global.width))
        .unwrap_or(builtin.width);

    let height = local
        .and_then(|l| l.height)
        .or_else(|| context.and_then(|c| c.height))
        .or_else(|| GlobalSettings::dimension(global.height))
        .unwrap_or(builtin.height);

    let interactive_width = local
        .and_then(|l| l.interactive_width)
        .unwrap_or(builtin.interactive_width);

    let interactive_height = local
        .and_then(|l| l.interactive_height)
        .unwrap_or(builtin.interactive_height);

    EffectiveConfig {
        hostname,
        size,
        width,
        height,
        interactive_width,
        interactive_height,
    }
}
