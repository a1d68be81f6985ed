// ABOUTME: Player frame synthesis from a matched Pod URL and its parameters.
// ABOUTME: Applies captured query parameters over configured defaults in source order.

use crate::config::EffectiveConfig;

/// Query parameters recognized in a Pod video URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKey {
    Start,
    Size,
    Autoplay,
    Interactive,
}

impl ParamKey {
    /// Maps a captured key to a known parameter. Only the `?`- and
    /// `&`-prefixed spellings count; anything else is consumed and dropped.
    pub fn from_captured(raw: &str) -> Option<Self> {
        let name = raw.strip_prefix('?').or_else(|| raw.strip_prefix('&'))?;
        match name {
            "start" => Some(Self::Start),
            "size" => Some(Self::Size),
            "autoplay" => Some(Self::Autoplay),
            "interactive" => Some(Self::Interactive),
            _ => None,
        }
    }
}

/// Builds the player frame markup for a matched Pod URL.
///
/// Parameters apply in the order they were captured, so a later occurrence
/// of a key wins. `interactive=true` switches the frame to the interactive
/// dimensions; a later non-`true` value replaces the query fragment but the
/// dimensions stay switched.
pub fn synthesize(
    pod_url: &str,
    params: &[(ParamKey, String)],
    config: &EffectiveConfig,
) -> String {
    let mut size = format!("&size={}", config.size);
    let mut width = config.width;
    let mut height = config.height;
    let mut start = String::new();
    let mut autoplay = String::new();
    let mut interactive = String::new();

    for (key, value) in params {
        match key {
            ParamKey::Start => start = format!("&start={value}"),
            ParamKey::Size => size = format!("&size={value}"),
            ParamKey::Autoplay => autoplay = format!("&autoplay={value}"),
            ParamKey::Interactive => {
                interactive = format!("&interactive={value}");
                if value == "true" {
                    width = config.interactive_width;
                    height = config.interactive_height;
                }
            }
        }
    }

    format!(
        "<iframe src=\"//{pod_url}?is_iframe=true{size}{start}{autoplay}{interactive}\" \
         width=\"{width}\" height=\"{height}\" \
         style=\"padding: 0; margin: 0; border: 0\" allowfullscreen></iframe>"
    )
}
