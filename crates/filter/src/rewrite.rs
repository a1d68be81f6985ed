// ABOUTME: Pattern-matching rewrite pass turning Pod video URLs into player frames.
// ABOUTME: Skips already-embedded frames and flattens anchor/video-source wrappers first.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::EffectiveConfig;
use crate::embed::{synthesize, ParamKey};
use crate::error::FilterError;
use crate::html::decode_entities;

// Flattens a hyperlinked or native-video URL down to the bare URL so the
// match pass can wrap it. Greedy across the whole text: when several anchors
// or videos appear in one text the spans can merge and swallow the markup
// between them. Known limitation, kept for compatibility.
static UNWRAP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:<a href="|<video.*><source src=")(.*)(?:">.*</a>|">.*</video>)"#).unwrap()
});

// Capture names for the up-to-four query parameters of a video URL.
const PARAM_SLOTS: [(&str, &str); 4] = [("k1", "v1"), ("k2", "v2"), ("k3", "v3"), ("k4", "v4")];

/// A compiled rewrite pass for one resolved configuration.
///
/// Compiling once and reusing the handle amortizes the host-dependent
/// pattern across texts filtered with the same configuration.
#[derive(Debug)]
pub struct PodFilter {
    config: EffectiveConfig,
    host_probe: AhoCorasick,
    pattern: Regex,
}

impl PodFilter {
    /// Compiles the match machinery for `config`.
    pub fn new(config: EffectiveConfig) -> Result<Self, FilterError> {
        let host_probe = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build([config.hostname.as_str()])?;
        let pattern = Regex::new(&video_url_pattern(&config.hostname))?;
        Ok(Self {
            config,
            host_probe,
            pattern,
        })
    }

    /// The configuration this filter was compiled for.
    pub fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    /// Rewrites every eligible Pod video URL in `text` into player frame
    /// markup. Text without the configured hostname is returned unchanged,
    /// and URLs already inside a frame tag pass through verbatim, so the
    /// pass is a no-op on its own output.
    pub fn rewrite(&self, text: &str) -> String {
        if !self.host_probe.is_match(text) {
            tracing::trace!(host = %self.config.hostname, "host absent, skipping rewrite");
            return text.to_string();
        }

        let decoded = decode_entities(text);
        let unwrapped = UNWRAP_RE.replace_all(&decoded, "$1");

        let mut replaced = 0usize;
        let out = self.pattern.replace_all(&unwrapped, |caps: &Captures| {
            if caps.name("ifr").is_some() {
                // Already embedded.
                return caps[0].to_string();
            }
            replaced += 1;
            synthesize(&caps["pod"], &captured_params(caps), &self.config)
        });
        tracing::debug!(host = %self.config.hostname, replaced, "rewrite pass finished");

        out.into_owned()
    }
}

/// Builds the match pattern for one hostname.
///
/// A match is an optional frame-tag marker (captured as `ifr`), an optional
/// scheme and slashes, the host with a `video`/`video_priv` path (captured
/// as `pod`), and up to four `key=value` query fragments.
fn video_url_pattern(hostname: &str) -> String {
    let host = regex::escape(hostname);
    let mut pattern = format!(
        r#"(?P<ifr>iframe\s+src\s*=\s*")?(?:https?:)?(?://)?(?P<pod>{host}/[A-Za-z0-9/_-]*(?:video|video_priv)/(?:[A-Za-z0-9/_-]+|[A-Za-z0-9_-]+/))"#
    );
    for (key, value) in PARAM_SLOTS {
        // The key prefix is optional here so malformed fragments are still
        // consumed; unrecognized keys are dropped during collection.
        pattern.push_str(&format!(r"(?:(?P<{key}>[?&]?[A-Za-z_]*)=(?P<{value}>[A-Za-z0-9]*))?"));
    }
    pattern
}

/// Collects the recognized parameter captures in source order.
fn captured_params(caps: &Captures) -> Vec<(ParamKey, String)> {
    let mut params = Vec::new();
    for (key_name, value_name) in PARAM_SLOTS {
        let Some(raw_key) = caps.name(key_name) else {
            continue;
        };
        let Some(key) = ParamKey::from_captured(raw_key.as_str()) else {
            continue;
        };
        let value = caps
            .name(value_name)
            .map_or_else(String::new, |m| m.as_str().to_string());
        params.push((key, value));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filter_for(hostname: &str) -> PodFilter {
        PodFilter::new(EffectiveConfig {
            hostname: hostname.into(),
            ..EffectiveConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn text_without_host_is_untouched() {
        let filter = filter_for("pod.example.org");
        let text = "<p>nothing to see &amp; nothing to decode</p>";
        assert_eq!(filter.rewrite(text), text);
    }

    #[test]
    fn host_probe_is_case_insensitive_but_match_is_not() {
        let filter = filter_for("pod.example.org");
        // Passes the containment check, but the pattern itself does not
        // match the uppercase spelling, so the text survives as-is.
        let text = "see POD.EXAMPLE.ORG/video/abc123";
        assert_eq!(filter.rewrite(text), text);
    }

    #[test]
    fn plain_url_becomes_a_frame() {
        let filter = filter_for("pod.example.org");
        let out = filter.rewrite("watch https://pod.example.org/video/abc123 today");
        assert_eq!(
            out,
            "watch <iframe src=\"//pod.example.org/video/abc123?is_iframe=true&size=480\" \
             width=\"854\" height=\"480\" \
             style=\"padding: 0; margin: 0; border: 0\" allowfullscreen></iframe> today"
        );
    }

    #[test]
    fn scheme_and_slashes_are_optional() {
        let filter = filter_for("pod.example.org");
        for url in [
            "pod.example.org/video/abc123",
            "//pod.example.org/video/abc123",
            "http://pod.example.org/video/abc123",
        ] {
            let out = filter.rewrite(url);
            assert!(
                out.starts_with("<iframe src=\"//pod.example.org/video/abc123?is_iframe=true"),
                "unexpected output for {url}: {out}"
            );
        }
    }

    #[test]
    fn private_video_paths_match() {
        let filter = filter_for("pod.example.org");
        let out = filter.rewrite("https://pod.example.org/media/video_priv/xyz-42/");
        assert!(out.contains("src=\"//pod.example.org/media/video_priv/xyz-42/?is_iframe=true"));
    }

    #[test]
    fn encoded_ampersands_are_normalized_before_matching() {
        let filter = filter_for("pod.example.org");
        let out = filter.rewrite("https://pod.example.org/video/abc123?size=720&amp;start=30");
        assert!(out.contains("?is_iframe=true&size=720&start=30\""));
    }

    #[test]
    fn unrecognized_parameters_are_consumed_and_dropped() {
        let filter = filter_for("pod.example.org");
        let out = filter.rewrite("https://pod.example.org/video/abc123?foo=9");
        assert!(out.contains("?is_iframe=true&size=480\""));
        assert!(!out.contains("foo"));
    }

    #[test]
    fn anchored_url_is_flattened_then_framed() {
        let filter = filter_for("pod.example.org");
        let out =
            filter.rewrite("<a href=\"https://pod.example.org/video/abc123\">watch this</a>");
        assert!(out.starts_with("<iframe src=\"//pod.example.org/video/abc123?is_iframe=true"));
        assert!(!out.contains("watch this"));
    }

    #[test]
    fn video_source_is_flattened_then_framed() {
        let filter = filter_for("pod.example.org");
        let out = filter.rewrite(
            "<video controls><source src=\"https://pod.example.org/video/abc123\">no support</video>",
        );
        assert!(out.starts_with("<iframe src=\"//pod.example.org/video/abc123?is_iframe=true"));
        assert!(!out.contains("<video"));
    }

    #[test]
    fn greedy_unwrap_still_frames_both_urls() {
        // Two anchors in one text merge under the greedy unwrap span; both
        // URLs still end up framed, with the inner markup lost.
        let filter = filter_for("pod.example.org");
        let out = filter.rewrite(
            "<a href=\"https://pod.example.org/video/one\">1</a> mid \
             <a href=\"https://pod.example.org/video/two\">2</a>",
        );
        assert_eq!(out.matches("<iframe src=").count(), 2);
    }

    #[test]
    fn existing_frame_is_untouched() {
        let filter = filter_for("pod.example.org");
        let frame = "<iframe src=\"//pod.example.org/video/abc123?is_iframe=true&size=480\" \
                     width=\"854\" height=\"480\" \
                     style=\"padding: 0; margin: 0; border: 0\" allowfullscreen></iframe>";
        assert_eq!(filter.rewrite(frame), frame);
    }

    #[test]
    fn rewrite_is_idempotent() {
        let filter = filter_for("pod.example.org");
        let text = "intro https://pod.example.org/video/abc123?start=30 outro";
        let once = filter.rewrite(text);
        assert_eq!(filter.rewrite(&once), once);
    }
}
