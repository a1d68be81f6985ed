// ABOUTME: Admin form field model for per-activity filter settings.
// ABOUTME: Sanitizes raw text fields and converts them into a typed override.

use crate::config::ConfigOverride;
use crate::error::SettingsError;
use crate::html::strip_tags;

/// Raw values of the local settings form fields, as submitted. All four are
/// free-text inputs; empty means "inherit".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalSettings {
    pub url: Option<String>,
    pub size: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl LocalSettings {
    /// Sanitizes and validates the fields into a typed override. Markup is
    /// stripped from every field, blank fields become unset, and dimension
    /// fields must hold whole numbers.
    pub fn into_override(self) -> Result<ConfigOverride, SettingsError> {
        Ok(ConfigOverride {
            url: self.url.map(|v| sanitize(&v)).filter(|v| !v.is_empty()),
            size: parse_dimension("size", self.size)?,
            width: parse_dimension("width", self.width)?,
            height: parse_dimension("height", self.height)?,
            ..ConfigOverride::default()
        })
    }
}

fn sanitize(value: &str) -> String {
    strip_tags(value).trim().to_string()
}

fn parse_dimension(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<u32>, SettingsError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let value = sanitize(&value);
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<u32>()
        .map(Some)
        .map_err(|_| SettingsError::InvalidDimension { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_form_is_an_empty_override() {
        let over = LocalSettings::default().into_override().unwrap();
        assert_eq!(over, ConfigOverride::default());
    }

    #[test]
    fn fields_are_sanitized_and_parsed() {
        let settings = LocalSettings {
            url: Some("  <b>pod.example.org</b> ".into()),
            size: Some("720".into()),
            width: Some(" 1280 ".into()),
            height: None,
        };
        let over = settings.into_override().unwrap();
        assert_eq!(over.url.as_deref(), Some("pod.example.org"));
        assert_eq!(over.size, Some(720));
        assert_eq!(over.width, Some(1280));
        assert_eq!(over.height, None);
    }

    #[test]
    fn blank_fields_are_unset() {
        let settings = LocalSettings {
            url: Some("   ".into()),
            size: Some("".into()),
            ..LocalSettings::default()
        };
        let over = settings.into_override().unwrap();
        assert_eq!(over.url, None);
        assert_eq!(over.size, None);
    }

    #[test]
    fn non_numeric_dimension_is_rejected() {
        let settings = LocalSettings {
            height: Some("tall".into()),
            ..LocalSettings::default()
        };
        let err = settings.into_override().unwrap_err();
        assert_eq!(
            err.to_string(),
            "height must be a whole number of pixels, got \"tall\""
        );
    }
}
