//! Style preset configuration loaded from YAML.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ColorName, ColorSelector, Error, FormatAttribute, Palette256Index, Result, Style};

/// Named style presets.
///
/// ```yaml
/// styles:
///   warning: { color: yellow, format: bold }
///   muted:   { palette: 244 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StyleConfig {
    /// Presets keyed by name
    pub styles: BTreeMap<String, StyleSpec>,
}

impl StyleConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: StyleConfig =
            serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate that every preset resolves.
    pub fn validate(&self) -> Result<()> {
        for (name, spec) in &self.styles {
            spec.resolve()
                .map_err(|e| Error::Config(format!("styles.{name}: {e}")))?;
        }
        Ok(())
    }

    /// Resolve the preset called `name`, if present.
    pub fn style(&self, name: &str) -> Result<Option<Style>> {
        self.styles.get(name).map(StyleSpec::resolve).transpose()
    }
}

/// One preset as written in configuration, with names still unresolved.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StyleSpec {
    /// Foreground color name
    pub color: Option<String>,
    /// Format name; attaches to `color` when present, standalone otherwise
    pub format: Option<String>,
    /// Background color name
    pub background: Option<String>,
    /// Format attached to the background (Normal when omitted)
    pub background_format: Option<String>,
    /// 256-color foreground index
    pub palette: Option<u8>,
    /// 256-color background index
    pub palette_background: Option<u8>,
}

impl StyleSpec {
    /// Resolve names into a [`Style`].
    pub fn resolve(&self) -> Result<Style> {
        let format = parse_optional::<FormatAttribute>(self.format.as_deref())?;
        let background_format =
            parse_optional::<FormatAttribute>(self.background_format.as_deref())?
                .unwrap_or_default();

        let mut style = Style::new();
        match parse_optional::<ColorName>(self.color.as_deref())? {
            Some(color) => {
                style.foreground = Some(ColorSelector::new(color, format.unwrap_or_default()));
            }
            None => style.format = format,
        }
        style.background = parse_optional::<ColorName>(self.background.as_deref())?
            .map(|color| ColorSelector::new(color, background_format));
        style.palette = self.palette.map(Palette256Index);
        style.palette_background = self.palette_background.map(Palette256Index);
        Ok(style)
    }
}

fn parse_optional<T>(name: Option<&str>) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = Error>,
{
    name.map(str::parse).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StyleConfig::default();
        assert!(config.styles.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
styles:
  warning:
    color: yellow
    format: bold
  error:
    color: RED
    format: bright
    background: black
  muted:
    palette: 244
  banner:
    format: reverse
    palette_background: 17
"#;

        let config = StyleConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.styles.len(), 4);

        let warning = config.style("warning").unwrap().unwrap();
        assert_eq!(
            warning.foreground,
            Some(ColorSelector::new(ColorName::Yellow, FormatAttribute::Bright))
        );
        assert_eq!(warning.format, None);

        let error = config.style("error").unwrap().unwrap();
        assert_eq!(error.background, Some(ColorSelector::plain(ColorName::Black)));

        let muted = config.style("muted").unwrap().unwrap();
        assert_eq!(muted.palette, Some(Palette256Index(244)));

        let banner = config.style("banner").unwrap().unwrap();
        assert_eq!(banner.format, Some(FormatAttribute::Reverse));
        assert_eq!(banner.palette_background, Some(Palette256Index(17)));
    }

    #[test]
    fn test_missing_style() {
        let config = StyleConfig::default();
        assert!(config.style("nope").unwrap().is_none());
    }

    #[test]
    fn test_unknown_color_rejected() {
        let yaml = r#"
styles:
  alert:
    color: teal
"#;
        let err = StyleConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("styles.alert"));
        assert!(err.to_string().contains("teal"));
    }

    #[test]
    fn test_default_color_name_rejected() {
        let spec = StyleSpec {
            background: Some("default".to_string()),
            ..Default::default()
        };
        assert!(matches!(spec.resolve(), Err(Error::UnknownColor(_))));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let spec = StyleSpec {
            format: Some("italic".to_string()),
            ..Default::default()
        };
        assert!(matches!(spec.resolve(), Err(Error::UnknownFormat(_))));
    }

    #[test]
    fn test_palette_out_of_range_is_yaml_error() {
        let yaml = "styles:\n  big:\n    palette: 300\n";
        assert!(matches!(StyleConfig::from_yaml(yaml), Err(Error::Config(_))));
    }

    #[test]
    fn test_background_format() {
        let spec = StyleSpec {
            background: Some("magenta".to_string()),
            background_format: Some("bold".to_string()),
            ..Default::default()
        };
        let style = spec.resolve().unwrap();
        assert_eq!(
            style.background,
            Some(ColorSelector::new(ColorName::Magenta, FormatAttribute::Bright))
        );
        assert_eq!(style.codes(), "\x1b[105");
    }
}
