//! Configuration file discovery, parsing, and resolution.
//!
//! The TOML structs here mirror the file with `Option` fields and stay
//! private. [`TurnstileConfig::resolve`] validates them into a
//! [`Renderer`], so nothing downstream ever sees a half-valid setting.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use turnstile_render::{
    AutoWidth, BinaryTemplate, NullaryTemplate, Renderer, RuleGlyph, RuleLabels, Theme,
    ThemePreset, TreeStyle, UnaryTemplate,
};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TURNSTILE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config: {source}")]
    Parse { source: toml::de::Error },
    #[error("unknown theme preset `{0}` (expected one of: {names})", names = preset_names())]
    UnknownPreset(String),
    #[error("rule glyph must be exactly one character, got `{0}`")]
    InvalidRule(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeConfig {
    preset: Option<String>,
    falsum: Option<NullaryTemplate>,
    verum: Option<NullaryTemplate>,
    atom: Option<UnaryTemplate>,
    optional: Option<UnaryTemplate>,
    parenthesis: Option<UnaryTemplate>,
    negation: Option<UnaryTemplate>,
    conjunction: Option<BinaryTemplate>,
    disjunction: Option<BinaryTemplate>,
    implication: Option<BinaryTemplate>,
    formulas: Option<BinaryTemplate>,
    sequent: Option<BinaryTemplate>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum WidthConfig {
    Block,
    Conclusion,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutConfig {
    rule: Option<String>,
    gap: Option<usize>,
    padding: Option<usize>,
    width: Option<WidthConfig>,
}

fn preset_names() -> String {
    ThemePreset::all()
        .iter()
        .map(|preset| preset.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TurnstileConfig {
    #[serde(default)]
    theme: ThemeConfig,
    #[serde(default)]
    layout: LayoutConfig,
    /// Literal label overrides keyed by rule id.
    #[serde(default)]
    labels: BTreeMap<String, String>,
}

fn set<T: Clone>(slot: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        slot.clone_from(value);
    }
}

impl TurnstileConfig {
    /// Load the discovered config file.
    ///
    /// A missing file yields `None`. A file that cannot be read or parsed is
    /// logged and also yields `None`, so the defaults apply.
    #[must_use]
    pub fn load() -> Option<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return None;
        }
        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!("Ignoring config at {}: {err}", path.display());
                None
            }
        }
    }

    /// Load a specific config file, failing on any error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse { source })
    }

    /// `$TURNSTILE_CONFIG` if set, otherwise `~/.turnstile/config.toml`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        match env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => dirs::home_dir().map(|home| home.join(".turnstile").join("config.toml")),
        }
    }

    /// Replace the configured theme preset, keeping template overrides.
    pub fn set_preset(&mut self, preset: impl Into<String>) {
        self.theme.preset = Some(preset.into());
    }

    pub fn resolve(&self) -> Result<Renderer, ConfigError> {
        let renderer = Renderer::new(
            self.resolve_theme()?,
            self.resolve_style()?,
            self.resolve_labels(),
        );
        debug!(
            preset = self.theme.preset.as_deref().unwrap_or("basic"),
            labels = self.labels.len(),
            "resolved config"
        );
        Ok(renderer)
    }

    fn resolve_theme(&self) -> Result<Theme, ConfigError> {
        let raw = &self.theme;
        let preset = match raw.preset.as_deref() {
            Some(name) => {
                ThemePreset::parse(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_owned()))?
            }
            None => ThemePreset::default(),
        };

        let mut theme = preset.theme();
        set(&mut theme.falsum, raw.falsum.as_ref());
        set(&mut theme.verum, raw.verum.as_ref());
        set(&mut theme.atom, raw.atom.as_ref());
        set(&mut theme.optional, raw.optional.as_ref());
        set(&mut theme.parenthesis, raw.parenthesis.as_ref());
        set(&mut theme.negation, raw.negation.as_ref());
        set(&mut theme.conjunction, raw.conjunction.as_ref());
        set(&mut theme.disjunction, raw.disjunction.as_ref());
        set(&mut theme.implication, raw.implication.as_ref());
        set(&mut theme.formulas, raw.formulas.as_ref());
        set(&mut theme.sequent, raw.sequent.as_ref());
        Ok(theme)
    }

    fn resolve_style(&self) -> Result<TreeStyle, ConfigError> {
        let raw = &self.layout;
        let mut style = TreeStyle::default();

        if let Some(rule) = raw.rule.as_deref() {
            let mut chars = rule.chars();
            style.rule = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => return Err(ConfigError::InvalidRule(rule.to_owned())),
            };
        }
        set(&mut style.gap, raw.gap.as_ref());
        set(&mut style.padding, raw.padding.as_ref());
        if let Some(width) = raw.width {
            style.width = match width {
                WidthConfig::Block => AutoWidth::Block,
                WidthConfig::Conclusion => AutoWidth::Conclusion,
            };
        }
        Ok(style)
    }

    fn resolve_labels(&self) -> RuleLabels {
        let mut labels = RuleLabels::default();
        for (id, text) in &self.labels {
            labels.insert(id.clone(), RuleGlyph::literal(text.clone()));
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use tempfile::TempDir;
    use turnstile_render::{
        AutoWidth, BinaryTemplate, Renderer, RuleGlyph, Theme, TreeStyle, UnaryTemplate,
    };

    use super::{CONFIG_ENV, ConfigError, TurnstileConfig};

    #[test]
    fn empty_config_resolves_to_defaults() {
        let config = TurnstileConfig::from_toml_str("").unwrap();
        assert_eq!(config.resolve().unwrap(), Renderer::default());
    }

    #[test]
    fn full_schema() {
        let config = TurnstileConfig::from_toml_str(
            r#"
            [theme]
            preset = "ascii"
            conjunction = ["", " & ", ""]
            negation = ["not ", ""]

            [layout]
            rule = "-"
            gap = 3
            padding = 1
            width = "conclusion"

            [labels]
            Cut = "cut"
            "#,
        )
        .unwrap();
        let renderer = config.resolve().unwrap();

        assert_eq!(renderer.theme.conjunction, BinaryTemplate::new("", " & ", ""));
        assert_eq!(renderer.theme.negation, UnaryTemplate::new("not ", ""));
        assert_eq!(renderer.theme.implication, Theme::ascii().implication);
        assert_eq!(
            renderer.style,
            TreeStyle {
                rule: '-',
                gap: 3,
                padding: 1,
                width: AutoWidth::Conclusion,
            }
        );
        assert_eq!(renderer.labels.get("Cut"), Some(&RuleGlyph::literal("cut")));
        assert!(renderer.labels.get("cl1").is_some());
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let config = TurnstileConfig::from_toml_str("[theme]\npreset = \"gothic\"").unwrap();
        let err = config.resolve().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown theme preset `gothic` (expected one of: basic, ascii)"
        );
        assert!(matches!(err, ConfigError::UnknownPreset(name) if name == "gothic"));
    }

    #[test]
    fn misspelled_sections_fail_to_parse() {
        assert!(matches!(
            TurnstileConfig::from_toml_str("[layuot]\ngap = 9"),
            Err(ConfigError::Parse { .. })
        ));
        assert!(TurnstileConfig::from_toml_str("[layout]\ngapp = 9").is_err());
    }

    #[test]
    fn discovery_follows_env_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("turnstile.toml");
        unsafe {
            env::set_var(CONFIG_ENV, &path);
        }
        assert_eq!(TurnstileConfig::path(), Some(path.clone()));

        // Absent file.
        assert!(TurnstileConfig::load().is_none());

        fs::write(&path, "[layout]\ngap = 5\n").unwrap();
        let config = TurnstileConfig::load().unwrap();
        assert_eq!(config.resolve().unwrap().style.gap, 5);

        // Unparsable files are ignored so the defaults apply.
        fs::write(&path, "[layout\ngap = ").unwrap();
        assert!(TurnstileConfig::load().is_none());

        unsafe {
            env::remove_var(CONFIG_ENV);
        }
    }

    #[test]
    fn rule_must_be_one_character() {
        for rule in ["", "=="] {
            let config =
                TurnstileConfig::from_toml_str(&format!("[layout]\nrule = \"{rule}\"")).unwrap();
            assert!(matches!(config.resolve(), Err(ConfigError::InvalidRule(_))));
        }
    }

    #[test]
    fn malformed_values_fail_to_parse() {
        assert!(matches!(
            TurnstileConfig::from_toml_str("[layout]\nwidth = \"widest\""),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            TurnstileConfig::from_toml_str("[theme]\nnegation = [\"~\"]"),
            Err(ConfigError::Parse { .. })
        ));
        assert!(TurnstileConfig::from_toml_str("[theme]\nfancy = true").is_err());
    }

    #[test]
    fn preset_override_keeps_template_overrides() {
        let mut config =
            TurnstileConfig::from_toml_str("[theme]\nfalsum = [\"F\"]").unwrap();
        config.set_preset("ascii");
        let theme = config.resolve().unwrap().theme;
        assert_eq!(theme.falsum.glyphs(), "F");
        assert_eq!(theme.sequent, Theme::ascii().sequent);
    }

    #[test]
    fn load_from_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[layout]\ngap = 4\n").unwrap();

        let config = TurnstileConfig::load_from(&path).unwrap();
        assert_eq!(config.resolve().unwrap().style.gap, 4);
    }

    #[test]
    fn load_from_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let err = TurnstileConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
