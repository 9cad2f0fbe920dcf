use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use urania::influence::InfluenceCategory;
use urania::{GenerationOptions, TemplateBank};

/// Relative locations tried when no explicit config path is given.
pub const SEARCH_PATHS: [&str; 2] = ["configs/almanac.toml", "../../configs/almanac.toml"];

const DEFAULT_OUTPUT_PATH: &str = "data/astrology_daily.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AlmanacSettings {
    pub output_path: PathBuf,
    pub pretty: bool,
    pub dedupe_templates: bool,
    /// Whole-category replacements for the built-in template bank
    pub template_overrides: BTreeMap<InfluenceCategory, Vec<String>>,
}

impl Default for AlmanacSettings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            pretty: true,
            dedupe_templates: true,
            template_overrides: BTreeMap::new(),
        }
    }
}

impl AlmanacSettings {
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            dedupe_templates: self.dedupe_templates,
        }
    }

    /// Built-in bank with any configured overrides applied and validated
    pub fn template_bank(&self) -> anyhow::Result<TemplateBank> {
        if self.template_overrides.is_empty() {
            return Ok(TemplateBank::builtin());
        }
        TemplateBank::builtin()
            .with_overrides(self.template_overrides.clone())
            .context("Invalid [templates] section")
    }
}

#[derive(Debug, Clone, Deserialize)]
struct OutputToml {
    #[serde(default = "default_output_path")]
    path: PathBuf,
    #[serde(default = "default_true")]
    pretty: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct GenerationToml {
    #[serde(default = "default_true")]
    dedupe_templates: bool,
}

impl Default for GenerationToml {
    fn default() -> Self {
        Self {
            dedupe_templates: true,
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    output: OutputToml,
    #[serde(default)]
    generation: GenerationToml,
    #[serde(default)]
    templates: BTreeMap<String, Vec<String>>,
}

/// Read the config text from `explicit`, or from the first search path that exists.
///
/// An explicit path that cannot be read is an error; nothing on the search
/// path yields `Ok(None)`.
pub fn read_almanac_toml_text(explicit: Option<&Path>) -> anyhow::Result<Option<(PathBuf, String)>> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        return Ok(Some((path.to_path_buf(), text)));
    }
    for p in &SEARCH_PATHS {
        if let Ok(text) = fs::read_to_string(p) {
            return Ok(Some((PathBuf::from(p), text)));
        }
    }
    Ok(None)
}

pub fn parse_almanac_settings(text: &str) -> anyhow::Result<AlmanacSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse almanac.toml: {e}"))?;

    let mut template_overrides = BTreeMap::new();
    for (key, templates) in root.templates {
        let category: InfluenceCategory = key
            .parse()
            .with_context(|| format!("Unknown category in [templates]: {key}"))?;
        template_overrides.insert(category, templates);
    }

    let settings = AlmanacSettings {
        output_path: root.output.path,
        pretty: root.output.pretty,
        dedupe_templates: root.generation.dedupe_templates,
        template_overrides,
    };
    settings.template_bank()?;
    Ok(settings)
}

pub fn load_almanac_settings(explicit: Option<&Path>) -> anyhow::Result<AlmanacSettings> {
    match read_almanac_toml_text(explicit)? {
        Some((path, text)) => {
            log::info!("Loading config from {}", path.display());
            parse_almanac_settings(&text)
                .with_context(|| format!("Invalid config {}", path.display()))
        }
        None => {
            log::warn!(
                "No almanac.toml found in {:?}; using defaults",
                SEARCH_PATHS
            );
            Ok(AlmanacSettings::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = parse_almanac_settings("").unwrap();
        assert_eq!(settings, AlmanacSettings::default());
        assert!(settings.generation_options().dedupe_templates);
    }

    #[test]
    fn test_full_config() {
        let text = r#"
[output]
path = "out/today.json"
pretty = false

[generation]
dedupe_templates = false

[templates]
harmony = ["Bonds for {sign} anneal cleanly."]
"#;
        let settings = parse_almanac_settings(text).unwrap();
        assert_eq!(settings.output_path, PathBuf::from("out/today.json"));
        assert!(!settings.pretty);
        assert!(!settings.dedupe_templates);

        let bank = settings.template_bank().unwrap();
        assert_eq!(bank.templates(InfluenceCategory::Harmony).len(), 1);
        assert_eq!(bank.templates(InfluenceCategory::Energy).len(), 10);
    }

    #[test]
    fn test_bad_templates_rejected() {
        let unknown_category = "[templates]\nluck = [\"Fortune favours {sign}.\"]\n";
        assert!(parse_almanac_settings(unknown_category).is_err());

        let bad_placeholder = "[templates]\nenergy = [\"Hello {name}.\"]\n";
        assert!(parse_almanac_settings(bad_placeholder).is_err());

        let empty_list = "[templates]\nstructure = []\n";
        assert!(parse_almanac_settings(empty_list).is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\npath = \"elsewhere.json\"").unwrap();

        let settings = load_almanac_settings(Some(file.path())).unwrap();
        assert_eq!(settings.output_path, PathBuf::from("elsewhere.json"));
        assert!(settings.pretty);
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_almanac_settings(Some(missing.as_path())).is_err());
    }
}
