use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

/// Directories the tool reads projects from and writes artifacts to.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub projects_dir: PathBuf,
    pub output_dir: PathBuf,
}

/// One compilation job, as described by a project JSON file.
///
/// String fields are trimmed on load. Optional fields that are missing or
/// blank come through as `None` and contribute nothing to the output.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    #[serde(default, deserialize_with = "trimmed")]
    pub title: String,
    #[serde(rename = "absolute_path", default, deserialize_with = "trimmed")]
    pub base_path: PathBuf,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub start_prompt: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub start_text: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub stop_text: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
}

fn trimmed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(T::from(raw.trim().to_string()))
}

fn trimmed_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// What ended up in the artifact for a single listed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileBody {
    Content(String),
    Missing,
}

/// The compiled text plus the relative paths that could not be read.
#[derive(Debug, Clone, Default)]
pub struct Artifact {
    pub text: String,
    pub missing: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_to_none() {
        let config: ProjectConfig =
            serde_json::from_str(r#"{"title": "Demo", "absolute_path": "/tmp", "files": []}"#)
                .unwrap();
        assert_eq!(config.title, "Demo");
        assert_eq!(config.base_path, PathBuf::from("/tmp"));
        assert!(config.start_prompt.is_none());
        assert!(config.start_text.is_none());
        assert!(config.stop_text.is_none());
        assert!(config.files.is_empty());
    }

    #[test]
    fn strings_are_trimmed_and_blank_optionals_dropped() {
        let config: ProjectConfig = serde_json::from_str(
            r#"{
                "title": "  Demo \n",
                "absolute_path": " /srv/app ",
                "start_prompt": "   ",
                "start_text": "\n-- {file} --\n",
                "stop_text": null,
                "files": ["a.rs", "a.rs"]
            }"#,
        )
        .unwrap();
        assert_eq!(config.title, "Demo");
        assert_eq!(config.base_path, PathBuf::from("/srv/app"));
        assert_eq!(config.start_prompt, None);
        assert_eq!(config.start_text.as_deref(), Some("-- {file} --"));
        assert_eq!(config.stop_text, None);
        assert_eq!(config.files, vec!["a.rs", "a.rs"]);
    }

    #[test]
    fn missing_title_and_path_are_empty() {
        let config: ProjectConfig = serde_json::from_str(r#"{"files": ["x"]}"#).unwrap();
        assert!(config.title.is_empty());
        assert_eq!(config.base_path, PathBuf::new());
    }
}
