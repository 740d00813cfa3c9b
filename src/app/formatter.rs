use crate::app::models::{Artifact, FileBody, ProjectConfig};
use std::fs;
use std::path::Path;

const FILE_PLACEHOLDER: &str = "{file}";
const SECTION_SEPARATOR: &str = "\n\n";

pub struct OutputGenerator;

impl OutputGenerator {
    /// Builds the whole artifact in memory. Unreadable files become an
    /// inline error line; nothing here aborts the run.
    pub fn compile(config: &ProjectConfig) -> Artifact {
        let mut artifact = Artifact {
            text: Self::generate_header(config),
            missing: Vec::new(),
        };

        for rel_path in &config.files {
            let body = Self::read_body(&config.base_path, rel_path);
            if body == FileBody::Missing {
                artifact.missing.push(rel_path.clone());
            }
            artifact
                .text
                .push_str(&Self::generate_section(config, rel_path, &body));
        }

        artifact
    }

    pub fn generate_header(config: &ProjectConfig) -> String {
        let mut out = String::new();

        if let Some(prompt) = &config.start_prompt {
            out.push_str(prompt);
            out.push_str("\n\n");
        }
        if !config.title.is_empty() {
            out.push_str(&format!("Project: {}\n\n", config.title));
        }

        out
    }

    pub fn generate_section(config: &ProjectConfig, rel_path: &str, body: &FileBody) -> String {
        let mut out = String::new();

        if let Some(template) = &config.start_text {
            out.push_str(&Self::format_start(template, rel_path));
            out.push('\n');
        }

        match body {
            FileBody::Content(content) => out.push_str(content),
            FileBody::Missing => out.push_str(&Self::missing_placeholder(rel_path)),
        }

        if let Some(template) = &config.stop_text {
            out.push_str(&Self::fill_template(template, rel_path));
        }

        out.push_str(SECTION_SEPARATOR);
        out
    }

    fn read_body(base_path: &Path, rel_path: &str) -> FileBody {
        let full_path = base_path.join(rel_path);
        log::debug!("Reading {:?}", full_path);

        match fs::read_to_string(&full_path) {
            Ok(content) => FileBody::Content(content),
            Err(e) => {
                log::warn!("Could not read {:?}: {}", full_path, e);
                FileBody::Missing
            }
        }
    }

    /// A start template without a placeholder still names the file.
    fn format_start(template: &str, rel_path: &str) -> String {
        if template.contains(FILE_PLACEHOLDER) {
            Self::fill_template(template, rel_path)
        } else {
            format!("{} \"{}\"", template, rel_path)
        }
    }

    /// Literal substring replace; paths containing braces are not re-expanded.
    pub fn fill_template(template: &str, rel_path: &str) -> String {
        template.replace(FILE_PLACEHOLDER, rel_path)
    }

    pub fn missing_placeholder(rel_path: &str) -> String {
        format!("*** ERROR: Could not read file: {} ***\n", rel_path)
    }
}
