//! Template renderer for codefs.
//! Turns the collected files into map-entry fragments and substitutes
//! them, together with the generation metadata, into the template markers.

use chrono::Local;
use indexmap::IndexMap;
use log::{debug, warn};

use crate::collector::FileEntry;
use crate::constants::{
    BUILD_TAG_EXCLUDED, BUILD_TAG_INCLUDED, DATA_MARKER, GENCMD_MARKER, GENDATE_FORMAT,
    GENDATE_MARKER, ROOT_KEY, TEMPLATE_MARKERS,
};
use crate::error::{Error, Result};

/// Everything a template is rendered with.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Collected files, in walk order
    pub entries: &'a [FileEntry],
    /// Server path whose content is duplicated under `/`
    pub index_path: &'a str,
    /// How the generation was invoked
    pub generation_command: &'a str,
    /// Human-readable generation time
    pub generated_at: String,
}

impl<'a> RenderContext<'a> {
    /// Creates a context stamped with the current local time.
    pub fn new(entries: &'a [FileEntry], index_path: &'a str, generation_command: &'a str) -> Self {
        Self {
            entries,
            index_path,
            generation_command,
            generated_at: Local::now().format(GENDATE_FORMAT).to_string(),
        }
    }

    /// Pins the generation time, for reproducible output.
    pub fn with_generated_at<S: Into<String>>(mut self, generated_at: S) -> Self {
        self.generated_at = generated_at.into();
        self
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Files and metadata to substitute
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &RenderContext) -> Result<String>;
}

/// Renderer substituting fixed marker tokens in the template text.
#[derive(Debug, Clone, Copy)]
pub struct MarkerRenderer {
    /// Whether every marker must appear exactly once
    strict: bool,
}

impl MarkerRenderer {
    /// Creates a renderer that validates the template markers.
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// Creates a renderer that leaves absent markers alone and replaces
    /// repeated ones everywhere.
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

impl Default for MarkerRenderer {
    fn default() -> Self {
        MarkerRenderer::new()
    }
}

impl TemplateRenderer for MarkerRenderer {
    /// Renders the template by plain marker substitution.
    ///
    /// # Errors
    /// * `Error::MalformedTemplateError` in strict mode, if any marker is
    ///   missing or appears more than once
    fn render(&self, template: &str, context: &RenderContext) -> Result<String> {
        if self.strict {
            validate_markers(template)?;
        }

        let data = build_data_block(context.entries, context.index_path);

        Ok(template
            .replace(BUILD_TAG_EXCLUDED, BUILD_TAG_INCLUDED)
            .replace(DATA_MARKER, &data)
            .replace(GENDATE_MARKER, &context.generated_at)
            .replace(GENCMD_MARKER, context.generation_command))
    }
}

/// Renders `template` with a strict [`MarkerRenderer`] stamped with the current time.
pub fn render(
    template: &str,
    entries: &[FileEntry],
    index_path: &str,
    generation_command: &str,
) -> Result<String> {
    let context = RenderContext::new(entries, index_path, generation_command);
    MarkerRenderer::new().render(template, &context)
}

/// Checks that every marker appears exactly once in `template`.
///
/// All offending markers are reported together.
pub fn validate_markers(template: &str) -> Result<()> {
    let problems: Vec<String> = TEMPLATE_MARKERS
        .iter()
        .filter_map(|marker| match template.matches(marker).count() {
            1 => None,
            0 => Some(format!("'{marker}' is missing")),
            n => Some(format!("'{marker}' appears {n} times")),
        })
        .collect();

    if problems.is_empty() {
        Ok(())
    } else {
        Err(Error::MalformedTemplateError(problems.join(", ")))
    }
}

/// Formats a single map entry: the key quoted, the payload as a raw string.
pub fn map_fragment(key: &str, hex_content: &str) -> String {
    format!("\"{key}\": `{hex_content}`")
}

/// Builds the data block: one fragment per entry, plus a `/` fragment right
/// after the entry matching `index_path`, joined with `",\n"`.
///
/// Go rejects duplicate keys in a map literal, so only the first fragment for
/// a key is kept.
pub fn build_data_block(entries: &[FileEntry], index_path: &str) -> String {
    let mut data: IndexMap<&str, String> = IndexMap::with_capacity(entries.len() + 1);

    for entry in entries {
        let hex_content = hex::encode(&entry.content);
        if entry.server_path == index_path {
            insert_fragment(&mut data, &entry.server_path, hex_content.clone());
            debug!("Registering {} as {}", entry.server_path, ROOT_KEY);
            insert_fragment(&mut data, ROOT_KEY, hex_content);
        } else {
            insert_fragment(&mut data, &entry.server_path, hex_content);
        }
    }

    data.iter()
        .map(|(key, hex_content)| map_fragment(key, hex_content))
        .collect::<Vec<_>>()
        .join(",\n")
}

fn insert_fragment<'a>(data: &mut IndexMap<&'a str, String>, key: &'a str, hex_content: String) {
    if data.contains_key(key) {
        warn!("Duplicate key '{key}' dropped from the data block");
        return;
    }
    data.insert(key, hex_content);
}
