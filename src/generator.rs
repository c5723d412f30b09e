//! Generation flow: read the template, collect the tree, render.

use std::fs;
use std::path::Path;

use log::info;

use crate::collector::Collector;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::ignore::build_exclude_set;
use crate::renderer::{MarkerRenderer, RenderContext, TemplateRenderer};

/// Produces the generated source for `config`, stamped with the current time.
///
/// # Errors
/// * `Error::FileSystemError` if the template or any part of the tree cannot be read
/// * `Error::IgnorePatternError` if an exclusion glob is invalid
/// * `Error::MalformedTemplateError` if the template is not UTF-8, or if
///   strict marker validation fails
pub fn generate(config: &Config) -> Result<String> {
    generate_with(config, |context| context)
}

/// Like [`generate`], with a hook to adjust the render context before
/// rendering (used to pin the timestamp).
pub fn generate_with<F>(config: &Config, adjust: F) -> Result<String>
where
    F: FnOnce(RenderContext) -> RenderContext,
{
    let template = read_template(&config.template_path)?;

    let collector = Collector::new()
        .follow_links(config.follow_links)
        .exclude(build_exclude_set(&config.exclude)?);
    let entries = collector.collect(&config.root, &config.base_dir)?;

    let server_paths: Vec<&str> = entries.iter().map(|e| e.server_path.as_str()).collect();
    info!("Preparing: {server_paths:?}");

    let renderer =
        if config.strict_markers { MarkerRenderer::new() } else { MarkerRenderer::lenient() };
    let context =
        adjust(RenderContext::new(&entries, &config.index_path, &config.generation_command));

    renderer.render(&template, &context)
}

/// Reads the template, which must be UTF-8 text.
fn read_template(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::file_system(path, e))?;
    String::from_utf8(bytes).map_err(|e| {
        Error::MalformedTemplateError(format!(
            "'{}' is not valid UTF-8 (invalid byte at offset {})",
            path.display(),
            e.utf8_error().valid_up_to()
        ))
    })
}
