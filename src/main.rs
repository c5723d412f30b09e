//! codefs main application entry point.
//! Handles command-line argument parsing and runs the generation flow.

use codefs::{
    cli::{generation_command, get_args, Args},
    error::{default_error_handler, Result},
    generator::generate,
    logger::init_logger,
    output::write_output,
};
use log::debug;

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Builds the configuration from the arguments
/// 2. Reads the template and collects the tree
/// 3. Renders the template
/// 4. Writes the result to the output file or stdout
fn run(args: Args) -> Result<()> {
    if !args.extra.is_empty() {
        debug!("Ignoring extra arguments: {:?}", args.extra);
    }

    let config = args.into_config(generation_command());
    debug!(
        "Generating from {} with template {}",
        config.root.display(),
        config.template_path.display()
    );

    let output = generate(&config)?;
    write_output(&output, config.output.as_deref())
}
