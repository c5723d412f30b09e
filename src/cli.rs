//! Command-line interface implementation for codefs.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Config;
use crate::constants::{DEFAULT_INDEX, DEFAULT_TEMPLATE};

/// Command-line arguments structure for codefs.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "codefs: embed a directory tree into generated source code",
    long_about = None
)]
pub struct Args {
    /// Path to the root directory of files to be served
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Server path of the file that is also served as the root
    #[arg(long = "index", value_name = "PATH", default_value = DEFAULT_INDEX)]
    pub index: String,

    /// Template file used to generate the content file
    #[arg(short = 'i', long = "template", value_name = "PATH", default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// Path of the output file. Writes to stdout when absent or empty
    #[arg(short = 'o', value_name = "PATH")]
    pub output: Option<String>,

    /// Skip paths matching this glob, relative to ROOT (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Do not follow symbolic links while walking ROOT
    #[arg(long)]
    pub no_follow_links: bool,

    /// Leave missing template markers alone instead of failing.
    /// This matches the behavior of older generators.
    #[arg(long)]
    pub allow_missing_markers: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Unrecognized arguments, set aside by [`Args::parse_known_from`]
    #[arg(skip)]
    pub extra: Vec<String>,
}

impl Args {
    /// Parses `itr` like [`Parser::try_parse_from`], but sets unrecognized
    /// options and stray positionals after ROOT aside in [`Args::extra`]
    /// instead of failing. Known options are honored wherever they appear.
    ///
    /// # Errors
    /// * clap's error for known options with bad values or a missing ROOT
    pub fn parse_known_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let (known, extra) = split_known_args(itr.into_iter().map(Into::into));
        let mut args = Self::try_parse_from(known)?;
        args.extra = extra;
        Ok(args)
    }

    /// Turns the parsed arguments into a generation [`Config`].
    ///
    /// # Arguments
    /// * `generation_command` - Command line recorded in the generated file
    pub fn into_config<S: Into<String>>(self, generation_command: S) -> Config {
        let output = self.output.filter(|path| !path.is_empty()).map(PathBuf::from);

        Config {
            index_path: self.index,
            template_path: self.template,
            output,
            exclude: self.exclude,
            follow_links: !self.no_follow_links,
            strict_markers: !self.allow_missing_markers,
            generation_command: generation_command.into(),
            ..Config::new(self.root)
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::parse_known_from(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

/// The command line as it was typed, arguments joined by spaces.
pub fn generation_command() -> String {
    std::env::args().collect::<Vec<_>>().join(" ")
}

/// Separates the arguments clap knows about from the rest.
///
/// The first item is the binary name. Options are looked up in the `Args`
/// definition; an option taking a value keeps the following token when the
/// value is not attached. The first positional is ROOT, later ones are extra.
fn split_known_args<I: Iterator<Item = OsString>>(mut itr: I) -> (Vec<OsString>, Vec<String>) {
    let mut cmd = Args::command();
    cmd.build();

    let mut longs: HashMap<String, bool> = HashMap::new();
    let mut shorts: HashMap<char, bool> = HashMap::new();
    for arg in cmd.get_arguments() {
        let takes_value = arg.get_action().takes_values();
        if let Some(long) = arg.get_long() {
            longs.insert(long.to_string(), takes_value);
        }
        if let Some(short) = arg.get_short() {
            shorts.insert(short, takes_value);
        }
    }

    let mut known: Vec<OsString> = itr.next().into_iter().collect();
    let mut extra = Vec::new();
    let mut root_seen = false;
    let mut only_positionals = false;

    while let Some(token) = itr.next() {
        let text = token.to_string_lossy().into_owned();

        let takes_value = if only_positionals || text == "-" || !text.starts_with('-') {
            None
        } else if text == "--" {
            only_positionals = true;
            continue;
        } else if let Some(long) = text.strip_prefix("--") {
            match longs.get(long.split('=').next().unwrap_or_default()) {
                Some(takes_value) => Some(*takes_value && !long.contains('=')),
                None => {
                    extra.push(text);
                    continue;
                }
            }
        } else {
            match known_short_cluster(&text[1..], &shorts) {
                Some(takes_value) => Some(takes_value),
                None => {
                    extra.push(text);
                    continue;
                }
            }
        };

        match takes_value {
            Some(needs_next) => {
                known.push(token);
                if needs_next {
                    known.extend(itr.next());
                }
            }
            None if !root_seen => {
                root_seen = true;
                known.push(token);
            }
            None => extra.push(text),
        }
    }

    (known, extra)
}

/// Checks a short option cluster such as `v`, `ofile.go` or `vo`.
/// Returns whether the following token is its value, or `None` when any
/// flag in it is unknown.
fn known_short_cluster(cluster: &str, shorts: &HashMap<char, bool>) -> Option<bool> {
    for (idx, flag) in cluster.char_indices() {
        if *shorts.get(&flag)? {
            return Some(idx + flag.len_utf8() == cluster.len());
        }
    }
    Some(false)
}
