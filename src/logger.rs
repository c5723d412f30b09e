//! Logger setup. Everything goes to stderr so stdout stays reserved
//! for the generated source.

pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info })
        .target(env_logger::Target::Stderr)
        .init();
}
