use log::LevelFilter;

/// Logs go to stderr so the image can be streamed on stdout.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env().filter_level(level).target(env_logger::Target::Stderr).init();
}
