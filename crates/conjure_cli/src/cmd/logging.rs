/// Install the process logger; `RUST_LOG` overrides the `warn` default.
///
/// Returns `false` when a logger is already installed, which leaves that
/// logger in place.
pub fn init() -> bool {
	match env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
		.format_timestamp_millis()
		.try_init()
	{
		Ok(()) => true,
		Err(_) => false, // already initialized
	}
}
