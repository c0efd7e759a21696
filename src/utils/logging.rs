//! Logging utilities for the application
//!
//! Sets up `tracing_subscriber` with an environment-driven filter. Log
//! records emitted through the `log` facade are captured by the same
//! subscriber.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Setup logging to stdout for the application
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	setup_logging_with_writer(std::io::stdout)?;
	Ok(())
}

/// Setup logging for the application with a custom writer
pub fn setup_logging_with_writer<W>(
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer().with_writer(writer).event_format(
				fmt::format()
					.with_level(true)
					.with_target(true)
					.with_ansi(true)
					.compact(),
			),
		)
		.try_init()?;
	Ok(())
}
