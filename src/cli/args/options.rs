use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Log levels accepted by `--log-level`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevelArg {
	Trace,
	Debug,
	Info,
	Warn,
	Error,
	Off,
}

impl LogLevelArg {
	/// Return the level name consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			Self::Trace => "trace",
			Self::Debug => "debug",
			Self::Info => "info",
			Self::Warn => "warn",
			Self::Error => "error",
			Self::Off => "off",
		}
	}
}
