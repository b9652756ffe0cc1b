use std::path::PathBuf;

use thiserror::Error;

/// Problems found while loading a [`MenuDefinition`](crate::MenuDefinition).
#[derive(Debug, Error)]
pub enum MenuError {
	/// The menu declares no items at all.
	#[error("menu has no items")]
	Empty,

	/// Two items share a `name`, so activations would be ambiguous.
	#[error("item name '{name}' is used more than once")]
	DuplicateName { name: String },

	/// An item declares a `children` list without entries.
	#[error("item '{item}' declares an empty list of children")]
	EmptyChildren { item: String },

	#[error("failed to read menu file {}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid TOML menu: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("invalid JSON menu: {0}")]
	Json(#[from] serde_json::Error),
}
