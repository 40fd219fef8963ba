//! Hierarchical YAML configuration for quire.
//!
//! A configuration document is a YAML mapping. It may name a parent document
//! under the reserved `INHERIT` key; the parent is loaded first and the child
//! is deep-merged over it:
//!
//! - nested mappings merge key by key, child keys win
//! - sequences and scalars from the child replace the parent's value
//! - keys only present in the parent are kept
//!
//! ## Environment Variables
//!
//! Values tagged with `!ENV` are resolved from the environment while the
//! document is parsed:
//!
//! - `!ENV NAME` - value of `NAME`, or `null` if unset
//! - `!ENV [NAME, default]` - value of `NAME`, or `default`
//! - `!ENV [FIRST, SECOND, default]` - first variable that is set, or `default`
//!
//! Variable values `true`/`false`/`yes`/`no`/`on`/`off` (any case) become
//! booleans, everything else is a string.
//!
//! # Example
//!
//! ```
//! use quire_config::{ConfigLoader, ConfigValue, MemorySource};
//!
//! let source = MemorySource::new()
//!     .with("base.yml", "theme:\n  name: plain\n  palette: light\n")
//!     .with("site.yml", "INHERIT: base.yml\ntheme:\n  palette: dark\n");
//!
//! let config = ConfigLoader::new(source).load("site.yml")?;
//! let theme = config["theme"].as_mapping().unwrap();
//! assert_eq!(theme["name"], ConfigValue::from("plain"));
//! assert_eq!(theme["palette"], ConfigValue::from("dark"));
//! # Ok::<(), quire_config::ConfigError>(())
//! ```

mod env;
mod error;
mod front_matter;
mod loader;
mod merge;
mod source;
mod tag;
mod value;

pub use env::{EnvTag, Environment, ProcessEnv};
pub use error::ConfigError;
pub use front_matter::{FrontMatter, split_front_matter};
pub use loader::{ConfigLoader, INHERIT_KEY};
pub use merge::deep_merge;
pub use source::{Document, DocumentSource, FsSource, MemorySource, SourceError};
pub use tag::{TagHook, TagRegistry};
pub use value::{ConfigMap, ConfigValue, get_path};
