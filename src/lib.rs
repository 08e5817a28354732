//! In-memory model and text codec for INI-style configuration files.
//!
//! [`IniDocument`] holds ordered sections of ordered key/value pairs, with
//! typed accessors layered over the raw string store. [`IniFile`] ties a
//! document to a path on disk. Parsing is fail-open: lines the format does not
//! recognize are dropped, never reported as errors.
//!
//! ```
//! use inidoc::IniDocument;
//!
//! let mut doc = IniDocument::parse("[server]\nhost=localhost\nport=8080\n");
//! assert_eq!(doc.read_integer("server", "port").unwrap(), 8080);
//!
//! doc.write_boolean("server", "tls", true);
//! assert!(doc.to_string().contains("tls=1"));
//! ```

pub mod document;
pub mod error;
pub mod file;

mod parser;
mod writer;

pub use document::{IniDocument, Section};
pub use error::IniError;
pub use file::IniFile;
