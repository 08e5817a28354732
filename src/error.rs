use thiserror::Error;

/// Errors surfaced by typed reads and file I/O.
///
/// Malformed input text is never an error: the parser drops lines it cannot
/// understand. Absence of a section or key is only discovered at read time.
#[derive(Error, Debug)]
pub enum IniError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("section '{0}' not found")]
    MissingSection(String),

    #[error("key '{key}' not found in section '{section}'")]
    MissingKey { section: String, key: String },

    #[error("value '{value}' for key '{key}' in section '{section}' is not a valid {expected}")]
    Format {
        section: String,
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl IniError {
    pub(crate) fn missing_key(section: &str, key: &str) -> Self {
        IniError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    pub(crate) fn format(section: &str, key: &str, value: &str, expected: &'static str) -> Self {
        IniError::Format {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            expected,
        }
    }
}
