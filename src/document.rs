use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::IniError;

/// A single section: key/value pairs in insertion order.
pub type Section = IndexMap<String, String>;

/// An INI file held in memory: sections in insertion order, each mapping keys
/// to string values.
///
/// Build one with [`IniDocument::parse`] or start empty and fill it through
/// the `write_*` methods. The `Display` impl renders the CRLF-terminated text
/// form, so `to_string()` is the inverse of `parse` for well-formed content.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IniDocument {
    pub(crate) sections: IndexMap<String, Section>,
}

impl IniDocument {
    pub fn new() -> Self {
        IniDocument {
            sections: IndexMap::new(),
        }
    }

    /// Section names, in document order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Key/value pairs of `name`, in section order. `None` when the section
    /// does not exist.
    pub fn section_entries<'a>(
        &'a self,
        name: &str,
    ) -> Option<impl Iterator<Item = (&'a str, &'a str)>> {
        self.sections
            .get(name)
            .map(|entries| entries.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn contains_key(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Raw lookup. Use the `read_*` methods to distinguish a missing section
    /// from a missing key.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    fn lookup(&self, section: &str, key: &str) -> Result<&str, IniError> {
        let entries = self
            .sections
            .get(section)
            .ok_or_else(|| IniError::MissingSection(section.to_string()))?;
        entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| IniError::missing_key(section, key))
    }

    /// Returns the stored value as-is.
    pub fn read_string(&self, section: &str, key: &str) -> Result<&str, IniError> {
        self.lookup(section, key)
    }

    /// Parses the stored value as a base-10 integer.
    pub fn read_integer(&self, section: &str, key: &str) -> Result<i64, IniError> {
        let value = self.lookup(section, key)?;
        value
            .parse()
            .map_err(|_| IniError::format(section, key, value, "integer"))
    }

    /// Parses the stored value as a floating-point number.
    pub fn read_double(&self, section: &str, key: &str) -> Result<f64, IniError> {
        let value = self.lookup(section, key)?;
        value
            .parse()
            .map_err(|_| IniError::format(section, key, value, "float"))
    }

    /// True iff the stored value is exactly `"1"`. Anything else, including
    /// `"true"` and `"0"`, reads as false; this is an exact-equality check,
    /// not a truthiness parse.
    pub fn read_boolean(&self, section: &str, key: &str) -> Result<bool, IniError> {
        Ok(self.lookup(section, key)? == "1")
    }

    // Writes go through one helper so section creation stays in one place.
    fn write_property(&mut self, section: &str, key: &str, value: String) {
        self.sections
            .entry(section.to_string())
            .or_insert_with(Section::new)
            .insert(key.to_string(), value);
    }

    /// Stores `value` under `(section, key)`, creating the section if absent.
    pub fn write_string(&mut self, section: &str, key: &str, value: &str) {
        self.write_property(section, key, value.to_string());
    }

    pub fn write_integer(&mut self, section: &str, key: &str, value: i64) {
        self.write_property(section, key, value.to_string());
    }

    /// Stores the default decimal rendering of `value`. No precision control
    /// is applied.
    pub fn write_double(&mut self, section: &str, key: &str, value: f64) {
        self.write_property(section, key, value.to_string());
    }

    /// Stores `"1"` for true and `"0"` for false, matching what
    /// [`read_boolean`](Self::read_boolean) accepts.
    pub fn write_boolean(&mut self, section: &str, key: &str, value: bool) {
        let digit = if value { "1" } else { "0" };
        self.write_property(section, key, digit.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IniDocument {
        let mut doc = IniDocument::new();
        doc.write_string("server", "host", "localhost");
        doc.write_integer("server", "port", 8080);
        doc.write_double("limits", "ratio", 0.5);
        doc.write_boolean("limits", "enabled", true);
        doc
    }

    #[test]
    fn typed_reads_return_written_values() {
        let doc = sample();
        assert_eq!(doc.read_string("server", "host").unwrap(), "localhost");
        assert_eq!(doc.read_integer("server", "port").unwrap(), 8080);
        assert_eq!(doc.read_double("limits", "ratio").unwrap(), 0.5);
        assert!(doc.read_boolean("limits", "enabled").unwrap());
    }

    #[test]
    fn boolean_writes_store_digits() {
        let mut doc = IniDocument::new();
        doc.write_boolean("flags", "on", true);
        doc.write_boolean("flags", "off", false);
        assert_eq!(doc.get("flags", "on"), Some("1"));
        assert_eq!(doc.get("flags", "off"), Some("0"));
    }

    #[test]
    fn boolean_is_exact_equality_with_one() {
        let mut doc = IniDocument::new();
        for (key, value) in [("a", "0"), ("b", "true"), ("c", ""), ("d", "yes")] {
            doc.write_string("flags", key, value);
            assert!(!doc.read_boolean("flags", key).unwrap(), "{value:?}");
        }
        doc.write_string("flags", "e", "1");
        assert!(doc.read_boolean("flags", "e").unwrap());
    }

    #[test]
    fn missing_section_and_key_are_distinguished() {
        let doc = sample();
        assert!(matches!(
            doc.read_integer("nowhere", "port"),
            Err(IniError::MissingSection(name)) if name == "nowhere"
        ));
        assert!(matches!(
            doc.read_integer("server", "missing"),
            Err(IniError::MissingKey { section, key })
                if section == "server" && key == "missing"
        ));
    }

    #[test]
    fn non_numeric_value_is_a_format_error() {
        let mut doc = IniDocument::new();
        doc.write_string("server", "port", "abc");
        assert!(matches!(
            doc.read_integer("server", "port"),
            Err(IniError::Format { value, expected, .. })
                if value == "abc" && expected == "integer"
        ));
        assert!(matches!(
            doc.read_double("server", "port"),
            Err(IniError::Format { expected, .. }) if expected == "float"
        ));
    }

    #[test]
    fn writes_create_sections_implicitly() {
        let mut doc = IniDocument::new();
        assert!(!doc.contains_section("new"));
        doc.write_integer("new", "n", 3);
        assert!(doc.contains_section("new"));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn section_entries_preserve_insertion_order() {
        let doc = sample();
        let entries: Vec<_> = doc.section_entries("server").unwrap().collect();
        assert_eq!(entries, vec![("host", "localhost"), ("port", "8080")]);
        assert_eq!(doc.sections().collect::<Vec<_>>(), vec!["server", "limits"]);
        assert!(doc.section_entries("nowhere").is_none());
    }
}
