//! Text form of a document. Every line is CRLF-terminated regardless of
//! platform, and no blank line separates sections.

use std::fmt;

use crate::document::IniDocument;

impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, entries) in &self.sections {
            write!(f, "[{name}]\r\n")?;
            for (key, value) in entries {
                write!(f, "{key}={value}\r\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_and_keys_serialize_in_document_order() {
        let mut doc = IniDocument::new();
        doc.write_string("server", "host", "localhost");
        doc.write_integer("server", "port", 8080);
        doc.write_boolean("features", "fast", true);
        assert_eq!(
            doc.to_string(),
            "[server]\r\nhost=localhost\r\nport=8080\r\n[features]\r\nfast=1\r\n"
        );
    }

    #[test]
    fn empty_document_serializes_to_nothing() {
        assert_eq!(IniDocument::new().to_string(), "");
    }

    #[test]
    fn empty_values_keep_their_equals_sign() {
        let mut doc = IniDocument::new();
        doc.write_string("main", "blank", "");
        assert_eq!(doc.to_string(), "[main]\r\nblank=\r\n");
    }

    #[test]
    fn well_formed_documents_round_trip() {
        let mut doc = IniDocument::new();
        doc.write_string("alpha", "one", "1");
        doc.write_string("alpha", "two", "a value with spaces");
        doc.write_double("beta", "ratio", 2.75);
        doc.write_string("beta", "empty", "");

        let reparsed = IniDocument::parse(&doc.to_string());
        assert_eq!(reparsed, doc);
        assert_eq!(
            reparsed.sections().collect::<Vec<_>>(),
            doc.sections().collect::<Vec<_>>()
        );
    }
}
