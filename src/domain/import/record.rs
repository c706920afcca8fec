//! Parses one input line into its url, title and category fields.
//!
//! Lines follow `url[,title[,category[,...]]]`. Any field may be wrapped in
//! double quotes, in which case it may contain commas. Inside a quoted field a
//! doubled quote (`""`) stands for one literal quote (RFC 4180). A quote that
//! is never closed runs to the end of the line. A quote only opens a quoted
//! field when it is the field's first character. A carriage return inside a
//! line is ordinary field data.

use csv::{ReaderBuilder, StringRecord, Terminator, Trim};

/// Fields extracted from one line, before validation.
///
/// Missing fields are empty strings; fields past the third are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRecord {
    pub url: String,
    pub title: String,
    pub category: String,
}

/// Parses a line into a [`ParsedRecord`].
///
/// This never fails: whatever the line looks like, some record comes out and
/// validation decides what to do with it.
pub fn parse_record(line: &str) -> ParsedRecord {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => {}
        Ok(false) => return ParsedRecord::default(),
        Err(e) => {
            tracing::debug!(error = %e, line, "unparseable line, using it as the url");
            return ParsedRecord {
                url: line.trim().to_string(),
                ..ParsedRecord::default()
            };
        }
    }

    let field = |index: usize| record.get(index).unwrap_or_default().trim().to_string();

    ParsedRecord {
        url: field(0),
        title: field(1),
        category: field(2),
    }
}
