//! PO text emission.
//!
//! Literal tokens are written exactly as they appeared in source. A Go string
//! token is only valid PO text when its escapes are PO-compatible; no
//! re-encoding happens here.

use std::io::{self, Write};

use crate::core::matcher::ExtractionRecord;

/// Header block written once at the top of every catalog.
pub const CATALOG_HEADER: &str = r#"msgid ""
msgstr ""
"Plural-Forms: nplurals=2; plural=(n != 1);\n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"
"Language: \n"
"X-Generator: xgotext\n"
"#;

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(CATALOG_HEADER.as_bytes())
}

/// Append one catalog block for `record`, preceded by a blank line.
pub fn write_entry<W: Write>(out: &mut W, record: &ExtractionRecord) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "#: {}", record.location)?;
    writeln!(out, "#. {}", record.call_label)?;

    if let Some(context) = &record.context {
        writeln!(out, "msgctxt {}", context)?;
    }

    writeln!(out, "msgid {}", record.msgid)?;
    match &record.msgid_plural {
        Some(plural) => {
            writeln!(out, "msgid_plural {}", plural)?;
            writeln!(out, "msgstr[0] \"\"")?;
            writeln!(out, "msgstr[1] \"\"")?;
        }
        None => writeln!(out, "msgstr \"\"")?,
    }

    Ok(())
}
