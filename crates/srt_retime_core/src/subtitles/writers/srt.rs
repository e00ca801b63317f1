//! SRT subtitle writer.
//!
//! Writes an `SrtDocument` back to text. Every line is emitted with the
//! terminator it was parsed with, so a document that was not retimed
//! serializes to exactly the bytes it was parsed from.

use crate::subtitles::types::SrtDocument;

const BOM: char = '\u{feff}';

/// Write an `SrtDocument` to an SRT format string.
pub fn write_srt(doc: &SrtDocument) -> String {
    let capacity = doc
        .lines
        .iter()
        .map(|l| l.content.len() + l.ending.as_str().len())
        .sum::<usize>();
    let mut output = String::with_capacity(capacity + BOM.len_utf8());

    if doc.has_bom {
        output.push(BOM);
    }

    for line in &doc.lines {
        output.push_str(&line.content);
        output.push_str(line.ending.as_str());
    }

    output
}
