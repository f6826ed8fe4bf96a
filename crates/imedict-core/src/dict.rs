//! Dictionary serializers for the supported IME engines.
//!
//! Both engines share one line layout, `reading<TAB>word<TAB>class[<TAB>explanation]`,
//! and differ only in how a line is encoded:
//! - MS-IME: UTF-16LE with a single `FF FE` byte order mark at the start of the stream
//! - Mozc: UTF-8, no byte order mark
//!
use std::io::Write;

use crate::model::{ReadingScope, WordRecord};

const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Ms,
    Mozc,
}

impl Engine {
    pub fn name(self) -> &'static str {
        match self {
            Engine::Ms => "ms",
            Engine::Mozc => "mozc",
        }
    }

    /// Bytes written once before the first line of the stream.
    pub fn byte_order_mark(self) -> &'static [u8] {
        match self {
            Engine::Ms => UTF16LE_BOM,
            Engine::Mozc => &[],
        }
    }

    pub fn encode_line(self, line: &str, out: &mut Vec<u8>) {
        match self {
            Engine::Ms => {
                for unit in line.encode_utf16().chain(std::iter::once(u16::from(b'\n'))) {
                    out.extend_from_slice(&unit.to_le_bytes());
                }
            }
            Engine::Mozc => {
                out.extend_from_slice(line.as_bytes());
                out.push(b'\n');
            }
        }
    }

    pub fn serialize(self, record: &WordRecord, scope: ReadingScope) -> Vec<u8> {
        let mut out = Vec::new();
        for line in dict_lines(record, scope) {
            self.encode_line(&line, &mut out);
        }
        out
    }

    /// Write `record` to `w` with a single `write_all`, so a record's lines
    /// always land contiguously.
    pub fn print_dict<W: Write>(
        self,
        w: &mut W,
        record: &WordRecord,
        scope: ReadingScope,
    ) -> std::io::Result<()> {
        w.write_all(&self.serialize(record, scope))
    }
}

/// Dictionary lines for `record`, without line terminators.
///
/// Order is words, then reading source (`reading` before `japanese_reading`),
/// then the readings within that source.
pub fn dict_lines(record: &WordRecord, scope: ReadingScope) -> Vec<String> {
    let mut lines = Vec::with_capacity(record.line_count(scope));
    for word in record.words() {
        for source in record.reading_sources(scope) {
            for reading in source {
                let mut line = [reading.as_str(), word.as_str(), record.word_class()].join("\t");
                if let Some(explanation) = record.explanation() {
                    line.push('\t');
                    line.push_str(explanation);
                }
                lines.push(line);
            }
        }
    }
    lines
}
