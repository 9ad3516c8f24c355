//! Source map builder (revision 3)
//!
//! Line-granular: every non-empty line of a mapped source gets one segment
//! pointing at column 0 of the same line in the original file. Framing text
//! (separators, the trailing `sourceMappingURL` comment) is unmapped.

use serde::Serialize;

use crate::domain::entities::SourceMapOptions;
use crate::error::AssetlineResult;

const BASE64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

#[derive(Debug, Clone, Copy)]
struct Segment {
    generated_column: u32,
    source: u32,
    original_line: u32,
}

/// Accumulates generated text positions while a bundle is assembled
#[derive(Debug)]
pub struct SourceMapBuilder {
    options: SourceMapOptions,
    sources: Vec<String>,
    contents: Vec<String>,
    lines: Vec<Vec<Segment>>,
    column: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RawSourceMap<'a> {
    version: u8,
    file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_root: Option<&'a str>,
    sources: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    sources_content: Option<&'a [String]>,
    names: [&'a str; 0],
    mappings: String,
}

impl SourceMapBuilder {
    pub fn new(options: SourceMapOptions) -> Self {
        Self {
            options,
            sources: Vec::new(),
            contents: Vec::new(),
            lines: vec![Vec::new()],
            column: 0,
        }
    }

    /// Append text that came from `source`
    pub fn add_mapped(&mut self, source: &str, content: &str) {
        let index = self.sources.len() as u32;
        self.sources.push(source.to_string());
        if self.options.sources_content {
            self.contents.push(content.to_string());
        }

        for (line_no, line) in content.split('\n').enumerate() {
            if line_no > 0 {
                self.new_line();
            }
            if !line.is_empty() {
                let segment = Segment {
                    generated_column: self.column,
                    source: index,
                    original_line: line_no as u32,
                };
                if let Some(current) = self.lines.last_mut() {
                    current.push(segment);
                }
            }
            self.column += line.encode_utf16().count() as u32;
        }
    }

    /// Append text with no original position
    pub fn add_unmapped(&mut self, text: &str) {
        for (line_no, line) in text.split('\n').enumerate() {
            if line_no > 0 {
                self.new_line();
            }
            self.column += line.encode_utf16().count() as u32;
        }
    }

    fn new_line(&mut self) {
        self.lines.push(Vec::new());
        self.column = 0;
    }

    /// The VLQ `mappings` string
    pub fn mappings(&self) -> String {
        let mut out = String::new();
        let mut prev_source = 0i64;
        let mut prev_line = 0i64;

        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            let mut prev_column = 0i64;
            for (j, segment) in line.iter().enumerate() {
                if j > 0 {
                    out.push(',');
                }
                encode_vlq(&mut out, segment.generated_column as i64 - prev_column);
                encode_vlq(&mut out, segment.source as i64 - prev_source);
                encode_vlq(&mut out, segment.original_line as i64 - prev_line);
                encode_vlq(&mut out, 0);
                prev_column = segment.generated_column as i64;
                prev_source = segment.source as i64;
                prev_line = segment.original_line as i64;
            }
        }

        out
    }

    /// Serialize the map for the generated file named `file`
    pub fn finish(&self, file: &str) -> AssetlineResult<Vec<u8>> {
        let raw = RawSourceMap {
            version: 3,
            file,
            source_root: self.options.source_root.as_deref(),
            sources: &self.sources,
            sources_content: self
                .options
                .sources_content
                .then_some(self.contents.as_slice()),
            names: [],
            mappings: self.mappings(),
        };
        Ok(serde_json::to_vec(&raw)?)
    }
}

fn encode_vlq(out: &mut String, value: i64) {
    let mut vlq = if value < 0 {
        ((-value as u64) << 1) | 1
    } else {
        (value as u64) << 1
    };
    loop {
        let mut digit = (vlq & 0b11111) as usize;
        vlq >>= 5;
        if vlq > 0 {
            digit |= 0b100000;
        }
        out.push(BASE64[digit] as char);
        if vlq == 0 {
            break;
        }
    }
}
