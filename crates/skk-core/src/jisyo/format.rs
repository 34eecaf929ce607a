//! The line-oriented dictionary text format.
//!
//! Data lines are `HEADWORD /candidate/candidate/`; the section
//! markers `;; okuri-ari entries.` / `;; okuri-nasi entries.` switch
//! the partition for subsequent lines. A leading comment may carry a
//! `-*- coding: utf-8 -*-` pragma; without one the file is decoded as
//! EUC-JP. Lines that do not parse are skipped silently — long-lived
//! user dictionaries accumulate hand-edited oddities and rejecting
//! them would lose data.

use std::collections::HashMap;
use std::io;
use std::io::{BufRead, Cursor, Read, Write};

use encoding_rs::EUC_JP;

use super::{Candidate, Jisyo};

const ARI_HEADER: &str = ";; okuri-ari entries.";
const NASI_HEADER: &str = ";; okuri-nasi entries.";
const UTF8_PRAGMA: &str = ";; -*- mode: fundamental; coding: utf-8 -*-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JisyoEncoding {
    #[default]
    Utf8,
    EucJp,
}

/// Read the first line of `r` without losing it: returns the line's
/// raw bytes and a reader that yields the original stream from the
/// start.
pub fn peek_line<R: BufRead>(mut r: R) -> io::Result<(Vec<u8>, io::Chain<Cursor<Vec<u8>>, R>)> {
    let mut line = Vec::new();
    r.read_until(b'\n', &mut line)?;
    Ok((line.clone(), Cursor::new(line).chain(r)))
}

/// Parse a `-*- key: value; key: value -*-` pragma body.
fn pragma(line: &str) -> Option<HashMap<String, String>> {
    let (_, body) = line.split_once("-*-")?;
    let (body, _) = body.split_once("-*-")?;
    let mut map = HashMap::new();
    for token in body.split(';') {
        if let Some((key, value)) = token.split_once(':') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Some(map)
}

/// Split a candidate list on `/`, honoring backslash escapes. The
/// returned fields are raw (still escaped).
fn split_fields(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let bytes = s.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'/' => {
                out.push(&s[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < s.len() {
        out.push(&s[start..]);
    }
    out
}

impl Jisyo {
    /// Read dictionary text from a stream, auto-detecting the encoding
    /// from the first line.
    pub fn load_reader<R: BufRead>(&mut self, r: R) -> io::Result<()> {
        let (first, mut rest) = peek_line(r)?;
        let mut utf8 = false;
        if first.first() == Some(&b';') {
            let line = String::from_utf8_lossy(&first);
            if let Some(m) = pragma(&line[1..]) {
                if m.get("coding").map(String::as_str) == Some("utf-8") {
                    utf8 = true;
                }
            }
        }
        let mut bytes = Vec::new();
        rest.read_to_end(&mut bytes)?;
        // Decoding is best-effort either way; a bad byte sequence
        // degrades one line, not the whole file.
        let text = if utf8 {
            String::from_utf8_lossy(&bytes).into_owned()
        } else {
            let (cow, _, _) = EUC_JP.decode(&bytes);
            cow.into_owned()
        };
        self.encoding = if utf8 {
            JisyoEncoding::Utf8
        } else {
            JisyoEncoding::EucJp
        };
        self.parse_str(&text);
        Ok(())
    }

    /// Parse already-decoded dictionary text into this store.
    pub fn parse_str(&mut self, text: &str) {
        let mut okuri = false;
        for line in text.lines() {
            okuri = self.parse_line(line, okuri);
        }
    }

    /// Parse one line; returns the partition flag for the next line.
    fn parse_line(&mut self, line: &str, okuri: bool) -> bool {
        if line.starts_with(";;") {
            if line.starts_with(ARI_HEADER) {
                return true;
            }
            if line.starts_with(NASI_HEADER) {
                return false;
            }
            return okuri;
        }
        if line.is_empty() || line.starts_with(';') {
            return okuri;
        }
        let Some((headword, fields)) = line.split_once(" /") else {
            // Malformed data line: skipped, not reported.
            return okuri;
        };
        let mut values = self
            .lookup(headword, okuri)
            .map(<[Candidate]>::to_vec)
            .unwrap_or_default();
        for field in split_fields(fields) {
            if !field.is_empty() {
                values.push(Candidate::parse(field));
            }
        }
        self.store(headword, okuri, values);
        okuri
    }

    /// Write both partitions in the text format. UTF-8 output carries
    /// the coding pragma; EUC-JP output does not.
    pub fn write_to<W: Write>(&self, w: &mut W, encoding: JisyoEncoding) -> io::Result<()> {
        let mut out = String::new();
        if encoding == JisyoEncoding::Utf8 {
            out.push_str(UTF8_PRAGMA);
            out.push('\n');
        }
        out.push_str(ARI_HEADER);
        out.push('\n');
        for (key, list) in &self.ari {
            dump_pair(&mut out, key, list);
        }
        out.push('\n');
        out.push_str(NASI_HEADER);
        out.push('\n');
        for (key, list) in &self.nasi {
            dump_pair(&mut out, key, list);
        }
        match encoding {
            JisyoEncoding::Utf8 => w.write_all(out.as_bytes()),
            JisyoEncoding::EucJp => {
                let (bytes, _, _) = EUC_JP.encode(&out);
                w.write_all(&bytes)
            }
        }
    }
}

fn dump_pair(out: &mut String, key: &str, list: &[Candidate]) {
    out.push_str(key);
    out.push_str(" /");
    for candidate in list {
        out.push_str(&candidate.source());
        out.push('/');
    }
    out.push('\n');
}
