//! SKK dictionary: two headword→candidates partitions (okuri-ari /
//! okuri-nasi), the line-oriented text format, and the merge-on-save
//! protocol for the writable user dictionary.
//!
//! Candidate order is significant: the most recently chosen entry is
//! kept first. The user dictionary records every mutation in a history
//! log so that a concurrently modified file can be merged at save time
//! instead of overwritten wholesale.

mod format;

use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::sexp;

pub use format::{peek_line, JisyoEncoding};

#[derive(Debug, thiserror::Error)]
pub enum JisyoError {
    #[error("dictionary not found: {0}")]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One conversion candidate as stored in a dictionary entry.
///
/// `Text` keeps the annotation separate so it can be stripped for
/// display but written back verbatim. `Expr` keeps the original
/// expression source for round-tripping; the expression is evaluated
/// on every display, never cached, so time-dependent candidates stay
/// live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Text {
        text: String,
        annotation: Option<String>,
    },
    Expr {
        source: String,
    },
}

impl Candidate {
    pub fn text(s: impl Into<String>) -> Self {
        Candidate::Text {
            text: s.into(),
            annotation: None,
        }
    }

    /// Parse one raw candidate field (the text between slashes).
    pub fn parse(field: &str) -> Self {
        if field.len() > 2 && field.starts_with('(') && field.ends_with(')') {
            return Candidate::Expr {
                source: field.to_string(),
            };
        }
        let (raw_text, annotation) = match field.split_once(';') {
            Some((t, a)) => (t, Some(a.to_string())),
            None => (field, None),
        };
        Candidate::Text {
            text: unescape(raw_text),
            annotation,
        }
    }

    /// The string shown to the user: annotation stripped, expressions
    /// evaluated against the current environment.
    pub fn display(&self) -> String {
        match self {
            Candidate::Text { text, .. } => text.clone(),
            Candidate::Expr { source } => sexp::evaluate(source),
        }
    }

    /// The on-disk candidate field: `/` and `\` escaped, annotation
    /// reattached, expression source verbatim.
    pub fn source(&self) -> String {
        match self {
            Candidate::Text { text, annotation } => {
                let mut s = escape(text);
                if let Some(a) = annotation {
                    s.push(';');
                    s.push_str(a);
                }
                s
            }
            Candidate::Expr { source } => source.clone(),
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '\\' || c == '/' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// One user edit, replayed at save time when the on-disk file moved
/// under us. `None` marks a deleted entry.
#[derive(Debug, Clone)]
struct HistoryRecord {
    headword: String,
    okuri: bool,
    value: Option<Vec<Candidate>>,
}

#[derive(Debug, Default)]
pub struct Jisyo {
    ari: BTreeMap<String, Vec<Candidate>>,
    nasi: BTreeMap<String, Vec<Candidate>>,
    history: Vec<HistoryRecord>,
    path: Option<PathBuf>,
    loaded_mtime: Option<SystemTime>,
    encoding: JisyoEncoding,
}

impl Jisyo {
    pub fn new() -> Self {
        Self::default()
    }

    fn partition(&self, okuri: bool) -> &BTreeMap<String, Vec<Candidate>> {
        if okuri {
            &self.ari
        } else {
            &self.nasi
        }
    }

    fn partition_mut(&mut self, okuri: bool) -> &mut BTreeMap<String, Vec<Candidate>> {
        if okuri {
            &mut self.ari
        } else {
            &mut self.nasi
        }
    }

    pub fn lookup(&self, headword: &str, okuri: bool) -> Option<&[Candidate]> {
        self.partition(okuri).get(headword).map(|v| v.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.ari.is_empty() && self.nasi.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ari.len() + self.nasi.len()
    }

    /// Iterate one partition in headword order.
    pub fn entries(&self, okuri: bool) -> impl Iterator<Item = (&str, &[Candidate])> {
        self.partition(okuri)
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Replace an entry without recording history (loading, merging).
    pub fn store(&mut self, headword: &str, okuri: bool, value: Vec<Candidate>) {
        self.partition_mut(okuri).insert(headword.to_string(), value);
    }

    /// Replace an entry and record the edit for merge-on-save.
    pub fn store_and_learn(&mut self, headword: &str, okuri: bool, value: Vec<Candidate>) {
        self.store(headword, okuri, value.clone());
        self.history.push(HistoryRecord {
            headword: headword.to_string(),
            okuri,
            value: Some(value),
        });
    }

    /// Remove an entry without recording history.
    pub fn remove(&mut self, headword: &str, okuri: bool) {
        self.partition_mut(okuri).remove(headword);
    }

    /// Remove an entry and record the deletion for merge-on-save.
    pub fn remove_and_learn(&mut self, headword: &str, okuri: bool) {
        self.remove(headword, okuri);
        self.history.push(HistoryRecord {
            headword: headword.to_string(),
            okuri,
            value: None,
        });
    }

    /// Read a dictionary file into this store, remembering path,
    /// modification time and encoding for a later `save`.
    ///
    /// A missing file is reported as `JisyoError::NotFound` so callers
    /// can fall through to an alternate path.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), JisyoError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                JisyoError::NotFound(path.to_path_buf())
            } else {
                JisyoError::Io(e)
            }
        })?;
        let mtime = file.metadata().and_then(|m| m.modified()).ok();
        self.load_reader(BufReader::new(file))?;
        debug!(path = %path.display(), entries = self.len(), "dictionary loaded");
        self.path = Some(path.to_path_buf());
        self.loaded_mtime = mtime;
        Ok(())
    }

    /// Remember a save target without loading (fresh user dictionary).
    pub fn set_save_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    pub fn save_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn encoding(&self) -> JisyoEncoding {
        self.encoding
    }

    pub fn set_encoding(&mut self, encoding: JisyoEncoding) {
        self.encoding = encoding;
    }

    /// Write the dictionary to its remembered path, in the encoding it
    /// was loaded with.
    ///
    /// The file is written next to the target as `NAME.TMP`, the old
    /// file is renamed to `NAME.BAK` (any stale backup removed first),
    /// and the temporary is renamed into place, so a crash never
    /// leaves a half-written dictionary as the canonical file.
    ///
    /// If the file on disk was modified since this store loaded it,
    /// the on-disk content is reloaded and this session's mutation
    /// history is replayed on top before writing, merging concurrent
    /// edits at per-headword granularity.
    pub fn save(&mut self) -> Result<(), JisyoError> {
        let Some(path) = self.path.clone() else {
            return Ok(());
        };
        if self.disk_moved(&path) {
            debug!(path = %path.display(), "on-disk dictionary changed, merging");
            self.merge_from_disk(&path)?;
        }
        self.install(&path)?;
        self.history.clear();
        self.loaded_mtime = fs::metadata(&path).and_then(|m| m.modified()).ok();
        Ok(())
    }

    fn disk_moved(&self, path: &Path) -> bool {
        let disk = fs::metadata(path).and_then(|m| m.modified()).ok();
        match (self.loaded_mtime, disk) {
            (Some(loaded), Some(disk)) => loaded != disk,
            // Loaded from a file that has since vanished: the on-disk
            // state differs from what we loaded, so treat it as moved.
            (Some(_), None) => true,
            // Never loaded: only merge if something appeared on disk.
            (None, disk) => disk.is_some(),
        }
    }

    fn merge_from_disk(&mut self, path: &Path) -> Result<(), JisyoError> {
        let mut fresh = Jisyo::new();
        match fresh.load(path) {
            Ok(()) => {}
            Err(JisyoError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }
        for rec in &self.history {
            match &rec.value {
                Some(list) => fresh.store(&rec.headword, rec.okuri, list.clone()),
                None => fresh.remove(&rec.headword, rec.okuri),
            }
        }
        self.ari = fresh.ari;
        self.nasi = fresh.nasi;
        Ok(())
    }

    fn install(&self, path: &Path) -> Result<(), JisyoError> {
        let tmp = sibling(path, ".TMP");
        let bak = sibling(path, ".BAK");
        let mut fd = File::create(&tmp)?;
        self.write_to(&mut fd, self.encoding)?;
        fd.sync_all()?;
        drop(fd);
        let _ = fs::remove_file(&bak);
        match fs::rename(path, &bak) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
