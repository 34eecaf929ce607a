//! Dictionary setup and layering.
//!
//! A session consults two dictionaries: the writable user dictionary
//! and a read-only system dictionary. The user dictionary shadows the
//! system one on lookup.

use std::path::{Path, PathBuf};

use tracing::debug;

use skk_core::jisyo::{Candidate, Jisyo, JisyoError};

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// None of the configured system dictionary paths exist. The host
    /// can report a configuration problem and keep running without
    /// conversion.
    #[error("no system dictionary found")]
    NoSystemJisyo,

    #[error(transparent)]
    Jisyo(#[from] JisyoError),

    #[error("unknown dictionary option: {0}")]
    UnknownOption(String),
}

#[derive(Debug, Default)]
pub struct Dictionaries {
    pub user: Jisyo,
    pub system: Jisyo,
}

impl Dictionaries {
    /// Load the user dictionary (absence tolerated; the path is
    /// remembered for the first save) and the first existing system
    /// dictionary. All system paths missing is `NoSystemJisyo`.
    pub fn load<P: AsRef<Path>>(
        user_path: Option<&Path>,
        system_paths: &[P],
    ) -> Result<Self, SetupError> {
        let mut dicts = Dictionaries::default();
        if let Some(path) = user_path {
            match dicts.user.load(path) {
                Ok(()) => {}
                Err(JisyoError::NotFound(_)) => dicts.user.set_save_path(path),
                Err(e) => return Err(e.into()),
            }
        }
        for path in system_paths {
            match dicts.system.load(path.as_ref()) {
                Ok(()) => return Ok(dicts),
                Err(JisyoError::NotFound(_)) => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Err(SetupError::NoSystemJisyo)
    }

    /// Build from a `user=PATH;SYSTEM;SYSTEM` spec string.
    pub fn from_spec(spec: &str) -> Result<Self, SetupError> {
        let parsed = DictSpec::parse(spec)?;
        Self::load(parsed.user.as_deref(), &parsed.systems)
    }

    /// Candidates for a headword; the user dictionary wins outright
    /// when it has the entry.
    pub fn lookup(&self, headword: &str, okuri: bool) -> Option<Vec<Candidate>> {
        self.user
            .lookup(headword, okuri)
            .or_else(|| self.system.lookup(headword, okuri))
            .map(<[Candidate]>::to_vec)
    }

    /// Save the user dictionary back to its load path, merging
    /// concurrent on-disk edits.
    pub fn save_user(&mut self) -> Result<(), JisyoError> {
        debug!(path = ?self.user.save_path(), "saving user dictionary");
        self.user.save()
    }
}

/// Parsed `user=PATH;SYSTEM;SYSTEM` dictionary spec.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DictSpec {
    pub user: Option<PathBuf>,
    pub systems: Vec<PathBuf>,
}

impl DictSpec {
    pub fn parse(spec: &str) -> Result<Self, SetupError> {
        let mut out = DictSpec::default();
        for token in spec.split(';') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match token.split_once('=') {
                Some((key, value)) if key.eq_ignore_ascii_case("user") => {
                    out.user = Some(PathBuf::from(value));
                }
                Some((key, _)) => return Err(SetupError::UnknownOption(key.to_string())),
                None => out.systems.push(PathBuf::from(token)),
            }
        }
        Ok(out)
    }
}
