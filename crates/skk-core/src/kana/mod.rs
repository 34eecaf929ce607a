//! Kana script tables.
//!
//! One immutable table per script, exposing exact key lookup plus the
//! prefix queries the transliteration engine needs to decide whether a
//! pending buffer is still viable.

mod tables;

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

pub use tables::ROMAJI_TRIGGER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Hiragana,
    Katakana,
    Hankaku,
}

impl Script {
    /// Target of the hiragana⇄katakana toggle.
    pub fn hira_kata_toggle(self) -> Script {
        match self {
            Script::Hiragana => Script::Katakana,
            Script::Katakana | Script::Hankaku => Script::Hiragana,
        }
    }

    /// Target of the fullwidth⇄halfwidth toggle.
    pub fn han_zen_toggle(self) -> Script {
        match self {
            Script::Hiragana | Script::Katakana => Script::Hankaku,
            Script::Hankaku => Script::Hiragana,
        }
    }

    /// Short mode indicator for the host's status display.
    pub fn indicator(self) -> &'static str {
        match self {
            Script::Hiragana => "あ",
            Script::Katakana => "ア",
            Script::Hankaku => "ｱ",
        }
    }
}

pub struct KanaTable {
    script: Script,
    map: HashMap<&'static str, &'static str>,
    starts: HashSet<char>,
    prefixes: HashSet<&'static str>,
}

impl KanaTable {
    /// Table for `script`, built once and shared.
    pub fn of(script: Script) -> &'static KanaTable {
        static TABLES: OnceLock<[KanaTable; 3]> = OnceLock::new();
        let tables = TABLES.get_or_init(|| {
            [
                KanaTable::build(Script::Hiragana, tables::HIRAGANA),
                KanaTable::build(Script::Katakana, tables::KATAKANA),
                KanaTable::build(Script::Hankaku, tables::HANKAKU),
            ]
        });
        match script {
            Script::Hiragana => &tables[0],
            Script::Katakana => &tables[1],
            Script::Hankaku => &tables[2],
        }
    }

    fn build(script: Script, entries: &'static [(&'static str, &'static str)]) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        let mut starts = HashSet::new();
        let mut prefixes = HashSet::new();
        for &(key, kana) in entries {
            map.insert(key, kana);
            if let Some(first) = key.chars().next() {
                starts.insert(first);
            }
            for end in 1..key.len() {
                prefixes.insert(&key[..end]);
            }
        }
        Self {
            script,
            map,
            starts,
            prefixes,
        }
    }

    pub fn script(&self) -> Script {
        self.script
    }

    /// Exact lookup of a key sequence.
    pub fn get(&self, seq: &str) -> Option<&'static str> {
        self.map.get(seq).copied()
    }

    /// Whether `c` begins at least one key sequence.
    pub fn starts_sequence(&self, c: char) -> bool {
        self.starts.contains(&c)
    }

    /// Whether `seq` is a strict prefix of at least one key sequence.
    pub fn is_viable_prefix(&self, seq: &str) -> bool {
        self.prefixes.contains(seq)
    }

    /// Small-tsu mora for this script, used for doubled consonants.
    pub fn small_tsu(&self) -> &'static str {
        self.map["xtsu"]
    }

    /// Standalone moraic n for this script.
    pub fn moraic_n(&self) -> &'static str {
        self.map["nn"]
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.map.keys().copied()
    }
}

/// Half-width ASCII to full-width form, for the full-width latin submode.
pub fn han_to_zen(c: char) -> char {
    match c {
        ' ' => '\u{3000}',
        '!'..='~' => char::from_u32(c as u32 - '!' as u32 + '！' as u32).unwrap_or(c),
        _ => c,
    }
}
