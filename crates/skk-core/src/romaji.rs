//! Romaji-to-kana transliteration.
//!
//! `KanaFeed` consumes one keystroke at a time against the active
//! script table, accumulating a pending latin buffer and emitting
//! composed kana. Lookup tries the longest suffix of the pending
//! buffer first (4 down to 1 characters); the first match wins and
//! replaces the matched suffix. Emitted text ending in latin letters
//! re-primes the pending buffer, which is how the `nk` → `んk` table
//! entries chain the moraic n into the next mora.

use crate::kana::{KanaTable, Script, ROMAJI_TRIGGER};

/// What a single keystroke did to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedResult {
    /// A table entry fired and kana was appended to the composed text.
    Emitted,
    /// The key was absorbed into the pending buffer.
    Pending,
    /// Not a kana key for the active table; the caller decides.
    Unhandled,
}

#[derive(Debug, Clone)]
pub struct KanaFeed {
    script: Script,
    composed: String,
    pending: String,
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Split kana output into (kana, trailing latin letters to re-pend).
fn split_repend(kana: &str) -> (&str, &str) {
    let cut = kana
        .char_indices()
        .find(|(_, c)| c.is_ascii_lowercase())
        .map(|(i, _)| i)
        .unwrap_or(kana.len());
    kana.split_at(cut)
}

impl KanaFeed {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            composed: String::new(),
            pending: String::new(),
        }
    }

    pub fn script(&self) -> Script {
        self.script
    }

    /// Swap the active table. The pending buffer is kept as-is.
    pub fn set_script(&mut self, script: Script) {
        self.script = script;
    }

    pub fn composed(&self) -> &str {
        &self.composed
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// The text the host should display for this feed.
    pub fn display(&self) -> String {
        format!("{}{}", self.composed, self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.composed.is_empty() && self.pending.is_empty()
    }

    /// Restore previously taken composed text (retreat from conversion).
    pub fn restore(&mut self, composed: String) {
        self.composed = composed;
        self.pending.clear();
    }

    /// Drain the composed text, leaving the pending buffer untouched.
    pub fn take_composed(&mut self) -> String {
        std::mem::take(&mut self.composed)
    }

    /// Drain everything, resolving a lone pending "n" and flushing any
    /// other remainder literally.
    pub fn take_all(&mut self) -> String {
        self.flush();
        std::mem::take(&mut self.composed)
    }

    pub fn clear(&mut self) {
        self.composed.clear();
        self.pending.clear();
    }

    /// Resolve the pending buffer at input end: a lone "n" becomes the
    /// moraic n, anything else is emitted unconverted.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let table = KanaTable::of(self.script);
        if self.pending == "n" {
            self.composed.push_str(table.moraic_n());
        } else {
            self.composed.push_str(&self.pending);
        }
        self.pending.clear();
    }

    /// Feed one keystroke. Uppercase is case-folded by the caller
    /// before it gets here; non-ASCII and control characters are never
    /// kana keys.
    pub fn feed(&mut self, ch: char) -> FeedResult {
        if !ch.is_ascii_graphic() {
            return FeedResult::Unhandled;
        }
        let c = ch.to_ascii_lowercase();
        let table = KanaTable::of(self.script);

        if self.pending.is_empty() && !table.starts_sequence(c) {
            return FeedResult::Unhandled;
        }

        let mut buffer = self.pending.clone();
        buffer.push(c);
        let chars: Vec<char> = buffer.chars().collect();

        // Longest suffix first.
        for len in (1..=chars.len().min(4)).rev() {
            let start = chars.len() - len;
            let suffix: String = chars[start..].iter().collect();
            if let Some(kana) = table.get(&suffix) {
                let dropped: String = chars[..start].iter().collect();
                self.composed.push_str(&dropped);
                let (kana, repend) = split_repend(kana);
                self.composed.push_str(kana);
                self.pending = repend.to_string();
                return FeedResult::Emitted;
            }
        }

        // Doubled consonant: emit small-tsu, keep the consonant pending.
        if chars.len() >= 2 {
            let last = chars[chars.len() - 1];
            let prev = chars[chars.len() - 2];
            if last == prev && last.is_ascii_lowercase() && !is_vowel(last) && last != 'n' {
                let dropped: String = chars[..chars.len() - 2].iter().collect();
                self.composed.push_str(&dropped);
                self.composed.push_str(table.small_tsu());
                self.pending = last.to_string();
                return FeedResult::Emitted;
            }
        }

        if self.pending.is_empty() || ROMAJI_TRIGGER.contains(c) {
            // Keep only the longest suffix that can still grow into a
            // key; anything in front of it becomes literal text.
            for start in 0..chars.len() {
                let tail: String = chars[start..].iter().collect();
                if table.is_viable_prefix(&tail) {
                    let dropped: String = chars[..start].iter().collect();
                    self.composed.push_str(&dropped);
                    self.pending = tail;
                    return FeedResult::Pending;
                }
            }
            // Nothing viable; resolve the old pending at input end and
            // take the new key on its own.
            self.flush();
            if table.starts_sequence(c) {
                self.pending.push(c);
            } else {
                self.composed.push(c);
            }
            return FeedResult::Pending;
        }

        // A non-trigger key ends the accumulation; the buffer is
        // resolved as at input end and the key stays with the caller.
        self.flush();
        FeedResult::Unhandled
    }

    /// Append a character to the composed text as-is (literal digits
    /// and symbols inside a reading).
    pub fn push_literal(&mut self, c: char) {
        self.composed.push(c);
    }

    /// Resolve a pending doubled consonant into a small tsu, dropping
    /// the consonant. Used when an inflection mora takes over the
    /// doubling (`itT...` → reading gains っ, okuri starts with t).
    pub fn absorb_sokuon(&mut self) {
        self.composed
            .push_str(KanaTable::of(self.script).small_tsu());
        self.pending.clear();
    }

    /// Feed a whole string, as typed.
    pub fn feed_str(&mut self, s: &str) {
        for c in s.chars() {
            self.feed(c);
        }
    }

    /// Drop the last pending character, or else the last composed one.
    /// Returns false if there was nothing to remove.
    pub fn backspace(&mut self) -> bool {
        if self.pending.pop().is_some() {
            return true;
        }
        self.composed.pop().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> KanaFeed {
        let mut feed = KanaFeed::new(Script::Hiragana);
        feed.feed_str(s);
        feed
    }

    #[test]
    fn test_basic_ka() {
        let f = typed("ka");
        assert_eq!(f.composed(), "か");
        assert_eq!(f.pending(), "");
    }

    #[test]
    fn test_vowel_immediate() {
        let f = typed("a");
        assert_eq!(f.composed(), "あ");
    }

    #[test]
    fn test_consecutive() {
        let f = typed("kakiku");
        assert_eq!(f.composed(), "かきく");
        assert_eq!(f.pending(), "");
    }

    #[test]
    fn test_youon_sha() {
        let f = typed("sha");
        assert_eq!(f.composed(), "しゃ");
    }

    #[test]
    fn test_chi() {
        let f = typed("chi");
        assert_eq!(f.composed(), "ち");
    }

    #[test]
    fn test_sokuon_tta() {
        let f = typed("tta");
        assert_eq!(f.composed(), "った");
        assert_eq!(f.pending(), "");
    }

    #[test]
    fn test_sokuon_pending_tt() {
        let f = typed("tt");
        assert_eq!(f.composed(), "っ");
        assert_eq!(f.pending(), "t");
    }

    #[test]
    fn test_moraic_n_chain() {
        let f = typed("kanji");
        assert_eq!(f.composed(), "かんじ");
        assert_eq!(f.pending(), "");
    }

    #[test]
    fn test_n_stays_pending() {
        let f = typed("kan");
        assert_eq!(f.composed(), "か");
        assert_eq!(f.pending(), "n");
    }

    #[test]
    fn test_nn_resolves() {
        let f = typed("kann");
        assert_eq!(f.composed(), "かん");
        assert_eq!(f.pending(), "");
    }

    #[test]
    fn test_n_flush() {
        let mut f = typed("kan");
        f.flush();
        assert_eq!(f.composed(), "かん");
        assert_eq!(f.pending(), "");
    }

    #[test]
    fn test_n_before_vowel_is_na_row() {
        let f = typed("na");
        assert_eq!(f.composed(), "な");
    }

    #[test]
    fn test_katakana_script() {
        let mut f = KanaFeed::new(Script::Katakana);
        f.feed_str("katta");
        assert_eq!(f.composed(), "カッタ");
    }

    #[test]
    fn test_script_swap_keeps_pending() {
        let mut f = KanaFeed::new(Script::Hiragana);
        f.feed_str("k");
        f.set_script(Script::Katakana);
        assert_eq!(f.pending(), "k");
        f.feed('a');
        assert_eq!(f.composed(), "カ");
    }

    #[test]
    fn test_unhandled_digit() {
        let mut f = KanaFeed::new(Script::Hiragana);
        assert_eq!(f.feed('5'), FeedResult::Unhandled);
        assert!(f.is_empty());
    }

    #[test]
    fn test_z_sequence() {
        let f = typed("z.");
        assert_eq!(f.composed(), "…");
    }

    #[test]
    fn test_z_digit() {
        let f = typed("z2");
        assert_eq!(f.composed(), "▽");
    }

    #[test]
    fn test_dropped_prefix_becomes_literal() {
        // "c" can only continue as cha/chi/..., so "ck" drops the c.
        let f = typed("cka");
        assert_eq!(f.composed(), "cか");
    }

    #[test]
    fn test_flush_literal_remainder() {
        let mut f = typed("ch");
        f.flush();
        assert_eq!(f.composed(), "ch");
    }

    #[test]
    fn test_backspace_pending_then_composed() {
        let mut f = typed("kak");
        assert_eq!(f.pending(), "k");
        assert!(f.backspace());
        assert_eq!(f.pending(), "");
        assert_eq!(f.composed(), "か");
        assert!(f.backspace());
        assert!(f.is_empty());
        assert!(!f.backspace());
    }

    #[test]
    fn test_xtu_small_tsu() {
        let f = typed("xtu");
        assert_eq!(f.composed(), "っ");
    }

    #[test]
    fn test_apostrophe_breaks_n() {
        let f = typed("n'a");
        assert_eq!(f.composed(), "んあ");
    }

    #[test]
    fn test_pending_n_resolves_before_trigger_symbol() {
        let f = typed("n5");
        assert_eq!(f.composed(), "ん5");
        assert_eq!(f.pending(), "");
    }

    #[test]
    fn test_absorb_sokuon() {
        let mut f = typed("it");
        assert_eq!(f.pending(), "t");
        f.absorb_sokuon();
        assert_eq!(f.composed(), "いっ");
        assert_eq!(f.pending(), "");
    }
}
