//! Per-input-line conversion controller.
//!
//! A `LineCtl` runs the conversion state machine for one input line:
//! the host line itself, plus one stacked controller per open
//! minibuffer (word registration runs a full recursive input line, so
//! a registered word can itself be typed with kana conversion). The
//! session feeds every keystroke to the top of the stack; nothing in
//! here blocks on input.

use skk_core::config::EngineConfig;
use skk_core::kana::{han_to_zen, KanaTable, Script};
use skk_core::romaji::{FeedResult, KanaFeed};

use crate::candidates::SelectState;
use crate::dicts::Dictionaries;
use crate::types::Key;

/// What a stacked controller is for.
pub(crate) enum Purpose {
    Host,
    Register(RegisterContext),
    ConfirmDelete(DeleteContext),
}

/// Pending word registration: where the result goes and how to restore
/// the marked segment if the user aborts.
pub(crate) struct RegisterContext {
    pub headword: String,
    pub okuri: bool,
    pub okuri_kana: String,
    /// Reading display to put back behind the marker on abort.
    pub restore: String,
}

/// Pending candidate deletion, waiting for a yes/no answer.
pub(crate) struct DeleteContext {
    pub headword: String,
    pub okuri: bool,
    /// Raw candidate field to remove from the user dictionary.
    pub source: String,
}

/// An inflection mora being typed after the okuri trigger.
pub(crate) struct OkuriInput {
    /// Lowered trigger consonant, appended to the lookup key.
    pub first: char,
    pub feed: KanaFeed,
}

pub(crate) enum CtlState {
    /// Plain kana typing, no marker.
    Direct,
    /// Marker placed, accumulating a reading.
    Reading { okuri: Option<OkuriInput> },
    /// A candidate is displayed (inline cycling or paged listing).
    Select(SelectState),
}

pub(crate) enum Finish {
    Submit,
    Abort,
}

/// Internal per-keystroke outcome, routed by the session.
#[derive(Default)]
pub(crate) struct Out {
    pub consumed: bool,
    pub commit: Option<String>,
    pub exit_mode: bool,
    pub push: Option<Box<LineCtl>>,
    pub finish: Option<Finish>,
}

impl Out {
    pub(crate) fn consumed() -> Self {
        Out {
            consumed: true,
            ..Out::default()
        }
    }

    pub(crate) fn commit(text: String) -> Self {
        Out {
            consumed: true,
            commit: Some(text),
            ..Out::default()
        }
    }

    pub(crate) fn add_commit(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match &mut self.commit {
            Some(s) => s.push_str(text),
            None => self.commit = Some(text.to_string()),
        }
    }
}

pub(crate) struct LineCtl {
    pub purpose: Purpose,
    /// Prompt label (minibuffer lines only).
    pub prompt: String,
    /// Committed text on this line (minibuffer lines only; the host
    /// line's text lives in the host buffer).
    pub text: String,
    pub feed: KanaFeed,
    pub state: CtlState,
    /// `l` on a minibuffer line: literal ASCII until Ctrl-J.
    latin: bool,
    /// `L`: full-width latin until Ctrl-J.
    zen_latin: bool,
}

impl LineCtl {
    pub(crate) fn host(script: Script) -> Self {
        Self {
            purpose: Purpose::Host,
            prompt: String::new(),
            text: String::new(),
            feed: KanaFeed::new(script),
            state: CtlState::Direct,
            latin: false,
            zen_latin: false,
        }
    }

    pub(crate) fn register(ctx: RegisterContext) -> Self {
        Self {
            prompt: ctx.headword.clone(),
            purpose: Purpose::Register(ctx),
            text: String::new(),
            feed: KanaFeed::new(Script::Hiragana),
            state: CtlState::Direct,
            latin: false,
            zen_latin: false,
        }
    }

    pub(crate) fn confirm_delete(ctx: DeleteContext, prompt: String) -> Self {
        Self {
            purpose: Purpose::ConfirmDelete(ctx),
            prompt,
            text: String::new(),
            feed: KanaFeed::new(Script::Hiragana),
            state: CtlState::Direct,
            latin: false,
            zen_latin: false,
        }
    }

    fn is_minibuffer(&self) -> bool {
        !matches!(self.purpose, Purpose::Host)
    }

    pub(crate) fn script(&self) -> Script {
        self.feed.script()
    }

    pub(crate) fn is_idle(&self) -> bool {
        matches!(self.state, CtlState::Direct)
    }

    /// The in-progress segment to display after this line's committed
    /// text; empty means no segment is marked.
    pub(crate) fn marked_display(&self, config: &EngineConfig) -> String {
        match &self.state {
            CtlState::Direct => self.feed.pending().to_string(),
            CtlState::Reading { okuri } => {
                let mut s = format!("{}{}", config.display.reading_marker, self.feed.display());
                if let Some(ok) = okuri {
                    s.push_str(&config.display.okuri_separator);
                    s.push_str(&ok.feed.display());
                }
                s
            }
            CtlState::Select(sel) => sel.marked_display(config),
        }
    }

    pub(crate) fn line_display(&self, config: &EngineConfig) -> String {
        format!("{}{}", self.text, self.marked_display(config))
    }

    pub(crate) fn dispatch(
        &mut self,
        key: Key,
        dicts: &mut Dictionaries,
        config: &EngineConfig,
    ) -> Out {
        if matches!(self.purpose, Purpose::ConfirmDelete(_)) {
            return self.dispatch_plain(key);
        }
        match self.state {
            CtlState::Direct => self.on_direct(key),
            CtlState::Reading { .. } => self.on_reading(key, dicts),
            CtlState::Select(_) => self.on_select(key, dicts, config),
        }
    }

    /// Plain text entry: the delete confirmation takes a literal
    /// answer, with no kana conversion.
    fn dispatch_plain(&mut self, key: Key) -> Out {
        match key {
            Key::Char(c) => {
                self.text.push(c);
                Out::consumed()
            }
            Key::Backspace => {
                self.text.pop();
                Out::consumed()
            }
            Key::Enter => Out {
                consumed: true,
                finish: Some(Finish::Submit),
                ..Out::default()
            },
            Key::Ctrl('g') => Out {
                consumed: true,
                finish: Some(Finish::Abort),
                ..Out::default()
            },
            _ => Out::consumed(),
        }
    }

    fn on_direct(&mut self, key: Key) -> Out {
        if self.latin {
            return match key {
                Key::Ctrl('j') => {
                    self.latin = false;
                    Out::consumed()
                }
                Key::Char(c) => Out::commit(c.to_string()),
                _ => self.dispatch_plain(key),
            };
        }
        match key {
            Key::Ctrl('j') => {
                if self.zen_latin {
                    self.zen_latin = false;
                    return Out::consumed();
                }
                let mut out = Out::consumed();
                out.add_commit(&self.feed.take_all());
                out.exit_mode = true;
                out
            }
            Key::Ctrl('g') => {
                if self.is_minibuffer() {
                    Out {
                        consumed: true,
                        finish: Some(Finish::Abort),
                        ..Out::default()
                    }
                } else {
                    let mut out = Out::consumed();
                    out.exit_mode = true;
                    out
                }
            }
            Key::Ctrl('q') => {
                self.feed
                    .set_script(self.feed.script().han_zen_toggle());
                Out::consumed()
            }
            Key::Enter => {
                let mut out = Out::default();
                out.add_commit(&self.feed.take_all());
                if self.is_minibuffer() {
                    out.consumed = true;
                    out.finish = Some(Finish::Submit);
                } else {
                    // The host runs its own line acceptance.
                    out.consumed = false;
                }
                out
            }
            Key::Backspace => {
                if !self.feed.is_empty() {
                    self.feed.backspace();
                    return Out::consumed();
                }
                if self.is_minibuffer() {
                    self.text.pop();
                    return Out::consumed();
                }
                // Host buffer editing belongs to the host.
                Out::default()
            }
            Key::Char(c) => self.on_direct_char(c),
            Key::Ctrl(_) => Out::default(),
        }
    }

    fn on_direct_char(&mut self, c: char) -> Out {
        if self.zen_latin {
            return Out::commit(han_to_zen(c).to_string());
        }
        match c {
            'q' => {
                self.feed
                    .set_script(self.feed.script().hira_kata_toggle());
                return Out::consumed();
            }
            'l' => {
                let mut out = Out::consumed();
                out.add_commit(&self.feed.take_all());
                if self.is_minibuffer() {
                    // A prompt line cannot leave the mode; it drops to
                    // literal ASCII until Ctrl-J instead.
                    self.latin = true;
                } else {
                    out.exit_mode = true;
                }
                return out;
            }
            'L' => {
                let mut out = Out::consumed();
                out.add_commit(&self.feed.take_all());
                self.zen_latin = true;
                return out;
            }
            'Q' => {
                self.feed.flush();
                let mut out = Out::consumed();
                out.add_commit(&self.feed.take_composed());
                self.state = CtlState::Reading { okuri: None };
                return out;
            }
            _ => {}
        }
        let lower = c.to_ascii_lowercase();
        if c.is_ascii_uppercase() && KanaTable::of(self.feed.script()).starts_sequence(lower) {
            // Conversion trigger: place the marker, then type normally.
            self.feed.flush();
            let mut out = Out::consumed();
            out.add_commit(&self.feed.take_composed());
            self.state = CtlState::Reading { okuri: None };
            self.feed.feed(lower);
            return out;
        }
        match self.feed.feed(c) {
            FeedResult::Emitted | FeedResult::Pending => {
                let mut out = Out::consumed();
                out.add_commit(&self.feed.take_composed());
                out
            }
            FeedResult::Unhandled => {
                let mut out = Out::consumed();
                let mut text = self.feed.take_composed();
                text.push(c);
                out.add_commit(&text);
                out
            }
        }
    }

    fn on_reading(&mut self, key: Key, dicts: &mut Dictionaries) -> Out {
        match key {
            Key::Ctrl('g') => {
                let CtlState::Reading { okuri } = &mut self.state else {
                    unreachable!()
                };
                if okuri.is_some() {
                    // Drop only the in-progress inflection.
                    *okuri = None;
                } else {
                    self.feed.clear();
                    self.state = CtlState::Direct;
                }
                Out::consumed()
            }
            Key::Ctrl('j') => {
                // Kakutei: the reading is committed as it stands.
                let mut out = Out::consumed();
                out.add_commit(&self.take_reading_text());
                self.state = CtlState::Direct;
                out
            }
            Key::Ctrl('q') => {
                self.feed
                    .set_script(self.feed.script().han_zen_toggle());
                Out::consumed()
            }
            Key::Enter => {
                let mut out = Out::default();
                out.add_commit(&self.take_reading_text());
                self.state = CtlState::Direct;
                if self.is_minibuffer() {
                    out.consumed = true;
                    out.finish = Some(Finish::Submit);
                } else {
                    out.consumed = false;
                }
                out
            }
            Key::Backspace => {
                let CtlState::Reading { okuri } = &mut self.state else {
                    unreachable!()
                };
                if let Some(ok) = okuri {
                    if !ok.feed.backspace() {
                        *okuri = None;
                    }
                    return Out::consumed();
                }
                if !self.feed.is_empty() {
                    self.feed.backspace();
                } else {
                    self.state = CtlState::Direct;
                }
                Out::consumed()
            }
            Key::Char(' ') => self.on_reading_space(dicts),
            Key::Char('q') => {
                self.feed
                    .set_script(self.feed.script().hira_kata_toggle());
                Out::consumed()
            }
            Key::Char(c) => self.on_reading_char(c, dicts),
            Key::Ctrl(_) => Out::consumed(),
        }
    }

    fn take_reading_text(&mut self) -> String {
        let mut text = self.feed.take_all();
        if let CtlState::Reading {
            okuri: Some(ok), ..
        } = &mut self.state
        {
            text.push_str(&ok.feed.take_all());
        }
        text
    }

    fn on_reading_space(&mut self, dicts: &mut Dictionaries) -> Out {
        let CtlState::Reading { okuri } = &mut self.state else {
            unreachable!()
        };
        if let Some(mut ok) = okuri.take() {
            ok.feed.flush();
            let kana = ok.feed.take_composed();
            let reading = self.feed.take_composed();
            let okuri = if kana.is_empty() {
                None
            } else {
                Some((ok.first, kana))
            };
            return self.start_henkan(reading, okuri, dicts);
        }
        self.feed.flush();
        let reading = self.feed.take_composed();
        if reading.is_empty() {
            self.state = CtlState::Direct;
            return Out::commit(" ".to_string());
        }
        self.start_henkan(reading, None, dicts)
    }

    fn on_reading_char(&mut self, c: char, dicts: &mut Dictionaries) -> Out {
        let lower = c.to_ascii_lowercase();
        let table_start = KanaTable::of(self.feed.script()).starts_sequence(lower);
        let CtlState::Reading { okuri } = &mut self.state else {
            unreachable!()
        };

        if let Some(ok) = okuri {
            if ok.feed.feed(lower) == FeedResult::Unhandled {
                ok.feed.push_literal(c);
            }
            return self.try_complete_okuri(dicts);
        }

        if c.is_ascii_uppercase() && table_start && !self.feed.is_empty() {
            // A trailing uppercase consonant marks the inflection: the
            // lookup key gains the lowered latin character, and the
            // mora completes through its own feed.
            if self.feed.pending() == lower.to_string() {
                self.feed.absorb_sokuon();
            } else {
                self.feed.flush();
            }
            let mut ok = OkuriInput {
                first: lower,
                feed: KanaFeed::new(self.feed.script()),
            };
            ok.feed.feed(lower);
            *okuri = Some(ok);
            return self.try_complete_okuri(dicts);
        }

        if self.feed.feed(lower) == FeedResult::Unhandled {
            // Digits and stray symbols stay in the reading literally.
            self.feed.push_literal(c);
        }
        Out::consumed()
    }

    /// Once the inflection mora has resolved, the conversion starts
    /// immediately.
    fn try_complete_okuri(&mut self, dicts: &mut Dictionaries) -> Out {
        let CtlState::Reading { okuri } = &mut self.state else {
            unreachable!()
        };
        let complete = okuri
            .as_ref()
            .is_some_and(|ok| !ok.feed.composed().is_empty() && ok.feed.pending().is_empty());
        if !complete {
            return Out::consumed();
        }
        let mut ok = okuri.take().expect("okuri checked above");
        let kana = ok.feed.take_composed();
        let reading = self.feed.take_composed();
        self.start_henkan(reading, Some((ok.first, kana)), dicts)
    }
}
