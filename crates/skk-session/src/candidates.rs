//! Candidate lookup, cycling, paged listing, commit, registration and
//! deletion.

use tracing::debug;

use skk_core::config::EngineConfig;
use skk_core::jisyo::Candidate;
use skk_core::numeric;

use crate::controller::{CtlState, DeleteContext, LineCtl, Out, RegisterContext};
use crate::dicts::Dictionaries;
use crate::types::Key;

/// A looked-up candidate list being cycled or listed.
pub(crate) struct SelectState {
    /// Unconverted reading, for the retreat/abort display.
    pub reading: String,
    /// Key the entry lives under (the `#`-normalized form for numeric
    /// readings) — MRU promotion and deletion write back through it.
    pub headword: String,
    pub okuri: bool,
    pub okuri_kana: String,
    pub list: Vec<Candidate>,
    /// Captured digit runs for `#N` placeholder instantiation.
    pub runs: Vec<String>,
    pub index: usize,
    /// `Some(start)` while the paged listing is showing candidates
    /// from `start`.
    pub listing_from: Option<usize>,
}

impl SelectState {
    /// Displayed form of candidate `i`: annotation stripped,
    /// expressions evaluated, placeholders instantiated.
    pub(crate) fn display(&self, i: usize) -> String {
        let text = self.list[i].display();
        if self.runs.is_empty() {
            text
        } else {
            numeric::expand_placeholders(&text, &self.runs)
        }
    }

    fn page_end(&self, start: usize, config: &EngineConfig) -> usize {
        (start + config.candidates.page_size).min(self.list.len())
    }

    pub(crate) fn marked_display(&self, config: &EngineConfig) -> String {
        let marker = &config.display.candidate_marker;
        match self.listing_from {
            Some(start) => {
                let mut line = format!("{marker}{{");
                let keys = config.candidates.selection_keys.chars();
                for (i, key) in (start..self.page_end(start, config)).zip(keys) {
                    if i > start {
                        line.push(' ');
                    }
                    line.push(key.to_ascii_uppercase());
                    line.push(':');
                    line.push_str(&self.display(i));
                }
                line.push('}');
                line
            }
            None => format!("{marker}{}{}", self.display(self.index), self.okuri_kana),
        }
    }
}

impl LineCtl {
    fn select_mut(&mut self) -> &mut SelectState {
        let CtlState::Select(s) = &mut self.state else {
            unreachable!("select_mut outside Select state")
        };
        s
    }

    /// Look the reading up and enter candidate selection, falling back
    /// to the numeric-placeholder key, and to registration when both
    /// miss.
    pub(crate) fn start_henkan(
        &mut self,
        reading: String,
        okuri: Option<(char, String)>,
        dicts: &mut Dictionaries,
    ) -> Out {
        let (headword, okuri_flag, okuri_kana) = match okuri {
            Some((first, kana)) => (format!("{reading}{first}"), true, kana),
            None => (reading.clone(), false, String::new()),
        };

        let mut key_used = headword.clone();
        let mut runs = Vec::new();
        let mut list = dicts.lookup(&headword, okuri_flag);
        if list.is_none() {
            if let Some((normalized, captured)) = numeric::normalize_reading(&headword) {
                if let Some(hit) = dicts.lookup(&normalized, okuri_flag) {
                    key_used = normalized;
                    runs = captured;
                    list = Some(hit);
                }
            }
        }

        match list {
            Some(list) => {
                debug!(headword = %key_used, candidates = list.len(), "henkan");
                self.feed.clear();
                self.state = CtlState::Select(SelectState {
                    reading,
                    headword: key_used,
                    okuri: okuri_flag,
                    okuri_kana,
                    list,
                    runs,
                    index: 0,
                    listing_from: None,
                });
                Out::consumed()
            }
            None => {
                debug!(headword = %headword, "no entry, registering");
                self.push_register(RegisterContext {
                    restore: format!("{reading}{okuri_kana}"),
                    headword,
                    okuri: okuri_flag,
                    okuri_kana,
                })
            }
        }
    }

    fn push_register(&mut self, ctx: RegisterContext) -> Out {
        self.feed.restore(ctx.restore.clone());
        self.state = CtlState::Reading { okuri: None };
        Out {
            consumed: true,
            push: Some(Box::new(LineCtl::register(ctx))),
            ..Out::default()
        }
    }

    pub(crate) fn on_select(
        &mut self,
        key: Key,
        dicts: &mut Dictionaries,
        config: &EngineConfig,
    ) -> Out {
        let listing = self.select_mut().listing_from.is_some();
        match key {
            Key::Ctrl('g') => {
                self.restore_reading();
                Out::consumed()
            }
            Key::Ctrl('j') => self.commit_selection(dicts),
            Key::Char(' ') => self.advance(config),
            Key::Char('x') => {
                self.retreat(config);
                Out::consumed()
            }
            Key::Char('X') => self.push_delete_prompt(),
            Key::Char(c) if listing => {
                let (start, visible) = {
                    let s = self.select_mut();
                    let start = s.listing_from.expect("listing checked above");
                    (start, s.page_end(start, config) - start)
                };
                let pos = config
                    .candidates
                    .selection_keys
                    .chars()
                    .position(|k| k == c.to_ascii_lowercase());
                match pos {
                    Some(pos) if pos < visible => {
                        self.select_mut().index = start + pos;
                        self.commit_selection(dicts)
                    }
                    _ => Out::consumed(),
                }
            }
            Key::Backspace => {
                self.retreat(config);
                Out::consumed()
            }
            Key::Char(_) | Key::Enter => self.commit_and_redispatch(key, dicts, config),
            Key::Ctrl(_) => self.commit_selection(dicts),
        }
    }

    fn advance(&mut self, config: &EngineConfig) -> Out {
        let inline = config.candidates.inline_cycle;
        let s = self.select_mut();
        let (next, enters_listing) = match s.listing_from {
            Some(start) => (start + config.candidates.page_size, true),
            None => (s.index + 1, s.index + 1 >= inline),
        };
        if next >= s.list.len() {
            // The list is exhausted; offer registration.
            let ctx = RegisterContext {
                restore: format!("{}{}", s.reading, s.okuri_kana),
                headword: s.headword.clone(),
                okuri: s.okuri,
                okuri_kana: s.okuri_kana.clone(),
            };
            self.push_register(ctx)
        } else {
            s.index = next;
            s.listing_from = enters_listing.then_some(next);
            Out::consumed()
        }
    }

    fn retreat(&mut self, config: &EngineConfig) {
        let inline = config.candidates.inline_cycle;
        let back_to_reading = {
            let s = self.select_mut();
            match s.listing_from {
                Some(start) if start > inline => {
                    let back = start - config.candidates.page_size;
                    s.listing_from = Some(back);
                    s.index = back;
                    false
                }
                Some(_) => {
                    // First page backs out to inline cycling.
                    s.listing_from = None;
                    s.index = inline - 1;
                    false
                }
                None if s.index > 0 => {
                    s.index -= 1;
                    false
                }
                None => true,
            }
        };
        if back_to_reading {
            self.restore_reading();
        }
    }

    /// Back to `Reading` with the unconverted reading display.
    fn restore_reading(&mut self) {
        let s = self.select_mut();
        let restore = format!("{}{}", s.reading, s.okuri_kana);
        self.feed.restore(restore);
        self.state = CtlState::Reading { okuri: None };
    }

    /// Commit the selected candidate, promoting it to the front of the
    /// user-dictionary entry when it was not already first.
    pub(crate) fn commit_selection(&mut self, dicts: &mut Dictionaries) -> Out {
        let s = self.select_mut();
        let text = format!("{}{}", s.display(s.index), s.okuri_kana);
        if s.index > 0 {
            let mut promoted = s.list.clone();
            let chosen = promoted.remove(s.index);
            promoted.insert(0, chosen);
            debug!(headword = %s.headword, index = s.index, "promoting candidate");
            dicts.user.store_and_learn(&s.headword, s.okuri, promoted);
        }
        self.feed.clear();
        self.state = CtlState::Direct;
        Out::commit(text)
    }

    /// Commit the candidate, then run the key through the normal
    /// handling path: a letter typed right after a conversion both
    /// confirms it and starts the next input.
    fn commit_and_redispatch(
        &mut self,
        key: Key,
        dicts: &mut Dictionaries,
        config: &EngineConfig,
    ) -> Out {
        let mut out = self.commit_selection(dicts);
        let second = self.dispatch(key, dicts, config);
        if let Some(text) = second.commit {
            out.add_commit(&text);
        }
        out.consumed = second.consumed;
        out.exit_mode = second.exit_mode;
        out.push = second.push;
        out.finish = second.finish;
        out
    }

    fn push_delete_prompt(&mut self) -> Out {
        let s = self.select_mut();
        let ctx = DeleteContext {
            headword: s.headword.clone(),
            okuri: s.okuri,
            source: s.list[s.index].source(),
        };
        let prompt = format!(
            "really purge \"{} /{}/ \"?(yes or no)",
            ctx.headword, ctx.source
        );
        Out {
            consumed: true,
            push: Some(Box::new(LineCtl::confirm_delete(ctx, prompt))),
            ..Out::default()
        }
    }

    /// Resolve a finished registration minibuffer on this (parent)
    /// line.
    pub(crate) fn complete_register(
        &mut self,
        ctx: &RegisterContext,
        word: Option<String>,
        dicts: &mut Dictionaries,
    ) -> Out {
        match word.filter(|w| !w.is_empty()) {
            Some(word) => {
                let list = dicts.lookup(&ctx.headword, ctx.okuri).unwrap_or_default();
                let already_known = list
                    .iter()
                    .any(|c| matches!(c, Candidate::Text { text, .. } if *text == word));
                if !already_known {
                    let mut updated = Vec::with_capacity(list.len() + 1);
                    updated.push(Candidate::text(word.as_str()));
                    updated.extend(list);
                    debug!(headword = %ctx.headword, word = %word, "registered");
                    dicts.user.store_and_learn(&ctx.headword, ctx.okuri, updated);
                }
                self.feed.clear();
                self.state = CtlState::Direct;
                Out::commit(format!("{word}{}", ctx.okuri_kana))
            }
            None => {
                // Aborted or empty: back to the unconverted reading.
                self.feed.restore(ctx.restore.clone());
                self.state = CtlState::Reading { okuri: None };
                Out::consumed()
            }
        }
    }

    /// Resolve a finished delete confirmation on this (parent) line.
    pub(crate) fn complete_delete(
        &mut self,
        ctx: &DeleteContext,
        answer: Option<String>,
        dicts: &mut Dictionaries,
    ) -> Out {
        let confirmed = matches!(answer.as_deref(), Some("y") | Some("yes"));
        if !confirmed {
            // Keep showing the candidate.
            return Out::consumed();
        }
        let kept = dicts.user.lookup(&ctx.headword, ctx.okuri).map(|list| {
            let remaining: Vec<Candidate> = list
                .iter()
                .filter(|c| c.source() != ctx.source)
                .cloned()
                .collect();
            (list.len(), remaining)
        });
        match kept {
            Some((_, remaining)) if remaining.is_empty() => {
                dicts.user.remove_and_learn(&ctx.headword, ctx.okuri);
            }
            Some((before, remaining)) if remaining.len() != before => {
                dicts.user.store_and_learn(&ctx.headword, ctx.okuri, remaining);
            }
            _ => {}
        }
        self.feed.clear();
        self.state = CtlState::Direct;
        Out::consumed()
    }
}
