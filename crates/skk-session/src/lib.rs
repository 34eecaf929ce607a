//! Stateful SKK conversion session.
//!
//! `Session` owns the dictionaries and the engine configuration, and
//! processes one keystroke at a time through `handle_key`, returning a
//! `KeyResponse` the host translates into buffer edits, minibuffer
//! updates and keymap changes. The caller loops; the engine never
//! reads keys itself, so a scripted key sequence drives it completely
//! in tests.

mod candidates;
mod controller;
mod dicts;
mod types;

#[cfg(test)]
mod tests;

use tracing::debug_span;

use skk_core::config::EngineConfig;
use skk_core::jisyo::JisyoError;
use skk_core::kana::Script;

use controller::{Finish, LineCtl, Out, Purpose};

pub use dicts::{DictSpec, Dictionaries, SetupError};
pub use types::{Key, KeyResponse, PromptAction};

pub struct Session {
    dicts: Dictionaries,
    config: EngineConfig,
    /// Input-line controllers: the host line at the bottom, one entry
    /// per open minibuffer above it.
    stack: Vec<LineCtl>,
}

impl Session {
    pub fn new(dicts: Dictionaries) -> Self {
        Self::with_config(dicts, EngineConfig::default())
    }

    pub fn with_config(dicts: Dictionaries, config: EngineConfig) -> Self {
        Self {
            dicts,
            config,
            stack: vec![LineCtl::host(Script::Hiragana)],
        }
    }

    /// Enter (or re-enter) conversion mode: any leftover state is
    /// dropped and typing starts in hiragana.
    pub fn activate(&mut self) {
        self.stack.clear();
        self.stack.push(LineCtl::host(Script::Hiragana));
    }

    /// Short indicator for the host's status area ("あ", "ア", "ｱ").
    pub fn mode_indicator(&self) -> &'static str {
        self.stack[0].script().indicator()
    }

    /// True while a marker or a prompt is active, i.e. keys are being
    /// interpreted by the conversion machinery rather than inserted.
    pub fn is_converting(&self) -> bool {
        self.stack.len() > 1 || !self.stack[0].is_idle()
    }

    pub fn dicts(&self) -> &Dictionaries {
        &self.dicts
    }

    pub fn dicts_mut(&mut self) -> &mut Dictionaries {
        &mut self.dicts
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Save the user dictionary through the merge-on-save protocol.
    pub fn save_user_jisyo(&mut self) -> Result<(), JisyoError> {
        self.dicts.save_user()
    }

    /// Process one keystroke.
    pub fn handle_key(&mut self, key: Key) -> KeyResponse {
        let _span = debug_span!("handle_key", ?key).entered();
        let depth = self.stack.len() - 1;
        let out = {
            let Session {
                dicts,
                config,
                stack,
            } = self;
            stack[depth].dispatch(key, dicts, config)
        };
        self.apply(depth, out)
    }

    /// Route a controller outcome at `depth` into a host-facing
    /// response.
    fn apply(&mut self, depth: usize, out: Out) -> KeyResponse {
        let mut resp = KeyResponse {
            consumed: out.consumed,
            ..KeyResponse::default()
        };

        // Committed text goes to the host buffer from the host line,
        // and onto the prompt's own line from a minibuffer.
        if depth == 0 {
            resp.commit = out.commit;
            resp.exit_mode = out.exit_mode;
        } else if let Some(text) = out.commit {
            self.stack[depth].text.push_str(&text);
        }

        if let Some(ctl) = out.push {
            let prompt = ctl.prompt.clone();
            let text = ctl.line_display(&self.config);
            self.stack.push(*ctl);
            resp.prompt = Some(PromptAction::Enter { prompt, text });
        } else if let Some(finish) = out.finish {
            return self.finish_top(finish, resp);
        }

        self.attach_display(depth, resp)
    }

    /// Pop the finished minibuffer and deliver its result to the line
    /// below.
    fn finish_top(&mut self, finish: Finish, base: KeyResponse) -> KeyResponse {
        let popped = self
            .stack
            .pop()
            .expect("finish always comes from a stacked minibuffer");
        let value = match finish {
            Finish::Submit => Some(popped.text.clone()),
            Finish::Abort => None,
        };
        let parent_depth = self.stack.len() - 1;
        let parent_out = {
            let Session { dicts, stack, .. } = self;
            let parent = &mut stack[parent_depth];
            match &popped.purpose {
                Purpose::Register(ctx) => parent.complete_register(ctx, value, dicts),
                Purpose::ConfirmDelete(ctx) => parent.complete_delete(ctx, value, dicts),
                Purpose::Host => unreachable!("the host line never finishes"),
            }
        };
        let mut resp = self.apply(parent_depth, parent_out);
        resp.consumed = base.consumed;
        // Either hand the minibuffer back to the outer prompt or close
        // it.
        resp.prompt = Some(if parent_depth == 0 {
            PromptAction::Leave
        } else {
            let parent = &self.stack[parent_depth];
            PromptAction::Enter {
                prompt: parent.prompt.clone(),
                text: parent.line_display(&self.config),
            }
        });
        resp
    }

    /// Attach the affected line's current display to the response.
    fn attach_display(&mut self, depth: usize, mut resp: KeyResponse) -> KeyResponse {
        if depth == 0 {
            if resp.consumed || resp.commit.is_some() {
                resp.marked = Some(self.stack[0].marked_display(&self.config));
            }
        } else if resp.prompt.is_none() {
            resp.prompt = Some(PromptAction::Update {
                text: self.stack[depth].line_display(&self.config),
            });
        }
        resp
    }
}
