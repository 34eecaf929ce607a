/// One keystroke delivered by the host: a printable character or a
/// control code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Enter,
    Backspace,
}

/// Minibuffer request accompanying a response. The host owns the
/// actual prompt rendering; the engine only describes its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// Open (or take over) the minibuffer with a prompt label.
    Enter { prompt: String, text: String },
    /// Replace the minibuffer input line.
    Update { text: String },
    /// Close the minibuffer.
    Leave,
}

/// What the host should do after one keystroke.
///
/// `commit` is inserted into the host buffer at the marker position
/// (or the cursor when no segment is marked); `marked` replaces the
/// current in-progress segment, empty string removing it. A response
/// with `consumed == false` asks the host to also run its own handling
/// of the key, after applying the other fields.
#[derive(Debug, Default)]
pub struct KeyResponse {
    pub consumed: bool,
    pub commit: Option<String>,
    pub marked: Option<String>,
    pub prompt: Option<PromptAction>,
    /// The conversion mode ended; the host should restore its keymap.
    pub exit_mode: bool,
}
