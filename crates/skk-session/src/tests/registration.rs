use super::*;
use crate::PromptAction;

// --- Entering registration ---

#[test]
fn test_missing_entry_opens_registration() {
    let mut session = make_session();
    let responses = type_string(&mut session, "Nai ");
    let last = responses.last().unwrap();
    assert!(matches!(
        last.prompt,
        Some(PromptAction::Enter { ref prompt, .. }) if prompt == "ない"
    ));
    // The host line keeps showing the unconverted reading meanwhile.
    assert_eq!(last.marked.as_deref(), Some("▽ない"));
}

#[test]
fn test_register_ascii_word() {
    let mut session = make_session();
    type_string(&mut session, "Nai ");
    // `l` switches the prompt line to literal ASCII.
    let responses = type_string(&mut session, "lnewword");
    assert!(matches!(
        responses.last().unwrap().prompt,
        Some(PromptAction::Update { ref text }) if text == "newword"
    ));
    let resp = session.handle_key(Key::Enter);
    assert_eq!(resp.prompt, Some(PromptAction::Leave));
    assert_eq!(resp.commit.as_deref(), Some("newword"));
    assert_eq!(resp.marked.as_deref(), Some(""));
    assert!(!session.is_converting());

    let list = session.dicts().user.lookup("ない", false).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].display(), "newword");
}

#[test]
fn test_register_kana_word() {
    let mut session = make_session();
    type_string(&mut session, "Nai ");
    // The prompt line itself runs kana conversion.
    let responses = type_string(&mut session, "nai");
    assert!(matches!(
        responses.last().unwrap().prompt,
        Some(PromptAction::Update { ref text }) if text == "ない"
    ));
    let resp = session.handle_key(Key::Enter);
    assert_eq!(resp.commit.as_deref(), Some("ない"));
    assert_eq!(
        session.dicts().user.lookup("ない", false).unwrap()[0].display(),
        "ない"
    );
}

#[test]
fn test_register_with_conversion_in_prompt() {
    let mut session = make_session();
    type_string(&mut session, "Nai ");
    // Convert inside the prompt: かんじ → 漢字.
    type_string(&mut session, "Kanji ");
    let resp = session.handle_key(Key::Enter);
    assert_eq!(resp.commit.as_deref(), Some("漢字"));
    assert_eq!(
        session.dicts().user.lookup("ない", false).unwrap()[0].display(),
        "漢字"
    );
}

// --- Aborting ---

#[test]
fn test_abort_restores_reading() {
    let mut session = make_session();
    type_string(&mut session, "Nai ");
    let resp = session.handle_key(Key::Ctrl('g'));
    assert_eq!(resp.prompt, Some(PromptAction::Leave));
    assert_eq!(resp.marked.as_deref(), Some("▽ない"));
    assert!(session.is_converting());
}

#[test]
fn test_empty_input_restores_reading() {
    let mut session = make_session();
    type_string(&mut session, "Nai ");
    let resp = session.handle_key(Key::Enter);
    assert_eq!(resp.prompt, Some(PromptAction::Leave));
    assert_eq!(resp.marked.as_deref(), Some("▽ない"));
    assert!(resp.commit.is_none());
}

// --- New candidates go to the front ---

#[test]
fn test_registration_after_exhaustion_prepends() {
    let mut session = make_session();
    type_string(&mut session, "Kanji   ");
    // Both candidates exhausted; the prompt is open now.
    assert!(session.is_converting());
    let responses = type_string(&mut session, "lkanji2");
    assert!(matches!(
        responses.last().unwrap().prompt,
        Some(PromptAction::Update { .. })
    ));
    session.handle_key(Key::Enter);
    let list = session.dicts().user.lookup("かんじ", false).unwrap();
    assert_eq!(list[0].display(), "kanji2");
    assert_eq!(list[1].display(), "漢字");
    assert_eq!(list[2].display(), "幹事");
}

#[test]
fn test_registering_known_word_does_not_duplicate() {
    let mut session = make_session();
    type_string(&mut session, "Kanji   ");
    type_string(&mut session, "Kanji ");
    let resp = session.handle_key(Key::Enter);
    assert_eq!(resp.commit.as_deref(), Some("漢字"));
    // 漢字 was already a candidate: the system entry is untouched and
    // nothing was copied into the user dictionary.
    assert!(session.dicts().user.lookup("かんじ", false).is_none());
}

// --- Nested registration ---

#[test]
fn test_nested_registration() {
    let mut session = make_session();
    type_string(&mut session, "Nai ");
    // Inside the prompt, start another conversion that also misses.
    let responses = type_string(&mut session, "Betsu ");
    assert!(matches!(
        responses.last().unwrap().prompt,
        Some(PromptAction::Enter { ref prompt, .. }) if prompt == "べつ"
    ));
    // Resolve the inner registration.
    type_string(&mut session, "lword");
    let resp = session.handle_key(Key::Enter);
    // Back on the outer prompt, with the inner result inserted.
    assert!(matches!(
        resp.prompt,
        Some(PromptAction::Enter { ref prompt, text: ref t }) if prompt == "ない" && t == "word"
    ));
    let resp = session.handle_key(Key::Enter);
    assert_eq!(resp.commit.as_deref(), Some("word"));
    assert!(session.dicts().user.lookup("べつ", false).is_some());
    assert!(session.dicts().user.lookup("ない", false).is_some());
}
