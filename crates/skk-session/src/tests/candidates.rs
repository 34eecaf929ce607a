use super::*;
use crate::PromptAction;

// --- Inline cycling ---

#[test]
fn test_henkan_shows_first_candidate() {
    let mut session = make_session();
    let responses = type_string(&mut session, "Kanji ");
    assert_eq!(last_marked(&responses), "▼漢字");
    assert_eq!(committed(&responses), "");
}

#[test]
fn test_advance_and_retreat() {
    let mut session = make_session();
    type_string(&mut session, "Kanji ");
    let resp = session.handle_key(Key::Char(' '));
    assert_eq!(resp.marked.as_deref(), Some("▼幹事"));
    let resp = session.handle_key(Key::Char('x'));
    assert_eq!(resp.marked.as_deref(), Some("▼漢字"));
}

#[test]
fn test_retreat_past_first_restores_reading() {
    let mut session = make_session();
    type_string(&mut session, "Kanji ");
    let resp = session.handle_key(Key::Char('x'));
    assert_eq!(resp.marked.as_deref(), Some("▽かんじ"));
    // Conversion can start again from the restored reading.
    let resp = session.handle_key(Key::Char(' '));
    assert_eq!(resp.marked.as_deref(), Some("▼漢字"));
}

#[test]
fn test_abort_restores_reading() {
    let mut session = make_session();
    type_string(&mut session, "Kanji ");
    let resp = session.handle_key(Key::Ctrl('g'));
    assert_eq!(resp.marked.as_deref(), Some("▽かんじ"));
}

// --- Commit ---

#[test]
fn test_ctrl_j_commits_candidate() {
    let mut session = make_session();
    type_string(&mut session, "Kanji ");
    let resp = session.handle_key(Key::Ctrl('j'));
    assert!(resp.consumed);
    assert_eq!(resp.commit.as_deref(), Some("漢字"));
    assert_eq!(resp.marked.as_deref(), Some(""));
    assert!(!session.is_converting());
}

#[test]
fn test_any_key_commits_and_redispatches() {
    let mut session = make_session();
    type_string(&mut session, "Kanji ");
    // A letter confirms the candidate and starts the next input.
    let resp = session.handle_key(Key::Char('N'));
    assert!(resp.consumed);
    assert_eq!(resp.commit.as_deref(), Some("漢字"));
    assert_eq!(resp.marked.as_deref(), Some("▽n"));
    assert!(session.is_converting());
}

#[test]
fn test_kana_key_commits_and_types() {
    let mut session = make_session();
    type_string(&mut session, "Kanji ");
    let responses = type_string(&mut session, "to");
    assert_eq!(committed(&responses), "漢字と");
    assert!(!session.is_converting());
}

#[test]
fn test_enter_commits_and_passes_through() {
    let mut session = make_session();
    type_string(&mut session, "Kanji ");
    let resp = session.handle_key(Key::Enter);
    assert!(!resp.consumed);
    assert_eq!(resp.commit.as_deref(), Some("漢字"));
}

// --- MRU promotion ---

#[test]
fn test_commit_promotes_to_front_of_user_dict() {
    let mut session = make_session();
    type_string(&mut session, "Kanji  ");
    session.handle_key(Key::Ctrl('j'));
    let list = session.dicts().user.lookup("かんじ", false).unwrap();
    assert_eq!(list[0].display(), "幹事");
    assert_eq!(list[1].display(), "漢字");
}

#[test]
fn test_commit_at_front_is_noop() {
    let mut session = make_session();
    type_string(&mut session, "Kanji ");
    session.handle_key(Key::Ctrl('j'));
    // The entry lives in the system dictionary and index 0 was chosen:
    // nothing is written back.
    assert!(session.dicts().user.lookup("かんじ", false).is_none());
}

#[test]
fn test_promoted_order_used_on_next_conversion() {
    let mut session = make_session();
    type_string(&mut session, "Kanji  ");
    session.handle_key(Key::Ctrl('j'));
    let responses = type_string(&mut session, "Kanji ");
    assert_eq!(last_marked(&responses), "▼幹事");
}

// --- Numeric placeholders ---

#[test]
fn test_numeric_reading_instantiates_placeholder() {
    let mut session = make_session();
    let responses = type_string(&mut session, "Dai3 ");
    assert_eq!(last_marked(&responses), "▼第3");
}

#[test]
fn test_numeric_renderings_cycle() {
    let mut session = make_session();
    type_string(&mut session, "Dai25 ");
    let resp = session.handle_key(Key::Char(' '));
    assert_eq!(resp.marked.as_deref(), Some("▼第２５"));
    let resp = session.handle_key(Key::Char(' '));
    assert_eq!(resp.marked.as_deref(), Some("▼第二五"));
    let resp = session.handle_key(Key::Char(' '));
    assert_eq!(resp.marked.as_deref(), Some("▼第二十五"));
}

#[test]
fn test_numeric_promotion_writes_normalized_key() {
    let mut session = make_session();
    type_string(&mut session, "Dai3  ");
    session.handle_key(Key::Ctrl('j'));
    let list = session.dicts().user.lookup("だい#", false).unwrap();
    assert_eq!(list[0].source(), "第#1");
}

// --- Paged listing ---

#[test]
fn test_listing_after_inline_cycle() {
    let mut session = make_session();
    type_string(&mut session, "Kou ");
    // Candidates: 甲 乙 丙 丁 | listing from the fifth.
    for expected in ["▼乙", "▼丙", "▼丁"] {
        let resp = session.handle_key(Key::Char(' '));
        assert_eq!(resp.marked.as_deref(), Some(expected));
    }
    let resp = session.handle_key(Key::Char(' '));
    assert_eq!(
        resp.marked.as_deref(),
        Some("▼{A:戊 S:己 D:庚 F:辛 J:壬 K:癸 L:仮一}")
    );
}

#[test]
fn test_listing_quick_select_commits() {
    let mut session = make_session();
    type_string(&mut session, "Kou     ");
    let resp = session.handle_key(Key::Char('d'));
    assert_eq!(resp.commit.as_deref(), Some("庚"));
    assert!(!session.is_converting());
    let list = session.dicts().user.lookup("こう", false).unwrap();
    assert_eq!(list[0].display(), "庚");
}

#[test]
fn test_listing_next_page_and_exhaustion() {
    let mut session = make_session();
    type_string(&mut session, "Kou     ");
    let resp = session.handle_key(Key::Char(' '));
    assert_eq!(resp.marked.as_deref(), Some("▼{A:仮二}"));
    // Past the last page: registration prompt opens.
    let resp = session.handle_key(Key::Char(' '));
    assert!(matches!(
        resp.prompt,
        Some(PromptAction::Enter { ref prompt, .. }) if prompt == "こう"
    ));
}

#[test]
fn test_listing_retreat_pages_back() {
    let mut session = make_session();
    type_string(&mut session, "Kou      ");
    let resp = session.handle_key(Key::Char('x'));
    assert_eq!(
        resp.marked.as_deref(),
        Some("▼{A:戊 S:己 D:庚 F:辛 J:壬 K:癸 L:仮一}")
    );
    let resp = session.handle_key(Key::Char('x'));
    assert_eq!(resp.marked.as_deref(), Some("▼丁"));
}

#[test]
fn test_listing_ignores_unbound_keys() {
    let mut session = make_session();
    type_string(&mut session, "Kou     ");
    let resp = session.handle_key(Key::Char('z'));
    assert!(resp.consumed);
    assert!(resp.commit.is_none());
    assert!(session.is_converting());
}

// --- Deletion ---

fn session_with_user_entry() -> Session {
    let mut dicts = make_test_dicts();
    dicts
        .user
        .parse_str(";; okuri-nasi entries.\nかわ /皮/革/\n");
    Session::new(dicts)
}

#[test]
fn test_delete_candidate_with_confirmation() {
    let mut session = session_with_user_entry();
    type_string(&mut session, "Kawa ");
    let resp = session.handle_key(Key::Char('X'));
    assert!(matches!(
        resp.prompt,
        Some(PromptAction::Enter { ref prompt, .. })
            if prompt.contains("really purge") && prompt.contains("かわ") && prompt.contains("皮")
    ));
    let responses = type_string(&mut session, "yes");
    assert_eq!(committed(&responses), "");
    let resp = session.handle_key(Key::Enter);
    assert_eq!(resp.prompt, Some(PromptAction::Leave));
    assert_eq!(resp.marked.as_deref(), Some(""));

    let list = session.dicts().user.lookup("かわ", false).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].display(), "革");
}

#[test]
fn test_delete_last_candidate_removes_entry() {
    let mut session = session_with_user_entry();
    type_string(&mut session, "Kawa ");
    session.handle_key(Key::Char('X'));
    type_string(&mut session, "y");
    session.handle_key(Key::Enter);

    let mut session2 = session;
    type_string(&mut session2, "Kawa ");
    session2.handle_key(Key::Char('X'));
    type_string(&mut session2, "yes");
    session2.handle_key(Key::Enter);
    assert!(session2.dicts().user.lookup("かわ", false).is_none());
}

#[test]
fn test_delete_declined_keeps_candidate() {
    let mut session = session_with_user_entry();
    type_string(&mut session, "Kawa ");
    session.handle_key(Key::Char('X'));
    type_string(&mut session, "no");
    let resp = session.handle_key(Key::Enter);
    assert_eq!(resp.marked.as_deref(), Some("▼皮"));
    assert_eq!(session.dicts().user.lookup("かわ", false).unwrap().len(), 2);
}
