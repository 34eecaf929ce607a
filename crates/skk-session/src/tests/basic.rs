use super::*;

// --- Plain kana typing ---

#[test]
fn test_ka_commits_kana() {
    let mut session = make_session();
    let responses = type_string(&mut session, "ka");
    assert!(responses.iter().all(|r| r.consumed));
    assert_eq!(committed(&responses), "か");
    assert_eq!(last_marked(&responses), "");
}

#[test]
fn test_doubled_consonant_small_tsu() {
    let mut session = make_session();
    let responses = type_string(&mut session, "tta");
    assert_eq!(committed(&responses), "った");
}

#[test]
fn test_moraic_n_chain() {
    let mut session = make_session();
    let responses = type_string(&mut session, "kanji");
    assert_eq!(committed(&responses), "かんじ");
}

#[test]
fn test_pending_consonant_is_marked() {
    let mut session = make_session();
    let responses = type_string(&mut session, "k");
    assert_eq!(committed(&responses), "");
    assert_eq!(last_marked(&responses), "k");
}

#[test]
fn test_space_inserts_space() {
    let mut session = make_session();
    let responses = type_string(&mut session, " ");
    assert_eq!(committed(&responses), " ");
}

#[test]
fn test_digit_passes_through() {
    let mut session = make_session();
    let responses = type_string(&mut session, "3");
    assert_eq!(committed(&responses), "3");
}

#[test]
fn test_punctuation_converts() {
    let mut session = make_session();
    let responses = type_string(&mut session, ".,-");
    assert_eq!(committed(&responses), "。、ー");
}

// --- Script toggles ---

#[test]
fn test_q_toggles_katakana() {
    let mut session = make_session();
    assert_eq!(session.mode_indicator(), "あ");
    let mut responses = type_string(&mut session, "q");
    assert_eq!(session.mode_indicator(), "ア");
    responses.extend(type_string(&mut session, "ka"));
    assert_eq!(committed(&responses), "カ");
    type_string(&mut session, "q");
    assert_eq!(session.mode_indicator(), "あ");
}

#[test]
fn test_ctrl_q_toggles_hankaku() {
    let mut session = make_session();
    session.handle_key(Key::Ctrl('q'));
    assert_eq!(session.mode_indicator(), "ｱ");
    let responses = type_string(&mut session, "a");
    assert_eq!(committed(&responses), "ｱ");
}

#[test]
fn test_zen_latin_mode() {
    let mut session = make_session();
    let mut responses = type_string(&mut session, "L");
    responses.extend(type_string(&mut session, "aB1"));
    assert_eq!(committed(&responses), "ａＢ１");
    session.handle_key(Key::Ctrl('j'));
    let responses = type_string(&mut session, "a");
    assert_eq!(committed(&responses), "あ");
}

#[test]
fn test_l_exits_mode() {
    let mut session = make_session();
    let resp = session.handle_key(Key::Char('l'));
    assert!(resp.consumed);
    assert!(resp.exit_mode);
}

#[test]
fn test_ctrl_j_idle_exits_mode() {
    let mut session = make_session();
    let resp = session.handle_key(Key::Ctrl('j'));
    assert!(resp.exit_mode);
}

// --- Reading accumulation ---

#[test]
fn test_uppercase_places_marker() {
    let mut session = make_session();
    let responses = type_string(&mut session, "Ka");
    assert!(session.is_converting());
    assert_eq!(committed(&responses), "");
    assert_eq!(last_marked(&responses), "▽か");
}

#[test]
fn test_q_key_places_empty_marker() {
    let mut session = make_session();
    let responses = type_string(&mut session, "Q");
    assert_eq!(last_marked(&responses), "▽");
    let responses = type_string(&mut session, "ka");
    assert_eq!(last_marked(&responses), "▽か");
}

#[test]
fn test_reading_keeps_digits_literal() {
    let mut session = make_session();
    let responses = type_string(&mut session, "Dai3");
    assert_eq!(last_marked(&responses), "▽だい3");
}

#[test]
fn test_ctrl_g_aborts_reading() {
    let mut session = make_session();
    type_string(&mut session, "Kanji");
    let resp = session.handle_key(Key::Ctrl('g'));
    assert!(resp.consumed);
    assert_eq!(resp.marked.as_deref(), Some(""));
    assert!(!session.is_converting());
}

#[test]
fn test_ctrl_j_commits_reading_as_is() {
    let mut session = make_session();
    type_string(&mut session, "Kanji");
    let resp = session.handle_key(Key::Ctrl('j'));
    assert_eq!(resp.commit.as_deref(), Some("かんじ"));
    assert_eq!(resp.marked.as_deref(), Some(""));
    assert!(!session.is_converting());
}

#[test]
fn test_ctrl_j_resolves_trailing_n() {
    let mut session = make_session();
    type_string(&mut session, "Kan");
    let resp = session.handle_key(Key::Ctrl('j'));
    assert_eq!(resp.commit.as_deref(), Some("かん"));
}

#[test]
fn test_enter_in_reading_commits_and_passes_through() {
    let mut session = make_session();
    type_string(&mut session, "Ka");
    let resp = session.handle_key(Key::Enter);
    assert!(!resp.consumed);
    assert_eq!(resp.commit.as_deref(), Some("か"));
    assert!(!session.is_converting());
}

#[test]
fn test_backspace_in_reading() {
    let mut session = make_session();
    type_string(&mut session, "Kak");
    let resp = session.handle_key(Key::Backspace);
    assert_eq!(resp.marked.as_deref(), Some("▽か"));
    let resp = session.handle_key(Key::Backspace);
    assert_eq!(resp.marked.as_deref(), Some("▽"));
    let resp = session.handle_key(Key::Backspace);
    assert_eq!(resp.marked.as_deref(), Some(""));
    assert!(!session.is_converting());
}

#[test]
fn test_script_toggle_inside_reading() {
    let mut session = make_session();
    type_string(&mut session, "Ka");
    type_string(&mut session, "q");
    let responses = type_string(&mut session, "ta");
    assert_eq!(last_marked(&responses), "▽かタ");
}

#[test]
fn test_activate_resets_state() {
    let mut session = make_session();
    type_string(&mut session, "Kanji q");
    session.activate();
    assert!(!session.is_converting());
    assert_eq!(session.mode_indicator(), "あ");
}
