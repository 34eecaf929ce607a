mod basic;
mod candidates;
mod registration;

use crate::{Dictionaries, Key, KeyResponse, Session};

pub(super) fn make_test_dicts() -> Dictionaries {
    let mut dicts = Dictionaries::default();
    dicts.system.parse_str(
        ";; okuri-ari entries.\n\
         おくr /送/贈/\n\
         いっt /言っ/\n\
         ;; okuri-nasi entries.\n\
         かんじ /漢字/幹事/\n\
         だい# /第#0/第#1/第#2/第#3/\n\
         こう /甲/乙/丙/丁/戊/己/庚/辛/壬/癸/仮一/仮二/\n\
         きょう /今日/京/\n",
    );
    dicts
}

pub(super) fn make_session() -> Session {
    Session::new(make_test_dicts())
}

/// Simulate typing a string one printable key at a time.
pub(super) fn type_string(session: &mut Session, s: &str) -> Vec<KeyResponse> {
    s.chars().map(|c| session.handle_key(Key::Char(c))).collect()
}

/// All text the responses committed, in order.
pub(super) fn committed(responses: &[KeyResponse]) -> String {
    responses
        .iter()
        .filter_map(|r| r.commit.as_deref())
        .collect()
}

/// The marked segment after the last response that carried one.
pub(super) fn last_marked(responses: &[KeyResponse]) -> String {
    responses
        .iter()
        .rev()
        .find_map(|r| r.marked.clone())
        .unwrap_or_default()
}
