pub mod config;
pub mod jisyo;
pub mod kana;
pub mod numeric;
pub mod romaji;
pub mod sexp;
