use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use unicode_width::UnicodeWidthStr;

use skk_core::jisyo::{Jisyo, JisyoEncoding};

use super::die;

fn load(path: &str) -> Jisyo {
    let mut jisyo = Jisyo::new();
    die!(jisyo.load(Path::new(path)), "Error loading {path}: {}");
    jisyo
}

fn encoding(euc: bool) -> JisyoEncoding {
    if euc {
        JisyoEncoding::EucJp
    } else {
        JisyoEncoding::Utf8
    }
}

/// Print the dictionary to stdout in the chosen encoding.
pub fn dump(path: &str, euc: bool) {
    let jisyo = load(path);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    die!(jisyo.write_to(&mut out, encoding(euc)), "Error writing: {}");
}

/// Re-encode a dictionary file.
pub fn convert(input: &str, output: &str, euc: bool) {
    let jisyo = load(input);
    let mut fd = die!(File::create(output), "Error creating {output}: {}");
    die!(jisyo.write_to(&mut fd, encoding(euc)), "Error writing: {}");
    eprintln!(
        "Wrote {output} ({} okuri-ari, {} okuri-nasi)",
        jisyo.entries(true).count(),
        jisyo.entries(false).count(),
    );
}

/// Exact headword lookup, candidates one per line with annotations.
pub fn lookup(path: &str, headword: &str, okuri: bool) {
    let jisyo = load(path);
    let Some(list) = jisyo.lookup(headword, okuri) else {
        eprintln!("{headword}: not found");
        process::exit(1);
    };
    // Pad with display width so CJK candidates line up.
    let width = list
        .iter()
        .map(|c| c.display().width())
        .max()
        .unwrap_or(0);
    let mut out = io::stdout().lock();
    for (i, candidate) in list.iter().enumerate() {
        let display = candidate.display();
        let pad = width - display.width();
        die!(
            writeln!(
                out,
                "{:>3}  {}{:pad$}  {}",
                i,
                display,
                "",
                candidate.source()
            ),
            "Error writing: {}"
        );
    }
}

/// Parse, re-serialize and re-parse, verifying the round-trip.
pub fn check(path: &str) {
    let jisyo = load(path);
    let mut buf = Vec::new();
    die!(
        jisyo.write_to(&mut buf, JisyoEncoding::Utf8),
        "Error serializing: {}"
    );
    let mut reloaded = Jisyo::new();
    die!(
        reloaded.load_reader(io::Cursor::new(&buf)),
        "Error re-parsing: {}"
    );
    for okuri in [true, false] {
        let a: Vec<_> = jisyo.entries(okuri).collect();
        let b: Vec<_> = reloaded.entries(okuri).collect();
        if a != b {
            eprintln!("Round-trip mismatch in okuri={okuri} partition");
            process::exit(1);
        }
    }
    println!(
        "ok: {} okuri-ari, {} okuri-nasi entries",
        jisyo.entries(true).count(),
        jisyo.entries(false).count(),
    );
}
