//! Numeric-placeholder conversion.
//!
//! A reading containing digit runs is re-queried with each run
//! replaced by `#`; matching candidates carry `#N` escapes that are
//! instantiated against the captured runs: `#0` literal digits, `#1`
//! full-width digits, `#2` positional kanji digits (一二三), `#3`
//! kanji with unit words (百二十三).

/// Replace each maximal decimal-digit run in `reading` with `#`.
/// Returns the normalized key and the captured runs, or `None` when
/// the reading has no digits.
pub fn normalize_reading(reading: &str) -> Option<(String, Vec<String>)> {
    if !reading.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut key = String::with_capacity(reading.len());
    let mut runs = Vec::new();
    let mut run = String::new();
    for c in reading.chars() {
        if c.is_ascii_digit() {
            run.push(c);
        } else {
            if !run.is_empty() {
                runs.push(std::mem::take(&mut run));
                key.push('#');
            }
            key.push(c);
        }
    }
    if !run.is_empty() {
        runs.push(run);
        key.push('#');
    }
    Some((key, runs))
}

/// Instantiate the `#N` escapes in a candidate against the captured
/// digit runs, in order. Unknown escape digits and escapes beyond the
/// run count are left verbatim.
pub fn expand_placeholders(text: &str, runs: &[String]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut next_run = 0;
    while let Some(c) = chars.next() {
        if c != '#' {
            out.push(c);
            continue;
        }
        let Some(&d) = chars.peek() else {
            out.push(c);
            break;
        };
        let Some(run) = runs.get(next_run) else {
            out.push(c);
            continue;
        };
        let rendered = match d {
            '0' => Some(run.clone()),
            '1' => Some(to_fullwidth(run)),
            '2' => Some(to_kanji_digits(run)),
            '3' => Some(to_kanji_numeral(run)),
            _ => None,
        };
        match rendered {
            Some(s) => {
                chars.next();
                next_run += 1;
                out.push_str(&s);
            }
            None => out.push(c),
        }
    }
    out
}

/// Format a digit run as full-width Arabic digits.
pub fn to_fullwidth(run: &str) -> String {
    run.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                char::from_u32(c as u32 - '0' as u32 + '０' as u32).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

const KANJI_DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Positional kanji rendering: each digit becomes its kanji numeral
/// (123 → 一二三).
pub fn to_kanji_digits(run: &str) -> String {
    run.chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| KANJI_DIGITS[d as usize])
                .unwrap_or(c)
        })
        .collect()
}

/// Non-positional kanji rendering with unit words (123 → 百二十三).
/// Falls back to the literal run if it does not fit in a u64.
pub fn to_kanji_numeral(run: &str) -> String {
    let Ok(n) = run.parse::<u64>() else {
        return run.to_string();
    };
    if n == 0 {
        return "〇".to_string();
    }
    let groups: [(&str, u64); 3] = [("兆", 1_000_000_000_000), ("億", 100_000_000), ("万", 10_000)];
    let mut out = String::new();
    let mut rest = n;
    for (unit, value) in groups {
        let count = rest / value;
        if count > 0 {
            out.push_str(&kanji_group(count));
            out.push_str(unit);
            rest %= value;
        }
    }
    if rest > 0 {
        out.push_str(&kanji_group(rest));
    }
    out
}

/// Render 1..=9999 with 千/百/十, omitting the leading 一 before a
/// bare unit (1984 → 千九百八十四).
fn kanji_group(n: u64) -> String {
    debug_assert!(n > 0 && n < 10_000);
    let units: [(&str, u64); 3] = [("千", 1000), ("百", 100), ("十", 10)];
    let mut out = String::new();
    let mut rest = n;
    for (unit, value) in units {
        let digit = rest / value;
        if digit > 0 {
            if digit > 1 {
                out.push(KANJI_DIGITS[digit as usize]);
            }
            out.push_str(unit);
            rest %= value;
        }
    }
    if rest > 0 {
        out.push(KANJI_DIGITS[rest as usize]);
    }
    out
}
