//! Minimal symbolic-expression evaluator for programmatic dictionary
//! candidates.
//!
//! The grammar is just what the dictionary format uses: atoms,
//! integers, double-quoted strings and nested lists expressing
//! `(function arg...)`. Evaluation is total — a parse error, an
//! unknown function or a failed call all fall back to the original
//! source text, so a broken candidate degrades to showing its source
//! instead of surfacing an error mid-conversion.

use std::env;

use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Sym(String),
    Str(String),
    Int(i64),
    List(Vec<Expr>),
}

#[derive(Debug)]
enum EvalError {
    TooFewArguments,
    NotASymbol,
    NoSuchFunction,
    BadArgument,
    OutOfRange,
}

/// Evaluate candidate source text. Returns the source itself when it
/// cannot be parsed or evaluated.
pub fn evaluate(source: &str) -> String {
    match parse(source) {
        Some(expr) => match eval(&expr) {
            Ok(value) => value,
            Err(_) => source.to_string(),
        },
        None => source.to_string(),
    }
}

/// Parse one expression; `None` means the caller should treat the
/// text as a literal.
pub fn parse(source: &str) -> Option<Expr> {
    let mut chars: Vec<char> = source.chars().collect();
    chars.reverse();
    let expr = parse_one(&mut chars)?;
    skip_spaces(&mut chars);
    if chars.is_empty() {
        Some(expr)
    } else {
        None
    }
}

fn skip_spaces(stack: &mut Vec<char>) {
    while stack.last().is_some_and(|c| c.is_whitespace()) {
        stack.pop();
    }
}

fn parse_one(stack: &mut Vec<char>) -> Option<Expr> {
    skip_spaces(stack);
    match stack.last()? {
        '(' => {
            stack.pop();
            let mut items = Vec::new();
            loop {
                skip_spaces(stack);
                match stack.last() {
                    Some(')') => {
                        stack.pop();
                        return Some(Expr::List(items));
                    }
                    Some(_) => items.push(parse_one(stack)?),
                    None => return None,
                }
            }
        }
        ')' => None,
        '"' => {
            stack.pop();
            let mut s = String::new();
            loop {
                match stack.pop()? {
                    '"' => return Some(Expr::Str(s)),
                    '\\' => s.push(stack.pop()?),
                    c => s.push(c),
                }
            }
        }
        _ => {
            let mut atom = String::new();
            while let Some(&c) = stack.last() {
                if c.is_whitespace() || c == '(' || c == ')' || c == '"' {
                    break;
                }
                atom.push(c);
                stack.pop();
            }
            match atom.parse::<i64>() {
                Ok(n) => Some(Expr::Int(n)),
                Err(_) => Some(Expr::Sym(atom)),
            }
        }
    }
}

fn eval(expr: &Expr) -> Result<String, EvalError> {
    match expr {
        Expr::Str(s) => Ok(s.clone()),
        Expr::Int(n) => Ok(n.to_string()),
        Expr::Sym(s) => Ok(s.clone()),
        Expr::List(items) => {
            let (head, args) = items.split_first().ok_or(EvalError::TooFewArguments)?;
            let Expr::Sym(name) = head else {
                return Err(EvalError::NotASymbol);
            };
            // Nested calls are evaluated first; everything else passes
            // through as-is.
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                match arg {
                    Expr::List(_) => values.push(Expr::Str(eval(arg)?)),
                    other => values.push(other.clone()),
                }
            }
            apply(name, &values)
        }
    }
}

fn apply(name: &str, args: &[Expr]) -> Result<String, EvalError> {
    match name {
        "concat" => fun_concat(args),
        "pwd" => fun_pwd(),
        "current-time-string" => Ok(fun_current_time_string()),
        "skk-current-date" => Ok(fun_current_date()),
        "substring" => fun_substring(args),
        "skk-version" => Ok(concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION")).to_string()),
        _ => Err(EvalError::NoSuchFunction),
    }
}

/// Concatenate string arguments, then decode trailing backslash-octal
/// escapes (`\057` → `/`). Non-string arguments are ignored.
fn fun_concat(args: &[Expr]) -> Result<String, EvalError> {
    let mut joined = String::new();
    for arg in args {
        if let Expr::Str(s) = arg {
            joined.push_str(s);
        }
    }
    let mut out = String::with_capacity(joined.len());
    let mut chars = joined.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek().is_some_and(|d| d.is_ascii_digit()) {
            let mut oct: u32 = 0;
            while let Some(&d) = chars.peek() {
                let Some(v) = d.to_digit(8) else { break };
                oct = oct * 8 + v;
                chars.next();
            }
            out.push(char::from_u32(oct).ok_or(EvalError::BadArgument)?);
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

fn fun_pwd() -> Result<String, EvalError> {
    env::current_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .map_err(|_| EvalError::BadArgument)
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// ANSI C asctime format: `Wed Aug  6 15:04:05 2026`.
fn fun_current_time_string() -> String {
    let t = now();
    format!(
        "{} {} {:2} {:02}:{:02}:{:02} {}",
        WEEKDAYS[t.weekday().number_days_from_monday() as usize],
        MONTHS[t.month() as usize - 1],
        t.day(),
        t.hour(),
        t.minute(),
        t.second(),
        t.year(),
    )
}

/// Date in the fixed Japanese form `2026年08月06日`.
fn fun_current_date() -> String {
    let t = now();
    format!("{:04}年{:02}月{:02}日", t.year(), t.month() as u8, t.day())
}

/// Three-argument substring with strict bounds checking; any
/// out-of-range index fails the whole evaluation.
fn fun_substring(args: &[Expr]) -> Result<String, EvalError> {
    let [Expr::Str(s), Expr::Int(start), Expr::Int(end)] = args else {
        return Err(EvalError::BadArgument);
    };
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len() as i64;
    if *start < 0 || *start >= len {
        return Err(EvalError::OutOfRange);
    }
    if *end < *start || *end >= len {
        return Err(EvalError::OutOfRange);
    }
    Ok(chars[*start as usize..*end as usize].iter().collect())
}
