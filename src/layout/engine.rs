//! Column-exact line formatting for passbook paper.
//!
//! The paper has pre-ruled columns at fixed character positions, so every
//! formatter here works in whole characters and exact widths. Amounts keep
//! the Indonesian digit grouping the books are printed with ("." thousands,
//! "," decimals).

use super::{Align, LayoutConfig, LayoutStrategy, TruncatePolicy};
use crate::models::Transaction;
use chrono::NaiveDate;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render a monetary amount right-aligned into `width` characters.
///
/// `None` renders as `width` blanks so empty debit/credit columns stay
/// blank on paper. A grouped value wider than `width` is returned as-is,
/// without truncation; callers guard against that by choosing sufficiently
/// wide columns.
pub fn format_amount(amount: Option<f64>, width: usize) -> String {
    let Some(value) = amount else {
        return " ".repeat(width);
    };

    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let mut grouped = group_thousands(whole);
    grouped.push(',');
    grouped.push_str(&format!("{frac:02}"));
    if negative {
        grouped.insert(0, '-');
    }

    if grouped.len() >= width {
        grouped
    } else {
        format!("{}{}", " ".repeat(width - grouped.len()), grouped)
    }
}

fn group_thousands(mut n: u64) -> String {
    let mut groups: Vec<String> = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(".")
}

/// Passbook date column format: DD/MM/YYYY, zero-padded.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Pad or truncate `text` to exactly `width` display columns.
///
/// Truncation keeps the head or the tail of the string per `truncate`;
/// the deployed behavior (`Head`) keeps the first `width` characters even
/// for right-aligned fields.
pub fn pad_string(text: &str, width: usize, align: Align, truncate: TruncatePolicy) -> String {
    let display = UnicodeWidthStr::width(text);
    if display > width {
        return match truncate {
            TruncatePolicy::Head => take_width(text.chars(), width),
            TruncatePolicy::Tail => {
                let kept = take_width(text.chars().rev(), width);
                kept.chars().rev().collect()
            }
        };
    }

    let padding = " ".repeat(width - display);
    match align {
        Align::Left => format!("{text}{padding}"),
        Align::Right => format!("{padding}{text}"),
    }
}

fn take_width(chars: impl Iterator<Item = char>, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in chars {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Overwrite `text` into `line` starting at character position `pos`.
///
/// Replaces exactly as many characters as `text` holds and leaves the rest
/// of the canvas untouched, so the line length is preserved whenever the
/// placement fits inside it.
pub fn place_at(line: &str, pos: usize, text: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let text_len = text.chars().count();

    let before_end = pos.min(chars.len());
    let after_start = (pos + text_len).min(chars.len());

    let mut out: String = chars[..before_end].iter().collect();
    out.push_str(text);
    out.extend(&chars[after_start..]);
    out
}

/// Format one transaction into a column-exact text line.
pub fn build_line(tx: &Transaction, cfg: &LayoutConfig) -> String {
    match cfg.strategy {
        LayoutStrategy::Absolute => build_absolute(tx, cfg),
        LayoutStrategy::Sequential => build_sequential(tx, cfg),
    }
}

/// Absolute layout: NO | DATE | SANDI | DEBIT | CREDIT | BALANCE | TELLER
/// overwritten onto a blank canvas at the configured columns.
fn build_absolute(tx: &Transaction, cfg: &LayoutConfig) -> String {
    let no = tx.line_number.map(|n| n.to_string()).unwrap_or_default();
    let no = pad_string(&no, cfg.no_width, Align::Right, cfg.truncate);
    let date = format_date(tx.transaction_date);
    let sandi = pad_string(
        tx.sandi_code.as_deref().unwrap_or(""),
        cfg.sandi_width,
        Align::Left,
        cfg.truncate,
    );
    let debit = format_amount(tx.debit, cfg.debit_width);
    let credit = format_amount(tx.credit, cfg.credit_width);
    let balance = format_amount(tx.balance, cfg.balance_width);
    let teller = pad_string(
        tx.teller_name.as_deref().unwrap_or(""),
        cfg.teller_width,
        Align::Left,
        cfg.truncate,
    );

    let mut line = " ".repeat(cfg.canvas_width);
    line = place_at(&line, cfg.no_col, &no);
    line = place_at(&line, cfg.date_col, &date);
    line = place_at(&line, cfg.sandi_col, &sandi);
    line = place_at(&line, cfg.debit_col, &debit);
    line = place_at(&line, cfg.credit_col, &credit);
    line = place_at(&line, cfg.balance_col, &balance);
    line = place_at(&line, cfg.teller_col, &teller);

    // Trailing blanks only; interior gaps are part of the column geometry.
    line.trim_end().to_string()
}

/// Sequential layout: DATE DESCRIPTION DEBIT CREDIT BALANCE joined with
/// single blanks, for narrow contiguous-column books.
fn build_sequential(tx: &Transaction, cfg: &LayoutConfig) -> String {
    let date = format_date(tx.transaction_date);
    let desc = pad_string(
        tx.description.as_deref().unwrap_or(""),
        cfg.desc_width,
        Align::Left,
        cfg.truncate,
    );
    let debit = format_amount(tx.debit, cfg.amount_width);
    let credit = format_amount(tx.credit, cfg.amount_width);
    let balance = format_amount(tx.balance, cfg.amount_width);

    format!("{date} {desc} {debit} {credit} {balance}")
}

/// Calibration ruler: three lines showing character positions, printed to
/// measure the physical column offsets of a passbook profile.
pub fn ruler_lines(width: usize) -> Vec<String> {
    let mut tens = String::with_capacity(width);
    for i in 0..width {
        if i % 10 == 0 {
            tens.push_str(&(i / 10 % 10).to_string());
        } else {
            tens.push(' ');
        }
    }

    let mut ones = String::with_capacity(width);
    for i in 0..width {
        ones.push_str(&(i % 10).to_string());
    }

    let mut markers = String::with_capacity(width);
    for i in 0..width {
        if i % 10 == 0 {
            markers.push('|');
        } else if i % 5 == 0 {
            markers.push('+');
        } else {
            markers.push('.');
        }
    }

    vec![tens, ones, markers]
}
