// src/layout/mod.rs

pub mod engine;

pub use engine::{build_line, format_amount, format_date, pad_string, place_at, ruler_lines};

use serde::{Deserialize, Serialize};

/// Horizontal alignment inside a fixed-width column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
}

/// What to keep when a value is wider than its column.
///
/// `Head` keeps the first `width` characters regardless of alignment, which
/// is what the deployed printers have always done. `Tail` keeps the last
/// `width` characters, closer to what one would expect for right-aligned
/// numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncatePolicy {
    Head,
    Tail,
}

/// How transaction fields are laid out on the paper.
///
/// `Absolute` overwrites fields onto a blank canvas at fixed columns, for
/// passbooks whose pre-ruled columns do not sit at uniform spacing.
/// `Sequential` joins the fields with single blanks, for narrow formats
/// with contiguous columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStrategy {
    Absolute,
    Sequential,
}

/// Column offsets and widths for one printer profile.
///
/// For the absolute strategy the declared printing order is line number,
/// date, sandi, debit, credit, balance, teller. The one enforced ordering
/// contract is `offset[i] + width[i] <= offset[i+1]` for consecutive
/// fields; violating it makes later fields silently overwrite earlier ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub strategy: LayoutStrategy,
    pub truncate: TruncatePolicy,

    /// Total width of the blank canvas for the absolute strategy.
    pub canvas_width: usize,

    // Column positions, measured from a ruler print on the physical book.
    pub no_col: usize,
    pub date_col: usize,
    pub sandi_col: usize,
    pub debit_col: usize,
    pub credit_col: usize,
    pub balance_col: usize,
    pub teller_col: usize,

    // Column widths.
    pub no_width: usize,
    pub date_width: usize,
    pub sandi_width: usize,
    pub debit_width: usize,
    pub credit_width: usize,
    pub balance_width: usize,
    pub teller_width: usize,

    // Sequential profile widths.
    pub desc_width: usize,
    pub amount_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            strategy: LayoutStrategy::Absolute,
            truncate: TruncatePolicy::Head,
            canvas_width: 100,
            no_col: 1,
            date_col: 5,
            sandi_col: 20,
            debit_col: 29,
            credit_col: 49,
            balance_col: 68,
            teller_col: 91,
            no_width: 2,
            date_width: 10,
            sandi_width: 5,
            debit_width: 16,
            credit_width: 16,
            balance_width: 20,
            teller_width: 14,
            desc_width: 20,
            amount_width: 14,
        }
    }
}

impl LayoutConfig {
    /// Narrow profile for direct serial printing: contiguous columns,
    /// description instead of sandi and teller.
    pub fn sequential() -> Self {
        Self {
            strategy: LayoutStrategy::Sequential,
            ..Self::default()
        }
    }
}
