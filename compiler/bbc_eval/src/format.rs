//! Number to text conversion for `STR$`.
//!
//! The decimal layouts reproduce C's `%.*E`, `%.*F` and `%.*G` conversions,
//! then rewrite the exponent the BBC way: no `+` sign and no leading zeros,
//! so `1.5E-07` becomes `1.5E-7` and `1E+20` becomes `1E20`.

use bitflags::bitflags;

use bbc_value::Number;

bitflags! {
    /// Flag bits of the `@%` format word.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct FormatFlags: u32 {
        /// `STR$` honours `@%` instead of its built-in format.
        const STRUSECHK = 0x0100_0000;
        /// Use `,` as the decimal point.
        const COMMADPT = 0x0080_0000;
    }
}

/// Layout selected by byte 2 of the format word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatStyle {
    General,
    Exponent,
    Fixed,
}

/// Digits used when the format word asks for none.
pub const DEFDIGITS: usize = 10;

/// Longest meaningful precision.
const MAXDIGITS: usize = 19;

/// The packed `@%` word: flags in the top byte, style in byte 2, digit
/// count in byte 1 and field width in byte 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatWord(i32);

impl FormatWord {
    /// Format `STR$` uses unless `@%` has [`FormatFlags::STRUSECHK`] set:
    /// general style, 17 digits.
    pub const STR_DEFAULT: FormatWord = FormatWord(0x110A);

    /// Initial value of `@%`.
    pub const PRINT_DEFAULT: FormatWord = FormatWord(0x090A);

    pub const fn new(raw: i32) -> Self {
        FormatWord(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    pub fn flags(self) -> FormatFlags {
        FormatFlags::from_bits_truncate(self.0 as u32)
    }

    pub fn style(self) -> FormatStyle {
        match (self.0 >> 16) & 0x03 {
            1 => FormatStyle::Exponent,
            2 => FormatStyle::Fixed,
            _ => FormatStyle::General,
        }
    }

    pub fn digits(self) -> usize {
        ((self.0 >> 8) & 0xFF) as usize
    }
}

/// `STR$~` of a 32-bit value.
pub fn hex32(value: i32) -> String {
    format!("{:X}", value as u32)
}

/// `STR$~` of a 64-bit value.
pub fn hex64(value: i64) -> String {
    format!("{:X}", value as u64)
}

/// Decimal `STR$` under the format word `at_percent`.
///
/// Integers print in full unless they need more characters than the digit
/// count allows, in which case they are formatted as floats.
pub fn str_number(number: Number, at_percent: FormatWord) -> String {
    let format = if at_percent.flags().contains(FormatFlags::STRUSECHK) {
        at_percent
    } else {
        FormatWord::STR_DEFAULT
    };
    let style = format.style();
    let mut digits = format.digits();
    if digits == 0 && style != FormatStyle::Fixed {
        digits = DEFDIGITS;
    }
    if style == FormatStyle::Exponent {
        digits = digits.saturating_sub(1);
    }
    let digits = digits.min(MAXDIGITS);

    let mut text = match number {
        Number::Float(value) => c_format(style, digits, value),
        Number::Int(value) => integer_text(i64::from(value), style, digits),
        Number::Int64(value) => integer_text(value, style, digits),
    };
    if format.flags().contains(FormatFlags::COMMADPT) {
        text = text.replacen('.', ",", 1);
    }
    bbc_exponent(&mut text);
    text
}

fn integer_text(value: i64, style: FormatStyle, digits: usize) -> String {
    let text = value.to_string();
    if text.len() > digits {
        c_format(style, digits, value as f64)
    } else {
        text
    }
}

/// C `printf` with `%.*E`, `%.*F` or `%.*G`.
pub fn c_format(style: FormatStyle, precision: usize, value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    match style {
        FormatStyle::Fixed => format!("{value:.precision$}"),
        FormatStyle::Exponent => c_exponent(precision, value),
        FormatStyle::General => c_general(precision, value),
    }
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NAN".to_owned()
    } else if value < 0.0 {
        "-INF".to_owned()
    } else {
        "INF".to_owned()
    }
}

/// `%.*E`: Rust writes `1.5E-7`, C writes `1.5E-07`.
fn c_exponent(precision: usize, value: f64) -> String {
    let rust = format!("{value:.precision$E}");
    let (mantissa, exponent) = split_exponent(&rust);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}E{sign}{:02}", exponent.unsigned_abs())
}

/// `%.*G`: fixed or exponent layout depending on the decimal exponent after
/// rounding, trailing zeros removed.
fn c_general(precision: usize, value: f64) -> String {
    let precision = precision.max(1);
    let significant = precision - 1;
    let exponent = if value == 0.0 {
        0
    } else {
        split_exponent(&format!("{value:.significant$e}")).1
    };
    let fixed_limit = i32::try_from(precision).unwrap_or(i32::MAX);
    if exponent < fixed_limit && exponent >= -4 {
        let decimals = (fixed_limit - 1 - exponent) as usize;
        strip_fraction_zeros(format!("{value:.decimals$}"))
    } else {
        let text = c_exponent(significant, value);
        match text.find('E') {
            Some(at) => {
                let (mantissa, rest) = text.split_at(at);
                format!("{}{rest}", strip_fraction_zeros(mantissa.to_owned()))
            }
            None => text,
        }
    }
}

fn split_exponent(text: &str) -> (&str, i32) {
    match text.find(['e', 'E']) {
        Some(at) => (&text[..at], text[at + 1..].parse().unwrap_or(0)),
        None => (text, 0),
    }
}

fn strip_fraction_zeros(mut text: String) -> String {
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}

/// Rewrite a C exponent (`E+05`, `E-07`) in BBC style (`E5`, `E-7`).
fn bbc_exponent(text: &mut String) {
    let Some(at) = text.find('E') else {
        return;
    };
    let mut digits_start = at + 1;
    match text.as_bytes().get(digits_start) {
        Some(b'+') => {
            text.remove(digits_start);
        }
        Some(_) => digits_start += 1,
        None => return,
    }
    while text.len() > digits_start + 1 && text.as_bytes()[digits_start] == b'0' {
        text.remove(digits_start);
    }
}
