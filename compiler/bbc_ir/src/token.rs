//! Token bytes.
//!
//! Bytes below `0x80` that are not listed here stand for themselves, so
//! punctuation such as `(`, `,` and `#` appears in the stream as its ASCII
//! code.

/// End of the tokenized line.
pub const EOL: u8 = 0x00;

// Variables. The name follows as a length byte plus the raw name, including
// any type suffix (`%`, `%%`, `&`, `$`).

/// Dynamic variable: `XVAR len name...`.
pub const XVAR: u8 = 0x01;
/// Static integer variable: `STATICVAR index` where index 0 is `@%`.
pub const STATICVAR: u8 = 0x02;
/// Array reference with its opening parenthesis folded in: `ARRAYVAR len name...`.
pub const ARRAYVAR: u8 = 0x08;

// Literals.
pub const INTZERO: u8 = 0x11;
pub const INTONE: u8 = 0x12;
/// `SMALLINT b` encodes the value `b + 1`, covering 1..=256.
pub const SMALLINT: u8 = 0x13;
/// `INTCON` followed by a 32-bit integer.
pub const INTCON: u8 = 0x14;
pub const FLOATZERO: u8 = 0x15;
pub const FLOATONE: u8 = 0x16;
/// `FLOATCON` followed by an IEEE double.
pub const FLOATCON: u8 = 0x17;
/// `STRINGCON len:u32 bytes...`.
pub const STRINGCON: u8 = 0x18;
/// `INT64CON` followed by a 64-bit integer.
pub const INT64CON: u8 = 0x1A;

// Keyword operators.
pub const AND: u8 = 0x80;
/// `>>`
pub const ASR: u8 = 0x81;
pub const DIV: u8 = 0x82;
pub const EOR: u8 = 0x83;
/// `>=`
pub const GE: u8 = 0x84;
/// `<=`
pub const LE: u8 = 0x85;
/// `<<`
pub const LSL: u8 = 0x86;
/// `>>>`
pub const LSR: u8 = 0x87;
pub const MOD: u8 = 0x89;
/// `<>`
pub const NE: u8 = 0x8A;
pub const OR: u8 = 0x8B;

// Single byte keywords that can start a factor.
pub const BEATS: u8 = 0x90;
pub const COLOUR: u8 = 0x9B;
pub const DIM: u8 = 0x9E;
pub const END: u8 = 0xA6;
pub const FALSE: u8 = 0xAD;
pub const MODE: u8 = 0xBD;
pub const NOT: u8 = 0xC2;
pub const QUIT: u8 = 0xCF;
pub const TINT: u8 = 0xE1;
/// `TOP` is tokenized as `TO` followed by the variable `P`.
pub const TO: u8 = 0xE2;
pub const TRACE: u8 = 0xE3;
pub const TRUE: u8 = 0xE4;
pub const VDU: u8 = 0xE6;
pub const WIDTH: u8 = 0xEE;

/// Function marker: `FUNCTION id` where `id` is a [`crate::FunctionId`].
pub const FUNCTION: u8 = 0xFF;
