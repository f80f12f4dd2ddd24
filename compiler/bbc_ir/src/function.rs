//! Function token ordinals.

macro_rules! function_ids {
    ($($variant:ident = $id:literal => $keyword:literal,)*) => {
        /// Ordinal of a built-in function, stored in the byte after
        /// [`crate::token::FUNCTION`].
        ///
        /// Keywords ending in `(` take their opening parenthesis with them.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum FunctionId {
            $($variant = $id,)*
        }

        impl FunctionId {
            /// Every assigned id, in ordinal order.
            pub const ALL: &'static [FunctionId] = &[$(FunctionId::$variant,)*];

            /// Decode a function ordinal. Unassigned ordinals yield `None`.
            pub const fn from_byte(byte: u8) -> Option<Self> {
                match byte {
                    $($id => Some(FunctionId::$variant),)*
                    _ => None,
                }
            }

            /// Source spelling of the keyword.
            pub const fn keyword(self) -> &'static str {
                match self {
                    $(FunctionId::$variant => $keyword,)*
                }
            }
        }
    };
}

function_ids! {
    Himem = 0x01 => "HIMEM",
    Ext = 0x02 => "EXT",
    Filepath = 0x03 => "FILEPATH$",
    Left = 0x04 => "LEFT$(",
    Lomem = 0x05 => "LOMEM",
    Mid = 0x06 => "MID$(",
    Page = 0x07 => "PAGE",
    Ptr = 0x08 => "PTR",
    Right = 0x09 => "RIGHT$(",
    Time = 0x0A => "TIME",
    Abs = 0x10 => "ABS",
    Acs = 0x11 => "ACS",
    Adval = 0x12 => "ADVAL",
    Argc = 0x13 => "ARGC",
    Argv = 0x14 => "ARGV$",
    Asc = 0x15 => "ASC",
    Asn = 0x16 => "ASN",
    Atn = 0x17 => "ATN",
    Beat = 0x18 => "BEAT",
    Bget = 0x19 => "BGET",
    Chr = 0x1A => "CHR$",
    Cos = 0x1B => "COS",
    Count = 0x1C => "COUNT",
    Deg = 0x1D => "DEG",
    Eof = 0x1E => "EOF",
    Erl = 0x1F => "ERL",
    Err = 0x20 => "ERR",
    Eval = 0x21 => "EVAL",
    Exp = 0x22 => "EXP",
    Get = 0x23 => "GET",
    GetStr = 0x24 => "GET$",
    Inkey = 0x25 => "INKEY",
    InkeyStr = 0x26 => "INKEY$",
    Instr = 0x27 => "INSTR(",
    Int = 0x28 => "INT",
    Len = 0x29 => "LEN",
    Listo = 0x2A => "LISTO",
    Ln = 0x2B => "LN",
    Log = 0x2C => "LOG",
    Openin = 0x2D => "OPENIN",
    Openout = 0x2E => "OPENOUT",
    Openup = 0x2F => "OPENUP",
    Pi = 0x30 => "PI",
    Point = 0x31 => "POINT(",
    Pos = 0x32 => "POS",
    Rad = 0x33 => "RAD",
    Report = 0x34 => "REPORT$",
    Retcode = 0x35 => "RETCODE",
    Rnd = 0x36 => "RND",
    Sgn = 0x37 => "SGN",
    Sin = 0x38 => "SIN",
    Sqr = 0x39 => "SQR",
    Str = 0x3A => "STR$",
    StringFn = 0x3B => "STRING$(",
    Sum = 0x3C => "SUM",
    Tan = 0x3D => "TAN",
    Tempo = 0x3E => "TEMPO",
    Usr = 0x3F => "USR",
    Val = 0x40 => "VAL",
    Verify = 0x41 => "VERIFY(",
    Vpos = 0x42 => "VPOS",
    Sys = 0x43 => "SYS(",
    RndParen = 0x44 => "RND(",
    Xlate = 0x45 => "XLATE$(",
}

impl FunctionId {
    /// Size of a table indexed by every possible ordinal, assigned or not.
    pub const TABLE_SIZE: usize = 0x46;
}
