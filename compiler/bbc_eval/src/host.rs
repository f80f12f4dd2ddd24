//! Collaborators the evaluator calls out to.
//!
//! Tokenizing, variable storage, files, the keyboard and screen, the sound
//! system and the operating system all live outside the evaluator. Each is
//! a small object-safe trait; [`NullHost`] implements the device traits for
//! a headless interpreter.

use std::rc::Rc;
use std::time::Instant;

use chrono::{DateTime, Local, TimeZone};

use bbc_ir::TokenBuffer;
use bbc_value::errors::{bad_handle, unsupported};
use bbc_value::{ArrayDescriptor, EvalResult, StackValue};

/// Compiles a runtime string into tokens for `EVAL`.
pub trait Tokenizer {
    fn tokenize(&self, source: &[u8]) -> EvalResult<TokenBuffer>;
}

/// Variable and array lookup.
pub trait VariableStore {
    /// Current value of a scalar variable; strings come back as
    /// [`StackValue::StrRef`]. Fails with `VariableMissing`.
    fn variable(&self, name: &[u8]) -> EvalResult<StackValue>;

    /// A dimensioned array. Fails with `ArrayMissing` when no array of that
    /// name exists and `NoDims` when it exists but has not been dimensioned.
    fn array(&self, name: &[u8]) -> EvalResult<Rc<ArrayDescriptor>>;
}

/// Open files, addressed by handle.
pub trait FileIo {
    fn open_in(&mut self, name: &[u8]) -> EvalResult<i32>;
    fn open_out(&mut self, name: &[u8]) -> EvalResult<i32>;
    fn open_up(&mut self, name: &[u8]) -> EvalResult<i32>;
    fn read_byte(&mut self, handle: i32) -> EvalResult<i32>;
    /// Next line, without its terminator.
    fn read_line(&mut self, handle: i32) -> EvalResult<Vec<u8>>;
    fn eof(&mut self, handle: i32) -> EvalResult<bool>;
    fn pointer(&mut self, handle: i32) -> EvalResult<i64>;
    fn extent(&mut self, handle: i32) -> EvalResult<i64>;
}

/// Keyboard and screen.
pub trait Console {
    /// Block for a key. May return 0, which `GET` skips.
    fn read_key(&mut self) -> EvalResult<i32>;
    /// `INKEY`: a key within a time limit, a key scan, or -1.
    fn inkey(&mut self, argument: i32) -> EvalResult<i32>;
    fn character_at(&mut self, x: i32, y: i32) -> EvalResult<i32>;
    fn adval(&mut self, argument: i32) -> EvalResult<i32>;
    fn pos(&mut self) -> EvalResult<i32>;
    fn vpos(&mut self) -> EvalResult<i32>;
    fn mode(&mut self) -> EvalResult<i32>;
    fn point(&mut self, x: i32, y: i32) -> EvalResult<i32>;
    fn tint(&mut self, x: i32, y: i32) -> EvalResult<i32>;
    /// Closest colour number to an RGB triple in the current mode.
    fn colour_number(&mut self, red: i32, green: i32, blue: i32) -> EvalResult<i32>;
    fn vdu_variable(&mut self, number: i32) -> EvalResult<i64>;
}

/// Sound system timing, in microbeats.
pub trait Sound {
    fn beat(&mut self) -> EvalResult<i32>;
    fn beats(&mut self) -> EvalResult<i32>;
    fn tempo(&mut self) -> EvalResult<i32>;
}

/// Operating system services.
pub trait Os {
    /// The centisecond clock read by `TIME`.
    fn centiseconds(&mut self) -> EvalResult<i32>;
    /// `TIME$`, formatted `Thu,01 Jan 1970.00:00:00`.
    fn time_string(&mut self) -> EvalResult<String>;
    fn usr(&mut self, address: i32) -> EvalResult<i32>;
    /// SWI number for a SWI name (`SYS(`).
    fn swi_number(&mut self, name: &[u8]) -> EvalResult<i64>;
}

/// Devices of a headless interpreter.
///
/// No files are open and there is no keyboard. The screen is an 80 column
/// text screen with the cursor at the origin. The clock is real.
#[derive(Debug)]
pub struct NullHost {
    started: Instant,
}

impl Default for NullHost {
    fn default() -> Self {
        NullHost {
            started: Instant::now(),
        }
    }
}

impl NullHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileIo for NullHost {
    fn open_in(&mut self, _name: &[u8]) -> EvalResult<i32> {
        Ok(0)
    }

    fn open_out(&mut self, _name: &[u8]) -> EvalResult<i32> {
        Ok(0)
    }

    fn open_up(&mut self, _name: &[u8]) -> EvalResult<i32> {
        Ok(0)
    }

    fn read_byte(&mut self, _handle: i32) -> EvalResult<i32> {
        Err(bad_handle())
    }

    fn read_line(&mut self, _handle: i32) -> EvalResult<Vec<u8>> {
        Err(bad_handle())
    }

    fn eof(&mut self, _handle: i32) -> EvalResult<bool> {
        Err(bad_handle())
    }

    fn pointer(&mut self, _handle: i32) -> EvalResult<i64> {
        Err(bad_handle())
    }

    fn extent(&mut self, _handle: i32) -> EvalResult<i64> {
        Err(bad_handle())
    }
}

impl Console for NullHost {
    fn read_key(&mut self) -> EvalResult<i32> {
        Err(unsupported())
    }

    fn inkey(&mut self, _argument: i32) -> EvalResult<i32> {
        Ok(-1)
    }

    fn character_at(&mut self, _x: i32, _y: i32) -> EvalResult<i32> {
        Ok(i32::from(b' '))
    }

    fn adval(&mut self, _argument: i32) -> EvalResult<i32> {
        Ok(0)
    }

    fn pos(&mut self) -> EvalResult<i32> {
        Ok(0)
    }

    fn vpos(&mut self) -> EvalResult<i32> {
        Ok(0)
    }

    fn mode(&mut self) -> EvalResult<i32> {
        Ok(0)
    }

    fn point(&mut self, _x: i32, _y: i32) -> EvalResult<i32> {
        Ok(0)
    }

    fn tint(&mut self, _x: i32, _y: i32) -> EvalResult<i32> {
        Ok(0)
    }

    fn colour_number(&mut self, _red: i32, _green: i32, _blue: i32) -> EvalResult<i32> {
        Ok(0)
    }

    fn vdu_variable(&mut self, _number: i32) -> EvalResult<i64> {
        Ok(0)
    }
}

impl Sound for NullHost {
    fn beat(&mut self) -> EvalResult<i32> {
        Ok(0)
    }

    fn beats(&mut self) -> EvalResult<i32> {
        Ok(0)
    }

    fn tempo(&mut self) -> EvalResult<i32> {
        Ok(0)
    }
}

impl Os for NullHost {
    fn centiseconds(&mut self) -> EvalResult<i32> {
        Ok((self.started.elapsed().as_millis() / 10) as i32)
    }

    fn time_string(&mut self) -> EvalResult<String> {
        Ok(time_text(&Local::now()))
    }

    fn usr(&mut self, _address: i32) -> EvalResult<i32> {
        Err(unsupported())
    }

    fn swi_number(&mut self, _name: &[u8]) -> EvalResult<i64> {
        Err(unsupported())
    }
}

/// `TIME$` layout, e.g. `Thu,01 Jan 1970.00:00:42`.
pub(crate) fn time_text<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%a,%d %b %Y.%H:%M:%S").to_string()
}
