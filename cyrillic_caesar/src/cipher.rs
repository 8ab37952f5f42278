//! Caesar shift over the Cyrillic alphabet
//!
//! Letters move by the key within their own case table. Exception characters
//! are copied as is; anything else is copied too but reported as a
//! [`CharWarning`] so the caller can tell the user about it.

use std::fmt;
use std::io::{BufRead, Write};

use crate::alphabet::{self, Class};
use crate::key::ShiftKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    /// Prefix of the output file name for this mode.
    pub fn file_prefix(self) -> &'static str {
        match self {
            Mode::Encode => "encoded_",
            Mode::Decode => "decoded_",
        }
    }

    /// The shift actually applied: decoding is encoding with the key negated.
    pub fn effective_key(self, key: ShiftKey) -> ShiftKey {
        match self {
            Mode::Encode => key,
            Mode::Decode => key.negated(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encode => write!(f, "encode"),
            Mode::Decode => write!(f, "decode"),
        }
    }
}

/// A character outside both the alphabet and the exception set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharWarning {
    pub character: char,
    /// 1-based
    pub line: usize,
    /// 1-based, counted in characters
    pub column: usize,
}

/// Result of an in-memory transform
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transformed {
    pub text: String,
    pub warnings: Vec<CharWarning>,
}

/// Shifts a single character, or returns `None` if it is unrecognized.
pub fn shift_char(c: char, key: ShiftKey) -> Option<char> {
    match alphabet::classify(c) {
        Class::Exception => Some(c),
        Class::Letter(letter) => Some(alphabet::char_at(key.apply(letter.index), letter.case)),
        Class::Unrecognized => None,
    }
}

/// Transforms one line (terminator included) and appends it to `out`.
///
/// `key` is the effective key; `line_no` is 1-based. Each unrecognized
/// character is handed to `on_warning` as it is met.
pub fn transform_line<F: FnMut(CharWarning)>(
    line: &str,
    key: ShiftKey,
    line_no: usize,
    out: &mut String,
    on_warning: &mut F,
) {
    for (i, c) in line.chars().enumerate() {
        match shift_char(c, key) {
            Some(shifted) => out.push(shifted),
            None => {
                on_warning(CharWarning {
                    character: c,
                    line: line_no,
                    column: i + 1,
                });
                out.push(c);
            }
        }
    }
}

/// Streams `input` to `output` line by line, keeping line terminators.
///
/// Unrecognized characters are passed to `on_warning` in input order while
/// the stream is processed; the number of them is returned. Fails only on
/// I/O errors, including input that is not valid UTF-8.
pub fn transform<R, W, F>(
    mut input: R,
    mut output: W,
    key: ShiftKey,
    mode: Mode,
    mut on_warning: F,
) -> std::io::Result<usize>
where
    R: BufRead,
    W: Write,
    F: FnMut(CharWarning),
{
    let key = mode.effective_key(key);
    let mut line = String::new();
    let mut shifted = String::new();
    let mut line_no = 0;
    let mut warned = 0;

    let mut count_and_forward = |w: CharWarning| {
        warned += 1;
        on_warning(w);
    };

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        line_no += 1;
        shifted.clear();
        transform_line(&line, key, line_no, &mut shifted, &mut count_and_forward);
        output.write_all(shifted.as_bytes())?;
    }

    output.flush()?;
    Ok(warned)
}

/// In-memory form of [`transform`].
pub fn transform_str(text: &str, key: ShiftKey, mode: Mode) -> Transformed {
    let key = mode.effective_key(key);
    let mut out = String::with_capacity(text.len());
    let mut warnings = Vec::new();

    for (i, line) in text.split_inclusive('\n').enumerate() {
        transform_line(line, key, i + 1, &mut out, &mut |w: CharWarning| {
            warnings.push(w)
        });
    }

    Transformed {
        text: out,
        warnings,
    }
}
