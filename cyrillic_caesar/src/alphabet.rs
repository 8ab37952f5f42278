//! The fixed 33-letter Cyrillic alphabet and the passthrough character set

/// Number of letters in the alphabet
pub const LEN: usize = 33;

/// Lowercase letters in alphabet order
pub const LOWERCASE: [char; LEN] = [
    'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й',
    'к', 'л', 'м', 'н', 'о', 'п', 'р', 'с', 'т', 'у', 'ф',
    'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я',
];

/// Uppercase letters, index-aligned with [`LOWERCASE`]
pub const UPPERCASE: [char; LEN] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й',
    'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С', 'Т', 'У', 'Ф',
    'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Characters copied through a cipher pass without a warning.
///
/// `\r` is included so CRLF input keeps its line endings quietly.
pub const EXCEPTIONS: [char; 15] = [
    ' ', '\t', '\n', '\r', '.', ',', ';', ':', '!', '?', '-', '\'', '"', '(', ')',
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
}

/// A letter's place in the alphabet together with the table it came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Letter {
    pub index: usize,
    pub case: Case,
}

/// How a cipher pass treats a character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Class {
    Exception,
    Letter(Letter),
    Unrecognized,
}

/// Looks a character up in the lowercase table, then the uppercase one.
pub fn position_of(c: char) -> Option<Letter> {
    if let Some(index) = LOWERCASE.iter().position(|&l| l == c) {
        return Some(Letter {
            index,
            case: Case::Lower,
        });
    }
    UPPERCASE
        .iter()
        .position(|&l| l == c)
        .map(|index| Letter {
            index,
            case: Case::Upper,
        })
}

/// Returns the letter at `index` in the table for `case`.
///
/// # Panics
///
/// Panics if `index >= LEN`.
pub fn char_at(index: usize, case: Case) -> char {
    match case {
        Case::Lower => LOWERCASE[index],
        Case::Upper => UPPERCASE[index],
    }
}

pub fn is_exception(c: char) -> bool {
    EXCEPTIONS.contains(&c)
}

pub fn classify(c: char) -> Class {
    if is_exception(c) {
        Class::Exception
    } else if let Some(letter) = position_of(c) {
        Class::Letter(letter)
    } else {
        Class::Unrecognized
    }
}

/// Case-insensitive position of `c`, or `None` for non-members.
pub fn fold(c: char) -> Option<usize> {
    position_of(c).map(|letter| letter.index)
}
