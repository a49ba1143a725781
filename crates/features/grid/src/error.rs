use std::borrow::Cow;

/// Why a national grid reference was rejected.
///
/// These are expected, silent rejections of malformed input; none of them indicate a fault.
#[locus_derive::locus_error]
pub enum GridError {
    /// Fewer than four significant characters.
    #[error("Grid reference too short{}: {message}", format_context(.context))]
    TooShort { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A leading letter is not part of the 500 km or 100 km square alphabet.
    #[error("Unknown grid square letter{}: {message}", format_context(.context))]
    UnknownLetter { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Easting and northing need the same number of digits.
    #[error("Odd number of grid digits{}: {message}", format_context(.context))]
    OddDigits { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Digit count outside `2..=10`.
    #[error("Unsupported grid precision{}: {message}", format_context(.context))]
    DigitCount { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Non-digit character in grid reference{}: {message}", format_context(.context))]
    NonDigit { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A coordinate falls outside the lettered squares.
    #[error("Position outside the national grid{}: {message}", format_context(.context))]
    OutOfGrid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
