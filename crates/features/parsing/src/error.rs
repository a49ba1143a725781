use std::borrow::Cow;

#[locus_derive::locus_error]
pub enum ParseError {
    #[error("Empty input{}", format_context(.context))]
    Empty { context: Option<Cow<'static, str>> },

    #[error("Malformed coordinate{}: {message}", format_context(.context))]
    Malformed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Fewer than two coordinate components were found.
    #[error("Expected two coordinate components{}: found {found}", format_context(.context))]
    TooFewTokens { found: usize, context: Option<Cow<'static, str>> },

    /// Well-formed, but latitude or longitude lies outside the valid range.
    #[error("Coordinate out of range{}: lat {lat}, lng {lng}", format_context(.context))]
    OutOfRange { lat: f64, lng: f64, context: Option<Cow<'static, str>> },
}
