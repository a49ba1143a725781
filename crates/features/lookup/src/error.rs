use std::borrow::Cow;

/// Why a remote lookup produced no coordinate.
#[locus_derive::locus_error]
pub enum LookupError {
    /// Connection, TLS, timeout or body read failure.
    #[error("HTTP request failed{}: {source}", format_context(.context))]
    Http {
        #[source]
        source: reqwest::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Malformed service response{}: {source}", format_context(.context))]
    Decode {
        #[source]
        source: serde_json::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Non-success HTTP status.
    #[error("Service responded with status {status}{}", format_context(.context))]
    Status { status: u16, context: Option<Cow<'static, str>> },

    /// The service answered but had no usable coordinate for the query.
    #[error("No match{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A three-word lookup was attempted without an API key.
    #[error("Missing API credential{}", format_context(.context))]
    MissingCredential { context: Option<Cow<'static, str>> },

    /// The configured base URL cannot carry the request path.
    #[error("Invalid service URL{}: {message}", format_context(.context))]
    InvalidUrl { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl LookupError {
    /// True for ordinary misses (unknown postcode, no key) as opposed to faults.
    #[must_use]
    pub const fn is_miss(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::MissingCredential { .. } | Self::Status { status: 404, .. }
        )
    }
}
