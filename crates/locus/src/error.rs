use locus_grid::GridError;
use locus_lookup::LookupError;
use locus_parsing::ParseError;
use std::borrow::Cow;

/// Why [`Resolver::try_resolve`](crate::Resolver::try_resolve) produced no point.
#[locus_derive::locus_error]
pub enum ResolveError {
    #[error("Could not parse coordinates{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: ParseError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid grid reference{}: {source}", format_context(.context))]
    Grid {
        #[source]
        source: GridError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Lookup failed{}: {source}", format_context(.context))]
    Lookup {
        #[source]
        source: LookupError,
        context: Option<Cow<'static, str>>,
    },

    /// Nothing in the fallback chain accepted the input.
    #[error("Could not resolve location{}: {message}", format_context(.context))]
    Unresolved { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ResolveError {
    /// True when a remote service failed, as opposed to the input simply not resolving.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Lookup { source, .. } if !source.is_miss())
    }
}
