//! Degrees/minutes/seconds scanner.
//!
//! Each component has the shape
//! `[hemisphere]? degrees (°|space)+ minutes? ('|space)* seconds? ("|space)* [hemisphere]?`
//! and components are picked out of the input left to right. Text between them is skipped.

use crate::error::ParseError;
use locus_domain::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    const fn is_latitude(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    const fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }
}

/// One angle pulled out of the input, minutes and seconds already folded in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DmsToken {
    pub(crate) value: f64,
    pub(crate) hemisphere: Option<Hemisphere>,
}

const fn is_degree_mark(c: char) -> bool {
    c == '°' || c == 'º'
}

const fn is_minute_mark(c: char) -> bool {
    matches!(c, '\'' | '’' | '′')
}

const fn is_second_mark(c: char) -> bool {
    matches!(c, '"' | '”' | '″')
}

/// Byte cursor over the input. Every step either consumes what it recognises or leaves
/// the position untouched.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(text: &'a str, pos: usize) -> Self {
        Self { text, pos }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn eat(&mut self, accept: impl Fn(char) -> bool) -> Option<char> {
        let c = self.peek().filter(|&c| accept(c))?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip(&mut self, accept: impl Fn(char) -> bool) -> usize {
        let mut skipped = 0;
        while self.eat(&accept).is_some() {
            skipped += 1;
        }
        skipped
    }

    /// `-?` (when `signed`) `digits ( . digits )?`. Returns the magnitude and whether a
    /// minus sign was present.
    fn number(&mut self, signed: bool) -> Option<(f64, bool)> {
        let start = self.pos;
        let negative = signed && self.eat(|c| c == '-').is_some();
        let digits_start = self.pos;

        if self.skip(|c| c.is_ascii_digit()) == 0 {
            self.pos = start;
            return None;
        }

        let before_fraction = self.pos;
        if self.eat(|c| c == '.').is_some() && self.skip(|c| c.is_ascii_digit()) == 0 {
            self.pos = before_fraction;
        }

        match self.text[digits_start..self.pos].parse::<f64>() {
            Ok(value) => Some((value, negative)),
            Err(_) => {
                self.pos = start;
                None
            },
        }
    }

    /// Attempts one component starting exactly at the current position.
    fn component(&mut self) -> Option<DmsToken> {
        let leading = self.eat(|c| Hemisphere::from_char(c).is_some()).and_then(Hemisphere::from_char);
        self.skip(char::is_whitespace);

        let (degrees, negative) = self.number(true)?;
        if self.skip(|c| is_degree_mark(c) || c.is_whitespace()) == 0 {
            return None;
        }

        let minutes = self.number(false).map_or(0.0, |(m, _)| m);
        self.skip(|c| is_minute_mark(c) || c.is_whitespace());
        let seconds = self.number(false).map_or(0.0, |(s, _)| s);
        self.skip(|c| is_second_mark(c) || c.is_whitespace());

        let trailing = self.eat(|c| Hemisphere::from_char(c).is_some()).and_then(Hemisphere::from_char);
        let hemisphere = leading.or(trailing);

        let magnitude = degrees + minutes / 60.0 + seconds / 3600.0;
        let value = if negative || hemisphere.is_some_and(Hemisphere::is_negative) { -magnitude } else { magnitude };

        Some(DmsToken { value, hemisphere })
    }
}

/// Every component in `input`, in order of appearance.
pub(crate) fn scan(input: &str) -> Vec<DmsToken> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = input[pos..].chars().next() {
        let mut cursor = Cursor::new(input, pos);
        if let Some(token) = cursor.component() {
            tokens.push(token);
            pos = cursor.pos;
            continue;
        }

        // A component starting inside a digit or whitespace run ends where one starting at
        // the head of the run does, so a failed head rules out the whole run.
        let mut cursor = Cursor::new(input, pos);
        let run = if c.is_ascii_digit() {
            cursor.skip(|c| c.is_ascii_digit())
        } else if c.is_whitespace() {
            cursor.skip(char::is_whitespace)
        } else {
            0
        };
        pos = if run == 0 { pos + c.len_utf8() } else { cursor.pos };
    }

    tokens
}

/// Parses a pair of degrees/minutes/seconds angles such as `51°30'26.4"N 0°7'39.6"W`.
///
/// Latitude and longitude are told apart by hemisphere letters: a component marked `N`/`S`
/// is the latitude, otherwise one marked `E`/`W` is the longitude, otherwise the first
/// component is taken as the latitude.
///
/// # Errors
/// [`ParseError::Empty`], [`ParseError::TooFewTokens`] when fewer than two angles are
/// present and [`ParseError::OutOfRange`] for impossible coordinates.
///
/// ```rust
/// let point = locus_parsing::parse_dms("51°30'26.4\"N 0°7'39.6\"W").unwrap();
/// assert!((point.lat() - 51.507_333).abs() < 1e-6);
/// assert!((point.lng() + 0.127_667).abs() < 1e-6);
/// ```
pub fn parse_dms(input: &str) -> Result<GeoPoint, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty { context: None });
    }

    let tokens = scan(input);
    let [first, second, ..] = tokens.as_slice() else {
        return Err(ParseError::TooFewTokens { found: tokens.len(), context: None });
    };

    let marks = |token: &DmsToken, latitude: bool| token.hemisphere.is_some_and(|h| h.is_latitude() == latitude);
    let (lat, lng) = if marks(first, true) {
        (first.value, second.value)
    } else if marks(second, true) {
        (second.value, first.value)
    } else if marks(first, false) {
        (second.value, first.value)
    } else {
        (first.value, second.value)
    };

    GeoPoint::new(lat, lng).ok_or(ParseError::OutOfRange { lat, lng, context: None })
}
