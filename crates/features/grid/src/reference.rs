use crate::error::GridError;
use std::fmt;
use std::str::FromStr;

const SQUARE_M: f64 = 100_000.0;
const MAX_DIGITS: usize = 10;

/// 500 km squares as `(letter, column, row)` counted from the false origin.
const MAJOR_SQUARES: [(char, u8, u8); 6] =
    [('S', 0, 0), ('T', 1, 0), ('N', 0, 1), ('O', 1, 1), ('H', 0, 2), ('J', 1, 2)];

/// 100 km squares inside a 500 km square: a 5x5 block lettered row by row from the
/// north-west corner, skipping `I`.
const MINOR_LETTERS: [char; 25] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

fn major_offset(letter: char) -> Option<(u8, u8)> {
    MAJOR_SQUARES.iter().find(|(l, ..)| *l == letter).map(|&(_, col, row)| (col, row))
}

#[allow(clippy::cast_possible_truncation)]
fn minor_offset(letter: char) -> Option<(u8, u8)> {
    let index = MINOR_LETTERS.iter().position(|&l| l == letter)?;
    Some(((index % 5) as u8, 4 - (index / 5) as u8))
}

fn major_letter(col: u8, row: u8) -> Option<char> {
    MAJOR_SQUARES.iter().find(|&&(_, c, r)| c == col && r == row).map(|&(l, ..)| l)
}

fn minor_letter(col: u8, row: u8) -> Option<char> {
    (col < 5 && row < 5).then(|| MINOR_LETTERS[usize::from(4 - row) * 5 + usize::from(col)])
}

/// A parsed national grid reference such as `TQ 30163 80311`.
///
/// Holds the two square letters, the 100 km square they resolve to, and the easting and
/// northing digits at the parsed precision (1 to 5 digits per axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridReference {
    letters: [char; 2],
    square: (u8, u8),
    easting: u32,
    northing: u32,
    precision: u8,
}

impl GridReference {
    /// Parses a reference, ignoring case and any whitespace.
    ///
    /// # Errors
    /// * [`GridError::TooShort`] for fewer than four significant characters.
    /// * [`GridError::UnknownLetter`] if either letter is not a grid square.
    /// * [`GridError::OddDigits`] / [`GridError::DigitCount`] unless the digit count is
    ///   even and within `2..=10`.
    /// * [`GridError::NonDigit`] if anything but ASCII digits follows the letters.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let compact: String =
            input.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_uppercase).collect();

        let mut chars = compact.chars();
        let (Some(major), Some(minor)) = (chars.next(), chars.next()) else {
            return Err(too_short(&compact));
        };
        let digits = chars.as_str();
        if digits.chars().count() < 2 {
            return Err(too_short(&compact));
        }

        let (Some((major_col, major_row)), Some((minor_col, minor_row))) =
            (major_offset(major), minor_offset(minor))
        else {
            return Err(GridError::UnknownLetter {
                message: format!("{major}{minor}").into(),
                context: None,
            });
        };

        let count = digits.chars().count();
        if count % 2 != 0 {
            return Err(GridError::OddDigits { message: count.to_string().into(), context: None });
        }
        if count > MAX_DIGITS {
            return Err(GridError::DigitCount { message: count.to_string().into(), context: None });
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GridError::NonDigit { message: digits.to_owned().into(), context: None });
        }

        let (easting, northing) = digits.split_at(count / 2);
        let number = |part: &str| {
            part.parse::<u32>().map_err(|e| GridError::NonDigit {
                message: e.to_string().into(),
                context: Some(part.to_owned().into()),
            })
        };

        #[allow(clippy::cast_possible_truncation)]
        Ok(Self {
            letters: [major, minor],
            square: (major_col * 5 + minor_col, major_row * 5 + minor_row),
            easting: number(easting)?,
            northing: number(northing)?,
            precision: (count / 2) as u8,
        })
    }

    /// Builds the reference containing an easting/northing (metres from the false origin),
    /// truncated to `digits` total digits.
    ///
    /// # Errors
    /// [`GridError::OddDigits`] / [`GridError::DigitCount`] for an unsupported `digits`, and
    /// [`GridError::OutOfGrid`] when the position lies outside the lettered squares.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_easting_northing(
        easting: f64,
        northing: f64,
        digits: usize,
    ) -> Result<Self, GridError> {
        if digits % 2 != 0 {
            return Err(GridError::OddDigits { message: digits.to_string().into(), context: None });
        }
        if !(2..=MAX_DIGITS).contains(&digits) {
            return Err(GridError::DigitCount { message: digits.to_string().into(), context: None });
        }

        let out_of_grid = || GridError::OutOfGrid {
            message: format!("E {easting:.1} N {northing:.1}").into(),
            context: None,
        };

        if !(0.0..1_000_000.0).contains(&easting) || !(0.0..1_500_000.0).contains(&northing) {
            return Err(out_of_grid());
        }

        let col = (easting / SQUARE_M).floor() as u8;
        let row = (northing / SQUARE_M).floor() as u8;
        // The range check keeps both lookups inside the lettered block.
        let major = major_letter(col / 5, row / 5).ok_or_else(out_of_grid)?;
        let minor = minor_letter(col % 5, row % 5).ok_or_else(out_of_grid)?;

        let precision = (digits / 2) as u8;
        let scale = f64::from(10u32.pow(5 - u32::from(precision)));
        let within = |value: f64, index: u8| ((value - f64::from(index) * SQUARE_M) / scale).floor() as u32;

        Ok(Self {
            letters: [major, minor],
            square: (col, row),
            easting: within(easting, col),
            northing: within(northing, row),
            precision,
        })
    }

    /// The 500 km and 100 km square letters.
    #[must_use]
    pub const fn letters(&self) -> (char, char) {
        (self.letters[0], self.letters[1])
    }

    /// Total number of digits (easting plus northing).
    #[must_use]
    pub const fn digits(&self) -> usize {
        self.precision as usize * 2
    }

    /// Side length in metres of the square this reference identifies.
    #[must_use]
    pub fn precision_metres(&self) -> u32 {
        10u32.pow(5 - u32::from(self.precision))
    }

    /// South-west corner of the referenced square, in metres from the false origin.
    #[must_use]
    pub fn easting_northing(&self) -> (f64, f64) {
        let scale = f64::from(self.precision_metres());
        (
            f64::from(self.square.0) * SQUARE_M + f64::from(self.easting) * scale,
            f64::from(self.square.1) * SQUARE_M + f64::from(self.northing) * scale,
        )
    }
}

impl FromStr for GridReference {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GridReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = usize::from(self.precision);
        write!(
            f,
            "{}{} {:0width$} {:0width$}",
            self.letters[0], self.letters[1], self.easting, self.northing
        )
    }
}

fn too_short(compact: &str) -> GridError {
    GridError::TooShort { message: compact.to_owned().into(), context: None }
}
