use crate::error::ResolveError;
use locus_domain::config::LocusConfig;
use locus_domain::{DetectedFormat, GeoPoint};
use locus_grid::grid_to_wgs84;
use locus_lookup::{HttpTransport, PostcodeClient, ThreeWordClient, Transport};
use locus_parsing::{detect_format, normalize_postcode, parse_decimal, parse_dms};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

type LocalParser = fn(&str) -> Option<GeoPoint>;

/// Tried in order for input of no recognisable shape.
const FALLBACK_CHAIN: [LocalParser; 3] = [decimal, dms, grid];

fn decimal(input: &str) -> Option<GeoPoint> {
    parse_decimal(input).ok()
}

fn dms(input: &str) -> Option<GeoPoint> {
    parse_dms(input).ok()
}

fn grid(input: &str) -> Option<GeoPoint> {
    grid_to_wgs84(input).ok()
}

/// Turns raw location strings into WGS84 points.
///
/// Holds no state beyond its service clients, so clones are cheap and concurrent calls are
/// independent.
#[derive(Debug, Clone)]
pub struct Resolver<T = HttpTransport> {
    postcodes: PostcodeClient<T>,
    three_words: ThreeWordClient<T>,
}

impl Resolver<HttpTransport> {
    /// Builds a resolver talking HTTP to the configured services.
    ///
    /// # Errors
    /// [`ResolveError::Lookup`] if the HTTP client cannot be created.
    pub fn from_config(config: &LocusConfig) -> Result<Self, ResolveError> {
        let transport = HttpTransport::new(&config.http)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport + Clone> Resolver<T> {
    #[must_use]
    pub fn with_transport(transport: T, config: &LocusConfig) -> Self {
        Self {
            postcodes: PostcodeClient::new(transport.clone(), config.postcode.clone()),
            three_words: ThreeWordClient::new(transport, config.three_words.clone()),
        }
    }

    /// Resolves `input`, reporting why when it cannot.
    ///
    /// Routing by detected format:
    /// * decimal: the DMS parser first (it handles hemisphere letters), then the decimal parser;
    /// * DMS: DMS parser only;
    /// * national grid: grid transform only;
    /// * postcode / three-word address: one network lookup;
    /// * anything else: decimal, DMS and grid parsers in turn, first success wins.
    ///
    /// # Errors
    /// The error of the parser or lookup that was tried last, or
    /// [`ResolveError::Unresolved`] for empty input and exhausted fallbacks.
    #[instrument(skip(self, credential), level = "debug")]
    pub async fn try_resolve(&self, input: &str, credential: Option<&str>) -> Result<GeoPoint, ResolveError> {
        let input = input.trim();
        let Some(format) = detect_format(input) else {
            return Err(ResolveError::Unresolved { message: "empty input".into(), context: None });
        };
        debug!(format = ?format, "Routing input");

        let point = match format {
            DetectedFormat::Decimal => parse_dms(input).or_else(|_| parse_decimal(input))?,
            DetectedFormat::DegreesMinutesSeconds => parse_dms(input)?,
            DetectedFormat::NationalGrid => grid_to_wgs84(input)?,
            DetectedFormat::Postcode => self.postcodes.try_lookup(input).await?,
            DetectedFormat::ThreeWordAddress => self.three_words.try_lookup(input, credential).await?,
            DetectedFormat::Unknown => FALLBACK_CHAIN.iter().find_map(|parse| parse(input)).ok_or_else(|| {
                ResolveError::Unresolved { message: input.to_owned().into(), context: Some(format.label().into()) }
            })?,
        };
        Ok(point)
    }

    /// Resolves `input` to a point, or `None`. Service faults are logged at `warn`, ordinary
    /// misses at `debug`.
    pub async fn resolve(&self, input: &str, credential: Option<&str>) -> Option<GeoPoint> {
        match self.try_resolve(input, credential).await {
            Ok(point) => Some(point),
            Err(e) if e.is_fault() => {
                warn!(input, error = %e, "Location lookup failed");
                None
            },
            Err(e) => {
                debug!(input, error = %e, "Location not resolved");
                None
            },
        }
    }

    /// Resolves a list of locations, one per line.
    ///
    /// Blank lines are dropped. Postcodes share one bulk lookup; everything else goes
    /// through [`Self::resolve`]. Entries come back in input order.
    #[instrument(skip_all)]
    pub async fn resolve_batch<I, S>(&self, lines: I, credential: Option<&str>) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<(usize, String, DetectedFormat)> = lines
            .into_iter()
            .enumerate()
            .filter_map(|(index, line)| {
                let input = line.as_ref().trim();
                detect_format(input).map(|format| (index + 1, input.to_owned(), format))
            })
            .collect();

        let postcodes: Vec<&str> = rows
            .iter()
            .filter(|(_, _, format)| *format == DetectedFormat::Postcode)
            .map(|(_, input, _)| input.as_str())
            .collect();
        let bulk = if postcodes.is_empty() {
            locus_lookup::BulkLookupResult::default()
        } else {
            self.postcodes.lookup_bulk(postcodes.as_slice()).await
        };

        let mut report = BatchReport::default();
        for (line, input, format) in rows {
            let (name, point) = if format == DetectedFormat::Postcode {
                (input.to_uppercase(), bulk.get(&normalize_postcode(&input)).copied())
            } else {
                (input.clone(), self.resolve(&input, credential).await)
            };

            if point.is_some() {
                report.resolved += 1;
            } else {
                report.failed += 1;
            }
            report.entries.push(BatchEntry { line, name, input, format, point });
        }

        info!(resolved = report.resolved, failed = report.failed, "Batch resolution finished");
        report
    }
}

/// Outcome for one non-blank input line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    /// 1-based line number in the original input.
    pub line: usize,
    /// Display name: the uppercased postcode, otherwise the trimmed input.
    pub name: String,
    pub input: String,
    pub format: DetectedFormat,
    pub point: Option<GeoPoint>,
}

/// Per-line results plus totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub resolved: usize,
    pub failed: usize,
}
