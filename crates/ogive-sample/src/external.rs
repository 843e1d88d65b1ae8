//! External single-column CSV data.
//!
//! The expected format is one unlabeled numeric column. Only the first field
//! of each record is read; records whose first field is empty, not valid
//! UTF-8, not a number, or not finite are dropped. A header line is therefore dropped like any
//! other non-numeric row.

use std::{
    fmt,
    fs::File,
    io::{self, BufReader, Read},
    path::PathBuf,
    str::{self, FromStr},
    time::Duration,
};

use serde::Serialize;

/// How long an HTTP fetch may take before it counts as failed.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where external data is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::IsVariant)]
#[serde(tag = "kind", content = "location", rename_all = "snake_case")]
pub enum Location {
    /// A local file.
    Path(PathBuf),
    /// An `http://` or `https://` URL, e.g. a published spreadsheet export.
    Url(String),
}

impl FromStr for Location {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(Self::Url(s.to_owned()))
        } else {
            Ok(Self::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => fmt::Display::fmt(&path.display(), f),
            Self::Url(url) => fmt::Display::fmt(url, f),
        }
    }
}

/// Failure to read external data.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SourceError {
    #[display("failed to open {location}")]
    Open {
        location: String,
        source: io::Error,
    },
    #[display("failed to fetch {location}")]
    Fetch {
        location: String,
        source: reqwest::Error,
    },
    #[display("failed to parse CSV from {location}")]
    Csv {
        location: String,
        source: csv::Error,
    },
    #[display("no numeric rows in {location}")]
    NoNumericRows { location: String },
}

/// Reads the first column of CSV data, keeping numeric rows only.
///
/// # Examples
///
/// ```
/// use ogive_sample::external::parse_column;
///
/// let data = "score\n71.5\n\nabsent\n64\n88.25,extra\n";
/// let values = parse_column(data.as_bytes()).unwrap();
/// assert_eq!(values, vec![71.5, 64.0, 88.25]);
/// ```
pub fn parse_column<R>(reader: R) -> Result<Vec<f64>, csv::Error>
where
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut values = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        let Some(field) = record.get(0) else {
            continue;
        };
        if let Ok(field) = str::from_utf8(field)
            && let Ok(value) = field.trim().parse::<f64>()
            && value.is_finite()
        {
            values.push(value);
        }
    }
    Ok(values)
}

/// Loads the numeric column from `location`.
///
/// # Errors
///
/// Fails if the location cannot be read, is not valid CSV, or contains no
/// numeric rows.
pub fn load(location: &Location) -> Result<Vec<f64>, SourceError> {
    let name = location.to_string();
    let values = match location {
        Location::Path(path) => {
            let file = File::open(path).map_err(|source| SourceError::Open {
                location: name.clone(),
                source,
            })?;
            parse_column(BufReader::new(file))
        }
        Location::Url(url) => {
            let body = fetch(url).map_err(|source| SourceError::Fetch {
                location: name.clone(),
                source,
            })?;
            parse_column(body.as_bytes())
        }
    }
    .map_err(|source| SourceError::Csv {
        location: name.clone(),
        source,
    })?;

    if values.is_empty() {
        return Err(SourceError::NoNumericRows { location: name });
    }
    tracing::debug!(location = %name, rows = values.len(), "loaded external data");
    Ok(values)
}

fn fetch(url: &str) -> Result<String, reqwest::Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    client.get(url).send()?.error_for_status()?.text()
}

#[cfg(test)]
mod tests {
    use std::{
        env, fs,
        process,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path = env::temp_dir().join(format!("ogive-{}-{nanos}-{name}", process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_location_from_str() {
        assert_eq!(
            "https://example.com/export?format=csv".parse::<Location>(),
            Ok(Location::Url("https://example.com/export?format=csv".into()))
        );
        assert!("scores.csv".parse::<Location>().unwrap().is_path());
        assert!("http://host/a.csv".parse::<Location>().unwrap().is_url());
    }

    #[test]
    fn test_parse_drops_non_numeric_rows() {
        let data = "Nota\n 55 \n\n-\n1e2\nNaN\ninf\n12.5\n";
        let values = parse_column(data.as_bytes()).unwrap();
        assert_eq!(values, vec![55.0, 100.0, 12.5]);
    }

    #[test]
    fn test_parse_drops_invalid_utf8_rows() {
        let data = b"score\n71.5\n\xff\xfe\n64\n";
        let values = parse_column(&data[..]).unwrap();
        assert_eq!(values, vec![71.5, 64.0]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_column("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_load_file() {
        let path = temp_file("scores.csv", "score\n60\n70\n80\n");
        let values = load(&Location::Path(path.clone())).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(values, vec![60.0, 70.0, 80.0]);
    }

    #[test]
    fn test_load_missing_file() {
        let location = Location::Path(PathBuf::from("/nonexistent/ogive/scores.csv"));
        let err = load(&location).unwrap_err();
        assert!(matches!(err, SourceError::Open { .. }));
        assert_eq!(err.to_string(), "failed to open /nonexistent/ogive/scores.csv");
    }

    #[test]
    fn test_load_without_numbers() {
        let path = temp_file("words.csv", "alpha\nbeta\n");
        let err = load(&Location::Path(path.clone())).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, SourceError::NoNumericRows { .. }));
    }
}
