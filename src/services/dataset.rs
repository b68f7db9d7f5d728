use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::models::FirmRecord;

/// Errors that can occur while loading the firm dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Loader task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// One CSV row exactly as written in the normalized adviser file
///
/// Every column is optional so a sparse or partial file still loads.
#[derive(Debug, Deserialize)]
struct RawFirmRow {
    #[serde(default)]
    firm_name: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    aum_millions: Option<String>,
    #[serde(default)]
    performance_fee: Option<String>,
    #[serde(default)]
    client_hnw: Option<String>,
    #[serde(default)]
    client_institutional: Option<String>,
    #[serde(default)]
    services: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(rename = "1J-Name", default)]
    contact_name: Option<String>,
    #[serde(rename = "1J-Title", default)]
    contact_title: Option<String>,
    #[serde(default)]
    is_bonus_firm: Option<String>,
}

impl RawFirmRow {
    /// Coerce into a firm record; rows without a firm name are dropped
    fn into_record(self) -> Option<FirmRecord> {
        let firm_name = text(self.firm_name)?;

        Some(FirmRecord {
            firm_name,
            state: text(self.state),
            aum_millions: cell(self.aum_millions)
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|aum| aum.is_finite() && *aum >= 0.0),
            performance_fee: flag(self.performance_fee),
            client_hnw: flag(self.client_hnw),
            client_institutional: flag(self.client_institutional),
            services: text(self.services),
            email: text(self.email),
            phone: text(self.phone),
            website: text(self.website),
            contact_name: text(self.contact_name),
            contact_title: text(self.contact_title),
            is_bonus_firm: flag(self.is_bonus_firm).unwrap_or(false),
        })
    }
}

/// Trimmed non-empty text
fn text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Numeric or flag cell; pandas writes missing values as "nan"
fn cell(value: Option<String>) -> Option<String> {
    text(value).filter(|v| !v.eq_ignore_ascii_case("nan"))
}

/// Parse a boolean cell; unrecognised values are unknown
fn flag(value: Option<String>) -> Option<bool> {
    match cell(value)?.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" | "1.0" => Some(true),
        "false" | "f" | "no" | "n" | "0" | "0.0" => Some(false),
        _ => None,
    }
}

/// Load firm records from any CSV source with a header row
pub fn load_firms_from_reader<R: Read>(reader: R) -> Result<Vec<FirmRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut firms = Vec::new();
    let mut skipped = 0usize;

    for row in csv_reader.deserialize::<RawFirmRow>() {
        match row?.into_record() {
            Some(firm) => firms.push(firm),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} rows without a firm name", skipped);
    }

    Ok(firms)
}

/// Load firm records from a CSV file
pub fn load_firms<P: AsRef<Path>>(path: P) -> Result<Vec<FirmRecord>, DatasetError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let firms = load_firms_from_reader(std::io::BufReader::new(file))?;
    tracing::info!("Loaded {} firms from {}", firms.len(), path.display());

    Ok(firms)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
firm_name,state,aum_millions,performance_fee,client_hnw,client_institutional,services,email,phone,website,1J-Name,1J-Title,is_bonus_firm
Hudson Capital,NY,150.5,True,True,False,\"retirement, estate planning\",info@hudson.example,,,Jane Roe,CCO,False
,CA,10,False,False,False,tax,,,,,,False
Bonus Advisers,,,,,,,,,,,,True
";

    #[test]
    fn test_load_sample() {
        let firms = load_firms_from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(firms.len(), 2);
        let hudson = &firms[0];
        assert_eq!(hudson.firm_name, "Hudson Capital");
        assert_eq!(hudson.state.as_deref(), Some("NY"));
        assert_eq!(hudson.aum_millions, Some(150.5));
        assert_eq!(hudson.performance_fee, Some(true));
        assert_eq!(hudson.client_institutional, Some(false));
        assert_eq!(hudson.services.as_deref(), Some("retirement, estate planning"));
        assert_eq!(hudson.contact_name.as_deref(), Some("Jane Roe"));
        assert_eq!(hudson.phone, None);
        assert!(!hudson.is_bonus_firm);
    }

    #[test]
    fn test_sparse_row_is_all_unknown() {
        let firms = load_firms_from_reader(SAMPLE.as_bytes()).unwrap();
        let bonus = &firms[1];

        assert!(bonus.is_bonus_firm);
        assert_eq!(bonus.state, None);
        assert_eq!(bonus.aum_millions, None);
        assert_eq!(bonus.performance_fee, None);
        assert_eq!(bonus.services, None);
    }

    #[test]
    fn test_missing_columns_tolerated() {
        let csv = "firm_name,state\nSolo Advisory,TX\n";
        let firms = load_firms_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(firms.len(), 1);
        assert_eq!(firms[0].client_hnw, None);
    }

    #[test]
    fn test_flag_parsing() {
        assert_eq!(flag(Some("TRUE".to_string())), Some(true));
        assert_eq!(flag(Some("0".to_string())), Some(false));
        assert_eq!(flag(Some("maybe".to_string())), None);
        assert_eq!(flag(Some("nan".to_string())), None);
    }

    #[test]
    fn test_invalid_aum_is_unknown() {
        let csv = "firm_name,aum_millions\nA,abc\nB,-5\nC,0\n";
        let firms = load_firms_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(firms[0].aum_millions, None);
        assert_eq!(firms[1].aum_millions, None);
        assert_eq!(firms[2].aum_millions, Some(0.0));
    }

    #[test]
    fn test_nan_marker_only_blanks_numeric_and_flag_cells() {
        let csv = "firm_name,state,aum_millions,performance_fee,services\nNan,NY,nan,NaN,Nan Holdings research\n";
        let firms = load_firms_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(firms.len(), 1);
        assert_eq!(firms[0].firm_name, "Nan");
        assert_eq!(firms[0].aum_millions, None);
        assert_eq!(firms[0].performance_fee, None);
        assert_eq!(firms[0].services.as_deref(), Some("Nan Holdings research"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_firms("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
