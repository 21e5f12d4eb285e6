use super::domain::{InputFormat, RawApplicant, REQUIRED_FIELDS};
use serde_json::Value;
use std::io::Read;

const APPLICANTS_KEY: &str = "applicants";

/// Help text shown whenever the input cannot be recognized as CSV or JSON.
pub const TEMPLATE_MESSAGE: &str = r#"Invalid data format. Please provide data in CSV or JSON format.

Here's the template:

CSV Format Example:
```csv
applicant_id,credit_score,annual_income,monthly_debt_payments
x,x,x,x
x,x,x,x
```

JSON Format Example:
```json
{
  "applicants": [
    {
      "applicant_id": "x",
      "credit_score": x,
      "annual_income": x,
      "monthly_debt_payments": x
    }
  ]
}
```
Please provide your data in CSV or JSON format to begin the analysis."#;

/// Structural problems detected before any record is inspected.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("{}", TEMPLATE_MESSAGE)]
    UnsupportedFormat(String),
    #[error("{}", TEMPLATE_MESSAGE)]
    MalformedJson(#[source] serde_json::Error),
    #[error("{}", TEMPLATE_MESSAGE)]
    MalformedCsv(#[source] csv::Error),
    #[error("Invalid JSON structure. Missing 'applicants' key.")]
    MissingApplicantsKey,
    #[error("Invalid CSV structure. Missing required headers.")]
    MissingCsvHeaders,
}

impl FormatError {
    /// Parser or caller detail hidden behind the template text.
    pub fn detail(&self) -> Option<String> {
        match self {
            FormatError::UnsupportedFormat(kind) => Some(format!("unsupported format '{kind}'")),
            FormatError::MalformedJson(err) => Some(err.to_string()),
            FormatError::MalformedCsv(err) => Some(err.to_string()),
            FormatError::MissingApplicantsKey | FormatError::MissingCsvHeaders => None,
        }
    }
}

/// Failures while turning already-checked text into raw applicants.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON input has no 'applicants' array")]
    MissingApplicants,
    #[error("applicant at position {position} is not a JSON object")]
    NotAnObject { position: usize },
}

/// Confirm the text is well-formed for the requested format and carries the
/// top-level shape the parser expects.
pub fn validate_format(raw: &str, format_kind: &str) -> Result<InputFormat, FormatError> {
    let format = format_kind
        .parse::<InputFormat>()
        .map_err(FormatError::UnsupportedFormat)?;

    match format {
        InputFormat::Json => {
            let document: Value =
                serde_json::from_str(raw).map_err(FormatError::MalformedJson)?;
            let has_applicants = document
                .get(APPLICANTS_KEY)
                .map(Value::is_array)
                .unwrap_or(false);
            if !has_applicants {
                return Err(FormatError::MissingApplicantsKey);
            }
        }
        InputFormat::Csv => {
            let mut reader = csv_reader(raw.as_bytes());
            let headers = reader.headers().map_err(FormatError::MalformedCsv)?;
            let complete = !headers.is_empty()
                && REQUIRED_FIELDS
                    .iter()
                    .all(|field| headers.iter().any(|header| header == field.key()));
            if !complete {
                return Err(FormatError::MissingCsvHeaders);
            }
        }
    }

    Ok(format)
}

/// Read the applicant sequence in submission order.
pub fn parse_applicants(raw: &str, format: InputFormat) -> Result<Vec<RawApplicant>, ParseError> {
    match format {
        InputFormat::Json => parse_json(raw),
        InputFormat::Csv => parse_csv(raw.as_bytes()),
    }
}

fn parse_json(raw: &str) -> Result<Vec<RawApplicant>, ParseError> {
    let document: Value = serde_json::from_str(raw)?;
    let entries = match document {
        Value::Object(mut root) => match root.remove(APPLICANTS_KEY) {
            Some(Value::Array(entries)) => entries,
            _ => return Err(ParseError::MissingApplicants),
        },
        _ => return Err(ParseError::MissingApplicants),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| match entry {
            Value::Object(fields) => Ok(RawApplicant::new(fields)),
            _ => Err(ParseError::NotAnObject {
                position: position + 1,
            }),
        })
        .collect()
}

fn parse_csv<R: Read>(reader: R) -> Result<Vec<RawApplicant>, ParseError> {
    let mut csv_reader = csv_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut applicants = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let mut applicant = RawApplicant::default();
        for (index, header) in headers.iter().enumerate() {
            let value = row
                .get(index)
                .map(|cell| Value::String(cell.to_string()))
                .unwrap_or(Value::Null);
            applicant.insert(header, value);
        }
        applicants.push(applicant);
    }

    Ok(applicants)
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::loan::domain::ApplicantField;

    const CSV_HEADER: &str = "applicant_id,credit_score,annual_income,monthly_debt_payments";

    #[test]
    fn format_kind_is_case_insensitive() {
        let json = r#"{"applicants": []}"#;
        assert_eq!(validate_format(json, "JSON").expect("json"), InputFormat::Json);
        assert_eq!(
            validate_format(CSV_HEADER, "Csv").expect("csv"),
            InputFormat::Csv
        );
    }

    #[test]
    fn unknown_format_kind_returns_template() {
        let error = validate_format("a: 1", "yaml").expect_err("yaml is unsupported");
        assert!(matches!(error, FormatError::UnsupportedFormat(ref kind) if kind == "yaml"));
        assert_eq!(error.to_string(), TEMPLATE_MESSAGE);
    }

    #[test]
    fn malformed_json_returns_template() {
        let error = validate_format("{\"applicants\": [", "json").expect_err("truncated");
        assert!(matches!(error, FormatError::MalformedJson(_)));
        assert!(error.to_string().starts_with("Invalid data format."));
        assert!(error.detail().is_some());
    }

    #[test]
    fn json_requires_applicants_array() {
        for document in [r#"{"people": []}"#, r#"{"applicants": {}}"#, "[]", "42"] {
            match validate_format(document, "json") {
                Err(FormatError::MissingApplicantsKey) => {}
                other => panic!("expected missing applicants key for {document}, got {other:?}"),
            }
        }
    }

    #[test]
    fn csv_requires_every_header() {
        let error = validate_format("applicant_id,credit_score,annual_income\nA1,700,1", "csv")
            .expect_err("monthly_debt_payments missing");
        assert_eq!(
            error.to_string(),
            "Invalid CSV structure. Missing required headers."
        );

        match validate_format("", "csv") {
            Err(FormatError::MissingCsvHeaders) => {}
            other => panic!("expected missing headers for empty csv, got {other:?}"),
        }
    }

    #[test]
    fn csv_allows_extra_headers_in_any_order() {
        let csv = "notes,monthly_debt_payments,annual_income,credit_score,applicant_id\n";
        assert_eq!(validate_format(csv, "csv").expect("valid"), InputFormat::Csv);
    }

    #[test]
    fn csv_rows_keep_order_and_trim_cells() {
        let csv = format!("{CSV_HEADER}\nA1, 720 ,60000,800\nA2,580,28000,500\n");
        let applicants = parse_applicants(&csv, InputFormat::Csv).expect("parse");

        assert_eq!(applicants.len(), 2);
        assert_eq!(
            applicants[0].get(ApplicantField::CreditScore),
            Some(&Value::String("720".to_string()))
        );
        assert_eq!(
            applicants[1].get(ApplicantField::ApplicantId),
            Some(&Value::String("A2".to_string()))
        );
    }

    #[test]
    fn csv_short_rows_yield_null_cells() {
        let csv = format!("{CSV_HEADER}\nA1,720\n");
        let applicants = parse_applicants(&csv, InputFormat::Csv).expect("parse");

        assert!(applicants[0].contains(ApplicantField::AnnualIncome));
        assert_eq!(
            applicants[0].get(ApplicantField::MonthlyDebtPayments),
            Some(&Value::Null)
        );
    }

    #[test]
    fn json_entries_must_be_objects() {
        let json = r#"{"applicants": [{"applicant_id": "A1"}, "A2"]}"#;
        match parse_applicants(json, InputFormat::Json) {
            Err(ParseError::NotAnObject { position }) => assert_eq!(position, 2),
            other => panic!("expected non-object entry error, got {other:?}"),
        }
    }
}
