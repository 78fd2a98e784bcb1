//! Google Sheets backend.
//!
//! Talks to the Sheets REST API (v4) with a blocking HTTP client:
//!
//! | Operation    | Request                                                        |
//! |--------------|----------------------------------------------------------------|
//! | read rows    | `GET  spreadsheets/{id}/values/'{worksheet}'`                  |
//! | append row   | `POST spreadsheets/{id}/values/'{worksheet}'!A1:append`        |
//! | delete row   | `POST spreadsheets/{id}:batchUpdate` (`deleteDimension`)       |
//! | sheet lookup | `GET  spreadsheets/{id}?fields=sheets.properties`              |
//!
//! Reads ask for unformatted values so numbers arrive as JSON numbers
//! regardless of the cell's display format; dates still arrive as their
//! formatted string. Appends use `RAW` input so text is never re-interpreted.
//! Deleting needs the worksheet's numeric id, which is looked up once and
//! cached for the life of the backend.
//!
//! Authentication is a bearer token supplied by configuration.

use super::backend::{cell_text, SheetBackend};
use crate::config::GarageConfig;
use crate::error::{GarageError, Result};
use crate::store::Cell;
use once_cell::unsync::OnceCell;
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    sheet_id: i64,
    title: String,
}

pub struct SheetsBackend {
    client: Client,
    base_url: Url,
    spreadsheet_id: String,
    worksheet: String,
    access_token: String,
    sheet_id: OnceCell<i64>,
}

impl SheetsBackend {
    pub fn new(
        base_url: &str,
        spreadsheet_id: impl Into<String>,
        worksheet: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GarageError::Config(format!("invalid api_base_url '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GarageError::Config(format!(
                "invalid api_base_url '{}'",
                base_url
            )));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            spreadsheet_id: spreadsheet_id.into(),
            worksheet: worksheet.into(),
            access_token: access_token.into(),
            sheet_id: OnceCell::new(),
        })
    }

    pub fn from_config(config: &GarageConfig) -> Result<Self> {
        let spreadsheet_id = config.spreadsheet_id.clone().ok_or_else(|| {
            GarageError::Config(
                "spreadsheet_id is not set (config file or GARAGE_SPREADSHEET_ID)".to_string(),
            )
        })?;
        let access_token = config.access_token.clone().ok_or_else(|| {
            GarageError::Config(
                "access_token is not set (config file or GARAGE_ACCESS_TOKEN)".to_string(),
            )
        })?;
        Self::new(
            &config.api_base_url,
            spreadsheet_id,
            config.worksheet.clone(),
            access_token,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// A1 range covering the whole worksheet, quoted for names with spaces.
    fn sheet_range(&self) -> String {
        format!("'{}'", self.worksheet.replace('\'', "''"))
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("spreadsheets").extend(segments);
        }
        url
    }

    fn values_url(&self) -> Url {
        self.url(&[&self.spreadsheet_id, "values", &self.sheet_range()])
    }

    fn append_url(&self) -> Url {
        let target = format!("{}!A1:append", self.sheet_range());
        self.url(&[&self.spreadsheet_id, "values", &target])
    }

    fn batch_update_url(&self) -> Url {
        self.url(&[&format!("{}:batchUpdate", self.spreadsheet_id)])
    }

    fn meta_url(&self) -> Url {
        self.url(&[&self.spreadsheet_id])
    }

    fn sheet_id(&self) -> Result<i64> {
        self.sheet_id
            .get_or_try_init(|| {
                debug!(worksheet = %self.worksheet, "looking up worksheet id");
                let response = self
                    .client
                    .get(self.meta_url())
                    .bearer_auth(&self.access_token)
                    .query(&[("fields", "sheets.properties(sheetId,title)")])
                    .send()?;
                let meta: SpreadsheetMeta = check(response)?.json()?;
                find_sheet_id(&meta, &self.worksheet)
            })
            .copied()
    }
}

fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(GarageError::Store(format!(
        "Sheets API returned {}: {}",
        status,
        body.trim()
    )))
}

fn find_sheet_id(meta: &SpreadsheetMeta, worksheet: &str) -> Result<i64> {
    meta.sheets
        .iter()
        .find(|s| s.properties.title == worksheet)
        .map(|s| s.properties.sheet_id)
        .ok_or_else(|| GarageError::Store(format!("Worksheet '{}' not found", worksheet)))
}

/// Body of a `values:append` call holding one row.
fn append_body(cells: &[Cell]) -> Value {
    json!({ "majorDimension": "ROWS", "values": [cells] })
}

/// `batchUpdate` body deleting the 1-based sheet row `row_index`.
/// The API range is 0-based and end-exclusive. Callers ensure `row_index >= 1`.
fn delete_request(sheet_id: i64, row_index: usize) -> Value {
    json!({
        "requests": [{
            "deleteDimension": {
                "range": {
                    "sheetId": sheet_id,
                    "dimension": "ROWS",
                    "startIndex": row_index - 1,
                    "endIndex": row_index,
                }
            }
        }]
    })
}

impl SheetBackend for SheetsBackend {
    fn read_rows(&self) -> Result<Vec<Vec<String>>> {
        let response = self
            .client
            .get(self.values_url())
            .bearer_auth(&self.access_token)
            .query(&[
                ("majorDimension", "ROWS"),
                ("valueRenderOption", "UNFORMATTED_VALUE"),
                ("dateTimeRenderOption", "FORMATTED_STRING"),
            ])
            .send()?;
        let range: ValueRange = check(response)?.json()?;
        Ok(range
            .values
            .iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect())
    }

    fn append_row(&self, cells: &[Cell]) -> Result<()> {
        let response = self
            .client
            .post(self.append_url())
            .bearer_auth(&self.access_token)
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&append_body(cells))
            .send()?;
        check(response)?;
        Ok(())
    }

    fn delete_row(&self, row_index: usize) -> Result<()> {
        if row_index == 0 {
            return Err(GarageError::Store("Row indexes start at 1".to_string()));
        }
        let body = delete_request(self.sheet_id()?, row_index);
        let response = self
            .client
            .post(self.batch_update_url())
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()?;
        check(response)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("sheets:{}/{}", self.spreadsheet_id, self.worksheet)
    }
}
