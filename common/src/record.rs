//! Record model and wire envelopes
//!
//! Field names mirror the backend collection schema, which is the sole
//! owner of the data. `Peso` may come back as a JSON number or as a
//! decimal string depending on the backend's column type, so it gets a
//! tolerant deserializer.

use serde::{Deserialize, Deserializer, Serialize};

/// One item of the collection, as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MineralRecord {
    #[serde(rename = "Nome")]
    pub nome: String,
    #[serde(rename = "Dimensioni")]
    pub dimensioni: Option<String>,
    #[serde(rename = "Peso", deserialize_with = "peso_from_any")]
    pub peso: Option<f64>,
    #[serde(rename = "Data_acquisizione")]
    pub data_acquisizione: Option<String>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "Foto")]
    pub foto: Option<String>,
}

/// Create payload. Optional fields serialize as explicit `null`
/// rather than being omitted, matching what the backend expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewMineral {
    #[serde(rename = "Nome")]
    pub nome: String,
    #[serde(rename = "Dimensioni")]
    pub dimensioni: Option<String>,
    #[serde(rename = "Peso")]
    pub peso: Option<f64>,
    #[serde(rename = "Data_acquisizione")]
    pub data_acquisizione: Option<String>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "Foto")]
    pub foto: Option<String>,
}

/// `GET /items/{collection}` envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub data: Vec<MineralRecord>,
}

/// `POST /files` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct FileUploadResponse {
    pub data: UploadedFile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    pub id: String,
}

/// Error envelope for rejected requests
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorEntry {
    #[serde(default)]
    pub message: String,
}

/// Extracts the first structured error message from a rejected
/// response body, if the body parses and carries one.
pub fn backend_error_message(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .errors
        .into_iter()
        .map(|entry| entry.message)
        .find(|message| !message.is_empty())
}

// Accepts number, decimal string, null, or a missing field.
fn peso_from_any<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
