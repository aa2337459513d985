//! Gallery card view model
//!
//! Everything the card shows is decided here, so the rendering layer
//! stays a dumb template and the display rules are testable natively.

use crate::config::ApiConfig;
use crate::format::{display_name, format_date, format_weight};
use crate::record::MineralRecord;

/// What one gallery card displays.
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    /// Thumbnail URL. `None` renders an empty placeholder element,
    /// never a broken image reference.
    pub image_url: Option<String>,
    pub name: String,
    /// Size line, only when the field is non-empty.
    pub size: Option<String>,
    /// Formatted weight line, only when the field is present.
    pub weight: Option<String>,
    /// Always shown, `"N/A"` when absent.
    pub date: String,
    /// Notes block, only when the field is non-empty.
    pub notes: Option<String>,
}

impl CardModel {
    pub fn from_record(record: &MineralRecord, config: &ApiConfig) -> Self {
        Self {
            image_url: record
                .foto
                .as_deref()
                .filter(|id| !id.is_empty())
                .map(|id| config.asset_url(id)),
            name: display_name(&record.nome).to_string(),
            size: non_empty(record.dimensioni.as_deref()),
            weight: record.peso.map(format_weight),
            date: format_date(record.data_acquisizione.as_deref()),
            notes: non_empty(record.note.as_deref()),
        }
    }
}

fn non_empty(field: Option<&str>) -> Option<String> {
    field
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new("http://example.test/cms", "minerals")
    }

    #[test]
    fn test_full_record() {
        let record = MineralRecord {
            nome: "Quarzo rosa".to_string(),
            dimensioni: Some("5x3 cm".to_string()),
            peso: Some(3.456),
            data_acquisizione: Some("2023-06-14".to_string()),
            note: Some("Regalo di nonna".to_string()),
            foto: Some("f0e1".to_string()),
        };

        let card = CardModel::from_record(&record, &config());
        assert_eq!(
            card.image_url.as_deref(),
            Some("http://example.test/cms/assets/f0e1?width=400&height=300&fit=cover")
        );
        assert_eq!(card.name, "Quarzo rosa");
        assert_eq!(card.size.as_deref(), Some("5x3 cm"));
        assert_eq!(card.weight.as_deref(), Some("3.46g"));
        assert_eq!(card.date, "14/6/2023");
        assert_eq!(card.notes.as_deref(), Some("Regalo di nonna"));
    }

    #[test]
    fn test_record_without_photo_has_no_image_url() {
        let record = MineralRecord::default();
        let card = CardModel::from_record(&record, &config());
        assert_eq!(card.image_url, None);
    }

    #[test]
    fn test_empty_photo_id_counts_as_missing() {
        let record = MineralRecord {
            foto: Some(String::new()),
            ..Default::default()
        };
        let card = CardModel::from_record(&record, &config());
        assert_eq!(card.image_url, None);
    }

    #[test]
    fn test_bare_record_falls_back_everywhere() {
        let record = MineralRecord::default();
        let card = CardModel::from_record(&record, &config());
        assert_eq!(card.name, "Senza nome");
        assert_eq!(card.size, None);
        assert_eq!(card.weight, None);
        assert_eq!(card.date, "N/A");
        assert_eq!(card.notes, None);
    }

    #[test]
    fn test_zero_weight_is_still_shown() {
        let record = MineralRecord {
            peso: Some(0.0),
            ..Default::default()
        };
        let card = CardModel::from_record(&record, &config());
        assert_eq!(card.weight.as_deref(), Some("0.00g"));
    }

    #[test]
    fn test_blank_optional_text_is_dropped() {
        let record = MineralRecord {
            dimensioni: Some("   ".to_string()),
            note: Some(String::new()),
            ..Default::default()
        };
        let card = CardModel::from_record(&record, &config());
        assert_eq!(card.size, None);
        assert_eq!(card.notes, None);
    }
}
