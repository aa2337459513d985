//! Submission state machine and flow
//!
//! One submission walks `Idle → Submitting → {Success, Failed}`. The
//! flow itself is generic over [`CatalogBackend`] so it runs unchanged
//! against the live REST client and against test doubles.

use crate::error::Result;
use crate::format::{none_if_empty, parse_weight};
use crate::record::NewMineral;

/// UI state of one submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(String),
}

impl SubmitState {
    /// The submit control stays disabled from the moment a submission
    /// starts until the post-success redirect fires. This is the only
    /// interlock against overlapping submissions.
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitState::Submitting | SubmitState::Success)
    }

    /// The saving label sticks through `Success`: the control stays
    /// disabled until the redirect, so its label must not revert early.
    pub fn button_label(&self) -> &'static str {
        match self {
            SubmitState::Submitting | SubmitState::Success => "Salvataggio...",
            _ => "Salva Minerale",
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitState::Failed(detail) => Some(detail),
            _ => None,
        }
    }
}

/// Raw text values of the add-item form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MineralForm {
    pub nome: String,
    pub dimensioni: String,
    pub peso: String,
    pub data_acquisizione: String,
    pub note: String,
}

impl MineralForm {
    /// Applies the form coercions: empty optional fields become
    /// `null`, the weight parses to a number or `null`.
    pub fn into_payload(self, foto: Option<String>) -> NewMineral {
        NewMineral {
            nome: self.nome,
            dimensioni: none_if_empty(&self.dimensioni),
            peso: parse_weight(&self.peso),
            data_acquisizione: none_if_empty(&self.data_acquisizione),
            note: none_if_empty(&self.note),
            foto,
        }
    }
}

/// The two backend calls a submission may issue.
#[allow(async_fn_in_trait)]
pub trait CatalogBackend {
    /// Platform handle for a selected photo (a browser `File` in the
    /// web front end, anything convenient in tests).
    type Photo;

    /// Uploads the photo and returns the file id the backend assigned.
    async fn upload_photo(&self, photo: &Self::Photo) -> Result<String>;

    /// Creates one item in the collection.
    async fn create_mineral(&self, payload: &NewMineral) -> Result<()>;
}

/// Runs one submission.
///
/// If a photo was selected it is uploaded first and its assigned id
/// goes into the create payload; an upload failure aborts the whole
/// submission before any create call is issued. Without a photo no
/// upload call happens and `Foto` is sent as `null`.
pub async fn submit_mineral<B: CatalogBackend>(
    backend: &B,
    form: MineralForm,
    photo: Option<B::Photo>,
) -> Result<()> {
    let foto = match &photo {
        Some(file) => Some(backend.upload_photo(file).await?),
        None => None,
    };
    backend.create_mineral(&form.into_payload(foto)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_label_per_state() {
        assert_eq!(SubmitState::Idle.button_label(), "Salva Minerale");
        assert_eq!(SubmitState::Submitting.button_label(), "Salvataggio...");
        assert_eq!(
            SubmitState::Failed("x".to_string()).button_label(),
            "Salva Minerale"
        );
    }

    #[test]
    fn test_button_label_keeps_saving_text_until_redirect() {
        assert_eq!(SubmitState::Success.button_label(), "Salvataggio...");
        assert!(SubmitState::Success.is_busy());
    }

    #[test]
    fn test_busy_states() {
        assert!(!SubmitState::Idle.is_busy());
        assert!(SubmitState::Submitting.is_busy());
        assert!(SubmitState::Success.is_busy());
        assert!(!SubmitState::Failed("x".to_string()).is_busy());
    }

    #[test]
    fn test_error_only_on_failed() {
        assert_eq!(SubmitState::Idle.error(), None);
        assert_eq!(SubmitState::Failed("dettaglio".to_string()).error(), Some("dettaglio"));
    }

    #[test]
    fn test_into_payload_coercions() {
        let form = MineralForm {
            nome: "Quarzo".to_string(),
            dimensioni: "  ".to_string(),
            peso: "3.456".to_string(),
            data_acquisizione: String::new(),
            note: "bel pezzo".to_string(),
        };
        let payload = form.into_payload(None);
        assert_eq!(payload.nome, "Quarzo");
        assert_eq!(payload.dimensioni, None);
        assert_eq!(payload.peso, Some(3.456));
        assert_eq!(payload.data_acquisizione, None);
        assert_eq!(payload.note, Some("bel pezzo".to_string()));
        assert_eq!(payload.foto, None);
    }

    #[test]
    fn test_into_payload_non_numeric_weight_becomes_null() {
        let form = MineralForm {
            peso: "tanto".to_string(),
            ..Default::default()
        };
        assert_eq!(form.into_payload(None).peso, None);
    }

    #[test]
    fn test_into_payload_carries_foto_id() {
        let form = MineralForm::default();
        let payload = form.into_payload(Some("file-1".to_string()));
        assert_eq!(payload.foto, Some("file-1".to_string()));
    }
}
