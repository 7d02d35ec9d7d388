//! Per-artifact upload state.
//!
//! Each slot runs `Idle -> Uploading -> Success | Error`. Starting another
//! upload on the same slot supersedes the running one; only the newest
//! upload may set the final status.

use crate::shared::request_generation::RequestGeneration;
use contracts::usecases::u501_import_csv::ImportArtifact;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success { count: u64 },
    Error { message: String },
}

impl UploadStatus {
    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadStatus::Uploading)
    }

    /// Text shown under the slot, if any
    pub fn message(&self) -> Option<String> {
        match self {
            UploadStatus::Idle | UploadStatus::Uploading => None,
            UploadStatus::Success { count } => {
                Some(format!("Sucesso! {} registros processados.", count))
            }
            UploadStatus::Error { message } => Some(message.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadSlot {
    pub artifact: ImportArtifact,
    pub status: UploadStatus,
    /// Name of the file of the latest upload
    pub file_name: Option<String>,
    generation: RequestGeneration,
}

impl UploadSlot {
    pub fn new(artifact: ImportArtifact) -> Self {
        Self {
            artifact,
            status: UploadStatus::Idle,
            file_name: None,
            generation: RequestGeneration::default(),
        }
    }

    /// Starts an upload and returns its token
    pub fn begin(&mut self, file_name: String) -> u64 {
        self.status = UploadStatus::Uploading;
        self.file_name = Some(file_name);
        self.generation.next()
    }

    /// Applies the outcome of upload `token`. Superseded or reset uploads are
    /// ignored and `false` is returned.
    pub fn finish(&mut self, token: u64, result: Result<u64, String>) -> bool {
        if !self.generation.is_current(token) || !self.status.is_uploading() {
            return false;
        }
        self.status = match result {
            Ok(count) => UploadStatus::Success { count },
            Err(message) => UploadStatus::Error { message },
        };
        true
    }

    /// Back to `Idle`; a response still in flight is discarded.
    pub fn reset(&mut self) {
        self.generation.invalidate();
        self.status = UploadStatus::Idle;
        self.file_name = None;
    }
}

/// The three import slots, in recommended order
#[derive(Debug, Clone)]
pub struct ImportState {
    pub slots: Vec<UploadSlot>,
}

impl Default for ImportState {
    fn default() -> Self {
        Self {
            slots: ImportArtifact::ALL.iter().map(|a| UploadSlot::new(*a)).collect(),
        }
    }
}

impl ImportState {
    pub fn slot(&self, artifact: ImportArtifact) -> Option<&UploadSlot> {
        self.slots.iter().find(|s| s.artifact == artifact)
    }

    pub fn slot_mut(&mut self, artifact: ImportArtifact) -> Option<&mut UploadSlot> {
        self.slots.iter_mut().find(|s| s.artifact == artifact)
    }

    pub fn status(&self, artifact: ImportArtifact) -> UploadStatus {
        self.slot(artifact)
            .map(|s| s.status.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_flow() {
        let mut slot = UploadSlot::new(ImportArtifact::Categories);
        assert_eq!(slot.status, UploadStatus::Idle);
        let token = slot.begin("categories.csv".to_string());
        assert!(slot.status.is_uploading());
        assert!(slot.finish(token, Ok(5)));
        assert_eq!(slot.status, UploadStatus::Success { count: 5 });
        assert_eq!(
            slot.status.message().as_deref(),
            Some("Sucesso! 5 registros processados.")
        );
    }

    #[test]
    fn test_retry_after_error() {
        let mut slot = UploadSlot::new(ImportArtifact::Products);
        let t1 = slot.begin("products.csv".to_string());
        slot.finish(t1, Err("Erro no upload".to_string()));
        assert_eq!(slot.status.message().as_deref(), Some("Erro no upload"));

        let t2 = slot.begin("products.csv".to_string());
        assert!(slot.status.is_uploading());
        assert!(slot.finish(t2, Ok(12)));
        assert_eq!(slot.status, UploadStatus::Success { count: 12 });
    }

    #[test]
    fn test_superseded_upload_is_ignored() {
        let mut slot = UploadSlot::new(ImportArtifact::Sales);
        let first = slot.begin("old.csv".to_string());
        let second = slot.begin("sales.csv".to_string());

        // the first answer arrives late, after the second started
        assert!(!slot.finish(first, Ok(100)));
        assert!(slot.status.is_uploading());

        assert!(slot.finish(second, Err("Produto não encontrado".to_string())));
        assert!(!slot.finish(first, Ok(100)));
        assert_eq!(
            slot.status,
            UploadStatus::Error {
                message: "Produto não encontrado".to_string()
            }
        );
    }

    #[test]
    fn test_reset_discards_in_flight() {
        let mut slot = UploadSlot::new(ImportArtifact::Categories);
        let token = slot.begin("categories.csv".to_string());
        slot.reset();
        assert!(!slot.finish(token, Ok(3)));
        assert_eq!(slot.status, UploadStatus::Idle);
        assert_eq!(slot.file_name, None);
    }

    #[test]
    fn test_slots_are_independent() {
        let mut state = ImportState::default();
        assert_eq!(state.slots.len(), 3);
        assert_eq!(state.slots[0].artifact, ImportArtifact::Categories);
        assert_eq!(state.slots[2].artifact, ImportArtifact::Sales);

        let cat = state.slot_mut(ImportArtifact::Categories).unwrap().begin("c.csv".into());
        let prod = state.slot_mut(ImportArtifact::Products).unwrap().begin("p.csv".into());

        state
            .slot_mut(ImportArtifact::Products)
            .unwrap()
            .finish(prod, Err("Categoria inexistente".into()));
        assert!(state.status(ImportArtifact::Categories).is_uploading());

        state.slot_mut(ImportArtifact::Categories).unwrap().finish(cat, Ok(4));
        assert_eq!(state.status(ImportArtifact::Categories), UploadStatus::Success { count: 4 });
        assert!(matches!(
            state.status(ImportArtifact::Products),
            UploadStatus::Error { .. }
        ));
        assert_eq!(state.status(ImportArtifact::Sales), UploadStatus::Idle);
    }
}
