use registrar_db::{LecturerStore, RecordStore, StoreError};
use tracing::{info, instrument};

/// Result of a lecturer delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// No document had that id. Treated like a delete by the page.
    NotFound,
    /// At least one module still names the lecturer; nothing was removed.
    HasModules,
}

pub struct LecturerService;

impl LecturerService {
    /// Deletes the lecturer unless a module references it.
    ///
    /// The check and the delete are separate calls to separate stores, so a
    /// module added in between is not seen.
    #[instrument(skip(records, lecturers))]
    pub async fn delete_lecturer(
        records: &dyn RecordStore,
        lecturers: &dyn LecturerStore,
        lecturer_id: &str,
    ) -> Result<DeleteOutcome, StoreError> {
        if records.lecturer_has_modules(lecturer_id).await? {
            info!(lecturer_id, "Lecturer still has modules");
            return Ok(DeleteOutcome::HasModules);
        }

        let outcome = if lecturers.delete_lecturer(lecturer_id).await? {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NotFound
        };

        Ok(outcome)
    }
}
