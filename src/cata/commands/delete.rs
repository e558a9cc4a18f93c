use crate::commands::helpers::{drain_persist_warnings, short_id};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CataError, Result};
use crate::journal::Journal;
use crate::store::BlobStore;

pub fn run<S: BlobStore>(journal: &mut Journal<S>, needle: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    // Deleting an absent record is a no-op, not a failure.
    let id = match journal.resolve_id(needle) {
        Ok(id) => id,
        Err(CataError::NotFound(_)) => {
            result.add_message(CmdMessage::warning(format!(
                "No record matching '{}'",
                needle
            )));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    if let Some(removed) = journal.delete(&id) {
        result.add_message(CmdMessage::success(format!(
            "Deleted {} ({})",
            removed.name,
            short_id(&removed.id)
        )));
        result.affected.push(removed);
    }
    drain_persist_warnings(journal, &mut result);
    Ok(result)
}
