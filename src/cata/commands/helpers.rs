use crate::commands::{CmdMessage, CmdResult};
use crate::journal::Journal;
use crate::store::BlobStore;

/// Attach any pending persistence warnings to the result. Save failures
/// are non-fatal: the in-memory journal stays authoritative for the rest
/// of the session, the user just gets told.
pub fn drain_persist_warnings<S: BlobStore>(journal: &mut Journal<S>, result: &mut CmdResult) {
    for warning in journal.take_persist_warnings() {
        result.add_message(CmdMessage::warning(warning));
    }
}

/// Short id prefix used when printing records.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
