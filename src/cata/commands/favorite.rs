use crate::commands::helpers::drain_persist_warnings;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CataError, Result};
use crate::journal::Journal;
use crate::store::BlobStore;

pub fn run<S: BlobStore>(journal: &mut Journal<S>, needle: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    // Favorite-toggling an unknown record is a silent no-op in the
    // journal; at the CLI we still tell the user nothing matched.
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

    if let Some(coffee) = journal.toggle_favorite(&id) {
        let verb = if coffee.is_favorite {
            "Favorited"
        } else {
            "Unfavorited"
        };
        result.add_message(CmdMessage::success(format!("{}: {}", verb, coffee.name)));
        result.affected.push(coffee);
    }
    drain_persist_warnings(journal, &mut result);
    Ok(result)
}
