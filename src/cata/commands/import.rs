use crate::archive::ARCHIVE_2021;
use crate::commands::helpers::drain_persist_warnings;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::Journal;
use crate::store::BlobStore;

pub fn run<S: BlobStore>(journal: &mut Journal<S>) -> Result<CmdResult> {
    let imported = journal.import_archive(ARCHIVE_2021)?;

    let mut result = CmdResult::default();
    if imported == 0 {
        result.add_message(CmdMessage::info(
            "2021 archive already imported, nothing to do.",
        ));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Imported {} records from the 2021 archive.",
            imported
        )));
    }
    drain_persist_warnings(journal, &mut result);
    Ok(result)
}
