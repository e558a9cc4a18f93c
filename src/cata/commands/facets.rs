use crate::commands::CmdResult;
use crate::error::Result;
use crate::journal::Journal;
use crate::store::BlobStore;
use crate::view;

pub fn run<S: BlobStore>(journal: &Journal<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_facets(view::facets(journal.coffees())))
}
