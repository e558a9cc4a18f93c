use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::Journal;
use crate::store::BlobStore;
use crate::view::{self, Filters, SortOrder};

pub fn run<S: BlobStore>(
    journal: &Journal<S>,
    filters: &Filters,
    sort: SortOrder,
) -> Result<CmdResult> {
    let listed: Vec<_> = view::project(journal.coffees(), filters, sort)
        .into_iter()
        .cloned()
        .collect();
    // Facets always come from the full collection so the filter options
    // never shrink under an active filter.
    let facets = view::facets(journal.coffees());

    let mut result = CmdResult::default().with_listed(listed).with_facets(facets);
    if filters.is_active() {
        result.add_message(CmdMessage::info(format!(
            "{} of {} records match the active filters.",
            result.listed.len(),
            journal.len()
        )));
    }
    Ok(result)
}
