use crate::commands::helpers::drain_persist_warnings;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::insights::InsightProvider;
use crate::journal::Journal;
use crate::model::CoffeeDraft;
use crate::store::BlobStore;

pub fn run<S: BlobStore>(
    journal: &mut Journal<S>,
    needle: &str,
    draft: CoffeeDraft,
    insights: &dyn InsightProvider,
) -> Result<CmdResult> {
    let id = journal.resolve_id(needle)?;
    let coffee = journal.update(&id, draft, insights)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Updated: {}", coffee.name)));
    drain_persist_warnings(journal, &mut result);
    result.affected.push(coffee);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CataError;
    use crate::insights::NoInsights;
    use crate::store::memory::fixtures::draft;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn updates_via_id_prefix() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let created = journal
            .create(draft("Sidra", "Colombia", "El Vergel"), &NoInsights)
            .unwrap();

        let mut edit = crate::model::CoffeeDraft::from(&created);
        edit.rating = 2.5;
        let prefix = &created.id[..8];
        let result = run(&mut journal, prefix, edit, &NoInsights).unwrap();
        assert_eq!(result.affected[0].rating, 2.5);
    }

    #[test]
    fn unknown_record_is_not_found() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let result = run(
            &mut journal,
            "missing",
            draft("A", "Colombia", "El Vergel"),
            &NoInsights,
        );
        assert!(matches!(result, Err(CataError::NotFound(_))));
    }
}
