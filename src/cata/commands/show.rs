use crate::commands::CmdResult;
use crate::error::Result;
use crate::journal::Journal;
use crate::store::BlobStore;

pub fn run<S: BlobStore>(journal: &Journal<S>, needle: &str) -> Result<CmdResult> {
    let id = journal.resolve_id(needle)?;
    // resolve_id only returns ids that exist.
    let coffee = journal.get(&id).cloned();
    Ok(CmdResult::default().with_affected(coffee.into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CataError;
    use crate::insights::NoInsights;
    use crate::store::memory::fixtures::draft;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn shows_one_record() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let created = journal
            .create(draft("Sidra", "Colombia", "El Vergel"), &NoInsights)
            .unwrap();
        let result = run(&journal, &created.id).unwrap();
        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].id, created.id);
    }

    #[test]
    fn unknown_record_is_not_found() {
        let journal = Journal::initialize(InMemoryStore::new());
        assert!(matches!(
            run(&journal, "missing"),
            Err(CataError::NotFound(_))
        ));
    }
}
