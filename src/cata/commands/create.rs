use crate::commands::helpers::drain_persist_warnings;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::insights::InsightProvider;
use crate::journal::Journal;
use crate::model::CoffeeDraft;
use crate::store::BlobStore;

pub fn run<S: BlobStore>(
    journal: &mut Journal<S>,
    draft: CoffeeDraft,
    insights: &dyn InsightProvider,
) -> Result<CmdResult> {
    let coffee = journal.create(draft, insights)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Logged: {} ({})",
        coffee.name, coffee.origin
    )));
    if coffee.ai_insights.is_none() {
        result.add_message(CmdMessage::info("No tasting insight available."));
    }
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
    fn reports_the_created_record() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let result = run(
            &mut journal,
            draft("Sidra", "Colombia", "El Vergel"),
            &NoInsights,
        )
        .unwrap();
        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].name, "Sidra");
    }

    #[test]
    fn save_failure_surfaces_as_a_warning_message() {
        use crate::commands::MessageLevel;
        use crate::store::memory::fixtures::FailingStore;

        let mut journal = Journal::initialize(FailingStore::new());
        let result = run(
            &mut journal,
            draft("Sidra", "Colombia", "El Vergel"),
            &NoInsights,
        )
        .unwrap();

        assert_eq!(result.affected.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning)
                && m.content.contains("Failed to save journal")));
    }

    #[test]
    fn validation_failure_propagates() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let mut bad = draft("Sidra", "Colombia", "El Vergel");
        bad.origin = String::new();
        assert!(matches!(
            run(&mut journal, bad, &NoInsights),
            Err(CataError::Validation(_))
        ));
    }
}
