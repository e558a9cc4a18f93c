use crate::commands::CmdResult;
use crate::error::{CataError, Result};
use crate::journal::Journal;
use crate::model::Coffee;
use crate::store::BlobStore;
use url::Url;

pub fn run<S: BlobStore>(journal: &Journal<S>, needle: &str) -> Result<CmdResult> {
    let id = journal.resolve_id(needle)?;
    let coffee = journal
        .get(&id)
        .ok_or_else(|| CataError::NotFound(id.clone()))?;
    Ok(CmdResult::default()
        .with_affected(vec![coffee.clone()])
        .with_text(share_text(coffee)))
}

/// The plain-text card used by every sharing channel.
pub fn share_text(coffee: &Coffee) -> String {
    let recipe = coffee
        .recipe
        .as_deref()
        .map(|r| format!("\n\n📖 Brew recipe:\n{}", r))
        .unwrap_or_default();
    format!(
        "☕ {}\n📍 Origin: {}\n🏢 Roaster: {}\n⭐️ Rating: {}/5\n\n📝 Tasting notes:\n{}{}\n\nLogged with cata.",
        coffee.name, coffee.origin, coffee.roaster, coffee.rating, coffee.notes, recipe
    )
}

/// WhatsApp deep link carrying the share text.
pub fn whatsapp_url(text: &str) -> Result<String> {
    let url = Url::parse_with_params("https://wa.me/", &[("text", text)])
        .map_err(|e| CataError::Api(format!("Failed to build share link: {}", e)))?;
    Ok(url.to_string())
}
