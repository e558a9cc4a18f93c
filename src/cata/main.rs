use cata::api::{CataApi, ConfigAction};
use cata::clipboard::copy_to_clipboard;
use cata::commands::share::whatsapp_url;
use cata::config::CataConfig;
use cata::error::{CataError, Result};
use cata::insights::{GeminiInsights, InsightProvider, NoInsights};
use cata::model::CoffeeDraft;
use cata::store::fs::FileStore;
use cata::view::Filters;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
mod print;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api()?;

    if let Some(warning) = api.load_warning() {
        print::print_warning(warning);
    }

    match cli.command {
        Some(Commands::Add {
            name,
            origin,
            roaster,
            year,
            rating,
            notes,
            recipe,
            image_url,
        }) => {
            let draft = CoffeeDraft {
                name,
                origin,
                roaster,
                year,
                rating,
                notes,
                recipe,
                image_url,
            };
            let result = api.create(draft)?;
            print::print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::List {
            search,
            origin,
            roaster,
            year,
            sort,
        }) => {
            let filters = Filters {
                search,
                origin,
                roaster,
                year,
            };
            let result = api.list(&filters, sort.into())?;
            print::print_coffees(&result.listed);
            print::print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Show { id }) => {
            let result = api.show(&id)?;
            if let Some(coffee) = result.affected.first() {
                print::print_full(coffee);
            }
            Ok(())
        }
        Some(Commands::Edit {
            id,
            name,
            origin,
            roaster,
            year,
            rating,
            notes,
            recipe,
            image_url,
        }) => {
            // Prefill from the existing record; flags override field by
            // field, then the whole draft replaces the record.
            let existing = api
                .find(&id)
                .ok_or_else(|| CataError::NotFound(id.clone()))?;
            let mut draft = CoffeeDraft::from(existing);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(origin) = origin {
                draft.origin = origin;
            }
            if let Some(roaster) = roaster {
                draft.roaster = roaster;
            }
            if let Some(year) = year {
                draft.year = year;
            }
            if let Some(rating) = rating {
                draft.rating = rating;
            }
            if let Some(notes) = notes {
                draft.notes = notes;
            }
            if let Some(recipe) = recipe {
                draft.recipe = Some(recipe);
            }
            if let Some(image_url) = image_url {
                draft.image_url = Some(image_url);
            }

            let result = api.update(&id, draft)?;
            print::print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Fav { id }) => {
            let result = api.toggle_favorite(&id)?;
            print::print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let result = api.delete(&id)?;
            print::print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Import) => {
            let result = api.import_archive()?;
            print::print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Share { id, copy, whatsapp }) => {
            let result = api.share(&id)?;
            let text = result.text.unwrap_or_default();
            if whatsapp {
                println!("{}", whatsapp_url(&text)?);
            } else if copy {
                copy_to_clipboard(&text)?;
                println!("Copied to clipboard.");
            } else {
                println!("{}", text);
            }
            Ok(())
        }
        Some(Commands::Facets) => {
            let result = api.facets()?;
            if let Some(facets) = &result.facets {
                print::print_facets(facets);
            }
            Ok(())
        }
        Some(Commands::Config { key, value }) => {
            let action = match (key, value) {
                (Some(key), Some(value)) => ConfigAction::Set(key, value),
                (Some(key), None) => ConfigAction::Get(key),
                (None, _) => ConfigAction::Show,
            };
            let result = api.config(action)?;
            print::print_messages(&result.messages);
            if result.messages.is_empty() {
                if let Some(config) = &result.config {
                    println!("insights-model: {}", config.insights_model);
                }
            }
            Ok(())
        }
        None => {
            let result = api.list(&Filters::default(), Default::default())?;
            print::print_coffees(&result.listed);
            Ok(())
        }
    }
}

fn init_api() -> Result<CataApi<FileStore>> {
    let data_dir = data_dir()?;
    let config = CataConfig::load(&data_dir).unwrap_or_default();

    let insights: Box<dyn InsightProvider> =
        match GeminiInsights::from_env(&config.insights_model) {
            Some(provider) => Box::new(provider),
            None => Box::new(NoInsights),
        };

    let store = FileStore::new(data_dir.clone());
    Ok(CataApi::new(store, insights, data_dir))
}

fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("CATA_DATA_DIR") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let proj_dirs = ProjectDirs::from("com", "cata", "cata")
        .ok_or_else(|| CataError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
