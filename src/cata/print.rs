use cata::api::{CmdMessage, MessageLevel};
use cata::model::Coffee;
use cata::view::Facets;
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const NAME_COLUMN: usize = 28;
const FAV_MARKER: &str = "♥";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_warning(text: &str) {
    eprintln!("{}", text.yellow());
}

pub fn print_coffees(coffees: &[Coffee]) {
    if coffees.is_empty() {
        println!("No records found.");
        return;
    }

    for coffee in coffees {
        let fav = if coffee.is_favorite {
            FAV_MARKER.red().to_string()
        } else {
            " ".to_string()
        };
        let id = coffee.id.get(..8).unwrap_or(&coffee.id);
        let name = pad_name(&coffee.name);
        println!(
            "{} {} {} {} · {} · {}  {}  {}",
            id.dimmed(),
            fav,
            name.bold(),
            coffee.origin,
            coffee.roaster,
            coffee.year,
            stars(coffee.rating).yellow(),
            format_time_ago(coffee.date).dimmed(),
        );
    }
}

pub fn print_full(coffee: &Coffee) {
    println!(
        "{} {}",
        coffee.name.bold(),
        if coffee.is_favorite {
            FAV_MARKER.red().to_string()
        } else {
            String::new()
        }
    );
    println!("--------------------------------");
    println!("Id:      {}", coffee.id.dimmed());
    println!("Origin:  {}", coffee.origin);
    println!("Roaster: {}", coffee.roaster);
    println!("Year:    {}", coffee.year);
    println!("Rating:  {} ({})", stars(coffee.rating).yellow(), coffee.rating);
    println!("Logged:  {}", coffee.date.format("%Y-%m-%d"));
    println!("\nNotes:\n{}", coffee.notes);
    if let Some(recipe) = &coffee.recipe {
        println!("\nRecipe:\n{}", recipe);
    }
    if let Some(insight) = &coffee.ai_insights {
        println!("\n{}\n{}", "Tasting insight:".italic(), insight.italic());
    }
    if let Some(url) = &coffee.image_url {
        println!("\nImage: {}", url.dimmed());
    }
}

pub fn print_facets(facets: &Facets) {
    println!("{}", "Origins:".bold());
    for origin in &facets.origins {
        println!("  {}", origin);
    }
    println!("{}", "Roasters:".bold());
    for roaster in &facets.roasters {
        println!("  {}", roaster);
    }
    println!("{}", "Years:".bold());
    for year in &facets.years {
        println!("  {}", year);
    }
}

fn stars(rating: f32) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn pad_name(name: &str) -> String {
    let width = name.width();
    if width >= NAME_COLUMN {
        name.to_string()
    } else {
        format!("{}{}", name, " ".repeat(NAME_COLUMN - width))
    }
}

fn format_time_ago(date: DateTime<Utc>) -> String {
    let now = Utc::now();
    if date > now {
        return "just now".to_string();
    }
    let duration = (now - date).to_std().unwrap_or_default();
    Formatter::new().convert(duration)
}
