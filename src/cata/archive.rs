//! The fixed 2021 tasting archive, importable once into the journal.
//!
//! These entries predate the journal itself; ids, dates, and fallback
//! image URLs are synthesized deterministically at import time so the
//! operation is repeat-safe (see `Journal::import_archive`).

/// One historical entry: everything a record carries except the fields
/// the import synthesizes (id, date, favorite flag).
pub struct ArchiveEntry {
    pub name: &'static str,
    pub origin: &'static str,
    pub roaster: &'static str,
    pub year: i32,
    pub rating: f32,
    pub notes: &'static str,
    pub recipe: Option<&'static str>,
    pub image_url: Option<&'static str>,
}

/// Deterministic placeholder image for entries that ship without one.
pub fn placeholder_image(index: usize) -> String {
    format!(
        "https://source.unsplash.com/featured/?specialty-coffee,roastery&sig={}",
        index
    )
}

pub const ARCHIVE_2021: &[ArchiveEntry] = &[
    ArchiveEntry {
        name: "Geisha Lote Especial",
        origin: "Panama",
        roaster: "Cafe Unido",
        year: 2021,
        rating: 5.0,
        notes: "Jasmine, papaya, very silky body. Long floral finish.",
        recipe: Some("V60, 15g : 250g, 92C, 2:45 total."),
        image_url: None,
    },
    ArchiveEntry {
        name: "Yirgacheffe Chelbesa",
        origin: "Ethiopia",
        roaster: "Nomad Coffee",
        year: 2021,
        rating: 4.5,
        notes: "Bergamot, peach, black tea. Washed, very clean cup.",
        recipe: None,
        image_url: None,
    },
    ArchiveEntry {
        name: "Pink Bourbon",
        origin: "Colombia",
        roaster: "El Vergel Estates",
        year: 2021,
        rating: 4.5,
        notes: "Raspberry, panela, hibiscus acidity.",
        recipe: Some("Aeropress inverted, 13g : 200g, 1:45."),
        image_url: None,
    },
    ArchiveEntry {
        name: "Sidra Natural",
        origin: "Ecuador",
        roaster: "La Palma y El Tucan",
        year: 2021,
        rating: 4.0,
        notes: "Tropical, winey, mango skin. A touch fermented.",
        recipe: None,
        image_url: None,
    },
    ArchiveEntry {
        name: "Kiamabara AA",
        origin: "Kenya",
        roaster: "Right Side Coffee",
        year: 2021,
        rating: 4.5,
        notes: "Blackcurrant, tomato-stem brightness, juicy.",
        recipe: None,
        image_url: None,
    },
    ArchiveEntry {
        name: "Santa Barbara Pacas",
        origin: "Honduras",
        roaster: "Hola Coffee",
        year: 2021,
        rating: 3.5,
        notes: "Milk chocolate, red apple, round and sweet.",
        recipe: Some("Moka pot, medium-fine, gentle heat."),
        image_url: None,
    },
    ArchiveEntry {
        name: "Mokka Haru Suke",
        origin: "Ethiopia",
        roaster: "Puchero",
        year: 2021,
        rating: 4.0,
        notes: "Blueberry, cacao nib, dense natural sweetness.",
        recipe: None,
        image_url: None,
    },
    ArchiveEntry {
        name: "Cerrado Mineiro",
        origin: "Brazil",
        roaster: "Kima Coffee",
        year: 2021,
        rating: 3.0,
        notes: "Hazelnut, caramel, low acidity. Everyday espresso.",
        recipe: Some("Espresso, 18g in : 40g out, 27s."),
        image_url: None,
    },
];
