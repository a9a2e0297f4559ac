//! The fixed match category catalog.
//!
//! Categories are a closed list owned by the app, not by the store. An
//! appointment references one by id, or carries an empty id for "no
//! category".

/// A match category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

const CATEGORIES: &[Category] = &[
    Category { id: "1", name: "Ranqueada", icon: "ranked" },
    Category { id: "2", name: "Duelo 1x1", icon: "duel" },
    Category { id: "3", name: "Diversão", icon: "fun" },
    Category { id: "4", name: "Treino", icon: "training" },
];

impl Category {
    /// The full catalog, in display order.
    pub fn all() -> &'static [Category] {
        CATEGORIES
    }

    /// Look up a category by id.
    pub fn find(id: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.id == id)
    }
}
