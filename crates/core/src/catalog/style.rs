use serde::{Deserialize, Serialize};

use crate::Gender;

/// A garment style the tailor can render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub id: String,
    pub name: String,
    pub gender: Gender,
}

impl Style {
    /// Creates a style.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gender,
        }
    }
}

const STYLES: [(&str, &str, Gender); 4] = [
    ("agbada", "Agbada / Babanriga", Gender::Male),
    ("kaftan-male", "Kaftan", Gender::Male),
    ("iro-buba", "Iro and Buba", Gender::Female),
    ("gown-female", "Gown", Gender::Female),
];

/// Returns every built-in style.
#[must_use]
pub fn styles() -> Vec<Style> {
    STYLES
        .iter()
        .map(|&(id, name, gender)| Style::new(id, name, gender))
        .collect()
}

/// Returns the built-in styles cut for `gender`.
#[must_use]
pub fn styles_for(gender: Gender) -> Vec<Style> {
    styles().into_iter().filter(|s| s.gender == gender).collect()
}

/// Looks up a built-in style by id.
#[must_use]
pub fn find_style(id: &str) -> Option<Style> {
    styles().into_iter().find(|s| s.id == id)
}
