//! Detail-dialog payloads. Dialogs are populated from movies the catalogue
//! has already fetched; opening one never issues a network call.

use animeflix_core::models::{Director, Movie};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetailsDialog {
    pub title: String,
    pub release_year: Option<String>,
    pub description: Option<String>,
}

impl From<&Movie> for MovieDetailsDialog {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            release_year: movie.release_year.clone(),
            description: movie.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectorsDialog {
    pub directors: Vec<Director>,
}

impl From<&Movie> for DirectorsDialog {
    fn from(movie: &Movie) -> Self {
        Self {
            directors: movie.director.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreDialog {
    pub name: String,
    pub description: Option<String>,
}

impl From<&Movie> for GenreDialog {
    fn from(movie: &Movie) -> Self {
        let genre = movie.genre.as_ref();
        Self {
            name: genre.map(|g| g.name.clone()).unwrap_or_default(),
            description: genre.and_then(|g| g.description.clone()),
        }
    }
}
