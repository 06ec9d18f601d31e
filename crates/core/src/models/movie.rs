use serde::{Deserialize, Serialize};

/// Catalogue entry as the animeFlix API returns it. Field names on the wire
/// are PascalCase; most fields are optional because older records in the
/// catalogue are sparsely populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub genre: Option<Genre>,

    #[serde(default)]
    pub director: Vec<Director>,

    #[serde(default)]
    pub image_path: Option<String>,

    #[serde(default)]
    pub release_year: Option<String>,

    #[serde(default)]
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Genre {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Director {
    pub name: String,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub birth: Option<String>,
}
