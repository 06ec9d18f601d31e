//! Test fixtures shared by the client and view-controller tests.

pub mod fixtures {
    use serde_json::{Value, json};

    use crate::models::{Director, Genre, Movie};
    use crate::session::Session;

    pub fn session() -> Session {
        Session::new("alice", "abc")
    }

    pub fn movie(id: &str, title: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            description: Some(format!("About {title}")),
            genre: Some(Genre {
                name: "Animation".to_string(),
                description: Some("Drawn worlds".to_string()),
            }),
            director: vec![Director {
                name: "Satoshi Kon".to_string(),
                bio: Some("Director and animator".to_string()),
                birth: Some("1963".to_string()),
            }],
            image_path: None,
            release_year: Some("2006".to_string()),
            featured: Some(false),
        }
    }

    /// The same movie as the service would serialize it.
    pub fn movie_json(id: &str, title: &str) -> Value {
        json!({
            "_id": id,
            "Title": title,
            "Description": format!("About {title}"),
            "Genre": { "Name": "Animation", "Description": "Drawn worlds" },
            "Director": [
                { "Name": "Satoshi Kon", "Bio": "Director and animator", "Birth": "1963" }
            ],
            "ReleaseYear": "2006",
            "Featured": false
        })
    }

    pub fn user_json(username: &str, favourites: &[&str]) -> Value {
        json!({
            "Username": username,
            "Email": format!("{username}@example.com"),
            "FavouriteMovies": favourites
        })
    }

    pub fn login_response_json(username: &str, token: &str) -> Value {
        json!({
            "user": user_json(username, &[]),
            "token": token
        })
    }
}
