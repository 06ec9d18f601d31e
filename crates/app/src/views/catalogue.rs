use animeflix_core::error::{Error, Result};
use animeflix_core::models::Movie;
use animeflix_core::services::ApiClient;
use animeflix_core::session::{Session, SessionStore};

use super::dialogs::{DirectorsDialog, GenreDialog, MovieDetailsDialog};

/// Controller behind the catalogue grid: the fetched movie list, the session
/// owner's favourites, and the add/remove actions on each card.
pub struct CatalogueView<'a, S: SessionStore> {
    client: &'a ApiClient,
    store: &'a S,
    pub movies: Vec<Movie>,
    pub favourites: Vec<String>,
}

impl<'a, S: SessionStore> CatalogueView<'a, S> {
    pub fn new(client: &'a ApiClient, store: &'a S) -> Self {
        Self {
            client,
            store,
            movies: Vec::new(),
            favourites: Vec::new(),
        }
    }

    /// Fetch the catalogue and, when a session exists, the favourites list.
    /// Without a session the catalogue request is still attempted with an
    /// empty token; the service's 401 normalizes like any other failure.
    pub async fn init(&mut self) -> Result<()> {
        match self.store.load() {
            Some(session) => {
                self.movies = self.client.list_movies(&session).await?;
                self.refresh_favourites(&session).await?;
            }
            None => {
                self.movies = self.client.list_movies(&Session::default()).await?;
            }
        }
        Ok(())
    }

    /// Add a movie to the favourites, then re-fetch the list so local state
    /// reflects what the service stored.
    pub async fn add_favourite(&mut self, movie_id: &str) -> Result<()> {
        let session = self.session()?;
        self.client.add_favourite(&session, movie_id).await?;
        self.refresh_favourites(&session).await
    }

    /// Remove a movie from the favourites and re-fetch. Removing an id that
    /// is not in the list is a remote no-op.
    pub async fn remove_favourite(&mut self, movie_id: &str) -> Result<()> {
        let session = self.session()?;
        self.client.delete_favourite(&session, movie_id).await?;
        self.refresh_favourites(&session).await
    }

    pub fn is_favourite(&self, movie_id: &str) -> bool {
        self.favourites.iter().any(|id| id == movie_id)
    }

    /// Dialog payloads are built from already-fetched card data only.
    pub fn details_dialog(&self, movie: &Movie) -> MovieDetailsDialog {
        MovieDetailsDialog::from(movie)
    }

    pub fn directors_dialog(&self, movie: &Movie) -> DirectorsDialog {
        DirectorsDialog::from(movie)
    }

    pub fn genre_dialog(&self, movie: &Movie) -> GenreDialog {
        GenreDialog::from(movie)
    }

    async fn refresh_favourites(&mut self, session: &Session) -> Result<()> {
        let user = self.client.get_user(session).await?;
        self.favourites = user.favourite_movies;
        Ok(())
    }

    fn session(&self) -> Result<Session> {
        self.store
            .load()
            .ok_or_else(|| Error::SessionStore("no active session".into()))
    }
}
