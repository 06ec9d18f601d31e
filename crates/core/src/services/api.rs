use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Credentials, Director, Genre, LoginResponse, Movie, NewUser, User, UserUpdate};
use crate::session::Session;

/// Thin typed client for the animeFlix REST API. One method per remote
/// endpoint; authenticated endpoints take the session explicitly and attach
/// its token as a bearer header. Single attempt per call, no retries, no
/// timeouts beyond the transport defaults.
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        // A trailing slash keeps Url::join from eating the last path segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = normalized
            .parse::<Url>()
            .map_err(|e| Error::Config(format!("invalid API base URL '{base_url}': {e}")))?;

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base_url)
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Config(format!("invalid request path '{path}': {e}")))
    }

    /// Register a new account. `POST /users`, unauthenticated.
    pub async fn register(&self, details: &NewUser) -> Result<User> {
        let response = self
            .client
            .post(self.url("users")?)
            .json(details)
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(response).await
    }

    /// Exchange credentials for a token. `POST /login`, unauthenticated.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let response = self
            .client
            .post(self.url("login")?)
            .json(credentials)
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(response).await
    }

    /// Fetch the session owner's account. `GET /users/{username}`.
    pub async fn get_user(&self, session: &Session) -> Result<User> {
        let path = format!("users/{}", urlencoding::encode(&session.username));
        let response = self
            .client
            .get(self.url(&path)?)
            .bearer_auth(&session.token)
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(response).await
    }

    /// Update the session owner's account. `PUT /users/{username}`.
    pub async fn edit_user(&self, session: &Session, update: &UserUpdate) -> Result<User> {
        let path = format!("users/{}", urlencoding::encode(&session.username));
        let response = self
            .client
            .put(self.url(&path)?)
            .bearer_auth(&session.token)
            .json(update)
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(response).await
    }

    /// Delete the session owner's account. `DELETE /users/{username}/delete`.
    /// The service answers with a plain-text confirmation, which is discarded.
    pub async fn delete_user(&self, session: &Session) -> Result<()> {
        let path = format!("users/{}/delete", urlencoding::encode(&session.username));
        let response = self
            .client
            .delete(self.url(&path)?)
            .bearer_auth(&session.token)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await.map(drop)
    }

    /// Add a movie to the favourites list. The id rides along as the request
    /// body as well as in the path.
    /// `POST /users/{username}/movies/{id}`.
    pub async fn add_favourite(&self, session: &Session, movie_id: &str) -> Result<()> {
        let path = format!(
            "users/{}/movies/{}",
            urlencoding::encode(&session.username),
            urlencoding::encode(movie_id)
        );
        let response = self
            .client
            .post(self.url(&path)?)
            .bearer_auth(&session.token)
            .body(movie_id.to_string())
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await.map(drop)
    }

    /// Remove a movie from the favourites list. Removing an id that is not
    /// present is a no-op for the remote service.
    /// `DELETE /users/{username}/movies/{id}`.
    pub async fn delete_favourite(&self, session: &Session, movie_id: &str) -> Result<()> {
        let path = format!(
            "users/{}/movies/{}",
            urlencoding::encode(&session.username),
            urlencoding::encode(movie_id)
        );
        let response = self
            .client
            .delete(self.url(&path)?)
            .bearer_auth(&session.token)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await.map(drop)
    }

    /// Fetch the whole catalogue, in service order. `GET /movies`.
    pub async fn list_movies(&self, session: &Session) -> Result<Vec<Movie>> {
        let response = self
            .client
            .get(self.url("movies")?)
            .bearer_auth(&session.token)
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(response).await
    }

    /// Look up a single movie by title. `GET /movies/{title}`.
    pub async fn get_movie(&self, session: &Session, title: &str) -> Result<Movie> {
        let path = format!("movies/{}", urlencoding::encode(title));
        let response = self
            .client
            .get(self.url(&path)?)
            .bearer_auth(&session.token)
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(response).await
    }

    /// Look up a director by name. `GET /movies/director/{name}`.
    pub async fn get_director(&self, session: &Session, name: &str) -> Result<Director> {
        let path = format!("movies/director/{}", urlencoding::encode(name));
        let response = self
            .client
            .get(self.url(&path)?)
            .bearer_auth(&session.token)
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(response).await
    }

    /// Look up a genre by name. `GET /movies/genres/{name}`.
    pub async fn get_genre(&self, session: &Session, name: &str) -> Result<Genre> {
        let path = format!("movies/genres/{}", urlencoding::encode(name));
        let response = self
            .client
            .get(self.url(&path)?)
            .bearer_auth(&session.token)
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(response).await
    }
}

/// Normalize a transport failure. The detail is logged, callers only ever see
/// the fixed message.
fn transport_error(err: reqwest::Error) -> Error {
    tracing::error!(error = %err, "request failed to complete");
    Error::RequestFailed
}

/// Normalize a non-2xx response. Status and body are logged, then collapsed
/// into the single request-failed error.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::error!(status = %status, body = %body, "API request failed");
    Err(Error::RequestFailed)
}

/// Success path: decode the body into its typed record. A 2xx body that does
/// not match the expected shape is flagged rather than passed through.
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_status(response).await?;
    let bytes = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&bytes).map_err(|e| Error::MalformedResponse(e.to_string()))
}
