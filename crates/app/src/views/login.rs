use animeflix_core::models::Credentials;
use animeflix_core::services::ApiClient;
use animeflix_core::session::{Session, SessionStore};

use super::Route;
use crate::notify::Notification;

/// Controller behind the login form. Collects credentials, exchanges them for
/// a token, and persists the session before reporting navigation.
pub struct LoginView<'a, S: SessionStore> {
    client: &'a ApiClient,
    store: &'a S,
    pub credentials: Credentials,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub notification: Notification,
    pub navigate: Option<Route>,
}

impl<'a, S: SessionStore> LoginView<'a, S> {
    pub fn new(client: &'a ApiClient, store: &'a S) -> Self {
        Self {
            client,
            store,
            credentials: Credentials::default(),
        }
    }

    /// Submit the form. On success the session is saved before the catalogue
    /// navigation is reported; on failure nothing is persisted and the
    /// normalized error message becomes the notification.
    pub async fn submit(&self) -> LoginOutcome {
        match self.client.login(&self.credentials).await {
            Ok(response) => {
                let session = Session::new(response.user.username, response.token);
                if let Err(err) = self.store.save(&session) {
                    tracing::error!(error = %err, "failed to persist session");
                    return LoginOutcome {
                        notification: Notification::new(err.to_string()),
                        navigate: None,
                    };
                }
                tracing::info!(username = %session.username, "user logged in");
                LoginOutcome {
                    notification: Notification::new("user logged in successfully"),
                    navigate: Some(Route::Catalogue),
                }
            }
            Err(err) => LoginOutcome {
                notification: Notification::new(err.to_string()),
                navigate: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use animeflix_core::error::REQUEST_FAILED_MESSAGE;
    use animeflix_core::session::MemorySessionStore;
    use animeflix_core::test_helpers::fixtures;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn successful_login_persists_session_then_navigates() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/login")
                .json_body(json!({ "Username": "alice", "Password": "pw" }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(fixtures::login_response_json("alice", "abc"));
        });

        let client = ApiClient::new(&server.base_url()).unwrap();
        let store = MemorySessionStore::new();
        let mut view = LoginView::new(&client, &store);
        view.credentials = Credentials {
            username: "alice".into(),
            password: "pw".into(),
        };

        let outcome = view.submit().await;

        assert_eq!(store.load(), Some(Session::new("alice", "abc")));
        assert_eq!(outcome.navigate, Some(Route::Catalogue));
        assert_eq!(outcome.notification.message, "user logged in successfully");
    }

    #[tokio::test]
    async fn failed_login_persists_nothing() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/login");
            then.status(401).body("invalid credentials");
        });

        let client = ApiClient::new(&server.base_url()).unwrap();
        let store = MemorySessionStore::new();
        let mut view = LoginView::new(&client, &store);
        view.credentials = Credentials {
            username: "alice".into(),
            password: "wrong".into(),
        };

        let outcome = view.submit().await;

        assert!(store.load().is_none());
        assert_eq!(outcome.navigate, None);
        assert_eq!(outcome.notification.message, REQUEST_FAILED_MESSAGE);
    }
}
