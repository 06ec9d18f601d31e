use animeflix_core::error::{Error, Result};
use animeflix_core::models::{User, UserUpdate};
use animeflix_core::services::ApiClient;
use animeflix_core::session::{Session, SessionStore};

/// Controller behind the profile page: view and edit the account, log out,
/// or delete the account entirely. Logout and deletion both clear the
/// persisted session.
pub struct ProfileView<'a, S: SessionStore> {
    client: &'a ApiClient,
    store: &'a S,
    pub user: Option<User>,
}

impl<'a, S: SessionStore> ProfileView<'a, S> {
    pub fn new(client: &'a ApiClient, store: &'a S) -> Self {
        Self {
            client,
            store,
            user: None,
        }
    }

    pub async fn init(&mut self) -> Result<()> {
        let session = self.session()?;
        self.user = Some(self.client.get_user(&session).await?);
        Ok(())
    }

    /// Apply an account update and keep the local copy in sync. A username
    /// change is written back to the stored session so later calls resolve
    /// the right resource path.
    pub async fn update(&mut self, update: &UserUpdate) -> Result<()> {
        let session = self.session()?;
        let user = self.client.edit_user(&session, update).await?;
        if user.username != session.username {
            self.store
                .save(&Session::new(user.username.clone(), session.token))?;
        }
        self.user = Some(user);
        Ok(())
    }

    /// Delete the account on the service, then clear the local session.
    pub async fn delete_account(&mut self) -> Result<()> {
        let session = self.session()?;
        self.client.delete_user(&session).await?;
        self.store.clear()?;
        self.user = None;
        tracing::info!(username = %session.username, "account deleted");
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        self.user = None;
        Ok(())
    }

    fn session(&self) -> Result<Session> {
        self.store
            .load()
            .ok_or_else(|| Error::SessionStore("no active session".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use animeflix_core::session::MemorySessionStore;
    use animeflix_core::test_helpers::fixtures;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use serde_json::json;

    fn seeded_store() -> MemorySessionStore {
        MemorySessionStore::with_session(fixtures::session())
    }

    #[tokio::test]
    async fn init_loads_profile() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET)
                .path("/users/alice")
                .header("authorization", "Bearer abc");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(fixtures::user_json("alice", &["m1"]));
        });

        let client = ApiClient::new(&server.base_url()).unwrap();
        let store = seeded_store();
        let mut view = ProfileView::new(&client, &store);
        view.init().await.unwrap();

        let user = view.user.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.favourite_movies, vec!["m1"]);
    }

    #[tokio::test]
    async fn username_change_updates_stored_session() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT)
                .path("/users/alice")
                .header("authorization", "Bearer abc")
                .json_body(json!({ "Username": "alicia" }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(fixtures::user_json("alicia", &[]));
        });

        let client = ApiClient::new(&server.base_url()).unwrap();
        let store = seeded_store();
        let mut view = ProfileView::new(&client, &store);
        view.update(&UserUpdate {
            username: Some("alicia".into()),
            ..UserUpdate::default()
        })
        .await
        .unwrap();

        assert_eq!(store.load(), Some(Session::new("alicia", "abc")));
        assert_eq!(view.user.unwrap().username, "alicia");
    }

    #[tokio::test]
    async fn delete_account_clears_session() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(DELETE)
                .path("/users/alice/delete")
                .header("authorization", "Bearer abc");
            then.status(200).body("alice was deleted.");
        });

        let client = ApiClient::new(&server.base_url()).unwrap();
        let store = seeded_store();
        let mut view = ProfileView::new(&client, &store);
        view.delete_account().await.unwrap();

        assert!(store.load().is_none());
        assert!(view.user.is_none());
        mock.assert();
    }

    #[tokio::test]
    async fn failed_deletion_keeps_session() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/users/alice/delete");
            then.status(500);
        });

        let client = ApiClient::new(&server.base_url()).unwrap();
        let store = seeded_store();
        let mut view = ProfileView::new(&client, &store);

        assert!(view.delete_account().await.is_err());
        assert!(store.load().is_some());
    }

    #[test]
    fn logout_clears_session() {
        let server_less_client = ApiClient::new("http://localhost:1").unwrap();
        let store = seeded_store();
        let mut view = ProfileView::new(&server_less_client, &store);

        view.logout().unwrap();
        assert!(store.load().is_none());
    }
}
