use animeflix_core::models::NewUser;
use animeflix_core::services::ApiClient;

use crate::notify::Notification;

/// Controller behind the registration form.
pub struct RegisterView<'a> {
    client: &'a ApiClient,
    pub details: NewUser,
}

impl<'a> RegisterView<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            details: NewUser::default(),
        }
    }

    /// Submit the form. Registration does not log the user in; they are sent
    /// back to the login form on success.
    pub async fn submit(&self) -> Notification {
        match self.client.register(&self.details).await {
            Ok(user) => {
                tracing::info!(username = %user.username, "user registered");
                Notification::new("registration successful, please log in")
            }
            Err(err) => Notification::new(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use animeflix_core::error::REQUEST_FAILED_MESSAGE;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn registration_posts_details() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/users").json_body(json!({
                "Username": "bob",
                "Password": "pw",
                "Email": "bob@example.com",
                "Birthday": "1990-01-01"
            }));
            then.status(201)
                .header("content-type", "application/json")
                .json_body(json!({ "Username": "bob", "Email": "bob@example.com" }));
        });

        let client = ApiClient::new(&server.base_url()).unwrap();
        let mut view = RegisterView::new(&client);
        view.details = NewUser {
            username: "bob".into(),
            password: "pw".into(),
            email: "bob@example.com".into(),
            birthday: Some("1990-01-01".into()),
        };

        let notification = view.submit().await;
        assert_eq!(notification.message, "registration successful, please log in");
        mock.assert();
    }

    #[tokio::test]
    async fn duplicate_username_surfaces_fixed_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/users");
            then.status(409).body("bob already exists");
        });

        let client = ApiClient::new(&server.base_url()).unwrap();
        let view = RegisterView::new(&client);
        let notification = view.submit().await;
        assert_eq!(notification.message, REQUEST_FAILED_MESSAGE);
    }
}
