use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use animeflix_app::views::{CatalogueView, LoginView, Route};
use animeflix_core::Config;
use animeflix_core::models::Credentials;
use animeflix_core::services::ApiClient;
use animeflix_core::session::FileSessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file early for environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,animeflix_app=debug,animeflix_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let client = ApiClient::from_config(&config)?;
    let store = FileSessionStore::default();

    // Log in when credentials are configured, otherwise reuse a stored session.
    if let (Some(username), Some(password)) = (config.username.clone(), config.password.clone()) {
        let mut login = LoginView::new(&client, &store);
        login.credentials = Credentials { username, password };

        let outcome = login.submit().await;
        tracing::info!("{}", outcome.notification.message);
        if outcome.navigate != Some(Route::Catalogue) {
            anyhow::bail!("login failed");
        }
    }

    let mut catalogue = CatalogueView::new(&client, &store);
    catalogue.init().await?;

    for movie in &catalogue.movies {
        let starred = if catalogue.is_favourite(&movie.id) {
            "*"
        } else {
            " "
        };
        tracing::info!(
            "{starred} {} ({})",
            movie.title,
            movie.release_year.as_deref().unwrap_or("unknown")
        );
    }
    tracing::info!(
        "{} movies, {} favourites",
        catalogue.movies.len(),
        catalogue.favourites.len()
    );

    Ok(())
}
