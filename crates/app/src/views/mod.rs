pub mod catalogue;
pub mod dialogs;
pub mod login;
pub mod profile;
pub mod register;

pub use catalogue::CatalogueView;
pub use login::{LoginOutcome, LoginView};
pub use profile::ProfileView;
pub use register::RegisterView;

/// Navigation target reported by a view after a successful action. Routing
/// itself is out of scope; views only say where the app should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Catalogue,
}
