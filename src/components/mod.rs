pub mod alert_overlay;
pub mod app;
pub mod auth_card;
pub mod favorite_button;
pub mod header;
pub mod home_page;
pub mod map_view;
pub mod modal;
pub mod profile_page;
pub mod route_create_card;
pub mod route_details_card;
pub mod route_preview_card;

pub use alert_overlay::AlertOverlay;
pub use app::{App, Page};
pub use auth_card::AuthCard;
pub use favorite_button::FavoriteButton;
pub use header::Header;
pub use home_page::HomePage;
pub use map_view::MapView;
pub use modal::Modal;
pub use profile_page::ProfilePage;
pub use route_create_card::RouteCreateCard;
pub use route_details_card::RouteDetailsCard;
pub use route_preview_card::RoutePreviewCard;
