pub mod alert_surface;
pub mod auth_form;
pub mod favorites;
pub mod map_viewmodel;
pub mod profile_viewmodel;
pub mod route_browser;
pub mod route_form;

pub use alert_surface::{AlertAction, AlertSurface};
pub use auth_form::{AuthField, AuthForm, AuthMode};
pub use favorites::{favorite_error_message, FavoriteAction, FavoriteClick, FavoriteSet, FavoriteToggle, FavoritesAction};
pub use map_viewmodel::{Bounds, MapMarker, MapViewModel};
pub use profile_viewmodel::{validate_avatar, ProfileAction, ProfileEditor};
pub use route_browser::{filter_routes, take_focus, CategoryFilter};
pub use route_form::{DrawAction, DrawBuffer, ModeSwitch, RouteForm, RouteFormAction, RouteMode, RouteValidationError};
