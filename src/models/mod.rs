pub mod alert;
pub mod auth;
pub mod favorite;
pub mod profile;
pub mod route;

pub use alert::{AlertInput, AlertKind, AlertMessage};
pub use auth::{AuthResponse, LoginRequest, RegisterRequest, User};
pub use favorite::FavoriteIds;
pub use profile::{Profile, ProfileExtras, ProfileStats, ProfileUpdate, Units};
pub use route::{Category, LngLat, NewRoute, Route, RoutePoint};
