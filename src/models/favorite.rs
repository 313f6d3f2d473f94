use serde::{Deserialize, Serialize};

/// Respuesta de `GET /favorites/me`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FavoriteIds {
    #[serde(default)]
    pub route_ids: Vec<String>,
}
