use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Coordenada como la entrega Mapbox: [lng, lat]
pub type LngLat = [f64; 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Entretenimiento,
    Trabajo,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Entretenimiento, Category::Trabajo];

    /// Valor en el API
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Entretenimiento => "entretenimiento",
            Category::Trabajo => "trabajo",
        }
    }

    /// Texto para la UI
    pub fn label(&self) -> &'static str {
        match self {
            Category::Entretenimiento => "Entretenimiento",
            Category::Trabajo => "Trabajo",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "entretenimiento" => Some(Category::Entretenimiento),
            "trabajo" => Some(Category::Trabajo),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Punto tal como viaja por el API
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl RoutePoint {
    pub fn lng_lat(&self) -> LngLat {
        [self.longitude, self.latitude]
    }
}

impl From<LngLat> for RoutePoint {
    fn from([lng, lat]: LngLat) -> Self {
        Self {
            latitude: lat,
            longitude: lng,
        }
    }
}

/// Ruta publicada por el API (`GET /routes`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    // Rutas antiguas pueden no tener categoría o traer una desconocida
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<Category>,
    #[serde(default)]
    pub points: Vec<RoutePoint>,
    #[serde(default)]
    pub visibility: bool,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Route {
    pub fn lng_lat_points(&self) -> Vec<LngLat> {
        self.points.iter().map(RoutePoint::lng_lat).collect()
    }

    pub fn is_private(&self) -> bool {
        !self.visibility
    }

    pub fn category_label(&self) -> &'static str {
        self.category.map(|c| c.label()).unwrap_or("Sin categoría")
    }
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Category::parse))
}

/// Cuerpo de `POST /routes`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRoute {
    pub name: String,
    pub description: String,
    pub points: Vec<RoutePoint>,
    pub visibility: bool,
    pub category: Category,
}

/// "lng, lat" con `decimals` decimales
pub fn format_lng_lat(point: &LngLat, decimals: usize) -> String {
    format!("{:.*}, {:.*}", decimals, point[0], decimals, point[1])
}

/// "1 punto" / "N puntos"
pub fn points_label(count: usize) -> String {
    if count == 1 {
        "1 punto".to_string()
    } else {
        format!("{} puntos", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_route_with_mongo_id() {
        let json = r#"{
            "_id": "665f1c",
            "name": "Casa - Trabajo",
            "description": "Por la Diagonal",
            "category": "trabajo",
            "points": [{"latitude": 41.3, "longitude": 2.1}],
            "visibility": true,
            "owner_id": "u1",
            "created_at": "2025-10-18T10:00:00"
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.id, "665f1c");
        assert_eq!(route.category, Some(Category::Trabajo));
        assert_eq!(route.lng_lat_points(), vec![[2.1, 41.3]]);
        assert!(!route.is_private());
    }

    #[test]
    fn unknown_or_missing_category_is_none() {
        let json = r#"{"id": "a", "name": "x", "category": "deporte"}"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.category, None);
        assert!(route.is_private());

        let json = r#"{"id": "b", "name": "y", "category": null}"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.category, None);
        assert_eq!(route.category_label(), "Sin categoría");
    }

    #[test]
    fn point_from_lng_lat_swaps_to_wire_order() {
        let point = RoutePoint::from([2.2, 41.4]);
        assert_eq!(point.latitude, 41.4);
        assert_eq!(point.longitude, 2.2);
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json, serde_json::json!({"latitude": 41.4, "longitude": 2.2}));
    }

    #[test]
    fn labels() {
        assert_eq!(format_lng_lat(&[2.17341234, 41.38519], 4), "2.1734, 41.3852");
        assert_eq!(points_label(1), "1 punto");
        assert_eq!(points_label(0), "0 puntos");
        assert_eq!(Category::parse(" Trabajo "), Some(Category::Trabajo));
    }
}
