use serde::{Deserialize, Serialize};

/// Configuración del cliente, fijada en tiempo de compilación
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub mapbox_access_token: String,
    pub map_config: MapConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Centro inicial como [lng, lat]
    pub default_center: [f64; 2],
    pub default_zoom: f64,
    pub style: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Barcelona
            default_center: [2.1734, 41.3851],
            default_zoom: 11.0,
            style: "mapbox://styles/mapbox/streets-v12".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            mapbox_access_token: String::new(),
            map_config: MapConfig::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(option_env!("REX_API_URL"), option_env!("MAPBOX_ACCESS_TOKEN"))
    }

    fn from_values(api_url: Option<&str>, mapbox_token: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);

        Self {
            api_url,
            mapbox_access_token: mapbox_token.unwrap_or("").trim().to_string(),
            map_config: defaults.map_config,
        }
    }

    /// URL base del API sin barra final
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Obtiene el token de Mapbox
    pub fn mapbox_token(&self) -> &str {
        &self.mapbox_access_token
    }

    pub fn has_mapbox_token(&self) -> bool {
        !self.mapbox_access_token.is_empty()
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_from_api_url() {
        let config = AppConfig::from_values(Some("https://api.rex.test/"), None);
        assert_eq!(config.api_url(), "https://api.rex.test");
    }

    #[test]
    fn blank_api_url_falls_back_to_default() {
        let config = AppConfig::from_values(Some("   "), Some(" pk.token "));
        assert_eq!(config.api_url(), "http://localhost:8000");
        assert_eq!(config.mapbox_token(), "pk.token");
        assert!(config.has_mapbox_token());
    }

    #[test]
    fn default_map_is_centered_on_barcelona() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.map_config.default_center, [2.1734, 41.3851]);
        assert_eq!(config.map_config.default_zoom, 11.0);
        assert!(!config.has_mapbox_token());
    }
}
