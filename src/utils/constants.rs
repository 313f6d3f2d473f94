/// Claves de localStorage
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "access_token";
pub const STORAGE_KEY_USER: &str = "user";
pub const STORAGE_KEY_PROFILE_EXTRAS: &str = "profile_extras";

/// Reglas de rutas
pub const ROUTE_MIN_POINTS: usize = 3;
pub const ROUTE_NAME_MAX_CHARS: usize = 30;

/// Tiempo visible de una alerta antes de ocultarse sola
pub const ALERT_AUTO_HIDE_MS: u32 = 4000;

/// Tiempo durante el cual no se vuelve a abrir el login tras un gate
pub const REQUIRE_AUTH_COOLDOWN_MS: u32 = 1000;

/// Avatar: tamaño máximo del fichero (2 MB)
pub const AVATAR_MAX_BYTES: u64 = 2 * 1024 * 1024;

/// IDs de contenedores DOM usados por el glue de Mapbox
pub const HOME_MAP_CONTAINER_ID: &str = "rex-map";
pub const GEOCODER_CONTAINER_ID: &str = "rex-geocoder";
