// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra el API de REX
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::AbortSignal;

use crate::config::CONFIG;
use crate::models::{
    AuthResponse, FavoriteIds, LoginRequest, NewRoute, Profile, ProfileUpdate, RegisterRequest, Route,
    User,
};
use crate::services::error::{extract_error_message, ApiError};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &format!("Bearer {}", token))
    }

    // ------------------------------------------------------------------
    // Helpers de envío
    // ------------------------------------------------------------------

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }

    async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let request = builder
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http {
            status,
            message: extract_error_message(status, &body),
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ------------------------------------------------------------------
    // Auth / usuarios
    // ------------------------------------------------------------------

    /// `POST /users`
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        log::info!("📝 [API] Registrando usuario {}", request.username);
        let response = Self::send_json(Request::post(&self.url("/users")), request).await?;
        Self::decode(response).await
    }

    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        log::info!("🔐 [API] Login de {}", request.email);
        let response = Self::send_json(Request::post(&self.url("/auth/login")), request).await?;
        Self::decode(response).await
    }

    /// `GET /auth/me`
    pub async fn me(&self, token: &str, signal: Option<&AbortSignal>) -> Result<User, ApiError> {
        let builder = Self::bearer(Request::get(&self.url("/auth/me")), token).abort_signal(signal);
        let response = Self::send(builder).await?;
        Self::decode(response).await
    }

    /// `GET /users/me/profile`
    pub async fn my_profile(&self, token: &str, signal: Option<&AbortSignal>) -> Result<Profile, ApiError> {
        let builder =
            Self::bearer(Request::get(&self.url("/users/me/profile")), token).abort_signal(signal);
        let response = Self::send(builder).await?;
        Self::decode(response).await
    }

    /// `PATCH /users/me`
    pub async fn update_me(&self, token: &str, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        log::info!("💾 [API] Actualizando perfil");
        let builder = Self::bearer(Request::patch(&self.url("/users/me")), token);
        let response = Self::send_json(builder, update).await?;
        Self::decode(response).await
    }

    // ------------------------------------------------------------------
    // Rutas
    // ------------------------------------------------------------------

    /// `GET /routes`
    pub async fn list_routes(&self, token: Option<&str>) -> Result<Vec<Route>, ApiError> {
        let mut builder = Request::get(&self.url("/routes"));
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            builder = Self::bearer(builder, token);
        }
        let response = Self::send(builder).await?;
        let routes: Vec<Route> = Self::decode(response).await?;
        log::info!("🧭 [API] {} rutas recibidas", routes.len());
        Ok(routes)
    }

    /// `POST /routes`
    pub async fn create_route(&self, token: &str, route: &NewRoute) -> Result<Route, ApiError> {
        log::info!("🧭 [API] Creando ruta '{}' ({} puntos)", route.name, route.points.len());
        let builder = Self::bearer(Request::post(&self.url("/routes")), token);
        let response = Self::send_json(builder, route).await?;
        Self::decode(response).await
    }

    /// `GET /routes/by-name/:name`; un 404 significa que el nombre está libre
    pub async fn route_name_exists(&self, name: &str) -> Result<bool, ApiError> {
        let encoded = String::from(js_sys::encode_uri_component(name));
        let url = self.url(&format!("/routes/by-name/{}", encoded));
        match Self::send(Request::get(&url)).await {
            Ok(_) => Ok(true),
            Err(ApiError::Http { status: 404, .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    // ------------------------------------------------------------------
    // Favoritos
    // ------------------------------------------------------------------

    /// `GET /favorites/me`
    pub async fn my_favorites(&self, token: &str) -> Result<Vec<String>, ApiError> {
        let builder = Self::bearer(Request::get(&self.url("/favorites/me")), token);
        let response = Self::send(builder).await?;
        let ids: FavoriteIds = Self::decode(response).await?;
        Ok(ids.route_ids)
    }

    /// `POST /favorites/:id`
    pub async fn add_favorite(&self, token: &str, route_id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/favorites/{}", route_id));
        Self::send(Self::bearer(Request::post(&url), token)).await?;
        Ok(())
    }

    /// `DELETE /favorites/:id`
    pub async fn remove_favorite(&self, token: &str, route_id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/favorites/{}", route_id));
        Self::send(Self::bearer(Request::delete(&url), token)).await?;
        Ok(())
    }
}
