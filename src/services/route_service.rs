use thiserror::Error;

use crate::models::{LngLat, Route};
use crate::services::{ApiClient, ApiError};
use crate::viewmodels::{RouteForm, RouteValidationError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitRouteError {
    #[error(transparent)]
    Invalid(#[from] RouteValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Valida el formulario en orden y publica la ruta.
/// La unicidad del nombre se consulta entre las comprobaciones locales,
/// así que un nombre demasiado largo nunca llega al servidor.
pub async fn submit_route(
    api: &ApiClient,
    token: &str,
    form: &RouteForm,
    draw_points: &[LngLat],
) -> Result<Route, SubmitRouteError> {
    let name = form.check_before_lookup(draw_points)?;

    if api.route_name_exists(&name).await? {
        return Err(RouteValidationError::NameTaken.into());
    }

    let category = form.check_after_lookup()?;
    let payload = form.build_payload(draw_points, category);
    let created = api.create_route(token, &payload).await?;
    log::info!("✅ [ROUTES] Ruta '{}' creada ({})", created.name, created.id);
    Ok(created)
}
