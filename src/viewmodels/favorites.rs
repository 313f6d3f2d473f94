// ============================================================================
// FAVORITES VIEWMODEL - Toggle optimista con rollback
// ============================================================================

use std::collections::HashSet;

use crate::services::ApiError;

/// Petición a lanzar tras el cambio optimista
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    Add,
    Remove,
}

/// Estado mostrado por un botón de favorito
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub saved: bool,
}

impl FavoriteToggle {
    pub fn new(saved: bool) -> Self {
        Self { saved }
    }

    /// Cambia el estado mostrado y devuelve la petición que lo confirma
    pub fn flip(&mut self) -> FavoriteAction {
        self.saved = !self.saved;
        if self.saved {
            FavoriteAction::Add
        } else {
            FavoriteAction::Remove
        }
    }

    /// Deshace `action` tras un fallo del servidor
    pub fn rollback(&mut self, action: FavoriteAction) {
        self.saved = match action {
            FavoriteAction::Add => false,
            FavoriteAction::Remove => true,
        };
    }
}

/// Resultado de un clic en el botón
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteClick {
    /// Sin token: pedir login sin tocar el estado
    NeedsLogin,
    Send(FavoriteAction),
}

impl FavoriteToggle {
    pub fn click(&mut self, has_token: bool) -> FavoriteClick {
        if has_token {
            FavoriteClick::Send(self.flip())
        } else {
            FavoriteClick::NeedsLogin
        }
    }
}

/// Conjunto de ids favoritos del usuario actual (solo en memoria)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoriteSet {
    ids: HashSet<String>,
}

impl FavoriteSet {
    pub fn from_ids<I: IntoIterator<Item = String>>(ids: I) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn contains(&self, route_id: &str) -> bool {
        self.ids.contains(route_id)
    }

    pub fn set(&mut self, route_id: &str, saved: bool) {
        if saved {
            self.ids.insert(route_id.to_string());
        } else {
            self.ids.remove(route_id);
        }
    }
}

/// Cambios sobre el conjunto de favoritas
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesAction {
    Load(Vec<String>),
    Set(String, bool),
    Clear,
}

impl FavoriteSet {
    pub fn apply(&mut self, action: FavoritesAction) {
        match action {
            FavoritesAction::Load(ids) => *self = Self::from_ids(ids),
            FavoritesAction::Set(route_id, saved) => self.set(&route_id, saved),
            FavoritesAction::Clear => self.ids.clear(),
        }
    }
}

/// Texto de la alerta cuando falla un add/remove de favorito
pub fn favorite_error_message(error: &ApiError) -> String {
    match error.status() {
        Some(401) => "No autorizado: inicia sesión de nuevo.".to_string(),
        Some(404) => "Ruta no encontrada.".to_string(),
        Some(403) => "Prohibido: no puedes guardar esta ruta.".to_string(),
        Some(status) => format!("No se pudo actualizar favoritos (error {}).", status),
        None => "Error de red al actualizar favoritos.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn rollback_restores_pre_toggle_state_for_every_failure() {
        let failures = [
            http(401),
            http(403),
            http(404),
            http(500),
            ApiError::Network("offline".to_string()),
        ];
        for initial in [false, true] {
            for failure in &failures {
                let mut toggle = FavoriteToggle::new(initial);
                let action = toggle.flip();
                assert_eq!(toggle.saved, !initial);
                let _ = favorite_error_message(failure);
                toggle.rollback(action);
                assert_eq!(toggle.saved, initial);
            }
        }
    }

    #[test]
    fn flip_picks_request_from_new_state() {
        let mut toggle = FavoriteToggle::new(false);
        assert_eq!(toggle.flip(), FavoriteAction::Add);
        assert_eq!(toggle.flip(), FavoriteAction::Remove);
    }

    #[test]
    fn anonymous_click_asks_for_login_and_keeps_state() {
        let mut toggle = FavoriteToggle::new(false);
        assert_eq!(toggle.click(false), FavoriteClick::NeedsLogin);
        assert!(!toggle.saved);

        assert_eq!(toggle.click(true), FavoriteClick::Send(FavoriteAction::Add));
        assert!(toggle.saved);
    }

    #[test]
    fn status_coded_messages() {
        assert!(favorite_error_message(&http(401)).starts_with("No autorizado"));
        assert_eq!(favorite_error_message(&http(404)), "Ruta no encontrada.");
        assert!(favorite_error_message(&http(403)).starts_with("Prohibido"));
        assert!(favorite_error_message(&http(500)).contains("500"));
        assert!(favorite_error_message(&ApiError::Network("x".into())).contains("red"));
    }

    #[test]
    fn favorite_set_tracks_ids() {
        let mut set = FavoriteSet::from_ids(vec!["a".to_string()]);
        assert!(set.contains("a"));
        set.set("b", true);
        set.set("a", false);
        assert!(!set.contains("a"));
        assert!(set.contains("b"));
    }

    #[test]
    fn actions_replace_or_edit_the_set() {
        let mut set = FavoriteSet::default();
        set.apply(FavoritesAction::Load(vec!["a".to_string(), "b".to_string()]));
        assert!(set.contains("a") && set.contains("b"));
        set.apply(FavoritesAction::Set("a".to_string(), false));
        assert!(!set.contains("a"));
        set.apply(FavoritesAction::Clear);
        assert_eq!(set, FavoriteSet::default());
    }
}
