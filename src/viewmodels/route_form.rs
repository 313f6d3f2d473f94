// ============================================================================
// ROUTE FORM VIEWMODEL - Estado y validación del formulario "Crear Ruta"
// ============================================================================
// Los puntos del modo "draw" viven fuera (los pinta el mapa); aquí solo se
// guardan los puntos del modo "search"
// ============================================================================

use thiserror::Error;

use crate::models::{Category, LngLat, NewRoute, RoutePoint};
use crate::utils::constants::{ROUTE_MIN_POINTS, ROUTE_NAME_MAX_CHARS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteMode {
    #[default]
    Search,
    Draw,
}

/// Motivo por el que no se envía una ruta; el texto es la alerta mostrada
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteValidationError {
    #[error("Añade al menos {min} puntos a la ruta (tienes {found}).")]
    TooFewPoints { min: usize, found: usize },

    #[error("Pon un nombre a la ruta.")]
    EmptyName,

    #[error("El nombre no puede superar los {max} caracteres.")]
    NameTooLong { max: usize },

    #[error("Ya existe una ruta con ese nombre.")]
    NameTaken,

    #[error("Añade una descripción a la ruta.")]
    EmptyDescription,

    #[error("Selecciona una categoría.")]
    MissingCategory,
}

/// Efecto de cambiar de modo que el dueño del formulario debe aplicar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSwitch {
    Unchanged,
    /// Se vaciaron los puntos de búsqueda
    ClearedSearch,
    /// El buffer de dibujo (externo) debe vaciarse
    ResetDraw,
}

/// Cambios que la vista aplica sobre el formulario
#[derive(Debug, Clone, PartialEq)]
pub enum RouteFormAction {
    SetMode(RouteMode),
    SetName(String),
    SetDescription(String),
    SetCategory(Option<Category>),
    SetPrivate(bool),
    SelectCoord(Option<LngLat>),
    AddSearchPoint,
    RemoveSearchPoint(usize),
    ClearSearchPoints,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteForm {
    pub mode: RouteMode,
    pub name: String,
    pub description: String,
    pub category: Option<Category>,
    pub is_private: bool,
    pub search_points: Vec<LngLat>,
    /// Último resultado del geocoder pendiente de añadir
    pub selected_coord: Option<LngLat>,
}

impl Default for RouteForm {
    fn default() -> Self {
        Self::new(RouteMode::default())
    }
}

impl RouteForm {
    pub fn new(mode: RouteMode) -> Self {
        Self {
            mode,
            name: String::new(),
            description: String::new(),
            category: None,
            is_private: true,
            search_points: Vec::new(),
            selected_coord: None,
        }
    }

    pub fn change_mode(&mut self, mode: RouteMode) -> ModeSwitch {
        if self.mode == mode {
            return ModeSwitch::Unchanged;
        }
        self.mode = mode;
        match mode {
            RouteMode::Search => ModeSwitch::ResetDraw,
            RouteMode::Draw => {
                self.clear_search_points();
                ModeSwitch::ClearedSearch
            }
        }
    }

    pub fn apply(&mut self, action: RouteFormAction) {
        match action {
            RouteFormAction::SetMode(mode) => {
                self.change_mode(mode);
            }
            RouteFormAction::SetName(name) => self.name = name,
            RouteFormAction::SetDescription(description) => self.description = description,
            RouteFormAction::SetCategory(category) => self.category = category,
            RouteFormAction::SetPrivate(is_private) => self.is_private = is_private,
            RouteFormAction::SelectCoord(coord) => self.select_coord(coord),
            RouteFormAction::AddSearchPoint => {
                self.add_search_point();
            }
            RouteFormAction::RemoveSearchPoint(index) => self.remove_search_point(index),
            RouteFormAction::ClearSearchPoints => self.clear_search_points(),
        }
    }

    pub fn select_coord(&mut self, coord: Option<LngLat>) {
        self.selected_coord = coord;
    }

    /// Añade la coordenada seleccionada; false si no había ninguna
    pub fn add_search_point(&mut self) -> bool {
        match self.selected_coord.take() {
            Some(coord) => {
                self.search_points.push(coord);
                true
            }
            None => false,
        }
    }

    pub fn remove_search_point(&mut self, index: usize) {
        if index < self.search_points.len() {
            self.search_points.remove(index);
        }
    }

    pub fn clear_search_points(&mut self) {
        self.search_points.clear();
        self.selected_coord = None;
    }

    /// Puntos del modo activo
    pub fn active_points<'a>(&'a self, draw_points: &'a [LngLat]) -> &'a [LngLat] {
        match self.mode {
            RouteMode::Search => &self.search_points,
            RouteMode::Draw => draw_points,
        }
    }

    /// Comprobaciones previas a la consulta de nombre.
    /// Devuelve el nombre recortado que se consultará en el servidor.
    pub fn check_before_lookup(&self, draw_points: &[LngLat]) -> Result<String, RouteValidationError> {
        let found = self.active_points(draw_points).len();
        if found < ROUTE_MIN_POINTS {
            return Err(RouteValidationError::TooFewPoints {
                min: ROUTE_MIN_POINTS,
                found,
            });
        }

        let name = self.name.trim();
        if name.is_empty() {
            return Err(RouteValidationError::EmptyName);
        }
        if name.chars().count() > ROUTE_NAME_MAX_CHARS {
            return Err(RouteValidationError::NameTooLong {
                max: ROUTE_NAME_MAX_CHARS,
            });
        }
        Ok(name.to_string())
    }

    /// Comprobaciones posteriores a la consulta de nombre
    pub fn check_after_lookup(&self) -> Result<Category, RouteValidationError> {
        if self.description.trim().is_empty() {
            return Err(RouteValidationError::EmptyDescription);
        }
        self.category.ok_or(RouteValidationError::MissingCategory)
    }

    pub fn build_payload(&self, draw_points: &[LngLat], category: Category) -> NewRoute {
        NewRoute {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            points: self
                .active_points(draw_points)
                .iter()
                .copied()
                .map(RoutePoint::from)
                .collect(),
            visibility: !self.is_private,
            category,
        }
    }
}

// ============================================================================
// DRAW BUFFER - Puntos del modo "draw" (clics en el mapa)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawAction {
    Push(LngLat),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawBuffer {
    pub points: Vec<LngLat>,
}

impl DrawBuffer {
    pub fn apply(&mut self, action: DrawAction) {
        match action {
            DrawAction::Push(point) => self.points.push(point),
            DrawAction::Clear => self.points.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE: [LngLat; 3] = [[2.1, 41.3], [2.2, 41.4], [2.3, 41.5]];

    fn filled_form(mode: RouteMode) -> RouteForm {
        let mut form = RouteForm::new(mode);
        form.name = "Ruta test".to_string();
        form.description = "x".to_string();
        form.category = Some(Category::Trabajo);
        form
    }

    #[test]
    fn fewer_than_three_points_rejected_in_both_modes() {
        let form = filled_form(RouteMode::Draw);
        assert_eq!(
            form.check_before_lookup(&THREE[..2]),
            Err(RouteValidationError::TooFewPoints { min: 3, found: 2 })
        );

        let mut form = filled_form(RouteMode::Search);
        form.search_points = THREE[..1].to_vec();
        // los puntos de dibujo no cuentan en modo búsqueda
        assert!(matches!(
            form.check_before_lookup(&THREE),
            Err(RouteValidationError::TooFewPoints { found: 1, .. })
        ));
    }

    #[test]
    fn name_checks_run_in_order() {
        let mut form = filled_form(RouteMode::Draw);
        form.name = "   ".to_string();
        assert_eq!(form.check_before_lookup(&THREE), Err(RouteValidationError::EmptyName));

        form.name = format!("  {}  ", "a".repeat(31));
        assert_eq!(
            form.check_before_lookup(&THREE),
            Err(RouteValidationError::NameTooLong { max: 30 })
        );

        form.name = format!("  {}  ", "ñ".repeat(30));
        assert_eq!(form.check_before_lookup(&THREE), Ok("ñ".repeat(30)));
    }

    #[test]
    fn description_checked_before_category() {
        let mut form = filled_form(RouteMode::Draw);
        form.description = " ".to_string();
        form.category = None;
        assert_eq!(form.check_after_lookup(), Err(RouteValidationError::EmptyDescription));

        form.description = "Por la costa".to_string();
        assert_eq!(form.check_after_lookup(), Err(RouteValidationError::MissingCategory));

        form.category = Some(Category::Entretenimiento);
        assert_eq!(form.check_after_lookup(), Ok(Category::Entretenimiento));
    }

    #[test]
    fn switching_modes_clears_the_mode_being_left() {
        let mut form = RouteForm::new(RouteMode::Search);
        form.search_points = THREE.to_vec();
        form.selected_coord = Some([2.0, 41.0]);

        assert_eq!(form.change_mode(RouteMode::Draw), ModeSwitch::ClearedSearch);
        assert!(form.search_points.is_empty());
        assert!(form.selected_coord.is_none());

        assert_eq!(form.change_mode(RouteMode::Search), ModeSwitch::ResetDraw);
        assert_eq!(form.change_mode(RouteMode::Search), ModeSwitch::Unchanged);
    }

    #[test]
    fn search_point_editing() {
        let mut form = RouteForm::new(RouteMode::Search);
        assert!(!form.add_search_point());

        form.select_coord(Some([2.1, 41.3]));
        assert!(form.add_search_point());
        assert!(form.selected_coord.is_none());
        form.select_coord(Some([2.2, 41.4]));
        form.add_search_point();

        form.remove_search_point(0);
        assert_eq!(form.search_points, vec![[2.2, 41.4]]);
        form.remove_search_point(7);
        assert_eq!(form.search_points.len(), 1);

        form.clear_search_points();
        assert!(form.search_points.is_empty());
    }

    #[test]
    fn actions_edit_the_form() {
        let mut form = RouteForm::default();
        form.apply(RouteFormAction::SetName("Costa".to_string()));
        form.apply(RouteFormAction::SetCategory(Some(Category::Entretenimiento)));
        form.apply(RouteFormAction::SetPrivate(false));
        form.apply(RouteFormAction::SelectCoord(Some([2.1, 41.3])));
        form.apply(RouteFormAction::AddSearchPoint);
        assert_eq!(form.name, "Costa");
        assert!(!form.is_private);
        assert_eq!(form.search_points, vec![[2.1, 41.3]]);

        form.apply(RouteFormAction::SetMode(RouteMode::Draw));
        assert!(form.search_points.is_empty());
        assert_eq!(form.mode, RouteMode::Draw);
    }

    #[test]
    fn payload_from_drawn_points() {
        let form = filled_form(RouteMode::Draw);
        let name = form.check_before_lookup(&THREE).unwrap();
        assert_eq!(name, "Ruta test");
        let category = form.check_after_lookup().unwrap();
        let payload = form.build_payload(&THREE, category);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ruta test",
                "description": "x",
                "points": [
                    {"latitude": 41.3, "longitude": 2.1},
                    {"latitude": 41.4, "longitude": 2.2},
                    {"latitude": 41.5, "longitude": 2.3}
                ],
                "visibility": false,
                "category": "trabajo"
            })
        );
    }

    #[test]
    fn draw_buffer_keeps_click_order() {
        let mut buffer = DrawBuffer::default();
        for point in THREE {
            buffer.apply(DrawAction::Push(point));
        }
        assert_eq!(buffer.points, THREE.to_vec());
        buffer.apply(DrawAction::Clear);
        assert!(buffer.points.is_empty());
    }

    #[test]
    fn public_route_sets_visibility() {
        let mut form = filled_form(RouteMode::Draw);
        form.is_private = false;
        assert!(form.build_payload(&THREE, Category::Trabajo).visibility);
    }
}
