use crate::models::{Category, Route};

/// Filtro de categoría de la lista de rutas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Valor del `<select>`: "todos" o la categoría
    pub fn as_value(&self) -> &'static str {
        match self {
            CategoryFilter::All => "todos",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn from_value(value: &str) -> Self {
        Category::parse(value)
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All)
    }

    pub fn matches(&self, route: &Route) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => route.category == Some(*category),
        }
    }
}

/// Filtrado en cliente, conservando el orden recibido
pub fn filter_routes<'a>(routes: &'a [Route], filter: CategoryFilter) -> Vec<&'a Route> {
    routes.iter().filter(|route| filter.matches(route)).collect()
}

/// Ruta pedida desde fuera ("Ver" en favoritas). Se consume al encontrarla,
/// así que recargas posteriores del listado no la vuelven a abrir.
pub fn take_focus(focus: &mut Option<String>, routes: &[Route]) -> Option<Route> {
    let wanted = focus.as_deref()?;
    let route = routes.iter().find(|route| route.id == wanted)?.clone();
    *focus = None;
    Some(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: &str, category: Option<Category>) -> Route {
        Route {
            id: id.to_string(),
            name: format!("Ruta {}", id),
            description: String::new(),
            category,
            points: Vec::new(),
            visibility: true,
            owner_id: None,
            created_at: None,
        }
    }

    fn sample() -> Vec<Route> {
        vec![
            route("1", Some(Category::Trabajo)),
            route("2", Some(Category::Entretenimiento)),
            route("3", None),
            route("4", Some(Category::Trabajo)),
        ]
    }

    #[test]
    fn todos_returns_everything() {
        let routes = sample();
        assert_eq!(filter_routes(&routes, CategoryFilter::All).len(), routes.len());
    }

    #[test]
    fn category_returns_exact_subset() {
        let routes = sample();
        let ids: Vec<&str> = filter_routes(&routes, CategoryFilter::Only(Category::Trabajo))
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "4"]);

        let ids: Vec<&str> = filter_routes(&routes, CategoryFilter::Only(Category::Entretenimiento))
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn select_values_roundtrip() {
        assert_eq!(CategoryFilter::from_value("todos"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_value("trabajo"),
            CategoryFilter::Only(Category::Trabajo)
        );
        assert_eq!(CategoryFilter::Only(Category::Entretenimiento).as_value(), "entretenimiento");
    }

    #[test]
    fn focus_opens_once() {
        let routes = sample();
        let mut focus = Some("2".to_string());

        // Aún sin listado: se queda pendiente
        assert_eq!(take_focus(&mut focus, &[]), None);
        assert_eq!(focus.as_deref(), Some("2"));

        assert_eq!(take_focus(&mut focus, &routes).map(|r| r.id), Some("2".to_string()));
        assert_eq!(focus, None);
        // Una recarga posterior no la reabre
        assert_eq!(take_focus(&mut focus, &routes), None);
    }
}
