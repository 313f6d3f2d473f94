// ============================================================================
// MAP VIEWMODEL - Preparación de datos para el mapa
// ============================================================================
// SOLO lógica de preparación de datos - Sin estado, sin FFI
// ============================================================================

use serde::Serialize;

use crate::models::{LngLat, Route};

/// Marcador tal como lo espera `rexMapSetMarkers`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub lng: f64,
    pub lat: f64,
}

/// Caja envolvente [oeste, sur, este, norte]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

pub struct MapViewModel;

impl MapViewModel {
    /// Un marcador por ruta, en su primer punto
    pub fn markers_for_routes<'a, I>(routes: I) -> Vec<MapMarker>
    where
        I: IntoIterator<Item = &'a Route>,
    {
        routes
            .into_iter()
            .filter_map(|route| {
                route.points.first().map(|start| MapMarker {
                    id: route.id.clone(),
                    title: Some(route.name.clone()),
                    lng: start.longitude,
                    lat: start.latitude,
                })
            })
            .collect()
    }

    /// Caja que contiene todos los puntos; None si no hay puntos válidos
    pub fn bounds(points: &[LngLat]) -> Option<Bounds> {
        points
            .iter()
            .filter(|[lng, lat]| lng.is_finite() && lat.is_finite())
            .fold(None, |acc: Option<Bounds>, [lng, lat]| {
                Some(match acc {
                    None => Bounds {
                        west: *lng,
                        south: *lat,
                        east: *lng,
                        north: *lat,
                    },
                    Some(b) => Bounds {
                        west: b.west.min(*lng),
                        south: b.south.min(*lat),
                        east: b.east.max(*lng),
                        north: b.north.max(*lat),
                    },
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoutePoint;

    #[test]
    fn bounds_of_empty_list_is_none() {
        assert_eq!(MapViewModel::bounds(&[]), None);
        assert_eq!(MapViewModel::bounds(&[[f64::NAN, 41.0]]), None);
    }

    #[test]
    fn bounds_cover_all_points() {
        let bounds = MapViewModel::bounds(&[[2.2, 41.4], [2.1, 41.5], [2.3, 41.3]]).unwrap();
        assert_eq!(
            bounds,
            Bounds {
                west: 2.1,
                south: 41.3,
                east: 2.3,
                north: 41.5
            }
        );
    }

    #[test]
    fn routes_without_points_get_no_marker() {
        let with_points = Route {
            id: "r1".to_string(),
            name: "Con puntos".to_string(),
            description: String::new(),
            category: None,
            points: vec![RoutePoint::from([2.1, 41.3])],
            visibility: true,
            owner_id: None,
            created_at: None,
        };
        let empty = Route {
            id: "r2".to_string(),
            points: Vec::new(),
            ..with_points.clone()
        };
        let markers = MapViewModel::markers_for_routes([&with_points, &empty]);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].id, "r1");
    }
}
