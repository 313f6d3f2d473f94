// ============================================================================
// MAP VIEW - Contenedor de Mapbox
// ============================================================================
// Marcadores: se borran y se repintan cuando cambia la lista.
// Ruta resaltada: línea + puntos, y encuadre a su caja si no está vacía.
// ============================================================================

use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::hooks::use_map;
use crate::models::LngLat;
use crate::utils::mapbox_ffi;
use crate::viewmodels::{MapMarker, MapViewModel};

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    pub container_id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub markers: Vec<MapMarker>,
    #[prop_or_default]
    pub path: Vec<LngLat>,
    /// Captura de clics para dibujar rutas
    #[prop_or(false)]
    pub allow_pick_point: bool,
    #[prop_or_default]
    pub on_pick_point: Callback<LngLat>,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container_ref = use_node_ref();
    use_map(props.container_id.clone(), container_ref.clone());

    // Marcadores
    {
        let id = props.container_id.clone();
        use_effect_with(props.markers.clone(), move |markers| {
            match serde_wasm_bindgen::to_value(markers) {
                Ok(value) => mapbox_ffi::map_set_markers(&id, value),
                Err(e) => log::error!("❌ [MAP] No se pudieron serializar los marcadores: {}", e),
            }
            || ()
        });
    }

    // Ruta resaltada
    {
        let id = props.container_id.clone();
        use_effect_with(props.path.clone(), move |path| {
            match serde_wasm_bindgen::to_value(path) {
                Ok(value) => mapbox_ffi::map_set_path(&id, value),
                Err(e) => log::error!("❌ [MAP] No se pudo serializar la ruta: {}", e),
            }
            if let Some(bounds) = MapViewModel::bounds(path) {
                mapbox_ffi::map_fit_bounds(&id, bounds.west, bounds.south, bounds.east, bounds.north);
            }
            || ()
        });
    }

    // Clics (solo en modo dibujo)
    {
        let id = props.container_id.clone();
        use_effect_with(
            (props.allow_pick_point, props.on_pick_point.clone()),
            move |(allow, on_pick_point)| {
                let handler = if *allow {
                    let on_pick_point = on_pick_point.clone();
                    let closure = Closure::<dyn FnMut(f64, f64)>::new(move |lng: f64, lat: f64| {
                        on_pick_point.emit([lng, lat]);
                    });
                    mapbox_ffi::map_on_click(&id, &closure);
                    log::info!("✏️ [MAP] Captura de clics activada");
                    Some(closure)
                } else {
                    None
                };

                move || {
                    if let Some(closure) = handler {
                        mapbox_ffi::map_off_click(&id);
                        drop(closure);
                    }
                }
            },
        );
    }

    html! {
        <div
            id={props.container_id.clone()}
            ref={container_ref}
            class={classes!("map-view", props.class.clone())}
        />
    }
}
