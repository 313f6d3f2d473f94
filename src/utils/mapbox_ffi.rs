// ============================================================================
// MAPBOX FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones de static/rex_map.js - Sin estado, sin lógica
// Todas las funciones reciben el id del contenedor: el glue guarda una
// instancia de mapa/geocoder por contenedor
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = rexMapInit)]
    pub fn map_init(container_id: &str, access_token: &str, style: &str, lng: f64, lat: f64, zoom: f64);

    /// `markers` es un array de `{ id, title, lng, lat }`
    #[wasm_bindgen(js_name = rexMapSetMarkers)]
    pub fn map_set_markers(container_id: &str, markers: JsValue);

    /// `coords` es un array de `[lng, lat]`; vacío borra la ruta resaltada
    #[wasm_bindgen(js_name = rexMapSetPath)]
    pub fn map_set_path(container_id: &str, coords: JsValue);

    #[wasm_bindgen(js_name = rexMapFitBounds)]
    pub fn map_fit_bounds(container_id: &str, west: f64, south: f64, east: f64, north: f64);

    #[wasm_bindgen(js_name = rexMapOnClick)]
    pub fn map_on_click(container_id: &str, callback: &Closure<dyn FnMut(f64, f64)>);

    #[wasm_bindgen(js_name = rexMapOffClick)]
    pub fn map_off_click(container_id: &str);

    #[wasm_bindgen(js_name = rexMapResize)]
    pub fn map_resize(container_id: &str);

    #[wasm_bindgen(js_name = rexMapDestroy)]
    pub fn map_destroy(container_id: &str);

    #[wasm_bindgen(js_name = rexGeocoderMount)]
    pub fn geocoder_mount(
        container_id: &str,
        access_token: &str,
        placeholder: &str,
        on_result: &Closure<dyn FnMut(f64, f64)>,
        on_clear: &Closure<dyn FnMut()>,
    );

    #[wasm_bindgen(js_name = rexGeocoderClear)]
    pub fn geocoder_clear(container_id: &str);

    #[wasm_bindgen(js_name = rexGeocoderUnmount)]
    pub fn geocoder_unmount(container_id: &str);
}
