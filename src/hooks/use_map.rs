// ============================================================================
// USE MAP HOOK - Ciclo de vida de una instancia de Mapbox
// ============================================================================
// Crea el mapa al montar, lo redimensiona con un ResizeObserver y lo destruye
// al desmontar. Marcadores, ruta y clics los gestiona el componente
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::ResizeObserver;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::utils::mapbox_ffi;

#[hook]
pub fn use_map(container_id: AttrValue, container_ref: NodeRef) {
    use_effect_with(container_id, move |container_id| {
        let id = container_id.to_string();
        let map_config = &CONFIG.map_config;

        if !CONFIG.has_mapbox_token() {
            log::warn!("⚠️ [MAP] MAPBOX_ACCESS_TOKEN vacío, el mapa no cargará teselas");
        }
        log::info!("🗺️ [MAP] Inicializando mapa en #{}", id);
        mapbox_ffi::map_init(
            &id,
            CONFIG.mapbox_token(),
            &map_config.style,
            map_config.default_center[0],
            map_config.default_center[1],
            map_config.default_zoom,
        );

        // Redimensionar al cambiar el tamaño del contenedor
        let on_resize = {
            let id = id.clone();
            Closure::<dyn FnMut()>::new(move || mapbox_ffi::map_resize(&id))
        };
        let observer = match ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
            Ok(observer) => {
                if let Some(element) = container_ref.cast::<web_sys::Element>() {
                    observer.observe(&element);
                }
                Some(observer)
            }
            Err(e) => {
                log::warn!("⚠️ [MAP] ResizeObserver no disponible: {:?}", e);
                None
            }
        };

        move || {
            if let Some(observer) = observer {
                observer.disconnect();
            }
            drop(on_resize);
            log::info!("🗑️ [MAP] Destruyendo mapa #{}", id);
            mapbox_ffi::map_destroy(&id);
        }
    });
}
