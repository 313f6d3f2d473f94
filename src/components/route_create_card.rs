// ============================================================================
// ROUTE CREATE CARD - Formulario "Crear Ruta"
// ============================================================================
// Modo "search": geocoder de Mapbox + lista de puntos propia.
// Modo "draw": los puntos llegan del mapa (buffer del padre).
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_alert, use_session_context};
use crate::models::route::format_lng_lat;
use crate::models::{Category, LngLat, Route};
use crate::services::{submit_route, ApiClient, SubmitRouteError};
use crate::utils::{mapbox_ffi, GEOCODER_CONTAINER_ID};
use crate::viewmodels::{ModeSwitch, RouteForm, RouteFormAction, RouteMode};

impl Reducible for RouteForm {
    type Action = RouteFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteCreateCardProps {
    /// Puntos dibujados en el mapa
    pub draw_points: Vec<LngLat>,
    /// Modo activo, para que el padre active la captura de clics
    pub on_mode_change: Callback<RouteMode>,
    /// Puntos del modo búsqueda, para pintarlos en el mapa
    pub on_search_points: Callback<Vec<LngLat>>,
    pub on_reset_draw: Callback<()>,
    pub on_created: Callback<Route>,
    pub on_close: Callback<()>,
}

#[function_component(RouteCreateCard)]
pub fn route_create_card(props: &RouteCreateCardProps) -> Html {
    let session = use_session_context();
    let alert = use_alert();
    let form = use_reducer(RouteForm::default);
    let submitting = use_state(|| false);

    // Informar al padre del modo (también el inicial)
    {
        let on_mode_change = props.on_mode_change.clone();
        use_effect_with(form.mode, move |mode| {
            on_mode_change.emit(*mode);
            || ()
        });
    }

    {
        let on_search_points = props.on_search_points.clone();
        use_effect_with(form.search_points.clone(), move |points| {
            on_search_points.emit(points.clone());
            || ()
        });
    }

    // Geocoder montado solo en modo búsqueda
    {
        let dispatcher = form.dispatcher();
        use_effect_with(form.mode, move |mode| {
            let handlers = if *mode == RouteMode::Search {
                let on_result = {
                    let dispatcher = dispatcher.clone();
                    Closure::<dyn FnMut(f64, f64)>::new(move |lng: f64, lat: f64| {
                        dispatcher.dispatch(RouteFormAction::SelectCoord(Some([lng, lat])));
                    })
                };
                let on_clear = Closure::<dyn FnMut()>::new(move || {
                    dispatcher.dispatch(RouteFormAction::SelectCoord(None));
                });
                mapbox_ffi::geocoder_mount(
                    GEOCODER_CONTAINER_ID,
                    CONFIG.mapbox_token(),
                    "Busca un sitio para añadir…",
                    &on_result,
                    &on_clear,
                );
                Some((on_result, on_clear))
            } else {
                None
            };

            move || {
                if let Some(handlers) = handlers {
                    mapbox_ffi::geocoder_unmount(GEOCODER_CONTAINER_ID);
                    drop(handlers);
                }
            }
        });
    }

    let on_change_mode = {
        let form = form.clone();
        let on_reset_draw = props.on_reset_draw.clone();
        Callback::from(move |mode: RouteMode| {
            let mut preview = (*form).clone();
            if preview.change_mode(mode) == ModeSwitch::ResetDraw {
                on_reset_draw.emit(());
            }
            form.dispatch(RouteFormAction::SetMode(mode));
        })
    };

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(RouteFormAction::SetName(input.value()));
        })
    };

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(RouteFormAction::SetDescription(input.value()));
        })
    };

    let on_category = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(RouteFormAction::SetCategory(Category::parse(&select.value())));
        })
    };

    let on_private = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(RouteFormAction::SetPrivate(input.checked()));
        })
    };

    let on_add_point = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.dispatch(RouteFormAction::AddSearchPoint);
            mapbox_ffi::geocoder_clear(GEOCODER_CONTAINER_ID);
        })
    };

    let on_clear_points = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.dispatch(RouteFormAction::ClearSearchPoints);
            mapbox_ffi::geocoder_clear(GEOCODER_CONTAINER_ID);
        })
    };

    let on_save = {
        let form = form.clone();
        let submitting = submitting.clone();
        let draw_points = props.draw_points.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |_: MouseEvent| {
            if *submitting {
                return;
            }
            let Some(token) = session.token() else {
                alert.warning("Inicia sesión para crear rutas.");
                return;
            };

            let snapshot = (*form).clone();
            let draw_points = draw_points.clone();
            let submitting = submitting.clone();
            let alert = alert.clone();
            let on_created = on_created.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match submit_route(&ApiClient::new(), &token, &snapshot, &draw_points).await {
                    Ok(route) => {
                        alert.success(format!("Ruta \"{}\" guardada.", route.name));
                        on_created.emit(route);
                    }
                    Err(SubmitRouteError::Invalid(e)) => {
                        log::warn!("⚠️ [ROUTES] Formulario inválido: {}", e);
                        alert.warning(e.to_string());
                    }
                    Err(SubmitRouteError::Api(e)) => {
                        log::error!("❌ [ROUTES] No se pudo guardar la ruta: {}", e);
                        alert.error(format!("No se pudo guardar la ruta: {}", e.user_message()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let mode_tab = |mode: RouteMode, label: &'static str| {
        let on_change_mode = on_change_mode.clone();
        html! {
            <button
                class={classes!("route__tab-btn", (form.mode == mode).then_some("active"))}
                onclick={Callback::from(move |_| on_change_mode.emit(mode))}
            >
                {label}
            </button>
        }
    };

    let search_section = html! {
        <>
            <div class="input-group">
                <label>{"Ubicación"}</label>
                <div id={GEOCODER_CONTAINER_ID} class="geocoder-container" />
            </div>
            <div class="search-actions">
                <button
                    class="btn"
                    disabled={form.selected_coord.is_none()}
                    onclick={on_add_point}
                    title="Añadir el resultado actual como punto"
                >
                    {"Añadir punto"}
                </button>
                <button class="btn" onclick={on_clear_points} title="Vaciar lista de puntos">
                    {"Limpiar puntos"}
                </button>
            </div>
            <ul class="route__points-list">
                { for form.search_points.iter().enumerate().map(|(idx, point)| {
                    let form = form.clone();
                    html! {
                        <li key={idx} class="route__point-row">
                            <span>{format!("{}:", idx + 1)}</span>
                            <code>{format_lng_lat(point, 5)}</code>
                            <button
                                class="icon-btn"
                                title="Eliminar"
                                onclick={Callback::from(move |_| form.dispatch(RouteFormAction::RemoveSearchPoint(idx)))}
                            >
                                {"✕"}
                            </button>
                        </li>
                    }
                }) }
                if form.search_points.is_empty() {
                    <li class="muted">{"No hay puntos añadidos todavía."}</li>
                }
            </ul>
        </>
    };

    let draw_section = html! {
        <>
            <p class="draw-instruction">{"Haz clic en el mapa para agregar puntos a la ruta."}</p>
            <ul class="route__points-list">
                { for props.draw_points.iter().enumerate().map(|(idx, point)| html! {
                    <li key={idx} class="route__point-row">
                        {format!("{}: {}", idx + 1, format_lng_lat(point, 5))}
                    </li>
                }) }
                if props.draw_points.is_empty() {
                    <li class="muted">{"No has añadido puntos todavía."}</li>
                }
            </ul>
            <button class="btn" onclick={props.on_reset_draw.reform(|_| ())} title="Borrar puntos dibujados">
                {"Reiniciar puntos"}
            </button>
        </>
    };

    let category_value = form.category.map(|c| c.as_str()).unwrap_or("");

    html! {
        <div class="route-card-panel">
            <header class="route-card-panel__header">
                <h2 class="route__title">{"Crear Ruta"}</h2>
                <button class="btn-close" onclick={props.on_close.reform(|_| ())}>{"✕"}</button>
            </header>

            <div class="input-group">
                <label for="route-name">{"Nombre"}</label>
                <input
                    id="route-name"
                    type="text"
                    value={form.name.clone()}
                    oninput={on_name}
                    placeholder="Ej: Ruta al trabajo"
                />
            </div>

            <div class="input-group">
                <label for="route-description">{"Descripción"}</label>
                <textarea
                    id="route-description"
                    value={form.description.clone()}
                    oninput={on_description}
                    placeholder="¿Qué tiene de especial esta ruta?"
                />
            </div>

            <div class="route__tabs">
                {mode_tab(RouteMode::Search, "Buscar ubicación")}
                {mode_tab(RouteMode::Draw, "Dibujar ruta")}
            </div>

            {match form.mode {
                RouteMode::Search => search_section,
                RouteMode::Draw => draw_section,
            }}

            <div class="input-group">
                <label>
                    <input type="checkbox" checked={form.is_private} onchange={on_private} />
                    {" Privada"}
                </label>
            </div>

            <div class="input-group">
                <label for="category">{"Categoría"}</label>
                <select id="category" onchange={on_category}>
                    <option value="" disabled=true selected={category_value.is_empty()}>
                        {"Selecciona una categoría…"}
                    </option>
                    { for Category::ALL.iter().map(|category| html! {
                        <option
                            value={category.as_str()}
                            selected={category_value == category.as_str()}
                        >
                            {category.label()}
                        </option>
                    }) }
                </select>
            </div>

            <button class="btn primary" onclick={on_save} disabled={*submitting}>
                {if *submitting { "Guardando…" } else { "Guardar Ruta" }}
            </button>
        </div>
    }
}
