// ============================================================================
// HOME PAGE - Listado de rutas + mapa + creación
// ============================================================================
// Las rutas y las favoritas se piden al montar y cada vez que cambia el token.
// Ver el detalle de una ruta o crear una nueva exige sesión.
// ============================================================================

use std::rc::Rc;

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{MapView, RouteCreateCard, RouteDetailsCard, RoutePreviewCard};
use crate::hooks::{use_alert, use_require_auth, use_session_context};
use crate::models::{Category, LngLat, Route};
use crate::services::ApiClient;
use crate::utils::{Generation, HOME_MAP_CONTAINER_ID};
use crate::viewmodels::{
    filter_routes, take_focus, CategoryFilter, DrawAction, DrawBuffer, FavoriteSet, FavoritesAction,
    MapViewModel, RouteMode,
};

impl Reducible for DrawBuffer {
    type Action = DrawAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_require_login: Callback<()>,
    /// Ruta a abrir en cuanto llegue el listado (desde "Favoritas")
    #[prop_or_default]
    pub focus_route_id: Option<String>,
    /// La ruta pedida ya se abrió
    #[prop_or_default]
    pub on_focus_consumed: Callback<()>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let session = use_session_context();
    let alert = use_alert();
    let require_auth = use_require_auth(props.on_require_login.clone());

    let routes = use_state(Vec::<Route>::new);
    let loading = use_state(|| false);
    let favorites = use_reducer(FavoriteSet::default);
    let filter = use_state(CategoryFilter::default);
    let selected = use_state(|| None::<Route>);
    let creating = use_state(|| false);
    let create_mode = use_state(RouteMode::default);
    let search_points = use_state(Vec::<LngLat>::new);
    let draw = use_reducer(DrawBuffer::default);
    let reload = use_state(|| 0u32);
    let fetches = use_memo((), |_| Generation::default());
    let pending_focus = use_mut_ref(|| None::<String>);

    // Cargar rutas y favoritas. Una respuesta de un token anterior se descarta.
    {
        let routes = routes.clone();
        let loading = loading.clone();
        let favorites = favorites.dispatcher();
        let alert = alert.clone();
        let fetches = (*fetches).clone();
        use_effect_with((session.token(), *reload), move |(token, _)| {
            let token = token.clone();
            let ticket = fetches.advance();
            loading.set(true);
            {
                let fetches = fetches.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let api = ApiClient::new();
                    let list = api.list_routes(token.as_deref()).await;
                    if !fetches.is_current(ticket) {
                        return;
                    }
                    match list {
                        Ok(list) => routes.set(list),
                        Err(e) => {
                            log::error!("❌ [ROUTES] Error cargando rutas: {}", e);
                            alert.error(format!("No se pudieron cargar las rutas: {}", e.user_message()));
                        }
                    }
                    loading.set(false);

                    match token {
                        Some(token) => {
                            let ids = api.my_favorites(&token).await;
                            if !fetches.is_current(ticket) {
                                return;
                            }
                            match ids {
                                Ok(ids) => {
                                    log::info!("⭐ [FAVORITES] {} favoritas", ids.len());
                                    favorites.dispatch(FavoritesAction::Load(ids));
                                }
                                Err(e) => log::warn!("⚠️ [FAVORITES] No se pudieron cargar las favoritas: {}", e),
                            }
                        }
                        None => favorites.dispatch(FavoritesAction::Clear),
                    }
                });
            }

            move || {
                fetches.advance();
            }
        });
    }

    // Abrir la ruta pedida desde el perfil (una sola vez)
    {
        let pending_focus = pending_focus.clone();
        use_effect_with(props.focus_route_id.clone(), move |focus| {
            if focus.is_some() {
                *pending_focus.borrow_mut() = focus.clone();
            }
            || ()
        });
    }
    {
        let selected = selected.clone();
        let on_focus_consumed = props.on_focus_consumed.clone();
        let list = (*routes).clone();
        use_effect_with((props.focus_route_id.clone(), list), move |(_, list)| {
            if let Some(route) = take_focus(&mut pending_focus.borrow_mut(), list) {
                log::info!("🧭 [ROUTES] Abriendo ruta pedida: {}", route.id);
                selected.set(Some(route));
                on_focus_consumed.emit(());
            }
            || ()
        });
    }

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filter.set(CategoryFilter::from_value(&select.value()));
        })
    };

    let on_select = {
        let selected = selected.clone();
        let creating = creating.clone();
        let require_auth = require_auth.clone();
        Callback::from(move |route: Route| {
            let selected = selected.clone();
            let creating = creating.clone();
            require_auth.run(move || {
                log::info!("🧭 [ROUTES] Ruta seleccionada: {}", route.id);
                creating.set(false);
                selected.set(Some(route));
            });
        })
    };

    let on_favorite_change = {
        let favorites = favorites.dispatcher();
        Callback::from(move |(route_id, saved): (String, bool)| {
            favorites.dispatch(FavoritesAction::Set(route_id, saved));
        })
    };

    let on_new_route = {
        let creating = creating.clone();
        let selected = selected.clone();
        let require_auth = require_auth.clone();
        Callback::from(move |_: MouseEvent| {
            let creating = creating.clone();
            let selected = selected.clone();
            require_auth.run(move || {
                selected.set(None);
                creating.set(true);
            });
        })
    };

    let close_create = {
        let creating = creating.clone();
        let draw = draw.dispatcher();
        let search_points = search_points.clone();
        Callback::from(move |_| {
            draw.dispatch(DrawAction::Clear);
            search_points.set(Vec::new());
            creating.set(false);
        })
    };

    let on_created = {
        let close_create = close_create.clone();
        let reload = reload.clone();
        Callback::from(move |_: Route| {
            close_create.emit(());
            reload.set(reload.wrapping_add(1));
        })
    };

    let on_pick_point = {
        let draw = draw.dispatcher();
        use_callback((), move |point: LngLat, _| draw.dispatch(DrawAction::Push(point)))
    };

    let on_reset_draw = {
        let draw = draw.dispatcher();
        Callback::from(move |_| draw.dispatch(DrawAction::Clear))
    };

    let on_mode_change = {
        let create_mode = create_mode.clone();
        Callback::from(move |mode: RouteMode| create_mode.set(mode))
    };

    let on_search_points = {
        let search_points = search_points.clone();
        Callback::from(move |points: Vec<LngLat>| search_points.set(points))
    };

    let close_details = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    // Qué pinta el mapa
    let visible = filter_routes(&routes, *filter);
    let drawing = *creating && *create_mode == RouteMode::Draw;
    let (markers, path) = if *creating {
        let points = if drawing {
            draw.points.clone()
        } else {
            (*search_points).clone()
        };
        (Vec::new(), points)
    } else if let Some(route) = selected.as_ref() {
        (Vec::new(), route.lng_lat_points())
    } else {
        (MapViewModel::markers_for_routes(visible.iter().copied()), Vec::new())
    };

    let list_view = if visible.is_empty() {
        let text = if *loading { "Cargando rutas…" } else { "No hay rutas que mostrar." };
        html! { <p class="muted">{text}</p> }
    } else {
        visible
            .iter()
            .map(|route| {
                html! {
                    <RoutePreviewCard
                        key={route.id.clone()}
                        route={(*route).clone()}
                        saved={favorites.contains(&route.id)}
                        selected={selected.as_ref().map(|s| s.id == route.id).unwrap_or(false)}
                        on_select={on_select.clone()}
                        on_favorite_change={on_favorite_change.clone()}
                        on_require_login={props.on_require_login.clone()}
                    />
                }
            })
            .collect::<Html>()
    };

    html! {
        <main class="home__content">
            <aside class="home__sidebar">
                <div class="home__filter">
                    <label for="category-filter">{"Categoría"}</label>
                    <select id="category-filter" onchange={on_filter}>
                        <option value={CategoryFilter::All.as_value()} selected={*filter == CategoryFilter::All}>
                            {"Todas"}
                        </option>
                        { for Category::ALL.iter().map(|category| html! {
                            <option
                                value={CategoryFilter::Only(*category).as_value()}
                                selected={*filter == CategoryFilter::Only(*category)}
                            >
                                {category.label()}
                            </option>
                        }) }
                    </select>
                </div>
                <div class="home__list">{list_view}</div>
            </aside>

            <section class="home__map">
                <MapView
                    container_id={HOME_MAP_CONTAINER_ID}
                    {markers}
                    {path}
                    allow_pick_point={drawing}
                    {on_pick_point}
                />

                if let Some(route) = (*selected).clone() {
                    <RouteDetailsCard
                        saved={favorites.contains(&route.id)}
                        route={route.clone()}
                        on_close={close_details}
                        on_favorite_change={on_favorite_change.clone()}
                        on_require_login={props.on_require_login.clone()}
                    />
                }

                if *creating {
                    <RouteCreateCard
                        draw_points={draw.points.clone()}
                        {on_mode_change}
                        {on_search_points}
                        {on_reset_draw}
                        {on_created}
                        on_close={close_create}
                    />
                }

                if !*creating {
                    <button class="fab" onclick={on_new_route} title="Crear ruta">{"＋"}</button>
                }
            </section>
        </main>
    }
}
