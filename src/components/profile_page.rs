// ============================================================================
// PROFILE PAGE - Datos personales + rutas favoritas
// ============================================================================
// Identidad y perfil se piden al montar con un AbortController que se aborta
// al desmontar. Los extras editables se cachean en localStorage para pintar
// algo antes de que responda el servidor.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AbortController, FileReader, HtmlInputElement};
use yew::prelude::*;

use crate::components::FavoriteButton;
use crate::hooks::{use_alert, use_session_context};
use crate::models::route::points_label;
use crate::models::{Profile, ProfileExtras, Route, Units, User};
use crate::services::ApiClient;
use crate::utils::{load_from_storage, save_to_storage, STORAGE_KEY_PROFILE_EXTRAS};
use crate::viewmodels::{validate_avatar, FavoriteSet, FavoritesAction, ProfileAction, ProfileEditor};

impl Reducible for ProfileEditor {
    type Action = ProfileAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

fn cache_extras(extras: &ProfileExtras) {
    if let Err(e) = save_to_storage(STORAGE_KEY_PROFILE_EXTRAS, extras) {
        log::warn!("⚠️ [PROFILE] {}", e);
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Personal,
    Favorites,
}

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    /// "Ver" en una favorita: volver al mapa con esa ruta abierta
    pub on_open_route: Callback<String>,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let session = use_session_context();
    let alert = use_alert();
    let tab = use_state(|| ProfileTab::Personal);
    let identity = use_state(|| None::<User>);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let editor = use_reducer(|| {
        let cached = load_from_storage::<ProfileExtras>(STORAGE_KEY_PROFILE_EXTRAS).unwrap_or_default();
        ProfileEditor::new(Profile::default().with_extras(&cached))
    });
    let routes = use_state(Vec::<Route>::new);
    let favorites = use_reducer(FavoriteSet::default);

    // Identidad + perfil (+ favoritas para la pestaña)
    {
        let identity = identity.clone();
        let loading = loading.clone();
        let editor = editor.dispatcher();
        let routes = routes.clone();
        let favorites = favorites.dispatcher();
        let alert = alert.clone();
        use_effect_with(session.token(), move |token| {
            let controller = AbortController::new().ok();
            if let Some(token) = token.clone() {
                let signal = controller.as_ref().map(AbortController::signal);
                loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    let api = ApiClient::new();
                    let aborted = || signal.as_ref().map(|s| s.aborted()).unwrap_or(false);

                    match api.me(&token, signal.as_ref()).await {
                        Ok(user) if !aborted() => identity.set(Some(user)),
                        Ok(_) => return,
                        Err(e) => {
                            if aborted() {
                                return;
                            }
                            log::warn!("⚠️ [PROFILE] /auth/me falló: {}", e);
                        }
                    }

                    match api.my_profile(&token, signal.as_ref()).await {
                        Ok(profile) if !aborted() => {
                            log::info!("👤 [PROFILE] Perfil cargado");
                            cache_extras(&profile.extras());
                            editor.dispatch(ProfileAction::Loaded(profile));
                        }
                        Ok(_) => return,
                        Err(e) => {
                            if aborted() {
                                return;
                            }
                            log::error!("❌ [PROFILE] Error cargando perfil: {}", e);
                            alert.error(&e);
                        }
                    }
                    loading.set(false);

                    let (list, ids) = (api.list_routes(Some(&token)).await, api.my_favorites(&token).await);
                    if aborted() {
                        return;
                    }
                    match (list, ids) {
                        (Ok(list), Ok(ids)) => {
                            routes.set(list);
                            favorites.dispatch(FavoritesAction::Load(ids));
                        }
                        (Err(e), _) | (_, Err(e)) => {
                            log::warn!("⚠️ [FAVORITES] No se pudieron cargar las favoritas: {}", e);
                        }
                    }
                });
            } else {
                loading.set(false);
            }

            move || {
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    if !session.is_authenticated() {
        return html! {
            <main class="profile">
                <p class="muted">{"Inicia sesión para ver tu perfil."}</p>
            </main>
        };
    }

    let on_start_edit = {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| editor.dispatch(ProfileAction::StartEdit))
    };

    let on_cancel_edit = {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| editor.dispatch(ProfileAction::CancelEdit))
    };

    let on_save = {
        let editor = editor.clone();
        let saving = saving.clone();
        let alert = alert.clone();
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let update = editor.pending_update();
            if update.is_empty() {
                log::info!("ℹ️ [PROFILE] Sin cambios, no se envía nada");
                editor.dispatch(ProfileAction::CancelEdit);
                return;
            }
            let Some(token) = session.token() else {
                return;
            };

            let editor = editor.dispatcher();
            let saving = saving.clone();
            let alert = alert.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().update_me(&token, &update).await {
                    Ok(profile) => {
                        cache_extras(&profile.extras());
                        editor.dispatch(ProfileAction::Saved(profile));
                        alert.success("Perfil actualizado.");
                    }
                    Err(e) => {
                        log::error!("❌ [PROFILE] Error guardando perfil: {}", e);
                        alert.error(&e);
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_phone = {
        let editor = editor.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            editor.dispatch(ProfileAction::SetPhone(input.value()));
        })
    };

    let on_units = |units: Units| {
        let editor = editor.clone();
        Callback::from(move |_: Event| editor.dispatch(ProfileAction::SetUnits(units)))
    };

    let on_avatar = {
        let editor = editor.dispatcher();
        let alert = alert.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Err(message) = validate_avatar(&file.type_(), file.size() as u64) {
                alert.warning(message);
                input.set_value("");
                return;
            }
            let Ok(reader) = FileReader::new() else {
                alert.error("No se pudo leer la imagen.");
                return;
            };

            let onload = {
                let reader = reader.clone();
                let editor = editor.clone();
                Closure::once_into_js(move || {
                    if let Some(data_url) = reader.result().ok().and_then(|r| r.as_string()) {
                        editor.dispatch(ProfileAction::SetAvatarUrl(data_url));
                    }
                })
            };
            reader.set_onload(Some(onload.unchecked_ref()));
            if let Err(e) = reader.read_as_data_url(&file) {
                log::error!("❌ [PROFILE] FileReader: {:?}", e);
                alert.error("No se pudo leer la imagen.");
            }
        })
    };

    let select_tab = |target: ProfileTab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };

    let on_favorite_change = {
        let favorites = favorites.dispatcher();
        Callback::from(move |(route_id, saved): (String, bool)| {
            favorites.dispatch(FavoritesAction::Set(route_id, saved));
        })
    };

    // ------------------------------------------------------------------
    // Vista
    // ------------------------------------------------------------------

    let profile = &editor.committed;
    let extras = editor.view_extras();
    let editing = editor.is_editing();
    let username = identity
        .as_ref()
        .and_then(|u| u.username.clone())
        .or_else(|| profile.username.clone())
        .or_else(|| session.user().and_then(|u| u.username))
        .unwrap_or_else(|| "Sin nombre".to_string());
    let email = identity
        .as_ref()
        .and_then(|u| u.email.clone())
        .or_else(|| profile.email.clone())
        .unwrap_or_else(|| "Sin email".to_string());
    let username_text = if *loading { "…".to_string() } else { username.clone() };

    let avatar = if extras.avatar_url.is_empty() {
        let initial = username.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
        html! { <div class="avatar avatar--initial">{initial}</div> }
    } else {
        html! { <img class="avatar" src={extras.avatar_url.clone()} alt="Avatar" /> }
    };

    let personal = html! {
        <section class="profile__card">
            <header class="profile__card-header">
                <h2>{"Datos personales"}</h2>
                if editing {
                    <div class="profile__actions">
                        <button class="btn-ghost sm" type="button" onclick={on_cancel_edit}>{"Cancelar"}</button>
                        <button class="btn-primary sm" type="button" onclick={on_save} disabled={*saving}>
                            {if *saving { "Guardando…" } else { "Guardar" }}
                        </button>
                    </div>
                } else {
                    <button class="btn-primary sm" type="button" onclick={on_start_edit}>{"Editar"}</button>
                }
            </header>

            <div class="profile__identity">
                {avatar}
                if editing {
                    <label class="btn-ghost sm">
                        {"Cambiar avatar"}
                        <input type="file" accept="image/*" hidden=true onchange={on_avatar} />
                    </label>
                }
            </div>

            <div class="info-row">
                <span class="info-label">{"Nombre de usuario"}</span>
                <span class="info-value">{username_text}</span>
            </div>
            <div class="info-row">
                <span class="info-label">{"Email"}</span>
                <span class="info-value">{email}</span>
            </div>

            <div class="info-row">
                <span class="extra-label">{"Teléfono (opcional)"}</span>
                if editing {
                    <input type="tel" value={extras.phone.clone()} oninput={on_phone} />
                } else {
                    <span class="info-value">
                        {if extras.phone.is_empty() { "—".to_string() } else { extras.phone.clone() }}
                    </span>
                }
            </div>

            <div class="info-row">
                <span class="extra-label">{"Unidades preferidas"}</span>
                if editing {
                    <div class="unit-options" role="radiogroup" aria-label="Elegir unidades">
                        { for [Units::Km, Units::Mi].into_iter().map(|units| html! {
                            <label class={classes!("unit-chip", (extras.units == units).then_some("selected"))}>
                                <input
                                    type="radio"
                                    name="units"
                                    value={units.as_str()}
                                    checked={extras.units == units}
                                    onchange={on_units(units)}
                                />
                                {units.label()}
                            </label>
                        }) }
                    </div>
                } else {
                    <span class="info-value">{extras.units.label()}</span>
                }
            </div>

            <div class="stats-grid">
                <div class="stat-card">
                    <span class="stat-value">{profile.stats.routes_created}</span>
                    <span class="stat-label">{"Rutas creadas"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{profile.stats.routes_completed}</span>
                    <span class="stat-label">{"Rutas realizadas"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{profile.stats.routes_favorites}</span>
                    <span class="stat-label">{"Rutas favoritas"}</span>
                </div>
            </div>
        </section>
    };

    let favorite_routes: Vec<&Route> = routes.iter().filter(|r| favorites.contains(&r.id)).collect();
    let favorites_view = html! {
        <section class="profile__card">
            <h2>{"Rutas favoritas"}</h2>
            if favorite_routes.is_empty() {
                <p class="muted">{"Todavía no tienes rutas favoritas."}</p>
            } else {
                <div class="table-scroll">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Nombre"}</th>
                                <th>{"Categoría"}</th>
                                <th>{"Puntos"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for favorite_routes.iter().map(|route| {
                                let route_id = route.id.clone();
                                let on_open_route = props.on_open_route.clone();
                                html! {
                                    <tr key={route.id.clone()}>
                                        <td>{&route.name}</td>
                                        <td>{route.category_label()}</td>
                                        <td>{points_label(route.points.len())}</td>
                                        <td class="table__actions">
                                            <FavoriteButton
                                                route_id={route.id.clone()}
                                                saved=true
                                                on_change={on_favorite_change.clone()}
                                            />
                                            <button
                                                class="btn-ghost"
                                                onclick={Callback::from(move |_| on_open_route.emit(route_id.clone()))}
                                            >
                                                {"Ver"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </div>
            }
        </section>
    };

    html! {
        <main class="profile">
            <nav class="profile__tabs" role="tablist">
                <button
                    class={classes!("tab", (*tab == ProfileTab::Personal).then_some("active"))}
                    onclick={select_tab(ProfileTab::Personal)}
                >
                    <span class="label">{"Datos personales"}</span>
                </button>
                <button
                    class={classes!("tab", (*tab == ProfileTab::Favorites).then_some("active"))}
                    onclick={select_tab(ProfileTab::Favorites)}
                >
                    <span class="label">{"Favoritas"}</span>
                </button>
            </nav>

            {match *tab {
                ProfileTab::Personal => personal,
                ProfileTab::Favorites => favorites_view,
            }}
        </main>
    }
}
