// ============================================================================
// FAVORITE BUTTON - Toggle optimista
// ============================================================================
// El estado cambia al instante; si el servidor falla se deshace y se avisa.
// Dos clics muy seguidos lanzan dos peticiones (no hay debounce).
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::{use_alert, use_require_auth, use_session_context};
use crate::services::ApiClient;
use crate::viewmodels::{
    favorite_error_message, FavoriteAction, FavoriteClick, FavoriteSet, FavoriteToggle, FavoritesAction,
};

/// Conjunto de favoritas compartido por las páginas (use_reducer)
impl Reducible for FavoriteSet {
    type Action = FavoritesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct FavoriteButtonProps {
    pub route_id: AttrValue,
    pub saved: bool,
    /// (route_id, saved) tras confirmar el servidor
    #[prop_or_default]
    pub on_change: Callback<(String, bool)>,
    /// Clic sin sesión
    #[prop_or_default]
    pub on_require_login: Callback<()>,
}

#[function_component(FavoriteButton)]
pub fn favorite_button(props: &FavoriteButtonProps) -> Html {
    let session = use_session_context();
    let alert = use_alert();
    let require_auth = use_require_auth(props.on_require_login.clone());
    let toggle = use_state(|| FavoriteToggle::new(props.saved));

    // El padre manda cuando cambia su conjunto
    {
        let toggle = toggle.clone();
        use_effect_with(props.saved, move |saved| {
            toggle.set(FavoriteToggle::new(*saved));
            || ()
        });
    }

    let onclick = {
        let toggle = toggle.clone();
        let route_id = props.route_id.to_string();
        let on_change = props.on_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let token = session.token().unwrap_or_default();
            let mut flipped = *toggle;
            let action = match flipped.click(!token.is_empty()) {
                FavoriteClick::Send(action) => action,
                FavoriteClick::NeedsLogin => {
                    require_auth.prompt();
                    return;
                }
            };
            toggle.set(flipped);

            let toggle = toggle.clone();
            let alert = alert.clone();
            let on_change = on_change.clone();
            let route_id = route_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let result = match action {
                    FavoriteAction::Add => api.add_favorite(&token, &route_id).await,
                    FavoriteAction::Remove => api.remove_favorite(&token, &route_id).await,
                };
                match result {
                    Ok(()) => {
                        log::info!("⭐ [FAVORITES] {} -> {:?}", route_id, action);
                        on_change.emit((route_id, flipped.saved));
                    }
                    Err(e) => {
                        log::error!("❌ [FAVORITES] Error en {:?} {}: {}", action, route_id, e);
                        let mut restored = flipped;
                        restored.rollback(action);
                        toggle.set(restored);
                        alert.error(favorite_error_message(&e));
                    }
                }
            });
        })
    };

    let saved = toggle.saved;
    html! {
        <button
            class={classes!("fav-btn", saved.then_some("fav-btn--saved"))}
            aria-pressed={saved.to_string()}
            title={if saved { "Quitar de favoritas" } else { "Guardar en favoritas" }}
            {onclick}
        >
            {if saved { "★" } else { "☆" }}
        </button>
    }
}
