use yew::prelude::*;

use crate::components::FavoriteButton;
use crate::models::route::points_label;
use crate::models::Route;

#[derive(Properties, PartialEq)]
pub struct RoutePreviewCardProps {
    pub route: Route,
    pub saved: bool,
    #[prop_or(false)]
    pub selected: bool,
    pub on_select: Callback<Route>,
    pub on_favorite_change: Callback<(String, bool)>,
    #[prop_or_default]
    pub on_require_login: Callback<()>,
}

/// Tarjeta del listado: nombre, categoría y número de puntos
#[function_component(RoutePreviewCard)]
pub fn route_preview_card(props: &RoutePreviewCardProps) -> Html {
    let route = &props.route;
    let onclick = {
        let route = route.clone();
        props.on_select.reform(move |_: MouseEvent| route.clone())
    };

    html! {
        <article
            class={classes!("route-preview", props.selected.then_some("route-preview--selected"))}
            {onclick}
        >
            <header class="route-preview__header">
                <h3 class="route-preview__title">{&route.name}</h3>
                <FavoriteButton
                    route_id={route.id.clone()}
                    saved={props.saved}
                    on_change={props.on_favorite_change.clone()}
                    on_require_login={props.on_require_login.clone()}
                />
            </header>
            <div class="route-preview__meta">
                <span class="route-preview__category">{route.category_label()}</span>
                <span class="route-preview__points">{points_label(route.points.len())}</span>
                if route.is_private() {
                    <span class="route-preview__private">{"🔒"}</span>
                }
            </div>
        </article>
    }
}
