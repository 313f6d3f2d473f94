use yew::prelude::*;

use crate::components::FavoriteButton;
use crate::models::route::format_lng_lat;
use crate::models::Route;

#[derive(Properties, PartialEq)]
pub struct RouteDetailsCardProps {
    pub route: Route,
    pub saved: bool,
    pub on_close: Callback<()>,
    pub on_favorite_change: Callback<(String, bool)>,
    #[prop_or_default]
    pub on_require_login: Callback<()>,
}

#[function_component(RouteDetailsCard)]
pub fn route_details_card(props: &RouteDetailsCardProps) -> Html {
    let route = &props.route;
    let points = route.lng_lat_points();

    html! {
        <div class="route-details-card">
            <header class="route-details-card__header">
                <h2 class="route-details-card__title">{&route.name}</h2>
                <FavoriteButton
                    route_id={route.id.clone()}
                    saved={props.saved}
                    on_change={props.on_favorite_change.clone()}
                    on_require_login={props.on_require_login.clone()}
                />
                <button class="route-details-card__close" onclick={props.on_close.reform(|_| ())}>
                    {"✕"}
                </button>
            </header>

            <section class="route-details-card__body">
                <p class="route-details-card__description">{&route.description}</p>
                <div class="route-details-card__info">
                    <span>{"🏷️ Categoría: "}<strong>{route.category_label()}</strong></span>
                    <span>{if route.is_private() { "🔒 Privada" } else { "🌐 Pública" }}</span>
                    <span>{format!("📍 {} puntos en la ruta", points.len())}</span>
                </div>
                <div class="route-details-card__points-list">
                    <h4>{"Puntos de la ruta"}</h4>
                    <ol>
                        { for points.iter().enumerate().map(|(i, point)| html! {
                            <li key={i}><code>{format_lng_lat(point, 4)}</code></li>
                        }) }
                    </ol>
                </div>
            </section>
        </div>
    }
}
