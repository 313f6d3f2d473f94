use yew::prelude::*;

use crate::components::Page;
use crate::hooks::use_session_context;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub page: Page,
    pub on_home: Callback<()>,
    pub on_profile: Callback<()>,
    pub on_login: Callback<()>,
    pub on_logout: Callback<()>,
}

/// Cabecera común: marca, botón de inicio y menú de perfil
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session = use_session_context();
    let menu_open = use_state(|| false);

    let on_avatar = {
        let menu_open = menu_open.clone();
        let on_login = props.on_login.clone();
        let authenticated = session.is_authenticated();
        Callback::from(move |_: MouseEvent| {
            if authenticated {
                menu_open.set(!*menu_open);
            } else {
                on_login.emit(());
            }
        })
    };

    let menu_item = |label: &'static str, action: Callback<()>| {
        let menu_open = menu_open.clone();
        html! {
            <button
                class="profile-menu__item"
                role="menuitem"
                onclick={Callback::from(move |_| {
                    menu_open.set(false);
                    action.emit(());
                })}
            >
                {label}
            </button>
        }
    };

    let initial = session
        .user()
        .map(|user| user.initial())
        .unwrap_or_else(|| "👤".to_string());

    html! {
        <header class="header">
            <div class="header__left">
                if props.page == Page::Profile {
                    <button aria-label="Ir al inicio" class="btn-home" onclick={props.on_home.reform(|_| ())}>
                        {"←"}
                    </button>
                    <h1>{"Perfil"}</h1>
                } else {
                    <div class="brand">{"REX"}</div>
                }
            </div>

            <div class="header__right">
                <button class="icon-btn" aria-label="Perfil" onclick={on_avatar}>
                    <span>{initial}</span>
                </button>
                if *menu_open && session.is_authenticated() {
                    <div class="profile-menu open" role="menu" aria-label="Menú de perfil">
                        {menu_item("Mi perfil", props.on_profile.clone())}
                        {menu_item("Cerrar sesión", props.on_logout.clone())}
                    </div>
                }
            </div>
        </header>
    }
}
