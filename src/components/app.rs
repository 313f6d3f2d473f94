// ============================================================================
// APP - Providers + página activa
// ============================================================================
// Sin router: la página es un enum en estado. El modal de acceso vive aquí
// para que cualquier página pueda pedir login.
// ============================================================================

use yew::prelude::*;

use crate::components::{AuthCard, Header, HomePage, Modal, ProfilePage};
use crate::hooks::{use_session_context, AlertContextProvider, SessionContextProvider};
use crate::viewmodels::AuthMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Profile,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <AlertContextProvider>
                <Shell />
            </AlertContextProvider>
        </SessionContextProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let session = use_session_context();
    let page = use_state(Page::default);
    let auth_modal = use_state(|| None::<AuthMode>);
    let focus_route_id = use_state(|| None::<String>);

    let open_login = {
        let auth_modal = auth_modal.clone();
        Callback::from(move |_| auth_modal.set(Some(AuthMode::Login)))
    };

    let close_auth = {
        let auth_modal = auth_modal.clone();
        Callback::from(move |_| auth_modal.set(None))
    };

    let switch_auth_mode = {
        let auth_modal = auth_modal.clone();
        Callback::from(move |mode: AuthMode| auth_modal.set(Some(mode)))
    };

    let go_home = {
        let page = page.clone();
        let focus_route_id = focus_route_id.clone();
        Callback::from(move |_| {
            focus_route_id.set(None);
            page.set(Page::Home);
        })
    };

    let go_profile = {
        let page = page.clone();
        Callback::from(move |_| page.set(Page::Profile))
    };

    let logout = {
        let logout = session.logout.clone();
        let go_home = go_home.clone();
        Callback::from(move |_| {
            logout.emit(());
            go_home.emit(());
        })
    };

    let open_route = {
        let page = page.clone();
        let focus_route_id = focus_route_id.clone();
        Callback::from(move |route_id: String| {
            focus_route_id.set(Some(route_id));
            page.set(Page::Home);
        })
    };

    let focus_consumed = {
        let focus_route_id = focus_route_id.clone();
        Callback::from(move |_| focus_route_id.set(None))
    };

    html! {
        <div class="app">
            <Header
                page={*page}
                on_home={go_home}
                on_profile={go_profile}
                on_login={open_login.clone()}
                on_logout={logout}
            />

            {match *page {
                Page::Home => html! {
                    <HomePage
                        on_require_login={open_login}
                        focus_route_id={(*focus_route_id).clone()}
                        on_focus_consumed={focus_consumed}
                    />
                },
                Page::Profile => html! { <ProfilePage on_open_route={open_route} /> },
            }}

            if let Some(mode) = *auth_modal {
                <Modal on_close={close_auth.clone()} class={classes!("modal--auth")}>
                    <AuthCard {mode} on_switch_mode={switch_auth_mode} on_success={close_auth} />
                </Modal>
            }
        </div>
    }
}
