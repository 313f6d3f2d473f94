// ============================================================================
// SESSION CONTEXT - Compartir la sesión entre componentes
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session, UseSessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app; la sesión se crea una sola vez aquí
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session_handle = use_session();

    {
        let restored = session_handle.is_authenticated();
        use_effect_with((), move |_| {
            if restored {
                log::info!("🔑 [SESSION] Sesión restaurada desde localStorage");
            }
            || ()
        });
    }

    html! {
        <ContextProvider<UseSessionHandle> context={session_handle}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}

/// Sesión del provider más cercano
#[hook]
pub fn use_session_context() -> UseSessionHandle {
    use_context::<UseSessionHandle>().unwrap_or_else(|| {
        log::warn!("⚠️ [SESSION] use_session_context() fuera de SessionContextProvider");
        UseSessionHandle::detached()
    })
}
