// ============================================================================
// USE SESSION HOOK - Usuario + token compartidos por toda la app
// ============================================================================
// El estado se hidrata de localStorage dentro del inicializador de use_state,
// así que los hijos nunca ven una sesión vacía en el primer render
// ============================================================================

use yew::prelude::*;

use crate::models::User;
use crate::stores::SessionStore;

#[derive(Clone)]
pub struct UseSessionHandle {
    /// Copia del estado en el último render
    pub state: SessionStore,
    /// Guarda y publica la sesión resultante de un login
    pub login: Callback<SessionStore>,
    pub logout: Callback<()>,
}

impl PartialEq for UseSessionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl UseSessionHandle {
    /// Fuera de un provider: sesión anónima que no se puede cambiar
    pub(crate) fn detached() -> Self {
        Self {
            state: SessionStore::default(),
            login: Callback::from(|_| log::warn!("⚠️ [SESSION] login sin SessionContextProvider")),
            logout: Callback::from(|_| ()),
        }
    }

    /// Token actual (None si no hay sesión)
    pub fn token(&self) -> Option<String> {
        self.state.bearer().map(str::to_string)
    }

    pub fn user(&self) -> Option<User> {
        self.state.user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let state = use_state(SessionStore::load);

    let login = {
        let state = state.clone();
        Callback::from(move |next: SessionStore| {
            next.persist();
            log::info!(
                "✅ [SESSION] Sesión iniciada como {}",
                next.user.as_ref().map(User::display_name).unwrap_or_default()
            );
            state.set(next);
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            SessionStore::clear_storage();
            log::info!("🚪 [SESSION] Sesión cerrada");
            state.set(SessionStore::default());
        })
    };

    UseSessionHandle {
        state: (*state).clone(),
        login,
        logout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_session_is_anonymous_and_ignores_login() {
        let handle = UseSessionHandle::detached();
        assert!(!handle.is_authenticated());
        assert_eq!(handle.token(), None);

        handle.login.emit(SessionStore::default().with_login(None, "abc".to_string()));
        assert_eq!(handle.state, SessionStore::default());
    }
}
