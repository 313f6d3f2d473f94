// ============================================================================
// USE REQUIRE AUTH - Ejecuta una acción solo con sesión
// ============================================================================
// Sin sesión abre el login; durante REQUIRE_AUTH_COOLDOWN_MS no se vuelve a
// abrir aunque lleguen más clics
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::session_context::use_session_context;
use crate::hooks::use_session::UseSessionHandle;
use crate::utils::REQUIRE_AUTH_COOLDOWN_MS;

#[derive(Clone)]
pub struct UseRequireAuthHandle {
    session: UseSessionHandle,
    open_login: Callback<()>,
    cooling_down: Rc<RefCell<bool>>,
}

impl UseRequireAuthHandle {
    /// Ejecuta `action` si hay usuario o token; devuelve si se ejecutó
    pub fn run<F: FnOnce()>(&self, action: F) -> bool {
        if self.session.is_authenticated() {
            action();
            return true;
        }
        self.prompt();
        false
    }

    /// Abre el login salvo que se acabe de abrir
    pub fn prompt(&self) {
        if *self.cooling_down.borrow() {
            return;
        }
        *self.cooling_down.borrow_mut() = true;
        log::info!("🔒 [AUTH] Acción protegida sin sesión, abriendo login");
        self.open_login.emit(());

        let cooling_down = self.cooling_down.clone();
        Timeout::new(REQUIRE_AUTH_COOLDOWN_MS, move || {
            *cooling_down.borrow_mut() = false;
        })
        .forget();
    }
}

#[hook]
pub fn use_require_auth(open_login: Callback<()>) -> UseRequireAuthHandle {
    let session = use_session_context();
    let cooling_down = use_mut_ref(|| false);

    UseRequireAuthHandle {
        session,
        open_login,
        cooling_down,
    }
}
