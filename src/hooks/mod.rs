pub mod session_context;
pub mod use_alert;
pub mod use_map;
pub mod use_require_auth;
pub mod use_session;

pub use session_context::{use_session_context, SessionContextProvider};
pub use use_alert::{use_alert, AlertContextProvider, UseAlertHandle};
pub use use_map::use_map;
pub use use_require_auth::{use_require_auth, UseRequireAuthHandle};
pub use use_session::{use_session, UseSessionHandle};
