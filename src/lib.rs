// ============================================================================
// REX - Cliente web de rutas (Yew + Mapbox)
// ============================================================================
// Capas:
// - Models: Estructuras compartidas con el API
// - Services: SOLO comunicación HTTP (+ orquestación mínima)
// - ViewModels: Estado + lógica pura, testeable sin navegador
// - Stores / Hooks: Estado compartido vía Context de Yew
// - Components: Vistas (solo cableado con el DOM)
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;

pub use components::App;
