// Utils compartidos

pub mod constants;
pub mod generation;
pub mod mapbox_ffi;
pub mod storage;
pub mod validation;

pub use constants::*;
pub use generation::Generation;
pub use storage::*;
pub use validation::*;
