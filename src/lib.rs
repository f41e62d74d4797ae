pub mod canvas;
pub mod config;
pub mod error;
pub mod registry;
pub mod state;
pub mod template;
pub mod validate;
pub mod wasm;
