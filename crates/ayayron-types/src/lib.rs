// crates/ayayron-types/src/lib.rs
// Shared route table and view model for the Ayayron front ends (native + WASM compatible)
// No browser-only dependencies allowed here

pub mod components;
pub mod config;
pub mod error;
pub mod goldfish;
pub mod routes;
pub mod view;

pub use components::{Homepage, NavBar, NavBarState, Render, RenderContext, RootShell, Router};
pub use config::{GoldfishConfig, NavBarConfig, ShellConfig};
pub use error::{AppError, Result};
pub use goldfish::GoldfishApp;
pub use routes::{Location, Route, RouteError, RouteTable, View};
pub use view::{Element, ViewNode};
