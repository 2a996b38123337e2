// crates/ayayron-app/src/pages/mod.rs
// Page components for Ayayron

mod home;

pub use home::Homepage;
