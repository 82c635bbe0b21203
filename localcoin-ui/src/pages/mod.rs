//! Pages
//!
//! Top-level page components for each route.

pub mod atm;
pub mod crypto;
pub mod home;

pub use atm::AtmLocator;
pub use crypto::Crypto;
pub use home::Home;
