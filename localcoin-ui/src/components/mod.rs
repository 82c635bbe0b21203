//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod badge;
pub mod loading;
pub mod map;
pub mod nav;

pub use badge::{ChangeBadge, StatusBadge};
pub use loading::Loading;
pub use map::AtmMap;
pub use nav::Nav;
