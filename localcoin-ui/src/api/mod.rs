//! Market data API

mod client;

pub use client::*;
