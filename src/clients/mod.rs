//! Typed clients wrapping the generic `ResourceClient` handles.

pub mod product_client;

pub use product_client::*;
