//! Modules layer - components that live outside the server request path
//!
//! Currently holds the gallery: the client-side consumer of the API.

pub mod gallery;
