//! SVG record storage: upload, list, search, view, update, delete.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/svgs` | List all records, newest first |
//! | GET | `/api/svgs/search?q=` | Case-insensitive substring search |
//! | GET | `/api/svgs/{id}` | Fetch one record |
//! | POST | `/api/svgs` | Upload (multipart: name, description, svgFile) |
//! | PUT | `/api/svgs/{id}` | Update name/description |
//! | DELETE | `/api/svgs/{id}` | Hard delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validation;

pub use routes::routes;
pub use services::SvgService;
