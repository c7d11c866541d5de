//! NIK (Nomor Induk Kependudukan) decoding and composition.
//!
//! A NIK is 16 digits: province (2), city (2), district (2), day of birth (2,
//! plus 40 for women), month (2), two-digit year (2) and a registration
//! sequence (4). Decoding resolves the region prefix against the region
//! catalog and derives age, birthday countdown, zodiac sign and Javanese
//! pasaran from the birth date.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/nik/validate?nik=` | Decode a NIK |
//! | POST | `/api/validate/nik` | Decode a NIK sent as `{"nik": "..."}` |
//! | POST | `/api/nik/generate` | Compose a NIK and decode it back |

pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use error::NikError;
pub use services::NikService;
