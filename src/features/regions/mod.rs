//! Indonesian administrative region catalog (wilayah).
//!
//! The catalog is loaded once from a [`RegionSource`] and stays read-only for
//! the lifetime of the process. It backs NIK decoding and the region pickers
//! used to compose a NIK.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Provinces (Provinsi) - 2-digit code
//! - Level 2: Regencies/Cities (Kabupaten/Kota) - 4-digit code, province-prefixed
//! - Level 3: Districts (Kecamatan) - 6-digit code, city-prefixed, carries a postal code
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/provinces` | List all provinces |
//! | GET | `/api/regions/provinces/{code}` | Get province by code |
//! | GET | `/api/regions/provinces/{code}/cities` | List cities in a province |
//! | GET | `/api/regions/cities/{code}` | Get city by code |
//! | GET | `/api/regions/cities/{code}/districts` | List districts in a city |
//! | GET | `/api/regions/districts/{code}` | Get district by code |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{CatalogError, RegionCatalog, RegionCatalogService};
