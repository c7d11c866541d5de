//! In-process log of recent NIK lookups.
//!
//! Holds at most `HISTORY_MAX_ENTRIES` entries, newest first, one per NIK.
//! The log lives in memory and is lost on restart.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/history` | List entries |
//! | POST | `/api/history` | Decode a NIK and record the outcome |
//! | DELETE | `/api/history/{nik}` | Remove one entry |
//! | DELETE | `/api/history` | Remove all entries |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
