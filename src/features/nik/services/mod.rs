pub mod calendar;
pub(crate) mod decoder;
mod encoder;
mod nik_service;

pub use decoder::NikDecoder;
pub use encoder::{encode, encode_parsed};
pub use nik_service::{GeneratedNik, NikService};
