pub mod history;
pub mod nik;
pub mod regions;
