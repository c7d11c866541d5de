mod city;
mod district;
mod province;

pub use city::City;
pub use district::District;
pub use province::Province;
