pub mod params;
pub mod platform;
pub mod profile;
pub mod services;
pub mod shared;
pub mod tools;
