pub mod analysis;
pub mod error;
pub mod valuator;
