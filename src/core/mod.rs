pub mod cashflow;
pub mod curve;
pub mod request;
pub mod terms;
