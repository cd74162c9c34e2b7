pub mod seed;
pub mod service;

pub use service::MeterReadingService;
