pub mod service;

pub use service::SaleService;
