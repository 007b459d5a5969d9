pub mod service;

pub use service::SparePartService;
