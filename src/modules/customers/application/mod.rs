pub mod service;

pub use service::CustomerService;
