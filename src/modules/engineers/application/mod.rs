pub mod service;

pub use service::EngineerService;
