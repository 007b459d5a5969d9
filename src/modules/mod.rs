pub mod customers;
pub mod dashboard;
pub mod engineers;
pub mod inventory;
pub mod products;
pub mod sales;
pub mod services;
pub mod spare_parts;
