pub mod patch;

pub use patch::Field;
