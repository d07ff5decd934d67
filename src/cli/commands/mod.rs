pub mod describe;
pub mod find;
