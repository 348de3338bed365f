pub mod amount;
pub mod stock;
