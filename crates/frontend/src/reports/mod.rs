pub mod p900_occupancy;
pub mod p901_income;
