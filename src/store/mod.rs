pub mod contribution;
pub mod employee;
