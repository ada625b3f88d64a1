pub mod customer;
pub mod employee;
pub mod ops;
pub mod vendor;
