pub mod customer;
pub mod employee;
pub mod movie;
pub mod rental;

pub use customer::{Customer, CustomerRequest};
pub use employee::Employee;
pub use movie::{Movie, MovieRequest};
pub use rental::{RentalDetails, RentalRequest, RentalResponse, RentalStatus};
