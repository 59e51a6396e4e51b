pub mod catalog;
pub mod client;
pub mod client_rental;
pub mod interest;
pub mod property;
pub mod rental;
