pub mod agency;
pub mod location;
pub mod payment;
pub mod reservation;
pub mod review;
pub mod support_ticket;
pub mod user;
pub mod vehicle;
