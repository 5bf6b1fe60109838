//! Feature slices, one per screen.

pub mod customers;
pub mod users;
