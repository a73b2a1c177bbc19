//! Data models for LightBnB

pub mod property;
pub mod reservation;
pub mod user;

// Re-export commonly used types
pub use property::{
    CreateProperty, FilterOptions, Price, Property, PropertyListing, PropertyQuery, Rating,
};
pub use reservation::GuestReservation;
pub use user::{CreateUser, User};
