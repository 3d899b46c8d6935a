pub mod destination;
pub mod home;
