pub mod home;
pub mod municipality;
pub mod not_found;
pub mod prefecture;
