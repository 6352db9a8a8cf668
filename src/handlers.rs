pub mod health;
pub mod home;
pub mod municipalities;
pub mod prefectures;
