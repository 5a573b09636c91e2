pub mod calculator;
pub mod contact;
pub mod home;
pub mod name_wheel;
