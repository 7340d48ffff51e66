pub mod contact;
pub mod demo;
pub mod health_check;
pub mod home;
pub mod signup;
pub mod waitlist;

mod views;
