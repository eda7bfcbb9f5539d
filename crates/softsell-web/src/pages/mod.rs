//! Page Components

mod contact;
mod home;

pub use contact::ContactSection;
pub use home::LandingPage;
