pub mod api;
pub mod auth;
pub mod contact;
pub mod pricing;
pub mod testimonial;
