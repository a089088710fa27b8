pub mod contact;
pub mod sections;
pub mod testimonials;
