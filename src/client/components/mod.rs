pub mod auth_modal;
pub mod brand_title;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod notice;
pub mod page;
pub mod pricing;
pub mod services;
pub mod testimonials;

pub use auth_modal::AuthModal;
pub use brand_title::BrandTitle;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use notice::SectionNotice;
pub use page::Page;
pub use pricing::PricingSection;
pub use services::Services;
pub use testimonials::TestimonialsSection;
