pub mod constant;
pub mod fixtures;
pub mod setup;

pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{TEST_EMAIL, TEST_PASSWORD, TEST_TOKEN},
        fixtures::{pricing::mock_pricing_tier, testimonial::mock_testimonial},
        TestSetup,
    };
}
