//! Test harness for the admin console's integration tests.
//!
//! Tests describe the backend they expect with a [`TestBuilder`], which starts a mockito
//! server and registers the endpoints. JSON bodies come from the [`fixtures::factory`]
//! functions so tests do not depend on the console's own DTO types.

pub mod builder;
pub mod constant;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{TEST_ACCESS_TOKEN, TEST_REFRESHED_TOKEN, TEST_REFRESH_TOKEN},
        fixtures::factory,
        TestBuilder, TestSetup,
    };
}
