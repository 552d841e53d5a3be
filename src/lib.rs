//! Seedable generators for class-constrained strings.
//!
//! The core is a weighted discrete sampler ([`weighted`]) and a password
//! synthesizer built on it ([`pass`]). Both draw from an explicitly passed
//! [`rng::RandomSource`], so the same seed always yields the same output.
//!
//! ```
//! use fakepass::{Faker, PassConfig};
//!
//! let mut faker = Faker::new(11);
//! let password = faker.password(&PassConfig { length: 32, ..PassConfig::default() });
//! assert_eq!(password.len(), 32);
//! ```

mod data;
pub mod faker;
pub mod lookup;
pub mod pass;
pub mod rng;
pub mod username;
pub mod weighted;

pub use faker::Faker;
pub use lookup::{Info, LookupError, MapParams, Param, Registry};
pub use pass::{PassConfig, PassType};
pub use rng::RandomSource;
pub use weighted::{Weighted, WeightedError};
