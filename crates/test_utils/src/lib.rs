//! Test Utilities
//!
//! Shared builders, fixtures, generators, and assertions used across the
//! workspace test suites. Builders carry sensible defaults so tests only
//! specify the fields they care about.

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::{assert_balanced, assert_decimal_approx};
pub use builders::{AccountBuilder, DraftBuilder, JobBuilder, OrderBuilder, SnapshotBuilder};
pub use fixtures::{MoneyFixtures, PersonFixtures, TemporalFixtures, WeightFixtures};
