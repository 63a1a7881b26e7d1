mod fixtures;

pub use fixtures::{FixtureSet, FixtureStore};
