pub mod launch;

pub use launch::{SpawnResult, spawn};
