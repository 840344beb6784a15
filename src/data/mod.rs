pub mod launchers;
pub mod profiles;

pub use launchers::{LauncherEntry, LauncherTable, resolve};
pub use profiles::{ConnectionProfile, ProfileStore};
