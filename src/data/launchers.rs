use crate::error::{FolderError, Result};
use std::collections::HashSet;

/// Built-in launchers in display order. The first one is the auto-detect entry.
const BUILTIN_LAUNCHERS: &[(&str, &str)] = &[
    ("xdg-open", "Automatically detected"),
    ("gnome-open", "Open for GNOME"),
    ("nautilus", "Nautilus"),
    ("pcmanfm", "PCManFM"),
    ("dolphin", "Dolphin Browser"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherEntry {
    pub identifier: String,
    pub display_name: String,
}

impl LauncherEntry {
    pub fn new(identifier: &str, display_name: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LauncherTable {
    entries: Vec<LauncherEntry>,
}

impl LauncherTable {
    pub fn new(entries: Vec<LauncherEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(FolderError::InvalidLauncherTable(
                "at least one launcher is required".into(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.identifier.is_empty() {
                return Err(FolderError::InvalidLauncherTable(
                    "launcher identifier cannot be empty".into(),
                ));
            }
            if !seen.insert(entry.identifier.as_str()) {
                return Err(FolderError::InvalidLauncherTable(format!(
                    "duplicate launcher '{}'",
                    entry.identifier
                )));
            }
        }

        Ok(Self { entries })
    }

    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_LAUNCHERS
                .iter()
                .map(|(id, name)| LauncherEntry::new(id, name))
                .collect(),
        }
    }

    pub fn auto_detect(&self) -> &LauncherEntry {
        // Non-empty by construction
        &self.entries[0]
    }

    pub fn get(&self, identifier: &str) -> Option<&LauncherEntry> {
        self.entries.iter().find(|e| e.identifier == identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LauncherEntry> {
        self.entries.iter()
    }
}

impl Default for LauncherTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Pick the executable for a connection.
///
/// Any non-empty `launcher_id` is used as-is, even if the table doesn't list it.
/// The table only drives auto-detection and what gets shown to the user.
pub fn resolve(launcher_id: Option<&str>, table: &LauncherTable) -> String {
    match launcher_id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => table.auto_detect().identifier.clone(),
    }
}
