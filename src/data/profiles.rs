use crate::error::{FolderError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// A saved folder connection, the record the host reads settings from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionProfile {
    pub name: String,
    /// Path or server address handed to the launcher.
    pub server: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launcher: Option<String>,
}

impl ConnectionProfile {
    pub fn setting(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "server" => Some(self.server.clone()),
            "launcher" => self.launcher.clone(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileStore {
    #[serde(default, rename = "profile")]
    pub profiles: Vec<ConnectionProfile>,
}

impl ProfileStore {
    pub fn default_path() -> PathBuf {
        resolve_config_path(env::var("FOLDER_LAUNCHER_CONFIG").ok())
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn find(&self, name: &str) -> Result<&ConnectionProfile> {
        self.profiles
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| FolderError::ProfileNotFound(name.to_string()))
    }

    pub fn add(&mut self, profile: ConnectionProfile) -> Result<()> {
        if profile.name.trim().is_empty() {
            return Err(FolderError::Profile("Profile name cannot be empty".into()));
        }
        if profile.server.is_empty() {
            return Err(FolderError::Profile("Profile target cannot be empty".into()));
        }
        if self.find(&profile.name).is_ok() {
            return Err(FolderError::Profile(format!(
                "A profile named '{}' already exists",
                profile.name
            )));
        }

        self.profiles.push(profile);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<ConnectionProfile> {
        let idx = self
            .profiles
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| FolderError::ProfileNotFound(name.to_string()))?;
        Ok(self.profiles.remove(idx))
    }
}

/// An empty override counts as unset.
pub fn resolve_config_path(override_path: Option<String>) -> PathBuf {
    if let Some(path) = override_path
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folder-launcher")
        .join("profiles.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_override() {
        assert_eq!(
            resolve_config_path(Some("/etc/folders.toml".to_string())),
            PathBuf::from("/etc/folders.toml")
        );
    }

    #[test]
    fn test_config_path_empty_override_is_ignored() {
        assert_eq!(
            resolve_config_path(Some(String::new())),
            resolve_config_path(None)
        );
    }

    #[test]
    fn test_config_path_default_location() {
        let path = resolve_config_path(None);
        assert!(path.ends_with("folder-launcher/profiles.toml"));
    }

    fn create_test_profile(name: &str, server: &str, launcher: Option<&str>) -> ConnectionProfile {
        ConnectionProfile {
            name: name.to_string(),
            server: server.to_string(),
            launcher: launcher.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::load(&dir.path().join("profiles.toml")).unwrap();
        assert!(store.profiles.is_empty());
    }

    #[test]
    fn test_save_creates_parent_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("profiles.toml");

        let mut store = ProfileStore::default();
        store
            .add(create_test_profile("Docs", "/home/user/Documents", None))
            .unwrap();
        store
            .add(create_test_profile("NAS", "smb://nas/share", Some("dolphin")))
            .unwrap();
        store.save(&path).unwrap();

        let loaded = ProfileStore::load(&path).unwrap();
        assert_eq!(loaded.profiles, store.profiles);
    }

    #[test]
    fn test_load_hand_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.toml");
        fs::write(
            &path,
            r#"
[[profile]]
name = "Music"
server = "/srv/music"
launcher = "pcmanfm"

[[profile]]
name = "Home"
server = "~"
"#,
        )
        .unwrap();

        let store = ProfileStore::load(&path).unwrap();
        assert_eq!(store.profiles.len(), 2);
        assert_eq!(store.profiles[0].launcher.as_deref(), Some("pcmanfm"));
        assert_eq!(store.profiles[1].launcher, None);
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.toml");
        fs::write(&path, "[[profile]\nname = ").unwrap();
        assert!(matches!(
            ProfileStore::load(&path),
            Err(FolderError::TomlParse(_))
        ));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let mut store = ProfileStore::default();
        store.add(create_test_profile("Docs", "/tmp", None)).unwrap();
        assert_eq!(store.find("docs").unwrap().server, "/tmp");
        assert!(matches!(
            store.find("other"),
            Err(FolderError::ProfileNotFound(_))
        ));
    }

    #[test]
    fn test_add_rejects_duplicates_and_blanks() {
        let mut store = ProfileStore::default();
        store.add(create_test_profile("Docs", "/tmp", None)).unwrap();
        assert!(store.add(create_test_profile("DOCS", "/var", None)).is_err());
        assert!(store.add(create_test_profile("  ", "/var", None)).is_err());
        assert!(store.add(create_test_profile("Empty", "", None)).is_err());
        assert_eq!(store.profiles.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut store = ProfileStore::default();
        store.add(create_test_profile("Docs", "/tmp", None)).unwrap();
        let removed = store.remove("docs").unwrap();
        assert_eq!(removed.name, "Docs");
        assert!(store.profiles.is_empty());
        assert!(store.remove("docs").is_err());
    }

    #[test]
    fn test_profile_settings() {
        let profile = create_test_profile("NAS", "smb://nas", Some("nautilus"));
        assert_eq!(profile.setting("server").as_deref(), Some("smb://nas"));
        assert_eq!(profile.setting("launcher").as_deref(), Some("nautilus"));
        assert_eq!(profile.setting("colordepth"), None);
    }
}
