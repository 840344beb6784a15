use crate::data::ConnectionProfile;
use crate::message::HostEvent;
use crate::plugin::Host;

/// Stand-alone host for a single profile: settings come from the profile,
/// notifications are kept so the caller can decide how things went.
pub struct ProfileHost {
    pub profile: ConnectionProfile,
    pub events: Vec<HostEvent>,
}

impl ProfileHost {
    pub fn new(profile: ConnectionProfile) -> Self {
        Self {
            profile,
            events: Vec::new(),
        }
    }

    /// Most recent error, if the last open attempt failed.
    pub fn error_message(&self) -> Option<&str> {
        match self.last_attempt() {
            Some(HostEvent::Error(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Whether the last open attempt succeeded.
    pub fn is_opened(&self) -> bool {
        self.last_attempt() == Some(&HostEvent::Opened)
    }

    // Close notifications say nothing about how the open went
    fn last_attempt(&self) -> Option<&HostEvent> {
        self.events
            .iter()
            .rev()
            .find(|e| !matches!(e, HostEvent::Closed))
    }
}

impl Host for ProfileHost {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.profile.setting(key)
    }

    fn notify_opened(&mut self) {
        tracing::debug!(profile = %self.profile.name, "connection opened");
        self.events.push(HostEvent::Opened);
    }

    fn notify_closed(&mut self) {
        tracing::debug!(profile = %self.profile.name, "connection closed");
        self.events.push(HostEvent::Closed);
    }

    fn notify_error(&mut self, message: &str) {
        tracing::error!(profile = %self.profile.name, "{}", message);
        self.events.push(HostEvent::Error(message.to_string()));
    }

    fn log(&self, component: &str, message: &str) {
        tracing::info!(component, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::{ConnectionState, FolderPlugin, ProtocolPlugin};

    fn create_test_host(server: &str, launcher: Option<&str>) -> ProfileHost {
        ProfileHost::new(ConnectionProfile {
            name: "Test".to_string(),
            server: server.to_string(),
            launcher: launcher.map(|s| s.to_string()),
        })
    }

    #[test]
    fn test_settings_come_from_profile() {
        let host = create_test_host("/srv", Some("nautilus"));
        assert_eq!(host.get_setting("server").as_deref(), Some("/srv"));
        assert_eq!(host.get_setting("launcher").as_deref(), Some("nautilus"));
    }

    #[test]
    fn test_error_message_is_latest() {
        let mut host = create_test_host("/srv", None);
        assert_eq!(host.error_message(), None);
        host.notify_error("first");
        host.notify_closed();
        host.notify_error("second");
        assert_eq!(host.error_message(), Some("second"));
        assert!(!host.is_opened());
    }

    #[test]
    fn test_is_opened_follows_last_attempt() {
        let mut host = create_test_host("/srv", None);
        assert!(!host.is_opened());

        host.notify_opened();
        assert!(host.is_opened());

        host.notify_closed();
        host.notify_error("No such file or directory (os error 2)");
        assert!(!host.is_opened());

        host.notify_opened();
        assert!(host.is_opened());
        assert_eq!(host.error_message(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_reused_host_after_failed_open() {
        let mut plugin = FolderPlugin::new(create_test_host("/tmp", Some("true")));
        assert_eq!(plugin.open(), ConnectionState::Opened);
        plugin.close();

        let mut host = plugin.into_host();
        host.profile.launcher = Some("definitely-not-a-real-binary-xyz".to_string());
        let mut plugin = FolderPlugin::new(host);
        assert_eq!(plugin.open(), ConnectionState::Failed);
        assert!(!plugin.host().is_opened());
        assert!(plugin.host().error_message().is_some());
    }

    #[test]
    fn test_failed_open_through_plugin() {
        let host = create_test_host("/tmp", Some("definitely-not-a-real-binary-xyz"));
        let mut plugin = FolderPlugin::new(host);
        plugin.init();
        assert_eq!(plugin.open(), ConnectionState::Failed);

        let host = plugin.into_host();
        assert!(!host.is_opened());
        assert!(host.error_message().is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_open_through_plugin() {
        let host = create_test_host("/tmp", Some("true"));
        let mut plugin = FolderPlugin::new(host);
        assert_eq!(plugin.open(), ConnectionState::Opened);
        assert!(plugin.host().is_opened());
        assert_eq!(plugin.host().error_message(), None);
    }
}
