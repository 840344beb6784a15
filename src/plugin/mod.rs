pub mod folder;

pub use folder::{ConnectionRequest, FolderPlugin};

/// Services the embedding application hands to a plugin.
pub trait Host {
    /// Read a value from the connection profile being opened.
    fn get_setting(&self, key: &str) -> Option<String>;

    fn notify_opened(&mut self);

    fn notify_closed(&mut self);

    fn notify_error(&mut self, message: &str);

    fn log(&self, component: &str, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Idle,
    Opening,
    Opened,
    Failed,
    Closed,
}

impl ConnectionState {
    pub fn label(self) -> &'static str {
        match self {
            ConnectionState::Idle => "idle",
            ConnectionState::Opening => "opening",
            ConnectionState::Opened => "opened",
            ConnectionState::Failed => "failed",
            ConnectionState::Closed => "closed",
        }
    }
}

pub trait ProtocolPlugin {
    fn info(&self) -> &PluginInfo;

    fn init(&mut self);

    fn open(&mut self) -> ConnectionState;

    fn close(&mut self) -> ConnectionState;
}
