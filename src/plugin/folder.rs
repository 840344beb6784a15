use super::{ConnectionState, Host, PluginInfo, ProtocolPlugin};
use crate::actions::{SpawnResult, spawn};
use crate::data::{LauncherTable, resolve};

pub const FOLDER_PLUGIN: PluginInfo = PluginInfo {
    name: "FOLDER",
    description: "FOLDER - Open a folder",
    version: "1.2.0.0",
    icon: "remmina-folder",
};

const NO_TARGET_MESSAGE: &str = "No target specified";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRequest {
    pub launcher_id: Option<String>,
    pub target: String,
}

impl ConnectionRequest {
    pub fn from_host<H: Host + ?Sized>(host: &H) -> Self {
        Self {
            launcher_id: host.get_setting("launcher"),
            target: host.get_setting("server").unwrap_or_default(),
        }
    }
}

/// Opens a folder profile with an external launcher.
///
/// The spawned launcher is not tied to the connection: closing only tells the
/// host the connection is gone.
pub struct FolderPlugin<H: Host> {
    host: H,
    launchers: LauncherTable,
    state: ConnectionState,
    process_id: Option<u32>,
}

impl<H: Host> FolderPlugin<H> {
    pub fn new(host: H) -> Self {
        Self::with_launchers(host, LauncherTable::builtin())
    }

    pub fn with_launchers(host: H, launchers: LauncherTable) -> Self {
        Self {
            host,
            launchers,
            state: ConnectionState::Idle,
            process_id: None,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn process_id(&self) -> Option<u32> {
        self.process_id
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn log(&self, message: &str) {
        self.host.log(FOLDER_PLUGIN.name, message);
    }

    fn launch(&self, request: &ConnectionRequest) -> SpawnResult {
        if request.target.is_empty() {
            return SpawnResult::Failure {
                message: NO_TARGET_MESSAGE.to_string(),
            };
        }

        let executable = resolve(request.launcher_id.as_deref(), &self.launchers);
        spawn(&executable, &request.target)
    }
}

impl<H: Host> ProtocolPlugin for FolderPlugin<H> {
    fn info(&self) -> &PluginInfo {
        &FOLDER_PLUGIN
    }

    fn init(&mut self) {
        self.log("Plugin init");
    }

    fn open(&mut self) -> ConnectionState {
        self.log("Plugin open connection");
        self.state = ConnectionState::Opening;
        self.process_id = None;

        let request = ConnectionRequest::from_host(&self.host);
        match self.launch(&request) {
            SpawnResult::Success { process_id } => {
                self.process_id = Some(process_id);
                self.state = ConnectionState::Opened;
                self.host.notify_opened();
            }
            SpawnResult::Failure { message } => {
                self.state = ConnectionState::Failed;
                self.host.notify_error(&message);
            }
        }

        self.state
    }

    fn close(&mut self) -> ConnectionState {
        self.log("Plugin close connection");
        self.state = ConnectionState::Closed;
        self.process_id = None;
        self.host.notify_closed();
        self.state
    }
}
