/// Connection notifications a plugin sends back to its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Opened,
    Closed,
    Error(String),
}
