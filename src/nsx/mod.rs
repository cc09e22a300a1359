//! NSX Manager API interaction.
//!
//! - [`client`] - authenticated HTTP calls against the manager
//! - [`xml`] - request payloads and listing scans
//! - [`directory`] - name to objectId resolution

pub mod client;
pub mod directory;
pub mod xml;

pub use client::{ApiResponse, ManagerApi, ManagerClient};
pub use directory::Directory;

/// The two listable object kinds this tool deals with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    SecurityGroup,
    IpSet,
}

impl ObjectKind {
    /// Path segment used in listing URLs.
    pub fn path(&self) -> &'static str {
        match self {
            ObjectKind::SecurityGroup => "securitygroup",
            ObjectKind::IpSet => "ipset",
        }
    }

    /// Human-readable label for messages.
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::SecurityGroup => "security group",
            ObjectKind::IpSet => "IP set",
        }
    }
}
