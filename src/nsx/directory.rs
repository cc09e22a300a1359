//! Name to objectId resolution.
//!
//! The API only addresses objects by manager-assigned identifiers, so each
//! lookup lists everything of that kind in scope and scans for the first name
//! match. Listings are fetched fresh on every lookup; results always reflect
//! the manager's current state, at the cost of repeated GETs when the same
//! name appears on many rows.

use crate::diag::DebugLog;
use crate::error::{Error, Result};

use super::client::ManagerApi;
use super::{xml, ObjectKind};

pub struct Directory<'a, C: ManagerApi> {
    client: &'a C,
    debug_log: &'a DebugLog,
}

impl<'a, C: ManagerApi> Directory<'a, C> {
    pub fn new(client: &'a C, debug_log: &'a DebugLog) -> Directory<'a, C> {
        Directory { client, debug_log }
    }

    /// Identifier of the security group called `name`.
    pub fn security_group_id(&self, name: &str) -> Result<String> {
        self.resolve(ObjectKind::SecurityGroup, name)
    }

    /// Identifier of the ipset called `name`.
    pub fn ipset_id(&self, name: &str) -> Result<String> {
        self.resolve(ObjectKind::IpSet, name)
    }

    fn resolve(&self, kind: ObjectKind, name: &str) -> Result<String> {
        let response = self.client.list(kind)?;
        if response.status != 200 {
            log::warn!(
                "listing {}s returned status {}",
                kind.label(),
                response.status
            );
            self.debug_log.append(&response.body)?;
            return Err(Error::UnexpectedStatus {
                operation: match kind {
                    ObjectKind::SecurityGroup => "security group listing",
                    ObjectKind::IpSet => "IP set listing",
                },
                status: response.status,
            });
        }

        xml::parse_listing(kind, &response.body)
            .into_iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.object_id)
            .ok_or_else(|| Error::NotFound {
                kind: kind.label(),
                name: name.to_string(),
            })
    }
}
