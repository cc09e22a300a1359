//! NSX object models held by the tool.
//!
//! All of these are transient, request-scoped copies; the manager owns the
//! real objects.

/// An ipset to be created: description always mirrors the name, value is a
/// bare address or `address/<prefix>`.
#[derive(Debug, Clone, PartialEq)]
pub struct IpSetSpec {
    pub name: String,
    pub description: String,
    pub value: String,
}

impl IpSetSpec {
    pub fn new(name: &str, value: String) -> IpSetSpec {
        IpSetSpec {
            name: name.to_string(),
            description: name.to_string(),
            value,
        }
    }
}

/// One object from a manager listing: display name plus the manager-assigned
/// identifier used in member URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryEntry {
    pub name: String,
    pub object_id: String,
}
