//! Domain models for the ipset loader.
//!
//! - [`IpSetSpec`] - ipset creation request data
//! - [`DirectoryEntry`] - name/objectId pair from a manager listing
//! - [`prefix_len`] / [`render_value`] - netmask handling

mod ipset;
mod netmask;

pub use ipset::{DirectoryEntry, IpSetSpec};
pub use netmask::{prefix_len, render_value};
