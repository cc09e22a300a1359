//! NSX XML payloads and listing scans.
//!
//! The create payload has a fixed shape, so it is templated directly. The
//! listing bodies are scanned with regexes rather than a full XML parser: NSX
//! puts an object's own `<objectId>` and `<name>` before any nested member
//! elements, so the first match inside each object block is the object
//! itself.

use crate::models::{DirectoryEntry, IpSetSpec};
use regex::Regex;
use std::sync::OnceLock;

use super::ObjectKind;

static SECURITYGROUP_BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();
static IPSET_BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();
static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
static OBJECT_ID_REGEX: OnceLock<Regex> = OnceLock::new();

fn block_regex(kind: ObjectKind) -> &'static Regex {
    let (cell, element) = match kind {
        ObjectKind::SecurityGroup => (&SECURITYGROUP_BLOCK_REGEX, "securitygroup"),
        ObjectKind::IpSet => (&IPSET_BLOCK_REGEX, "ipset"),
    };
    cell.get_or_init(|| {
        Regex::new(&format!(r"(?s)<{element}[ >].*?</{element}>")).expect("Invalid Regex")
    })
}

fn name_regex() -> &'static Regex {
    NAME_REGEX.get_or_init(|| Regex::new(r"<name>([^<]*)</name>").expect("Invalid Regex"))
}

fn object_id_regex() -> &'static Regex {
    OBJECT_ID_REGEX.get_or_init(|| Regex::new(r"<objectId>([^<]*)</objectId>").expect("Invalid Regex"))
}

/// Build the ipset creation payload.
pub fn ipset_payload(spec: &IpSetSpec) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\
         <ipset>\
         <objectId/>\
         <type>\
         <typeName/>\
         </type>\
         <description>{description}</description>\
         <name>{name}</name>\
         <revision>0</revision>\
         <objectTypeName/>\
         <value>{value}</value>\
         </ipset>",
        description = escape_xml(&spec.description),
        name = escape_xml(&spec.name),
        value = escape_xml(&spec.value),
    )
}

/// Scan a listing body for `{name, objectId}` pairs of the given object kind.
pub fn parse_listing(kind: ObjectKind, body: &str) -> Vec<DirectoryEntry> {
    block_regex(kind)
        .find_iter(body)
        .filter_map(|block| {
            let block = block.as_str();
            let name = name_regex().captures(block)?.get(1)?.as_str();
            let object_id = object_id_regex().captures(block)?.get(1)?.as_str();
            Some(DirectoryEntry {
                name: unescape_xml(name),
                object_id: object_id.to_string(),
            })
        })
        .collect()
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipset_payload_host_value_has_no_slash() {
        let spec = IpSetSpec::new("Web-Servers", "10.0.0.5".to_string());
        let xml = ipset_payload(&spec);
        assert!(xml.contains("<value>10.0.0.5</value>"), "payload: {}", xml);
        assert!(xml.contains("<name>Web-Servers</name>"));
        assert!(xml.contains("<description>Web-Servers</description>"));
    }

    #[test]
    fn test_ipset_payload_subnet_value() {
        let spec = IpSetSpec::new("App-Subnet", "10.1.0.0/24".to_string());
        let xml = ipset_payload(&spec);
        assert!(xml.contains("<value>10.1.0.0/24</value>"), "payload: {}", xml);
    }

    #[test]
    fn test_ipset_payload_escapes_text() {
        let spec = IpSetSpec::new("R&D <lab>", "10.3.0.0/16".to_string());
        let xml = ipset_payload(&spec);
        assert!(xml.contains("<name>R&amp;D &lt;lab&gt;</name>"));
    }

    #[test]
    fn test_parse_securitygroup_listing_skips_nested_members() {
        let body = "<list>\
            <securitygroup>\
              <objectId>securitygroup-10</objectId>\
              <type><typeName>SecurityGroup</typeName></type>\
              <name>App-SG</name>\
              <member>\
                <objectId>ipset-99</objectId>\
                <name>Old-Member</name>\
              </member>\
            </securitygroup>\
            <securitygroup>\
              <objectId>securitygroup-11</objectId>\
              <name>Db-SG</name>\
            </securitygroup>\
          </list>";

        let entries = parse_listing(ObjectKind::SecurityGroup, body);
        assert_eq!(
            entries,
            vec![
                DirectoryEntry {
                    name: "App-SG".to_string(),
                    object_id: "securitygroup-10".to_string(),
                },
                DirectoryEntry {
                    name: "Db-SG".to_string(),
                    object_id: "securitygroup-11".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_ipset_listing() {
        let body = "<list>\
            <ipset>\
              <objectId>ipset-4</objectId>\
              <name>Web-Servers</name>\
              <value>10.0.0.5</value>\
            </ipset>\
          </list>";
        let entries = parse_listing(ObjectKind::IpSet, body);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Web-Servers");
        assert_eq!(entries[0].object_id, "ipset-4");
    }

    #[test]
    fn test_parse_empty_listing() {
        assert!(parse_listing(ObjectKind::IpSet, "<list/>").is_empty());
    }
}
