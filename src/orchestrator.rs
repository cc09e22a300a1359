//! Row-by-row driver.
//!
//! Rows are processed strictly in file order, one request in flight at a
//! time. A failing row is reported and counted, never fatal; only transport
//! and file I/O errors abort the run. There is no rollback: a failed
//! membership add leaves earlier ipset creations in place.

use crate::diag::DebugLog;
use crate::error::{Error, Result};
use crate::input::{NumberedRow, Row};
use crate::models::{self, IpSetSpec};
use crate::nsx::{xml, Directory, ManagerApi};
use colored::Colorize;

/// Expected status for ipset creation.
const CREATED: u16 = 201;
/// Expected status for member addition.
const OK: u16 = 200;

/// Per-run counters. The exit code is derived from `failed`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    pub created: u32,
    pub members_added: u32,
    pub failed: u32,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

enum RowOutcome {
    Created,
    MemberAdded,
    Failed,
}

pub struct Orchestrator<'a, C: ManagerApi> {
    client: &'a C,
    debug_log: &'a DebugLog,
    debug: bool,
}

impl<'a, C: ManagerApi> Orchestrator<'a, C> {
    pub fn new(client: &'a C, debug_log: &'a DebugLog, debug: bool) -> Orchestrator<'a, C> {
        Orchestrator {
            client,
            debug_log,
            debug,
        }
    }

    /// Process every row, best-effort, and report what happened.
    pub fn run(&self, rows: impl Iterator<Item = Result<NumberedRow>>) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for item in rows {
            let (line, result) = match item {
                Ok(numbered) => (numbered.line, self.process_row(&numbered.row)),
                // MalformedRow from the reader already carries its line
                Err(e) => (0, Err(e)),
            };
            match result {
                Ok(RowOutcome::Created) => summary.created += 1,
                Ok(RowOutcome::MemberAdded) => summary.members_added += 1,
                Ok(RowOutcome::Failed) => summary.failed += 1,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e @ Error::MalformedRow { .. }) => {
                    log::warn!("{e}");
                    println!("{} {e}", "Skipped:".red());
                    summary.failed += 1;
                }
                Err(e) => {
                    log::warn!("line {line}: {e}");
                    println!("{} line {line}: {e}", "Failed:".red());
                    summary.failed += 1;
                }
            }
        }

        log::info!(
            "run finished: created={} members_added={} failed={}",
            summary.created,
            summary.members_added,
            summary.failed
        );
        Ok(summary)
    }

    fn process_row(&self, row: &Row) -> Result<RowOutcome> {
        match row {
            Row::IpSet {
                name,
                address,
                netmask,
            } => self.create_ipset(name, address, netmask),
            Row::Membership { group, ipset } => self.add_membership(group, ipset),
        }
    }

    fn create_ipset(&self, name: &str, address: &str, netmask: &str) -> Result<RowOutcome> {
        let prefix = models::prefix_len(netmask)?;
        let value = models::render_value(address, prefix);
        let spec = IpSetSpec::new(name, value.clone());

        println!("Creating IPset {name}");
        let response = self.client.create_ipset(&xml::ipset_payload(&spec))?;

        if response.status == CREATED {
            println!("{} creating IPset {name} - {value}", "Success".green());
            if self.debug {
                self.debug_log.append(&response.body)?;
            }
            Ok(RowOutcome::Created)
        } else {
            log::warn!("create IPset {name} returned status {}", response.status);
            println!(
                "{} creating IPset {name} (status {})",
                "Error".red(),
                response.status
            );
            self.debug_log.append(&response.body)?;
            Ok(RowOutcome::Failed)
        }
    }

    fn add_membership(&self, group: &str, ipset: &str) -> Result<RowOutcome> {
        let directory = Directory::new(self.client, self.debug_log);

        let group_id = directory.security_group_id(group)?;
        if self.debug {
            println!("{group} = {group_id}");
        }
        let member_id = directory.ipset_id(ipset)?;
        if self.debug {
            println!("{ipset} = {member_id}");
        }

        let response = self.client.add_member(&group_id, &member_id)?;
        if response.status == OK {
            println!("{ipset} added as member of {group}");
            Ok(RowOutcome::MemberAdded)
        } else {
            log::warn!(
                "add member {ipset} to {group} returned status {}",
                response.status
            );
            println!("{} adding {ipset} to Security-Group {group}", "Error".red());
            self.debug_log.append(&response.body)?;
            Ok(RowOutcome::Failed)
        }
    }
}
