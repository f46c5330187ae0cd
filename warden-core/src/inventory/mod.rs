//! Host inventory (`hosts.json`)
//!
//! The inventory is an ordered list of [`Host`] entries addressed by name.
//! Mutations validate the resulting entry before committing it, so a rejected
//! edit leaves the inventory as it was.

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::models::Host;

/// Contents of `hosts.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Hosts in check order
    #[serde(default)]
    pub hosts: Vec<Host>,
}

/// Result of [`Inventory::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The host was appended
    Added,
    /// A host with that name already exists; nothing changed
    AlreadyExists,
}

/// Field updates for [`Inventory::edit`]; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEdit {
    /// New address
    pub host: Option<String>,
    /// New login user
    pub user: Option<String>,
    /// New threshold
    pub threshold: Option<u8>,
    /// New disk set (replaces the old one)
    pub disks: Option<Vec<String>>,
}

impl HostEdit {
    /// Returns true if no field would change
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.host.is_none() && self.user.is_none() && self.threshold.is_none() && self.disks.is_none()
    }
}

impl Inventory {
    /// Finds a host by exact name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Host> {
        self.hosts.iter().find(|h| h.name == name)
    }

    /// Appends a host unless one with the same name exists
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidHost`] if the entry is incomplete.
    pub fn add(&mut self, host: Host) -> InventoryResult<AddOutcome> {
        validate(&host)?;
        if self.find(&host.name).is_some() {
            return Ok(AddOutcome::AlreadyExists);
        }
        self.hosts.push(host);
        Ok(AddOutcome::Added)
    }

    /// Removes the host named `name`, returning it if present
    pub fn remove(&mut self, name: &str) -> Option<Host> {
        let index = self.hosts.iter().position(|h| h.name == name)?;
        Some(self.hosts.remove(index))
    }

    /// Applies `edit` to the host named `name`.
    ///
    /// Returns `Ok(None)` if no such host exists.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidHost`] if the edited entry is
    /// incomplete; the stored entry is left unchanged.
    pub fn edit(&mut self, name: &str, edit: HostEdit) -> InventoryResult<Option<&Host>> {
        let Some(index) = self.hosts.iter().position(|h| h.name == name) else {
            return Ok(None);
        };

        let mut updated = self.hosts[index].clone();
        if let Some(host) = edit.host {
            updated.host = host;
        }
        if let Some(user) = edit.user {
            updated.user = user;
        }
        if let Some(threshold) = edit.threshold {
            updated.threshold = threshold;
        }
        if let Some(disks) = edit.disks {
            updated.set_disks(disks);
        }
        validate(&updated)?;

        self.hosts[index] = updated;
        Ok(Some(&self.hosts[index]))
    }

    /// Hosts whose names are in `names`, in inventory order.
    ///
    /// An empty `names` selects every host.
    #[must_use]
    pub fn select(&self, names: &[String]) -> Vec<Host> {
        self.hosts
            .iter()
            .filter(|h| names.is_empty() || names.contains(&h.name))
            .cloned()
            .collect()
    }

    /// Names that appear more than once
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let mut duplicates: Vec<&str> = Vec::new();
        for host in &self.hosts {
            let name = host.name.as_str();
            if seen.contains(&name) {
                if !duplicates.contains(&name) {
                    duplicates.push(name);
                }
            } else {
                seen.push(name);
            }
        }
        duplicates
    }
}

fn validate(host: &Host) -> InventoryResult<()> {
    let invalid = |reason: &str| InventoryError::InvalidHost {
        name: host.name.clone(),
        reason: reason.to_string(),
    };

    if host.name.trim().is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if host.host.trim().is_empty() {
        return Err(invalid("address must not be empty"));
    }
    if host.disks.is_empty() {
        return Err(invalid("at least one disk is required"));
    }
    if host.disks.iter().any(|d| d.trim().is_empty()) {
        return Err(invalid("disk names must not be empty"));
    }
    Ok(())
}
