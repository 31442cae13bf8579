//! Network interface enumeration.

use crate::error::Result;
use sysinfo::Networks;

/// Source of the network interface names known to the operating system.
pub trait InterfaceSource {
    /// List the current interface names.
    ///
    /// An error means the whole collection cycle is skipped.
    fn interface_names(&mut self) -> Result<Vec<String>>;
}

/// Returns true for loopback adapters (`lo`, `lo0`, ...), which are never sampled.
pub fn is_loopback(interface: &str) -> bool {
    interface.starts_with("lo")
}

/// Interface source backed by `sysinfo`.
pub struct SysinfoInterfaces {
    networks: Networks,
}

impl SysinfoInterfaces {
    /// Create a new source with an initial interface list.
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl Default for SysinfoInterfaces {
    fn default() -> Self {
        Self::new()
    }
}

impl InterfaceSource for SysinfoInterfaces {
    fn interface_names(&mut self) -> Result<Vec<String>> {
        // Picks up adapters added or removed since the last cycle.
        self.networks.refresh_list();

        let mut names: Vec<String> = self.networks.list().keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

impl<F> InterfaceSource for F
where
    F: FnMut() -> Result<Vec<String>>,
{
    fn interface_names(&mut self) -> Result<Vec<String>> {
        self()
    }
}
