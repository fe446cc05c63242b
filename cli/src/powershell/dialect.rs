//! # PowerShell Listing Dialects
//!
//! File: cli/src/powershell/dialect.rs
//! Author: Christi Mahu
//!
//! Each dialect is a fixed `Win32_Process` query producing the same
//! header-less `ParentProcessId ProcessId` table. PowerShell 3.0 introduced the
//! CIM cmdlets; older hosts only have the WMI ones.
//!
use std::fmt;

/// Listing query flavors, ordered from newest to oldest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `Get-CimInstance`, PowerShell 3.0 and later.
    Cim,
    /// `Get-WmiObject`, any PowerShell.
    Wmi,
}

impl Dialect {
    /// Newest first; `for_version` takes the first one the host supports.
    pub const ALL: [Dialect; 2] = [Dialect::Cim, Dialect::Wmi];

    /// Lowest PowerShell major version able to run this dialect.
    pub fn min_version(self) -> i32 {
        match self {
            Dialect::Cim => 3,
            Dialect::Wmi => i32::MIN,
        }
    }

    pub fn query(self) -> &'static str {
        match self {
            Dialect::Cim => "Get-CimInstance -ClassName Win32_Process | Select-Object ParentProcessId, ProcessId | Format-Table -HideTableHeaders",
            Dialect::Wmi => "Get-WmiObject -Class Win32_Process | Select-Object ParentProcessId, ProcessId | Format-Table -HideTableHeaders",
        }
    }

    /// Picks the dialect for a PowerShell major version. Unknown versions are
    /// reported as 0 by the probe and therefore land on `Wmi`.
    pub fn for_version(major: i32) -> Dialect {
        Self::ALL
            .into_iter()
            .find(|dialect| major >= dialect.min_version())
            .unwrap_or(Dialect::Wmi)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Cim => write!(f, "cim"),
            Dialect::Wmi => write!(f, "wmi"),
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modern_versions_use_cim() {
        assert_eq!(Dialect::for_version(3), Dialect::Cim);
        assert_eq!(Dialect::for_version(5), Dialect::Cim);
        assert_eq!(Dialect::for_version(7), Dialect::Cim);
    }

    #[test]
    fn test_old_and_unknown_versions_use_wmi() {
        assert_eq!(Dialect::for_version(2), Dialect::Wmi);
        assert_eq!(Dialect::for_version(1), Dialect::Wmi);
        assert_eq!(Dialect::for_version(0), Dialect::Wmi);
        assert_eq!(Dialect::for_version(-1), Dialect::Wmi);
    }

    #[test]
    fn test_queries_request_same_columns() {
        for dialect in Dialect::ALL {
            let query = dialect.query();
            assert!(query.contains("Win32_Process"));
            assert!(query.contains("Select-Object ParentProcessId, ProcessId"));
            assert!(query.ends_with("Format-Table -HideTableHeaders"));
        }
        assert!(Dialect::Cim.query().starts_with("Get-CimInstance"));
        assert!(Dialect::Wmi.query().starts_with("Get-WmiObject"));
    }
}
