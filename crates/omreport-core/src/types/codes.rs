//! Status, state, layout and bus protocol code tables.
//!
//! omreport encodes these as integers. Known values map to named variants,
//! anything else is kept verbatim in `Unrecognized` so callers can still
//! match exhaustively. An empty element decodes as code 0.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! code_table {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A code not present in the table
            Unrecognized(i64),
        }

        impl $name {
            /// Look up a raw code
            #[must_use]
            pub const fn from_code(code: i64) -> Self {
                match code {
                    $( $code => Self::$variant, )+
                    other => Self::Unrecognized(other),
                }
            }

            /// The raw code as printed by omreport
            #[must_use]
            pub const fn code(&self) -> i64 {
                match self {
                    $( Self::$variant => $code, )+
                    Self::Unrecognized(code) => *code,
                }
            }

            /// Returns true for codes outside the table
            #[must_use]
            pub const fn is_unrecognized(&self) -> bool {
                matches!(self, Self::Unrecognized(_))
            }
        }

        impl From<i64> for $name {
            fn from(code: i64) -> Self {
                Self::from_code(code)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $( Self::$variant => f.write_str($label), )+
                    Self::Unrecognized(code) => write!(f, "Unknown {} code {}", $kind, code),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                crate::xml::lenient::<D, i64>(deserializer).map(Self::from_code)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }
    };
}

code_table! {
    /// Health of a hardware component.
    Status, "status" {
        /// Component is healthy
        Ok = 2 => "OK",
        /// Component needs attention
        NonCritical = 3 => "Non-critical",
        /// Component has failed or is failing
        Critical = 4 => "Critical",
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Unrecognized(0)
    }
}

impl Status {
    /// Returns true if the component reports OK
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns true if the component reports Critical
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }
}

code_table! {
    /// Operational state of a storage component.
    State, "state" {
        Ready = 1 => "Ready",
        Failed = 2 => "Failed",
        Online = 4 => "Online",
        Offline = 8 => "Offline",
        Degraded = 32 => "Degraded",
        NonRaid = 4096 => "Non-RAID",
        Replacing = 2_097_152 => "Replacing",
        Rebuilding = 8_388_608 => "Rebuilding",
        BackgroundInitialization = 34_359_738_368 => "Background Initialization",
        Foreign = 274_877_906_944 => "Foreign",
        Clear = 549_755_813_888 => "Clear",
        DegradedRedundancy = 9_007_199_254_740_992 => "Degraded Redundancy",
    }
}

impl Default for State {
    fn default() -> Self {
        Self::Unrecognized(0)
    }
}

code_table! {
    /// RAID layout of a virtual disk.
    Layout, "layout" {
        Raid0 = 2 => "RAID-0",
        Raid1 = 4 => "RAID-1",
        Raid5 = 64 => "RAID-5",
        Raid6 = 128 => "RAID-6",
        Raid60 = 262_144 => "RAID-60",
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::Unrecognized(0)
    }
}

code_table! {
    /// Bus protocol of a disk.
    BusProtocol, "bus protocol" {
        Scsi = 1 => "SCSI",
        Ide = 2 => "IDE",
        Sata = 7 => "SATA",
        Sas = 8 => "SAS",
        Pcie = 9 => "PCIe",
    }
}

impl Default for BusProtocol {
    fn default() -> Self {
        Self::Unrecognized(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_labels() {
        assert_eq!(Status::from_code(2).to_string(), "OK");
        assert_eq!(Status::from_code(3).to_string(), "Non-critical");
        assert_eq!(State::from_code(8_388_608).to_string(), "Rebuilding");
        assert_eq!(
            State::from_code(9_007_199_254_740_992),
            State::DegradedRedundancy
        );
        assert_eq!(Layout::from_code(262_144).to_string(), "RAID-60");
        assert_eq!(BusProtocol::from_code(9).to_string(), "PCIe");
    }

    #[test]
    fn unknown_codes_render_as_decimal() {
        assert_eq!(Status::from_code(5).to_string(), "Unknown status code 5");
        assert_eq!(State::from_code(16).to_string(), "Unknown state code 16");
        assert_eq!(Layout::from_code(8).to_string(), "Unknown layout code 8");
        assert_eq!(
            BusProtocol::from_code(65).to_string(),
            "Unknown bus protocol code 65"
        );
    }

    #[test]
    fn code_roundtrips_through_table() {
        for code in [1, 2, 4, 8, 32, 4096, 13] {
            assert_eq!(State::from_code(code).code(), code);
        }
        assert!(Status::from_code(1).is_unrecognized());
    }

    #[test]
    fn status_helpers() {
        assert!(Status::Ok.is_ok());
        assert!(Status::Critical.is_critical());
        assert!(!Status::NonCritical.is_ok());
    }

    #[derive(Deserialize)]
    struct Codes {
        #[serde(rename = "ObjStatus", default)]
        status: Status,
        #[serde(rename = "ObjState", default)]
        state: State,
        #[serde(rename = "Layout", default)]
        layout: Layout,
    }

    #[test]
    fn decodes_codes_from_text() {
        let codes: Codes = crate::xml::decode(
            b"<OMA><ObjStatus>4</ObjStatus><ObjState>32</ObjState><Layout>64</Layout></OMA>",
        )
        .unwrap();
        assert_eq!(codes.status, Status::Critical);
        assert_eq!(codes.state, State::Degraded);
        assert_eq!(codes.layout, Layout::Raid5);
    }

    #[test]
    fn empty_code_is_zero() {
        let codes: Codes =
            crate::xml::decode(b"<OMA><ObjStatus></ObjStatus><ObjState/></OMA>").unwrap();
        assert_eq!(codes.status, Status::default());
        assert_eq!(codes.state.code(), 0);
        assert_eq!(codes.layout, Layout::Unrecognized(0));
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&Layout::Raid1).unwrap(), "\"RAID-1\"");
        assert_eq!(
            serde_json::to_string(&Status::Unrecognized(7)).unwrap(),
            "\"Unknown status code 7\""
        );
    }
}
