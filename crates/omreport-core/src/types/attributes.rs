//! Physical disk attribute flags.

use serde::{Serialize, Serializer};

use crate::error::{OmReportError, Result};

/// Set of attribute flags on a physical disk.
///
/// omreport prints the mask as a string of binary digits; it is decoded
/// once when the report is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PDiskAttributes(u64);

impl PDiskAttributes {
    /// Disk is attached through a logical connector
    pub const LOGICAL_CONNECTOR: Self = Self(1 << 6);
    /// Disk is a global hot spare
    pub const GLOBAL_HOT_SPARE: Self = Self(1 << 7);
    /// Disk is a dedicated hot spare
    pub const DEDICATED_HOT_SPARE: Self = Self(1 << 8);
    /// Disk is not part of any RAID
    pub const NON_RAID: Self = Self(1 << 9);
    /// SMART predicts the disk will fail
    pub const FAILURE_PREDICTED: Self = Self(1 << 11);

    const NAMED: [(Self, &'static str); 5] = [
        (Self::LOGICAL_CONNECTOR, "logical-connector"),
        (Self::GLOBAL_HOT_SPARE, "global-hot-spare"),
        (Self::DEDICATED_HOT_SPARE, "dedicated-hot-spare"),
        (Self::NON_RAID, "non-raid"),
        (Self::FAILURE_PREDICTED, "failure-predicted"),
    ];

    /// Empty set
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wraps raw bits, unnamed bits included
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Raw bits
    #[must_use]
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Decodes a mask such as `00000000000000000010010000010000`.
    ///
    /// Surrounding whitespace is ignored and an empty mask is the empty set.
    pub fn parse_mask(mask: &str) -> Result<Self> {
        let mask = mask.trim();
        if mask.is_empty() {
            return Ok(Self::empty());
        }
        u64::from_str_radix(mask, 2)
            .map(Self)
            .map_err(|_| OmReportError::InvalidAttributesMask(mask.to_string()))
    }

    /// Returns true if every bit in `other` is set
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if the logical connector bit is set
    #[must_use]
    pub const fn logical_connector(&self) -> bool {
        self.contains(Self::LOGICAL_CONNECTOR)
    }

    /// Returns true if the disk is a global hot spare
    #[must_use]
    pub const fn global_hot_spare(&self) -> bool {
        self.contains(Self::GLOBAL_HOT_SPARE)
    }

    /// Returns true if the disk is a dedicated hot spare
    #[must_use]
    pub const fn dedicated_hot_spare(&self) -> bool {
        self.contains(Self::DEDICATED_HOT_SPARE)
    }

    /// Returns true if the disk is exposed as non-RAID
    #[must_use]
    pub const fn non_raid(&self) -> bool {
        self.contains(Self::NON_RAID)
    }

    /// Returns true if the disk reports a predicted failure
    #[must_use]
    pub const fn failure_predicted(&self) -> bool {
        self.contains(Self::FAILURE_PREDICTED)
    }

    /// Names of the named flags that are set
    pub fn names(&self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl std::ops::BitOr for PDiskAttributes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl Serialize for PDiskAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names())
    }
}
