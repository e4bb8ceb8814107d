//! Records for the `omreport storage` family of reports.

use serde::{Deserialize, Serialize};

use super::attributes::PDiskAttributes;
use super::codes::{BusProtocol, Layout, State, Status};
use crate::error::Result;
use crate::xml::{decode, from_wire, lenient, FromReport};

/// List of `DCStorageObject` entries under a named section.
#[derive(Deserialize)]
struct ObjectListWire<T> {
    #[serde(rename = "DCStorageObject", default = "Vec::new")]
    objects: Vec<T>,
}

impl<T> Default for ObjectListWire<T> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
        }
    }
}

// ============================================================================
// omreport storage controller
// ============================================================================

/// Output of `omreport storage controller`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StorageControllerOutput {
    pub controllers: Vec<Controller>,
}

/// A RAID controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controller {
    #[serde(rename(deserialize = "ControllerNum"), deserialize_with = "lenient", default)]
    pub id: u32,
    #[serde(rename(deserialize = "Name"), default)]
    pub name: String,
    #[serde(rename(deserialize = "ObjStatus"), default)]
    pub status: Status,
    #[serde(rename(deserialize = "ObjState"), default)]
    pub state: State,
}

#[derive(Deserialize)]
struct ControllersWire {
    #[serde(rename = "Controllers", default)]
    list: ObjectListWire<Controller>,
}

impl From<ControllersWire> for StorageControllerOutput {
    fn from(wire: ControllersWire) -> Self {
        Self {
            controllers: wire.list.objects,
        }
    }
}

from_wire!(StorageControllerOutput, ControllersWire);

// ============================================================================
// omreport storage enclosure
// ============================================================================

/// Output of `omreport storage enclosure`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StorageEnclosureOutput {
    pub enclosures: Vec<Enclosure>,
}

/// A disk enclosure or backplane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    #[serde(rename(deserialize = "EnclosureID"), deserialize_with = "lenient", default)]
    pub id: u32,
    #[serde(rename(deserialize = "ControllerNum"), deserialize_with = "lenient", default)]
    pub controller_id: u32,
    #[serde(rename(deserialize = "ObjStatus"), default)]
    pub status: Status,
    #[serde(rename(deserialize = "ObjState"), default)]
    pub state: State,
}

#[derive(Deserialize)]
struct EnclosuresWire {
    #[serde(rename = "Enclosures", default)]
    list: ObjectListWire<Enclosure>,
}

impl From<EnclosuresWire> for StorageEnclosureOutput {
    fn from(wire: EnclosuresWire) -> Self {
        Self {
            enclosures: wire.list.objects,
        }
    }
}

from_wire!(StorageEnclosureOutput, EnclosuresWire);

// ============================================================================
// omreport storage vdisk
// ============================================================================

/// Output of `omreport storage vdisk`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StorageVDiskOutput {
    pub vdisks: Vec<VDisk>,
}

/// A virtual disk. Size is in bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VDisk {
    #[serde(rename(deserialize = "DeviceID"), deserialize_with = "lenient", default)]
    pub id: u32,
    #[serde(rename(deserialize = "BusProtocol"), default)]
    pub bus_protocol: BusProtocol,
    #[serde(rename(deserialize = "Name"), default)]
    pub name: String,
    #[serde(rename(deserialize = "DeviceName"), default)]
    pub device_name: String,
    #[serde(rename(deserialize = "Layout"), default)]
    pub layout: Layout,
    #[serde(rename(deserialize = "ObjState"), default)]
    pub state: State,
    #[serde(rename(deserialize = "ObjStatus"), default)]
    pub status: Status,
    #[serde(rename(deserialize = "Length"), deserialize_with = "lenient", default)]
    pub size: u64,
}

#[derive(Deserialize)]
struct VDisksWire {
    #[serde(rename = "VirtualDisks", default)]
    list: ObjectListWire<VDisk>,
}

impl From<VDisksWire> for StorageVDiskOutput {
    fn from(wire: VDisksWire) -> Self {
        Self {
            vdisks: wire.list.objects,
        }
    }
}

from_wire!(StorageVDiskOutput, VDisksWire);

// ============================================================================
// omreport storage pdisk controller=<ID>
// ============================================================================

/// Output of `omreport storage pdisk controller=<ID>`.
///
/// Attribute masks are decoded while the report is parsed, so a mask that is
/// not a binary number fails the whole report with
/// [`OmReportError::InvalidAttributesMask`](crate::OmReportError::InvalidAttributesMask)
/// rather than yielding a disk with unknown flags. An empty mask is the
/// empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoragePDiskOutput {
    pub pdisks: Vec<PDisk>,
}

/// A physical disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PDisk {
    pub id: u32,
    pub attributes: PDiskAttributes,
    pub bus_protocol: BusProtocol,
    pub controller_id: u32,
    pub enclosure_id: u32,
    pub part_no: String,
    pub product_id: String,
    pub serial_no: String,
    pub slot_no: u32,
    pub status: Status,
    pub state: State,
    pub vendor: String,
}

impl PDisk {
    /// Returns true if the disk is in a failure predicted state
    #[must_use]
    pub const fn failure_predicted(&self) -> bool {
        self.attributes.failure_predicted()
    }

    /// Returns true if the disk is a global hot spare
    #[must_use]
    pub const fn global_hot_spare(&self) -> bool {
        self.attributes.global_hot_spare()
    }

    /// Returns true if the disk is a dedicated hot spare
    #[must_use]
    pub const fn dedicated_hot_spare(&self) -> bool {
        self.attributes.dedicated_hot_spare()
    }
}

#[derive(Deserialize)]
struct PDisksWire {
    #[serde(rename = "ArrayDisks", default)]
    list: ObjectListWire<PDiskWire>,
}

#[derive(Deserialize)]
struct PDiskWire {
    #[serde(rename = "AttributesMask", default)]
    attributes_mask: String,
    #[serde(rename = "BusProtocol", default)]
    bus_protocol: BusProtocol,
    #[serde(rename = "DeviceID", deserialize_with = "lenient", default)]
    id: u32,
    #[serde(rename = "ControllerNum", deserialize_with = "lenient", default)]
    controller_id: u32,
    #[serde(rename = "EnclosureID", deserialize_with = "lenient", default)]
    enclosure_id: u32,
    #[serde(rename = "PartNo", default)]
    part_no: String,
    #[serde(rename = "ProductID", default)]
    product_id: String,
    #[serde(rename = "DeviceSerialNumber", default)]
    serial_no: String,
    #[serde(rename = "EnclosureIndex", deserialize_with = "lenient", default)]
    slot_no: u32,
    #[serde(rename = "ObjStatus", default)]
    status: Status,
    #[serde(rename = "ObjState", default)]
    state: State,
    #[serde(rename = "Vendor", default)]
    vendor: String,
}

impl TryFrom<PDiskWire> for PDisk {
    type Error = crate::OmReportError;

    fn try_from(wire: PDiskWire) -> Result<Self> {
        Ok(Self {
            id: wire.id,
            attributes: PDiskAttributes::parse_mask(&wire.attributes_mask)?,
            bus_protocol: wire.bus_protocol,
            controller_id: wire.controller_id,
            enclosure_id: wire.enclosure_id,
            part_no: wire.part_no,
            product_id: wire.product_id,
            serial_no: wire.serial_no,
            slot_no: wire.slot_no,
            status: wire.status,
            state: wire.state,
            vendor: wire.vendor,
        })
    }
}

impl FromReport for StoragePDiskOutput {
    fn from_report(xml: &[u8]) -> Result<Self> {
        let wire: PDisksWire = decode(xml)?;
        let pdisks = wire
            .list
            .objects
            .into_iter()
            .map(PDisk::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { pdisks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OmReportError;

    #[test]
    fn blank_codes_decode_as_zero() {
        let out = StorageControllerOutput::from_report(include_bytes!(
            "../../testdata/omreport-storage-controller-blank.xml"
        ))
        .unwrap();
        assert_eq!(
            out.controllers,
            vec![
                Controller {
                    id: 0,
                    name: "PERC H730P Mini".into(),
                    status: Status::Unrecognized(0),
                    state: State::Ready,
                },
                Controller {
                    id: 1,
                    name: "PERC H840 Adapter".into(),
                    status: Status::NonCritical,
                    state: State::Unrecognized(0),
                },
            ]
        );
    }

    #[test]
    fn blank_size_decodes_as_zero() {
        let out = StorageVDiskOutput::from_report(
            b"<OMA><VirtualDisks><DCStorageObject>\
              <DeviceID>2</DeviceID><Length></Length><Layout>4</Layout>\
              </DCStorageObject></VirtualDisks></OMA>",
        )
        .unwrap();
        assert_eq!(out.vdisks.len(), 1);
        assert_eq!(out.vdisks[0].id, 2);
        assert_eq!(out.vdisks[0].size, 0);
        assert_eq!(out.vdisks[0].layout, Layout::Raid1);
    }

    #[test]
    fn decodes_controllers() {
        let out = StorageControllerOutput::from_report(include_bytes!(
            "../../testdata/omreport-storage-controller.xml"
        ))
        .unwrap();
        assert_eq!(
            out.controllers,
            vec![
                Controller {
                    id: 1,
                    name: "PERC H710P Mini".into(),
                    status: Status::Ok,
                    state: State::Ready,
                },
                Controller {
                    id: 0,
                    name: "PERC H810 Adapter".into(),
                    status: Status::Ok,
                    state: State::Ready,
                },
            ]
        );
    }

    #[test]
    fn decodes_enclosures() {
        let out = StorageEnclosureOutput::from_report(include_bytes!(
            "../../testdata/omreport-storage-enclosure.xml"
        ))
        .unwrap();
        assert_eq!(
            out.enclosures,
            vec![Enclosure {
                id: 3,
                controller_id: 0,
                status: Status::Ok,
                state: State::Ready,
            }]
        );
    }

    #[test]
    fn decodes_vdisks() {
        let out = StorageVDiskOutput::from_report(include_bytes!(
            "../../testdata/omreport-storage-vdisk.xml"
        ))
        .unwrap();
        assert_eq!(
            out.vdisks,
            vec![
                VDisk {
                    id: 0,
                    bus_protocol: BusProtocol::Sata,
                    name: "OS".into(),
                    device_name: "/dev/sda".into(),
                    layout: Layout::Raid1,
                    state: State::Ready,
                    status: Status::Ok,
                    size: 1_919_716_163_584,
                },
                VDisk {
                    id: 1,
                    bus_protocol: BusProtocol::Sata,
                    name: "CASS".into(),
                    device_name: "/dev/sdb".into(),
                    layout: Layout::Raid0,
                    state: State::Ready,
                    status: Status::Ok,
                    size: 1_919_716_163_584,
                },
            ]
        );
    }

    #[test]
    fn decodes_pdisks_and_attribute_flags() {
        let out = StoragePDiskOutput::from_report(include_bytes!(
            "../../testdata/omreport-storage-pdisk.xml"
        ))
        .unwrap();
        assert_eq!(out.pdisks.len(), 3);

        let first = &out.pdisks[0];
        assert_eq!(first.id, 8);
        assert_eq!(first.slot_no, 8);
        assert_eq!(first.enclosure_id, 3);
        assert_eq!(first.serial_no, "S37PNX0J502096");
        assert_eq!(first.vendor, "DELL(tm)");
        assert_eq!(first.bus_protocol, BusProtocol::Sata);
        assert_eq!(first.state, State::Online);
        assert_eq!(first.attributes.bits(), 0b0010_0100_0001_0000);
        assert!(!first.failure_predicted());

        let spare = &out.pdisks[2];
        assert_eq!(spare.id, 15);
        assert!(spare.failure_predicted());
        assert!(spare.global_hot_spare());
        assert!(!spare.dedicated_hot_spare());
    }

    #[test]
    fn malformed_mask_fails_decoding() {
        let xml = b"<OMA><ArrayDisks><DCStorageObject>\
            <AttributesMask>10x1</AttributesMask>\
            </DCStorageObject></ArrayDisks></OMA>";
        let err = StoragePDiskOutput::from_report(xml).unwrap_err();
        assert!(matches!(err, OmReportError::InvalidAttributesMask(_)));
    }

    #[test]
    fn empty_mask_is_no_flags() {
        let xml = b"<OMA><ArrayDisks><DCStorageObject>\
            <DeviceID>4</DeviceID><AttributesMask></AttributesMask>\
            </DCStorageObject></ArrayDisks></OMA>";
        let out = StoragePDiskOutput::from_report(xml).unwrap();
        assert_eq!(out.pdisks[0].id, 4);
        assert_eq!(out.pdisks[0].attributes.bits(), 0);
        assert!(!out.pdisks[0].failure_predicted());
    }

    #[test]
    fn unknown_codes_are_preserved() {
        let xml = b"<OMA><Controllers><DCStorageObject>\
            <ControllerNum>2</ControllerNum><Name>HBA330</Name>\
            <ObjStatus>6</ObjStatus><ObjState>64</ObjState>\
            </DCStorageObject></Controllers></OMA>";
        let out = StorageControllerOutput::from_report(xml).unwrap();
        assert_eq!(out.controllers[0].status, Status::Unrecognized(6));
        assert_eq!(out.controllers[0].state.to_string(), "Unknown state code 64");
    }
}
