//! Records for the `omreport chassis` family of reports.

use serde::{Deserialize, Serialize};

use super::codes::Status;
use crate::xml::{available, from_wire, lenient, lenient_option};

// ============================================================================
// omreport chassis
// ============================================================================

/// Output of `omreport chassis`: roll-up status per subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChassisOutput {
    pub fans_status: Status,
    pub memory_status: Status,
    pub power_supplies_status: Status,
    pub power_management_status: Status,
    pub processors_status: Status,
    pub temperatures_status: Status,
    pub voltages_status: Status,
    pub hardware_log_status: Status,
    pub batteries_status: Status,
}

impl ChassisOutput {
    /// Subsystem names paired with their status, in display order
    #[must_use]
    pub fn subsystems(&self) -> [(&'static str, Status); 9] {
        [
            ("Fans", self.fans_status),
            ("Memory", self.memory_status),
            ("Power Supplies", self.power_supplies_status),
            ("Power Management", self.power_management_status),
            ("Processors", self.processors_status),
            ("Temperatures", self.temperatures_status),
            ("Voltages", self.voltages_status),
            ("Hardware Log", self.hardware_log_status),
            ("Batteries", self.batteries_status),
        ]
    }

    /// Returns true if every subsystem reports OK
    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.subsystems().iter().all(|(_, status)| status.is_ok())
    }
}

#[derive(Deserialize)]
struct ChassisWire {
    #[serde(rename = "Parent", default)]
    parent: ParentWire,
}

#[derive(Deserialize, Default)]
struct ParentWire {
    #[serde(default)]
    fans: ComputedStatus,
    #[serde(default)]
    memory: ComputedStatus,
    #[serde(default)]
    powersupply: ComputedStatus,
    #[serde(default)]
    powermonitoring: ComputedStatus,
    #[serde(default)]
    processor: ComputedStatus,
    #[serde(default)]
    temperatures: ComputedStatus,
    #[serde(default)]
    voltages: ComputedStatus,
    #[serde(default)]
    esmlog: ComputedStatus,
    #[serde(default)]
    batteries: ComputedStatus,
}

#[derive(Deserialize, Default)]
struct ComputedStatus {
    #[serde(default)]
    computedobjstatus: Status,
}

impl From<ChassisWire> for ChassisOutput {
    fn from(wire: ChassisWire) -> Self {
        let p = wire.parent;
        Self {
            fans_status: p.fans.computedobjstatus,
            memory_status: p.memory.computedobjstatus,
            power_supplies_status: p.powersupply.computedobjstatus,
            power_management_status: p.powermonitoring.computedobjstatus,
            processors_status: p.processor.computedobjstatus,
            temperatures_status: p.temperatures.computedobjstatus,
            voltages_status: p.voltages.computedobjstatus,
            hardware_log_status: p.esmlog.computedobjstatus,
            batteries_status: p.batteries.computedobjstatus,
        }
    }
}

from_wire!(ChassisOutput, ChassisWire);

// ============================================================================
// omreport chassis batteries
// ============================================================================

/// Output of `omreport chassis batteries`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChassisBatteriesOutput {
    #[serde(rename(deserialize = "BatteryObj"), default)]
    pub probes: Vec<BatteryProbe>,
}

/// A battery probe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryProbe {
    #[serde(rename(deserialize = "@index"), deserialize_with = "lenient")]
    pub id: u32,
    #[serde(rename(deserialize = "ProbeLocation"), default)]
    pub location: String,
    #[serde(rename(deserialize = "probeStatus"), default)]
    pub status: Status,
}

impl crate::FromReport for ChassisBatteriesOutput {
    fn from_report(xml: &[u8]) -> crate::Result<Self> {
        crate::xml::decode(xml)
    }
}

// ============================================================================
// omreport chassis fans
// ============================================================================

/// Output of `omreport chassis fans`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChassisFansOutput {
    pub probes: Vec<FanProbe>,
}

/// A fan speed probe. Readings are in RPM.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FanProbe {
    pub id: u32,
    pub reading: f64,
    pub status: Status,
    pub location: String,
    pub min_critical_threshold: Option<f64>,
    pub min_non_critical_threshold: Option<f64>,
}

#[derive(Deserialize)]
struct FansWire {
    #[serde(rename = "Chassis", default)]
    chassis: FansChassisWire,
}

#[derive(Deserialize, Default)]
struct FansChassisWire {
    #[serde(rename = "FanProbeList", default)]
    list: FanProbeListWire,
}

#[derive(Deserialize, Default)]
struct FanProbeListWire {
    #[serde(rename = "FanProbe", default)]
    probes: Vec<FanProbeWire>,
}

#[derive(Deserialize)]
struct FanProbeWire {
    #[serde(rename = "@index", deserialize_with = "lenient")]
    id: u32,
    #[serde(rename = "ProbeReading", deserialize_with = "lenient", default)]
    reading: f64,
    #[serde(rename = "ProbeStatus", default)]
    status: Status,
    #[serde(rename = "ProbeLocation", default)]
    location: String,
    #[serde(rename = "ProbeThresholds", default)]
    thresholds: ThresholdsWire,
}

/// Threshold block shared by fan, temperature and power probes.
#[derive(Deserialize, Default)]
struct ThresholdsWire {
    #[serde(rename = "LCThreshold", deserialize_with = "lenient_option", default)]
    lower_critical: Option<f64>,
    #[serde(rename = "LNCThreshold", deserialize_with = "lenient_option", default)]
    lower_non_critical: Option<f64>,
    #[serde(rename = "UCThreshold", deserialize_with = "lenient_option", default)]
    upper_critical: Option<f64>,
    #[serde(rename = "UNCThreshold", deserialize_with = "lenient_option", default)]
    upper_non_critical: Option<f64>,
}

impl From<FansWire> for ChassisFansOutput {
    fn from(wire: FansWire) -> Self {
        let probes = wire
            .chassis
            .list
            .probes
            .into_iter()
            .map(|p| FanProbe {
                id: p.id,
                reading: p.reading,
                status: p.status,
                location: p.location,
                min_critical_threshold: available(p.thresholds.lower_critical),
                min_non_critical_threshold: available(p.thresholds.lower_non_critical),
            })
            .collect();
        Self { probes }
    }
}

from_wire!(ChassisFansOutput, FansWire);

// ============================================================================
// omreport chassis processors
// ============================================================================

/// Output of `omreport chassis processors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChassisProcessorsOutput {
    pub processors: Vec<Processor>,
    pub probes: Vec<ProcessorProbe>,
}

/// A CPU socket. Speeds are in MHz.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Processor {
    pub id: u32,
    pub name: String,
    pub max_speed: f64,
    pub current_speed: f64,
    pub manufacturer: String,
    pub model: String,
    pub physical_cores: u32,
    pub virtual_cores: u32,
    pub status: Status,
}

/// Status flags reported by a CPU probe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessorProbe {
    pub id: u32,
    pub location: String,
    pub flags: ProcessorStatusFlags,
}

/// Individual CPU status bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorStatusFlags {
    #[serde(rename(deserialize = "CPUStatusIErr"), default)]
    pub internal_error: bool,
    #[serde(rename(deserialize = "CPUStatusThermTrip"), default)]
    pub therm_trip: bool,
    #[serde(rename(deserialize = "CPUStatusConfigErr"), default)]
    pub config_error: bool,
    #[serde(rename(deserialize = "CPUStatusPresenceDetected"), default)]
    pub presence_detected: bool,
    #[serde(rename(deserialize = "CPUStatusDisabled"), default)]
    pub disabled: bool,
    #[serde(rename(deserialize = "CPUStatusTermPresenceDetected"), default)]
    pub term_presence_detected: bool,
    #[serde(rename(deserialize = "CPUStatusThrottled"), default)]
    pub throttled: bool,
}

#[derive(Deserialize)]
struct ProcessorsWire {
    #[serde(rename = "ProcessorList", default)]
    processors: ProcessorListWire,
    #[serde(rename = "CPUStatusProbeList", default)]
    probes: CpuProbeListWire,
}

#[derive(Deserialize, Default)]
struct ProcessorListWire {
    #[serde(rename = "ProcessorConn", default)]
    items: Vec<ProcessorConnWire>,
}

#[derive(Deserialize, Default)]
struct CpuProbeListWire {
    #[serde(rename = "CPUStatusProbe", default)]
    items: Vec<CpuProbeWire>,
}

#[derive(Deserialize)]
struct ProcessorConnWire {
    #[serde(rename = "@index", deserialize_with = "lenient")]
    id: u32,
    #[serde(rename = "@status", default)]
    status: Status,
    #[serde(rename = "DevProcessor", default)]
    dev: DevProcessorWire,
}

#[derive(Deserialize, Default)]
struct DevProcessorWire {
    #[serde(rename = "ExtName", default)]
    name: String,
    #[serde(rename = "MaxSpeed", deserialize_with = "lenient", default)]
    max_speed: f64,
    #[serde(rename = "CurSpeed", deserialize_with = "lenient", default)]
    current_speed: f64,
    #[serde(rename = "Manufacturer", default)]
    manufacturer: String,
    #[serde(rename = "Brand", default)]
    model: String,
    #[serde(rename = "CoreCount", deserialize_with = "lenient", default)]
    physical_cores: u32,
    #[serde(rename = "ThreadCount", deserialize_with = "lenient", default)]
    virtual_cores: u32,
}

#[derive(Deserialize)]
struct CpuProbeWire {
    #[serde(rename = "@index", deserialize_with = "lenient")]
    id: u32,
    #[serde(rename = "ProbeLocation", default)]
    location: String,
    #[serde(rename = "ProcessorStatus", default)]
    flags: ProcessorStatusFlags,
}

impl From<ProcessorsWire> for ChassisProcessorsOutput {
    fn from(wire: ProcessorsWire) -> Self {
        let processors = wire
            .processors
            .items
            .into_iter()
            .map(|p| Processor {
                id: p.id,
                name: p.dev.name,
                max_speed: p.dev.max_speed,
                current_speed: p.dev.current_speed,
                manufacturer: p.dev.manufacturer,
                model: p.dev.model,
                physical_cores: p.dev.physical_cores,
                virtual_cores: p.dev.virtual_cores,
                status: p.status,
            })
            .collect();
        let probes = wire
            .probes
            .items
            .into_iter()
            .map(|p| ProcessorProbe {
                id: p.id,
                location: p.location,
                flags: p.flags,
            })
            .collect();
        Self { processors, probes }
    }
}

from_wire!(ChassisProcessorsOutput, ProcessorsWire);

// ============================================================================
// omreport chassis memory
// ============================================================================

/// Output of `omreport chassis memory`. Sizes are in KiB.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChassisMemoryOutput {
    pub total_physical_memory_size: u64,
    pub available_physical_memory_size: u64,
    pub dimms: Vec<Dimm>,
    pub status: Status,
}

/// A single memory module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimm {
    #[serde(rename(deserialize = "deviceSet"), deserialize_with = "lenient", default)]
    pub array_no: u32,
    #[serde(rename(deserialize = "AssetTag"), default)]
    pub asset_tag: String,
    #[serde(rename(deserialize = "errCount"), deserialize_with = "lenient", default)]
    pub errors: u64,
    #[serde(rename(deserialize = "mbErrCount"), deserialize_with = "lenient", default)]
    pub multi_bit_errors: u64,
    #[serde(rename(deserialize = "DeviceLocator"), default)]
    pub name: String,
    #[serde(rename(deserialize = "PartNumber"), default)]
    pub part_no: String,
    #[serde(rename(deserialize = "sbErrCount"), deserialize_with = "lenient", default)]
    pub single_bit_errors: u64,
}

#[derive(Deserialize)]
struct MemoryWire {
    #[serde(rename = "MemoryInfo", default)]
    info: MemoryInfoWire,
    #[serde(rename = "MemDevObj", default)]
    dimms: Vec<Dimm>,
    #[serde(rename = "ObjStatus", default)]
    status: Status,
}

#[derive(Deserialize, Default)]
struct MemoryInfoWire {
    #[serde(rename = "TotalPhysMemorySize", deserialize_with = "lenient", default)]
    total: u64,
    #[serde(rename = "AvailPhysMemorySize", deserialize_with = "lenient", default)]
    available: u64,
}

impl From<MemoryWire> for ChassisMemoryOutput {
    fn from(wire: MemoryWire) -> Self {
        Self {
            total_physical_memory_size: wire.info.total,
            available_physical_memory_size: wire.info.available,
            dimms: wire.dimms,
            status: wire.status,
        }
    }
}

from_wire!(ChassisMemoryOutput, MemoryWire);

// ============================================================================
// omreport chassis temps
// ============================================================================

/// Output of `omreport chassis temps`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChassisTempsOutput {
    pub probes: Vec<TemperatureProbe>,
}

/// A temperature probe. Readings are in tenths of a degree Celsius.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureProbe {
    #[serde(rename(deserialize = "@index"), deserialize_with = "lenient")]
    pub id: u32,
    #[serde(rename(deserialize = "ProbeReading"), deserialize_with = "lenient", default)]
    pub reading: f64,
    #[serde(rename(deserialize = "ProbeStatus"), default)]
    pub status: Status,
    #[serde(rename(deserialize = "ProbeLocation"), default)]
    pub location: String,
}

#[derive(Deserialize)]
struct TempsWire {
    #[serde(rename = "Chassis", default)]
    chassis: TempsChassisWire,
}

#[derive(Deserialize, Default)]
struct TempsChassisWire {
    #[serde(rename = "TemperatureProbeList", default)]
    list: TemperatureProbeListWire,
}

#[derive(Deserialize, Default)]
struct TemperatureProbeListWire {
    #[serde(rename = "TemperatureProbe", default)]
    probes: Vec<TemperatureProbe>,
}

impl From<TempsWire> for ChassisTempsOutput {
    fn from(wire: TempsWire) -> Self {
        Self {
            probes: wire.chassis.list.probes,
        }
    }
}

from_wire!(ChassisTempsOutput, TempsWire);

// ============================================================================
// omreport chassis pwrmonitoring
// ============================================================================

/// Output of `omreport chassis pwrmonitoring`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChassisPowerMonitoringOutput {
    pub probes: Vec<PowerProbe>,
    pub status: Status,
}

/// A power consumption or current probe.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PowerProbe {
    pub id: u32,
    pub name: String,
    pub reading: f64,
    pub status: Status,
    pub critical_threshold: Option<f64>,
    pub warning_threshold: Option<f64>,
}

#[derive(Deserialize)]
struct PowerMonitoringWire {
    #[serde(rename = "CurrentProbeList", default)]
    list: CurrentProbeListWire,
    #[serde(rename = "ObjStatus", default)]
    status: Status,
}

#[derive(Deserialize, Default)]
struct CurrentProbeListWire {
    #[serde(rename = "CurrentProbe", default)]
    probes: Vec<CurrentProbeWire>,
}

#[derive(Deserialize)]
struct CurrentProbeWire {
    #[serde(rename = "@index", deserialize_with = "lenient")]
    id: u32,
    #[serde(rename = "ProbeLocation", default)]
    name: String,
    #[serde(rename = "ProbeReading", deserialize_with = "lenient", default)]
    reading: f64,
    #[serde(rename = "ProbeStatus", default)]
    status: Status,
    #[serde(rename = "ProbeThresholds", default)]
    thresholds: ThresholdsWire,
}

impl From<PowerMonitoringWire> for ChassisPowerMonitoringOutput {
    fn from(wire: PowerMonitoringWire) -> Self {
        let probes = wire
            .list
            .probes
            .into_iter()
            .map(|p| PowerProbe {
                id: p.id,
                name: p.name,
                reading: p.reading,
                status: p.status,
                critical_threshold: available(p.thresholds.upper_critical),
                warning_threshold: available(p.thresholds.upper_non_critical),
            })
            .collect();
        Self {
            probes,
            status: wire.status,
        }
    }
}

from_wire!(ChassisPowerMonitoringOutput, PowerMonitoringWire);

// ============================================================================
// omreport chassis pwrsupplies
// ============================================================================

/// Output of `omreport chassis pwrsupplies`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChassisPowerSuppliesOutput {
    pub power_supplies: Vec<PowerSupply>,
}

/// A power supply unit. Wattages are in tenths of a watt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerSupply {
    #[serde(rename(deserialize = "@index"), deserialize_with = "lenient")]
    pub id: u32,
    #[serde(rename(deserialize = "InputRatedWatts"), deserialize_with = "lenient", default)]
    pub input_rated_watts: f64,
    #[serde(rename(deserialize = "FirmWareVersion"), default)]
    pub firmware_version: String,
    #[serde(rename(deserialize = "PMCapable"), default)]
    pub power_monitoring_capable: bool,
    #[serde(rename(deserialize = "OutputWatts"), deserialize_with = "lenient", default)]
    pub output_watts: f64,
    #[serde(rename(deserialize = "PSLocation"), default)]
    pub location: String,
    #[serde(rename(deserialize = "PSState"), default)]
    pub state: PowerSupplyState,
}

/// State flags of a power supply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerSupplyState {
    #[serde(rename(deserialize = "PSPresenceDetected"), default)]
    pub presence_detected: bool,
    #[serde(rename(deserialize = "PSFailureDetected"), default)]
    pub failure_detected: bool,
    #[serde(rename(deserialize = "PSPredictiveFailure"), default)]
    pub predictive_failure: bool,
    #[serde(rename(deserialize = "PSACLost"), default)]
    pub ac_lost: bool,
    #[serde(rename(deserialize = "PSACLostorOutofRange"), default)]
    pub ac_lost_or_out_of_range: bool,
    #[serde(rename(deserialize = "PSACPresentorOutofRange"), default)]
    pub ac_present_or_out_of_range: bool,
    #[serde(rename(deserialize = "PSConfigError"), default)]
    pub config_error: bool,
}

impl PowerSupplyState {
    /// Returns true if the supply is present and reports no fault
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        self.presence_detected
            && !self.failure_detected
            && !self.predictive_failure
            && !self.ac_lost
            && !self.ac_lost_or_out_of_range
            && !self.config_error
    }
}

#[derive(Deserialize)]
struct PowerSuppliesWire {
    #[serde(rename = "Chassis", default)]
    chassis: PowerSuppliesChassisWire,
}

#[derive(Deserialize, Default)]
struct PowerSuppliesChassisWire {
    #[serde(rename = "PowerSupplyList", default)]
    list: PowerSupplyListWire,
}

#[derive(Deserialize, Default)]
struct PowerSupplyListWire {
    #[serde(rename = "PowerSupply", default)]
    items: Vec<PowerSupply>,
}

impl From<PowerSuppliesWire> for ChassisPowerSuppliesOutput {
    fn from(wire: PowerSuppliesWire) -> Self {
        Self {
            power_supplies: wire.chassis.list.items,
        }
    }
}

from_wire!(ChassisPowerSuppliesOutput, PowerSuppliesWire);
