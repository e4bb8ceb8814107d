//! `omreport chassis` reports.

use crate::OmReport;
use omreport_core::{
    ChassisBatteriesOutput, ChassisFansOutput, ChassisMemoryOutput, ChassisOutput,
    ChassisPowerMonitoringOutput, ChassisPowerSuppliesOutput, ChassisProcessorsOutput,
    ChassisTempsOutput, Result,
};

/// `omreport chassis` reports
pub struct ChassisApi<'a> {
    client: &'a OmReport,
}

impl<'a> ChassisApi<'a> {
    pub(crate) const fn new(client: &'a OmReport) -> Self {
        Self { client }
    }

    /// Roll-up status of every chassis subsystem
    pub fn summary(&self) -> Result<ChassisOutput> {
        self.client.fetch(&["chassis"])
    }

    /// CMOS and RAID controller batteries
    pub fn batteries(&self) -> Result<ChassisBatteriesOutput> {
        self.client.fetch(&["chassis", "batteries"])
    }

    /// Fan probes
    pub fn fans(&self) -> Result<ChassisFansOutput> {
        self.client.fetch(&["chassis", "fans"])
    }

    /// Processors and their status probes
    pub fn processors(&self) -> Result<ChassisProcessorsOutput> {
        self.client.fetch(&["chassis", "processors"])
    }

    /// Installed memory and DIMMs
    pub fn memory(&self) -> Result<ChassisMemoryOutput> {
        self.client.fetch(&["chassis", "memory"])
    }

    /// Temperature probes
    pub fn temps(&self) -> Result<ChassisTempsOutput> {
        self.client.fetch(&["chassis", "temps"])
    }

    /// Power consumption probes
    pub fn power_monitoring(&self) -> Result<ChassisPowerMonitoringOutput> {
        self.client.fetch(&["chassis", "pwrmonitoring"])
    }

    /// Power supply units
    pub fn power_supplies(&self) -> Result<ChassisPowerSuppliesOutput> {
        self.client.fetch(&["chassis", "pwrsupplies"])
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{client, proxy, FakeRunner};

    macro_rules! fixture {
        ($name:literal) => {
            include_bytes!(concat!("../../../omreport-core/testdata/", $name))
        };
    }

    #[test]
    fn summary_decodes_rollup() {
        let (_dir, path) = proxy(b"foo");
        let runner = FakeRunner::default().reply("chassis", fixture!("omreport-chassis.xml"));
        let om = client(&path, true, runner.clone());

        let summary = om.chassis().summary().unwrap();
        assert!(!summary.all_ok());
        assert_eq!(runner.calls()[0], vec!["omreport", "chassis", "-fmt", "xml"]);
    }

    #[test]
    fn each_report_uses_its_subcommand() {
        let (_dir, path) = proxy(b"foo");
        let runner = FakeRunner::default()
            .reply("batteries", fixture!("omreport-chassis-batteries.xml"))
            .reply("fans", fixture!("omreport-chassis-fans.xml"))
            .reply("processors", fixture!("omreport-chassis-processors.xml"))
            .reply("memory", fixture!("omreport-chassis-memory.xml"))
            .reply("temps", fixture!("omreport-chassis-temps.xml"))
            .reply("pwrmonitoring", fixture!("omreport-chassis-pwrmonitoring.xml"))
            .reply("pwrsupplies", fixture!("omreport-chassis-pwrsupplies.xml"));
        let om = client(&path, false, runner.clone());
        let chassis = om.chassis();

        assert!(!chassis.batteries().unwrap().probes.is_empty());
        assert!(!chassis.fans().unwrap().probes.is_empty());
        assert!(!chassis.processors().unwrap().processors.is_empty());
        assert!(!chassis.memory().unwrap().dimms.is_empty());
        assert!(!chassis.temps().unwrap().probes.is_empty());
        assert!(!chassis.power_monitoring().unwrap().probes.is_empty());
        assert!(!chassis.power_supplies().unwrap().power_supplies.is_empty());

        let subcommands: Vec<String> = runner.calls().into_iter().map(|c| c[2].clone()).collect();
        assert_eq!(
            subcommands,
            [
                "batteries",
                "fans",
                "processors",
                "memory",
                "temps",
                "pwrmonitoring",
                "pwrsupplies"
            ]
        );
    }
}
