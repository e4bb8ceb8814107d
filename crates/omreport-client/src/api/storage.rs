//! `omreport storage` reports.

use crate::OmReport;
use omreport_core::{
    PDisk, Result, StorageControllerOutput, StorageEnclosureOutput, StoragePDiskOutput,
    StorageVDiskOutput,
};
use tracing::debug;

/// `omreport storage` reports
pub struct StorageApi<'a> {
    client: &'a OmReport,
}

impl<'a> StorageApi<'a> {
    pub(crate) const fn new(client: &'a OmReport) -> Self {
        Self { client }
    }

    /// RAID controllers
    pub fn controllers(&self) -> Result<StorageControllerOutput> {
        self.client.fetch(&["storage", "controller"])
    }

    /// Enclosures and backplanes
    pub fn enclosures(&self) -> Result<StorageEnclosureOutput> {
        self.client.fetch(&["storage", "enclosure"])
    }

    /// Virtual disks
    pub fn vdisks(&self) -> Result<StorageVDiskOutput> {
        self.client.fetch(&["storage", "vdisk"])
    }

    /// Physical disks attached to one controller
    pub fn pdisks(&self, controller_id: u32) -> Result<StoragePDiskOutput> {
        let controller = format!("controller={controller_id}");
        self.client.fetch(&["storage", "pdisk", &controller])
    }

    /// Physical disks on every controller, in controller order.
    ///
    /// Runs one report for the controller list and one per controller. The
    /// first failure stops the walk.
    pub fn all_pdisks(&self) -> Result<Vec<PDisk>> {
        let controllers = self.controllers()?.controllers;
        debug!(count = controllers.len(), "listing disks on every controller");

        let mut pdisks = Vec::new();
        for controller in controllers {
            pdisks.extend(self.pdisks(controller.id)?.pdisks);
        }
        Ok(pdisks)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{client, proxy, FakeRunner};

    #[test]
    fn pdisks_pass_controller_id() {
        let (_dir, path) = proxy(b"foo");
        let runner = FakeRunner::default().reply(
            "pdisk",
            include_bytes!("../../../omreport-core/testdata/omreport-storage-pdisk.xml"),
        );
        let om = client(&path, false, runner.clone());

        let out = om.storage().pdisks(0).unwrap();
        assert_eq!(out.pdisks.len(), 3);
        assert_eq!(
            runner.calls()[0],
            vec!["omreport", "storage", "pdisk", "controller=0", "-fmt", "xml"]
        );
    }

    #[test]
    fn all_pdisks_walks_every_controller() {
        let (_dir, path) = proxy(b"foo");
        let runner = FakeRunner::default()
            .reply(
                "controller",
                include_bytes!("../../../omreport-core/testdata/omreport-storage-controller.xml"),
            )
            .reply(
                "pdisk",
                include_bytes!("../../../omreport-core/testdata/omreport-storage-pdisk.xml"),
            );
        let om = client(&path, true, runner.clone());

        let disks = om.storage().all_pdisks().unwrap();
        assert_eq!(disks.len(), 6);

        let calls = runner.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[1][3], "controller=1");
        assert_eq!(calls[2][3], "controller=0");
    }

    #[test]
    fn tamper_stops_storage_reports() {
        let (_dir, path) = proxy(b"foo");
        let runner = FakeRunner::default();
        let om = client(&path, true, runner.clone());

        std::fs::write(&path, b"bar").unwrap();
        assert!(om.storage().vdisks().unwrap_err().is_tamper());
        assert!(runner.calls().is_empty());
    }
}
