//! Record for `omreport about`.

use serde::{Deserialize, Serialize};

use crate::xml::from_wire;

/// Output of `omreport about`: OMSA version information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AboutOutput {
    pub version: String,
    pub product_name: Option<String>,
}

#[derive(Deserialize)]
struct AboutWire {
    #[serde(rename = "About", default)]
    about: AboutInnerWire,
}

#[derive(Deserialize, Default)]
struct AboutInnerWire {
    #[serde(rename = "ProductVersion", default)]
    version: String,
    #[serde(rename = "ProductName", default)]
    product_name: Option<String>,
}

impl From<AboutWire> for AboutOutput {
    fn from(wire: AboutWire) -> Self {
        Self {
            version: wire.about.version,
            product_name: wire.about.product_name,
        }
    }
}

from_wire!(AboutOutput, AboutWire);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FromReport;

    #[test]
    fn decodes_about() {
        let out = AboutOutput::from_report(include_bytes!("../../testdata/omreport-about.xml"))
            .unwrap();
        assert_eq!(out.version, "8.5.0");
        assert_eq!(
            out.product_name.as_deref(),
            Some("Server Administrator")
        );
    }
}
