use std::io;

use anyhow::{anyhow, Result};

use crate::render::Render;
use crate::scanner::ScanReport;

pub struct JsonRender {}

impl Render for JsonRender {
    fn render<W: io::Write>(&self, w: &mut W, report: &ScanReport) -> Result<()> {
        w.write_all(format!("{}\n", serde_json::to_string(&report)?).as_bytes())
            .map_err(|_| anyhow!("write failed"))
    }
}
