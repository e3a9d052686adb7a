use std::io;

use anyhow::{anyhow, Result};
use itertools::Itertools;

use crate::render::Render;
use crate::scanner::ScanReport;

pub struct CountRender {}

impl Render for CountRender {
    fn render<W: io::Write>(&self, w: &mut W, report: &ScanReport) -> Result<()> {
        let lines = report
            .groups
            .iter()
            .map(|g| format!("{}:{}\n", g.pattern, g.matches.len()))
            .join("");

        w.write_all(lines.as_bytes())
            .map_err(|_| anyhow!("Failed write"))
    }
}
