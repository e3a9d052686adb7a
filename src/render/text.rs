use std::io;

use anyhow::{anyhow, Result};
use itertools::Itertools;

use crate::render::Render;
use crate::scanner::ScanReport;

pub struct TextRender {}

impl Render for TextRender {
    fn render<W: io::Write>(&self, w: &mut W, report: &ScanReport) -> Result<()> {
        let lines = vec!["Matches:".to_string()]
            .into_iter()
            .chain(report.matches().map(|m| m.to_string()))
            .chain(vec![format!(
                "Elapsed time: {:.6} seconds",
                report.elapsed_seconds
            )])
            .map(|l| format!("{}\n", l))
            .join("");

        w.write_all(lines.as_bytes())
            .map_err(|_| anyhow!("Failed write"))
    }
}
