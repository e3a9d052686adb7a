use std::io;

use anyhow::{anyhow, Result};

use crate::error::MatchEngineError;
use crate::scanner::ScanReport;

mod text;
pub use self::text::TextRender;

mod json;
pub use self::json::JsonRender;

mod count;
pub use self::count::CountRender;

pub trait Render {
    fn render<W: io::Write>(&self, w: &mut W, report: &ScanReport) -> Result<()>;
}

pub fn render_diagnostic<W: io::Write>(w: &mut W, error: &MatchEngineError) -> Result<()> {
    w.write_all(format!("Regex Error: {}\n", error).as_bytes())
        .map_err(|_| anyhow!("Failed write"))
}
