use crate::application::view::OrderView;
use crate::error::Result;
use std::io::Write;

/// Writes order views as a pretty-printed JSON array.
pub fn write_orders<W: Write>(mut sink: W, views: &[OrderView]) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, views)?;
    writeln!(sink)?;
    Ok(())
}
