use crate::application::view::OrderView;
use crate::error::Result;
use std::io::Write;

/// Writes order views as CSV with columns `order,tenant,state,possible_actions`.
///
/// `possible_actions` is a single space-separated field.
pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_orders(&mut self, views: impl IntoIterator<Item = OrderView>) -> Result<()> {
        self.writer
            .write_record(["order", "tenant", "state", "possible_actions"])?;
        for view in views {
            self.writer.write_record([
                view.order.to_string(),
                view.tenant.to_string(),
                view.state.to_string(),
                view.possible_actions.to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
