use crate::domain::command::OrderCommand;
use crate::error::{OrderError, Result};
use std::io::Read;

/// Reads an action log (`order, tenant, action` rows) from a CSV source.
///
/// Cells are trimmed, so `1, CUSTOMER, PLACE` parses the same as
/// `1,CUSTOMER,PLACE`. Names must be upper case.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one command per row. A bad row yields an `Err`
    /// and the iterator carries on with the next one.
    pub fn commands(self) -> impl Iterator<Item = Result<OrderCommand>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }
}
