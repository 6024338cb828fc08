use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::primitives::Value;

/// One row of the single-column value files the `swap` command reads
/// and writes.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct ValueRecord {
    pub value: Value,
}

fn reader() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All);

    builder
}

pub fn parse_values(stream: impl Read) -> Result<Box<[Value]>, csv::Error> {
    reader()
        .from_reader(stream)
        .deserialize()
        .map(|record| record.map(|ValueRecord { value }| value))
        .collect()
}

pub fn write_values(
    stream: impl Write,
    values: impl Iterator<Item = Value>,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(stream);
    for value in values {
        writer.serialize(ValueRecord { value })?;
    }
    writer.flush()?;
    Ok(())
}
