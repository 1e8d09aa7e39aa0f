use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path
};

use crate::{data::error::DataError, model::structures::report::Report};

pub fn write_report(path: &Path, report: &Report) -> Result<(), DataError> {
    let io_error = |source: std::io::Error| DataError::Io {
        path: path.to_path_buf(),
        source
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    serde_json::to_writer_pretty(&mut writer, report).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source
    })?;

    writer.flush().map_err(io_error)
}
