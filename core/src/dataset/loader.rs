use super::Dataset;
use crate::prelude::DatasetResult;
use crate::records::LaunchRecord;
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads the launch CSV at `path`. Columns other than the four the dashboard
/// uses are ignored.
pub fn load_csv<P: AsRef<Path>>(path: P) -> DatasetResult<Dataset> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref)?;
    let dataset = read_csv(file)?;
    info!(
        "loaded {} launch records from {}",
        dataset.len(),
        path_ref.display()
    );
    Ok(dataset)
}

pub fn read_csv<R: Read>(reader: R) -> DatasetResult<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Fields)
        .from_reader(reader);

    let records = csv_reader
        .deserialize::<LaunchRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    Dataset::from_records(records)
}
