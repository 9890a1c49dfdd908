use std::{
    io::Read,
    path::Path,
};

use tracing::info;

use crate::types::{
    MalformedInput,
    Observation,
    Result,
    SIZE_COLUMN,
    THRESHOLD_COLUMN,
};

/// Load observations from a csv file with a header row.
///
/// # Arguments:
/// path: The path to the csv file
///
/// The `size` and `threshold` columns are located by name, other columns are ignored.
/// The first malformed record aborts the load.
pub fn load_observations_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Observation>> {
    let path = path.as_ref();
    let f = std::fs::File::open(path)?;
    let observations = read_observations(f)?;
    info!(
        "loaded {} observations from {}",
        observations.len(),
        path.display()
    );
    Ok(observations)
}

/// Read observations in csv format from any reader, see `load_observations_from_csv`.
pub fn read_observations<R: Read>(reader: R) -> Result<Vec<Observation>> {
    // Short rows are reported as missing fields rather than a csv length error.
    let mut r = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let head = r.headers()?;
    let column = |name: &'static str| {
        head.iter()
            .position(|h| h == name)
            .ok_or(MalformedInput::MissingColumn { column: name })
    };
    let size_col = column(SIZE_COLUMN)?;
    let threshold_col = column(THRESHOLD_COLUMN)?;

    let mut out = Vec::new();
    for (i, record) in r.records().enumerate() {
        let row = record?;
        out.push(Observation::parse(
            i + 1,
            row.get(size_col),
            row.get(threshold_col),
        )?);
    }

    Ok(out)
}
