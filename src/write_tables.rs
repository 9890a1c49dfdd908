use std::{
    io::Write,
    path::Path,
};

use tracing::info;

use crate::{
    aligned_table::{
        AlignedTable,
        Frame,
    },
    snapshot::SnapshotStat,
    types::{
        LatticeSize,
        Result,
    },
};

/// Write one frame of an `AlignedTable` as csv.
/// The header is `rank` followed by the lattice sizes, absent cells are empty fields.
///
/// Cells go through the same serializer as `write_snapshot`, so a value is spelled
/// identically in both files.
pub fn write_frame<W: Write>(writer: W, sizes: &[LatticeSize], frame: &Frame) -> Result<()> {
    // The header is written by hand, rows are tuples without field names.
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    let mut header = Vec::with_capacity(sizes.len() + 1);
    header.push("rank".to_string());
    header.extend(sizes.iter().map(LatticeSize::to_string));
    w.write_record(&header)?;

    for (rank, cells) in frame.rows() {
        w.serialize((rank, &cells))?;
    }
    w.flush()?;
    Ok(())
}

/// Write the `mean` and `std` frames of `table` to `mean.csv` and `std.csv` inside `dir`.
/// The directory is created if needed.
pub fn write_aligned_table<P: AsRef<Path>>(dir: P, table: &AlignedTable) -> Result<()> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    for (name, frame) in [("mean.csv", table.mean()), ("std.csv", table.std())] {
        let path = dir.join(name);
        write_frame(std::fs::File::create(&path)?, table.sizes(), frame)?;
        info!("wrote {} ranks to {}", frame.num_rows(), path.display());
    }
    Ok(())
}

/// Write snapshot statistics as csv with the header `size,count,mean,std`.
/// An absent std is an empty field.
pub fn write_snapshot<W: Write>(writer: W, stats: &[SnapshotStat]) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    if stats.is_empty() {
        // `serialize` only emits the header along with the first record.
        w.write_record(["size", "count", "mean", "std"])?;
    }
    for stat in stats {
        w.serialize(stat)?;
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        expanding::expanding_statistics,
        grouping_index::GroupingIndex,
        snapshot::snapshot_statistics,
        types::Observation,
    };

    fn index() -> GroupingIndex {
        GroupingIndex::new(&[
            Observation::new(2, 0.5),
            Observation::new(2, 0.5),
            Observation::new(3, 0.25),
        ])
    }

    #[test]
    fn write_frame_csv() {
        let table = AlignedTable::new(&expanding_statistics(&index(), &Config::default()).unwrap());

        let mut mean = Vec::new();
        write_frame(&mut mean, table.sizes(), table.mean()).unwrap();
        assert_eq!(
            String::from_utf8(mean).unwrap(),
            "rank,2,3\n1,0.5,0.25\n2,0.5,\n"
        );

        let mut std = Vec::new();
        write_frame(&mut std, table.sizes(), table.std()).unwrap();
        assert_eq!(String::from_utf8(std).unwrap(), "rank,2,3\n1,,\n2,0.0,\n");
    }

    #[test]
    fn write_frame_and_snapshot_format_floats_alike() {
        let index = GroupingIndex::new(&[Observation::new(2, 1e-20), Observation::new(2, 1e-20)]);
        let config = Config::default();

        let table = AlignedTable::new(&expanding_statistics(&index, &config).unwrap());
        let mut mean = Vec::new();
        write_frame(&mut mean, table.sizes(), table.mean()).unwrap();
        let mut std = Vec::new();
        write_frame(&mut std, table.sizes(), table.std()).unwrap();

        let stats = snapshot_statistics(&index, &config).unwrap();
        let mut snapshot = Vec::new();
        write_snapshot(&mut snapshot, &stats).unwrap();

        assert_eq!(String::from_utf8(mean).unwrap(), "rank,2\n1,1e-20\n2,1e-20\n");
        assert_eq!(String::from_utf8(std).unwrap(), "rank,2\n1,\n2,0.0\n");
        assert_eq!(
            String::from_utf8(snapshot).unwrap(),
            "size,count,mean,std\n2,2,1e-20,0.0\n"
        );
    }

    #[test]
    fn write_frame_empty() {
        let table = AlignedTable::default();
        let mut out = Vec::new();
        write_frame(&mut out, table.sizes(), table.mean()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "rank\n");
    }

    #[test]
    fn write_snapshot_csv() {
        let stats = snapshot_statistics(&index(), &Config::default()).unwrap();
        let mut out = Vec::new();
        write_snapshot(&mut out, &stats).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "size,count,mean,std\n2,2,0.5,0.0\n3,1,0.25,\n"
        );
    }

    #[test]
    fn write_snapshot_empty() {
        let mut out = Vec::new();
        write_snapshot(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "size,count,mean,std\n");
    }
}
