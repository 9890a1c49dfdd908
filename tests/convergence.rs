//! End to end tests going from a csv file of observations to the aligned and snapshot tables.

use percolation_stats::{
    load_observations_from_csv,
    prelude::*,
    read_observations,
};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/percolation_thresholds.csv");

fn thresholds_of(observations: &[Observation], size: u32) -> Vec<f64> {
    Vec::from_iter(
        observations
            .iter()
            .filter(|o| o.size() == size.into())
            .map(Observation::threshold),
    )
}

fn sample_std(vals: &[f64]) -> Option<f64> {
    if vals.len() < 2 {
        return None;
    }
    let mean = vals.iter().sum::<f64>() / vals.len() as f64;
    let var = vals.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (vals.len() - 1) as f64;
    Some(var.sqrt())
}

#[test]
fn fixture_convergence_table() {
    let observations = load_observations_from_csv(FIXTURE).unwrap();
    assert_eq!(observations.len(), 13);

    let table = convergence_table(&observations, &Config::default()).unwrap();
    let sizes = Vec::from_iter(table.sizes().iter().map(|s| u32::from(*s)));
    assert_eq!(sizes, vec![10, 50, 100, 250]);
    assert_eq!(table.num_rows(), 6);

    for (col, size) in sizes.iter().enumerate() {
        let vals = thresholds_of(&observations, *size);
        for rank in 1..=table.num_rows() {
            let mean = table.mean().cell(rank, col).unwrap();
            let std = table.std().cell(rank, col).unwrap();
            if rank > vals.len() {
                assert!(mean.is_absent());
                assert!(std.is_absent());
                continue;
            }
            let prefix = &vals[..rank];
            let expected_mean = prefix.iter().sum::<f64>() / rank as f64;
            assert!((mean.try_value().unwrap() - expected_mean).abs() < 1e-12);
            match (std.value(), sample_std(prefix)) {
                (Some(online), Some(naive)) => assert!((online - naive).abs() < 1e-12),
                (None, None) => {}
                (online, naive) => panic!("size {size} rank {rank}: {online:?} != {naive:?}"),
            }
        }
    }
}

#[test]
fn fixture_snapshot_table() {
    let observations = load_observations_from_csv(FIXTURE).unwrap();
    let stats = snapshot_table(&observations, &Config::default()).unwrap();
    assert_eq!(stats.len(), 4);

    let counts = Vec::from_iter(stats.iter().map(SnapshotStat::count));
    assert_eq!(counts, vec![6, 4, 2, 1]);

    let last = stats.last().unwrap();
    assert_eq!(last.size(), LatticeSize::from(250));
    assert_eq!(last.mean(), 0.5929);
    assert_eq!(last.std(), Cell::Absent);
    assert!(matches!(last.std().try_value(), Err(Error::UndefinedStatistic)));

    let mut out = Vec::new();
    write_snapshot(&mut out, &stats).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("size,count,mean,std\n10,6,"));
    assert!(out.ends_with("250,1,0.5929,\n"));
}

#[test]
fn population_convention_applies_to_both_tables() {
    let observations = load_observations_from_csv(FIXTURE).unwrap();
    let config = Config::new(StdConvention::Population, 1).unwrap();

    let table = convergence_table(&observations, &config).unwrap();
    let stats = snapshot_table(&observations, &config).unwrap();
    // A single observation has zero spread under the population convention.
    assert_eq!(table.std().cell(1, 3), Some(Cell::Present(0.0)));
    assert_eq!(stats[3].std(), Cell::Present(0.0));
}

#[test]
fn malformed_input_is_surfaced() {
    let err = read_observations("size,threshold\n10,0.5\n,0.6\n".as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedInput(MalformedInput::MissingField { row: 2, .. })
    ));
    assert_eq!(err.to_string(), "Row 2 has no value for `size`.");
}

#[test]
fn write_aligned_table_to_directory() {
    let observations = load_observations_from_csv(FIXTURE).unwrap();
    let table = convergence_table(&observations, &Config::default()).unwrap();

    let dir = std::env::temp_dir().join(format!("percolation-stats-{}", std::process::id()));
    write_aligned_table(&dir, &table).unwrap();

    let mean = std::fs::read_to_string(dir.join("mean.csv")).unwrap();
    let std = std::fs::read_to_string(dir.join("std.csv")).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    let mean_lines = Vec::from_iter(mean.lines());
    assert_eq!(mean_lines.len(), 7);
    assert_eq!(mean_lines[0], "rank,10,50,100,250");
    assert_eq!(mean_lines[1], "1,0.5612,0.5903,0.5921,0.5929");
    assert!(mean_lines[6].ends_with(",,,"));

    let std_lines = Vec::from_iter(std.lines());
    assert_eq!(std_lines[1], "1,,,,");
}
