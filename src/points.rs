//! JSON export of cleaned points for map display.

use std::io::Write;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::{
    cli::PointsArgs,
    clean::{CleanedDataset, PointKind, SupplyPoint},
    io_utils,
    process::{load_config, load_input, run_pipeline},
    resolver::ResolvedColumns,
};

#[derive(Debug, Serialize)]
pub struct MapPoint<'a> {
    #[serde(flatten)]
    pub point: &'a SupplyPoint,
    pub radius: f64,
}

#[derive(Debug, Serialize)]
pub struct PointCollection<'a> {
    pub source: &'a str,
    pub columns: &'a ResolvedColumns,
    pub supply: usize,
    pub demand: usize,
    pub points: Vec<MapPoint<'a>>,
}

impl<'a> PointCollection<'a> {
    pub fn new(source: &'a str, cleaned: &'a CleanedDataset) -> Self {
        let points = cleaned
            .points()
            .iter()
            .map(|point| MapPoint {
                point,
                radius: point.marker_radius(),
            })
            .collect::<Vec<_>>();
        let supply = cleaned
            .points()
            .iter()
            .filter(|p| p.kind == PointKind::Supply)
            .count();
        Self {
            source,
            columns: &cleaned.columns,
            supply,
            demand: points.len() - supply,
            points,
        }
    }
}

pub fn execute(args: &PointsArgs) -> Result<()> {
    let config = load_config(&args.pipeline)?;
    let dataset = load_input(&args.input)?;
    let outcome = run_pipeline(&dataset, config, args.pipeline.show_log)?;
    let collection = PointCollection::new(dataset.source(), &outcome.cleaned);

    let mut writer = io_utils::open_output(args.output.as_deref())?;
    let written = if args.pretty {
        serde_json::to_writer_pretty(&mut writer, &collection)
    } else {
        serde_json::to_writer(&mut writer, &collection)
    };
    written.context("Serializing points")?;
    writeln!(writer)?;
    writer.flush()?;
    info!(
        "Exported {} point(s) ({} supply, {} demand)",
        collection.points.len(),
        collection.supply,
        collection.demand
    );
    Ok(())
}
