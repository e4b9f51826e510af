// File: crates/report-summary/src/main.rs
// Summary: Averages repeated runs, writes one efficiency chart PNG and prints tables plus a mean pivot.

mod data;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use report_core::aggregate::points_for;
use report_core::{
    aggregate, render_chart_with, render_table, ChartOptions, ConsoleReport, DataSource, Dataset, GridStyle, Marker,
    Page, Pivot, PlotSeries, RenderOptions, ScaleMode,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const PNG_FILENAME: &str = "grafico_eficiencia.png";

/// Chart legend name and marker per series label.
const SERIES_STYLE: [(&str, &str, Marker); 2] = [
    (data::EULER, "Grafo Euleriano", Marker::Circle),
    (data::LAYERED, "Grafo em Camadas (Layered)", Marker::Square),
];

const SECTIONS: [(&str, &str); 2] = [
    (data::EULER, "TABELA DE RESULTADOS: GRAFOS EULERIANOS"),
    (data::LAYERED, "TABELA DE RESULTADOS: GRAFOS EM CAMADAS (LAYERED)"),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let source = match std::env::args().nth(1) {
        Some(path) => DataSource::Csv { path: PathBuf::from(path), schema: data::schema() },
        None => DataSource::Embedded(data::builtin()),
    };
    let dataset = source.load().context("failed to load measurements")?;
    if dataset.is_empty() {
        anyhow::bail!("no measurements loaded");
    }

    // everything that can fail on the data runs before the PNG lands on disk
    let (chart, summary) = prepare(&dataset)?;
    chart
        .write_png(&RenderOptions::default(), PNG_FILENAME)
        .with_context(|| format!("failed to write '{PNG_FILENAME}'"))?;
    println!("Gráfico '{PNG_FILENAME}' gerado com sucesso.");

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&summary)?;
    stdout.flush()?;
    Ok(())
}

/// Chart page plus the rendered console text. Fails if any plotted type
/// has no measurements.
fn prepare(dataset: &Dataset) -> Result<(Page, Vec<u8>)> {
    for (label, _, _) in SERIES_STYLE {
        dataset.require_series(label).with_context(|| format!("{label} measurements"))?;
    }
    let mut console = ConsoleReport::new(Vec::new());
    print_summary(&mut console, dataset)?;
    let chart = build_chart(dataset)?;
    Ok((chart, console.into_inner()))
}

/// Mean time per size for each graph type, log-scaled on the size axis.
fn build_chart(dataset: &Dataset) -> Result<Page> {
    let means = aggregate(dataset.records());
    let series: Vec<PlotSeries> = SERIES_STYLE
        .iter()
        .map(|&(label, name, marker)| {
            PlotSeries::new(name, points_for(&means, label)).with_marker(marker).with_line_width(2.0)
        })
        .collect();

    let opts = ChartOptions::new(
        "Eficiência: Tempo de Execução vs Tamanho do Grafo",
        "Número de Vértices (Escala Log)",
        "Tempo Médio de Execução (ms)",
    )
    .with_scale(ScaleMode::LogX)
    .with_grid(GridStyle::Solid);
    render_chart_with(&series, &opts).context("efficiency chart")
}

/// Raw records per type, then the size x type mean pivot.
fn print_summary<W: Write>(console: &mut ConsoleReport<W>, dataset: &Dataset) -> Result<()> {
    for (label, heading) in SECTIONS {
        let series = dataset.require_series(label).with_context(|| format!("{label} measurements"))?;
        let page = render_table(&dataset.schema, series.records.iter().copied(), &data::TABLE_COLUMNS, heading)?;
        let table = page.as_table().context("table page expected")?;
        console.heading(heading)?;
        console.table(table)?;
        info!(section = label, records = series.len(), "table printed");
    }

    let pivot = Pivot::from_points(&aggregate(dataset.records()));
    console.heading("MÉDIAS DE TEMPO (ms)")?;
    console.pivot(&pivot, &dataset.schema.size, &dataset.schema.label)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_uses_one_point_per_size() {
        let page = build_chart(&data::builtin()).expect("chart");
        let chart = page.as_chart().expect("chart page");
        assert_eq!(chart.series.len(), 2);
        assert!(chart.legend);
        for s in &chart.series {
            let xs: Vec<f64> = s.points.iter().map(|p| p.0).collect();
            assert_eq!(xs, vec![1_000.0, 10_000.0, 100_000.0, 500_000.0]);
        }
        assert_eq!(chart.series[1].marker, Marker::Square);
    }

    #[test]
    fn missing_type_fails_before_chart() {
        let full = data::builtin();
        let euler_only: Vec<_> = full.records().iter().filter(|r| r.series_label == data::EULER).cloned().collect();
        let dataset = Dataset::new(full.schema.clone(), euler_only);

        let err = prepare(&dataset).expect_err("layered rows missing");
        assert!(format!("{err:#}").contains(data::LAYERED), "{err:#}");
        // the chart alone would still render with a single series
        assert_eq!(build_chart(&dataset).expect("chart").as_chart().expect("chart page").series.len(), 1);
    }

    #[test]
    fn prepare_renders_chart_and_text() {
        let (chart, text) = prepare(&data::builtin()).expect("prepare");
        assert!(chart.as_chart().is_some());
        assert!(String::from_utf8(text).expect("utf8").contains("=== MÉDIAS DE TEMPO (ms) ==="));
    }

    #[test]
    fn summary_prints_tables_and_pivot() {
        let mut console = ConsoleReport::new(Vec::new());
        print_summary(&mut console, &data::builtin()).expect("summary");
        let text = String::from_utf8(console.into_inner()).expect("utf8");

        assert!(text.contains("=== TABELA DE RESULTADOS: GRAFOS EULERIANOS ==="));
        assert!(text.contains("=== MÉDIAS DE TEMPO (ms) ==="));
        assert!(text.contains("14.2222"));
        let pivot_line = text.lines().find(|l| l.starts_with("10000 ")).expect("pivot row for 10000");
        assert!(pivot_line.contains("8.1268"), "{pivot_line}");
    }
}
