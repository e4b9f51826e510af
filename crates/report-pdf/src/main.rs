// File: crates/report-pdf/src/main.rs
// Summary: Builds the six-page graph efficiency PDF: two tables, two single-series charts, two comparisons.

mod data;

use std::path::PathBuf;

use anyhow::{Context, Result};
use report_core::{render_chart, render_table, DataSource, Dataset, PlotSeries, RenderOptions, Report};
use tracing::info;
use tracing_subscriber::EnvFilter;

const PDF_FILENAME: &str = "Relatorio_Analise_Grafos.pdf";

const NAME_TREE: &str = "Tree Graph (Grafo Árvore)";
const NAME_EULER: &str = "Euler Graph (Grafo Euleriano)";

const X_LABEL: &str = "Número de Vértices (V)";
const Y_LABEL: &str = "Tempo de Execução (ms)";
const X_LABEL_LOG: &str = "Número de Vértices (V) - Escala Log";
const Y_LABEL_LOG: &str = "Tempo de Execução (ms) - Escala Log";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Optional CSV replaces the built-in measurements
    let source = match std::env::args().nth(1) {
        Some(path) => DataSource::Csv { path: PathBuf::from(path), schema: data::schema() },
        None => DataSource::Embedded(data::builtin()),
    };
    let dataset = source.load().context("failed to load measurements")?;

    let report = build_report(&dataset)?;
    report
        .write_pdf(&RenderOptions::default(), PDF_FILENAME)
        .with_context(|| format!("failed to write '{PDF_FILENAME}'"))?;

    println!("\nRelatório '{PDF_FILENAME}' gerado com sucesso!");
    Ok(())
}

/// Pages in fixed order: table(tree), table(euler), chart(tree),
/// chart(euler), comparison linear, comparison log-log.
fn build_report(dataset: &Dataset) -> Result<Report> {
    let tree = dataset.require_series(data::TREE).context("tree graph measurements")?;
    let euler = dataset.require_series(data::EULER).context("euler graph measurements")?;
    let schema = &dataset.schema;

    let tree_line = PlotSeries::new(NAME_TREE, tree.points());
    let euler_line = PlotSeries::new(NAME_EULER, euler.points());
    let both = [tree_line.clone(), euler_line.clone()];

    let mut report = Report::new();
    for (series, name) in [(&tree, NAME_TREE), (&euler, NAME_EULER)] {
        let title = format!("Resultados de Eficácia e Eficiência\n{name}");
        let page = render_table(schema, series.records.iter().copied(), &data::TABLE_COLUMNS, &title)
            .with_context(|| format!("table page for {name}"))?;
        report.push(page);
        info!(title = %title.replace('\n', " "), "table page ready");
    }

    for line in [&tree_line, &euler_line] {
        let title = format!("Eficiência - {}\n(Vértices vs. Tempo)", line.label);
        let page = render_chart(std::slice::from_ref(line), &title, (X_LABEL, Y_LABEL), false)
            .with_context(|| format!("chart page for {}", line.label))?;
        report.push(page);
        info!(title = %title.replace('\n', " "), "chart page ready");
    }

    let comparisons = [
        ("Comparativo de Eficiência (Escala Linear)", (X_LABEL, Y_LABEL), false),
        ("Comparativo de Eficiência (Escala Log-Log)", (X_LABEL_LOG, Y_LABEL_LOG), true),
    ];
    for (title, labels, log_scale) in comparisons {
        let page = render_chart(&both, title, labels, log_scale).with_context(|| format!("chart page '{title}'"))?;
        report.push(page);
        info!(%title, "chart page ready");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_report_has_six_pages_in_order() {
        let report = build_report(&data::builtin()).expect("report");
        let pages = report.pages();
        assert_eq!(pages.len(), 6);
        assert!(pages[0].as_table().is_some());
        assert!(pages[1].as_table().is_some());
        assert!(pages[0].title().ends_with(NAME_TREE));
        assert!(pages[1].title().ends_with(NAME_EULER));

        let singles = [pages[2].as_chart().expect("chart"), pages[3].as_chart().expect("chart")];
        for c in singles {
            assert_eq!(c.series.len(), 1);
            assert!(!c.legend);
        }
        let linear = pages[4].as_chart().expect("chart");
        let log = pages[5].as_chart().expect("chart");
        assert!(linear.legend && log.legend);
        assert_eq!(linear.x_axis.kind, report_core::ScaleKind::Linear);
        assert_eq!(log.x_axis.kind, report_core::ScaleKind::Log10);
        assert_eq!(log.y_axis.kind, report_core::ScaleKind::Log10);
    }

    #[test]
    fn missing_series_is_an_error() {
        let mut ds = Dataset::new(data::schema(), Vec::new());
        for r in data::builtin().records().iter().filter(|r| r.series_label == data::TREE) {
            ds.push(r.clone());
        }
        let err = build_report(&ds).expect_err("euler series is empty");
        assert!(format!("{err:#}").contains("Euler"));
    }
}
