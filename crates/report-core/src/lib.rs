// File: crates/report-core/src/lib.rs
// Summary: Core library entry point; records, aggregation, table/chart pages and report output.

pub mod error;
pub mod record;
pub mod source;
pub mod aggregate;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod table;
pub mod chart;
pub mod page;
pub mod report;
pub mod console;

pub use error::{ReportError, Result};
pub use record::{Dataset, Record, Schema, Series, Value};
pub use source::DataSource;
pub use aggregate::{aggregate, AggregatedPoint};
pub use series::{Marker, PlotSeries};
pub use axis::{Axis, ScaleKind};
pub use table::{render_table, TablePage};
pub use chart::{render_chart, render_chart_with, ChartOptions, ChartPage, GridStyle, ScaleMode};
pub use page::{Page, RenderOptions};
pub use report::Report;
pub use console::{ConsoleReport, Pivot};
pub use theme::Theme;
pub use text::TextShaper;
