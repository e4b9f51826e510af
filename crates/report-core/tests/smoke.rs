// File: crates/report-core/tests/smoke.rs
// Purpose: End-to-end raster render of a chart and a table page to PNG.

use report_core::{render_table, render_chart, PlotSeries, Record, RenderOptions, ReportError, Schema};

#[test]
fn render_chart_png() {
    let series = [
        PlotSeries::new("Euler", vec![(1_000.0, 2.8), (10_000.0, 8.1), (100_000.0, 98.6), (500_000.0, 91.9)]),
        PlotSeries::new("Layered", vec![(500_000.0, 209.2), (1_000.0, 1.6), (100_000.0, 46.4), (10_000.0, 3.4)]),
    ];
    let page = render_chart(&series, "Smoke", ("V", "ms"), false).expect("chart");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke_chart.png");
    page.write_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API and pixel size (10 x 6 in at 100 dpi)
    let bytes = page.render_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (1000, 600));
    // white paper background in the corner
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn render_table_png_scales_with_dpi() {
    let records = vec![Record::new("Tree", 1000, 0.977229).with("Weight", 27)];
    let page = render_table(&Schema::new("Type", "V", "Time (ms)"), &records, &["V", "Time (ms)", "Weight"], "Tree")
        .expect("table");
    let opts = RenderOptions { dpi: 72.0, ..RenderOptions::default() };
    assert_eq!(page.pixel_size(&opts), (792, 288));
    let bytes = page.render_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (792, 288));
}

#[test]
fn png_into_unwritable_target_is_io_error() {
    let page = render_chart(&[PlotSeries::new("Euler", vec![(1.0, 1.0), (2.0, 4.0)])], "Io", ("V", "ms"), false)
        .expect("chart");
    let blocker = std::path::PathBuf::from("target/test_out/png_blocker");
    std::fs::create_dir_all("target/test_out").expect("out dir");
    std::fs::write(&blocker, b"plain file").expect("blocker file");

    let err = page.write_png(&RenderOptions::default(), blocker.join("chart.png")).expect_err("parent is a file");
    assert!(matches!(err, ReportError::Io(_)), "{err}");
}
