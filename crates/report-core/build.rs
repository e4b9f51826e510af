// File: crates/report-core/build.rs
// Summary: Link Windows system libraries Skia/ICU need when targeting Windows.

fn main() {
    // build scripts run on the host; ask cargo about the target instead
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW, RegQueryInfoKeyW, ...
        println!("cargo:rustc-link-lib=advapi32");
    }
}
