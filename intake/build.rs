fn main() {
    // INTAKE_LOG_PRETTY=1 switches the log output to the multi-line format.
    println!("cargo::rustc-check-cfg=cfg(tracing_pretty)");
    println!("cargo::rerun-if-env-changed=INTAKE_LOG_PRETTY");
    if matches!(std::env::var("INTAKE_LOG_PRETTY").as_deref(), Ok("1" | "true")) {
        println!("cargo::rustc-cfg=tracing_pretty");
    }
}
