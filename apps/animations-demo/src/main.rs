use anyhow::Context;
use animations_demo::{parse_script, run_script, Showcase, ShowcaseOptions, DEFAULT_SCRIPT};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let source = if args.is_empty() {
        DEFAULT_SCRIPT.to_string()
    } else {
        args.join(" ")
    };
    let steps = parse_script(&source).with_context(|| format!("invalid script: {source}"))?;

    let options = ShowcaseOptions::default().with_title("Animations");
    println!("=== {} ===", options.title);
    println!("Script: {source}");
    println!("Frame interval: {:.2}ms", options.frame_interval_millis());
    println!("Set RUST_LOG=debug to see every frame.");
    println!();

    let started = instant::Instant::now();
    let mut showcase = Showcase::launch(options);
    let summary = run_script(&mut showcase, &steps, |frame| log::debug!("{frame}"));

    log::info!(
        "ran {} events over {} frames ({:.1}ms simulated) in {:?}",
        summary.events,
        summary.frames,
        showcase.frame_time_nanos() as f64 / 1e6,
        started.elapsed()
    );
    println!("{}", showcase.frame());
    println!("{:?}", showcase.state());
    Ok(())
}
