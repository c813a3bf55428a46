//! Search for the best mining patterns in a 16×5×16 sample.
//!
//! Run with:
//! ```sh
//! cargo run --release --example optimize -p lode -- [max_actions] [max_dug_blocks]
//! ```
//!
//! The defaults (40 actions, 20 dug blocks) take a long time; small limits
//! such as `3 8` finish in seconds.

use lode::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let defaults = GenerationConstraints::default();
    let max_actions = args.next().map(|a| a.parse()).transpose()?.unwrap_or(defaults.max_actions());
    let max_dug = args.next().map(|a| a.parse()).transpose()?.unwrap_or(defaults.max_dug_blocks());

    let config = OptimizerConfig {
        constraints: GenerationConstraints::new(max_actions, max_dug)?,
        ..OptimizerConfig::default()
    };
    println!(
        "Generating {} reference samples of {} at y={}...",
        config.evaluator.sample_count, config.sample_dims, config.evaluator.vertical_offset
    );
    println!("Searching with {}", config.constraints);

    let optimizer = Optimizer::classic(config)?;
    let report = optimizer.run_observed(|store| println!("{store}"))?;

    let m = &report.metrics;
    println!(
        "Finished with {} evaluated patterns ({:.0}/s on {} worker(s))",
        m.patterns_evaluated,
        m.patterns_per_second(),
        m.workers
    );
    for best in &report.frontier {
        println!("{}", best.pattern.render());
        println!("{}", best.statistics.report());
    }
    Ok(())
}
