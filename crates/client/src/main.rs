//! Demo binary: drains one scripted turn and prints the resulting effects.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p tbr-client
//! ```

use anyhow::Result;
use tbr_client::{ClientConfig, logging, run_demo_turn};
use tbr_core::GameError;
use tbr_runtime::ActionDriver;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!(
        max_replacements = config.driver.max_replacements,
        max_steps = config.driver.max_steps_per_drain,
        "starting demo turn"
    );

    let mut driver = ActionDriver::new(config.driver);
    let summary = run_demo_turn(&mut driver).inspect_err(|error| {
        tracing::error!(
            severity = error.severity().as_str(),
            code = error.error_code(),
            "demo turn aborted: {error}"
        );
    });
    for entity in driver.take_charged() {
        println!("energy due: {entity}");
    }
    let summary = summary?;

    tracing::info!(
        steps = summary.report.steps,
        succeeded = summary.report.succeeded,
        failed = summary.report.failed,
        "turn complete"
    );
    for effect in &summary.effects {
        println!("{effect:?}");
    }

    Ok(())
}
