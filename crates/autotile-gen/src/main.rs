use anyhow::Context;

use autotile_engine::logging::{init_logging, LoggingConfig};
use autotile_gen::{generate, GeneratorConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = GeneratorConfig::station();
    generate(&config)
        .with_context(|| format!("generating autotiles into {}", config.output_dir.display()))?;
    Ok(())
}
