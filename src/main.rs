use anyhow::Context;

use text_filter::config::FilterConfig;

const TEXT_1: &str =
    "я джава, я учу людей джава, джава чертовски хорош, джава это куча денег, джава";
const TEXT_2: &str = "джава это круто";

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = FilterConfig::from_env().context("Failed to load filter configuration")?;
    let pipeline = config
        .build_pipeline()
        .context("Failed to build filter pipeline")?;

    tracing::info!(rules = ?pipeline.rule_names(), "Filter pipeline ready");

    println!("Результат анализа текста 1: {}", pipeline.evaluate(TEXT_1));
    println!("Результат анализа текста 2: {}", pipeline.evaluate(TEXT_2));

    // Any extra arguments are classified too, one label per line.
    for text in std::env::args().skip(1) {
        println!("{}", pipeline.evaluate(&text));
    }

    Ok(())
}
