use clap::Parser;
use strops::cli::Cli;
use strops::config::DemoConfig;
use strops::demo::StringOpsDemo;
use strops::report::Reporter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.default_log_filter()),
    )
    .init();

    let mut config = DemoConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    log::debug!(
        "report format: {}, marker: {:?}",
        config.report.format.as_str(),
        config.report.marker
    );

    let stdout = std::io::stdout();
    let reporter = Reporter::new(stdout.lock(), config.report);
    let mut demo = StringOpsDemo::new(reporter);
    demo.run()?;

    Ok(())
}
