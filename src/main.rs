use ip_range_cidr::config::Config;
use ip_range_cidr::logging::init_logging;
use ip_range_cidr::run;
use std::error::Error;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::load();
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    let failures = run(&config)?;
    if failures.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
