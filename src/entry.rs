use clap::Parser;

use crate::args::TesterArgs;
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let args = TesterArgs::parse();

    crate::logger::init_logging(args.verbose, args.quiet);

    let config = crate::config::load_config(&args)?;
    let tags = crate::tags::load_tags(&config.tags_path)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(crate::app::run_tests(&config, &tags))
}
