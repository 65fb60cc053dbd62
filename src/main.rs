//! yaml-readme's application entry point.
//! Parses the command line, runs the pipeline and writes the document to stdout.

use std::io::Write;

use yaml_readme::{
    cli::get_args,
    config::Config,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::Processor,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(Config::from(args)) {
        default_error_handler(err);
    }
}

/// Renders the document and writes it to stdout.
///
/// Output is written only once rendering has fully succeeded.
fn run(config: Config) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let document = Processor::new(&config, &engine).run()?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
