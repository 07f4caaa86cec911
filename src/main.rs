use azure_d2_diagram::{
    collect_resources, config, generate_diagram_files, resolve_session, PipelineError,
    ResolverConfig,
};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{failed}: {e}", failed = "failed".on_red());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), PipelineError> {
    let resolver_config = ResolverConfig::default();
    let session = resolve_session(&resolver_config).await?;

    println!("Collecting Azure resources...");
    let inventory = collect_resources(&session).await?;

    println!("Generating D2 files...");
    generate_diagram_files(&inventory, Path::new(config::OUTPUT_DIR))?;

    println!("D2 files generated in '{}' directory", config::OUTPUT_DIR);
    Ok(())
}
