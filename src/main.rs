use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod domain;
mod services;

pub use catalog::*;
pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::config::*;
pub use services::filter::*;
pub use services::output::*;
pub use services::scoring::*;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        report_failure(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;
    let source = cli.catalog.clone().or(config.general.catalog);
    let catalog = load_catalog(source.as_deref())?;
    // fail fast: nothing runs against a catalog with dangling references
    validate(&catalog)?;

    if handle_compare_commands(cli, &catalog)? {
        return Ok(());
    }
    handle_browse_commands(cli, &catalog)
}

fn report_failure(json: bool, err: &anyhow::Error) {
    if json {
        let code = err
            .downcast_ref::<CatalogError>()
            .map(CatalogError::code)
            .unwrap_or("ERROR");
        let body = JsonErr {
            ok: false,
            error: ErrorBody {
                code: code.to_string(),
                message: format!("{err:#}"),
            },
        };
        match serde_json::to_string_pretty(&body) {
            Ok(out) => println!("{out}"),
            Err(_) => println!("{{\"ok\": false}}"),
        }
    } else {
        eprintln!("error: {err:#}");
    }
}
