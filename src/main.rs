use clap::Parser;
use colored::Colorize;
use ip_attributes::catalog::load_catalog;
use ip_attributes::config::{init_logging, Config};
use ip_attributes::ip_attributes;
use std::error::Error;
use std::path::PathBuf;

/// IPv4 subnet calculator with reserved-range notes
#[derive(Parser)]
#[command(name = "ip-attributes")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Reserved-range catalog (JSON)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// <ip>/<cidr> | <ip> <cidr> | <ip> /<cidr> | <ip> <subnet mask>
    #[arg(value_name = "ARGS", allow_hyphen_values = true, trailing_var_arg = true)]
    args: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();

    // Every outcome, errors included, exits 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Ok(());
        }
    };
    let config = Config::resolve(cli.catalog);
    if let Err(e) = init_logging(&config.log_config) {
        eprintln!("Logging disabled: {e}");
    }
    log::info!("#Start main()");

    let catalog = load_catalog(&config.catalog_file, config.catalog_explicit);
    match ip_attributes(cli.args.as_slice(), &catalog) {
        Ok(report) => print!("{report}"),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}
