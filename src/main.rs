use clap::Parser;
use nsx_ipset_loader::config::DEFAULT_TIMEOUT_SECS;
use nsx_ipset_loader::Config;
use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Create NSX-v IP sets from a CSV file and add them to the security group in
/// the CSV file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// NSX Manager hostname, FQDN or IP address
    #[arg(short = 's', long = "manager")]
    manager: String,

    /// Input file in csv format
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// NSX Manager username
    #[arg(short = 'u', long = "user", default_value = "admin")]
    user: String,

    /// Enable script debugging
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Per-request timeout in seconds
    #[arg(long = "timeout-secs", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();

    let args = Args::parse();
    let password = read_password()?;

    let mut cfg = Config::new(args.manager, args.user, password, args.input);
    cfg.debug = args.debug;
    cfg.timeout = Duration::from_secs(args.timeout_secs);

    let summary = nsx_ipset_loader::run(&cfg)?;
    println!(
        "Done: {} IP sets created, {} members added, {} rows failed",
        summary.created, summary.members_added, summary.failed
    );

    if !summary.all_succeeded() {
        std::process::exit(1);
    }
    Ok(())
}

/// Password from `NSX_PASSWORD` (a `.env` file works), else a stdin prompt.
fn read_password() -> std::io::Result<String> {
    if let Ok(password) = std::env::var("NSX_PASSWORD") {
        return Ok(password);
    }
    eprint!("NSX Manager password: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
