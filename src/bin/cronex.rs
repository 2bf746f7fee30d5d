use clap::Parser;
use cronex::CronEntry;
use std::process;

#[derive(Parser)]
#[command(name = "cronex", about = "Cron expression expander", version)]
struct Cli {
    /// Cron entry (e.g., "*/15 0 1,15 * 1-5 /usr/bin/find")
    expression: Option<String>,

    /// Validate the expression without printing the table
    #[arg(long)]
    check: bool,

    /// Output the expanded entry as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let expression = match cli.expression {
        Some(ref expr) => expr.as_str(),
        None => {
            eprintln!("error: no expression provided");
            process::exit(2);
        }
    };

    let entry = match CronEntry::parse(expression) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    if cli.check {
        println!("\u{2713} valid");
        process::exit(0);
    }

    if cli.json {
        match serde_json::to_string_pretty(&entry) {
            Ok(json) => {
                println!("{json}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
    }

    print!("{entry}");
}
