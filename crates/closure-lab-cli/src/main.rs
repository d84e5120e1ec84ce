mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use closure_lab::function_values::{OperationTable, count_to_zero};
use closure_lab::signatures::{align_right, arithmetic_mean, swap_two_ints};
use closure_lab::sorting::spell_digits;
use closure_lab::{CustomerLine, ProviderQueue, serve_customer, walkthrough};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "closure-lab")]
#[command(about = "Function and closure calling conventions, one command each")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log every transcript line as it is produced
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every demonstration in order
    Walkthrough {
        /// TOML file overriding the walkthrough inputs
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },

    /// Arithmetic mean of one or more numbers
    Mean {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },

    /// Right-align text by left padding
    Align {
        text: String,

        /// Total width in characters
        #[arg(short, long, default_value = "10")]
        width: usize,

        /// Padding character
        #[arg(short, long, default_value = "*")]
        pad: char,
    },

    /// Swap two integers through in-out parameters
    Swap {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Apply a named operation (add, multiply)
    Math {
        op: String,
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Step a value to zero with a chosen step function
    Countdown {
        #[arg(allow_negative_numbers = true)]
        start: i64,
    },

    /// Spell numbers digit by digit
    Spell { numbers: Vec<u64> },

    /// Serve the head of a line now, then collect and drain deferred providers
    Serve {
        /// Customers in line, head first
        #[arg(required = true)]
        customers: Vec<String>,

        /// Number of deferred providers to collect before draining
        #[arg(short, long, default_value = "2")]
        collect: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Walkthrough {
            config: config_path,
            json,
        } => {
            let config = config::load(config_path.as_deref())?;
            let transcript = walkthrough::run(&config).context("Walkthrough failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&transcript)?);
            } else {
                print!("{}", transcript);
            }
        }

        Commands::Mean { numbers } => {
            println!("{:?}", arithmetic_mean(&numbers)?);
        }

        Commands::Align { text, width, pad } => {
            println!("{}", align_right(&text, width, pad));
        }

        Commands::Swap { mut a, mut b } => {
            swap_two_ints(&mut a, &mut b);
            println!("{} {}", a, b);
        }

        Commands::Math { op, a, b } => {
            let table = OperationTable::with_builtins();
            let result = table.apply(&op, a, b).with_context(|| {
                let known: Vec<&str> = table.names().collect();
                format!("Known operations: {}", known.join(", "))
            })?;
            println!("Result: {}", result);
        }

        Commands::Countdown { start } => {
            for line in count_to_zero(start)? {
                println!("{}", line);
            }
        }

        Commands::Spell { numbers } => {
            for spelled in spell_digits(&numbers) {
                println!("{}", spelled);
            }
        }

        Commands::Serve { customers, collect } => {
            serve(customers, collect)?;
        }
    }

    Ok(())
}

fn serve(customers: Vec<String>, collect: usize) -> Result<()> {
    let line = CustomerLine::new(customers);
    println!("{}", serve_customer(line.provider())?);

    let mut queue = ProviderQueue::new();
    for _ in 0..collect {
        queue.collect(line.provider());
    }
    log::info!("{} customer(s) still in line before draining", line.len());

    for served in queue.drain().context("Ran out of customers")? {
        println!("{}", served);
    }
    Ok(())
}
