use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rill_eval::{Env, Evaluator};
use rill_parse::parse_source;

/// Maximum source file size in bytes (1MB)
const MAX_SOURCE_SIZE: usize = 1_000_000;

#[derive(Parser, Debug)]
#[command(name = "rill")]
#[command(about = "rill: a small statically-typed interpreted language")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a rill program and print the final environment
    Run {
        /// Path to the source file
        file: String,

        /// Print each evaluated operation to stderr
        #[arg(long)]
        trace: bool,

        /// Print the final environment as a JSON object instead
        #[arg(long)]
        json: bool,
    },

    /// Parse a source file and dump the AST
    Parse {
        /// Path to the source file
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Debug)]
enum Format {
    Pretty,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { file, trace, json } => cmd_run(&file, trace, json),
        Commands::Parse { file, format } => cmd_parse(&file, format),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn load_source(path: &str) -> Result<String> {
    let src = std::fs::read_to_string(path)?;
    if src.len() > MAX_SOURCE_SIZE {
        anyhow::bail!(
            "source file exceeds {}MB limit ({} bytes)",
            MAX_SOURCE_SIZE / 1_000_000,
            src.len()
        );
    }
    Ok(src)
}

fn cmd_run(file: &str, trace: bool, json: bool) -> Result<()> {
    let src = load_source(file)?;

    if !json {
        println!("Running source code:\n{src}");
    }

    let block = parse_source(&src)?;
    let env = Env::new();
    let mut evaluator = Evaluator::new();
    if trace {
        evaluator.set_trace_callback(|op| eprintln!("exec {op}"));
    }

    if !json {
        println!("Program output:");
    }
    evaluator.execute(&block, &env)?;

    if json {
        println!("{}", env.vars_as_json()?);
    } else {
        println!("Env content:");
        for line in env.to_strings() {
            println!("{line}");
        }
    }

    Ok(())
}

fn cmd_parse(file: &str, format: Format) -> Result<()> {
    let src = load_source(file)?;
    let block = parse_source(&src)?;

    match format {
        Format::Pretty => println!("{block:#?}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&block)?),
    }
    Ok(())
}
