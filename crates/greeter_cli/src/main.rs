/* 📖 # What does the greeter CLI do?

It prints greetings to standard output and nothing else.
Diagnostics go to stderr through tracing, filtered by `RUST_LOG`.

Exit codes:
- 0: Success
- 1: Error (tracing could not be set up, or writing to stdout failed)
*/

use std::io;
use std::process;
use std::time::Duration;

use clap::Parser;
use greeter_base::tracing::{debug, init_tracing};
use greeter_base::{PalHandle, RealPal};
use greeter_engine::{DEFAULT_NAME, DEFAULT_PREFIX, GreetingPlan, render_plan};

/// Print a friendly greeting.
#[derive(Debug, Parser)]
#[command(name = "greeter", version, about, long_about = None)]
struct Args {
    /// Name to greet
    #[arg(default_value = DEFAULT_NAME)]
    name: String,

    /// Salutation placed before the name
    #[arg(long, short, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Prefix every greeting with the current date and time
    #[arg(long, short)]
    timestamp: bool,

    /// Additional names to greet after the first one
    #[arg(long, value_name = "NAME")]
    also: Vec<String>,

    /// Greet the name once more after waiting this many milliseconds
    #[arg(long, value_name = "MILLIS")]
    delay_ms: Option<u64>,
}

impl From<Args> for GreetingPlan {
    fn from(args: Args) -> Self {
        GreetingPlan {
            prefix: args.prefix,
            name: args.name,
            also: args.also,
            timestamp: args.timestamp,
            delay: args.delay_ms.map(Duration::from_millis),
        }
    }
}

/// Parse arguments, exiting with 1 on usage errors.
///
/// Help and version requests still exit through clap with code 0.
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(1);
        }
        Err(e) => e.exit(),
    }
}

fn main() {
    let args = parse_args();

    if let Err(e) = init_tracing() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    debug!(?args, "parsed arguments");

    let pal = PalHandle::new(RealPal::new());
    let plan = GreetingPlan::from(args);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = render_plan(&pal, &plan, &mut out) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
