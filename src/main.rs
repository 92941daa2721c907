use log::info;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::error::Error;
use std::fs;
use std::process;
use vruntime_trees::scheduler::{self, Config, Scheduler};
use vruntime_trees::TreeKind;

const USAGE: &str = "usage: vruntime-trees <AVL|RB> <records-file> [time-slice]";

fn run() -> Result<(), Box<dyn Error>> {
    TermLogger::init(
        LevelFilter::Info,
        ConfigBuilder::new().set_time_level(LevelFilter::Off).build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let mut args = env::args().skip(1);
    let tree: TreeKind = args.next().ok_or(USAGE)?.parse()?;
    let path = args.next().ok_or(USAGE)?;
    let time_slice = match args.next() {
        Some(arg) => arg.parse()?,
        None => Config::default().time_slice,
    };

    let input = fs::read_to_string(&path)?;
    let mut scheduler = Scheduler::new(Config { tree, time_slice })?;
    for process in scheduler::parse_records(&input) {
        info!("added {}", process);
        scheduler.add(process);
    }

    let slices = scheduler.run();
    info!(
        "executed {} slices using the {} tree",
        slices.len(),
        scheduler.config().tree,
    );
    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}
