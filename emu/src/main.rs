use clap::Parser;
use color_print::cprintln;

use pvm::hooks::{dump::Dump, stall::Stall, trace::Trace, Hook};
use pvm::{check, loader, msg, util, Error, Exit, State};

#[derive(Parser, Debug)]
#[clap(
    name = "PVM",
    version = "v0.1.0",
    about = "Interpreter for PVM pseudo-assembly"
)]
struct Args {
    /// Stop after this many steps
    #[arg(short = 't', long)]
    tmax: Option<u64>,

    /// YAML file: line number -> registers / variables to print
    #[arg(short, long)]
    dump_cfg: Option<String>,

    /// Print registers after every instruction
    #[arg(short = 'a', long)]
    dump_all: bool,

    /// Print every executed instruction
    #[arg(long)]
    trace: bool,

    /// Stop when the program is stuck in an endless loop
    #[arg(short, long)]
    stall: bool,

    /// Report suspicious lines before running
    #[arg(short, long)]
    check: bool,

    /// Print the decoded program before running
    #[arg(short, long)]
    list: bool,

    /// Program file
    input_file: String,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        err.print_diag();
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    let lines = loader::read_lines(&args.input_file)?;

    // Built before anything runs so that a bad config stops us early
    let dump = Dump::arg(args.dump_cfg.clone(), args.dump_all)?;

    println!("+-----------------------------------------------+");
    println!("| Run: {:<40} |", args.input_file);
    if let Some(t) = args.tmax {
        println!("|  - Step limit: {:<30} |", t);
    }
    println!("+-----------------------------------------------+");

    let state = State::new(lines);

    if args.list {
        util::print_listing(&args.input_file, state.lines());
    }

    if args.check {
        let msgs = check::check(state.lines(), state.vars(), state.labels());
        for (idx, m) in &msgs {
            m.diag(&args.input_file, *idx, &state.lines()[*idx]);
        }
        let (errors, warns) = msg::count(&msgs);
        cprintln!("<bold>check</>: {} error(s), {} warning(s)", errors, warns);
    }

    // ------------------------------------------------------------------------
    // Hooks
    println!("[INIT]");
    let mut hooks: Vec<Box<dyn Hook>> = vec![];
    if args.trace {
        hooks.push(Box::new(Trace));
    }
    if !dump.is_empty() {
        hooks.push(Box::new(dump));
    }
    if args.stall {
        hooks.push(Box::new(Stall::new()));
    }

    // ------------------------------------------------------------------------
    // Main loop
    let (state, exit) = pvm::hooks::drive(state, &mut hooks, args.tmax);
    match exit {
        Exit::Halted => {}
        Exit::StepLimit => cprintln!(
            "<yellow,bold>warn</>: step limit reached at line {}, program did not halt",
            state.ip() + 1
        ),
        Exit::Stalled => cprintln!("<yellow,bold>warn</>: stopped before halting"),
    }

    print!("{}", util::report(state.vars()));
    Ok(())
}
