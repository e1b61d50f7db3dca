// exprtree: single-digit arithmetic evaluator with expression tree visualization

use std::fs::File;
use std::io::{self, BufRead};

use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, LevelFilter};
use ratatui::{backend::CrosstermBackend, Terminal};

use exprtree::config::Settings;
use exprtree::parser::DEFAULT_MAX_DEPTH;
use exprtree::report;
use exprtree::tree::{TreeLayout, DEFAULT_INDENT};
use exprtree::ui::App;

#[derive(Parser, Debug)]
#[clap(version, author, about)]
struct Args {
    #[clap(
        action,
        help = "evaluate this expression, print the result and exit \
                instead of starting the interactive UI"
    )]
    expression: Option<String>,
    #[clap(short, long, action, help = "evaluate each line read from stdin")]
    batch: bool,
    #[clap(short, long, value_enum, default_value = "vertical",
           help = "how to draw the expression tree")]
    layout: LayoutArg,
    #[clap(long, value_parser, default_value_t = DEFAULT_INDENT,
           help = "spaces per tree level in the vertical layout")]
    indent: usize,
    #[clap(long, value_parser, default_value_t = DEFAULT_MAX_DEPTH,
           help = "deepest parenthesis nesting accepted")]
    max_depth: usize,
    #[clap(long, action, help = "print only the result, not the tree")]
    no_tree: bool,
    #[clap(short, long, action = clap::ArgAction::Count,
           help = "show more in logs, may be provided multiple times")]
    verbose: u8,
    #[clap(long, action,
           help = "the file to write logs to, by default they go to stderr, \
                   or are swallowed in interactive mode")]
    log_file: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LayoutArg {
    Vertical,
    Matrix,
}

impl From<LayoutArg> for TreeLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Vertical => TreeLayout::Vertical,
            LayoutArg::Matrix => TreeLayout::Matrix,
        }
    }
}

fn init_logging(args: &Args, interactive: bool) -> io::Result<()> {
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else if interactive {
        // stderr belongs to the UI
        return Ok(());
    }

    builder.init();
    Ok(())
}

/// Evaluate one line and print its report. Returns false if it failed.
fn evaluate_and_print(input: &str, settings: &Settings) -> bool {
    match settings.parser(input).parse() {
        Ok((value, tree)) => {
            for line in report::success_lines(input, value, &tree, settings) {
                println!("{}", line);
            }
            true
        }
        Err(e) => {
            for line in report::error_lines(input, &e) {
                eprintln!("{}", line);
            }
            false
        }
    }
}

fn run_batch(settings: &Settings) -> io::Result<bool> {
    let mut all_ok = true;
    let mut first = true;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if !first {
            println!();
        }
        first = false;
        all_ok &= evaluate_and_print(&line, settings);
    }

    Ok(all_ok)
}

fn run_interactive(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    info!("evaluated {} line(s)", app.history.len());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let interactive = args.expression.is_none() && !args.batch;
    init_logging(&args, interactive)?;

    let settings = Settings {
        layout: args.layout.into(),
        indent: args.indent,
        max_depth: args.max_depth,
        show_tree: !args.no_tree,
    };
    info!("settings: {:?}", settings);

    if let Some(expression) = &args.expression {
        if !evaluate_and_print(expression, &settings) {
            std::process::exit(1);
        }
        return Ok(());
    }

    if args.batch {
        if !run_batch(&settings)? {
            std::process::exit(1);
        }
        return Ok(());
    }

    run_interactive(settings)
}
