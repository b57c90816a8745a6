// gol-cli - terminal front end for the Game of Life kernel.

use std::env;
use std::io::{self, Write};
use std::process::exit;
use std::str::FromStr;
use std::thread;
use std::time::{Duration, Instant};

use gol_kernel::{Boundary, Config, Kernel};

struct Args {
    rows: usize,
    cols: usize,
    n_steps: u64,
    fps: u64,
    with_threads: bool,
    boundary: Boundary,
    seed: Option<u64>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            // 0 means "use the terminal size".
            rows: 0,
            cols: 0,
            n_steps: 1000,
            fps: 15,
            with_threads: true,
            boundary: Boundary::Periodic,
            seed: None,
        }
    }
}

fn print_help() -> ! {
    println!("--------------------------------------------------------------------------------");
    println!("Game of Life");
    println!("--------------------------------------------------------------------------------");
    println!("gol-cli");
    println!("   --width <number>      : width of the domain, default is the terminal width.");
    println!("   --height <number>     : height of the domain, default is the terminal height.");
    println!("   --steps <number>      : number of steps, default = 1000.");
    println!("   --fps <number>        : target generations per second, default = 15.");
    println!("   --boundary <mode>     : constant, periodic or mirror, default = periodic.");
    println!("   --seed <number>       : fixed seed for the initial condition.");
    println!("   --without-threads     : compute single threaded.");
    println!("   --with-threads        : compute multi-threaded.");
    println!("   -h, --help            : info and help message.");
    exit(0);
}

fn numeric_arg<T: FromStr>(flag: &str, value: Option<String>) -> T {
    match value.map(|v| v.parse()) {
        Some(Ok(parsed)) => parsed,
        _ => {
            eprintln!("{flag} needs a numeric argument");
            exit(2);
        }
    }
}

fn boundary_arg(value: Option<String>) -> Boundary {
    match value.as_deref() {
        Some("constant") => Boundary::Constant,
        Some("periodic") => Boundary::Periodic,
        Some("mirror") => Boundary::Mirror,
        _ => {
            eprintln!("--boundary needs one of: constant, periodic, mirror");
            exit(2);
        }
    }
}

fn parse_arguments() -> Args {
    let mut parsed = Args::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => print_help(),
            "--width" => parsed.cols = numeric_arg("--width", args.next()),
            "--height" => parsed.rows = numeric_arg("--height", args.next()),
            "--steps" => parsed.n_steps = numeric_arg("--steps", args.next()),
            "--fps" => parsed.fps = numeric_arg("--fps", args.next()),
            "--boundary" => parsed.boundary = boundary_arg(args.next()),
            "--seed" => parsed.seed = Some(numeric_arg("--seed", args.next())),
            "--with-threads" => parsed.with_threads = true,
            "--without-threads" => parsed.with_threads = false,
            other => {
                eprintln!("unknown argument: {other}");
                exit(2);
            }
        }
    }
    parsed
}

/// Fit the requested domain to the terminal. A request of 0 or anything
/// larger than the window falls back to the window size, minus one row for
/// the status line; an unreadable terminal falls back to 29x80.
fn fit_to_terminal(rows: usize, cols: usize) -> (usize, usize) {
    let (term_cols, term_rows) = match crossterm::terminal::size() {
        Ok((c, r)) => (c as usize, r as usize),
        Err(_) => (80, 30),
    };
    let mut rows = if rows == 0 || rows >= term_rows {
        term_rows.saturating_sub(1)
    } else {
        rows
    };
    let mut cols = if cols == 0 || cols >= term_cols {
        term_cols
    } else {
        cols
    };
    if rows < 3 {
        rows = 29;
    }
    if cols < 3 {
        cols = 80;
    }
    (rows, cols)
}

fn main() {
    env_logger::init();
    let args = parse_arguments();
    let (rows, cols) = fit_to_terminal(args.rows, args.cols);
    let config = Config {
        rows,
        cols,
        with_threads: args.with_threads,
        boundary: args.boundary,
        seed: args.seed,
    };
    let mut kernel = match Kernel::new(config) {
        Ok(kernel) => kernel,
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    };
    // Leave the partitioning diagnostics readable before the game loop
    // starts repainting the screen.
    thread::sleep(Duration::from_secs(1));

    let frame = Duration::from_millis(1000 / args.fps.max(1));
    let mut stdout = io::stdout();
    for _ in 0..args.n_steps {
        let started = Instant::now();
        // VT100 escape codes: cursor home, clear to end of screen.
        print!("\x1b[H\x1b[J{}", kernel.to_text());
        print!(
            "generation {:5} | {}x{} | {:?} boundary | {} worker(s) on {} core(s)",
            kernel.generation(),
            kernel.rows(),
            kernel.cols(),
            kernel.boundary(),
            kernel.worker_count(),
            kernel.core_count(),
        );
        let _ = stdout.flush();
        kernel.step();
        thread::sleep(frame.saturating_sub(started.elapsed()));
    }
    println!();
}
