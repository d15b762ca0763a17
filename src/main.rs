#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

use std::fmt::Display;
use std::io::{self, Read, Write};
use std::process::exit;
use std::time::{Duration, Instant};

use lazy_format::lazy_format;
use log::info;

use life::config::{CellSource, Config, USAGE};
use life::{parse_generations, parse_grid, render, run};

#[inline(always)]
fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let end = Instant::now();
    (result, end - start)
}

trait ReadString: Read {
    fn read_string(&mut self) -> io::Result<String> {
        let mut data = String::new();
        self.read_to_string(&mut data).map(|_| data)
    }
}

impl<T: Read> ReadString for T {}

fn fail(err: impl Display) -> ! {
    eprintln!("{}", err);
    exit(1);
}

fn main() {
    let config = Config::from_env().unwrap_or_else(|err| {
        eprintln!("{}\n\n{}", err, USAGE);
        exit(1);
    });

    if let Err(err) = simple_logger::init_with_level(config.log_level) {
        eprintln!("Error initializing logger: {}", err);
    }

    let cells = match config.cells {
        CellSource::Argument(cells) => cells,
        CellSource::Stdin => io::stdin()
            .read_string()
            .unwrap_or_else(|err| fail(lazy_format!("Error reading input: {}", err))),
    };

    let grid = parse_grid(&cells).unwrap_or_else(|err| fail(err));
    let generations = parse_generations(&config.generations).unwrap_or_else(|err| fail(err));

    let (_, duration) = timed(move || {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        run(grid, generations, |_, grid| {
            if let Err(err) = write!(out, "{}", render(grid)) {
                fail(lazy_format!("Error writing output: {}", err));
            }
        })
    });

    info!("simulated {} generations in {:?}", generations, duration);
}
