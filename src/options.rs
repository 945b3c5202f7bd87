use crate::output::Output;
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;
use structopt::StructOpt;

const NAME: &str = "prioq";

const ABOUT: &str = "
prioq replays a script of priority queue operations.
Each line is `enqueue <priority> <value>`, `dequeue`, `drain` or `len`.
Values are dequeued highest priority first, first-in first-out among equals.
The script is read from PATH, or stdin if no path is given.
";

pub(crate) enum Strategy {
    Heap,
    Scan,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(strategy: &str) -> Result<Self, Self::Err> {
        match strategy {
            "heap" => Ok(Self::Heap),
            "scan" => Ok(Self::Scan),
            _ => Err(format!("{}: not a valid queue", strategy)),
        }
    }
}

#[derive(StructOpt)]
#[structopt(name = NAME, about = ABOUT)]
pub(crate) struct Options {
    #[structopt(parse(from_os_str), help = "path to script")]
    pub(crate) path: Option<PathBuf>,

    #[structopt(
        long,
        help = "queue realization",
        possible_values = &["heap", "scan"],
        default_value = "heap"
    )]
    pub(crate) queue: Strategy,

    #[structopt(
        long,
        help = "result output",
        possible_values = &["text", "silent"],
        default_value = "text"
    )]
    pub(crate) output: Output,

    #[structopt(long, help = "fail on dequeue from an empty queue")]
    pub(crate) strict: bool,

    #[structopt(
        long,
        help = "log level",
        possible_values = &["off", "error", "warn", "info", "debug", "trace"],
        default_value = "warn"
    )]
    pub(crate) log_level: LevelFilter,
}

impl Options {
    pub(crate) fn parse() -> Self {
        Self::from_args()
    }

    pub(crate) fn script_name(&self) -> String {
        self.path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<stdin>".to_string())
    }
}
