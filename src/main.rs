mod input;
mod options;
mod output;
mod replay;
mod statistics;

use crate::options::{Options, Strategy};
use crate::output::report::{Report, Silent, Text};
use crate::output::{exit, status, Output};
use crate::statistics::Statistics;
use log::info;
use prioq::script::Command;
use prioq::{LinearQueue, PriorityQueue, Queue};

fn run<Q: Queue<String>, R: Report>(
    options: &Options,
    mut queue: Q,
    mut report: R,
    commands: Vec<Command>,
) -> ! {
    let name = options.script_name();
    let mut statistics = Statistics::default();
    let result = replay::replay(
        &mut queue,
        commands,
        options.strict,
        &mut report,
        &mut statistics,
    );
    statistics.record(&mut report, queue.len());
    match result {
        Ok(()) => {
            status::completed(&name);
            exit::success()
        }
        Err(err) => {
            status::empty_queue(&name, &err);
            exit::failure()
        }
    }
}

fn report<Q: Queue<String>>(
    options: &Options,
    queue: Q,
    commands: Vec<Command>,
) -> ! {
    match options.output {
        Output::Text => run(options, queue, Text, commands),
        Output::Silent => run(options, queue, Silent, commands),
    }
}

fn main() {
    let options = Options::parse();
    output::log::start_logging(options.log_level);
    let commands = input::load_script(&options);
    info!("{} commands from {}", commands.len(), options.script_name());

    match options.queue {
        Strategy::Heap => {
            let capacity = commands.len();
            report(&options, PriorityQueue::with_capacity(capacity), commands)
        }
        Strategy::Scan => {
            let capacity = commands.len();
            report(&options, LinearQueue::with_capacity(capacity), commands)
        }
    }
}
