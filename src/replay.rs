use crate::output::report::Report;
use crate::statistics::Statistics;
use log::{info, warn};
use prioq::script::Command;
use prioq::{EmptyQueue, Queue};

/// Apply `commands` in order. Under `strict`, the first dequeue from an
/// empty queue stops the replay and is returned; otherwise it is reported
/// and the replay carries on.
pub(crate) fn replay<Q, R>(
    queue: &mut Q,
    commands: Vec<Command>,
    strict: bool,
    report: &mut R,
    statistics: &mut Statistics,
) -> Result<(), EmptyQueue>
where
    Q: Queue<String>,
    R: Report,
{
    for command in commands {
        match command {
            Command::Enqueue { value, priority } => {
                queue.enqueue(value, priority);
                statistics.increment_enqueued();
            }
            Command::Dequeue => match queue.dequeue() {
                Ok(value) => {
                    report.value(&value);
                    statistics.increment_dequeued();
                }
                Err(err) => {
                    statistics.increment_empty();
                    if strict {
                        return Err(err);
                    }
                    warn!("{}", err);
                    report.empty(&err);
                }
            },
            Command::Drain => {
                info!("draining {} entries", queue.len());
                for value in queue.drain() {
                    report.value(&value);
                    statistics.increment_dequeued();
                }
            }
            Command::Len => report.length(queue.len()),
        }
    }
    Ok(())
}
