use prioq::script::ScriptError;
use prioq::EmptyQueue;
use std::fmt;
use std::io;

pub(crate) fn os_error<P: fmt::Display>(path: P, error: &io::Error) {
    println!("# failed to read {}: {}", path, error);
    println!("# status OSError");
}

pub(crate) fn input_error(name: &str, error: &ScriptError) {
    println!("# input error in {}: {}", name, error);
    println!("# status InputError");
}

pub(crate) fn empty_queue(name: &str, error: &EmptyQueue) {
    println!("# {}", error);
    println!("# status EmptyQueue for {}", name);
}

pub(crate) fn completed(name: &str) {
    println!("# status Completed for {}", name);
}
