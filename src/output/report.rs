use prioq::EmptyQueue;
use std::fmt;

/// Sink for the results of replaying a script.
pub(crate) trait Report {
    fn value(&mut self, _value: &str) {}

    fn empty(&mut self, _error: &EmptyQueue) {}

    fn length(&mut self, _length: usize) {}

    fn statistic<T: fmt::Display>(&mut self, _name: &str, _value: T) {}
}

pub(crate) struct Text;

impl Report for Text {
    fn value(&mut self, value: &str) {
        println!("{}", value);
    }

    fn empty(&mut self, error: &EmptyQueue) {
        println!("# {}", error);
    }

    fn length(&mut self, length: usize) {
        println!("# length: {}", length);
    }

    fn statistic<T: fmt::Display>(&mut self, name: &str, value: T) {
        println!("# {}: {}", name, value);
    }
}

pub(crate) struct Silent;
impl Report for Silent {}
