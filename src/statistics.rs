use crate::output::report::Report;

#[derive(Default)]
pub(crate) struct Statistics {
    enqueued: usize,
    dequeued: usize,
    empty: usize,
}

impl Statistics {
    pub(crate) fn record<R: Report>(&self, record: &mut R, remaining: usize) {
        record.statistic("enqueued", self.enqueued);
        record.statistic("dequeued", self.dequeued);
        record.statistic("empty", self.empty);
        record.statistic("remaining", remaining);
    }

    pub(crate) fn increment_enqueued(&mut self) {
        self.enqueued += 1;
    }

    pub(crate) fn increment_dequeued(&mut self) {
        self.dequeued += 1;
    }

    pub(crate) fn increment_empty(&mut self) {
        self.empty += 1;
    }
}
