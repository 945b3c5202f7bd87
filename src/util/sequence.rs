/// Insertion stamp of an entry. Earlier stamps compare smaller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Sequence(u64);

/// Per-queue source of `Sequence` stamps. Stamps are never handed out
/// twice, even after the entry carrying one has been extracted.
#[derive(Debug, Default)]
pub(crate) struct SequenceCounter {
    next: u64,
}

impl SequenceCounter {
    pub(crate) fn fresh(&mut self) -> Sequence {
        let sequence = Sequence(self.next);
        self.next += 1;
        sequence
    }

    #[cfg(test)]
    pub(crate) fn issued(&self) -> u64 {
        self.next
    }
}
