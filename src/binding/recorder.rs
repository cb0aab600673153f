use super::{Binding, Slot};

/// One recorded binding write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub slot: Slot,
    pub key: String,
    pub text: String,
}

/// A binding that records writes instead of touching a document.
///
/// Every write counts as a single element.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    writes: Vec<RecordedWrite>,
}

impl Recorder {
    pub fn writes(&self) -> &[RecordedWrite] {
        &self.writes
    }

    /// Take the recorded writes, leaving the recorder empty.
    pub fn drain(&mut self) -> Vec<RecordedWrite> {
        std::mem::take(&mut self.writes)
    }
}

impl Binding for Recorder {
    fn write(&mut self, slot: Slot, key: &str, text: &str) -> usize {
        self.writes.push(RecordedWrite {
            slot,
            key: key.to_string(),
            text: text.to_string(),
        });
        1
    }
}
