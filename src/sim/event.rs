use float_binaryheap::FloatBinaryHeap;

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum EventKind {
    Arrival,
    Departure,
}

/// Time-ordered queue of pending events. Events with equal timestamps
/// come out in scheduling order.
pub struct EventQueue {
    pending: FloatBinaryHeap<EventKind>,
}

impl EventQueue {
    pub fn new () -> EventQueue {
        EventQueue {
            pending: FloatBinaryHeap::new()
        }
    }

    pub fn schedule (&mut self, time: f64, kind: EventKind) {
        self.pending.push(time, kind)
    }

    pub fn next_event (&mut self) -> Option<(f64,EventKind)> {
        self.pending.pop()
    }

    pub fn len (&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty (&self) -> bool {
        self.pending.is_empty()
    }
}
