extern crate ordered_float;
extern crate num_traits;

use self::ordered_float::{NotNan,FloatIsNan};
use std::collections::BinaryHeap;
use std::cmp::Ordering;
use self::num_traits::cast::ToPrimitive;

struct HeapEntry<T> {
    pub key: NotNan<f64>,
    pub seq: u64,
    pub value: T
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &HeapEntry<T>) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &HeapEntry<T>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//Reversed comparison: BinaryHeap is a max-heap, we want the smallest key
//out first, and among equal keys the lowest insertion sequence number
impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other:&HeapEntry<T>) -> Ordering {
        other.key.cmp(&self.key).then(other.seq.cmp(&self.seq))
    }
}

#[derive(Default)]
pub struct FloatBinaryHeap<T> {
    heap: BinaryHeap<HeapEntry<T>>,
    next_seq: u64,
}

impl<T> FloatBinaryHeap<T> {
    pub fn new () -> FloatBinaryHeap<T> {
        FloatBinaryHeap {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push (&mut self, key: f64, value: T) {
        let key = match NotNan::new(key) {
            Ok(num) => num,
            Err(FloatIsNan) => {
                panic!("Float is Nan in Heap")
            }
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(HeapEntry { key, seq, value })
    }

    pub fn peek(&self) -> Option<(f64, &T)> {
        match self.heap.peek() {
            None => None,
            Some(r) => Some((r.key.to_f64().unwrap(), &r.value))
        }
    }

    pub fn pop (&mut self) -> Option<(f64, T)> {
        match self.heap.pop() {
            None => None,
            Some(r) => {
                Some((r.key.to_f64().unwrap(), r.value))
            }
        }
    }

    pub fn len (&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
