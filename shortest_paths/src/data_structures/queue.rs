//! FIFO ring buffer queue.
//!
//! Variables:
//!   buf  : Vec<Option<T>>  = circular backing array, length C
//!   head : usize           = index of next get
//!   tail : usize           = index of next put
//!   len  : usize           = current occupancy
//!
//! Equations:
//!   put(x): buf[tail] = x,  tail = (tail+1) mod C,  len += 1
//!   get():  x = buf[head],  head = (head+1) mod C,  len -= 1
//!   empty iff len == 0
//!
//!   A put on a full buffer re-lays the ring out into a buffer of
//!   length 2C (head moves to 0) instead of overwriting the oldest slot.

pub struct Queue<T> {
    buf: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Queue<T> {
    pub fn new(capacity: usize) -> Self {
        let mut buf = Vec::with_capacity(capacity.max(1));
        buf.resize_with(capacity.max(1), || None);
        Self { buf, head: 0, tail: 0, len: 0 }
    }

    pub fn put(&mut self, val: T) {
        if self.len == self.buf.len() {
            self.grow();
        }
        self.buf[self.tail] = Some(val);
        self.tail = (self.tail + 1) % self.buf.len();
        self.len += 1;
    }

    pub fn get(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let val = self.buf[self.head].take();
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        val
    }

    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buf[self.head].as_ref()
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn grow(&mut self) {
        let capacity = self.buf.len();
        let mut buf = Vec::with_capacity(capacity * 2);
        for i in 0..self.len {
            buf.push(self.buf[(self.head + i) % capacity].take());
        }
        buf.resize_with(capacity * 2, || None);
        self.buf = buf;
        self.head = 0;
        self.tail = self.len;
    }
}
