//! Bounded lock-free MPMC ring queue.
//!
//! Each slot carries a turn counter that encodes whose round it is to write
//! or read that slot, so producers and consumers coordinate per slot instead
//! of through a head/tail gap test. The turn counter doubles as ABA
//! protection: a stale cursor always finds a slot whose turn has moved on.

use crossbeam_utils::CachePadded;
use std::cell::UnsafeCell;
use std::mem::MaybeUninit;
use std::sync::atomic::{AtomicU64, Ordering};

/// One ring slot: turn counter plus storage for a single item.
///
/// Turn life-cycle for slot `i`: starts at 0; after the k-th enqueue it is
/// `2k + 1` (full), after the k-th dequeue `2(k + 1)` (empty again).
struct Slot<T> {
    turn: CachePadded<AtomicU64>,
    value: UnsafeCell<MaybeUninit<T>>,
}

/// Bounded multi-producer multi-consumer queue.
///
/// Neither side ever blocks: a full queue rejects the enqueue and hands the
/// item back, an empty queue returns `None`. Capacity is rounded up to the
/// next power of two and one slot is reserved to disambiguate empty from
/// full, so at most `capacity() - 1` items are live at once.
///
/// # Example
///
/// ```
/// use ringlog::RingQueue;
///
/// let queue = RingQueue::with_capacity(16);
/// queue.try_enqueue(7u32).unwrap();
/// assert_eq!(queue.try_dequeue(), Some(7));
/// assert_eq!(queue.try_dequeue(), None);
/// ```
pub struct RingQueue<T> {
    capacity: u64,
    mask: u64,
    head: CachePadded<AtomicU64>,
    tail: CachePadded<AtomicU64>,
    slots: Box<[Slot<T>]>,
}

// SAFETY: slot storage is handed off between threads through the turn
// counter's acquire/release pair; a slot is only ever read or written by the
// thread that won the corresponding cursor CAS.
unsafe impl<T: Send> Send for RingQueue<T> {}
unsafe impl<T: Send> Sync for RingQueue<T> {}

impl<T> RingQueue<T> {
    /// Create a queue holding up to `capacity - 1` items, where `capacity`
    /// is `requested` rounded up to the next power of two (minimum 2).
    pub fn with_capacity(requested: usize) -> Self {
        let capacity = requested.max(2).next_power_of_two() as u64;
        let slots = (0..capacity)
            .map(|_| Slot {
                turn: CachePadded::new(AtomicU64::new(0)),
                value: UnsafeCell::new(MaybeUninit::uninit()),
            })
            .collect();

        Self {
            capacity,
            mask: capacity - 1,
            head: CachePadded::new(AtomicU64::new(0)),
            tail: CachePadded::new(AtomicU64::new(0)),
            slots,
        }
    }

    /// Attempt to enqueue without blocking.
    ///
    /// Returns the item back when the queue is full so the caller decides
    /// what to do with it (the logger drops it).
    pub fn try_enqueue(&self, item: T) -> Result<(), T> {
        loop {
            let head = self.head.load(Ordering::Relaxed);
            let tail = self.tail.load(Ordering::Acquire);
            if head.wrapping_sub(tail) >= self.capacity - 1 {
                return Err(item);
            }

            let idx = (head & self.mask) as usize;
            let turn = head / self.capacity;
            let slot = &self.slots[idx];
            if slot.turn.load(Ordering::Acquire) != 2 * turn {
                // Slot not yet vacated for this round.
                return Err(item);
            }

            if self
                .head
                .compare_exchange_weak(head, head + 1, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                // The CAS won us exclusive write access to this slot for
                // this turn; the consumer will not touch it until the turn
                // store below publishes it.
                unsafe { (*slot.value.get()).write(item) };
                slot.turn.store(2 * turn + 1, Ordering::Release);
                return Ok(());
            }
            // Another producer advanced head; retry with fresh cursors.
        }
    }

    /// Attempt to dequeue without blocking. `None` means empty.
    pub fn try_dequeue(&self) -> Option<T> {
        loop {
            let tail = self.tail.load(Ordering::Relaxed);
            let idx = (tail & self.mask) as usize;
            let turn = tail / self.capacity;
            let slot = &self.slots[idx];
            if slot.turn.load(Ordering::Acquire) != 2 * turn + 1 {
                return None;
            }

            if self
                .tail
                .compare_exchange_weak(tail, tail + 1, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                let item = unsafe { (*slot.value.get()).assume_init_read() };
                slot.turn.store(2 * (turn + 1), Ordering::Release);
                return Some(item);
            }
        }
    }

    /// Actual capacity after power-of-two rounding. Usable space is one
    /// less.
    pub fn capacity(&self) -> usize {
        self.capacity as usize
    }

    /// Best-effort snapshot of the number of live items.
    pub fn len(&self) -> usize {
        let head = self.head.load(Ordering::Relaxed);
        let tail = self.tail.load(Ordering::Relaxed);
        head.saturating_sub(tail) as usize
    }

    /// True when the cursors coincide. Best-effort under concurrency, exact
    /// once producers and consumers have quiesced.
    pub fn is_empty(&self) -> bool {
        self.head.load(Ordering::Relaxed) == self.tail.load(Ordering::Relaxed)
    }
}

impl<T> Drop for RingQueue<T> {
    fn drop(&mut self) {
        // &mut self guarantees no concurrent access; dequeue the remaining
        // items so their destructors run.
        while self.try_dequeue().is_some() {}
    }
}
