//! Adapters between the protocol and `std::sync::mpsc` channels.
//!
//! The channel's own synchronization is opaque to the protocol: the core
//! only sees a blocking pull on the receiving side.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;

use crate::iter::LazyIterator;
use crate::optional::Optional;

/// Yields values received from a channel.
///
/// Created by [`from_receiver`]. Each pull blocks until a value arrives; the
/// iterator is exhausted once every sender has been dropped and the buffered
/// values have been drained.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ReceiverIter<T> {
    receiver: Receiver<T>,
}

/// Adapts `receiver` into the protocol.
///
/// # Examples
///
/// ```rust
/// use lazyseq::bridge::from_receiver;
/// use lazyseq::iter::LazyIterator;
/// use std::sync::mpsc;
/// use std::thread;
///
/// let (sender, receiver) = mpsc::channel();
/// thread::spawn(move || {
///     for value in [1, 2, 3] {
///         sender.send(value).unwrap();
///     }
/// });
///
/// assert_eq!(from_receiver(receiver).collect_vec(), vec![1, 2, 3]);
/// ```
pub const fn from_receiver<T>(receiver: Receiver<T>) -> ReceiverIter<T> {
    ReceiverIter { receiver }
}

impl<T> ReceiverIter<T> {
    /// Returns the wrapped receiver.
    pub fn into_inner(self) -> Receiver<T> {
        self.receiver
    }
}

impl<T> LazyIterator for ReceiverIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Optional<T> {
        self.receiver.recv().ok().into()
    }
}

/// Drains `iterator` into a channel from a producer thread.
///
/// The channel is a rendezvous channel, so the producer pulls one element at
/// a time and only as fast as the receiving side consumes. The producer stops
/// as soon as the iterator is exhausted or the receiver is dropped; the
/// sender is then dropped, which exhausts the receiving side.
///
/// # Examples
///
/// ```rust
/// use lazyseq::bridge::{from_receiver, to_receiver};
/// use lazyseq::iter::LazyIterator;
/// use lazyseq::sources::repeat;
///
/// let receiver = to_receiver(repeat(5).take(3));
/// assert_eq!(from_receiver(receiver).collect_vec(), vec![5, 5, 5]);
/// ```
pub fn to_receiver<I>(iterator: I) -> Receiver<I::Item>
where
    I: LazyIterator + Send + 'static,
    I::Item: Send + 'static,
{
    to_receiver_with_capacity(iterator, 0)
}

/// Like [`to_receiver`], buffering up to `capacity` elements ahead of the
/// receiving side.
pub fn to_receiver_with_capacity<I>(iterator: I, capacity: usize) -> Receiver<I::Item>
where
    I: LazyIterator + Send + 'static,
    I::Item: Send + 'static,
{
    let (sender, receiver) = mpsc::sync_channel(capacity);
    thread::spawn(move || produce(iterator, &sender));
    receiver
}

fn produce<I: LazyIterator>(mut iterator: I, sender: &SyncSender<I::Item>) {
    #[cfg(feature = "tracing")]
    tracing::debug!("channel producer started");

    let mut sent: usize = 0;
    while let Optional::Present(value) = iterator.next() {
        if sender.send(value).is_err() {
            #[cfg(feature = "tracing")]
            tracing::debug!(sent, "receiver dropped; channel producer stopping early");
            return;
        }
        sent += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(sent, "channel producer drained iterator");
    #[cfg(not(feature = "tracing"))]
    let _ = sent;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{empty, from_fn, repeat};
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn test_roundtrip_through_channel() {
        let receiver = to_receiver(repeat(5).take(3));
        assert_eq!(from_receiver(receiver).collect_vec(), vec![5, 5, 5]);
    }

    #[rstest]
    fn test_empty_roundtrip() {
        let receiver = to_receiver(empty::<i32>());
        assert!(from_receiver(receiver).collect_vec().is_empty());
    }

    #[rstest]
    fn test_receiver_exhaustion_is_permanent() {
        let (sender, receiver) = mpsc::channel();
        sender.send(1).unwrap();
        drop(sender);

        let mut received = from_receiver(receiver);
        assert_eq!(received.next(), Optional::Present(1));
        assert_eq!(received.next(), Optional::Absent);
        assert_eq!(received.next(), Optional::Absent);
    }

    #[rstest]
    fn test_producer_stops_when_receiver_dropped() {
        let pulls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&pulls);
        let infinite = from_fn(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Optional::Present(0_u8)
        });

        let receiver = to_receiver(infinite);
        let mut received = from_receiver(receiver);
        assert_eq!(received.next(), Optional::Present(0));
        drop(received);

        // The producer exits once its pending send fails, so pulls stop
        // growing; a rendezvous channel allows at most one element in flight.
        std::thread::sleep(std::time::Duration::from_millis(50));
        let settled = pulls.load(Ordering::SeqCst);
        std::thread::sleep(std::time::Duration::from_millis(50));
        assert_eq!(pulls.load(Ordering::SeqCst), settled);
        assert!(settled <= 3);
    }
}
