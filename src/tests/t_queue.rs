use crate::lower::FunctionQueue;
use crate::resolve::DefId;

#[test]
fn test_queue_enqueue_idempotent() {
    let mut queue = FunctionQueue::new();
    queue.enqueue(DefId(7));
    queue.enqueue(DefId(7));
    queue.enqueue(DefId(7));

    assert_eq!(queue.dequeue(), Some(DefId(7)));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_queue_fifo_order() {
    let mut queue = FunctionQueue::new();
    queue.enqueue(DefId(3));
    queue.enqueue(DefId(1));
    queue.enqueue(DefId(2));
    queue.enqueue(DefId(1));

    assert_eq!(queue.dequeue(), Some(DefId(3)));
    assert_eq!(queue.dequeue(), Some(DefId(1)));
    assert_eq!(queue.dequeue(), Some(DefId(2)));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_queue_never_requeues_drained_entries() {
    let mut queue = FunctionQueue::new();
    queue.enqueue(DefId(0));
    assert_eq!(queue.dequeue(), Some(DefId(0)));

    // Seen-set membership outlives the pending entry.
    queue.enqueue(DefId(0));
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), None);
}
