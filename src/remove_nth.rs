use log::{debug, trace};

use crate::linked_list::{Link, ListNode};

/// Removes the node `n` positions from the end of the list (1 is the last node) and returns the
/// new head.
///
/// When `n` is 0 or exceeds the length of the list nothing is removed and the list comes back
/// as it went in. No node is allocated; the list is relinked in place.
pub fn remove_nth_from_end<T>(mut head: Link<T>, n: usize) -> Link<T> {
    take_nth_from_end(&mut head, n);
    head
}

/// In-place version of [`remove_nth_from_end`]. Relinks the list behind `head` and hands back
/// the detached node (its `next` is cleared), or `None` when the offset is out of range.
pub fn take_nth_from_end<T>(head: &mut Link<T>, n: usize) -> Option<Box<ListNode<T>>> {
    if n == 0 {
        debug!("offset 0 does not name a node, leaving list unchanged");
        return None;
    }

    // The head slot stands in for a sentinel node in front of the list. Starting there, the fast
    // cursor has to make n + 1 hops; the first one lands on the head itself.
    let mut fast = head.as_deref();
    for hop in 0..n {
        match fast {
            Some(node) => fast = node.next.as_deref(),
            None => {
                debug!("offset {} exceeds list length {}, leaving list unchanged", n, hop);
                return None;
            }
        }
    }

    // Lockstep phase. The fast cursor only reads, so it counts the steps and the slow cursor
    // replays them once the shared borrow is gone.
    let mut steps = 0;
    while let Some(node) = fast {
        fast = node.next.as_deref();
        steps += 1;
    }

    let mut slow: &mut Link<T> = head;
    for _ in 0..steps {
        match slow {
            Some(node) => slow = &mut node.next,
            None => return None,
        }
    }

    // slow is the slot holding the target: point it at the target's successor.
    let mut target = slow.take()?;
    *slow = target.next.take();
    trace!("removed node at offset {} from the end ({} from the front)", n, steps);
    Some(target)
}
