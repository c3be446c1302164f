use std::fmt;

/// A list is nothing more than the link to its head node. `None` is the empty list.
pub type Link<T> = Option<Box<ListNode<T>>>;

pub struct ListNode<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> ListNode<T> {
    pub fn new(value: T, next: Link<T>) -> ListNode<T> {
        ListNode { value, next }
    }
}

/// Builds a list holding `values` in the order they are yielded.
pub fn build_list<T, I>(values: I) -> Link<T>
where
    I: IntoIterator<Item = T>,
{
    let mut head: Link<T> = None;
    let mut tail: &mut Link<T> = &mut head;
    for value in values {
        let node = tail.insert(Box::new(ListNode::new(value, None)));
        tail = &mut node.next;
    }
    head
}

/// Copies the values of the list out in traversal order. The list is left untouched.
pub fn list_to_vec<T: Clone>(head: &Link<T>) -> Vec<T> {
    iter(head).cloned().collect()
}

pub fn list_len<T>(head: &Link<T>) -> usize {
    iter(head).count()
}

pub fn iter<T>(head: &Link<T>) -> Iter<'_, T> {
    Iter {
        current: head.as_deref(),
    }
}

pub struct Iter<'a, T> {
    current: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(&node.value)
    }
}

impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut current: Option<&ListNode<T>> = Some(self);
        while let Some(node) = current {
            list.entry(&node.value);
            current = node.next.as_deref();
        }
        list.finish()
    }
}

// Recursive drop would blow the stack on long chains.
impl<T> Drop for ListNode<T> {
    fn drop(&mut self) {
        let mut current = self.next.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T: Clone> Clone for ListNode<T> {
    fn clone(&self) -> Self {
        ListNode {
            value: self.value.clone(),
            next: build_list(iter(&self.next).cloned()),
        }
    }
}

impl<T: PartialEq> PartialEq for ListNode<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut current_a: Option<&ListNode<T>> = Some(self);
        let mut current_b: Option<&ListNode<T>> = Some(other);
        loop {
            match (current_a, current_b) {
                (None, None) => return true,
                (Some(node_a), Some(node_b)) => {
                    if node_a.value != node_b.value {
                        return false;
                    }
                    current_a = node_a.next.as_deref();
                    current_b = node_b.next.as_deref();
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for ListNode<T> {}
