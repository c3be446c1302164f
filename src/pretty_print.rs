use std::fmt;
use std::fmt::Write;

use crate::linked_list::{iter, list_len, Link, ListNode};

/// Displays a list as `[1, 2, 3]`, or `[]` when empty.
pub struct Bracketed<'a, T>(pub &'a Link<T>);

/// Displays a list as `1 -> 2 -> 3`, or `null` when empty.
pub struct Chain<'a, T>(pub &'a Link<T>);

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    head: &Link<T>,
    separator: &str,
) -> fmt::Result {
    for (i, value) in iter(head).enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for Bracketed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_joined(f, self.0, ", ")?;
        f.write_str("]")
    }
}

impl<T: fmt::Display> fmt::Display for Chain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_none() {
            return f.write_str("null");
        }
        write_joined(f, self.0, " -> ")
    }
}

/// A node displays as the bracketed list that starts at it.
impl<T: fmt::Display> fmt::Display for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.value)?;
        for value in iter(&self.next) {
            write!(f, ", {}", value)?;
        }
        f.write_str("]")
    }
}

pub fn list_to_string<T: fmt::Display>(head: &Link<T>) -> String {
    Bracketed(head).to_string()
}

pub fn list_to_chain<T: fmt::Display>(head: &Link<T>) -> String {
    Chain(head).to_string()
}

fn prefix(label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{}: ", label),
        None => String::new(),
    }
}

/// `label: [1, 2, 3]`, with an `(empty list)` marker for the empty list.
pub fn pretty_print<T: fmt::Display>(head: &Link<T>, label: Option<&str>) -> String {
    let prefix = prefix(label);
    if head.is_none() {
        return format!("{}[] (empty list)", prefix);
    }
    format!("{}{}", prefix, Bracketed(head))
}

/// `label: 1 -> 2 -> 3`, with an `(empty list)` marker for the empty list.
pub fn pretty_print_chain<T: fmt::Display>(head: &Link<T>, label: Option<&str>) -> String {
    let prefix = prefix(label);
    if head.is_none() {
        return format!("{}null (empty list)", prefix);
    }
    format!("{}{}", prefix, Chain(head))
}

/// Multi-line dump of the list: its length, its chain, and every node with its successor.
pub fn debug_list<T: fmt::Display>(head: &Link<T>, label: Option<&str>) -> String {
    let prefix = prefix(label);
    if head.is_none() {
        return format!("{}null (empty list)", prefix);
    }

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}Linked List:", prefix);
    let _ = writeln!(out, "  Length: {}", list_len(head));
    let _ = write!(out, "  Chain:  {}", Chain(head));

    let mut current = head.as_deref();
    let mut index = 0;
    while let Some(node) = current {
        let _ = write!(out, "\n  Node[{}]: val={}, next=", index, node.value);
        let _ = match node.next.as_deref() {
            Some(next) => write!(out, "{}", next.value),
            None => write!(out, "null"),
        };
        current = node.next.as_deref();
        index += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linked_list::build_list;

    #[test]
    fn bracketed_form() {
        assert_eq!(list_to_string(&build_list(vec![1, 2, 3, 4, 5])), "[1, 2, 3, 4, 5]");
        assert_eq!(list_to_string(&build_list(vec![1])), "[1]");
        assert_eq!(list_to_string::<i32>(&None), "[]");
    }

    #[test]
    fn chain_form() {
        assert_eq!(
            list_to_chain(&build_list(vec![1, 2, 3, 4, 5])),
            "1 -> 2 -> 3 -> 4 -> 5"
        );
        assert_eq!(list_to_chain(&build_list(vec![7])), "7");
        assert_eq!(list_to_chain::<i32>(&None), "null");
    }

    #[test]
    fn zeros_and_large_numbers() {
        assert_eq!(list_to_string(&build_list(vec![0, 1, 0, 2, 0])), "[0, 1, 0, 2, 0]");
        assert_eq!(list_to_chain(&build_list(vec![999, 888, 777])), "999 -> 888 -> 777");
        assert_eq!(list_to_string(&build_list(vec![-4, -5])), "[-4, -5]");
    }

    #[test]
    fn node_display_matches_bracketed() {
        let head = build_list(vec![3, 1, 4]);
        let node = head.as_ref().unwrap();
        assert_eq!(node.to_string(), "[3, 1, 4]");
        assert_eq!(node.next.as_ref().unwrap().to_string(), "[1, 4]");
    }

    #[test]
    fn pretty_print_with_and_without_label() {
        let head = build_list(vec![1, 2]);
        assert_eq!(pretty_print(&head, Some("Example 1")), "Example 1: [1, 2]");
        assert_eq!(pretty_print(&head, None), "[1, 2]");
        assert_eq!(
            pretty_print::<i32>(&None, Some("Empty List")),
            "Empty List: [] (empty list)"
        );
        assert_eq!(pretty_print::<i32>(&None, None), "[] (empty list)");
    }

    #[test]
    fn pretty_print_chain_with_and_without_label() {
        let head = build_list(vec![1, 2]);
        assert_eq!(pretty_print_chain(&head, Some("Example 1")), "Example 1: 1 -> 2");
        assert_eq!(pretty_print_chain(&head, None), "1 -> 2");
        assert_eq!(
            pretty_print_chain::<i32>(&None, Some("Empty List")),
            "Empty List: null (empty list)"
        );
    }

    #[test]
    fn debug_list_reports_every_node() {
        let head = build_list(vec![1, 2, 3]);
        let expected = "Example: Linked List:\n\
                        \x20 Length: 3\n\
                        \x20 Chain:  1 -> 2 -> 3\n\
                        \x20 Node[0]: val=1, next=2\n\
                        \x20 Node[1]: val=2, next=3\n\
                        \x20 Node[2]: val=3, next=null";
        assert_eq!(debug_list(&head, Some("Example")), expected);
    }

    #[test]
    fn debug_list_empty() {
        assert_eq!(
            debug_list::<i32>(&None, Some("Empty List")),
            "Empty List: null (empty list)"
        );
        assert_eq!(debug_list::<i32>(&None, None), "null (empty list)");
    }
}
