pub mod linked_list;
pub mod pretty_print;
pub mod remove_nth;

pub use linked_list::{build_list, list_len, list_to_vec, Link, ListNode};
pub use pretty_print::{list_to_chain, list_to_string};
pub use remove_nth::{remove_nth_from_end, take_nth_from_end};
