use log::info;

use remove_nth::linked_list::{build_list, list_to_vec, Link};
use remove_nth::pretty_print::{
    debug_list, list_to_chain, list_to_string, pretty_print, pretty_print_chain,
};
use remove_nth::remove_nth::remove_nth_from_end;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // (input, n, expected)
    let examples: [(&[i32], usize, &[i32]); 4] = [
        (&[1, 2, 3, 4, 5], 2, &[1, 2, 3, 5]),
        (&[1], 1, &[]),
        (&[1, 2], 1, &[1]),
        (&[1, 2, 3], 5, &[1, 2, 3]),
    ];
    for (i, (input, n, expected)) in examples.iter().enumerate() {
        let head = build_list(input.iter().copied());
        info!("example {}: removing offset {} from {}", i + 1, n, list_to_string(&head));
        let result = remove_nth_from_end(head, *n);
        println!("Example {} Result: {:?}", i + 1, list_to_vec(&result));
        assert_eq!(list_to_vec(&result), expected.to_vec());
    }

    let empty: Link<i32> = None;
    let single = build_list(vec![1]);
    let five = build_list(vec![1, 2, 3, 4, 5]);
    let with_zeros = build_list(vec![0, 1, 0, 2, 0]);
    let large = build_list(vec![999, 888, 777]);

    println!("\n1. Array-style formatting:");
    println!("   Empty list: {}", list_to_string(&empty));
    println!("   Example 1: {}", list_to_string(&five));
    println!("   Example 2: {}", list_to_string(&single));
    println!("   With zeros: {}", list_to_string(&with_zeros));

    println!("\n2. Chain-style formatting:");
    println!("   Empty list: {}", list_to_chain(&empty));
    println!("   Example 1: {}", list_to_chain(&five));
    println!("   Example 2: {}", list_to_chain(&single));
    println!("   Large numbers: {}", list_to_chain(&large));

    println!("\n3. Labelled printing:");
    println!("{}", pretty_print(&five, Some("Example 1")));
    println!("{}", pretty_print(&empty, Some("Empty List")));
    println!("{}", pretty_print_chain(&with_zeros, Some("List with Zeros")));
    println!("{}", pretty_print_chain(&empty, Some("Empty List")));

    println!("\n4. Node-by-node:");
    println!("{}", debug_list(&five, Some("Example 1")));
    println!("{}", debug_list(&empty, Some("Empty List")));
}
