//! Demonstration binary for the ordered container.
//!
//! Builds small containers and prints every traversal order.

use std::fmt::Display;

use ordered_container::{OrderedContainer, Traversal};

const ORDERS: [(&str, Traversal); 6] = [
    ("Insertion", Traversal::Insertion),
    ("Ascending", Traversal::Ascending),
    ("Descending", Traversal::Descending),
    ("Side-cross", Traversal::SideCross),
    ("Reverse", Traversal::Reverse),
    ("Middle-out", Traversal::MiddleOut),
];

fn print_container<T: Display + Ord>(label: &str, container: &OrderedContainer<T>) {
    println!("---- {} ----", label);
    println!("Size: {}", container.len());
    println!("Contents: {}", container);

    for (name, order) in ORDERS {
        print!("{:>10} order:", name);
        for value in container.traverse(order) {
            print!(" {}", value);
        }
        println!();
    }
    println!();
}

fn main() {
    let mut ints = OrderedContainer::new();
    for value in [7, 15, 6, 1, 2] {
        ints.add(value);
    }
    print_container("int container", &ints);

    let mut words = OrderedContainer::new();
    for word in ["pear", "apple", "quince", "fig", "plum"] {
        words.add(word.to_string());
    }
    print_container("string container", &words);

    println!("Removing 15 from the int container...");
    match ints.remove(&15) {
        Ok(count) => println!("Removed {} occurrence(s)", count),
        Err(e) => println!("Remove failed: {}", e),
    }
    print_container("int container after remove", &ints);
}
