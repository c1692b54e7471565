//! Flattening a small collapsible tree and walking its visible rows.
//!
//! Run with: cargo run --example basic

use accordion::{Forest, Node, NodeId, RowKind, SectionIndex};

fn print_rows(forest: &Forest) {
    for position in 0..forest.visible_len() {
        let node = forest.node_at(position).unwrap();
        println!("  [{position:2}] {:?} {}", node.kind(), node.title());
    }
}

fn main() {
    let forest: Forest = vec![
        Node::new(NodeId(1), "Apple")
            .with_kind(RowKind::Header)
            .with_child(Node::new(NodeId(2), "Fuji"))
            .with_child(Node::new(NodeId(3), "Gala"))
            .with_child(Node::new(NodeId(4), "Honeycrisp")),
        Node::new(NodeId(5), "Banana")
            .with_kind(RowKind::Expandable)
            .with_child(Node::new(NodeId(6), "Cavendish"))
            .with_child(Node::new(NodeId(7), "Plantain")),
        Node::new(NodeId(8), "Cherry").with_kind(RowKind::Label),
    ]
    .into();

    println!("initial rows ({} visible):", forest.visible_len());
    print_rows(&forest);

    let sections = SectionIndex::build(&forest);
    println!("\nsections:");
    for key in sections.keys() {
        println!("  {key} starts at {}", sections.position_for_key(key).unwrap());
    }

    let mut forest = forest;
    let outcome = forest.toggle_expanded(NodeId(5)).unwrap();
    println!(
        "\nexpanded Banana at position {:?}, {} rows inserted:",
        outcome.position, outcome.affected
    );
    print_rows(&forest);

    let outcome = forest.toggle_expanded(NodeId(5)).unwrap();
    println!(
        "\ncollapsed Banana again, {} rows removed, {} visible",
        outcome.affected,
        forest.visible_len()
    );
}
