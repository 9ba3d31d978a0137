//! Group tree output formatter

use super::common::{new_table, print_json, print_table, print_yaml};
use crate::cli::OutputFormat;
use crate::qbee::GroupTreeNode;

/// Output a group tree node and its direct children
pub fn output_grouptree_node(node: &GroupTreeNode, format: &OutputFormat) {
    match format {
        OutputFormat::Table => output_table(node),
        OutputFormat::Json => print_json(node),
        OutputFormat::Yaml => print_yaml(node),
    }
}

fn node_type(node: &GroupTreeNode) -> String {
    node.node_type.map(|t| t.to_string()).unwrap_or_default()
}

fn output_table(node: &GroupTreeNode) {
    println!("Node:   {} ({})", node.node_id, node_type(node));
    println!("Title:  {}", node.title);
    println!("Parent: {}", node.parent().unwrap_or("-"));
    println!(
        "Tags:   {}",
        if node.tags.is_empty() {
            "-".to_string()
        } else {
            node.tags.join(", ")
        }
    );

    if node.nodes.is_empty() {
        return;
    }

    let mut table = new_table(vec!["Node ID", "Title", "Type", "Tags"]);
    for child in &node.nodes {
        table.add_row(vec![
            child.node_id.clone(),
            child.title.clone(),
            node_type(child),
            child.tags.join(", "),
        ]);
    }
    print_table(&table, node.nodes.len(), "child node");
}
