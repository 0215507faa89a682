//! Text rendering of a tree through the engine's diagnostics API.

use std::fmt::Write;

use behavior_tree::tree::walk;
use behavior_tree::{Behavior, NodeKind, Status};

const INDENT: &str = "    ";

fn marker(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Sequence => "[-]",
        NodeKind::Selector => "[o]",
        NodeKind::Parallel => "[/]",
        NodeKind::Decorator => "-^-",
        NodeKind::Leaf => "-->",
    }
}

fn symbol(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Failure => "✕",
        Status::Running => "*",
        Status::Invalid => "-",
    }
}

/// Renders `root` and its subtree, one node per line, indented by depth.
///
/// With `show_status` each line ends with the node's status symbol and, when
/// present, its feedback.
pub fn render_tree(root: &dyn Behavior, show_status: bool) -> String {
    let mut out = String::new();
    walk(root, &mut |depth, node| {
        let _ = write!(
            out,
            "{}{} {}",
            INDENT.repeat(depth),
            marker(node.kind()),
            node.name()
        );
        if show_status {
            let _ = write!(out, " [{}]", symbol(node.status()));
            if let Some(feedback) = node.feedback() {
                let _ = write!(out, " -- {feedback}");
            }
        }
        out.push('\n');
    });
    out
}
