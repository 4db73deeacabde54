// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

use crate::tree::{D, DisplayId, DisplayTree};

fn indent(out: &mut String, depth: usize) {
    out.push('\n');
    out.extend(core::iter::repeat_n(' ', (depth + 1) * 2));
}

fn write_node(tree: &DisplayTree, id: DisplayId, depth: usize, out: &mut String) {
    let children = tree.children(id);
    match tree.get(id) {
        D::Block => {
            for &child in children {
                indent(out, depth);
                write_node(tree, child, depth + 1, out);
            }
        }
        D::Line | D::Descend { .. } | D::Label { .. } => {
            for &child in children {
                write_node(tree, child, depth, out);
            }
        }
        D::Text(text) => out.push_str(text),
        D::List {
            opening,
            closing,
            separator,
            ..
        } => {
            out.push_str(opening);
            match children {
                [] => {}
                [only] => write_node(tree, *only, depth, out),
                _ => {
                    for (i, &child) in children.iter().enumerate() {
                        if i > 0 {
                            out.push_str(separator);
                        }
                        indent(out, depth);
                        write_node(tree, child, depth + 1, out);
                    }
                    out.push(' ');
                }
            }
            out.push_str(closing);
        }
        D::Button { text, .. } => {
            out.push('[');
            out.push_str(text);
            out.push(']');
        }
        D::Placeholder { .. } => out.push_str("[…]"),
        D::StringEditor { value, .. } => out.push_str(value),
        D::NumberEditor { value, .. } => out.push_str(&value.to_string()),
    }
}

impl DisplayTree {
    /// Writes the subtree at `id` as plain text.
    ///
    /// Block children and the elements of lists with more than one element
    /// start on new lines, indented two spaces per level.
    #[must_use]
    pub fn text_of(&self, id: DisplayId) -> String {
        let mut out = String::new();
        write_node(self, id, 0, &mut out);
        out
    }

    /// Writes the whole tree as plain text; empty if there is no root.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.root().map(|root| self.text_of(root)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use graft_graph::Cursor;

    use super::*;

    #[test]
    fn lists_break_only_with_several_elements() {
        let mut tree = DisplayTree::new();
        let list = |tree: &mut DisplayTree, items: &[&str]| {
            let children: Vec<_> = items.iter().map(|item| tree.text(*item)).collect();
            tree.push(
                D::List {
                    opening: "[".into(),
                    closing: "]".into(),
                    separator: ",".into(),
                    slots: vec![Cursor::root(); items.len() + 1],
                },
                children,
            )
        };
        let empty = list(&mut tree, &[]);
        let one = list(&mut tree, &["a"]);
        let two = list(&mut tree, &["a", "b"]);
        assert_eq!(tree.text_of(empty), "[]");
        assert_eq!(tree.text_of(one), "[a]");
        assert_eq!(tree.text_of(two), "[\n  a,\n  b ]");
    }

    #[test]
    fn blocks_indent_per_level() {
        let mut tree = DisplayTree::new();
        let inner = tree.text("inner");
        let nested = tree.block([inner]);
        let head = tree.text("head");
        let outer = tree.block([head, nested]);
        tree.set_root(outer);
        assert_eq!(tree.to_text(), "\n  head\n  \n    inner");
    }

    #[test]
    fn numbers_print_without_trailing_zeros() {
        let mut tree = DisplayTree::new();
        let whole = tree.push(
            D::NumberEditor {
                value: 30.0,
                selected: None,
            },
            [],
        );
        let fraction = tree.push(
            D::NumberEditor {
                value: -2.5,
                selected: None,
            },
            [],
        );
        assert_eq!(tree.text_of(whole), "30");
        assert_eq!(tree.text_of(fraction), "-2.5");
    }
}
