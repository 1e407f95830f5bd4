use std::fmt::Debug;

use crate::types::RbNode;

/// Indented text dump of the subtree at `node`. NIL children print as `∅`.
pub fn print<K: Debug>(arena: &[RbNode<K>], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let inner = format!("{tab}  ");
            let left = print(arena, n.l, &inner);
            let right = print(arena, n.r, &inner);
            format!(
                "Node[{i}] {} {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.color.as_str(),
                n.k,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn prints_nested_nodes() {
        let mut arena: Vec<RbNode<i32>> = vec![RbNode::new(2), RbNode::new(1)];
        arena[0].color = Color::Black;
        arena[0].l = Some(1);
        arena[1].p = Some(0);
        assert_eq!(
            print(&arena, Some(0), ""),
            "Node[0] black { 2 }\nL=Node[1] red { 1 }\n  L=∅\n  R=∅\nR=∅"
        );
    }

    #[test]
    fn prints_empty() {
        let arena: Vec<RbNode<i32>> = Vec::new();
        assert_eq!(print(&arena, None, ""), "∅");
    }
}
