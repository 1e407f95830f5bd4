//! Generic binary-tree walks over an arena of [`Node`]s.

use std::cmp::Ordering;

use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        let mut curr = r;
        while let Some(l) = get_l(arena, curr) {
            curr = l;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| {
        1 + size(arena, get_l(arena, r)) + size(arena, get_r(arena, r))
    })
}

/// Number of nodes on the longest downward path from `root`.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| {
        1 + height(arena, get_l(arena, r)).max(height(arena, get_r(arena, r)))
    })
}

/// Finds a node by key.
pub fn find<N, K, F>(arena: &[N], root: Option<u32>, key: &K, key_of: F) -> Option<u32>
where
    N: Node,
    K: Ord,
    F: Fn(&N) -> &K,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match key.cmp(key_of(&arena[i as usize])) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

/// Promotes the right child of `n` into `n`'s place.
///
/// The right child's left subtree becomes `n`'s right subtree; in-order
/// sequence is unchanged. Returns the promoted node. The caller updates its
/// root when `n` had no parent.
///
/// # Panics
///
/// Panics if `n` has no right child.
pub fn rotate_left<N: Node>(arena: &mut [N], n: u32) -> u32 {
    let nr = get_r(arena, n).expect("rotate_left requires a right child");
    let p = get_p(arena, n);
    let nrl = get_l(arena, nr);

    set_r(arena, n, nrl);
    if let Some(nrl) = nrl {
        set_p(arena, nrl, Some(n));
    }

    set_p(arena, nr, p);
    if let Some(p) = p {
        if get_l(arena, p) == Some(n) {
            set_l(arena, p, Some(nr));
        } else {
            set_r(arena, p, Some(nr));
        }
    }

    set_l(arena, nr, Some(n));
    set_p(arena, n, Some(nr));
    nr
}

/// Mirror image of [`rotate_left`]: promotes the left child of `n`.
///
/// # Panics
///
/// Panics if `n` has no left child.
pub fn rotate_right<N: Node>(arena: &mut [N], n: u32) -> u32 {
    let nl = get_l(arena, n).expect("rotate_right requires a left child");
    let p = get_p(arena, n);
    let nlr = get_r(arena, nl);

    set_l(arena, n, nlr);
    if let Some(nlr) = nlr {
        set_p(arena, nlr, Some(n));
    }

    set_p(arena, nl, p);
    if let Some(p) = p {
        if get_l(arena, p) == Some(n) {
            set_l(arena, p, Some(nl));
        } else {
            set_r(arena, p, Some(nl));
        }
    }

    set_r(arena, nl, Some(n));
    set_p(arena, n, Some(nl));
    nl
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RbNode;

    /// Builds   1
    ///         / \
    ///        0   3
    ///           / \
    ///          2   4
    fn sample() -> Vec<RbNode<i32>> {
        let mut arena: Vec<RbNode<i32>> = (0..5).map(RbNode::new).collect();
        let links = [(1, Some(0), Some(3)), (3, Some(2), Some(4))];
        for (p, l, r) in links {
            arena[p as usize].l = l;
            arena[p as usize].r = r;
            for c in [l, r].into_iter().flatten() {
                arena[c as usize].p = Some(p);
            }
        }
        arena
    }

    fn in_order(arena: &[RbNode<i32>], root: Option<u32>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut curr = first(arena, root);
        while let Some(i) = curr {
            out.push(arena[i as usize].k);
            curr = next(arena, i);
        }
        out
    }

    #[test]
    fn walks() {
        let arena = sample();
        assert_eq!(first(&arena, Some(1)), Some(0));
        assert_eq!(last(&arena, Some(1)), Some(4));
        assert_eq!(first(&arena, None), None);
        assert_eq!(in_order(&arena, Some(1)), vec![0, 1, 2, 3, 4]);
        assert_eq!(size(&arena, Some(1)), 5);
        assert_eq!(height(&arena, Some(1)), 3);
        assert_eq!(height(&arena, None), 0);
        assert_eq!(find(&arena, Some(1), &2, |n| &n.k), Some(2));
        assert_eq!(find(&arena, Some(1), &7, |n| &n.k), None);
    }

    #[test]
    fn rotate_left_at_root() {
        let mut arena = sample();
        let top = rotate_left(&mut arena, 1);
        assert_eq!(top, 3);
        assert_eq!(arena[3].p, None);
        assert_eq!(arena[3].l, Some(1));
        assert_eq!(arena[1].p, Some(3));
        assert_eq!(arena[1].r, Some(2));
        assert_eq!(arena[2].p, Some(1));
        assert_eq!(in_order(&arena, Some(3)), vec![0, 1, 2, 3, 4]);
        assert_eq!(height(&arena, Some(3)), 3);
    }

    #[test]
    fn rotate_right_below_root() {
        let mut arena = sample();
        let top = rotate_right(&mut arena, 3);
        assert_eq!(top, 2);
        assert_eq!(arena[1].r, Some(2));
        assert_eq!(arena[2].p, Some(1));
        assert_eq!(arena[2].r, Some(3));
        assert_eq!(arena[3].p, Some(2));
        assert_eq!(arena[3].l, None);
        assert_eq!(in_order(&arena, Some(1)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn rotations_are_inverse() {
        let mut arena = sample();
        let before = arena.clone();
        let top = rotate_left(&mut arena, 1);
        rotate_right(&mut arena, top);
        assert_eq!(arena, before);
    }
}
