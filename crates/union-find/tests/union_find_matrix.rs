use algoviz_union_find::UnionFind;
use proptest::prelude::*;

#[test]
fn union_find_grid_rows_matrix() {
    // Merge each row of a 10x10 grid, then stitch rows pairwise.
    let n = 10;
    let mut uf = UnionFind::new(n * n);
    for row in 0..n {
        for col in 1..n {
            uf.union(row * n + col - 1, row * n + col);
        }
    }
    assert_eq!(uf.count(), n);
    for row in (0..n).step_by(2) {
        uf.union(row * n, (row + 1) * n);
    }
    assert_eq!(uf.count(), n / 2);
    assert!(uf.connected(0, 2 * n - 1));
    assert!(!uf.connected(0, 2 * n));
    assert_eq!(uf.set_size(0), 2 * n);
}

#[test]
fn union_find_long_chain_stays_shallow_matrix() {
    let n = 1024;
    let mut uf = UnionFind::new(n);
    for i in 1..n {
        uf.union(i - 1, i);
    }
    assert_eq!(uf.count(), 1);
    let root = uf.find(0);
    assert!(u32::from(uf.rank_of(root)) <= (n as f64).log2() as u32);
    for i in 0..n {
        assert_eq!(uf.find(i), root);
        assert_eq!(uf.parent_of(i), root);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn find_is_idempotent(
        n in 1_usize..40,
        ops in proptest::collection::vec((0_usize..40, 0_usize..40), 0..60),
    ) {
        let mut uf = UnionFind::new(n);
        for (x, y) in ops {
            if x < n && y < n {
                uf.union(x, y);
            }
        }
        for x in 0..n {
            let r = uf.find(x);
            prop_assert_eq!(uf.find(r), r);
            prop_assert_eq!(uf.parent_of(r), r);
        }
    }

    #[test]
    fn union_connects_and_relation_is_equivalence(
        n in 2_usize..16,
        ops in proptest::collection::vec((0_usize..16, 0_usize..16), 0..40),
    ) {
        let mut uf = UnionFind::new(n);
        for &(x, y) in &ops {
            if x < n && y < n {
                uf.union(x, y);
                prop_assert!(uf.connected(x, y));
            }
        }
        for x in 0..n {
            prop_assert!(uf.connected(x, x));
            for y in 0..n {
                prop_assert_eq!(uf.connected(x, y), uf.connected(y, x));
                for z in 0..n {
                    if uf.connected(x, y) && uf.connected(y, z) {
                        prop_assert!(uf.connected(x, z));
                    }
                }
            }
        }
    }

    #[test]
    fn count_matches_successful_unions(
        n in 1_usize..30,
        ops in proptest::collection::vec((0_usize..30, 0_usize..30), 0..50),
    ) {
        let mut uf = UnionFind::new(n);
        let mut expected = n;
        for (x, y) in ops {
            if x < n && y < n && uf.union(x, y) {
                expected -= 1;
            }
        }
        prop_assert_eq!(uf.count(), expected);

        let mut total = 0;
        for x in 0..n {
            if uf.find(x) == x {
                total += uf.set_size(x);
            }
        }
        prop_assert_eq!(total, n);
    }
}
