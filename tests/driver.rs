use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use weighted_segtree::query::{self, QueryError};
use weighted_segtree::{SegTreeError, WeightedSegTree};

#[test]
fn protocol_matches_direct_calls() {
    let mut rng = StdRng::seed_from_u64(17);
    let n = 40;
    let values: Vec<i64> = (0..n)
        .map(|_| rng.gen_range(-1_000_000..=1_000_000))
        .collect();
    let weights: Vec<i64> = (0..n).map(|_| rng.gen_range(0..=1_000_000)).collect();
    let mut tree = WeightedSegTree::new(&values, &weights).unwrap();

    let mut input = format!("{}\n", n);
    for row in [&values, &weights] {
        let row: Vec<String> = row.iter().map(i64::to_string).collect();
        input += &row.join(" ");
        input.push('\n');
    }
    let m = 300;
    input += &format!("{}\n", m);

    let mut expected = String::new();
    for _ in 0..m {
        let l = rng.gen_range(0..n);
        let r = rng.gen_range(l..n);
        if rng.gen_bool(0.4) {
            input += &format!("+ {} {}\n", l, r);
            tree.range_add(l, r).unwrap();
        } else {
            input += &format!("? {} {}\n", l, r);
            expected += &format!("{}\n", tree.range_sum(l, r).unwrap());
        }
    }

    let mut output = Vec::new();
    query::run(&mut input.as_bytes(), &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), expected);
}

#[test]
fn wide_sums_do_not_overflow_i32() {
    let n = 1000;
    let big = vec![1_000_000_000; n];
    let mut tree = WeightedSegTree::new(&big, &big).unwrap();
    for _ in 0..3 {
        tree.range_add(0, n - 1).unwrap();
    }
    assert_eq!(tree.range_sum(0, n - 1), Ok(4_000_000_000_000));
}

#[test]
fn error_stops_the_run_after_earlier_answers() {
    let mut output = Vec::new();
    let err = query::run(&mut &b"2 1 2 1 1 2 ? 0 1 ? 0 5"[..], &mut output).unwrap_err();
    assert!(matches!(
        err,
        QueryError::Tree(SegTreeError::OutOfRange {
            left: 0,
            right: 5,
            len: 2
        })
    ));
    assert_eq!(output, b"3\n");
}
