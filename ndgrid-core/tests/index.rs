use ndgrid_core::{Error, StridedArray};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn labelled(shape: [usize; 3]) -> StridedArray<f64> {
    let mut a = StridedArray::<f64>::new(&shape).unwrap();
    for i in 0..shape[0] {
        for j in 0..shape[1] {
            for k in 0..shape[2] {
                let v = 10000.0 * i as f64 + 100.0 * j as f64 + k as f64;
                a.set(&[i, j, k], v).unwrap();
            }
        }
    }
    a
}

#[test]
fn random_set_get() {
    let mut rng = StdRng::seed_from_u64(7);
    let shape = [100, 20, 3];
    let mut a = StridedArray::<f64>::new(&shape).unwrap();
    let mut written = std::collections::HashMap::new();
    for _ in 0..100 {
        let idx = vec![
            rng.gen_range(0..shape[0]),
            rng.gen_range(0..shape[1]),
            rng.gen_range(0..shape[2]),
        ];
        let v = rng.gen_range(0.0..10.0);
        a.set(&idx, v).unwrap();
        written.insert(idx, v);
    }
    for (idx, v) in written {
        assert_eq!(a.get(&idx).unwrap(), v);
    }
}

#[test]
fn flat_index_round_trip() {
    let mut a = StridedArray::<f64>::new(&[10, 20, 3]).unwrap();
    a.random_with(&mut StdRng::seed_from_u64(1), 0.0, 1.0).unwrap();
    for flat in 0..a.count() {
        let indices = a.indices_from_index(flat).unwrap();
        assert_eq!(a.index_from_indices(&indices).unwrap(), flat);
        assert_eq!(a.get(&indices).unwrap(), a.as_slice()[flat]);
    }
    for i in 0..10 {
        for j in 0..20 {
            for k in 0..3 {
                let flat = a.index_from_indices(&[i, j, k]).unwrap();
                assert_eq!(flat, i * 60 + j * 3 + k);
                assert_eq!(a.indices_from_index(flat).unwrap(), vec![i, j, k]);
            }
        }
    }
}

#[test]
fn indices_in_order_matches_flat_decomposition() {
    let a = StridedArray::<i32>::new(&[4, 1, 3, 2]).unwrap();
    let ordered: Vec<Vec<usize>> = a.indices_in_order().collect();
    assert_eq!(ordered.len(), a.count());
    assert_eq!(a.indices_in_order().len(), 24);
    for (flat, idx) in ordered.iter().enumerate() {
        assert_eq!(idx, &a.indices_from_index(flat).unwrap());
    }
    assert_eq!(ordered[0], vec![0, 0, 0, 0]);
    assert_eq!(ordered[1], vec![0, 0, 0, 1]);
    assert_eq!(ordered[2], vec![0, 0, 1, 0]);
    assert_eq!(ordered[23], vec![3, 0, 2, 1]);
}

#[test]
fn index_errors() {
    let mut a = StridedArray::<f64>::new(&[2, 3]).unwrap();
    let err = a.indices_from_index(6).unwrap_err();
    assert!(matches!(
        err.inner(),
        Error::InvalidIndex { index: 6, bound: 6 }
    ));
    let err = a.index_from_indices(&[1]).unwrap_err();
    assert!(matches!(err.inner(), Error::ShapeMismatch { .. }));
    let err = a.get(&[1, 3]).unwrap_err();
    assert!(matches!(
        err.inner(),
        Error::InvalidIndex { index: 3, bound: 3 }
    ));
    let err = a.set(&[2, 0], 1.0).unwrap_err();
    assert!(matches!(err.inner(), Error::InvalidIndex { .. }));
    assert_eq!(a.as_slice(), &[0.0; 6]);
}

#[test]
fn slice_is_a_projection() {
    let a = labelled([10, 20, 3]);
    let ranges = [0..5, 10..20, 2..3];
    let expected: Vec<f64> = a
        .indices_in_order()
        .filter(|idx| idx.iter().zip(&ranges).all(|(i, r)| r.contains(i)))
        .map(|idx| a.get(&idx).unwrap())
        .collect();

    let s = a.slice(&ranges).unwrap();
    assert_eq!(s.shape(), &[5, 10, 1]);
    assert_eq!(s.as_slice(), expected.as_slice());
    assert_eq!(s.get(&[4, 9, 0]).unwrap(), 40000.0 + 1900.0 + 2.0);
}

#[test]
fn slice_whole_array_is_a_copy() {
    let a = labelled([3, 4, 2]);
    let s = a.slice(&[0..3, 0..4, 0..2]).unwrap();
    assert_eq!(s, a);
}

#[test]
fn slice_runs_coalesce() {
    let a = StridedArray::<f64>::new(&[4, 5]).unwrap();
    assert_eq!(a.slice_runs(&[1..3, 0..5]).unwrap(), vec![5..15]);
    assert_eq!(a.slice_runs(&[1..3, 1..3]).unwrap(), vec![6..8, 11..13]);
    assert_eq!(a.slice_runs(&[3..4, 4..5]).unwrap(), vec![19..20]);

    let b = StridedArray::<f64>::new(&[3, 2, 4]).unwrap();
    assert_eq!(
        b.slice_runs(&[0..2, 1..2, 0..4]).unwrap(),
        vec![4..8, 12..16]
    );
}

#[test]
fn slice_errors_are_wrapped() {
    let a = labelled([4, 5, 2]);

    let err = a.slice(&[0..2, 0..2]).unwrap_err();
    match err.inner() {
        Error::SliceError(inner) => assert!(matches!(**inner, Error::ShapeMismatch { .. })),
        other => panic!("unexpected error {other:?}"),
    }

    let err = a.slice(&[0..2, 0..6, 0..1]).unwrap_err();
    match err.inner() {
        Error::SliceError(inner) => assert!(matches!(**inner, Error::InvalidIndex { .. })),
        other => panic!("unexpected error {other:?}"),
    }

    let err = a.slice(&[1..1, 0..2, 0..1]).unwrap_err();
    assert!(matches!(err.inner(), Error::SliceError(_)));

    // unwrapped when asking for the runs directly
    let err = a.slice_runs(&[0..2, 0..6, 0..1]).unwrap_err();
    assert!(matches!(err.inner(), Error::InvalidIndex { .. }));
}
