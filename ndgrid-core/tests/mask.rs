use ndgrid_core::{Error, Mask, StridedArray};
use rand::{rngs::StdRng, SeedableRng};

fn random_array(shape: &[usize], seed: u64) -> StridedArray<f64> {
    let mut a = StridedArray::<f64>::new(shape).unwrap();
    a.random_with(&mut StdRng::seed_from_u64(seed), 0.0, 10.0)
        .unwrap();
    a
}

#[test]
fn nonzero_agrees_with_apply_mask() {
    let a = random_array(&[6, 5, 3], 5);
    let mask = Mask::compare(&a, |x| x > 7.5);
    let (indices, values) = a.apply_mask(&mask).unwrap();

    assert_eq!(mask.nonzero(), indices);
    assert_eq!(indices.len(), mask.count_true());
    for (idx, v) in indices.iter().zip(&values) {
        assert_eq!(a.get(idx).unwrap(), *v);
        assert!(*v > 7.5);
    }
    let expected = a.as_slice().iter().filter(|&&x| x > 7.5).count();
    assert_eq!(values.len(), expected);
}

#[test]
fn compare_with_two_arrays() {
    let a = StridedArray::<i32>::from_vec(&[2, 3], vec![1, 5, 3, 7, 2, 9]).unwrap();
    let b = StridedArray::<i32>::from_vec(&[2, 3], vec![2, 4, 3, 8, 1, 9]).unwrap();
    let mask = Mask::compare_with(&a, &b, |l, r| l >= r).unwrap();
    assert_eq!(
        mask.as_slice(),
        &[false, true, true, false, true, true]
    );
    assert_eq!(mask.nonzero(), vec![vec![0, 1], vec![0, 2], vec![1, 1], vec![1, 2]]);

    let c = StridedArray::<i32>::new(&[3, 2]).unwrap();
    let err = Mask::compare_with(&a, &c, |l, r| l == r).unwrap_err();
    assert!(matches!(err.inner(), Error::ShapeMismatch { .. }));
}

#[test]
fn logical_combinators() {
    let a = StridedArray::<f64>::from_vec(&[4], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let big = Mask::compare(&a, |x| x > 1.5);
    let small = Mask::compare(&a, |x| x < 3.5);

    let both = big.logical_and(&small).unwrap();
    assert_eq!(both.as_slice(), &[false, true, true, false]);
    let either = big.logical_or(&small).unwrap();
    assert_eq!(either.as_slice(), &[true; 4]);
    assert_eq!(big.logical_not().as_slice(), &[true, false, false, false]);
    assert_eq!(!&big, big.logical_not());

    let other = Mask::new(&[2, 2]).unwrap();
    assert!(matches!(
        big.logical_and(&other).unwrap_err().inner(),
        Error::ShapeMismatch { .. }
    ));
    assert!(big.logical_or(&other).is_err());
}

#[test]
fn mask_get_set() {
    let mut mask = Mask::new(&[3, 4]).unwrap();
    assert_eq!(mask.count(), 12);
    assert_eq!(mask.strides(), &[4, 1]);
    assert_eq!(mask.count_true(), 0);
    mask.set(&[2, 1], true).unwrap();
    assert!(mask.get(&[2, 1]).unwrap());
    assert!(!mask.get(&[1, 2]).unwrap());
    assert_eq!(mask.nonzero(), vec![vec![2, 1]]);
    assert!(matches!(
        mask.set(&[3, 0], true).unwrap_err().inner(),
        Error::InvalidIndex { .. }
    ));
    assert!(matches!(
        mask.get(&[0]).unwrap_err().inner(),
        Error::ShapeMismatch { .. }
    ));
    assert_eq!(mask.indices_in_order().count(), 12);

    let err = Mask::from_vec(&[2, 2], vec![true; 3]).unwrap_err();
    assert!(matches!(err.inner(), Error::SizeMismatch { .. }));
}

#[test]
fn set_for_mask_writes_selected_positions() {
    let mut a = StridedArray::<f64>::from_vec(&[2, 3], vec![1., -2., 3., -4., 5., -6.]).unwrap();
    let negative = Mask::compare(&a, |x| x < 0.0);
    a.set_for_mask(&negative, 0.0).unwrap();
    assert_eq!(a.as_slice(), &[1., 0., 3., 0., 5., 0.]);

    let source = StridedArray::<f64>::full(&[2, 3], 9.0).unwrap();
    let odd = Mask::from_vec(&[2, 3], vec![true, false, true, false, true, false]).unwrap();
    a.set_from_mask(&odd, &source).unwrap();
    assert_eq!(a.as_slice(), &[9., 0., 9., 0., 9., 0.]);
}

#[test]
fn set_for_mask_checks_before_writing() {
    let mut a = StridedArray::<i32>::full(&[2, 2], 1).unwrap();
    let wrong_mask = Mask::from_vec(&[4], vec![true; 4]).unwrap();
    assert!(a.set_for_mask(&wrong_mask, 5).is_err());
    assert!(a.apply_mask(&wrong_mask).is_err());

    let mask = Mask::from_vec(&[2, 2], vec![true; 4]).unwrap();
    let wrong_source = StridedArray::<i32>::full(&[1, 4], 7).unwrap();
    let err = a.set_from_mask(&mask, &wrong_source).unwrap_err();
    assert!(matches!(err.inner(), Error::ShapeMismatch { .. }));
    assert_eq!(a.as_slice(), &[1, 1, 1, 1]);
}
