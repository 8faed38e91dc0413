use trimat::{Error, MAX_MATRIX_SIZE, Matrix};

use crate::matrix::constant;

#[test]
fn create_with_positive_length() {
    assert!(Matrix::<i32>::new(5).is_ok());
}

#[test]
fn create_too_large() {
    let size = MAX_MATRIX_SIZE as isize + 1;
    assert_eq!(Matrix::<i32>::new(size), Err(Error::InvalidSize { size, max: MAX_MATRIX_SIZE }));
}

#[test]
fn create_with_negative_length() {
    assert_eq!(Matrix::<i32>::new(-5), Err(Error::InvalidSize { size: -5, max: MAX_MATRIX_SIZE }));
}

#[test]
fn copy_is_equal_to_source() {
    let mut m1 = Matrix::<i32>::new(5).unwrap();
    let values = [5, 7, 8, 3, 4];
    for i in 0..5 {
        for j in i..5 {
            m1.set(i, j, values[(j - i) as usize]).unwrap();
        }
    }

    let m2 = m1.clone();
    assert_eq!(m1, m2);
    assert_eq!(m2.get(1, 4), Ok(&3));
}

#[test]
fn copy_has_its_own_memory() {
    let m1 = Matrix::<i32>::new(5).unwrap();
    let mut m2 = m1.clone();
    assert!(!std::ptr::eq(&m1, &m2));

    m2.set(2, 3, 1).unwrap();
    assert_eq!(m1.get(2, 3), Ok(&0));
    assert_ne!(m1, m2);
}

#[test]
fn size() {
    assert_eq!(Matrix::<i32>::new(5).unwrap().len(), 5);
}

#[test]
fn set_and_get_element() {
    let mut m = Matrix::<i32>::new(5).unwrap();
    assert!(m.set(3, 3, 7).is_ok());
    assert_eq!(m[3][3], 7);

    m.row_mut(1).unwrap()[4] = 2;
    assert_eq!(m.get(1, 4), Ok(&2));
}

#[test]
fn rows_out_of_range() {
    let m = Matrix::<i32>::new(5).unwrap();

    assert_eq!(m.row(-5), Err(Error::IndexOutOfRange { index: -5, start: 0, end: 5 }));
    assert_eq!(m.row(6), Err(Error::IndexOutOfRange { index: 6, start: 0, end: 5 }));
    assert!(m.get(-5, -5).is_err());
    assert!(m.get(6, 6).is_err());
}

#[test]
fn columns_below_diagonal() {
    let mut m = Matrix::<i32>::new(5).unwrap();

    assert_eq!(m.row(3).unwrap().get(2), Err(Error::IndexOutOfRange { index: 2, start: 3, end: 5 }));
    assert!(m.row_mut(4).unwrap().set(0, 1).is_err());
    assert!(m.get(4, 4).is_ok());
}

#[test]
fn assign_to_itself() {
    let mut m = constant(3, 5);
    let copy = m.clone();
    m.assign(&copy);
    assert_eq!(m, copy);
    let alias = &m;
    assert_eq!(*alias, m);
}

#[test]
fn assign_equal_size() {
    let mut m1 = constant(10, 3);
    let m2 = constant(1, 3);
    m1.assign(&m2);
    assert_eq!(m1, m2);
}

#[test]
fn assign_changes_size() {
    let mut m1 = Matrix::<i32>::new(5).unwrap();
    let m2 = Matrix::<i32>::new(6).unwrap();
    m1.assign(&m2);
    assert_eq!(m1.len(), 6);

    let mut m1 = constant(10, 3);
    let m2 = constant(1, 4);
    m1.assign(&m2);
    assert_eq!(m1, m2);
    assert_eq!(m1.row(3).unwrap().start_index(), 3);
}

#[test]
fn compare() {
    assert_eq!(Matrix::<i32>::new(5).unwrap(), Matrix::<i32>::new(5).unwrap());
    assert_ne!(Matrix::<i32>::new(5).unwrap(), Matrix::<i32>::new(6).unwrap());
}

#[test]
fn add_and_subtract() {
    let m1 = constant(10, 3);
    let m2 = constant(1, 3);
    let m3 = constant(9, 3);

    assert!(m1.add(&m2).is_ok());
    assert_eq!(m2.add(&m3), Ok(m1.clone()));
    assert_eq!(m1.subtract(&m2), Ok(m3));
}

#[test]
fn add_and_subtract_different_size() {
    let m1 = Matrix::<i32>::new(5).unwrap();
    let m2 = Matrix::<i32>::new(6).unwrap();

    assert_eq!(m1.add(&m2), Err(Error::SizeMismatch { left: 5, right: 6 }));
    assert_eq!(m1.subtract(&m2), Err(Error::SizeMismatch { left: 5, right: 6 }));
}

#[test]
fn display() {
    let m = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap();
    assert_eq!(format!("{}", m), "1 2\n0 3\n");
}
