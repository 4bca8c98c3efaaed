use bounded_seq::stdx::{Array, IndexOutOfBounds, ReadError};
use std::io::Cursor;

fn row(values: &[i32]) -> String {
    let mut line: String = values.iter().map(|v| format!("{v:>12}")).collect();
    line.push('\n');
    line
}

#[test]
fn default_and_sized_arrays_start_zeroed() {
    let sized: Array<i32> = Array::filled(7);
    let defaulted: Array<i32> = Array::new();

    assert_eq!(sized.capacity(), 7);
    assert_eq!(defaulted.capacity(), 10);

    assert_eq!(sized.to_string(), row(&[0, 0, 0, 0]) + &row(&[0, 0, 0]));
    assert_eq!(
        defaulted.to_string(),
        row(&[0, 0, 0, 0]) + &row(&[0, 0, 0, 0]) + &row(&[0, 0])
    );
}

#[test]
fn walkthrough_matches_expected_output() {
    let mut integers1: Array<i32> = Array::filled(7);
    let mut integers2: Array<i32> = Array::new();

    let mut input = Cursor::new("1 2 3 4 5 6 7\n8 9 10 11 12 13 14 15 16 17\n");
    integers1.read_from(&mut input).unwrap();
    integers2.read_from(&mut input).unwrap();

    assert_eq!(integers1.to_string(), row(&[1, 2, 3, 4]) + &row(&[5, 6, 7]));
    assert_eq!(
        integers2.to_string(),
        row(&[8, 9, 10, 11]) + &row(&[12, 13, 14, 15]) + &row(&[16, 17])
    );

    // integers1 has seven slots, so index 9 is out of bounds.
    assert_eq!(
        integers1.get(9),
        Err(IndexOutOfBounds {
            index: 9,
            capacity: 7
        })
    );
    assert!(integers1 != integers2);

    let integers3 = integers1.clone();
    assert_eq!(integers3.capacity(), 7);
    assert_eq!(integers3, integers1);

    // Target is smaller than source; assignment grows it.
    integers1.assign(&integers2);
    assert_eq!(integers1.capacity(), 10);
    assert!(integers1 == integers2);
    assert_eq!(integers1[5], 13);

    integers1[5] = 1000;
    assert_eq!(integers1[5], 1000);
    assert_eq!(integers2[5], 13);
    assert_eq!(integers3[5], 6);

    assert!(integers1.set(15, 1000).is_err());
    assert_eq!(integers1.capacity(), 10);
}

#[test]
fn odd_number_fill_and_compare() {
    let mut integers4: Array<i32> = Array::filled(5);
    for i in 0..integers4.capacity() {
        integers4.set(i, 2 * i as i32 + 1).unwrap();
    }

    assert_eq!(integers4.to_string(), row(&[1, 3, 5, 7]) + &row(&[9]));
    assert!(integers4[2] < integers4[3]);
}

#[test]
fn float_arrays_format_like_integers() {
    let mut doubles: Array<f64> = Array::filled(3);
    doubles.read_from(&mut Cursor::new("1.5 -2.25 3")).unwrap();

    assert_eq!(
        doubles.to_string(),
        format!("{:>12}{:>12}{:>12}\n", 1.5, -2.25, 3.0)
    );
}

#[test]
fn float_arrays_round_to_six_digits() {
    let mut doubles: Array<f64> = Array::filled(4);
    doubles
        .read_from(&mut Cursor::new("0.1 3.14159265 1e-7 -123456789"))
        .unwrap();

    let text = doubles.to_string();
    assert_eq!(
        text,
        format!(
            "{:>12}{:>12}{:>12}{:>12}\n",
            "0.1", "3.14159", "1e-07", "-1.2346e+08"
        )
    );

    let mut reread: Array<f64> = Array::filled(4);
    reread.read_from(&mut Cursor::new(text)).unwrap();
    assert_eq!(reread.as_slice(), &[0.1, 3.14159, 1e-7, -1.2346e8]);
}

#[test]
fn short_input_reports_progress() {
    let mut arr: Array<u32> = Array::filled(4);

    let err = arr.read_from(&mut Cursor::new("4 3")).unwrap_err();

    assert!(matches!(
        err,
        ReadError::UnexpectedEof {
            read: 2,
            expected: 4
        }
    ));
    assert_eq!(arr.as_slice(), &[4, 3, 0, 0]);
}

#[test]
fn arrays_sort_in_place() {
    let mut arr = Array::try_from(vec![5, 3, 4, 1, 2]).unwrap();

    bounded_seq::sort::selection_sort(arr.as_mut_slice(), bounded_seq::sort::descending);

    assert_eq!(arr.as_slice(), &[5, 4, 3, 2, 1]);
}
