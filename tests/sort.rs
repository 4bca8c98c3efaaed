use bounded_seq::sort::{ascending, descending, fill_ranged, insertion_sort, selection_sort};
use bounded_seq::stdx::print_columns;
use rand::SeedableRng;
use rand::rngs::StdRng;

const N: usize = 20;

fn ordered_by(values: &[i32], later: fn(&i32, &i32) -> bool) -> bool {
    values.windows(2).all(|w| !later(&w[0], &w[1]))
}

#[test]
fn random_fill_then_sort_both_directions() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut arr = [0i32; N];

    fill_ranged(&mut arr, 1..=100, &mut rng);
    assert!(arr.iter().all(|v| (1..=100).contains(v)));

    let mut expected = arr;
    expected.sort_unstable();
    selection_sort(&mut arr, ascending);
    assert_eq!(arr, expected);

    fill_ranged(&mut arr, -100..=100, &mut rng);
    let mut expected = arr;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    selection_sort(&mut arr, descending);
    assert_eq!(arr, expected);
}

#[test]
fn insertion_and_selection_agree() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let mut a = [0i32; N];
        fill_ranged(&mut a, -10..=10, &mut rng);
        let mut b = a;

        selection_sort(&mut a, descending);
        insertion_sort(&mut b, descending);

        assert_eq!(a, b);
        assert!(ordered_by(&a, descending));
    }
}

#[test]
fn sorted_output_prints_in_columns() {
    let mut arr = [7, 3, 9, 1, 5, 2];
    insertion_sort(&mut arr, ascending);

    let mut out = Vec::new();
    print_columns(&mut out, &arr).unwrap();

    let expected = format!(
        "{:>10}{:>10}{:>10}{:>10}{:>10}\n{:>10}\n",
        1, 2, 3, 5, 7, 9
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}
