//! These tests exercise the solvers through the public api only, checking the
//! solutions against an exhaustive enumeration of all subsets.

use knapdp::*;

fn instance(seed: u64, count: usize, capacity: usize) -> Knapsack<String> {
    let config = GeneratorConfigBuilder::default()
        .count(count)
        .weight_bounds((1, 15))
        .value_bounds((1, 30))
        .seed(seed)
        .build()
        .unwrap();
    ItemGenerator::new(config).instance(capacity).unwrap()
}

fn brute_force(problem: &Knapsack<String>) -> usize {
    let items = problem.items();
    (0_u32..(1 << items.len()))
        .filter_map(|subset| {
            let chosen = items.iter().enumerate().filter(|(i, _)| subset & (1 << i) != 0);
            let weight: usize = chosen.clone().map(|(_, it)| it.weight).sum();
            let value: usize = chosen.map(|(_, it)| it.value).sum();
            (weight <= problem.capacity()).then_some(value)
        })
        .max()
        .unwrap_or(0)
}

fn check(problem: &Knapsack<String>, solution: &Solution<String>) {
    assert!(solution.total_weight() <= problem.capacity());
    assert_eq!(brute_force(problem), solution.value);
    assert_eq!(solution.value, solution.items.iter().map(|i| i.value).sum::<usize>());

    let positions = solution
        .items
        .iter()
        .map(|s| problem.items().iter().position(|i| i == s).unwrap())
        .collect::<Vec<_>>();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn sequential_solutions_are_optimal() {
    for seed in 100..150 {
        for capacity in [0, 7, 25, 60] {
            let pb = instance(seed, 12, capacity);
            check(&pb, &SequentialSolver.solve(&pb));
        }
    }
}

#[test]
fn parallel_solutions_are_optimal() {
    for seed in 200..220 {
        let pb = instance(seed, 12, 40);
        check(&pb, &ParallelSolver::custom(3).solve(&pb));
    }
}

#[test]
fn solvers_agree_with_each_other() {
    for seed in 300..320 {
        let pb = instance(seed, 15, 50);
        assert_eq!(SequentialSolver.solve(&pb), ParallelSolver::new().solve(&pb));
    }
}

#[test]
fn repeated_calls_are_deterministic() {
    let pb = instance(42, 14, 45);
    let reference = SequentialSolver.solve(&pb);
    for _ in 0..5 {
        assert_eq!(reference, SequentialSolver.solve(&pb));
    }
}

#[test]
fn textbook_example() {
    let solution = solve(
        vec!["Item 0", "Item 1", "Item 2", "Item 3"],
        vec![2, 3, 4, 5],
        vec![3, 4, 5, 6],
        5,
    )
    .unwrap();
    assert_eq!(7, solution.value);
    assert_eq!(vec![Item::new("Item 0", 2, 3), Item::new("Item 1", 3, 4)], solution.items);
}

#[test]
fn mismatched_descriptions_are_rejected() {
    let err = solve(vec!["a", "b", "c"], vec![1, 2, 3], vec![1, 2], 10).unwrap_err();
    assert_eq!(
        Error::InvalidInput(Defect::LengthMismatch { ids: 3, weights: 3, values: 2 }),
        err
    );
}
