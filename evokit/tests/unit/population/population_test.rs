use super::*;
use crate::utils::DefaultRandom;

#[test]
fn can_seed_population_of_given_size() {
    let chromosome = Chromosome::new(vec![1, 2, 3], Some(vec![1, 2, 3]));

    let population = Population::seed(&chromosome, 20, 3, &DefaultRandom::default()).expect("cannot seed");

    assert_eq!(population.len(), 20);
    assert!(population.individuals().iter().all(|individual| individual.len() == 3));
}

#[test]
fn can_propagate_seed_error() {
    let chromosome = Chromosome::new(vec![1, 2, 3], Some(vec![1, 2, 3]));

    assert!(Population::seed(&chromosome, 20, 2, &DefaultRandom::default()).is_err());
}

#[test]
fn can_evaluate_fitness_in_population_order() {
    let population = Population::new(vec![Individual::new(vec![3, 1]), Individual::new(vec![1, 1])]);

    let fitness = population.evaluate(|individual| individual.genes().iter().sum::<i32>() as Float);

    assert_eq!(fitness, vec![4., 2.]);
}

#[test]
fn can_sort_by_fitness_keeping_ties_in_order() {
    let population = Population::new(vec![
        Individual::new(vec![5i32]),
        Individual::new(vec![2]),
        Individual::new(vec![-2]),
        Individual::new(vec![7]),
    ]);

    let sorted = population.sorted_by(|individual| individual.genes()[0].abs() as Float);

    let genes = sorted.iter().map(|(individual, _)| individual.genes()[0]).collect::<Vec<_>>();
    assert_eq!(genes, vec![2, -2, 5, 7]);
}

parameterized_test! {can_get_percentile_fitness, (values, ratio, expected), {
    assert_eq!(percentile_fitness(values.as_slice(), ratio), expected);
}}

can_get_percentile_fitness! {
    case01_empty: (vec![], 0.25, None),
    case02_single: (vec![3.], 0.25, Some(3.)),
    case03_quarter_of_five: (vec![5., 1., 4., 2., 3.], 0.25, Some(2.)),
    case04_quarter_of_four: (vec![4., 3., 2., 1.], 0.25, Some(1.)),
    case05_max: (vec![4., 3., 2., 1.], 1., Some(4.)),
    case06_min: (vec![4., 3., 2., 1.], 0., Some(1.)),
}
