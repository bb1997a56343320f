use super::*;
use crate::utils::{DefaultRandom, ErrorKind};

fn sorted<G: Ord + Clone>(genes: &[G]) -> Vec<G> {
    let mut genes = genes.to_vec();
    genes.sort();
    genes
}

#[test]
fn can_generate_permutation_of_inclusion_set() {
    let random = DefaultRandom::default();
    let chromosome = Chromosome::new(vec![1, 2, 3, 4], Some(vec![1, 2, 3, 4]));

    (0..50).for_each(|_| {
        let individual = chromosome.generate(4, None, None, &random).expect("cannot generate");

        assert_eq!(sorted(individual.genes()), vec![1, 2, 3, 4]);
    });
}

#[test]
fn can_place_each_inclusion_gene_once_and_fill_rest_from_alphabet() {
    let random = DefaultRandom::default();
    let chromosome = Chromosome::new(vec![9], Some(vec![1, 2]));

    let individual = chromosome.generate(5, None, None, &random).expect("cannot generate");

    assert_eq!(individual.len(), 5);
    assert_eq!(individual.genes().iter().filter(|gene| **gene == 1).count(), 1);
    assert_eq!(individual.genes().iter().filter(|gene| **gene == 2).count(), 1);
    assert_eq!(individual.genes().iter().filter(|gene| **gene == 9).count(), 3);
}

#[test]
fn can_ignore_duplicates_in_inclusion_set() {
    let chromosome = Chromosome::new(vec![1, 2], Some(vec![2, 1, 2]));

    assert_eq!(chromosome.inclusion(), Some([2, 1].as_slice()));
}

#[test]
fn can_pin_first_and_last_genes() {
    let random = DefaultRandom::default();
    let chromosome = Chromosome::new(vec![1, 2, 3], Some(vec![1, 2, 3]));

    let individual = chromosome.generate(5, Some(0), Some(0), &random).expect("cannot generate");

    assert_eq!(individual.get(0), Some(&0));
    assert_eq!(individual.get(4), Some(&0));
    assert_eq!(sorted(&individual.genes()[1..4]), vec![1, 2, 3]);
}

parameterized_test! {can_reject_impossible_generation, (alphabet, inclusion, length, first, last), {
    let chromosome = Chromosome::new(alphabet, inclusion);

    let result = chromosome.generate(length, first, last, &DefaultRandom::default());

    assert_eq!(result.map_err(|err| err.kind()), Err(ErrorKind::Validation));
}}

can_reject_impossible_generation! {
    case01_inclusion_longer_than_length: (vec![1, 2, 3], Some(vec![1, 2, 3]), 2, None, None),
    case02_inclusion_longer_than_free_positions: (vec![1, 2, 3], Some(vec![1, 2, 3]), 4, Some(0), Some(0)),
    case03_empty_alphabet_with_free_positions: (vec![], Some(vec![1]), 3, None, None),
    case04_empty_alphabet_without_inclusion: (Vec::<i32>::new(), None, 1, None, None),
}

#[test]
fn can_generate_from_empty_alphabet_when_inclusion_fills_all_positions() {
    let chromosome = Chromosome::new(vec![], Some(vec![5, 6]));

    let individual = chromosome.generate(2, None, None, &DefaultRandom::default()).expect("cannot generate");

    assert_eq!(sorted(individual.genes()), vec![5, 6]);
}
