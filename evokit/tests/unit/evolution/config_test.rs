use super::*;

#[test]
fn can_use_defaults() {
    let config = EvolutionConfigBuilder::default().build().expect("cannot build config");

    assert_eq!(config.population_size, 10_000);
    assert_eq!(config.max_generations, 100);
    assert_eq!(config.max_reseeds, 100);
    assert_eq!(config.threshold_ratio, 0.25);
    assert_eq!(config.parents, 2);
    assert!(matches!(config.telemetry, TelemetryMode::None));
}

#[test]
fn can_override_defaults() {
    let config = EvolutionConfigBuilder::default()
        .with_population_size(10)
        .with_max_generations(5)
        .with_max_reseeds(1)
        .with_threshold_ratio(0.5)
        .with_mutation_chance(0.)
        .with_parents(3)
        .build()
        .expect("cannot build config");

    assert_eq!(config.population_size, 10);
    assert_eq!(config.max_generations, 5);
    assert_eq!(config.max_reseeds, 1);
    assert_eq!(config.threshold_ratio, 0.5);
    assert_eq!(config.mutation_chance, 0.);
    assert_eq!(config.parents, 3);
}

parameterized_test! {can_reject_invalid_config, builder, {
    assert!(builder.build().is_err());
}}

can_reject_invalid_config! {
    case01_empty_population: EvolutionConfigBuilder::default().with_population_size(0),
    case02_no_generations: EvolutionConfigBuilder::default().with_max_generations(0),
    case03_no_parents: EvolutionConfigBuilder::default().with_parents(0),
    case04_mutation_chance: EvolutionConfigBuilder::default().with_mutation_chance(1.5),
    case05_threshold_ratio: EvolutionConfigBuilder::default().with_threshold_ratio(-0.1),
}
