use crate::evolution::{Champion, EvolutionConfig, EvolutionProblem, EvolutionResult, Telemetry};
use crate::genotype::Individual;
use crate::operators::{Mutation, uniform_crossover};
use crate::population::{Population, percentile_fitness};
use crate::selection::Selection;
use crate::utils::{DefaultRandom, Float, GenericError, GenericResult, Random, ThreadPool, Timer, parallel_into_collect};
use rand::RngCore;

/// Runs generational evolution for a given problem.
pub struct Evolution<P: EvolutionProblem> {
    problem: P,
    config: EvolutionConfig,
}

type GenerationItem<P> = (Individual<<P as EvolutionProblem>::Gene>, Float);

impl<P: EvolutionProblem> Evolution<P> {
    /// Creates a new instance of `Evolution`.
    pub fn new(problem: P, config: EvolutionConfig) -> Self {
        Self { problem, config }
    }

    /// Returns the problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Runs evolution until generation budget, reseed budget or quota is exhausted.
    /// Non-convergence is not an error: it is reported via `EvolutionResult::is_converged`.
    pub fn run(self) -> GenericResult<EvolutionResult<P::Gene>> {
        let pool = ThreadPool::new(self.config.environment.parallelism);

        pool.execute(|| self.run_generations())
    }

    fn run_generations(&self) -> GenericResult<EvolutionResult<P::Gene>> {
        let config = &self.config;
        let environment = config.environment.as_ref();
        let telemetry = Telemetry::new(config.telemetry.clone());
        let bound = self.problem.bound();

        let initial_time = Timer::start();
        let mut population = self.seed()?;
        telemetry.on_initial(population.len(), self.problem.individual_size(), initial_time);

        let mut champion: Option<Champion<P::Gene>> = None;
        let (mut generations, mut reseeds, mut interrupted) = (0, 0, false);

        while generations < config.max_generations {
            let generation_time = Timer::start();
            let sorted = population.sorted_by(|individual| self.problem.fitness(individual));

            if champion.is_none() {
                champion = sorted
                    .first()
                    .map(|(individual, fitness)| Champion::new(individual.clone(), bound.as_ref(), *fitness, false));
            }

            if environment.is_quota_reached() {
                telemetry.on_interruption(generations);
                interrupted = true;
                break;
            }

            let fitness = sorted.iter().map(|(_, fitness)| *fitness).collect::<Vec<_>>();
            let threshold = percentile_fitness(fitness.as_slice(), config.threshold_ratio).unwrap_or(Float::MAX);
            let survivors = self.select(sorted, threshold);

            let Some((best, best_fitness)) = survivors.first().cloned() else {
                if reseeds >= config.max_reseeds {
                    break;
                }

                reseeds += 1;
                telemetry.on_reseed(reseeds, config.max_reseeds);
                population = self.seed()?;

                continue;
            };

            let is_improved = match &champion {
                Some(current) if current.is_feasible => best_fitness < current.fitness,
                _ => true,
            };

            if is_improved {
                champion = Some(Champion::new(best, bound.as_ref(), best_fitness, true));
            }

            generations += 1;

            let champion_fitness = champion.as_ref().map_or(best_fitness, |champion| champion.fitness);
            telemetry.on_generation(
                generations,
                survivors.len(),
                threshold,
                champion_fitness,
                is_improved,
                generation_time,
            );

            population = self.breed(survivors)?;
        }

        let champion = champion
            .ok_or_else(|| GenericError::validation("evolution requires non-empty population and generation budget"))?;
        telemetry.on_result(generations, reseeds, champion.fitness, champion.is_feasible);

        Ok(EvolutionResult { champion, generations, reseeds, interrupted })
    }

    fn seed(&self) -> GenericResult<Population<P::Gene>> {
        Population::seed(
            self.problem.chromosome(),
            self.config.population_size,
            self.problem.individual_size(),
            self.config.environment.random.as_ref(),
        )
    }

    /// Keeps individuals which satisfy all constraints, preserving their order.
    fn select(&self, sorted: Vec<GenerationItem<P>>, threshold: Float) -> Vec<GenerationItem<P>> {
        let selection = Selection::new(self.problem.constraints(threshold)).with_bound(self.problem.bound());
        let individuals = sorted.iter().map(|(individual, _)| individual.clone()).collect::<Vec<_>>();
        let feasibility = selection.feasibility(individuals.as_slice());

        sorted.into_iter().zip(feasibility).filter(|(_, is_feasible)| *is_feasible).map(|(item, _)| item).collect()
    }

    /// Carries survivors over and fills the rest of population with mutated children. Every child gets
    /// its own generator seeded sequentially, so the result does not depend on thread scheduling.
    fn breed(&self, survivors: Vec<GenerationItem<P>>) -> GenericResult<Population<P::Gene>> {
        let random = self.config.environment.random.as_ref();
        let mutation = Mutation::new(self.config.mutation_chance);
        let survivors = survivors.into_iter().map(|(individual, _)| individual).collect::<Vec<_>>();

        let children_size = self.config.population_size.saturating_sub(survivors.len());
        let last_idx = survivors.len() as i32 - 1;
        let seeds = (0..children_size).map(|_| random.get_rng().next_u64()).collect::<Vec<_>>();

        let children = parallel_into_collect(seeds, |seed| {
            let random = DefaultRandom::new_repeatable(seed);
            let parents = (0..self.config.parents)
                .map(|_| &survivors[random.uniform_int(0, last_idx) as usize])
                .collect::<Vec<_>>();

            let child = uniform_crossover(parents.as_slice(), &random)?;
            let child = match self.problem.repair() {
                Some(repair) => repair.repair(child, &random),
                None => child,
            };

            Ok(mutation.mutate(child, &random))
        })
        .into_iter()
        .collect::<GenericResult<Vec<_>>>()?;

        Ok(Population::new(survivors.into_iter().chain(children).collect()))
    }
}
