//! The programs replayed by the sample.

use freefold::effect::{Program, read_f, run, run_latest, write_f};

use crate::config::ReplayConfig;

/// A named program, built from the configured values.
pub struct Scenario {
    /// Short identifier used in logs and output.
    pub name: &'static str,
    /// The program itself.
    pub program: Program<i32>,
}

/// What both interpreters made of one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The scenario name.
    pub name: &'static str,
    /// Every result of the list interpretation, in branch order.
    pub every: Vec<i32>,
    /// The result of the latest-write interpretation.
    pub latest: Option<i32>,
}

/// Builds the sample scenarios.
pub fn scenarios(config: ReplayConfig) -> Vec<Scenario> {
    let ReplayConfig {
        first_write,
        second_write,
    } = config;

    vec![
        Scenario {
            name: "read_before_write",
            program: read_f(),
        },
        Scenario {
            name: "write_then_read",
            program: write_f(first_write) >> read_f(),
        },
        Scenario {
            name: "compound",
            program: (write_f(first_write) >> read_f()).bind(move |x| {
                (write_f(second_write) >> read_f()).bind(move |y| Program::pure(x + y))
            }),
        },
    ]
}

/// Runs `scenario` through both interpreters.
pub fn replay(scenario: Scenario) -> Outcome {
    let Scenario { name, program } = scenario;
    let every = run(program.clone()).into_vec();
    let latest = run_latest(program);

    tracing::debug!(name, branches = every.len(), ?latest, "scenario replayed");
    Outcome {
        name,
        every,
        latest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn outcomes(config: ReplayConfig) -> Vec<Outcome> {
        scenarios(config).into_iter().map(replay).collect()
    }

    #[rstest]
    fn default_scenarios_reproduce_reference_results() {
        let outcomes = outcomes(ReplayConfig::default());

        assert_eq!(
            outcomes,
            vec![
                Outcome {
                    name: "read_before_write",
                    every: vec![],
                    latest: None,
                },
                Outcome {
                    name: "write_then_read",
                    every: vec![10],
                    latest: Some(10),
                },
                Outcome {
                    name: "compound",
                    every: vec![20, 30],
                    latest: Some(30),
                },
            ]
        );
    }

    #[rstest]
    #[case(1, 2, vec![2, 3], Some(3))]
    #[case(5, 5, vec![10, 10], Some(10))]
    #[case(-3, 4, vec![-6, 1], Some(1))]
    fn compound_follows_configured_writes(
        #[case] first_write: i32,
        #[case] second_write: i32,
        #[case] every: Vec<i32>,
        #[case] latest: Option<i32>,
    ) {
        let compound = outcomes(ReplayConfig {
            first_write,
            second_write,
        })
        .into_iter()
        .find(|outcome| outcome.name == "compound")
        .unwrap();

        assert_eq!(compound.every, every);
        assert_eq!(compound.latest, latest);
    }
}
