use crate::matrix::Matrix;
use crate::problem::{TransportProblem, UnbalancedProblem};
use crate::solution::{Quantity, TransportSolution};
use anyhow;

/// Common contract of the construction heuristics.
///
/// Every solver takes a complete problem, validates the supply/demand balance
/// and returns a feasible (not necessarily optimal) allocation together with
/// its total cost. Solvers copy the supply and demand vectors before mutating
/// them, so the problem itself is never touched and may be solved again or
/// shared across threads.
pub trait AllocationSolver<T>
where
    T: Quantity,
{
    fn solve(problem: &TransportProblem<T>) -> Result<TransportSolution<T>, anyhow::Error>;
}

/// Rejects problems whose total supply and total demand differ.
///
/// The comparison is exact; no tolerance is applied for floating point drift.
pub fn validate_balance<T>(supply: &[T], demand: &[T]) -> Result<(), UnbalancedProblem<T>>
where
    T: Quantity,
{
    let supply_total = supply
        .iter()
        .fold(T::zero(), |acc, quantity| acc + *quantity);
    let demand_total = demand
        .iter()
        .fold(T::zero(), |acc, quantity| acc + *quantity);
    if supply_total != demand_total {
        return Err(UnbalancedProblem {
            supply_total,
            demand_total,
        });
    }
    Ok(())
}

/// Total shipping cost of an allocation: Σ allocation(i, j) · cost(i, j).
///
/// Both matrices must have identical dimensions.
pub fn total_cost<T>(allocation: &Matrix<T>, cost: &Matrix<T>) -> T
where
    T: Quantity,
{
    debug_assert!(allocation.rows() == cost.rows() && allocation.cols() == cost.cols());
    allocation
        .values()
        .iter()
        .zip(cost.values())
        .fold(T::zero(), |acc, (quantity, unit_cost)| {
            acc + *quantity * *unit_cost
        })
}


#[cfg(all(test, feature = "northwest", feature = "mincost", feature = "vogel"))]
#[generic_tests::define]
mod contract {
    use super::{total_cost, AllocationSolver};
    use crate::mincost::MinimumCost;
    use crate::northwest::NorthwestCorner;
    use crate::problem::{TransportProblem, UnbalancedProblem};
    use crate::vogel::VogelApproximation;
    use rand::distributions::{Distribution, Uniform};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn init() {
        let _ = tracing_subscriber::fmt::try_init();
    }

    /// Supplies and demands are the row/column sums of a hidden random
    /// shipment plan, so totals balance exactly.
    fn random_balanced_problem(seed: u64, m: usize, n: usize) -> TransportProblem<i64> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let quantities = Uniform::from(0..20i64);
        let unit_costs = Uniform::from(1..100i64);

        let mut supply = vec![0i64; m];
        let mut demand = vec![0i64; n];
        let mut cost = Vec::with_capacity(m);
        for i in 0..m {
            let mut row = Vec::with_capacity(n);
            for j in 0..n {
                let quantity = quantities.sample(&mut rng);
                supply[i] += quantity;
                demand[j] += quantity;
                row.push(unit_costs.sample(&mut rng));
            }
            cost.push(row);
        }
        TransportProblem::unnamed(supply, demand, cost).unwrap()
    }

    #[test]
    fn row_and_column_sums_match_the_input<S: AllocationSolver<i64>>() {
        init();
        for seed in 0..8 {
            let problem = random_balanced_problem(seed, 6, 9);
            let solution = S::solve(&problem).unwrap();
            for i in 0..problem.num_origins() {
                let row_total: i64 = solution.allocation.row(i).iter().sum();
                assert_eq!(row_total, problem.supply()[i], "row {} (seed {})", i, seed);
            }
            for j in 0..problem.num_destinations() {
                let col_total: i64 = (0..problem.num_origins())
                    .map(|i| solution.allocation[(i, j)])
                    .sum();
                assert_eq!(col_total, problem.demand()[j], "col {} (seed {})", j, seed);
            }
        }
    }

    #[test]
    fn quantities_are_non_negative<S: AllocationSolver<i64>>() {
        init();
        let problem = random_balanced_problem(17, 7, 4);
        let solution = S::solve(&problem).unwrap();
        assert!(solution.allocation.values().iter().all(|q| *q >= 0));
    }

    #[test]
    fn reported_cost_matches_recomputation<S: AllocationSolver<i64>>() {
        init();
        let problem = random_balanced_problem(3, 5, 5);
        let solution = S::solve(&problem).unwrap();
        assert_eq!(
            solution.total_cost,
            total_cost(&solution.allocation, problem.cost())
        );
        let mut recomputed = 0i64;
        for i in 0..problem.num_origins() {
            for j in 0..problem.num_destinations() {
                recomputed += solution.allocation[(i, j)] * problem.cost()[(i, j)];
            }
        }
        assert_eq!(solution.total_cost, recomputed);
    }

    #[test]
    fn unbalanced_problems_are_rejected<S: AllocationSolver<i64>>() {
        init();
        let problem = TransportProblem::unnamed(vec![10], vec![4, 7], vec![vec![1, 2]]).unwrap();
        let err = S::solve(&problem).unwrap_err();
        let unbalanced = err
            .downcast_ref::<UnbalancedProblem<i64>>()
            .expect("expected an unbalance rejection");
        assert_eq!(unbalanced.supply_total, 10);
        assert_eq!(unbalanced.demand_total, 11);
    }

    #[test]
    fn repeated_solves_are_identical<S: AllocationSolver<i64>>() {
        init();
        let problem = random_balanced_problem(42, 5, 5);
        let first = S::solve(&problem).unwrap();
        let second = S::solve(&problem).unwrap();
        assert_eq!(first.allocation, second.allocation);
        assert_eq!(first.total_cost, second.total_cost);
    }

    #[test]
    fn single_pair_problem_ships_everything<S: AllocationSolver<i64>>() {
        init();
        let problem = TransportProblem::unnamed(vec![7], vec![7], vec![vec![3]]).unwrap();
        let solution = S::solve(&problem).unwrap();
        assert_eq!(solution.allocation[(0, 0)], 7);
        assert_eq!(solution.total_cost, 21);
    }

    #[instantiate_tests(<NorthwestCorner>)]
    mod northwest_corner {}

    #[instantiate_tests(<MinimumCost>)]
    mod minimum_cost {}

    #[instantiate_tests(<VogelApproximation>)]
    mod vogel_approximation {}
}
