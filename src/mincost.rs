use crate::matrix::Matrix;
use crate::problem::TransportProblem;
use crate::solution::{Quantity, TransportSolution};
use crate::solver::{validate_balance, AllocationSolver};
use crate::trace::Trace;
use anyhow;
use tracing::trace;

/// Minimum cost heuristic.
///
/// Repeatedly ships as much as possible into the globally cheapest cell whose
/// row still has supply and whose column still has demand. Each round rescans
/// the whole matrix; ties resolve to the first cell in row-major order.
pub struct MinimumCost;

impl<T> AllocationSolver<T> for MinimumCost
where
    T: Quantity,
{
    fn solve(problem: &TransportProblem<T>) -> Result<TransportSolution<T>, anyhow::Error> {
        validate_balance(problem.supply(), problem.demand())?;

        let mut supply = problem.supply().to_vec();
        let mut demand = problem.demand().to_vec();
        let cost = problem.cost();
        let mut allocation = Matrix::filled(supply.len(), demand.len(), T::zero());
        let mut steps = Trace::new();

        while let Some((i, j)) = cheapest_active_cell(&supply, &demand, cost) {
            let quantity = if supply[i] < demand[j] {
                supply[i]
            } else {
                demand[j]
            };
            let supply_before = supply[i];
            let demand_before = demand[j];
            allocation[(i, j)] = quantity;
            supply[i] -= quantity;
            demand[j] -= quantity;
            trace!(
                "assigned {} units at ({}, {}), unit cost {}",
                quantity,
                i,
                j,
                cost[(i, j)]
            );

            let origin = &problem.origin_names()[i];
            let destination = &problem.destination_names()[j];
            steps.assignment(
                quantity,
                origin,
                destination,
                cost[(i, j)],
                (supply_before, supply[i]),
                (demand_before, demand[j]),
            );

            if supply[i].is_zero() && demand[j].is_zero() {
                steps.note(format!(
                    "Supply at {} and demand at {} reached zero simultaneously. \
                     Only one is crossed out; the other keeps a visible zero while the \
                     scan continues with the next minimum-cost cell.",
                    origin, destination
                ));
            } else if supply[i].is_zero() {
                steps.note(format!(
                    "Supply at {} is exhausted. The row is crossed out.",
                    origin
                ));
            } else {
                steps.note(format!(
                    "Demand at {} is satisfied. The column is crossed out.",
                    destination
                ));
            }
        }

        Ok(TransportSolution::assemble(
            problem,
            allocation,
            Some(steps.into_lines()),
        ))
    }
}

/// First strict minimum in row-major order among cells with remaining supply
/// and demand, or `None` once every row or every column is drained.
fn cheapest_active_cell<T>(supply: &[T], demand: &[T], cost: &Matrix<T>) -> Option<(usize, usize)>
where
    T: Quantity,
{
    let mut best: Option<(usize, usize, T)> = None;
    for i in 0..supply.len() {
        if supply[i].is_zero() {
            continue;
        }
        for j in 0..demand.len() {
            if demand[j].is_zero() {
                continue;
            }
            let unit_cost = cost[(i, j)];
            if best.map_or(true, |(_, _, min_cost)| unit_cost < min_cost) {
                best = Some((i, j, unit_cost));
            }
        }
    }
    best.map(|(i, j, _)| (i, j))
}

/// Runs the minimum cost heuristic on `problem`.
#[inline]
pub fn solve_minimum_cost<T>(
    problem: &TransportProblem<T>,
) -> Result<TransportSolution<T>, anyhow::Error>
where
    T: Quantity,
{
    MinimumCost::solve(problem)
}

#[cfg(test)]
mod tests {
    use super::{cheapest_active_cell, solve_minimum_cost};
    use crate::matrix::Matrix;
    use crate::problem::TransportProblem;

    #[test]
    fn picks_cheapest_cells_first() {
        let problem = TransportProblem::unnamed(
            vec![20, 30],
            vec![25, 25],
            vec![vec![5, 8], vec![7, 6]],
        )
        .unwrap();
        let solution = solve_minimum_cost(&problem).unwrap();
        // (0,0)=5 first, then (1,1)=6, then the leftover lands on (1,0)
        let expected = Matrix::from_rows(vec![vec![20, 0], vec![5, 25]]).unwrap();
        assert_eq!(solution.allocation, expected);
        assert_eq!(solution.total_cost, 285);
    }

    #[test]
    fn ties_resolve_in_row_major_order() {
        let problem =
            TransportProblem::unnamed(vec![5, 5], vec![5, 5], vec![vec![1, 1], vec![1, 1]])
                .unwrap();
        let solution = solve_minimum_cost(&problem).unwrap();
        let expected = Matrix::from_rows(vec![vec![5, 0], vec![0, 5]]).unwrap();
        assert_eq!(solution.allocation, expected);
        let steps = solution.steps.unwrap();
        assert!(steps
            .iter()
            .any(|line| line.contains("reached zero simultaneously")));
    }

    #[test]
    fn scan_skips_drained_rows_and_columns() {
        let cost = Matrix::from_rows(vec![vec![1, 9], vec![2, 3]]).unwrap();
        assert_eq!(cheapest_active_cell(&[0, 4], &[2, 2], &cost), Some((1, 0)));
        assert_eq!(cheapest_active_cell(&[3, 4], &[0, 2], &cost), Some((1, 1)));
        assert_eq!(cheapest_active_cell(&[0, 0], &[2, 2], &cost), None);
    }

    #[test]
    fn classic_three_by_four_instance() {
        let problem = TransportProblem::unnamed(
            vec![7, 9, 18],
            vec![5, 8, 7, 14],
            vec![
                vec![19, 30, 50, 10],
                vec![70, 30, 40, 60],
                vec![40, 8, 70, 20],
            ],
        )
        .unwrap();
        let solution = solve_minimum_cost(&problem).unwrap();
        let expected = Matrix::from_rows(vec![
            vec![0, 0, 0, 7],
            vec![2, 0, 7, 0],
            vec![3, 8, 0, 7],
        ])
        .unwrap();
        assert_eq!(solution.allocation, expected);
        assert_eq!(solution.total_cost, 814);
    }

    #[test]
    fn narration_counts_assignments_and_crossouts() {
        let problem = TransportProblem::unnamed(
            vec![20, 30],
            vec![25, 25],
            vec![vec![5, 8], vec![7, 6]],
        )
        .unwrap();
        let solution = solve_minimum_cost(&problem).unwrap();
        let steps = solution.steps.unwrap();
        assert_eq!(steps.len(), 6);
        assert!(steps[0].starts_with("Step 1: assign 20 units"));
        assert!(steps[1].contains("row is crossed out"));
    }
}
