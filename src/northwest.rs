use crate::matrix::Matrix;
use crate::problem::TransportProblem;
use crate::solution::{Quantity, TransportSolution};
use crate::solver::{validate_balance, AllocationSolver};
use crate::trace::Trace;
use anyhow;
use tracing::trace;

/// Northwest corner heuristic.
///
/// Sweeps the allocation matrix from the top-left cell, shipping as much as
/// possible at the cursor and advancing right or down as demands are met and
/// supplies run out. Costs are ignored entirely, which makes this the
/// cheapest heuristic to run and usually the most expensive plan to ship.
pub struct NorthwestCorner;

impl<T> AllocationSolver<T> for NorthwestCorner
where
    T: Quantity,
{
    fn solve(problem: &TransportProblem<T>) -> Result<TransportSolution<T>, anyhow::Error> {
        validate_balance(problem.supply(), problem.demand())?;

        let mut supply = problem.supply().to_vec();
        let mut demand = problem.demand().to_vec();
        let m = supply.len();
        let n = demand.len();
        let cost = problem.cost();
        let mut allocation = Matrix::filled(m, n, T::zero());
        let mut steps = Trace::new();

        let mut i = 0;
        let mut j = 0;
        while i < m && j < n {
            // a zero here can only be left over from an earlier simultaneous
            // exhaustion; skip the drained line
            if supply[i].is_zero() {
                i += 1;
                continue;
            }
            if demand[j].is_zero() {
                j += 1;
                continue;
            }

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
            trace!("assigned {} units at ({}, {})", quantity, i, j);

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
                     Moving to the next column and keeping the zero in the row.",
                    origin, destination
                ));
                j += 1;
            } else if supply[i].is_zero() {
                steps.note(format!(
                    "Supply at {} is exhausted. Moving down to the next row.",
                    origin
                ));
                i += 1;
            } else {
                steps.note(format!(
                    "Demand at {} is satisfied. Moving to the next column.",
                    destination
                ));
                j += 1;
            }
        }

        Ok(TransportSolution::assemble(
            problem,
            allocation,
            Some(steps.into_lines()),
        ))
    }
}

/// Runs the northwest corner heuristic on `problem`.
#[inline]
pub fn solve_northwest_corner<T>(
    problem: &TransportProblem<T>,
) -> Result<TransportSolution<T>, anyhow::Error>
where
    T: Quantity,
{
    NorthwestCorner::solve(problem)
}
