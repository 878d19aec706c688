use crate::matrix::Matrix;
use crate::problem::TransportProblem;
use crate::solution::{Quantity, TransportSolution};
use crate::solver::{validate_balance, AllocationSolver};
use anyhow;
use tracing::trace;

/// Vogel's approximation heuristic.
///
/// Ranks every active row and column by its penalty, the cost gap between its
/// two cheapest reachable cells, and ships into the cheapest cell of the line
/// with the highest penalty. Rows win penalty ties against columns. The line
/// whose remaining quantity reaches zero is deactivated; no narration is
/// recorded.
pub struct VogelApproximation;

impl<T> AllocationSolver<T> for VogelApproximation
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
        let mut row_active = vec![true; m];
        let mut col_active = vec![true; n];

        while row_active.iter().any(|&active| active) && col_active.iter().any(|&active| active) {
            let mut best_row: Option<(usize, T)> = None;
            for i in 0..m {
                if !row_active[i] {
                    continue;
                }
                let row_penalty = penalty(
                    (0..n)
                        .filter(|&j| col_active[j])
                        .map(|j| cost[(i, j)]),
                );
                if let Some(value) = row_penalty {
                    if best_row.map_or(true, |(_, best)| value > best) {
                        best_row = Some((i, value));
                    }
                }
            }

            let mut best_col: Option<(usize, T)> = None;
            for j in 0..n {
                if !col_active[j] {
                    continue;
                }
                let col_penalty = penalty(
                    (0..m)
                        .filter(|&i| row_active[i])
                        .map(|i| cost[(i, j)]),
                );
                if let Some(value) = col_penalty {
                    if best_col.map_or(true, |(_, best)| value > best) {
                        best_col = Some((j, value));
                    }
                }
            }
            trace!(
                "best row penalty {:?}, best column penalty {:?}",
                best_row,
                best_col
            );

            // rows win penalty ties
            let cell = match (best_row, best_col) {
                (Some((i, row_penalty)), Some((_, col_penalty))) if row_penalty >= col_penalty => {
                    cheapest_in_row(cost, i, &col_active).map(|j| (i, j))
                }
                (_, Some((j, _))) => cheapest_in_col(cost, j, &row_active).map(|i| (i, j)),
                (Some((i, _)), None) => cheapest_in_row(cost, i, &col_active).map(|j| (i, j)),
                (None, None) => None,
            };
            let (i, j) = match cell {
                Some(cell) => cell,
                None => break,
            };

            let quantity = if supply[i] < demand[j] {
                supply[i]
            } else {
                demand[j]
            };
            allocation[(i, j)] = quantity;
            supply[i] -= quantity;
            demand[j] -= quantity;
            trace!("assigned {} units at ({}, {})", quantity, i, j);

            if supply[i].is_zero() {
                row_active[i] = false;
            }
            if demand[j].is_zero() {
                col_active[j] = false;
            }
        }

        Ok(TransportSolution::assemble(problem, allocation, None))
    }
}

/// Penalty of one line: the gap between its two smallest reachable costs,
/// the single cost itself when only one is reachable, `None` when none are.
fn penalty<T>(values: impl IntoIterator<Item = T>) -> Option<T>
where
    T: Quantity,
{
    let mut smallest: Option<T> = None;
    let mut second: Option<T> = None;
    for value in values {
        match smallest {
            None => smallest = Some(value),
            Some(current) if value < current => {
                second = smallest;
                smallest = Some(value);
            }
            _ => match second {
                None => second = Some(value),
                Some(current) if value < current => second = Some(value),
                _ => {}
            },
        }
    }
    match (smallest, second) {
        (Some(smallest), Some(second)) => Some(second - smallest),
        (Some(smallest), None) => Some(smallest),
        (None, _) => None,
    }
}

fn cheapest_in_row<T>(cost: &Matrix<T>, i: usize, col_active: &[bool]) -> Option<usize>
where
    T: Quantity,
{
    let mut best: Option<(usize, T)> = None;
    for j in 0..col_active.len() {
        if !col_active[j] {
            continue;
        }
        if best.map_or(true, |(_, min_cost)| cost[(i, j)] < min_cost) {
            best = Some((j, cost[(i, j)]));
        }
    }
    best.map(|(j, _)| j)
}

fn cheapest_in_col<T>(cost: &Matrix<T>, j: usize, row_active: &[bool]) -> Option<usize>
where
    T: Quantity,
{
    let mut best: Option<(usize, T)> = None;
    for i in 0..row_active.len() {
        if !row_active[i] {
            continue;
        }
        if best.map_or(true, |(_, min_cost)| cost[(i, j)] < min_cost) {
            best = Some((i, cost[(i, j)]));
        }
    }
    best.map(|(i, _)| i)
}

/// Runs Vogel's approximation heuristic on `problem`.
#[inline]
pub fn solve_vogel_approximation<T>(
    problem: &TransportProblem<T>,
) -> Result<TransportSolution<T>, anyhow::Error>
where
    T: Quantity,
{
    VogelApproximation::solve(problem)
}
