use crate::matrix::Matrix;
use crate::solution::Quantity;
use anyhow::{ensure, Result};
use std::error::Error;
use std::fmt;

/// Balanced transportation problem: origins with fixed supply, destinations
/// with fixed demand and a unit cost for every origin/destination pair.
///
/// Construction validates shapes and sign; the supply/demand balance itself
/// is checked by each solver at the start of a solve, so an unbalanced
/// instance can be built and is rejected on use.
#[derive(Debug, Clone)]
pub struct TransportProblem<T>
where
    T: Quantity,
{
    origin_names: Vec<String>,
    destination_names: Vec<String>,
    supply: Vec<T>,
    demand: Vec<T>,
    cost: Matrix<T>,
}

impl<T> TransportProblem<T>
where
    T: Quantity,
{
    /// Builds a problem from named origins and destinations.
    ///
    /// `cost` rows correspond to origins, columns to destinations. Blank or
    /// whitespace-only names are replaced with `Origin {i}` / `Destination {j}`
    /// (1-based).
    pub fn new(
        origin_names: Vec<String>,
        destination_names: Vec<String>,
        supply: Vec<T>,
        demand: Vec<T>,
        cost: Vec<Vec<T>>,
    ) -> Result<TransportProblem<T>, anyhow::Error> {
        ensure!(!supply.is_empty(), "at least one origin is required");
        ensure!(!demand.is_empty(), "at least one destination is required");
        ensure!(
            origin_names.len() == supply.len(),
            "expected {} origin names, got {}",
            supply.len(),
            origin_names.len()
        );
        ensure!(
            destination_names.len() == demand.len(),
            "expected {} destination names, got {}",
            demand.len(),
            destination_names.len()
        );
        let cost = Matrix::from_rows(cost)?;
        ensure!(
            cost.rows() == supply.len() && cost.cols() == demand.len(),
            "cost matrix must be {}x{}, got {}x{}",
            supply.len(),
            demand.len(),
            cost.rows(),
            cost.cols()
        );
        ensure!(
            supply.iter().all(|quantity| *quantity >= T::zero()),
            "supplies must be non-negative"
        );
        ensure!(
            demand.iter().all(|quantity| *quantity >= T::zero()),
            "demands must be non-negative"
        );

        Ok(TransportProblem {
            origin_names: default_names(origin_names, "Origin"),
            destination_names: default_names(destination_names, "Destination"),
            supply,
            demand,
            cost,
        })
    }

    /// Builds a problem with all names defaulted.
    pub fn unnamed(
        supply: Vec<T>,
        demand: Vec<T>,
        cost: Vec<Vec<T>>,
    ) -> Result<TransportProblem<T>, anyhow::Error> {
        let origin_names = vec![String::new(); supply.len()];
        let destination_names = vec![String::new(); demand.len()];
        TransportProblem::new(origin_names, destination_names, supply, demand, cost)
    }

    #[inline]
    pub fn num_origins(&self) -> usize {
        self.supply.len()
    }

    #[inline]
    pub fn num_destinations(&self) -> usize {
        self.demand.len()
    }

    #[inline]
    pub fn origin_names(&self) -> &[String] {
        &self.origin_names
    }

    #[inline]
    pub fn destination_names(&self) -> &[String] {
        &self.destination_names
    }

    #[inline]
    pub fn supply(&self) -> &[T] {
        &self.supply
    }

    #[inline]
    pub fn demand(&self) -> &[T] {
        &self.demand
    }

    #[inline]
    pub fn cost(&self) -> &Matrix<T> {
        &self.cost
    }
}

fn default_names(names: Vec<String>, prefix: &str) -> Vec<String> {
    names
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            if name.trim().is_empty() {
                format!("{} {}", prefix, idx + 1)
            } else {
                name
            }
        })
        .collect()
}

/// Rejection raised when total supply and total demand differ.
///
/// This is the only failure the solvers produce; both totals are carried so
/// callers can display the mismatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnbalancedProblem<T> {
    pub supply_total: T,
    pub demand_total: T,
}

impl<T> fmt::Display for UnbalancedProblem<T>
where
    T: Quantity,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "problem is not balanced: total supply {}, total demand {}",
            self.supply_total, self.demand_total
        )
    }
}

impl<T> Error for UnbalancedProblem<T> where T: Quantity {}
