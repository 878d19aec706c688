//! Construction heuristics for the balanced transportation problem.
//!
//! Given origins with fixed supply, destinations with fixed demand and a unit
//! cost for every pair, each solver builds an initial basic feasible solution:
//! an allocation whose row sums equal the supplies and whose column sums equal
//! the demands. Three independent heuristics are provided:
//!
//! * [`NorthwestCorner`] — sweeps from the top-left cell, ignoring cost.
//! * [`MinimumCost`] — repeatedly fills the globally cheapest reachable cell.
//! * [`VogelApproximation`] — fills the cheapest cell of the row or column
//!   with the highest opportunity-cost penalty.
//!
//! None of them optimizes further; the allocations are feasible starting
//! points, not optima. Problems must balance exactly (total supply equals
//! total demand) or the solvers reject them with [`UnbalancedProblem`].
//!
//! # Example
//!
//! ```
//! use transport_allocation::{solve_vogel_approximation, TransportProblem};
//!
//! # fn main() -> Result<(), anyhow::Error> {
//! let problem = TransportProblem::unnamed(
//!     vec![20, 30],
//!     vec![25, 25],
//!     vec![vec![5, 8], vec![7, 6]],
//! )?;
//! let solution = solve_vogel_approximation(&problem)?;
//! assert_eq!(solution.total_cost, 285);
//! # Ok(())
//! # }
//! ```

pub mod matrix;
pub mod problem;
pub mod solution;
pub mod solver;

#[cfg(any(feature = "northwest", feature = "mincost"))]
mod trace;

#[cfg(feature = "mincost")]
pub mod mincost;
#[cfg(feature = "northwest")]
pub mod northwest;
#[cfg(feature = "vogel")]
pub mod vogel;

pub use crate::matrix::Matrix;
pub use crate::problem::{TransportProblem, UnbalancedProblem};
pub use crate::solution::{Quantity, TransportSolution};
pub use crate::solver::{total_cost, validate_balance, AllocationSolver};

#[cfg(feature = "mincost")]
pub use crate::mincost::{solve_minimum_cost, MinimumCost};
#[cfg(feature = "northwest")]
pub use crate::northwest::{solve_northwest_corner, NorthwestCorner};
#[cfg(feature = "vogel")]
pub use crate::vogel::{solve_vogel_approximation, VogelApproximation};
