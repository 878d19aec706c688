use crate::matrix::Matrix;
use crate::problem::TransportProblem;
use crate::solver::total_cost;
use num_traits::{Num, NumAssign};
use std::fmt::{Debug, Display};

/// Scalar type for supplies, demands, unit costs and shipped quantities.
///
/// Satisfied by the built-in integer and float types. Balance checking uses
/// exact equality, so float instantiations must supply values that sum
/// exactly (integers or pre-rounded decimals).
pub trait Quantity:
    Num + NumAssign + PartialOrd + Copy + Display + Debug + Send + Sync + 'static
{
}

impl<T> Quantity for T where
    T: Num + NumAssign + PartialOrd + Copy + Display + Debug + Send + Sync + 'static
{
}

///
/// Initial basic feasible solution of a balanced transportation problem
///
#[derive(Debug, Clone)]
pub struct TransportSolution<T>
where
    T: Quantity,
{
    /// cell (i, j) holds the quantity shipped from origin i to destination j
    pub allocation: Matrix<T>,
    /// Σ allocation(i, j) · cost(i, j)
    pub total_cost: T,
    /// origin names, copied from the problem
    pub origin_names: Vec<String>,
    /// destination names, copied from the problem
    pub destination_names: Vec<String>,
    /// unit cost matrix the allocation was built against
    pub cost: Matrix<T>,
    /// narration of the construction, recorded by the heuristics that keep one
    pub steps: Option<Vec<String>>,
}

impl<T> TransportSolution<T>
where
    T: Quantity,
{
    /// Packages a finished allocation with its evaluated cost and copies of
    /// the problem's names and cost matrix.
    pub(crate) fn assemble(
        problem: &TransportProblem<T>,
        allocation: Matrix<T>,
        steps: Option<Vec<String>>,
    ) -> TransportSolution<T> {
        let total = total_cost(&allocation, problem.cost());
        TransportSolution {
            allocation,
            total_cost: total,
            origin_names: problem.origin_names().to_vec(),
            destination_names: problem.destination_names().to_vec(),
            cost: problem.cost().clone(),
            steps,
        }
    }
}
