use crate::solution::Quantity;

/// Accumulates the human-readable narration of a construction run.
///
/// Assignment lines are numbered automatically; exhaustion notes are worded
/// by the heuristic that records them.
pub(crate) struct Trace {
    lines: Vec<String>,
    step: usize,
}

impl Trace {
    pub fn new() -> Trace {
        Trace {
            lines: Vec::new(),
            step: 0,
        }
    }

    pub fn assignment<T>(
        &mut self,
        quantity: T,
        origin: &str,
        destination: &str,
        unit_cost: T,
        supply: (T, T),
        demand: (T, T),
    ) where
        T: Quantity,
    {
        self.step += 1;
        self.lines.push(format!(
            "Step {}: assign {} units from {} to {} (unit cost {}). Supply: {}→{}, demand: {}→{}.",
            self.step, quantity, origin, destination, unit_cost, supply.0, supply.1, demand.0,
            demand.1
        ));
    }

    pub fn note(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
