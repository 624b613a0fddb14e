use std::ops::Index;

use super::DISPLAY_LOSS_LIMIT;
use crate::config::StepRecord;
use crate::gradient::Gradient;

/// One immutable entry of a trajectory.
///
/// `z` is the display value of the loss: non-finite losses are recorded as
/// `0` and finite ones are clamped to `[-50, 50]`. It is never fed back into
/// the optimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub grad_x: f64,
    pub grad_y: f64,
    pub grad_norm: f64,
    pub step: usize,
}

impl Step {
    pub(crate) fn new(step: usize, x: f64, y: f64, raw_loss: f64, grad: &Gradient) -> Self {
        Step {
            x,
            y,
            z: display_loss(raw_loss),
            grad_x: grad.grad_x,
            grad_y: grad.grad_y,
            grad_norm: grad.norm(),
            step,
        }
    }

    pub fn gradient(&self) -> Gradient {
        Gradient::new(self.grad_x, self.grad_y)
    }
}

/// Maps a raw loss to the value stored in a `Step`.
pub fn display_loss(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(-DISPLAY_LOSS_LIMIT, DISPLAY_LOSS_LIMIT)
    } else {
        0.0
    }
}

/// Ordered, append-only sequence of steps where `steps[i].step == i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    steps: Vec<Step>,
}

impl Trajectory {
    pub fn new() -> Self {
        Trajectory { steps: Vec::new() }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// The first `n` steps, or the whole trajectory if it is shorter.
    pub fn prefix(&self, n: usize) -> &[Step] {
        &self.steps[..n.min(self.steps.len())]
    }

    /// Tabular export records, one per step.
    pub fn records(&self) -> impl Iterator<Item = StepRecord> + '_ {
        self.steps.iter().map(StepRecord::from)
    }

    /// Appends a step at index `len()` and returns that index.
    pub(crate) fn push(&mut self, x: f64, y: f64, raw_loss: f64, grad: &Gradient) -> usize {
        let index = self.steps.len();
        self.steps.push(Step::new(index, x, y, raw_loss, grad));
        index
    }

    pub(crate) fn clear(&mut self) {
        self.steps.clear();
    }
}

impl Index<usize> for Trajectory {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
#[path = "step_test.rs"]
mod tests;
