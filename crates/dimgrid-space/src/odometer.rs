//! Mixed-radix counter shared by the cell and neighbourhood enumerators.

use smallvec::SmallVec;

/// A mixed-radix counter: one cursor per digit, each with its own radix.
///
/// [`advance`](Self::advance) increments the rightmost cursor and carries
/// leftwards, so the first digit varies slowest and the last fastest. This
/// is the single definition of nesting order for every enumerator in the
/// crate, and it matches the codec's stride layout.
///
/// # Examples
///
/// ```
/// use dimgrid_space::Odometer;
///
/// let mut odo = Odometer::new([2, 3]);
/// let mut seen = vec![odo.cursors().to_vec()];
/// while odo.advance() {
///     seen.push(odo.cursors().to_vec());
/// }
/// assert_eq!(seen.len(), 6);
/// assert_eq!(seen[1], vec![0, 1]);
/// assert_eq!(seen[3], vec![1, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct Odometer {
    radices: SmallVec<[usize; 4]>,
    cursors: SmallVec<[usize; 4]>,
    done: bool,
}

impl Odometer {
    /// Start a counter at all-zeros.
    ///
    /// A counter with any radix of 0 has no states and starts exhausted.
    pub fn new(radices: impl IntoIterator<Item = usize>) -> Self {
        let radices: SmallVec<[usize; 4]> = radices.into_iter().collect();
        let cursors = SmallVec::from_elem(0, radices.len());
        let done = radices.iter().any(|&r| r == 0);
        Self {
            radices,
            cursors,
            done,
        }
    }

    /// Current digit values.
    pub fn cursors(&self) -> &[usize] {
        &self.cursors
    }

    /// Radix of every digit.
    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    /// Whether the counter has wrapped past its final state.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Step to the next state (rightmost digit fastest).
    ///
    /// Returns `false`, and marks the counter done, when every digit carries
    /// out. Calling it again after that is a no-op.
    pub fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        for i in (0..self.cursors.len()).rev() {
            self.cursors[i] += 1;
            if self.cursors[i] < self.radices[i] {
                return true;
            }
            self.cursors[i] = 0;
        }
        self.done = true;
        false
    }

    /// Rewind to all-zeros.
    pub fn reset(&mut self) {
        self.cursors.iter_mut().for_each(|c| *c = 0);
        self.done = self.radices.iter().any(|&r| r == 0);
    }
}
