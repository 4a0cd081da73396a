pub mod moving_average;

use super::Real;
pub use moving_average::MovingAverage;

/// A filter which consumes one sample at a time and, once it has seen
/// enough of them, produces an output describing its current contents.
pub trait Window: Clone {
    type InputType: Copy;
    type OutputType;

    /// Adds a sample, returning `true` if the window now has an output.
    fn push(&mut self, value: Self::InputType) -> bool;
    fn output(&self) -> Option<Self::OutputType>;
    /// Maps the index of the most recently pushed sample to the index the
    /// output should be reported at.
    fn apply_time_shift(&self, index: usize) -> usize;
}

#[derive(Clone)]
pub struct WindowIter<I, W>
where
    I: Iterator<Item = (usize, W::InputType)>,
    W: Window,
{
    window_function: W,
    source: I,
}

impl<I, W> WindowIter<I, W>
where
    I: Iterator<Item = (usize, W::InputType)>,
    W: Window,
{
    pub fn new(source: I, window_function: W) -> Self {
        WindowIter {
            source,
            window_function,
        }
    }

    #[cfg(test)]
    pub fn get_window(&self) -> &W {
        &self.window_function
    }
}

impl<I, W> Iterator for WindowIter<I, W>
where
    I: Iterator<Item = (usize, W::InputType)>,
    W: Window,
{
    type Item = (usize, W::OutputType);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, value) = self.source.next()?;
            if self.window_function.push(value) {
                return Some((
                    self.window_function.apply_time_shift(index),
                    self.window_function.output()?,
                ));
            }
        }
    }
}

pub trait WindowFilter<I, W>
where
    I: Iterator<Item = (usize, W::InputType)>,
    W: Window,
{
    fn window(self, window: W) -> WindowIter<I, W>;
}

impl<I, W> WindowFilter<I, W> for I
where
    I: Iterator<Item = (usize, W::InputType)>,
    W: Window,
{
    fn window(self, window: W) -> WindowIter<I, W> {
        WindowIter::<I, W>::new(self, window)
    }
}
