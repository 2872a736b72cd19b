//! Iterator adapter that replays the last element of a sequence
//!
//! `trailing(bound)` turns `[a, b, c]` into `(a, 0), (b, 0), (c, 0), (c, 1), ...`
//! where the last element is produced `bound` times, tagged `0..bound`. A
//! bound of 0 drops the last element, a bound of 1 reproduces the sequence.
//!
//! The rewrite engine uses bound 2: tag 0 is "substitute this match", tag 1 is
//! "flush the text after the last match", so both steps share one loop.

use std::iter::FusedIterator;

/// Where the adapter is in its walk over the base iterator
#[derive(Debug, Clone)]
enum State<T> {
    /// Nothing pulled from the base iterator yet
    Start,
    /// `T` was pulled from the base but not produced yet; more may follow
    InMiddle(T),
    /// `T` is the last real element, produced next with tag `count`
    AtLast { last: T, count: usize },
    Done,
}

/// Iterator returned by [`TrailingExt::trailing`]
#[derive(Debug, Clone)]
pub struct Trailing<I: Iterator> {
    base: I,
    bound: usize,
    state: State<I::Item>,
}

impl<I: Iterator> Trailing<I> {
    pub fn new(base: I, bound: usize) -> Self {
        Self {
            base,
            bound,
            state: State::Start,
        }
    }
}

impl<I> Iterator for Trailing<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.state, State::Done) {
                State::Start => match self.base.next() {
                    Some(first) => self.state = State::InMiddle(first),
                    None => return None,
                },
                State::InMiddle(current) => match self.base.next() {
                    Some(next) => {
                        self.state = State::InMiddle(next);
                        return Some((current, 0));
                    }
                    None => {
                        self.state = State::AtLast {
                            last: current,
                            count: 0,
                        }
                    }
                },
                State::AtLast { last, count } => {
                    if count >= self.bound {
                        return None;
                    }
                    if count + 1 == self.bound {
                        return Some((last, count));
                    }
                    self.state = State::AtLast {
                        last: last.clone(),
                        count: count + 1,
                    };
                    return Some((last, count));
                }
                State::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.base.size_hint();
        // elements still owed from whatever is buffered in `state`
        let adjust = |n: usize| -> usize {
            match &self.state {
                State::Start if n == 0 => 0,
                State::Start => (n - 1).saturating_add(self.bound),
                State::InMiddle(_) => n.saturating_add(self.bound),
                State::AtLast { count, .. } => self.bound.saturating_sub(*count),
                State::Done => 0,
            }
        };
        (adjust(lower), upper.map(adjust))
    }
}

impl<I> FusedIterator for Trailing<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

/// Adds [`trailing`](TrailingExt::trailing) to every iterator
pub trait TrailingExt: Iterator + Sized {
    /// Tag every element with 0 and replay the last one `bound` times
    fn trailing(self, bound: usize) -> Trailing<Self> {
        Trailing::new(self, bound)
    }
}

impl<I: Iterator> TrailingExt for I {}
