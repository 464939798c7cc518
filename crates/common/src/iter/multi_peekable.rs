//! An iterator adapter with unbounded lookahead, in the spirit of `itertools::MultiPeek`.
use std::{collections::VecDeque, iter::Fuse};

pub struct MultiPeekable<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    buf: VecDeque<I::Item>,
}

pub trait MultiPeek: Iterator + Sized {
    fn multi_peekable(self) -> MultiPeekable<Self>;
}

impl<I: Iterator> MultiPeek for I {
    fn multi_peekable(self) -> MultiPeekable<I> {
        MultiPeekable {
            iter: self.fuse(),
            buf: VecDeque::new(),
        }
    }
}

impl<I: Iterator> MultiPeekable<I> {
    pub fn peek(&mut self) -> Option<&I::Item> {
        self.peek_nth(0)
    }

    pub fn peek_nth(&mut self, n: usize) -> Option<&I::Item> {
        let unbuffered_items = (n + 1).saturating_sub(self.buf.len());

        self.buf.extend(self.iter.by_ref().take(unbuffered_items));

        self.buf.get(n)
    }

    /// Returns the first item at or after position `n` that satisfies `func`,
    /// together with its offset, without consuming anything.
    pub fn peek_position_from(
        &mut self,
        n: usize,
        mut func: impl FnMut(&I::Item) -> bool,
    ) -> Option<(usize, &I::Item)> {
        let mut offset = n;
        loop {
            if func(self.peek_nth(offset)?) {
                break;
            }
            offset += 1;
        }

        self.buf.get(offset).map(|item| (offset, item))
    }

    pub fn next_if(&mut self, func: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        match self.next()? {
            matched if func(&matched) => Some(matched),
            other => {
                self.buf.push_front(other);
                None
            }
        }
    }

    /// Consumes items for as long as `func` holds.
    pub fn next_while(&mut self, mut func: impl FnMut(&I::Item) -> bool) -> usize {
        let mut count = 0;
        while self.next_if(&mut func).is_some() {
            count += 1;
        }
        count
    }
}

impl<I> Iterator for MultiPeekable<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.pop_front().or_else(|| self.iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (mut low, mut high) = self.iter.size_hint();
        low = low.saturating_add(self.buf.len());
        high = high.and_then(|elt| elt.checked_add(self.buf.len()));
        (low, high)
    }
}

impl<I> ExactSizeIterator for MultiPeekable<I> where I: ExactSizeIterator {}
