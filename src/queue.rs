use std::collections::VecDeque;

/// First-in-first-out queue used by the breadth-first search.
pub trait Fifo<T> {
    fn enqueue(&mut self, item: T);

    fn dequeue(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Fifo<T> for VecDeque<T> {
    #[inline]
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Fifo;
    use std::collections::VecDeque;

    #[test]
    fn interleaved_enqueue_dequeue() {
        let mut que = VecDeque::new();
        Fifo::enqueue(&mut que, 1);
        assert_eq!(Fifo::dequeue(&mut que), Some(1));
        Fifo::enqueue(&mut que, 2);
        Fifo::enqueue(&mut que, 3);
        assert_eq!(Fifo::dequeue(&mut que), Some(2));
        Fifo::enqueue(&mut que, 4);
        assert_eq!(Fifo::len(&que), 2);
        assert_eq!(Fifo::dequeue(&mut que), Some(3));
        assert_eq!(Fifo::dequeue(&mut que), Some(4));
        assert_eq!(Fifo::dequeue(&mut que), None);
        assert!(Fifo::is_empty(&que));
    }
}
