use std::cell::Cell;
use std::rc::Rc;

/// A value which records in a shared counter how many times an instance has been dropped.
/// Equality only considers `value`, so clones of the same counter can be compared freely.
#[derive(Debug, Clone)]
pub struct CountedDrop {
    pub value: i32,
    drops: Rc<Cell<usize>>,
}

impl CountedDrop {
    pub fn new(value: i32, drops: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop {
            value,
            drops: Rc::clone(drops),
        }
    }

    /// Creates one CountedDrop for every value, all sharing a fresh counter which is returned
    /// alongside them.
    pub fn many(values: impl IntoIterator<Item = i32>) -> (Vec<CountedDrop>, Rc<Cell<usize>>) {
        let drops = Rc::new(Cell::new(0));
        let items = values
            .into_iter()
            .map(|value| CountedDrop::new(value, &drops))
            .collect();
        (items, drops)
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
