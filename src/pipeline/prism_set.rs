use core::ops::{Index, IndexMut};

use crate::shape::Prism;

/// The identifier of a prism inside a [`PrismSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrismHandle(u32);

impl PrismHandle {
    /// The raw index of this handle inside the set that created it.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Arena-style owner of every prism in a scene.
///
/// Prisms are inserted once during scene setup and never removed, so a
/// [`PrismHandle`] is a dense index that stays valid for the lifetime of the
/// set. The collision pipeline requires exclusive access to the set while a
/// tick runs; between ticks the embedding application is free to inspect or
/// mutate it.
#[derive(Clone, Debug, Default)]
pub struct PrismSet {
    prisms: Vec<Prism>,
}

impl PrismSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        PrismSet::default()
    }

    /// Adds a prism to the set and returns its handle.
    pub fn insert(&mut self, prism: Prism) -> PrismHandle {
        let handle = PrismHandle(self.prisms.len() as u32);
        self.prisms.push(prism);
        handle
    }

    /// The number of prisms in the set.
    pub fn len(&self) -> usize {
        self.prisms.len()
    }

    /// Whether the set holds no prism at all.
    pub fn is_empty(&self) -> bool {
        self.prisms.is_empty()
    }

    /// The prism identified by `handle`, if it belongs to this set.
    pub fn get(&self, handle: PrismHandle) -> Option<&Prism> {
        self.prisms.get(handle.index())
    }

    /// Mutable access to the prism identified by `handle`.
    pub fn get_mut(&mut self, handle: PrismHandle) -> Option<&mut Prism> {
        self.prisms.get_mut(handle.index())
    }

    /// Iterates over every prism of the set, in handle order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (PrismHandle, &Prism)> {
        self.prisms
            .iter()
            .enumerate()
            .map(|(i, prism)| (PrismHandle(i as u32), prism))
    }

    /// Mutable references to two distinct prisms at once.
    ///
    /// The resolver moves both members of a contact pair in one pass, which
    /// needs two simultaneous mutable borrows. These are safe because the
    /// two indices address disjoint elements.
    ///
    /// # Panics
    /// Panics if `a == b` or if either handle is out of bounds.
    pub fn index_mut2(&mut self, a: PrismHandle, b: PrismHandle) -> (&mut Prism, &mut Prism) {
        assert_ne!(a, b, "cannot mutably borrow one prism twice");

        let (i, j) = (a.index(), b.index());
        if i < j {
            let (lo, hi) = self.prisms.split_at_mut(j);
            (&mut lo[i], &mut hi[0])
        } else {
            let (lo, hi) = self.prisms.split_at_mut(i);
            (&mut hi[0], &mut lo[j])
        }
    }
}

impl Index<PrismHandle> for PrismSet {
    type Output = Prism;

    #[inline]
    fn index(&self, handle: PrismHandle) -> &Prism {
        &self.prisms[handle.index()]
    }
}

impl IndexMut<PrismHandle> for PrismSet {
    #[inline]
    fn index_mut(&mut self, handle: PrismHandle) -> &mut Prism {
        &mut self.prisms[handle.index()]
    }
}
