//! Order-preserving projections into new containers.
//!
//! Map-based projections (over keys or values) live on
//! [`MapExt`](crate::MapExt).

pub trait ProjectExt<T> {
    /// Every element passed through `create`, as a `Vec`.
    fn create_list<U, F>(&self, create: F) -> Vec<U>
    where
        F: FnMut(&T) -> U;

    /// Every element passed through `create`, as a fixed-size boxed slice.
    fn create_array<U, F>(&self, create: F) -> Box<[U]>
    where
        F: FnMut(&T) -> U;

    /// Like [`create_list`](ProjectExt::create_list) but drops elements for
    /// which `create` yields `None`.
    fn create_list_some<U, F>(&self, create: F) -> Vec<U>
    where
        F: FnMut(&T) -> Option<U>;
}

impl<T> ProjectExt<T> for [T] {
    fn create_list<U, F>(&self, create: F) -> Vec<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut result = Vec::with_capacity(self.len());
        result.extend(self.iter().map(create));
        result
    }

    fn create_array<U, F>(&self, create: F) -> Box<[U]>
    where
        F: FnMut(&T) -> U,
    {
        self.create_list(create).into_boxed_slice()
    }

    fn create_list_some<U, F>(&self, create: F) -> Vec<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        self.iter().filter_map(create).collect()
    }
}
