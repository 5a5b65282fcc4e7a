/// Declare a typed index for an [`AppendOnlyVec`].
///
/// Ids convert to and from `usize` but are distinct types, so a chart item
/// id cannot be confused with a production id or a tree node id.
macro_rules! append_only_vec_id {
    ($visibility:vis $id_type:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $visibility struct $id_type(usize);

        impl From<usize> for $id_type {
            fn from(id: usize) -> Self {
                Self(id)
            }
        }

        impl From<$id_type> for usize {
            fn from(id: $id_type) -> Self {
                id.0
            }
        }
    };
}

pub(crate) use append_only_vec_id;

/// A grow-only arena addressed by a typed id. Entries are never removed or
/// reordered, so an id handed out once stays valid for the arena's lifetime.
#[derive(Debug, Clone)]
pub(crate) struct AppendOnlyVec<T, I> {
    vec: Vec<T>,
    id_type: std::marker::PhantomData<I>,
}

impl<T, I> AppendOnlyVec<T, I>
where
    I: From<usize> + Into<usize>,
{
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    fn next_id(&self) -> I {
        I::from(self.len())
    }
    pub fn push(&mut self, item: T) -> I {
        let id = self.next_id();
        self.vec.push(item);
        id
    }
    pub fn push_with_id<F>(&mut self, build: F) -> &T
    where
        F: Fn(I) -> T,
    {
        let id = self.next_id();
        let item = build(id);
        let id = self.push(item);
        self.get(id).expect("failed to get appended item")
    }
    pub fn get(&self, id: I) -> Option<&T> {
        self.vec.get::<usize>(id.into())
    }
    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.vec.get_mut::<usize>(id.into())
    }
}

impl<T, I> Default for AppendOnlyVec<T, I> {
    fn default() -> Self {
        Self {
            vec: Vec::new(),
            id_type: std::marker::PhantomData,
        }
    }
}
