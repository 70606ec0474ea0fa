use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::entity::Entity;
use crate::errors::ServiceError;
use crate::repository::Repository;
use crate::storage::entry_map::EntryMap;

type FindById<T> = Box<dyn Fn(&str) -> Option<T>>;
type FindAll<T> = Box<dyn Fn() -> Vec<T>>;
type Create<T> = Box<dyn Fn(T) -> T>;
type Update<T> = Box<dyn Fn(&str, <T as Entity>::Patch) -> Result<T, ServiceError>>;
type Remove = Box<dyn Fn(&str) -> bool>;
type Count = Box<dyn Fn() -> usize>;

/// Repository assembled from five operations that close over their own state.
///
/// [`in_memory_fn_repository`] builds the in-memory variant; [`FnRepository::new`]
/// accepts any set of closures, e.g. to wrap another store.
pub struct FnRepository<T: Entity> {
    find_by_id: FindById<T>,
    find_all: FindAll<T>,
    create: Create<T>,
    update: Update<T>,
    remove: Remove,
    count: Option<Count>,
}

impl<T: Entity> FnRepository<T> {
    /// Without [`FnRepository::with_count`], `len` and `is_empty` clone the
    /// whole store through `find_all`.
    pub fn new(
        find_by_id: impl Fn(&str) -> Option<T> + 'static,
        find_all: impl Fn() -> Vec<T> + 'static,
        create: impl Fn(T) -> T + 'static,
        update: impl Fn(&str, T::Patch) -> Result<T, ServiceError> + 'static,
        remove: impl Fn(&str) -> bool + 'static,
    ) -> Self {
        Self {
            find_by_id: Box::new(find_by_id),
            find_all: Box::new(find_all),
            create: Box::new(create),
            update: Box::new(update),
            remove: Box::new(remove),
            count: None,
        }
    }

    /// Supply a count that does not go through `find_all`.
    pub fn with_count(mut self, count: impl Fn() -> usize + 'static) -> Self {
        self.count = Some(Box::new(count));
        self
    }
}

impl<T: Entity> fmt::Debug for FnRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRepository").finish_non_exhaustive()
    }
}

/// Create an in-memory repository whose state is private to its closures.
///
/// Single-threaded: the closures share the map through `Rc<RefCell<_>>` and
/// none of them re-enters another while holding the borrow.
pub fn in_memory_fn_repository<T: Entity + 'static>() -> FnRepository<T> {
    let store: Rc<RefCell<EntryMap<T>>> = Rc::new(RefCell::new(EntryMap::new()));

    let find_by_id = {
        let store = Rc::clone(&store);
        move |id: &str| store.borrow().get(id).cloned()
    };
    let find_all = {
        let store = Rc::clone(&store);
        move || store.borrow().snapshot()
    };
    let create = {
        let store = Rc::clone(&store);
        move |entity: T| store.borrow_mut().put(entity)
    };
    let update = {
        let store = Rc::clone(&store);
        move |id: &str, patch: T::Patch| store.borrow_mut().merge(id, patch)
    };
    let remove = {
        let store = Rc::clone(&store);
        move |id: &str| store.borrow_mut().delete(id)
    };
    let count = move || store.borrow().len();

    FnRepository::new(find_by_id, find_all, create, update, remove).with_count(count)
}

impl<T: Entity> Repository<T> for FnRepository<T> {
    fn find_by_id(&self, id: &str) -> Option<T> {
        (self.find_by_id)(id)
    }

    fn find_all(&self) -> Vec<T> {
        (self.find_all)()
    }

    fn create(&mut self, entity: T) -> T {
        (self.create)(entity)
    }

    fn update(&mut self, id: &str, patch: T::Patch) -> Result<T, ServiceError> {
        (self.update)(id, patch)
    }

    fn remove(&mut self, id: &str) -> bool {
        (self.remove)(id)
    }

    fn len(&self) -> usize {
        match &self.count {
            Some(count) => count(),
            None => (self.find_all)().len(),
        }
    }
}
