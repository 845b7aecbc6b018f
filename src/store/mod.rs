//! The external form-state capability a field view reads from and writes to.

mod actions;
mod memory;
mod reducers;

pub use actions::{FieldUpdate, FormAction};
pub use memory::MemoryStore;
pub use reducers::{FormSlice, reduce};

/// Read/dispatch pair over the shared id → value mapping.
pub trait FormStore {
    /// Current value for `id`, or the empty string when unset.
    fn get(&self, id: &str) -> String;

    fn dispatch(&mut self, update: FieldUpdate);

    fn set(&mut self, id: &str, value: &str) {
        self.dispatch(FieldUpdate::new(id, value));
    }
}

impl<S: FormStore + ?Sized> FormStore for &mut S {
    fn get(&self, id: &str) -> String {
        (**self).get(id)
    }

    fn dispatch(&mut self, update: FieldUpdate) {
        (**self).dispatch(update);
    }
}
