pub mod memory;

pub use memory::InMemoryMenuItemStore;
