pub mod repository;
pub mod store;

pub use repository::TodoRepository;
pub use store::Store;
