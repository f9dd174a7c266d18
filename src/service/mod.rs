//! Collection services: filtering, embedding and CRUD over the loaded document.

pub mod crud;
pub mod embed;
pub mod filter;

pub use crud::CrudService;
pub use filter::ListQuery;
