pub mod all;
pub mod category;
pub mod dispatch;
pub mod inspect;
pub mod schema;
pub mod summary;
