pub mod batch;
pub mod check;
pub mod compare;
pub mod dispatch;
pub mod evaluate;
pub mod normalize;
pub mod schema;
pub mod shared;
