pub mod keyboard;
pub mod pointer;
pub mod route;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_pointer_picking, PickWiring};
pub use route::wire_hashchange;
