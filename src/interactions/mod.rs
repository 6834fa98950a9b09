//! Inline button handling, split by family. `ids` owns the payload codec;
//! the handler modules own the behavior behind each press.

pub mod ids;
pub mod product_handler;
pub mod profile_handler;
pub mod role_handler;
pub mod shopping_handler;
