//! Central hub for the entity store. Each submodule owns one relation
//! family and exposes plain async accessors taking the shared pool, e.g.
//! `database::products::insert_product`. Every accessor performs exactly one
//! logical query and auto-commits; nothing here spans transactions.

pub mod admins;
pub mod cart;
pub mod history;
pub mod init;
pub mod later;
pub mod models;
pub mod products;
pub mod users;
