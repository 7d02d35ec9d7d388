//! Wire types and pure catalog rules shared between the SmartMart frontend
//! and the catalog backend.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod usecases;
