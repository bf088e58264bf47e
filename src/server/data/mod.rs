//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. All queries, inserts and updates are
//! performed through these repositories.

pub mod user;

#[cfg(test)]
mod test;
