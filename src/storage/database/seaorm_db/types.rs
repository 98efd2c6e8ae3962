use crate::core::pagination::{Direction, PageRequest};
use crate::utils::error::Result;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Select};

/// SeaORM-based database implementation
#[derive(Debug, Clone)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

/// Apply the requested sort, restricted to `columns`, with `tiebreak` as a stable secondary key.
/// Also rejects page requests the paginator cannot turn into an offset.
pub(super) fn apply_sort<E: EntityTrait>(
    query: Select<E>,
    request: &PageRequest,
    columns: &[(&str, E::Column)],
    tiebreak: E::Column,
) -> Result<Select<E>> {
    request.check_bounds()?;
    let names: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
    let query = match request.sort_property(&names)? {
        Some((property, direction)) => {
            let column = columns
                .iter()
                .find(|(name, _)| *name == property)
                .map(|(_, column)| *column)
                .unwrap_or(tiebreak);
            query.order_by(column, sort_order(direction))
        }
        None => query,
    };
    Ok(query.order_by_asc(tiebreak))
}

pub(super) fn sort_order(direction: Direction) -> sea_orm::Order {
    match direction {
        Direction::Asc => sea_orm::Order::Asc,
        Direction::Desc => sea_orm::Order::Desc,
    }
}
