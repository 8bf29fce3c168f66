use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use super::store_error::StoreError;
use crate::model::Site;

/// loads the two site collections from the sqlite store at the given path,
/// returning (plants, ports) in the store's natural row order.
///
/// the connection is opened read-only, lives only for the duration of this
/// call, and is released on every exit path including failures.
pub fn load_sites<P: AsRef<Path>>(db: P) -> Result<(Vec<Site>, Vec<Site>), StoreError> {
    let path = db.as_ref();
    if !path.exists() {
        return Err(StoreError::SourceNotFound(path.display().to_string()));
    }
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    let plants = load_plants(&conn)?;
    let ports = load_ports(&conn)?;
    log::debug!(
        "loaded {} plant rows and {} port rows from {}",
        plants.len(),
        ports.len(),
        path.display()
    );
    Ok((plants, ports))
}

/// materializes the `location` table as plant sites. a NULL production
/// column is carried as an absent capacity, not an error.
fn load_plants(conn: &Connection) -> Result<Vec<Site>, StoreError> {
    let mut statement = conn.prepare("SELECT long, lat, production FROM location")?;
    let rows = statement.query_map([], |row| {
        Ok(Site::plant(row.get(0)?, row.get(1)?, row.get(2)?))
    })?;
    rows.map(|row| {
        row.map_err(|e| StoreError::RowError {
            table: String::from("location"),
            source: e,
        })
    })
    .collect()
}

/// materializes the `ports` table as port sites. ports carry no production.
fn load_ports(conn: &Connection) -> Result<Vec<Site>, StoreError> {
    let mut statement = conn.prepare("SELECT long, lat FROM ports")?;
    let rows = statement.query_map([], |row| Ok(Site::port(row.get(0)?, row.get(1)?)))?;
    rows.map(|row| {
        row.map_err(|e| StoreError::RowError {
            table: String::from("ports"),
            source: e,
        })
    })
    .collect()
}
