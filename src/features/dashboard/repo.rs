use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Pool, Row, Sqlite, TypeInfo, ValueRef};

// execute one fixed statement and hand back the rows as JSON objects,
// keyed by whatever column names the driver reports
pub async fn fetch_rows(pool: &Pool<Sqlite>, sql: &str) -> sqlx::Result<Vec<Value>> {
    let rows = sqlx::query(sql).fetch_all(pool).await?;
    Ok(rows.iter().map(row_to_json).collect())
}

pub fn row_to_json(row: &SqliteRow) -> Value {
    let mut object = Map::with_capacity(row.columns().len());
    for (index, column) in row.columns().iter().enumerate() {
        object.insert(column.name().to_string(), column_value(row, index));
    }
    Value::Object(object)
}

// decode by the value's storage class rather than the declared column type,
// since aggregate expressions carry no declared type in SQLite
fn column_value(row: &SqliteRow, index: usize) -> Value {
    let raw = match row.try_get_raw(index) {
        Ok(val) => val,
        Err(_) => return Value::Null,
    };

    if raw.is_null() {
        return Value::Null;
    }

    match raw.type_info().name() {
        "INTEGER" | "BOOLEAN" => row
            .try_get::<i64, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),

        "REAL" => row
            .try_get::<f64, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),

        "BLOB" => row
            .try_get::<Vec<u8>, _>(index)
            .map(|bytes| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
            .unwrap_or(Value::Null),

        // TEXT, DATETIME and anything else the driver names
        _ => row
            .try_get::<String, _>(index)
            .map(Value::String)
            .unwrap_or(Value::Null),
    }
}
