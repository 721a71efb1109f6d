use crate::VecRows;
use cqlorm::{Error, Result, Rows, Session, Value};
use indexmap::IndexMap;
use std::sync::{atomic::AtomicUsize, Arc, Mutex};

/// An in-memory table store that interprets the CQL emitted by cqlorm.
///
/// Rows are upserted by primary key, statements must address full primary
/// keys where the cluster would require them, and an absent column reads
/// back as null.
#[derive(Debug, Default)]
pub struct MemSession {
    tables: Mutex<IndexMap<String, MemTable>>,
    closes: Arc<AtomicUsize>,
}

#[derive(Debug)]
struct MemTable {
    columns: Vec<String>,
    partition_key: Vec<String>,
    clustering_key: Vec<String>,
    rows: Vec<IndexMap<String, Value>>,
}

/// `column=?` predicates or assignments, paired with their values
type Pairs = Vec<(String, Value)>;

impl MemSession {
    pub fn new() -> MemSession {
        MemSession::default()
    }

    /// Names of the tables created so far
    pub fn tables(&self) -> Vec<String> {
        self.tables.lock().unwrap().keys().cloned().collect()
    }

    /// Number of rows stored in `table`
    pub fn row_count(&self, table: &str) -> usize {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .map_or(0, |table| table.rows.len())
    }

    /// Number of row iterators closed so far
    pub fn closed_rows(&self) -> usize {
        self.closes.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn run(&self, cql: &str, params: &[Value]) -> Result<Vec<Vec<Value>>> {
        let placeholders = cql.matches('?').count();
        if placeholders != params.len() {
            return Err(fail(format!(
                "{placeholders} placeholders but {} params",
                params.len()
            )));
        }

        let Some(stmt) = cql.strip_suffix(';') else {
            return Err(fail("statement is not terminated"));
        };

        let mut params = params.iter().cloned();
        let mut tables = self.tables.lock().unwrap();

        if let Some(rest) = stmt.strip_prefix("CREATE TABLE IF NOT EXISTS ") {
            let (name, table) = parse_create(rest)?;
            tables.entry(name).or_insert(table);
            Ok(vec![])
        } else if let Some(rest) = stmt.strip_prefix("INSERT INTO ") {
            let (name, rest) = split(rest, " (")?;
            let (columns, _) = split(rest, ") VALUES (")?;
            let values = bind(columns.split(','), &mut params);

            table(&mut tables, name)?.upsert(&values, &[])?;
            Ok(vec![])
        } else if let Some(rest) = stmt.strip_prefix("SELECT ") {
            let (columns, rest) = split(rest, " FROM ")?;
            let (name, filter) = where_clause(rest, &mut params);

            let table = table(&mut tables, name)?;
            let columns: Vec<&str> = columns.split(", ").collect();

            Ok(table
                .matching(&filter)
                .map(|row| {
                    columns
                        .iter()
                        .map(|column| row.get(*column).cloned().unwrap_or_default())
                        .collect()
                })
                .collect())
        } else if let Some(rest) = stmt.strip_prefix("UPDATE ") {
            let (name, rest) = split(rest, " SET ")?;
            let (assignments, filter) = match rest.split_once(" WHERE ") {
                Some((assignments, filter)) => (assignments, Some(filter)),
                None => (rest, None),
            };

            let assignments = bind(
                assignments
                    .split(',')
                    .filter_map(|assignment| assignment.trim().strip_suffix("=?")),
                &mut params,
            );
            let filter = bind(
                filter.into_iter().flat_map(|filter| filter.split(" AND ")),
                &mut params,
            );

            table(&mut tables, name)?.upsert(&filter, &assignments)?;
            Ok(vec![])
        } else if let Some(rest) = stmt.strip_prefix("DELETE FROM ") {
            let (name, filter) = where_clause(rest, &mut params);
            let table = table(&mut tables, name)?;

            let missing = table.partition_key.iter().find(|key| {
                !filter.iter().any(|(column, _)| column == *key)
            });
            if let Some(key) = missing {
                return Err(fail(format!("DELETE requires partition key column `{key}`")));
            }

            table.rows.retain(|row| !MemTable::matches(row, &filter));
            Ok(vec![])
        } else {
            Err(fail(format!("unsupported statement `{cql}`")))
        }
    }
}

impl Session for MemSession {
    fn execute(&self, cql: &str, params: &[Value]) -> Result<()> {
        self.run(cql, params).map(drop)
    }

    fn query(&self, cql: &str, params: &[Value]) -> Box<dyn Rows + '_> {
        match self.run(cql, params) {
            Ok(rows) => Box::new(VecRows::new(rows, self.closes.clone())),
            Err(err) => Box::new(VecRows::failed(err, self.closes.clone())),
        }
    }
}

impl MemTable {
    fn keys(&self) -> impl Iterator<Item = &String> + '_ {
        self.partition_key.iter().chain(&self.clustering_key)
    }

    fn matches(row: &IndexMap<String, Value>, filter: &[(String, Value)]) -> bool {
        filter
            .iter()
            .all(|(column, value)| row.get(column).is_some_and(|stored| stored == value))
    }

    fn matching<'a>(
        &'a self,
        filter: &'a [(String, Value)],
    ) -> impl Iterator<Item = &'a IndexMap<String, Value>> + 'a {
        self.rows.iter().filter(|row| MemTable::matches(row, filter))
    }

    /// Writes `values` and `assignments` into the row addressed by the key
    /// columns among `values`, creating the row when missing.
    fn upsert(&mut self, values: &[(String, Value)], assignments: &[(String, Value)]) -> Result<()> {
        for (column, _) in values.iter().chain(assignments) {
            if !self.columns.contains(column) {
                return Err(fail(format!("unknown column `{column}`")));
            }
        }

        let mut key = vec![];
        for column in self.keys() {
            match values.iter().find(|(name, _)| name == column) {
                Some((_, value)) if !value.is_null() => key.push((column.clone(), value.clone())),
                _ => return Err(fail(format!("missing primary key column `{column}`"))),
            }
        }

        let index = match self.rows.iter().position(|row| MemTable::matches(row, &key)) {
            Some(index) => index,
            None => {
                self.rows.push(key.iter().cloned().collect());
                self.rows.len() - 1
            }
        };

        let row = &mut self.rows[index];
        for (column, value) in values.iter().chain(assignments) {
            row.insert(column.clone(), value.clone());
        }

        Ok(())
    }
}

fn fail(message: impl Into<String>) -> Error {
    Error::driver(std::io::Error::other(message.into()))
}

fn split<'a>(src: &'a str, delim: &str) -> Result<(&'a str, &'a str)> {
    src.split_once(delim)
        .ok_or_else(|| fail(format!("expected `{delim}` in `{src}`")))
}

fn table<'a>(tables: &'a mut IndexMap<String, MemTable>, name: &str) -> Result<&'a mut MemTable> {
    tables
        .get_mut(name)
        .ok_or_else(|| fail(format!("unconfigured table {name}")))
}

/// Pairs each column with the next parameter.
fn bind<'a>(
    columns: impl Iterator<Item = &'a str>,
    params: &mut impl Iterator<Item = Value>,
) -> Pairs {
    columns
        .map(|column| {
            let column = column.trim().trim_end_matches("=?");
            (column.to_string(), params.next().unwrap_or_default())
        })
        .collect()
}

/// Splits `<table>[ WHERE a=? AND b=?]`.
fn where_clause<'a>(src: &'a str, params: &mut impl Iterator<Item = Value>) -> (&'a str, Pairs) {
    match src.split_once(" WHERE ") {
        Some((name, filter)) => (name, bind(filter.split(" AND "), params)),
        None => (src, vec![]),
    }
}

fn parse_create(src: &str) -> Result<(String, MemTable)> {
    let (name, rest) = split(src, " (")?;
    let (columns, primary_key) = split(rest, ", PRIMARY KEY (")?;

    let columns = columns
        .split(", ")
        .filter_map(|column| column.split(' ').next())
        .map(str::to_string)
        .collect();

    let primary_key = primary_key
        .strip_suffix("))")
        .ok_or_else(|| fail("malformed PRIMARY KEY"))?;

    let (partition_key, clustering_key) = match primary_key.strip_prefix('(') {
        Some(composite) => {
            let (partition, rest) = split(composite, ")")?;
            (list(partition), list(rest.trim_start_matches(", ")))
        }
        None => {
            let mut keys = list(primary_key);
            let clustering = keys.split_off(1.min(keys.len()));
            (keys, clustering)
        }
    };

    Ok((
        name.to_string(),
        MemTable {
            columns,
            partition_key,
            clustering_key,
            rows: vec![],
        },
    ))
}

fn list(src: &str) -> Vec<String> {
    src.split(", ")
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
