//! Table declarations and DDL rendering

use super::naming::foreign_key_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Text,
}

impl DataType {
    fn sql(&self) -> &'static str {
        match self {
            DataType::Integer => "INTEGER",
            DataType::Text => "TEXT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub data_type: DataType,
    pub not_null: bool,
}

/// Foreign key from a column of the owning table to `referred_table.referred_column`
///
/// No `ON DELETE` action is declared, so deleting a referenced row fails
/// instead of cascading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKeyDef {
    pub column: &'static str,
    pub referred_table: &'static str,
    pub referred_column: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
    pub primary_key: &'static [&'static str],
    pub foreign_keys: &'static [ForeignKeyDef],
}

const fn column(name: &'static str, data_type: DataType) -> ColumnDef {
    ColumnDef {
        name,
        data_type,
        not_null: true,
    }
}

const fn references(column: &'static str, referred_table: &'static str) -> ForeignKeyDef {
    ForeignKeyDef {
        column,
        referred_table,
        referred_column: "id",
    }
}

pub const RESTAURANTS: TableDef = TableDef {
    name: "restaurants",
    columns: &[
        column("id", DataType::Integer),
        column("name", DataType::Text),
        column("price", DataType::Integer),
    ],
    primary_key: &["id"],
    foreign_keys: &[],
};

pub const CUSTOMERS: TableDef = TableDef {
    name: "customers",
    columns: &[
        column("id", DataType::Integer),
        column("first_name", DataType::Text),
        column("last_name", DataType::Text),
    ],
    primary_key: &["id"],
    foreign_keys: &[],
};

pub const RESTAURANT_CUSTOMERS: TableDef = TableDef {
    name: "restaurant_customers",
    columns: &[
        column("restaurant_id", DataType::Integer),
        column("customer_id", DataType::Integer),
    ],
    primary_key: &["restaurant_id", "customer_id"],
    foreign_keys: &[
        references("restaurant_id", "restaurants"),
        references("customer_id", "customers"),
    ],
};

pub const REVIEWS: TableDef = TableDef {
    name: "reviews",
    columns: &[
        column("id", DataType::Integer),
        column("rating", DataType::Integer),
        column("restaurant_id", DataType::Integer),
        column("customer_id", DataType::Integer),
    ],
    primary_key: &["id"],
    foreign_keys: &[
        references("restaurant_id", "restaurants"),
        references("customer_id", "customers"),
    ],
};

/// Every table, parents before the tables that reference them
pub fn all_tables() -> [TableDef; 4] {
    [RESTAURANTS, CUSTOMERS, RESTAURANT_CUSTOMERS, REVIEWS]
}

impl TableDef {
    /// Render `CREATE TABLE IF NOT EXISTS` for this table
    ///
    /// A single INTEGER primary key becomes SQLite's rowid alias, so inserts
    /// that omit `id` get one assigned.
    pub fn create_sql(&self) -> String {
        let mut parts: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                let mut col = format!("{} {}", c.name, c.data_type.sql());
                if c.not_null {
                    col.push_str(" NOT NULL");
                }
                col
            })
            .collect();

        parts.push(format!("PRIMARY KEY ({})", self.primary_key.join(", ")));

        for fk in self.foreign_keys {
            parts.push(format!(
                "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
                foreign_key_name(self.name, fk.column, fk.referred_table),
                fk.column,
                fk.referred_table,
                fk.referred_column
            ));
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            self.name,
            parts.join(",\n    ")
        )
    }
}
