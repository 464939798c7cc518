use {
    super::Database,
    crate::{
        error::{ColumnNotExistsSnafu, Result, TableNotExistsSnafu},
        ResultSet,
    },
    parser::ast::SelectStmt,
    snafu::OptionExt,
    tracing::debug,
};

impl Database {
    pub(super) fn execute_select(&self, stmt: SelectStmt) -> Result<ResultSet> {
        let SelectStmt {
            columns,
            table,
            condition,
        } = stmt;

        let table = self
            .get_table(table.name())
            .context(TableNotExistsSnafu { name: table.name() })?;

        if let Some(condition) = condition {
            debug!(table = %table.name(), %condition, "WHERE clause is not evaluated");
        }

        let indices = columns
            .iter()
            .map(|column| {
                table
                    .column_index(column.name())
                    .context(ColumnNotExistsSnafu {
                        name: column.name(),
                        table: table.name(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let rows = table.project(&indices);
        debug!(
            table = %table.name(),
            columns = indices.len(),
            rows = rows.len(),
            "selected rows"
        );

        Ok(ResultSet {
            columns: columns.into_iter().map(|column| column.0).collect(),
            rows,
        })
    }
}
