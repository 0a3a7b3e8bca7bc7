//! Migration generation.
//!
//! Renders a [`MigrationPlan`] into a PHP class with `up` and `down`
//! methods. The up body opens a schema closure on the target table and
//! fills it from the plan's columns; the down body is the structural
//! inverse: added columns get dropped, dropped columns get re-added, and a
//! created table is dropped outright.

use laragen_schema::{Action, ColumnSpec, MigrationPlan};

use crate::formatter::format_source;
use crate::{GeneratedFile, ScaffoldContext};

// ============================================================================
// Schema statements
// ============================================================================

/// One statement inside a schema closure.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SchemaStatement {
    /// Auto-incrementing primary key
    Increments(String),

    /// Ordinary column, optionally with a chained modifier
    Column {
        field: String,
        ty: String,
        modifier: Option<String>,
    },

    /// Drop one or more columns
    DropColumns(Vec<String>),

    /// `created_at` / `updated_at` pair
    Timestamps,
}

impl SchemaStatement {
    fn render(&self) -> String {
        match self {
            SchemaStatement::Increments(field) => {
                format!("$table->increments('{}');", field)
            }
            SchemaStatement::Column {
                field,
                ty,
                modifier,
            } => {
                let mut rule = format!("$table->{}('{}')", ty, field);
                if let Some(modifier) = modifier {
                    rule.push_str(&format!("->{}()", modifier));
                }
                rule.push(';');
                rule
            }
            SchemaStatement::DropColumns(fields) if fields.len() == 1 => {
                format!("$table->drop_column('{}');", fields[0])
            }
            SchemaStatement::DropColumns(fields) => {
                let quoted = fields
                    .iter()
                    .map(|f| format!("'{}'", f))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("$table->drop_column(array({}));", quoted)
            }
            SchemaStatement::Timestamps => "$table->timestamps();".to_string(),
        }
    }
}

fn column_statement(column: &ColumnSpec) -> SchemaStatement {
    if column.is_auto_increment() {
        SchemaStatement::Increments(column.field.clone())
    } else {
        SchemaStatement::Column {
            field: column.field.clone(),
            ty: column.ty.clone(),
            modifier: column.modifier.clone(),
        }
    }
}

/// Statements adding every column of the plan, in order.
fn add_statements(columns: &[ColumnSpec]) -> Vec<SchemaStatement> {
    columns.iter().map(column_statement).collect()
}

/// A single statement dropping every column of the plan, or nothing for an
/// empty column set.
fn drop_statement(columns: &[ColumnSpec]) -> Option<SchemaStatement> {
    if columns.is_empty() {
        None
    } else {
        Some(SchemaStatement::DropColumns(
            columns.iter().map(|c| c.field.clone()).collect(),
        ))
    }
}

fn up_statements(plan: &MigrationPlan) -> Vec<SchemaStatement> {
    match plan.action {
        Action::Create => {
            let mut statements = add_statements(&plan.columns);
            statements.push(SchemaStatement::Timestamps);
            statements
        }
        Action::Add | Action::Update => add_statements(&plan.columns),
        Action::Delete => drop_statement(&plan.columns).into_iter().collect(),
    }
}

fn down_statements(plan: &MigrationPlan) -> Vec<SchemaStatement> {
    match plan.action {
        // Reversed by Schema::drop, not by a closure
        Action::Create => Vec::new(),
        Action::Add => drop_statement(&plan.columns).into_iter().collect(),
        // The previous column state is unknown; leave the block for the
        // developer to fill in
        Action::Update => Vec::new(),
        Action::Delete => add_statements(&plan.columns),
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a `Schema::<method>` closure, indented for a method body.
fn schema_block(method: &str, table: &str, statements: &[SchemaStatement]) -> String {
    let mut block = String::with_capacity(128);
    block.push_str(&format!(
        "\t\tSchema::{}('{}', function($table)\n",
        method, table
    ));
    block.push_str("\t\t{\n");
    for statement in statements {
        block.push_str("\t\t\t");
        block.push_str(&statement.render());
        block.push('\n');
    }
    block.push_str("\t\t});\n");
    block
}

/// Render the migration class for a plan and resolve its timestamped path.
pub fn generate_migration(plan: &MigrationPlan, ctx: &ScaffoldContext) -> GeneratedFile {
    let open = if plan.action == Action::Create {
        "create"
    } else {
        "table"
    };

    let mut content = String::with_capacity(512);
    content.push_str("<?php\n\n");
    content.push_str(&format!("class {}\n{{\n", plan.class_name));

    content.push_str("\tpublic function up()\n\t{\n");
    content.push_str(&schema_block(open, &plan.table_name, &up_statements(plan)));
    content.push_str("\t}\n\n");

    content.push_str("\tpublic function down()\n\t{\n");
    match plan.action {
        Action::Create => {
            content.push_str(&format!("\t\tSchema::drop('{}');\n", plan.table_name));
        }
        _ => {
            content.push_str(&schema_block(
                "table",
                &plan.table_name,
                &down_statements(plan),
            ));
        }
    }
    content.push_str("\t}\n}\n");

    let path = ctx
        .paths
        .migrations_dir
        .join(ctx.migration_filename(&plan.file_stem()));

    tracing::debug!(
        class = %plan.class_name,
        table = %plan.table_name,
        action = %plan.action,
        "assembled migration"
    );

    GeneratedFile::php(path, format_source(&content))
}

// ============================================================================
// Tests
// ============================================================================
