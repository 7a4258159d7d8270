//! Column definitions for the person table.

use tablecore::{CellValue, ColumnDef};

use crate::data::Person;

/// Timestamp cells render as seconds-precision UTC wall time, 19 columns wide.
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The eight leaf columns of the reproduction table, in display order.
///
/// Column ids are the dataset's record keys; the first-name column keeps its key as the
/// visible title. Fixed widths size the numeric and timestamp cells; the name columns fall
/// back to the model default.
pub fn person_columns() -> Vec<ColumnDef<Person>> {
    vec![
        ColumnDef::new("id", "ID", |person: &Person| CellValue::from(person.id)).with_width(6),
        ColumnDef::new("firstName", "firstName", |person: &Person| {
            CellValue::from(person.first_name.as_str())
        }),
        ColumnDef::new("lastName", "Last Name", |person: &Person| {
            CellValue::from(person.last_name.as_str())
        }),
        ColumnDef::new("age", "Age", |person: &Person| CellValue::from(person.age)).with_width(5),
        ColumnDef::new("visits", "Visits", |person: &Person| {
            CellValue::from(person.visits)
        })
        .with_width(6),
        ColumnDef::new("status", "Status", |person: &Person| {
            CellValue::Text(person.status.to_string())
        })
        .with_width(12),
        ColumnDef::new("progress", "Profile Progress", |person: &Person| {
            CellValue::from(person.progress)
        })
        .with_width(10),
        ColumnDef::new("createdAt", "Created At", |person: &Person| {
            CellValue::Text(person.created_at.format(CREATED_AT_FORMAT).to_string())
        })
        .with_width(19),
    ]
}

#[cfg(test)]
mod tests {
    use tablecore::TableModel;

    use super::*;
    use crate::data::make_people;

    #[test]
    fn eight_leaf_columns_in_definition_order() {
        let model = TableModel::new(person_columns(), make_people(1, &[3]));
        let ids: Vec<&str> = model.leaf_columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            ["id", "firstName", "lastName", "age", "visits", "status", "progress", "createdAt"]
        );
        let widths: Vec<u16> = model.leaf_columns().iter().map(|c| c.width).collect();
        assert_eq!(widths, [6, 10, 10, 5, 6, 12, 10, 19]);
        assert_eq!(model.total_width(), 78);
    }

    #[test]
    fn flat_columns_build_a_single_header_row() {
        let model = TableModel::new(person_columns(), Vec::new());
        assert_eq!(model.header_groups().len(), 1);
        let row = &model.header_groups()[0];
        let titles: Vec<&str> = row.headers.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "ID",
                "firstName",
                "Last Name",
                "Age",
                "Visits",
                "Status",
                "Profile Progress",
                "Created At"
            ]
        );
        assert!(row.headers.iter().all(|h| !h.is_placeholder && h.span == 1));
    }

    #[test]
    fn cells_format_the_record_fields() {
        let people = make_people(7, &[2]);
        let first = people[0].clone();
        let model = TableModel::new(person_columns(), people);
        let row = model.row(0).expect("row 0");
        assert_eq!(row.cell("id"), Some(CellValue::Uint(1)));
        assert_eq!(
            row.cell("firstName"),
            Some(CellValue::Text(first.first_name.clone()))
        );
        assert_eq!(row.cell("age"), Some(CellValue::Uint(first.age as u64)));
        assert_eq!(
            row.cell("status"),
            Some(CellValue::Text(first.status.to_string()))
        );
        assert_eq!(
            row.cell("createdAt"),
            Some(CellValue::Text(
                first.created_at.format(CREATED_AT_FORMAT).to_string()
            ))
        );
    }
}
