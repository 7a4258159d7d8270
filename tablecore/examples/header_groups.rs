// Example: grouped header layout and cell iteration.
use tablecore::{CellValue, ColumnDef, TableModel};

struct Reading {
    sensor: &'static str,
    low: i64,
    high: i64,
}

fn main() {
    let columns = vec![
        ColumnDef::new("sensor", "Sensor", |r: &Reading| CellValue::from(r.sensor)).with_width(8),
        ColumnDef::group(
            "range",
            "Range",
            vec![
                ColumnDef::new("low", "Low", |r: &Reading| CellValue::Int(r.low)).with_width(6),
                ColumnDef::new("high", "High", |r: &Reading| CellValue::Int(r.high)).with_width(6),
            ],
        ),
    ];
    let data = vec![
        Reading {
            sensor: "intake",
            low: -3,
            high: 41,
        },
        Reading {
            sensor: "exhaust",
            low: 18,
            high: 97,
        },
    ];
    let model = TableModel::new(columns, data);

    for group in model.header_groups() {
        for header in &group.headers {
            let title = if header.is_placeholder {
                "(placeholder)"
            } else {
                header.title.as_str()
            };
            print!("[{title} span={} w={}] ", header.span, header.width);
        }
        println!();
    }
    for row in model.rows() {
        row.for_each_cell(|column, value| print!("{}={value} ", column.id));
        println!();
    }
}
