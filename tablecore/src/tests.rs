use crate::*;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

struct Item {
    name: &'static str,
    qty: u64,
    children: Vec<Item>,
}

fn item(name: &'static str, qty: u64) -> Item {
    Item {
        name,
        qty,
        children: Vec::new(),
    }
}

fn name_col() -> ColumnDef<Item> {
    ColumnDef::new("name", "Name", |it: &Item| CellValue::from(it.name))
}

fn qty_col() -> ColumnDef<Item> {
    ColumnDef::new("qty", "Qty", |it: &Item| CellValue::Uint(it.qty)).with_width(4)
}

#[derive(Clone, Copy)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }
}

#[test]
fn flat_columns_build_a_single_header_row() {
    let model = TableModel::new(vec![name_col(), qty_col()], vec![item("ore", 3)]);

    assert_eq!(model.leaf_columns().len(), 2);
    assert_eq!(model.leaf_columns()[0].position, 0);
    assert_eq!(model.leaf_columns()[1].position, 1);

    let groups = model.header_groups();
    assert_eq!(groups.len(), 1);
    let bottom = &groups[0];
    assert_eq!(bottom.depth, 0);
    assert_eq!(bottom.headers.len(), 2);
    assert!(
        bottom
            .headers
            .iter()
            .all(|h| !h.is_placeholder && h.span == 1)
    );
    assert_eq!(bottom.headers[0].title, "Name");
    assert_eq!(bottom.headers[1].title, "Qty");
}

#[test]
fn grouped_columns_span_their_leaves() {
    let columns = vec![
        name_col(),
        ColumnDef::group(
            "stats",
            "Stats",
            vec![
                qty_col(),
                ColumnDef::new("double", "Double", |it: &Item| CellValue::Uint(it.qty * 2))
                    .with_width(6),
            ],
        ),
    ];
    let model = TableModel::new(columns, Vec::new());

    let groups = model.header_groups();
    assert_eq!(groups.len(), 2);

    // Top row: a placeholder over `name`, then the group spanning its two leaves.
    let top = &groups[0];
    assert_eq!(top.headers.len(), 2);
    assert!(top.headers[0].is_placeholder);
    assert_eq!(top.headers[0].column_id, "name");
    assert_eq!(top.headers[0].span, 1);
    assert_eq!(top.headers[1].column_id, "stats");
    assert_eq!(top.headers[1].title, "Stats");
    assert_eq!(top.headers[1].span, 2);
    assert_eq!(top.headers[1].width, 4 + 6);

    // Bottom row: every real leaf header in column order.
    let bottom = &groups[1];
    assert_eq!(bottom.headers.len(), 3);
    assert!(bottom.headers.iter().all(|h| !h.is_placeholder));
    assert_eq!(bottom.headers[0].title, "Name");
    assert_eq!(bottom.headers[1].title, "Qty");
    assert_eq!(bottom.headers[2].title, "Double");

    for group in groups {
        let spans: usize = group.headers.iter().map(|h| h.span).sum();
        assert_eq!(spans, model.leaf_columns().len());
    }
}

#[test]
fn nested_groups_pad_shallow_leaves_with_placeholders() {
    let columns = vec![ColumnDef::group(
        "outer",
        "Outer",
        vec![
            ColumnDef::group("inner", "Inner", vec![name_col()]),
            qty_col(),
        ],
    )];
    let model = TableModel::new(columns, Vec::new());

    let groups = model.header_groups();
    assert_eq!(groups.len(), 3);

    // depth 0: the outer group spans both leaves.
    assert_eq!(groups[0].headers.len(), 1);
    assert_eq!(groups[0].headers[0].column_id, "outer");
    assert_eq!(groups[0].headers[0].span, 2);

    // depth 1: the inner group over `name`, a placeholder over `qty`.
    assert_eq!(groups[1].headers.len(), 2);
    assert_eq!(groups[1].headers[0].column_id, "inner");
    assert!(!groups[1].headers[0].is_placeholder);
    assert!(groups[1].headers[1].is_placeholder);
    assert_eq!(groups[1].headers[1].column_id, "qty");

    // depth 2: real leaf headers only.
    assert_eq!(groups[2].headers.len(), 2);
    assert!(groups[2].headers.iter().all(|h| !h.is_placeholder));
}

#[test]
fn default_width_applies_when_unset() {
    let model = TableModel::new(vec![name_col(), qty_col()], Vec::new());
    assert_eq!(model.leaf_columns()[0].width, DEFAULT_COLUMN_WIDTH);
    assert_eq!(model.leaf_columns()[1].width, 4);
    assert_eq!(model.total_width(), DEFAULT_COLUMN_WIDTH as u32 + 4);
}

#[test]
fn cells_evaluate_accessors_against_the_row_record() {
    let model = TableModel::new(
        vec![name_col(), qty_col()],
        vec![item("ore", 3), item("ingot", 12)],
    );
    assert_eq!(model.row_count(), 2);

    let row = model.row(1).unwrap();
    assert_eq!(row.index(), 1);
    assert_eq!(row.cell("name"), Some(CellValue::Text(String::from("ingot"))));
    assert_eq!(row.cell("qty"), Some(CellValue::Uint(12)));
    assert_eq!(row.cell_at(0), Some(CellValue::Text(String::from("ingot"))));
    assert_eq!(row.cell("missing"), None);
    assert_eq!(row.cell_at(9), None);

    assert!(model.row(2).is_none());
}

#[test]
fn for_each_cell_follows_leaf_column_order() {
    let model = TableModel::new(vec![name_col(), qty_col()], vec![item("ore", 3)]);
    let row = model.row(0).unwrap();

    let mut seen = Vec::new();
    row.for_each_cell(|column, value| seen.push((column.id.clone(), value)));
    assert_eq!(
        seen,
        vec![
            (String::from("name"), CellValue::Text(String::from("ore"))),
            (String::from("qty"), CellValue::Uint(3)),
        ]
    );
}

#[test]
fn sub_rows_read_through_the_configured_hook() {
    let mut parent = item("parent", 1);
    parent.children.push(item("child", 2));

    let model = TableModel::new(vec![name_col()], vec![parent])
        .with_get_sub_rows(|it: &Item| it.children.as_slice());

    // The core row model stays top-level.
    assert_eq!(model.row_count(), 1);

    let row = model.row(0).unwrap();
    assert_eq!(row.sub_rows().len(), 1);
    assert_eq!(row.sub_rows()[0].name, "child");
}

#[test]
fn sub_rows_default_to_empty() {
    let model = TableModel::new(vec![name_col()], vec![item("solo", 1)]);
    assert!(model.row(0).unwrap().sub_rows().is_empty());
}

#[test]
fn empty_data_still_builds_headers() {
    let model = TableModel::new(vec![name_col(), qty_col()], Vec::new());
    assert_eq!(model.row_count(), 0);
    assert!(model.row(0).is_none());
    assert_eq!(model.header_groups().len(), 1);
    assert_eq!(model.rows().count(), 0);
}

#[test]
fn empty_columns_build_an_empty_grid() {
    let model = TableModel::new(Vec::new(), vec![item("ore", 3)]);
    assert!(model.leaf_columns().is_empty());
    assert!(model.header_groups().is_empty());
    assert_eq!(model.total_width(), 0);
    assert_eq!(model.row(0).unwrap().cell_at(0), None);
}

#[test]
fn cell_values_display_plainly() {
    assert_eq!(alloc::format!("{}", CellValue::Empty), "");
    assert_eq!(alloc::format!("{}", CellValue::Text(String::from("hi"))), "hi");
    assert_eq!(alloc::format!("{}", CellValue::Int(-4)), "-4");
    assert_eq!(alloc::format!("{}", CellValue::Uint(7)), "7");
    assert_eq!(alloc::format!("{}", CellValue::Float(2.5)), "2.5");
    assert_eq!(alloc::format!("{}", CellValue::from("str")), "str");
    assert_eq!(alloc::format!("{}", CellValue::from(3u32)), "3");
}

fn random_columns(rng: &mut Lcg, depth: usize, counter: &mut usize) -> Vec<ColumnDef<Item>> {
    let n = rng.gen_range_usize(1, 5);
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let id = alloc::format!("c{}", *counter);
        *counter += 1;
        if depth > 0 && rng.gen_range_usize(0, 3) == 0 {
            out.push(ColumnDef::group(
                id.clone(),
                id,
                random_columns(rng, depth - 1, counter),
            ));
        } else {
            let mut column = ColumnDef::new(id.clone(), id, |it: &Item| CellValue::Uint(it.qty));
            if rng.gen_range_usize(0, 2) == 0 {
                column = column.with_width(rng.gen_range_usize(3, 20) as u16);
            }
            out.push(column);
        }
    }
    out
}

#[test]
fn property_header_rows_cover_every_leaf() {
    for seed in [1u64, 2, 3, 7, 42, 999] {
        let mut rng = Lcg::new(seed);
        let mut counter = 0usize;
        let columns = random_columns(&mut rng, 2, &mut counter);
        let model = TableModel::new(columns, Vec::new());

        let leaf_count = model.leaf_columns().len();
        let total_width = model.total_width();
        assert!(leaf_count > 0);

        for group in model.header_groups() {
            let spans: usize = group.headers.iter().map(|h| h.span).sum();
            assert_eq!(spans, leaf_count, "seed={seed} depth={}", group.depth);
            let widths: u32 = group.headers.iter().map(|h| h.width as u32).sum();
            assert_eq!(widths, total_width, "seed={seed} depth={}", group.depth);
        }

        // Bottom row carries every real leaf header, in leaf order.
        let bottom = model.header_groups().last().unwrap();
        assert_eq!(bottom.headers.len(), leaf_count);
        for (header, leaf) in bottom.headers.iter().zip(model.leaf_columns()) {
            assert!(!header.is_placeholder);
            assert_eq!(header.column_id, leaf.id);
            assert_eq!(header.span, 1);
            assert_eq!(header.width, leaf.width);
        }
    }
}
