use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use stackgrid::{Frame, Grid, Placement, Size, Text};

fn dashboard() -> Grid {
    let mut sidebar = Grid::new();
    for idx in 0..6 {
        sidebar.add_item(Text::new(format!("entry {idx}")), Placement::column(0));
    }

    let body = Grid::new()
        .with_item(Frame::new("header"), Placement::column(0))
        .with_item(Frame::new("timeline\n".repeat(12)), Placement::column(0).expand())
        .with_item(Frame::new("status"), Placement::column(0));

    Grid::new()
        .with_item(Frame::new(sidebar), Placement::column(0))
        .with_item(body, Placement::column(1).expand())
        .with_item(Frame::new("details"), Placement::column(2))
}

fn render_dashboard(c: &mut Criterion) {
    let mut grid = dashboard();
    grid.set_size(160, 48);
    c.bench_function("render_dashboard", |b| {
        b.iter(|| black_box(grid.render()));
    });
}

fn solve_many_rows(c: &mut Criterion) {
    let mut grid = Grid::new();
    for idx in 0..200u16 {
        let placement = Placement::column(idx % 4);
        let placement = if idx % 7 == 0 {
            placement.expand()
        } else {
            placement
        };
        grid.add_item(Text::new(format!("row {idx}\nline two")), placement);
    }
    c.bench_function("solve_many_rows", |b| {
        b.iter(|| black_box(grid.solve(black_box(Size::new(200, 600)))));
    });
}

criterion_group!(benches, render_dashboard, solve_many_rows);
criterion_main!(benches);
