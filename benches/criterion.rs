use criterion::{criterion_group, criterion_main, Criterion};
use doku::Grid;

fn read_sudokus(sudokus_str: &str) -> Vec<Grid> {
    sudokus_str
        .lines()
        .map(|line| Grid::from_str_line(line).unwrap_or_else(|err| panic!("{:?}", err)))
        .collect()
}

fn easy_sudokus_solve_one(c: &mut Criterion) {
    let sudokus = read_sudokus(include_str!("../sudokus/easy_sudokus.txt"));
    let mut iter = sudokus.iter().cycle().copied();
    c.bench_function("easy_sudokus_solve_one", |b| {
        b.iter(|| iter.next().unwrap().solve_one())
    });
}

fn easy_sudokus_solve_all(c: &mut Criterion) {
    let sudokus = read_sudokus(include_str!("../sudokus/easy_sudokus.txt"));
    let mut iter = sudokus.iter().cycle().copied();
    c.bench_function("easy_sudokus_solve_all", |b| {
        b.iter(|| iter.next().unwrap().solve_all())
    });
}

criterion_group!(benches, easy_sudokus_solve_one, easy_sudokus_solve_all);
criterion_main!(benches);
