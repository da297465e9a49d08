use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fake3d::colors;
use fake3d::prelude::*;
use fake3d::render::{EdgeFunctionRasterizer, FrameBuffer};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn test_cube() -> Cube {
    Cube::new(Vec3::new(0.0, 0.0, 20.0), 10, colors::RED)
}

fn benchmark_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for space in [Space::World, Space::Local] {
        group.bench_with_input(BenchmarkId::new("rotate", space), &space, |b, &space| {
            let mut cube = test_cube();
            b.iter(|| {
                cube.rotate(Axis::Y, black_box(0.01), space);
                cube.translate(Vec3::ZERO);
            });
        });
    }

    group.finish();
}

fn benchmark_project(c: &mut Criterion) {
    let cube = test_cube();
    let screen = Screen::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    let mut projected = ProjectedCube::new();

    c.bench_function("project_cube", |b| {
        b.iter(|| projected.project_from(black_box(&cube), screen));
    });
}

fn benchmark_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");

    let mut cube = test_cube();
    cube.rotate_local(Axis::X, 0.5);
    cube.rotate_local(Axis::Y, 0.5);
    cube.translate(Vec3::ZERO);
    let projected = ProjectedCube::from_cube(&cube, Screen::new(BUFFER_WIDTH, BUFFER_HEIGHT));

    for mode in [RenderMode::Wireframe, RenderMode::Solid] {
        group.bench_with_input(BenchmarkId::new("cube", mode), &mode, |b, &mode| {
            let mut renderer = Renderer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                projected.draw(&mut renderer, black_box(mode), 10.0, colors::WHITE);
            });
        });
    }

    // A single screen-sized triangle, the worst case for the bounding-box scan.
    group.bench_function("large_triangle", |b| {
        let rasterizer = EdgeFunctionRasterizer::new();
        let mut buffer = vec![0u32; (BUFFER_WIDTH * BUFFER_HEIGHT) as usize];
        let points = [
            Vec2::new(50.0, 50.0),
            Vec2::new(750.0, 100.0),
            Vec2::new(400.0, 550.0),
        ];
        b.iter(|| {
            let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
            rasterizer.fill_triangle(black_box(points), &mut fb, 0xFFFF0000);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_transform, benchmark_project, benchmark_draw);
criterion_main!(benches);
