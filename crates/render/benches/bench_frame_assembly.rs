use std::hint::black_box;
use std::time::Instant;

use shooter_common::{Point3, Rgb};
use shooter_geom::{creature, uv_sphere, Mesh};
use shooter_render::FrameBuffer;

fn make_scene(targets: usize, fireballs: usize) -> Vec<(Mesh, Rgb)> {
    let mut scene = Vec::with_capacity(targets + fireballs);
    for i in 0..targets {
        let mut mesh = creature();
        mesh.scale(0.1);
        mesh.translate(Point3::new(i as f32, 0.0, 0.0));
        scene.push((mesh, Rgb::new(0.5, 0.5, 0.5)));
    }
    for i in 0..fireballs {
        let mut mesh = uv_sphere(0.5, 20);
        mesh.translate(Point3::new(0.0, i as f32, 0.0));
        scene.push((mesh, Rgb::BLACK));
    }
    scene
}

fn bench_assemble(targets: usize, fireballs: usize, iterations: usize) {
    let scene = make_scene(targets, fireballs);
    let mut buffer = FrameBuffer::new();

    let start = Instant::now();
    for _ in 0..iterations {
        buffer.clear();
        for (mesh, color) in &scene {
            buffer.add(black_box(&mesh.triangles), *color, &mesh.texcoords);
        }
        black_box(buffer.size());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  assemble ({targets} targets, {fireballs} fireballs, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}"
    );
}

fn bench_sphere(triangle_count: usize, iterations: usize) {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(uv_sphere(black_box(0.5), black_box(triangle_count)));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  uv_sphere ({triangle_count}, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn main() {
    println!("=== Frame Assembly Benchmarks ===\n");

    println!("Buffer assembly:");
    bench_assemble(10, 2, 1000);
    bench_assemble(50, 10, 200);
    bench_assemble(200, 50, 20);

    println!("\nSphere tessellation:");
    bench_sphere(20, 1000);
    bench_sphere(64, 100);

    println!("\n=== Done ===");
}
