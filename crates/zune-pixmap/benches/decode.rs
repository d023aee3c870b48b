use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use zune_pixmap::Pixmap;

/// Build a P6 image with a comment laden header and a gradient raster
fn make_pixmap(width: usize, height: usize, maxval: u16) -> Vec<u8> {
    let mut data = format!("P6\n# generated\n{width} {height}\n# depth\n{maxval}\n").into_bytes();
    let samples = width * height * 3;

    for i in 0..samples {
        let value = (i % (usize::from(maxval) + 1)) as u16;

        if maxval < 256 {
            data.push(value as u8);
        } else {
            data.extend_from_slice(&value.to_be_bytes());
        }
    }
    data
}

fn bench_parse(c: &mut Criterion) {
    let data = make_pixmap(1920, 1080, 255);
    let mut group = c.benchmark_group("pixmap: parse");

    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("zune-pixmap", |b| {
        b.iter(|| black_box(Pixmap::parse(data.as_slice()).unwrap()))
    });
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixmap: RGBA8888 conversion");

    for maxval in [255_u16, 65535] {
        let data = make_pixmap(1920, 1080, maxval);
        let image = Pixmap::parse(&data).unwrap();
        let mut output = vec![0_u8; image.rgba8888_len()];

        group.throughput(Throughput::Bytes(image.data.len() as u64));

        group.bench_function(format!("maxval {maxval}"), |b| {
            b.iter(|| {
                image.to_rgba8888_into(&mut output).unwrap();
                black_box(&output);
            })
        });
    }
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_parse, bench_convert);

criterion_main!(benches);
