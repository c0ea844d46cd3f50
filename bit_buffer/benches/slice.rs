// benches/slice.rs

use bit_buffer::BitBuffer;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_slice(c: &mut Criterion) {
    let buf = BitBuffer::from_bytes(&[0x96, 0x2c, 0x49, 0x72, 0x2b, 0x80], 48);

    c.bench_function("slice_27_7", |b| {
        b.iter(|| black_box(&buf).slice(black_box(27), black_box(7)).unwrap());
    });

    c.bench_function("read_unsigned_27_7", |b| {
        b.iter(|| black_box(&buf).read_unsigned(black_box(27), black_box(7)).unwrap());
    });
}

fn bench_append(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("append_fixed_width");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut buf = BitBuffer::new();
                for i in 0..size {
                    buf.append_fixed_width(black_box(i as u64), 12);
                }
                buf
            });
        });
    }
    group.finish();
}

fn bench_shift_left(c: &mut Criterion) {
    let sizes = vec![64, 1_024, 16_384];

    let mut group = c.benchmark_group("shift_left");
    for size in sizes {
        let bytes: Vec<u8> = (0..size / 8).map(|i| i as u8).collect();
        let buf = BitBuffer::from_bytes(&bytes, size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut shifted = buf.clone();
                shifted.shift_left(black_box(13));
                shifted
            });
        });
    }
    group.finish();
}

fn bench_cursor(c: &mut Criterion) {
    let mut buf = BitBuffer::new();
    for i in 0..4_096u64 {
        buf.append_fixed_width(i, 12);
    }

    c.bench_function("cursor_read_12", |b| {
        b.iter(|| {
            let mut cursor = buf.cursor();
            let mut sum = 0u64;
            while let Ok(v) = cursor.read_bits(12) {
                sum += v;
            }
            sum
        });
    });
}

criterion_group!(benches, bench_slice, bench_append, bench_shift_left, bench_cursor);
criterion_main!(benches);
