//! Criterion benchmark untuk Writer/Reader
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use nickle::codecs::{Bool, Double, Int64, StringView, UInt32, UnsizedSpan};
use nickle::{ContainerBuffer, FixedBuffer, ReadOnlyBuffer, Reader, Writer};

const RECORD_SIZE: usize = 1 + 4 + 8 + 8;

fn bench_fixed_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_width");
    group.throughput(Throughput::Bytes(RECORD_SIZE as u64));

    // Benchmark encode ke pre-allocated buffer
    group.bench_function("encode_record", |b| {
        let mut buf = FixedBuffer::new(64 * 1024);
        let mut i = 0u64;
        b.iter(|| {
            if buf.available() < RECORD_SIZE {
                buf.reset();
            }
            let mut writer = Writer::new(&mut buf);
            writer.write::<Bool>(black_box(i % 2 == 0)).unwrap();
            writer.write::<UInt32>(black_box(i as u32)).unwrap();
            writer.write::<Int64>(black_box(i as i64)).unwrap();
            writer.write::<Double>(black_box(i as f64)).unwrap();
            i = i.wrapping_add(1);
        });
    });

    // Benchmark decode
    group.bench_function("decode_record", |b| {
        let mut encoded = Vec::new();
        {
            let mut wbuf = ContainerBuffer::new(&mut encoded);
            let mut writer = Writer::new(&mut wbuf);
            writer.write::<Bool>(true).unwrap();
            writer.write::<UInt32>(42).unwrap();
            writer.write::<Int64>(-42).unwrap();
            writer.write::<Double>(4.2).unwrap();
        }
        b.iter(|| {
            let mut rbuf = ReadOnlyBuffer::new(black_box(&encoded));
            let mut reader = Reader::new(&mut rbuf);
            black_box(reader.take::<Bool>().unwrap());
            black_box(reader.take::<UInt32>().unwrap());
            black_box(reader.take::<Int64>().unwrap());
            black_box(reader.take::<Double>().unwrap());
        });
    });

    group.finish();
}

fn bench_payloads(c: &mut Criterion) {
    let mut group = c.benchmark_group("payloads");

    for size in [16usize, 256, 4096].iter() {
        let text = "x".repeat(*size);
        let raw = vec![0xA5u8; *size];
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_function(format!("string_roundtrip_{}", size), |b| {
            let mut target = Vec::with_capacity(*size + 4);
            b.iter(|| {
                target.clear();
                {
                    let mut wbuf = ContainerBuffer::new(&mut target);
                    Writer::new(&mut wbuf)
                        .write::<StringView>(black_box(text.as_str()))
                        .unwrap();
                }
                let mut rbuf = ReadOnlyBuffer::new(&target);
                black_box(Reader::new(&mut rbuf).take::<StringView>().unwrap().len());
            });
        });

        group.bench_function(format!("unsized_roundtrip_{}", size), |b| {
            let mut target = Vec::with_capacity(*size);
            let mut out = vec![0u8; *size];
            b.iter(|| {
                target.clear();
                {
                    let mut wbuf = ContainerBuffer::new(&mut target);
                    Writer::new(&mut wbuf)
                        .write::<UnsizedSpan>(black_box(raw.as_slice()))
                        .unwrap();
                }
                let mut rbuf = ReadOnlyBuffer::new(&target);
                Reader::new(&mut rbuf)
                    .read::<UnsizedSpan>(&mut out[..])
                    .unwrap();
                black_box(&out);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fixed_width, bench_payloads);
criterion_main!(benches);
