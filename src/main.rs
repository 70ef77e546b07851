//! Nickle demo: round-trip scenario + encode/decode benchmark
//!
//! Usage:
//!   RUST_LOG=trace cargo run --release

use std::time::Instant;

use nickle::codecs::{
    Bool, Double, Float, Int64, String, StringView, UInt16, UInt32, UInt64, UnsizedSpan,
};
use nickle::{ContainerBuffer, FixedBuffer, ReadOnlyBuffer, Reader, Writer};

#[allow(clippy::excessive_precision)]
const FLOAT: f32 = 3.1415926935;
#[allow(clippy::excessive_precision)]
const DOUBLE: f64 = 2.71828182845904523;
const RAW: &[u8; 8] = b"AAA\0BBB\0";

fn main() -> nickle::Result<()> {
    env_logger::init();

    println!("🥒 Nickle - Binary Pickling PoC");
    println!("===============================\n");

    roundtrip_scenario()?;

    benchmark_fixed_width()?;

    benchmark_sized()?;

    println!("\n✅ All checks complete!");
    Ok(())
}

fn roundtrip_scenario() -> nickle::Result<()> {
    println!("🔁 Round-trip Scenario");
    println!("----------------------");

    let mut target = Vec::new();
    let mut wbuf = ContainerBuffer::new(&mut target);
    let mut writer = Writer::new(&mut wbuf);

    writer.write::<Bool>(false)?;
    writer.write::<Bool>(true)?;
    writer.write::<UInt16>(32123)?;
    writer.write::<UInt32>(1_593_847_192)?;
    writer.write::<Int64>(-0x7E8C_A925_3104_BDFC)?;
    writer.write::<UInt64>(0xCE8C_A925_3104_BDF7)?;
    writer.write::<Float>(FLOAT)?;
    writer.write::<Double>(DOUBLE)?;
    writer.write::<StringView>("Hello world")?;
    writer.write::<UnsizedSpan>(&RAW[..])?;

    println!("  Encoded size: {} bytes", target.len());

    let mut rbuf = ReadOnlyBuffer::new(&target);
    let mut reader = Reader::new(&mut rbuf);

    let flags = (reader.take::<Bool>()?, reader.take::<Bool>()?);
    let uint16 = reader.take::<UInt16>()?;
    let uint32 = reader.take::<UInt32>()?;
    let int64 = reader.take::<Int64>()?;
    let uint64 = reader.take::<UInt64>()?;
    let float = reader.take::<Float>()?;
    let double = reader.take::<Double>()?;
    let text = reader.take::<String>()?;
    let mut raw = [0u8; 8];
    reader.read::<UnsizedSpan>(&mut raw[..])?;
    reader.finish()?;

    println!("  Bool:    {:?}", flags);
    println!("  UInt16:  {}", uint16);
    println!("  UInt32:  {}", uint32);
    println!("  Int64:   {:#x}", int64);
    println!("  UInt64:  {:#x}", uint64);
    println!("  Float:   {} (bits match: {})", float, float.to_bits() == FLOAT.to_bits());
    println!("  Double:  {} (bits match: {})", double, double.to_bits() == DOUBLE.to_bits());
    println!("  String:  {:?}", text);
    println!("  Raw:     {:?}\n", raw);

    Ok(())
}

fn benchmark_fixed_width() -> nickle::Result<()> {
    println!("📊 Fixed-Width Benchmark (pre-allocated buffer)");
    println!("-----------------------------------------------");

    const ITERATIONS: usize = 1_000_000;
    const RECORD_SIZE: usize = 1 + 4 + 8 + 8;

    let mut buf = FixedBuffer::new(1024 * 1024);

    // Benchmark encode
    let start = Instant::now();
    for i in 0..ITERATIONS {
        if buf.available() < RECORD_SIZE {
            buf.reset();
        }
        let mut writer = Writer::new(&mut buf);
        writer.write::<Bool>(i % 2 == 0)?;
        writer.write::<UInt32>(i as u32)?;
        writer.write::<UInt64>(i as u64)?;
        writer.write::<Double>(i as f64)?;
    }
    let encode_duration = start.elapsed();

    // Prepare buffer untuk decode benchmark
    buf.reset();
    const RECORDS: usize = 10_000;
    {
        let mut writer = Writer::new(&mut buf);
        for i in 0..RECORDS {
            writer.write::<Bool>(i % 2 == 0)?;
            writer.write::<UInt32>(i as u32)?;
            writer.write::<UInt64>(i as u64)?;
            writer.write::<Double>(i as f64)?;
        }
    }
    let encoded = buf.as_bytes().to_vec();

    // Benchmark decode
    let start = Instant::now();
    for _ in 0..100 {
        let mut rbuf = ReadOnlyBuffer::new(&encoded);
        let mut reader = Reader::new(&mut rbuf);
        for _ in 0..RECORDS {
            reader.take::<Bool>()?;
            reader.take::<UInt32>()?;
            reader.take::<UInt64>()?;
            reader.take::<Double>()?;
        }
    }
    let decode_duration = start.elapsed();

    let encode_ns = encode_duration.as_nanos() as f64 / ITERATIONS as f64;
    let decode_ns = decode_duration.as_nanos() as f64 / (100 * RECORDS) as f64;

    println!("  Record size: {} bytes", RECORD_SIZE);
    println!("  Encode ops: {}", ITERATIONS);
    println!(
        "  Encode latency: {:.2} ns/record ({:.3} μs/record)",
        encode_ns,
        encode_ns / 1000.0
    );
    println!(
        "  Decode latency: {:.2} ns/record ({:.3} μs/record)",
        decode_ns,
        decode_ns / 1000.0
    );
    println!(
        "  Encode throughput: {:.2} M records/sec\n",
        ITERATIONS as f64 / encode_duration.as_secs_f64() / 1_000_000.0
    );

    Ok(())
}

fn benchmark_sized() -> nickle::Result<()> {
    println!("📊 Sized Payload Benchmark (growable buffer)");
    println!("--------------------------------------------");

    const ITERATIONS: usize = 100_000;
    const PAYLOAD_SIZE: usize = 64;

    let payload = "x".repeat(PAYLOAD_SIZE);
    let mut target = Vec::with_capacity(ITERATIONS * (PAYLOAD_SIZE + 4));

    let start = Instant::now();
    {
        let mut wbuf = ContainerBuffer::new(&mut target);
        let mut writer = Writer::new(&mut wbuf);
        for _ in 0..ITERATIONS {
            writer.write::<StringView>(payload.as_str())?;
        }
    }
    let encode_duration = start.elapsed();

    let start = Instant::now();
    let mut rbuf = ReadOnlyBuffer::new(&target);
    let mut reader = Reader::new(&mut rbuf);
    let mut total = 0usize;
    for _ in 0..ITERATIONS {
        total += reader.take::<StringView>()?.len();
    }
    let decode_duration = start.elapsed();

    println!("  Payload size: {} bytes", PAYLOAD_SIZE);
    println!(
        "  Encode latency: {:.2} ns/op",
        encode_duration.as_nanos() as f64 / ITERATIONS as f64
    );
    println!(
        "  Decode latency: {:.2} ns/op (zero-copy view)",
        decode_duration.as_nanos() as f64 / ITERATIONS as f64
    );
    println!(
        "  Write throughput: {:.2} MB/sec",
        (ITERATIONS * PAYLOAD_SIZE) as f64 / encode_duration.as_secs_f64() / 1_000_000.0
    );
    println!("  Bytes decoded: {}", total);

    Ok(())
}
