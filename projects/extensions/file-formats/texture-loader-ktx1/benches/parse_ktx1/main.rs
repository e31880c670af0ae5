use criterion::{criterion_group, criterion_main, Criterion};
use endian_writer::{EndianWriter, LittleEndianWriter};
use texture_loader_api::TextureLoaderFactory;
use texture_loader_ktx1::Ktx1LoaderFactory;

const KTX1_IDENTIFIER: [u8; 12] = [
    0xAB, 0x4B, 0x54, 0x58, 0x20, 0x31, 0x31, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
];

/// Builds a little-endian RGBA8 container with a full mip chain.
fn build_rgba8_ktx1(width: u32, height: u32, mip_levels: u32) -> Vec<u8> {
    let mut level_sizes = Vec::new();
    let mut total_size = 64usize;
    for level in 0..mip_levels {
        let level_width = (width >> level).max(1) as usize;
        let level_height = (height >> level).max(1) as usize;
        let size = level_width * level_height * 4;
        level_sizes.push(size);
        total_size += 4 + size;
    }

    let mut data = vec![0u8; total_size];
    data[..12].copy_from_slice(&KTX1_IDENTIFIER);

    // Fill each level with a simple pattern and note its prefix offset.
    let mut prefix_offsets = Vec::new();
    let mut offset = 64;
    for size in &level_sizes {
        prefix_offsets.push(offset);
        offset += 4;
        for x in 0..*size {
            data[offset + x] = (x % 256) as u8;
        }
        offset += size;
    }

    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(0x0403_0201, 12); // endianness
        writer.write_u32_at(0x1401, 16); // glType: GL_UNSIGNED_BYTE
        writer.write_u32_at(1, 20); // glTypeSize
        writer.write_u32_at(0x1908, 24); // glFormat: GL_RGBA
        writer.write_u32_at(0x8058, 28); // glInternalFormat: GL_RGBA8
        writer.write_u32_at(0x1908, 32); // glBaseInternalFormat
        writer.write_u32_at(width, 36);
        writer.write_u32_at(height, 40);
        writer.write_u32_at(0, 44); // pixelDepth
        writer.write_u32_at(0, 48); // numberOfArrayElements
        writer.write_u32_at(1, 52); // numberOfFaces
        writer.write_u32_at(mip_levels, 56);
        writer.write_u32_at(0, 60); // bytesOfKeyValueData

        for (prefix_offset, size) in prefix_offsets.iter().zip(&level_sizes) {
            writer.write_u32_at(*size as u32, *prefix_offset as isize);
        }
    }

    data
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("KTX1 Parse");

    // 1024x1024 RGBA8 with the full 11-level mip chain, ~5.6 MiB.
    let data = build_rgba8_ktx1(1024, 1024, 11);
    let factory = Ktx1LoaderFactory;

    group.throughput(criterion::Throughput::Bytes(data.len() as u64));

    group.bench_function("can_create", |b| {
        b.iter(|| factory.can_create(std::hint::black_box(&data)).unwrap())
    });

    group.bench_function("try_create", |b| {
        b.iter(|| factory.try_create(std::hint::black_box(&data)).unwrap())
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
