use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use stegano_edge_core::{BitWidth, LsbCodec, SelectorConfig};

fn carrier_image() -> RgbImage {
    RgbImage::from_fn(256, 256, |x, y| {
        let block = ((x / 8) + (y / 8)) % 2 == 0;
        let v = if block { 40 } else { 200 };
        Rgb([v, (x as u8) & 0xf0, (y as u8) & 0xf0])
    })
}

pub fn image_decoding(c: &mut Criterion) {
    let selectors = [
        ("Sequential", SelectorConfig::Sequential),
        ("Edge", SelectorConfig::default()),
        (
            "Permuted",
            SelectorConfig::Permuted {
                key: "K1".into(),
                bit_width: BitWidth::new(2).expect("Invalid bit width"),
            },
        ),
    ];

    for (name, config) in selectors {
        let codec = LsbCodec::from_config(&config);
        let mut secret_image = carrier_image();
        let total_bits = codec
            .embed(&mut secret_image, b"Hello World!")
            .expect("Cannot hide secret message");

        c.bench_function(&format!("Image Decoding {name}"), |b| {
            b.iter(|| {
                codec
                    .extract(&secret_image, total_bits)
                    .expect("Failed to unveil 12 bytes");
            })
        });
    }
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
