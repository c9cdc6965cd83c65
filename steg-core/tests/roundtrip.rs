use image::{Rgb, RgbImage};
use steg_core::error::StegError;
use steg_core::{detect, embed, extract, Secret};

fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        *pixel = Rgb([r, g, 128]);
    }
    encode(&img)
}

fn noise_png(width: u32, height: u32, seed: u32) -> Vec<u8> {
    let mut img = RgbImage::new(width, height);
    let mut state = seed | 1;
    for pixel in img.pixels_mut() {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        let r = (state >> 16) as u8;
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        let g = (state >> 16) as u8;
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        let b = (state >> 16) as u8;
        *pixel = Rgb([r, g, b]);
    }
    encode(&img)
}

fn solid_png(width: u32, height: u32, value: u8) -> Vec<u8> {
    encode(&RgbImage::from_pixel(width, height, Rgb([value, value, value])))
}

fn encode(img: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .unwrap();
    bytes
}

#[test]
fn gradient_cover_roundtrips_text_secret() {
    let cover = gradient_png(512, 512);
    let secret = Secret::Text("hello world".into());

    let (stego, metrics) = embed(&cover, "hunter2", secret).unwrap();
    assert!(metrics.psnr > 30.0, "psnr = {}", metrics.psnr);

    let (data, filename, verified, _hash) = extract(&stego, "hunter2").unwrap();
    assert_eq!(data, b"hello world");
    assert_eq!(filename, "secret.txt");
    assert!(verified);
}

#[test]
fn noise_cover_roundtrips_file_secret() {
    let cover = noise_png(256, 256, 99);
    let payload = vec![0x42u8; 1024];
    let secret = Secret::File(payload.clone(), "payload.bin".into());

    let (stego, _) = embed(&cover, "correct horse battery staple", secret).unwrap();
    let (data, filename, verified, _hash) =
        extract(&stego, "correct horse battery staple").unwrap();

    assert_eq!(data, payload);
    assert_eq!(filename, "payload.bin");
    assert!(verified);
}

#[test]
fn solid_cover_roundtrips_single_byte_secret() {
    let cover = solid_png(128, 128, 180);
    let secret = Secret::File(vec![0xFF], "x".into());

    let (stego, _) = embed(&cover, "k", secret).unwrap();
    let (data, _, verified, _) = extract(&stego, "k").unwrap();

    assert_eq!(data, vec![0xFF]);
    assert!(verified);
}

#[test]
fn wrong_passphrase_rejected_on_extract() {
    let cover = gradient_png(96, 96);
    let secret = Secret::Text("classified".into());
    let (stego, _) = embed(&cover, "hunter2", secret).unwrap();

    let err = extract(&stego, "hunter3").unwrap_err();
    assert!(matches!(err, StegError::BadMagic | StegError::AuthFailure));
}

#[test]
fn capacity_exceeded_is_reported_before_writing_pixels() {
    let cover = solid_png(16, 16, 10);
    let secret = Secret::File(vec![0u8; 1_000_000], "huge.bin".into());

    let err = embed(&cover, "k", secret).unwrap_err();
    assert!(matches!(err, StegError::CapacityExceeded { .. }));
}

#[test]
fn detect_label_shifts_after_embedding() {
    let cover = noise_png(200, 200, 7);
    let (clean_score, _) = detect(&cover).unwrap();

    let secret = Secret::File(vec![0xAAu8; 4000], "payload.bin".into());
    let (stego, _) = embed(&cover, "hunter2", secret).unwrap();
    let (stego_score, _) = detect(&stego).unwrap();

    assert!(
        stego_score >= clean_score,
        "expected embedding to not decrease the anomaly score: clean={}, stego={}",
        clean_score,
        stego_score
    );
}

#[test]
fn repeated_embeds_of_the_same_secret_both_round_trip() {
    // Salt/nonce are drawn fresh per embed, so two embeds of the same
    // (cover, passphrase, secret) are not expected to be byte-identical —
    // bit-exact determinism only holds for a fixed salt/nonce, which is
    // covered at the `engine` level. This checks the weaker, still useful
    // property: repeatability of the round trip itself.
    let cover = gradient_png(64, 64);
    let secret = Secret::Text("repeat me".into());

    let (stego_a, _) = embed(&cover, "seed-key", secret.clone()).unwrap();
    let (stego_b, _) = embed(&cover, "seed-key", secret).unwrap();

    let (data_a, _, verified_a, _) = extract(&stego_a, "seed-key").unwrap();
    let (data_b, _, verified_b, _) = extract(&stego_b, "seed-key").unwrap();

    assert_eq!(data_a, b"repeat me");
    assert_eq!(data_b, b"repeat me");
    assert!(verified_a && verified_b);
}

#[test]
fn metrics_capacity_never_exceeds_used_on_success() {
    let cover = noise_png(64, 64, 3);
    let secret = Secret::Text("a modest secret".into());
    let (_, metrics) = embed(&cover, "k", secret).unwrap();

    assert!(metrics.used_bytes <= metrics.capacity_bytes);
    assert!(metrics.mse >= 0.0);
}
