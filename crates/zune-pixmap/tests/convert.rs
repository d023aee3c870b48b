/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_pixmap::{ConversionErrors, Pixmap};

fn convert(width: usize, height: usize, maxval: u16, data: &[u8]) -> Vec<u8> {
    Pixmap::new(width, height, maxval, data).to_rgba8888()
}

#[test]
fn maxval_one() {
    assert_eq!(
        convert(3, 1, 1, &[0, 0, 1, 0, 1, 0, 1, 0, 0]),
        [0, 0, 255, 255, 0, 255, 0, 255, 255, 0, 0, 255]
    );
}

#[test]
fn small_maxval() {
    assert_eq!(
        convert(1, 3, 10, &[1, 2, 3, 4, 5, 6, 7, 8, 9]),
        [26, 51, 76, 255, 102, 128, 153, 255, 178, 204, 230, 255]
    );
}

#[test]
fn maxval_255_is_identity() {
    let data = [0, 123, 200, 255, 254, 253, 1, 2, 3, 55, 66, 77];

    assert_eq!(
        convert(2, 2, 255, &data),
        [0, 123, 200, 255, 255, 254, 253, 255, 1, 2, 3, 255, 55, 66, 77, 255]
    );
}

#[test]
fn maxval_256_reads_big_endian_pairs() {
    assert_eq!(convert(1, 1, 256, &[0, 255, 1, 0, 0, 128]), [254, 255, 128, 255]);
}

#[test]
fn maxval_65535() {
    assert_eq!(
        convert(1, 1, 65535, &[255, 255, 255, 0, 0, 255]),
        [255, 254, 1, 255]
    );
}

#[test]
fn samples_above_maxval_clamp() {
    assert_eq!(convert(1, 1, 15, &[15, 16, 200]), [255, 255, 255, 255]);
}

#[test]
fn writes_into_destination() {
    let mut destination = [0_u8; 8];
    let image = Pixmap::new(1, 2, 4, &[3, 2, 1, 0, 4, 2]);

    image.to_rgba8888_into(&mut destination).unwrap();

    assert_eq!(destination, [191, 128, 64, 255, 0, 255, 128, 255]);
}

#[test]
fn exact_destination() {
    let data = [7_u8; 2 * 3 * 3];
    let image = Pixmap::new(2, 3, 255, &data);
    let mut destination = vec![0; 2 * 3 * 4];

    image.to_rgba8888_into(&mut destination).unwrap();

    assert_eq!(destination, image.to_rgba8888());
}

#[test]
fn too_small_destination() {
    let data = [0_u8; 2 * 3 * 3];
    let image = Pixmap::new(2, 3, 255, &data);
    let mut destination = vec![0xAA; 2 * 3 * 4 - 1];

    let err = image.to_rgba8888_into(&mut destination).unwrap_err();

    assert_eq!(err, ConversionErrors::DestinationTooSmall(24, 23));
    // nothing is written on failure
    assert!(destination.iter().all(|&byte| byte == 0xAA));
}

#[test]
fn oversized_destination_keeps_tail() {
    let data = [0_u8; 2 * 3 * 3];
    let image = Pixmap::new(2, 3, 255, &data);
    let mut destination = [0xAA_u8; 100];

    image.to_rgba8888_into(&mut destination).unwrap();

    assert!(destination[..24]
        .chunks_exact(4)
        .all(|pixel| pixel == [0, 0, 0, 255]));
    assert!(destination[24..].iter().all(|&byte| byte == 0xAA));
}

#[test]
fn parsed_image_converts() {
    let image = Pixmap::parse(b"P6 1 1 15\n\x0f\x00\xc8").unwrap();

    assert_eq!(image.rgba8888_len(), 4);
    assert_eq!(image.to_rgba8888(), [255, 0, 255, 255]);
}
