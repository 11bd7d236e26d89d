use crate::core;
use crate::error::Error;
use crate::render::film;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use rayon::prelude::*;

const MAGIC_NUMBER: i32 = 20000630;
const VERSION: i32 = 2;
const PIXEL_TYPE_FLOAT: i32 = 2;
const COMPRESSION_NONE: u8 = 0;
const LINE_ORDER_INCREASING_Y: u8 = 0;
// Channels must be listed alphabetically.
const CHANNELS: [&str; 3] = ["B", "G", "R"];

/// Encodes the film as a single-part, uncompressed scanline OpenEXR image with 32-bit float
/// B, G and R channels. Values are written as-is, without clamping.
pub fn encode(film: &film::Film) -> std::vec::Vec<u8> {
    let mut buffer = vec![];
    write_header(&mut buffer, film.width, film.height);

    // Scan line number (int); bytes in line (uint); RGB (3 floats * 4 bytes) per pixel.
    let line_size = 4 + 4 + film.width * 4 * CHANNELS.len();
    let data_offset = buffer.len() + 8 * film.height;
    for y in 0..film.height {
        put_u64(&mut buffer, (data_offset + y * line_size) as u64);
    }
    debug_assert_eq!(buffer.len(), data_offset);

    buffer.resize(data_offset + film.height * line_size, 0);
    buffer[data_offset..].par_chunks_mut(line_size).enumerate().for_each(|(y, line)| {
        write_scanline(film, y, line);
    });
    buffer
}

pub fn write<P: AsRef<Path>>(path: P, film: &film::Film) -> Result<(), Error> {
    let bytes = encode(film);
    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    Ok(())
}

fn write_header(buffer: &mut std::vec::Vec<u8>, width: usize, height: usize) {
    put_i32(buffer, MAGIC_NUMBER);
    put_i32(buffer, VERSION);

    let mut channels = vec![];
    for channel in CHANNELS.iter() {
        put_str(&mut channels, channel);
        put_i32(&mut channels, PIXEL_TYPE_FLOAT);
        put_i32(&mut channels, 0); // pLinear and reserved
        put_i32(&mut channels, 1); // xSampling
        put_i32(&mut channels, 1); // ySampling
    }
    channels.push(0);
    put_attr(buffer, "channels", "chlist", &channels);

    put_attr(buffer, "compression", "compression", &[COMPRESSION_NONE]);

    let mut window = vec![];
    for i in [0, 0, width as i32 - 1, height as i32 - 1].iter() {
        put_i32(&mut window, *i);
    }
    put_attr(buffer, "dataWindow", "box2i", &window);
    put_attr(buffer, "displayWindow", "box2i", &window);

    put_attr(buffer, "lineOrder", "lineOrder", &[LINE_ORDER_INCREASING_Y]);

    let mut one = [0u8; 4];
    LittleEndian::write_f32(&mut one, 1.0);
    put_attr(buffer, "pixelAspectRatio", "float", &one);

    put_attr(buffer, "screenWindowCenter", "v2f", &[0u8; 8]);

    let mut screen_width = [0u8; 4];
    LittleEndian::write_f32(&mut screen_width, 1.0);
    put_attr(buffer, "screenWindowWidth", "float", &screen_width);

    buffer.push(0); // End header.
}

/// EXR scanline `y` counts from the top; film row 0 is the bottom.
fn write_scanline(film: &film::Film, y: usize, line: &mut [u8]) {
    LittleEndian::write_i32(&mut line[0..4], y as i32);
    let data_len = (line.len() - 8) as u32;
    LittleEndian::write_u32(&mut line[4..8], data_len);

    let row = film.height - y - 1;
    for col in 0..film.width {
        let color = film.pixels[core::index(row, col, film.width)].color();
        let values = [color.z, color.y, color.x];
        for (c, value) in values.iter().enumerate() {
            let at = 8 + (c * film.width + col) * 4;
            LittleEndian::write_f32(&mut line[at..(at + 4)], *value as f32);
        }
    }
}

fn put_attr(buffer: &mut std::vec::Vec<u8>, name: &str, ty: &str, payload: &[u8]) {
    put_str(buffer, name);
    put_str(buffer, ty);
    put_i32(buffer, payload.len() as i32);
    buffer.extend_from_slice(payload);
}

fn put_str(buffer: &mut std::vec::Vec<u8>, s: &str) {
    buffer.extend_from_slice(s.as_bytes());
    buffer.push(0);
}

// Writes into a Vec cannot fail.
fn put_i32(buffer: &mut std::vec::Vec<u8>, v: i32) {
    let _ = buffer.write_i32::<LittleEndian>(v);
}

fn put_u64(buffer: &mut std::vec::Vec<u8>, v: u64) {
    let _ = buffer.write_u64::<LittleEndian>(v);
}
