//! Synthetic MP3/FLAC files for tests
//!
//! Everything is assembled byte by byte so the fixtures carry exactly the tag
//! containers a test wants to see removed.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

// =============================================================================
// MP3
// =============================================================================

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, no padding
const MPEG_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
const MPEG_FRAME_LEN: usize = 417;

/// `frames` silent MPEG frames
pub fn mpeg_audio(frames: usize) -> Vec<u8> {
    let mut audio = Vec::with_capacity(frames * MPEG_FRAME_LEN);
    for _ in 0..frames {
        audio.extend_from_slice(&MPEG_HEADER);
        audio.resize(audio.len() + MPEG_FRAME_LEN - MPEG_HEADER.len(), 0);
    }
    audio
}

fn synchsafe(n: u32) -> [u8; 4] {
    [
        ((n >> 21) & 0x7F) as u8,
        ((n >> 14) & 0x7F) as u8,
        ((n >> 7) & 0x7F) as u8,
        (n & 0x7F) as u8,
    ]
}

fn id3v24_frame(id: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut frame = id.to_vec();
    frame.extend_from_slice(&synchsafe(body.len() as u32));
    frame.extend_from_slice(&[0, 0]);
    frame.extend_from_slice(body);
    frame
}

/// UTF-8 text frame (TPE1, TIT2, TALB, ...)
pub fn id3v24_text(id: &[u8; 4], text: &str) -> Vec<u8> {
    let mut body = vec![3u8];
    body.extend_from_slice(text.as_bytes());
    id3v24_frame(id, &body)
}

/// Comment frame in English with an empty description
pub fn id3v24_comment(text: &str) -> Vec<u8> {
    let mut body = vec![3u8];
    body.extend_from_slice(b"eng\0");
    body.extend_from_slice(text.as_bytes());
    id3v24_frame(b"COMM", &body)
}

/// Front-cover picture frame
pub fn id3v24_picture(data: &[u8]) -> Vec<u8> {
    let mut body = vec![0u8];
    body.extend_from_slice(b"image/png\0");
    body.push(3);
    body.push(0);
    body.extend_from_slice(data);
    id3v24_frame(b"APIC", &body)
}

/// ID3v2.4 tag wrapping the given frames
pub fn id3v24_tag(frames: &[Vec<u8>]) -> Vec<u8> {
    let body: Vec<u8> = frames.concat();
    let mut tag = b"ID3\x04\x00\x00".to_vec();
    tag.extend_from_slice(&synchsafe(body.len() as u32));
    tag.extend_from_slice(&body);
    tag
}

/// 128-byte ID3v1 tag
pub fn id3v1_tag(artist: &str, title: &str) -> Vec<u8> {
    fn field(text: &str, len: usize) -> Vec<u8> {
        let mut bytes = text.as_bytes().to_vec();
        bytes.resize(len, 0);
        bytes
    }

    let mut tag = b"TAG".to_vec();
    tag.extend(field(title, 30));
    tag.extend(field(artist, 30));
    tag.extend(field("Some Album", 30));
    tag.extend(field("1999", 4));
    tag.extend(field("an id3v1 comment", 30));
    tag.push(17);
    assert_eq!(tag.len(), 128);
    tag
}

/// APEv2 tag with header and footer
pub fn ape_tag(items: &[(&str, &str)]) -> Vec<u8> {
    let mut body = Vec::new();
    for (key, value) in items {
        body.extend_from_slice(&(value.len() as u32).to_le_bytes());
        body.extend_from_slice(&0u32.to_le_bytes());
        body.extend_from_slice(key.as_bytes());
        body.push(0);
        body.extend_from_slice(value.as_bytes());
    }

    let size = (body.len() + 32) as u32;
    let frame = |flags: u32| {
        let mut f = b"APETAGEX".to_vec();
        f.extend_from_slice(&2000u32.to_le_bytes());
        f.extend_from_slice(&size.to_le_bytes());
        f.extend_from_slice(&(items.len() as u32).to_le_bytes());
        f.extend_from_slice(&flags.to_le_bytes());
        f.extend_from_slice(&[0u8; 8]);
        f
    };

    let mut tag = frame(0xA000_0000);
    tag.extend_from_slice(&body);
    tag.extend(frame(0x8000_0000));
    tag
}

/// Lyrics3v2 block
pub fn lyrics3v2(lyrics: &str) -> Vec<u8> {
    let mut block = b"LYRICSBEGIN".to_vec();
    block.extend_from_slice(format!("LYR{:05}{}", lyrics.len(), lyrics).as_bytes());
    let size = block.len();
    block.extend_from_slice(format!("{:06}LYRICS200", size).as_bytes());
    block
}

/// Number of audio frames in `dirty_mp3`
pub const DIRTY_MP3_FRAMES: usize = 8;

/// An MP3 carrying every tag container: ID3v2.4 (with album, genre, comment
/// and cover art), APEv2, Lyrics3v2 and ID3v1
pub fn dirty_mp3() -> Vec<u8> {
    let mut bytes = id3v24_tag(&[
        id3v24_text(b"TPE1", "Old Artist"),
        id3v24_text(b"TIT2", "Old Title"),
        id3v24_text(b"TALB", "Old Album"),
        id3v24_text(b"TCON", "Electronic"),
        id3v24_comment("ripped by someone"),
        id3v24_picture(&[0x89, b'P', b'N', b'G', 1, 2, 3, 4]),
    ]);
    bytes.extend(mpeg_audio(DIRTY_MP3_FRAMES));
    bytes.extend(ape_tag(&[("Album", "Ape Album"), ("Comment", "ape comment")]));
    bytes.extend(lyrics3v2("la la la"));
    bytes.extend(id3v1_tag("Old Artist", "Old Title"));
    bytes
}

/// Length of the ID3v2 tag at the start of `bytes` (0 if none)
pub fn id3v2_len(bytes: &[u8]) -> usize {
    if bytes.len() < 10 || &bytes[..3] != b"ID3" {
        return 0;
    }
    let size = bytes[6..10]
        .iter()
        .fold(0usize, |acc, b| (acc << 7) | usize::from(*b));
    10 + size
}

// =============================================================================
// FLAC
// =============================================================================

pub const FLAC_STREAMINFO: u8 = 0;
pub const FLAC_PADDING: u8 = 1;
pub const FLAC_VORBIS_COMMENT: u8 = 4;
pub const FLAC_PICTURE: u8 = 6;

/// Stand-in for encoded audio frames after the metadata blocks
pub const FLAC_AUDIO: &[u8] = &[0xFF, 0xF8, 0x69, 0x08, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55];

fn flac_block(block_type: u8, last: bool, body: &[u8]) -> Vec<u8> {
    let len = body.len() as u32;
    let mut block = vec![block_type | if last { 0x80 } else { 0 }];
    block.extend_from_slice(&len.to_be_bytes()[1..]);
    block.extend_from_slice(body);
    block
}

fn stream_info() -> Vec<u8> {
    let mut body = Vec::with_capacity(34);
    body.extend_from_slice(&4096u16.to_be_bytes());
    body.extend_from_slice(&4096u16.to_be_bytes());
    body.extend_from_slice(&[0, 0, 0]);
    body.extend_from_slice(&[0, 0, 0]);
    // 20 bits sample rate, 3 bits channels-1, 5 bits bps-1, 36 bits total samples
    let packed: u64 = (44_100u64 << 44) | (1u64 << 41) | (15u64 << 36) | 44_100u64;
    body.extend_from_slice(&packed.to_be_bytes());
    body.extend_from_slice(&[0u8; 16]);
    assert_eq!(body.len(), 34);
    body
}

fn vorbis_comment(fields: &[(&str, &str)]) -> Vec<u8> {
    let vendor = b"reference libFLAC 1.4.3";
    let mut body = (vendor.len() as u32).to_le_bytes().to_vec();
    body.extend_from_slice(vendor);
    body.extend_from_slice(&(fields.len() as u32).to_le_bytes());
    for (key, value) in fields {
        let entry = format!("{}={}", key, value);
        body.extend_from_slice(&(entry.len() as u32).to_le_bytes());
        body.extend_from_slice(entry.as_bytes());
    }
    body
}

fn picture(data: &[u8]) -> Vec<u8> {
    let mime = b"image/png";
    let mut body = 3u32.to_be_bytes().to_vec();
    body.extend_from_slice(&(mime.len() as u32).to_be_bytes());
    body.extend_from_slice(mime);
    body.extend_from_slice(&0u32.to_be_bytes());
    for dim in [1u32, 1, 24, 0] {
        body.extend_from_slice(&dim.to_be_bytes());
    }
    body.extend_from_slice(&(data.len() as u32).to_be_bytes());
    body.extend_from_slice(data);
    body
}

/// A FLAC stream with a populated Vorbis comment block, cover art and padding
pub fn dirty_flac() -> Vec<u8> {
    let mut bytes = b"fLaC".to_vec();
    bytes.extend(flac_block(FLAC_STREAMINFO, false, &stream_info()));
    bytes.extend(flac_block(
        FLAC_VORBIS_COMMENT,
        false,
        &vorbis_comment(&[
            ("ARTIST", "Old Artist"),
            ("TITLE", "Old Title"),
            ("ALBUM", "Old Album"),
            ("GENRE", "Techno"),
            ("COMMENT", "ripped by someone"),
        ]),
    ));
    bytes.extend(flac_block(
        FLAC_PICTURE,
        false,
        &picture(&[0x89, b'P', b'N', b'G', 9, 9, 9]),
    ));
    bytes.extend(flac_block(FLAC_PADDING, true, &[0u8; 64]));
    bytes.extend_from_slice(FLAC_AUDIO);
    bytes
}

/// Metadata block types in stream order
pub fn flac_block_types(bytes: &[u8]) -> Vec<u8> {
    assert_eq!(&bytes[..4], b"fLaC", "stream must start with fLaC");
    let mut types = Vec::new();
    let mut pos = 4;
    loop {
        let header = bytes[pos];
        let len = u32::from_be_bytes([0, bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]]) as usize;
        types.push(header & 0x7F);
        pos += 4 + len;
        if header & 0x80 != 0 {
            break;
        }
    }
    types
}

// =============================================================================
// Helpers
// =============================================================================

pub fn write(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(&path, bytes).expect("Failed to write fixture");
    path
}
