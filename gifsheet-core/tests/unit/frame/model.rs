use super::*;
use std::sync::Arc;

fn rgba(width: u32, height: u32) -> Arc<Vec<u8>> {
    Arc::new(vec![0u8; (width * height * 4) as usize])
}

#[test]
fn new_accepts_matching_buffer() {
    let f = Frame::new(0, rgba(3, 2), 3, 2, 1, 4, 120).unwrap();
    assert_eq!(f.index, 0);
    assert_eq!((f.width, f.height), (3, 2));
    assert_eq!((f.offset_left, f.offset_top), (1, 4));
    assert_eq!(f.duration_ms, 120);
}

#[test]
fn new_rejects_zero_dimensions() {
    let err = Frame::new(0, rgba(1, 1), 0, 1, 0, 0, 0).unwrap_err();
    assert!(matches!(err, GifsheetError::Validation(_)));
    let err = Frame::new(0, rgba(1, 1), 1, 0, 0, 0, 0).unwrap_err();
    assert!(matches!(err, GifsheetError::Validation(_)));
}

#[test]
fn new_rejects_mismatched_buffer_length() {
    let err = Frame::new(7, rgba(2, 2), 3, 2, 0, 0, 0).unwrap_err();
    assert!(matches!(err, GifsheetError::Validation(_)));
    assert!(err.to_string().contains("frame 7"));
}

#[test]
fn remove_frame_closes_gap_without_reindexing() {
    let mut frames = vec![
        Frame::new(0, rgba(1, 1), 1, 1, 0, 0, 10).unwrap(),
        Frame::new(1, rgba(1, 1), 1, 1, 0, 0, 20).unwrap(),
        Frame::new(2, rgba(1, 1), 1, 1, 0, 0, 30).unwrap(),
    ];

    let removed = remove_frame(&mut frames, 1).unwrap();
    assert_eq!(removed.index, 1);
    assert_eq!(frames.len(), 2);
    // Original ordinals survive; only the sequence position shifts.
    assert_eq!(frames[0].index, 0);
    assert_eq!(frames[1].index, 2);
}

#[test]
fn remove_frame_out_of_range_is_none() {
    let mut frames = vec![Frame::new(0, rgba(1, 1), 1, 1, 0, 0, 0).unwrap()];
    assert!(remove_frame(&mut frames, 1).is_none());
    assert_eq!(frames.len(), 1);
}
